//! View-models
//!
//! Each view-model holds one [`Loadable`] per operation it drives and a
//! [`TaskScope`] for work spawned on behalf of its screen. Screens watch the
//! state streams; every operation moves `Idle -> Loading -> Success | Error`
//! and may start over from any state.
//!
//! Operations come in two forms: an async method that performs the
//! transition inline, and a `spawn_*` variant that runs it on the scope.
//! Dropping the view-model aborts whatever is still in flight.

pub mod blocks;
pub mod classes;
pub mod clubs;
pub mod evaluations;
pub mod gallery;
pub mod login;
pub mod profile;
pub mod schedule;
pub mod users;

pub use blocks::AdminBlocksViewModel;
pub use classes::ClassesViewModel;
pub use clubs::ClubsViewModel;
pub use evaluations::EvaluationsViewModel;
pub use gallery::GalleryViewModel;
pub use login::LoginViewModel;
pub use profile::ProfileViewModel;
pub use schedule::ScheduleClassViewModel;
pub use users::CreateUserViewModel;

use std::future::Future;
use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::shared::Outcome;

/// Screen-facing state of one operation
#[derive(Debug, Clone, PartialEq)]
pub enum UiState<T> {
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> UiState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, UiState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            UiState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            UiState::Error(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> Default for UiState<T> {
    fn default() -> Self {
        UiState::Idle
    }
}

impl<T> From<Outcome<T>> for UiState<T> {
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Success(value) => UiState::Success(value),
            Outcome::Error(message) => UiState::Error(message),
        }
    }
}

/// A [`UiState`] cell published through a watch channel.
///
/// Clones share the same cell, so a spawned task can update the state a
/// screen is watching.
#[derive(Debug)]
pub struct Loadable<T> {
    tx: Arc<watch::Sender<UiState<T>>>,
}

impl<T> Clone for Loadable<T> {
    fn clone(&self) -> Self {
        Self {
            tx: Arc::clone(&self.tx),
        }
    }
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        let (tx, _rx) = watch::channel(UiState::Idle);
        Self { tx: Arc::new(tx) }
    }
}

impl<T> Loadable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stream of state changes, starting with the current state
    pub fn subscribe(&self) -> watch::Receiver<UiState<T>> {
        self.tx.subscribe()
    }

    pub fn set(&self, state: UiState<T>) {
        self.tx.send_replace(state);
    }

    pub fn reset(&self) {
        self.set(UiState::Idle);
    }

    /// Go to `Loading`, await the operation and publish its outcome.
    /// Returns whether it succeeded.
    pub async fn run<F>(&self, operation: F) -> bool
    where
        F: Future<Output = Outcome<T>>,
    {
        self.set(UiState::Loading);
        let outcome = operation.await;
        let succeeded = outcome.is_success();
        self.set(outcome.into());
        succeeded
    }
}

impl<T: Clone> Loadable<T> {
    /// Snapshot of the current state
    pub fn get(&self) -> UiState<T> {
        self.tx.borrow().clone()
    }
}

/// Owner of the tasks a view-model spawns. Dropping it aborts them.
#[derive(Debug, Default)]
pub struct TaskScope {
    tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl TaskScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn on the current tokio runtime.
    pub fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(future);
        let mut tasks = self.tasks.lock().unwrap_or_else(|e| e.into_inner());
        tasks.retain(|task| !task.is_finished());
        tasks.push(handle);
    }

    /// Number of tasks still running
    pub fn active(&self) -> usize {
        let tasks = self.tasks.lock().unwrap_or_else(|e| e.into_inner());
        tasks.iter().filter(|task| !task.is_finished()).count()
    }

    pub fn cancel_all(&self) {
        let mut tasks = self.tasks.lock().unwrap_or_else(|e| e.into_inner());
        for task in tasks.drain(..) {
            task.abort();
        }
    }
}

impl Drop for TaskScope {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

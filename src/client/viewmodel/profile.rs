use std::collections::BTreeMap;

use tokio::sync::watch;

use crate::client::repository::AuthRepository;
use crate::client::viewmodel::{Loadable, TaskScope, UiState};
use crate::shared::models::User;

/// Profile screen: view, edit and log out
#[derive(Debug)]
pub struct ProfileViewModel {
    repository: AuthRepository,
    profile: Loadable<User>,
    update: Loadable<User>,
    scope: TaskScope,
}

impl ProfileViewModel {
    pub fn new(repository: AuthRepository) -> Self {
        Self {
            repository,
            profile: Loadable::new(),
            update: Loadable::new(),
            scope: TaskScope::new(),
        }
    }

    pub fn profile(&self) -> watch::Receiver<UiState<User>> {
        self.profile.subscribe()
    }

    pub fn update_state(&self) -> watch::Receiver<UiState<User>> {
        self.update.subscribe()
    }

    pub async fn load_profile(&self) -> bool {
        self.profile.run(self.repository.user_profile()).await
    }

    pub fn spawn_load_profile(&self) {
        let repository = self.repository.clone();
        let profile = self.profile.clone();
        self.scope.spawn(async move {
            profile.run(repository.user_profile()).await;
        });
    }

    /// Save changes; on success the displayed profile is replaced.
    pub async fn update_profile(&self, changes: BTreeMap<String, String>) -> bool {
        update_profile(&self.repository, &self.profile, &self.update, &changes).await
    }

    pub fn spawn_update_profile(&self, changes: BTreeMap<String, String>) {
        let repository = self.repository.clone();
        let profile = self.profile.clone();
        let update = self.update.clone();
        self.scope.spawn(async move {
            update_profile(&repository, &profile, &update, &changes).await;
        });
    }

    pub fn reset_update(&self) {
        self.update.reset();
    }

    /// Clear the session and the screen state. Pending loads are cancelled.
    pub fn logout(&self) -> bool {
        self.scope.cancel_all();
        let cleared = self.repository.logout().is_success();
        self.profile.reset();
        self.update.reset();
        cleared
    }
}

async fn update_profile(
    repository: &AuthRepository,
    profile: &Loadable<User>,
    update: &Loadable<User>,
    changes: &BTreeMap<String, String>,
) -> bool {
    update.set(UiState::Loading);
    let outcome = repository.update_user_profile(changes).await;
    if let Some(user) = outcome.as_ref().ok() {
        profile.set(UiState::Success(user.clone()));
    }
    let succeeded = outcome.is_success();
    update.set(outcome.into());
    succeeded
}

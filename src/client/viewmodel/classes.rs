use tokio::sync::watch;

use crate::client::repository::AuthRepository;
use crate::client::viewmodel::{Loadable, TaskScope, UiState};
use crate::shared::models::ClassSession;

/// The signed-in user's classes
#[derive(Debug)]
pub struct ClassesViewModel {
    repository: AuthRepository,
    classes: Loadable<Vec<ClassSession>>,
    scope: TaskScope,
}

impl ClassesViewModel {
    pub fn new(repository: AuthRepository) -> Self {
        Self {
            repository,
            classes: Loadable::new(),
            scope: TaskScope::new(),
        }
    }

    pub fn classes(&self) -> watch::Receiver<UiState<Vec<ClassSession>>> {
        self.classes.subscribe()
    }

    pub async fn load_classes(&self) -> bool {
        self.classes.run(self.repository.user_classes()).await
    }

    pub fn spawn_load_classes(&self) {
        let repository = self.repository.clone();
        let classes = self.classes.clone();
        self.scope.spawn(async move {
            classes.run(repository.user_classes()).await;
        });
    }
}

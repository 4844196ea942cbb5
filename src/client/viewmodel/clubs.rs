use tokio::sync::watch;

use crate::client::repository::AuthRepository;
use crate::client::viewmodel::{Loadable, TaskScope, UiState};
use crate::shared::models::Club;

#[derive(Debug)]
pub struct ClubsViewModel {
    repository: AuthRepository,
    clubs: Loadable<Vec<Club>>,
    scope: TaskScope,
}

impl ClubsViewModel {
    pub fn new(repository: AuthRepository) -> Self {
        Self {
            repository,
            clubs: Loadable::new(),
            scope: TaskScope::new(),
        }
    }

    pub fn clubs(&self) -> watch::Receiver<UiState<Vec<Club>>> {
        self.clubs.subscribe()
    }

    pub async fn load_clubs(&self) -> bool {
        self.clubs.run(self.repository.user_clubs()).await
    }

    pub fn spawn_load_clubs(&self) {
        let repository = self.repository.clone();
        let clubs = self.clubs.clone();
        self.scope.spawn(async move {
            clubs.run(repository.user_clubs()).await;
        });
    }
}

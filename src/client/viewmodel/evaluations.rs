use tokio::sync::watch;

use crate::client::repository::AuthRepository;
use crate::client::viewmodel::{Loadable, TaskScope, UiState};
use crate::shared::models::Evaluation;

#[derive(Debug)]
pub struct EvaluationsViewModel {
    repository: AuthRepository,
    evaluations: Loadable<Vec<Evaluation>>,
    scope: TaskScope,
}

impl EvaluationsViewModel {
    pub fn new(repository: AuthRepository) -> Self {
        Self {
            repository,
            evaluations: Loadable::new(),
            scope: TaskScope::new(),
        }
    }

    pub fn evaluations(&self) -> watch::Receiver<UiState<Vec<Evaluation>>> {
        self.evaluations.subscribe()
    }

    pub async fn load_evaluations(&self) -> bool {
        self.evaluations.run(self.repository.user_evaluations()).await
    }

    pub fn spawn_load_evaluations(&self) {
        let repository = self.repository.clone();
        let evaluations = self.evaluations.clone();
        self.scope.spawn(async move {
            evaluations.run(repository.user_evaluations()).await;
        });
    }

    /// Graded evaluations from the last successful load
    pub fn graded(&self) -> Vec<Evaluation> {
        match self.evaluations.get() {
            UiState::Success(evaluations) => evaluations
                .into_iter()
                .filter(Evaluation::is_graded)
                .collect(),
            _ => Vec::new(),
        }
    }
}

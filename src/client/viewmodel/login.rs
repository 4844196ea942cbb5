use tokio::sync::watch;

use crate::client::navigation::Destination;
use crate::client::repository::AuthRepository;
use crate::client::viewmodel::{Loadable, TaskScope, UiState};
use crate::shared::models::LoginOutcome;

const MISSING_FIELDS: &str = "Usuario y contraseña son obligatorios";

/// Login screen state
#[derive(Debug)]
pub struct LoginViewModel {
    repository: AuthRepository,
    state: Loadable<LoginOutcome>,
    scope: TaskScope,
}

impl LoginViewModel {
    pub fn new(repository: AuthRepository) -> Self {
        Self {
            repository,
            state: Loadable::new(),
            scope: TaskScope::new(),
        }
    }

    pub fn state(&self) -> watch::Receiver<UiState<LoginOutcome>> {
        self.state.subscribe()
    }

    pub async fn login(&self, username: &str, password: &str) -> bool {
        login(&self.repository, &self.state, username, password).await
    }

    pub fn spawn_login(&self, username: impl Into<String>, password: impl Into<String>) {
        let repository = self.repository.clone();
        let state = self.state.clone();
        let (username, password) = (username.into(), password.into());
        self.scope.spawn(async move {
            login(&repository, &state, &username, &password).await;
        });
    }

    /// Where to go next: the role's screen after a successful login,
    /// otherwise the login screen.
    pub fn destination(&self) -> Destination {
        destination_of(&self.state)
    }
}

async fn login(
    repository: &AuthRepository,
    state: &Loadable<LoginOutcome>,
    username: &str,
    password: &str,
) -> bool {
    if username.trim().is_empty() || password.is_empty() {
        state.set(UiState::Error(MISSING_FIELDS.to_string()));
        return false;
    }
    let succeeded = state.run(repository.login(username.trim(), password)).await;
    if succeeded {
        tracing::debug!("Login routes to {:?}", destination_of(state));
    }
    succeeded
}

fn destination_of(state: &Loadable<LoginOutcome>) -> Destination {
    match state.get() {
        UiState::Success(outcome) => Destination::for_role(outcome.role()),
        _ => Destination::Login,
    }
}

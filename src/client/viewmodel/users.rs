//! Admin user-creation screen: the user list plus the lookup data the
//! creation form needs.

use futures_util::join;
use tokio::sync::watch;

use crate::client::repository::{FormDataRepository, UserRepository};
use crate::client::viewmodel::{Loadable, TaskScope, UiState};
use crate::shared::models::{Block, CreateUserRequest, Specialization, User};

#[derive(Debug, Clone)]
struct UsersCore {
    users_repository: UserRepository,
    form_data: FormDataRepository,
    users: Loadable<Vec<User>>,
    blocks: Loadable<Vec<Block>>,
    specializations: Loadable<Vec<Specialization>>,
    create: Loadable<User>,
    action: Loadable<()>,
}

impl UsersCore {
    async fn load_users(&self) -> bool {
        self.users.run(self.users_repository.users()).await
    }

    /// Blocks and specializations load concurrently; neither waits on the other.
    async fn load_form_data(&self) -> bool {
        let (blocks, specializations) = join!(
            self.blocks.run(self.form_data.blocks()),
            self.specializations.run(self.form_data.specializations())
        );
        blocks && specializations
    }

    async fn create_user(&self, request: CreateUserRequest) -> bool {
        let created = self
            .create
            .run(self.users_repository.create_user(&request))
            .await;
        if created {
            self.load_users().await;
        }
        created
    }

    async fn toggle_user_active(&self, user_id: i64) -> bool {
        let toggled = self
            .action
            .run(self.users_repository.toggle_user_active(user_id))
            .await;
        if toggled {
            self.load_users().await;
        }
        toggled
    }
}

#[derive(Debug)]
pub struct CreateUserViewModel {
    core: UsersCore,
    scope: TaskScope,
}

impl CreateUserViewModel {
    pub fn new(users: UserRepository, form_data: FormDataRepository) -> Self {
        Self {
            core: UsersCore {
                users_repository: users,
                form_data,
                users: Loadable::new(),
                blocks: Loadable::new(),
                specializations: Loadable::new(),
                create: Loadable::new(),
                action: Loadable::new(),
            },
            scope: TaskScope::new(),
        }
    }

    pub fn users(&self) -> watch::Receiver<UiState<Vec<User>>> {
        self.core.users.subscribe()
    }

    pub fn blocks(&self) -> watch::Receiver<UiState<Vec<Block>>> {
        self.core.blocks.subscribe()
    }

    pub fn specializations(&self) -> watch::Receiver<UiState<Vec<Specialization>>> {
        self.core.specializations.subscribe()
    }

    pub fn create_state(&self) -> watch::Receiver<UiState<User>> {
        self.core.create.subscribe()
    }

    /// State of the last activate/deactivate
    pub fn action_state(&self) -> watch::Receiver<UiState<()>> {
        self.core.action.subscribe()
    }

    pub async fn load_users(&self) -> bool {
        self.core.load_users().await
    }

    pub fn spawn_load_users(&self) {
        let core = self.core.clone();
        self.scope.spawn(async move {
            core.load_users().await;
        });
    }

    pub async fn load_form_data(&self) -> bool {
        self.core.load_form_data().await
    }

    pub fn spawn_load_form_data(&self) {
        let core = self.core.clone();
        self.scope.spawn(async move {
            core.load_form_data().await;
        });
    }

    /// Create a user; the list reloads on success.
    pub async fn create_user(&self, request: CreateUserRequest) -> bool {
        self.core.create_user(request).await
    }

    pub fn spawn_create_user(&self, request: CreateUserRequest) {
        let core = self.core.clone();
        self.scope.spawn(async move {
            core.create_user(request).await;
        });
    }

    pub async fn toggle_user_active(&self, user_id: i64) -> bool {
        self.core.toggle_user_active(user_id).await
    }

    pub fn spawn_toggle_user_active(&self, user_id: i64) {
        let core = self.core.clone();
        self.scope.spawn(async move {
            core.toggle_user_active(user_id).await;
        });
    }

    /// Back to `Idle` once the screen has shown the result.
    pub fn reset_create_state(&self) {
        self.core.create.reset();
    }
}

/**
 * User Management Repository
 *
 * Admin-side listing, creation and activation of accounts.
 */

use crate::client::api::envelope::{decode_list, AckResponse, CreateUserResponse, UsersResponse};
use crate::client::api::{endpoints, RequestBody};
use crate::client::repository::{settle, Gateway};
use crate::shared::models::{CreateUserRequest, User};
use crate::shared::{ClientError, Outcome};

const USERS_FALLBACK: &str = "Error al obtener usuarios";
const CREATE_USER_FALLBACK: &str = "Error al crear usuario";
const TOGGLE_USER_FALLBACK: &str = "Error al cambiar el estado del usuario";

#[derive(Debug, Clone)]
pub struct UserRepository {
    gateway: Gateway,
}

impl UserRepository {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// All users. The backend has answered both a bare array and a wrapped
    /// list here.
    pub async fn users(&self) -> Outcome<Vec<User>> {
        let result = async {
            let value = self.gateway.fetch_raw(&endpoints::users(), RequestBody::Empty).await?;
            decode_list::<User, UsersResponse>(value, USERS_FALLBACK)
        }
        .await;
        settle("users", result)
    }

    /// Create an account. Field errors come back joined, one field per line.
    pub async fn create_user(&self, request: &CreateUserRequest) -> Outcome<User> {
        settle("create_user", self.try_create_user(request).await)
    }

    async fn try_create_user(&self, request: &CreateUserRequest) -> Result<User, ClientError> {
        let body = RequestBody::json(request)?;
        let user = self
            .gateway
            .fetch::<CreateUserResponse>(&endpoints::create_user(), body, CREATE_USER_FALLBACK)
            .await?;
        tracing::info!("Created user {} ({})", user.username, user.role);
        Ok(user)
    }

    pub async fn toggle_user_active(&self, user_id: i64) -> Outcome<()> {
        let result = self
            .gateway
            .fetch::<AckResponse>(
                &endpoints::toggle_user_active(user_id),
                RequestBody::Empty,
                TOGGLE_USER_FALLBACK,
            )
            .await;
        settle("toggle_user_active", result)
    }
}

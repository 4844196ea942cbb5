/**
 * Authentication Repository
 *
 * Login/logout plus the signed-in user's own resources: profile, classes,
 * evaluations, clubs and blocks.
 */

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::client::api::envelope::{
    decode_list, BlocksResponse, ClassesResponse, ClubsResponse, ErrorBody, EvaluationsResponse,
    ProfileResponse,
};
use crate::client::api::{endpoints, RequestBody};
use crate::client::repository::{settle, Gateway};
use crate::client::session::token_preview;
use crate::shared::models::{
    Block, ClassSession, Club, Evaluation, LoginOutcome, LoginRequest, LoginResponse, User,
};
use crate::shared::{ClientError, Outcome};

const LOGIN_FALLBACK: &str = "Error de login desconocido";
const PROFILE_FALLBACK: &str = "Error del backend al obtener perfil";
const UPDATE_PROFILE_FALLBACK: &str = "Error del backend al actualizar perfil";
const CLASSES_FALLBACK: &str = "Error del backend al obtener clases";
const EVALUATIONS_FALLBACK: &str = "Error al obtener evaluaciones";
const CLUBS_FALLBACK: &str = "Error al obtener clubs";
const BLOCKS_FALLBACK: &str = "Error del backend al obtener bloques";

#[derive(Debug, Clone)]
pub struct AuthRepository {
    gateway: Gateway,
}

impl AuthRepository {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Log in and persist the issued token.
    ///
    /// The token is in the session store before this returns `Success`. A
    /// response without a role yields the default `student` role.
    pub async fn login(&self, username: &str, password: &str) -> Outcome<LoginOutcome> {
        tracing::info!("Logging in as {}", username);
        settle("login", self.try_login(username, password).await)
    }

    async fn try_login(&self, username: &str, password: &str) -> Result<LoginOutcome, ClientError> {
        let body = RequestBody::json(&LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        })?;
        let value = self.gateway.fetch_raw(&endpoints::login(), body).await?;
        let response = LoginResponse::deserialize(&value).map_err(|e| {
            tracing::debug!("Unexpected login body: {}", e);
            let body = ErrorBody::from_value(&value);
            ClientError::rejected(body.as_ref().and_then(ErrorBody::best_message), LOGIN_FALLBACK)
        })?;
        if response.token.trim().is_empty() {
            tracing::warn!("Login response for {} carried no token", username);
            return Err(ClientError::rejected(None, LOGIN_FALLBACK));
        }

        self.gateway.session().save(&response.token)?;
        tracing::info!(
            "Logged in as {} ({})",
            username,
            token_preview(&response.token)
        );
        Ok(response.into())
    }

    /// Forget the stored token. Local only and idempotent.
    pub fn logout(&self) -> Outcome<()> {
        settle("logout", self.gateway.session().clear())
    }

    pub async fn user_profile(&self) -> Outcome<User> {
        let result = self
            .gateway
            .fetch::<ProfileResponse>(&endpoints::profile(), RequestBody::Empty, PROFILE_FALLBACK)
            .await;
        settle("user_profile", result)
    }

    /// Send a partial profile update; the server answers with the full user.
    pub async fn update_user_profile(&self, changes: &BTreeMap<String, String>) -> Outcome<User> {
        let result = async {
            let body = RequestBody::json(changes)?;
            self.gateway
                .fetch::<ProfileResponse>(&endpoints::update_profile(), body, UPDATE_PROFILE_FALLBACK)
                .await
        }
        .await;
        settle("update_user_profile", result)
    }

    pub async fn user_classes(&self) -> Outcome<Vec<ClassSession>> {
        let result = self
            .gateway
            .fetch::<ClassesResponse>(&endpoints::classes(), RequestBody::Empty, CLASSES_FALLBACK)
            .await;
        settle("user_classes", result)
    }

    /// Evaluations arrive either wrapped or as a bare array.
    pub async fn user_evaluations(&self) -> Outcome<Vec<Evaluation>> {
        let result = async {
            let value = self
                .gateway
                .fetch_raw(&endpoints::evaluations(), RequestBody::Empty)
                .await?;
            decode_list::<Evaluation, EvaluationsResponse>(value, EVALUATIONS_FALLBACK)
        }
        .await;
        settle("user_evaluations", result)
    }

    pub async fn user_clubs(&self) -> Outcome<Vec<Club>> {
        let result = self
            .gateway
            .fetch::<ClubsResponse>(&endpoints::clubs(), RequestBody::Empty, CLUBS_FALLBACK)
            .await;
        settle("user_clubs", result)
    }

    pub async fn blocks(&self) -> Outcome<Vec<Block>> {
        let result = self
            .gateway
            .fetch::<BlocksResponse>(&endpoints::blocks(), RequestBody::Empty, BLOCKS_FALLBACK)
            .await;
        settle("blocks", result)
    }
}

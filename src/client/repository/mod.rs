//! Repositories
//!
//! One repository per resource domain. All of them go through [`Gateway`],
//! which owns the authenticated-call protocol:
//!
//! 1. read the token (authenticated endpoints only) and stop with
//!    `MissingSession` before any I/O when it is absent
//! 2. send the request with `Authorization: Bearer <token>`
//! 3. map a non-2xx status to `Validation`, `Rejected` or `Status`
//! 4. unwrap the `success` flag of the response envelope
//!
//! Repositories compute `Result<T, ClientError>` internally and hand an
//! [`Outcome`](crate::shared::Outcome) to their callers.

pub mod auth;
pub mod blocks;
pub mod form_data;
pub mod gallery;
pub mod schedule;
pub mod users;

pub use auth::AuthRepository;
pub use blocks::BlockRepository;
pub use form_data::FormDataRepository;
pub use gallery::GalleryRepository;
pub use schedule::ScheduleRepository;
pub use users::UserRepository;

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::client::api::envelope::{unwrap_envelope, Envelope, ErrorBody};
use crate::client::api::{ApiClient, Endpoint, RequestBody};
use crate::client::config::Config;
use crate::client::session::{token_preview, SessionStore};
use crate::shared::ClientError;

/// Authenticated-call helper shared by every repository
#[derive(Clone)]
pub struct Gateway {
    api: ApiClient,
    session: Arc<dyn SessionStore>,
}

impl fmt::Debug for Gateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gateway")
            .field("server_url", &self.api.config().server_url())
            .field("has_session", &self.session.get().is_some())
            .finish()
    }
}

impl Gateway {
    pub fn new(api: ApiClient, session: Arc<dyn SessionStore>) -> Self {
        Self { api, session }
    }

    pub fn from_config(config: Config, session: Arc<dyn SessionStore>) -> Result<Self, ClientError> {
        Ok(Self::new(ApiClient::new(config)?, session))
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// The stored token, or `MissingSession`
    pub fn token(&self) -> Result<String, ClientError> {
        self.session.get().ok_or(ClientError::MissingSession)
    }

    /// Perform a call and return the raw JSON body of a 2xx response.
    ///
    /// An empty body comes back as `Value::Null`.
    pub async fn fetch_raw(&self, endpoint: &Endpoint, body: RequestBody) -> Result<Value, ClientError> {
        let token = if endpoint.authenticated {
            let token = self.token().map_err(|e| {
                tracing::debug!("{} {} skipped: no session", endpoint.method, endpoint.path);
                e
            })?;
            tracing::debug!("Using token {}", token_preview(&token));
            Some(token)
        } else {
            None
        };

        let response = self.api.send(endpoint, token.as_deref(), body).await?;

        if !response.status.is_success() {
            let code = response.status.as_u16();
            tracing::warn!("{} {} failed with {}", endpoint.method, endpoint.path, code);
            return Err(status_error(code, &response.body));
        }

        Ok(response.body)
    }

    /// Perform a call and unwrap its success-flagged envelope.
    pub async fn fetch<E: Envelope>(
        &self,
        endpoint: &Endpoint,
        body: RequestBody,
        fallback: &str,
    ) -> Result<E::Payload, ClientError> {
        let value = self.fetch_raw(endpoint, body).await?;
        let envelope: E = serde_json::from_value(non_null(value))?;
        unwrap_envelope(envelope, fallback)
    }
}

/// Treat an empty body as an empty object so defaulted envelopes still decode.
pub(crate) fn non_null(value: Value) -> Value {
    match value {
        Value::Null => Value::Object(Default::default()),
        other => other,
    }
}

/// Error for a non-2xx response: field errors, then the body's message, then
/// the bare status code.
fn status_error(code: u16, body: &Value) -> ClientError {
    let Some(error) = ErrorBody::from_value(body) else {
        return ClientError::Status(code);
    };
    match (error.errors.as_ref().filter(|e| !e.is_empty()), error.best_message()) {
        (Some(errors), _) => ClientError::Validation(errors.clone()),
        (None, Some(message)) => ClientError::Rejected(message.trim().to_string()),
        (None, None) => ClientError::Status(code),
    }
}

/// Convert an internal result into an outcome, logging the failure.
pub(crate) fn settle<T>(operation: &str, result: Result<T, ClientError>) -> crate::shared::Outcome<T> {
    if let Err(err) = &result {
        match err {
            ClientError::MissingSession => tracing::debug!("{}: {}", operation, err),
            _ => tracing::warn!("{} failed: {}", operation, err),
        }
    }
    result.into()
}

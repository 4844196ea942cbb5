//! Client Error Types
//!
//! This module defines the error taxonomy used inside the client. Every
//! repository computes a `Result<T, ClientError>` and converts it into an
//! [`Outcome`](crate::shared::Outcome) at its public boundary, so these errors
//! never reach view-models as anything other than a message.
//!
//! # Error Categories
//!
//! - `MissingSession` - an authenticated call was attempted without a stored token
//! - `Transport` - network or connectivity failure
//! - `Status` - non-2xx response without a usable body
//! - `Rejected` - the backend answered with `success: false`
//! - `Validation` - field-level errors returned on user/media creation
//! - `Decode` - the response body did not have the expected shape
//!
//! # Usage
//!
//! ```rust
//! use lengua_client::shared::error::ClientError;
//!
//! let error = ClientError::rejected(None, "Error al obtener clases");
//! assert_eq!(error.to_string(), "Error al obtener clases");
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::config::ConfigError;

/// Message used when no token is stored.
pub const MISSING_SESSION_MESSAGE: &str = "No hay token de autenticación";

/// Fallback used when a transport error carries no text.
pub const CONNECTION_FALLBACK: &str = "Error de conexión";

/// Errors that can occur while talking to the backend or the local store
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClientError {
    /// No token in the session store; the request was never sent
    #[error("{}", MISSING_SESSION_MESSAGE)]
    MissingSession,

    /// Network/connectivity failure
    #[error("{0}")]
    Transport(String),

    /// Non-2xx response whose body carried nothing useful
    #[error("Error de red: {0}")]
    Status(u16),

    /// The backend answered but flagged the call as failed
    #[error("{0}")]
    Rejected(String),

    /// Field-level validation errors
    #[error("{0}")]
    Validation(FieldErrors),

    /// Response body could not be decoded
    #[error("Error al procesar la respuesta: {0}")]
    Decode(String),

    /// Local session storage failure
    #[error("Error de almacenamiento: {0}")]
    Storage(String),

    /// A local file selected for upload could not be read
    #[error("{0}")]
    File(String),

    /// Invalid client configuration
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ClientError {
    /// Create a transport error, falling back to a generic message when empty
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::Transport(CONNECTION_FALLBACK.to_string())
        } else {
            Self::Transport(message)
        }
    }

    /// Create a rejection error, preferring the backend message when present
    pub fn rejected(message: Option<&str>, fallback: &str) -> Self {
        match message.map(str::trim).filter(|m| !m.is_empty()) {
            Some(message) => Self::Rejected(message.to_string()),
            None => Self::Rejected(fallback.to_string()),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Transport("Tiempo de espera agotado".to_string())
        } else if err.is_decode() {
            Self::decode(err.to_string())
        } else {
            Self::transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::decode(err.to_string())
    }
}

/// Field-level validation errors as returned by the server.
///
/// Fields are kept in key order so the rendered message is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, messages: Vec<String>) {
        self.0.insert(field.into(), messages);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }
}

impl FromIterator<(String, Vec<String>)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One line per field, `field: first, second`.
impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (field, messages)) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}: {}", field, messages.join(", "))?;
        }
        Ok(())
    }
}

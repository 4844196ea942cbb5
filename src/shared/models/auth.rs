/**
 * Authentication Types
 *
 * Login request/response shapes and the role carried by a successful login.
 */

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role assumed when the server omits one.
pub const DEFAULT_ROLE: &str = "student";

/// Credentials sent to the login endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response from server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// Result of a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginOutcome {
    pub token: String,
    pub role: String,
}

impl LoginOutcome {
    pub fn role(&self) -> Role {
        Role::from_label(&self.role)
    }
}

impl From<LoginResponse> for LoginOutcome {
    fn from(response: LoginResponse) -> Self {
        Self {
            token: response.token,
            role: response.role.unwrap_or_else(|| DEFAULT_ROLE.to_string()),
        }
    }
}

/// Client-side role classification. Advisory only; the server enforces access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Professor,
    Student,
}

impl Role {
    /// Map a server role label. Anything unrecognised is a student.
    pub fn from_label(label: &str) -> Self {
        match label {
            "admin" => Role::Admin,
            "profesor" => Role::Professor,
            _ => Role::Student,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Professor => "profesor",
            Role::Student => DEFAULT_ROLE,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

use serde::{Deserialize, Serialize};

use super::{default_true, null_default, null_true};

fn default_role() -> String {
    super::auth::DEFAULT_ROLE.to_string()
}

fn null_role<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_role))
}

/// A platform user, as returned by the profile and user-management endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub username: String,
    #[serde(default, deserialize_with = "null_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub last_name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub full_name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_default")]
    pub country: String,
    #[serde(default, deserialize_with = "null_default")]
    pub city: String,
    #[serde(default = "default_role", deserialize_with = "null_role")]
    pub role: String,
    #[serde(default, deserialize_with = "null_default")]
    pub english_level: String,
    #[serde(default, deserialize_with = "null_default")]
    pub birth_date: String,
    #[serde(default, deserialize_with = "null_default")]
    pub address: String,
    #[serde(default, deserialize_with = "null_default")]
    pub learning_goals: String,
    #[serde(default, deserialize_with = "null_default")]
    pub profile_completed: bool,
    #[serde(rename = "bloque_asignado", default, deserialize_with = "null_default")]
    pub assigned_block: String,
    #[serde(rename = "especializacion", default, deserialize_with = "null_default")]
    pub specialization: String,
    #[serde(rename = "correo_personal", default, deserialize_with = "null_default")]
    pub personal_email: String,
    #[serde(default, deserialize_with = "null_default")]
    pub created_at: String,
    #[serde(default = "default_true", deserialize_with = "null_true")]
    pub is_active: bool,
}

impl User {
    /// Full name if the server sent one, otherwise first + last.
    pub fn display_name(&self) -> String {
        if !self.full_name.trim().is_empty() {
            return self.full_name.clone();
        }
        let joined = format!("{} {}", self.first_name, self.last_name);
        let joined = joined.trim();
        if joined.is_empty() {
            self.username.clone()
        } else {
            joined.to_string()
        }
    }
}

/// Payload for the admin user-creation endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    #[serde(rename = "bloque_asignado", skip_serializing_if = "Option::is_none")]
    pub assigned_block: Option<String>,
    #[serde(rename = "especializacion", skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    #[serde(rename = "correo_personal", skip_serializing_if = "Option::is_none")]
    pub personal_email: Option<String>,
}

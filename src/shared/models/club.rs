use serde::{Deserialize, Serialize};

use super::null_default;

/// A conversation club with its weekly materials
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Club {
    pub id: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub description: String,
    #[serde(rename = "profesor", default, deserialize_with = "null_default")]
    pub professor: String,
    #[serde(default, deserialize_with = "null_default")]
    pub total_students: i32,
    #[serde(default, deserialize_with = "null_default")]
    pub materials: Vec<ClubMaterial>,
    #[serde(default, deserialize_with = "null_default")]
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubMaterial {
    pub id: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub week: String,
    #[serde(default, deserialize_with = "null_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_default")]
    pub resource_type: String,
    #[serde(default, deserialize_with = "null_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_default")]
    pub file_url: String,
    #[serde(default, deserialize_with = "null_default")]
    pub created_at: String,
}

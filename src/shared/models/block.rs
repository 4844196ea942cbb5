use serde::{Deserialize, Serialize};

use super::{default_true, null_default, null_true};

/// A scheduling block grouping students by level ("bloque")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: i64,
    #[serde(rename = "nombre", default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(rename = "nivel", default, deserialize_with = "null_default")]
    pub level: String,
    #[serde(rename = "estado", default, deserialize_with = "null_default")]
    pub status: String,
    #[serde(rename = "grupo_color", default, deserialize_with = "null_default")]
    pub group_color: String,
    #[serde(rename = "horario_inicio", default)]
    pub start_time: Option<String>,
    #[serde(rename = "horario_fin", default)]
    pub end_time: Option<String>,
    #[serde(rename = "cupo_maximo", default, deserialize_with = "null_default")]
    pub capacity: i32,
    #[serde(rename = "activo", default = "default_true", deserialize_with = "null_true")]
    pub active: bool,
    #[serde(rename = "estudiantes_count", default, deserialize_with = "null_default")]
    pub student_count: i32,
}

impl Block {
    /// Label used in block pickers, e.g. "B1 Azul".
    pub fn display_name(&self) -> String {
        format!("{} {}", self.level, self.name)
    }
}

fn default_capacity() -> i32 {
    20
}

fn default_status() -> String {
    "configurado".to_string()
}

/// Payload for creating or updating a block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockDraft {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "nivel")]
    pub level: String,
    #[serde(rename = "grupo_color")]
    pub group_color: String,
    #[serde(rename = "horario_inicio", skip_serializing_if = "Option::is_none", default)]
    pub start_time: Option<String>,
    #[serde(rename = "horario_fin", skip_serializing_if = "Option::is_none", default)]
    pub end_time: Option<String>,
    #[serde(rename = "cupo_maximo", default = "default_capacity")]
    pub capacity: i32,
    #[serde(rename = "estado", default = "default_status")]
    pub status: String,
    #[serde(rename = "activo", default = "default_true")]
    pub active: bool,
}

impl BlockDraft {
    pub fn new(name: impl Into<String>, level: impl Into<String>, group_color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: level.into(),
            group_color: group_color.into(),
            start_time: None,
            end_time: None,
            capacity: default_capacity(),
            status: default_status(),
            active: true,
        }
    }
}

/// An optional study track ("especialización")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialization {
    pub id: i64,
    #[serde(rename = "nombre", default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(rename = "descripcion", default, deserialize_with = "null_default")]
    pub description: String,
    #[serde(rename = "precio_adicional", default)]
    pub extra_price: Option<String>,
    #[serde(rename = "activa", default = "default_true", deserialize_with = "null_true")]
    pub active: bool,
}

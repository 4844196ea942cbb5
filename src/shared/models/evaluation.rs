use serde::{Deserialize, Serialize};

use super::null_default;

/// An evaluation assigned to the current student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub id: i64,
    #[serde(rename = "titulo", default, deserialize_with = "null_default")]
    pub title: String,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
    #[serde(rename = "tipo", default, deserialize_with = "null_default")]
    pub kind: String,
    #[serde(rename = "profesor", default, deserialize_with = "null_default")]
    pub professor: String,
    #[serde(rename = "fecha_limite", default, deserialize_with = "null_default")]
    pub due_date: String,
    #[serde(rename = "archivo_url", default)]
    pub file_url: Option<String>,
    #[serde(rename = "estado_estudiante", default, deserialize_with = "null_default")]
    pub student_status: String,
    #[serde(rename = "fecha_entrega", default)]
    pub submitted_at: Option<String>,
    #[serde(rename = "calificacion", default)]
    pub grade: Option<f32>,
    #[serde(default, deserialize_with = "null_default")]
    pub created_at: String,
}

impl Evaluation {
    pub fn is_graded(&self) -> bool {
        self.grade.is_some()
    }
}

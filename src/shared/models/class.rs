use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::null_default;

/// A scheduled class ("clase")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSession {
    pub id: i64,
    #[serde(rename = "nombre", default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(rename = "profesor", default, deserialize_with = "null_default")]
    pub professor: String,
    #[serde(rename = "fecha", default, deserialize_with = "null_default")]
    pub date: String,
    #[serde(rename = "hora", default, deserialize_with = "null_default")]
    pub time: String,
    #[serde(rename = "duracion", default, deserialize_with = "null_default")]
    pub duration_minutes: i32,
    #[serde(rename = "tema", default, deserialize_with = "null_default")]
    pub topic: String,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
    #[serde(rename = "tipo_clase", default, deserialize_with = "null_default")]
    pub class_type: String,
    #[serde(rename = "modalidad", default, deserialize_with = "null_default")]
    pub modality: String,
    #[serde(default)]
    pub meet_link: Option<String>,
    #[serde(rename = "estado", default, deserialize_with = "null_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_default")]
    pub created_at: String,
}

/// Wire payload for `classes/create/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateClassRequest {
    #[serde(rename = "nombre")]
    pub name: String,
    /// `YYYY-MM-DD`
    #[serde(rename = "fecha")]
    pub date: String,
    /// `HH:MM`
    #[serde(rename = "hora")]
    pub time: String,
    #[serde(rename = "duracion")]
    pub duration_minutes: i32,
    #[serde(rename = "tema")]
    pub topic: String,
    #[serde(rename = "modalidad")]
    pub modality: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "tipo_clase")]
    pub class_type: String,
    pub meet_link: String,
    #[serde(rename = "estudiantes")]
    pub students: Vec<i64>,
    #[serde(rename = "profesor", skip_serializing_if = "Option::is_none")]
    pub professor: Option<String>,
}

/// Class as entered in the scheduling form, before normalization
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassDraft {
    pub name: String,
    pub date: String,
    pub time: String,
    pub description: String,
    pub meet_link: String,
    pub professor: Option<String>,
    pub student_ids: Vec<i64>,
}

impl ClassDraft {
    /// Build the wire request, normalizing date and time for the backend.
    pub fn into_request(self) -> CreateClassRequest {
        CreateClassRequest {
            name: self.name,
            date: normalize_date(&self.date),
            time: normalize_time(&self.time),
            duration_minutes: 60,
            topic: "General".to_string(),
            modality: "virtual".to_string(),
            description: self.description,
            class_type: "individual".to_string(),
            meet_link: self.meet_link,
            students: self.student_ids,
            professor: self.professor.filter(|p| !p.trim().is_empty()),
        }
    }
}

const SPANISH_MONTHS: [(&str, u32); 13] = [
    ("enero", 1),
    ("febrero", 2),
    ("marzo", 3),
    ("abril", 4),
    ("mayo", 5),
    ("junio", 6),
    ("julio", 7),
    ("agosto", 8),
    ("septiembre", 9),
    ("setiembre", 9),
    ("octubre", 10),
    ("noviembre", 11),
    ("diciembre", 12),
];

/// `2025-03-15` passes through, `15 de marzo 2025` becomes `2025-03-15`,
/// anything else is returned unchanged.
pub fn normalize_date(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.len() == 10 && NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").is_ok() {
        return trimmed.to_string();
    }
    parse_spanish_date(trimmed)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| input.to_string())
}

fn parse_spanish_date(input: &str) -> Option<NaiveDate> {
    let tokens: Vec<&str> = input
        .split_whitespace()
        .filter(|t| !t.eq_ignore_ascii_case("de"))
        .collect();
    let [day, month, year] = tokens.as_slice() else {
        return None;
    };
    let month = month.to_lowercase();
    let month = SPANISH_MONTHS
        .iter()
        .find(|(name, _)| *name == month)
        .map(|(_, number)| *number)?;
    NaiveDate::from_ymd_opt(year.parse().ok()?, month, day.parse().ok()?)
}

/// `14:30` passes through, `2:30 PM` becomes `14:30`, anything else is
/// returned unchanged.
pub fn normalize_time(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.len() == 5 && NaiveTime::parse_from_str(trimmed, "%H:%M").is_ok() {
        return trimmed.to_string();
    }
    NaiveTime::parse_from_str(trimmed, "%I:%M %p")
        .map(|time| time.format("%H:%M").to_string())
        .unwrap_or_else(|_| input.to_string())
}

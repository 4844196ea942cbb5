//! Response envelopes
//!
//! Most endpoints wrap their payload in an object carrying a `success` flag,
//! an optional `message` and, on creation endpoints, field-level `errors`.
//! Each wrapper implements [`Envelope`] so the gateway can unwrap them all the
//! same way. A few endpoints answer with either the wrapper or a bare JSON
//! array; [`PayloadShape`] and [`decode_list`] handle those explicitly.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::shared::models::{
    Block, ClassSession, Club, Evaluation, MediaItem, Person, Specialization, User,
};
use crate::shared::{ClientError, FieldErrors};

/// A success-flagged response wrapper
pub trait Envelope: DeserializeOwned {
    type Payload;

    fn is_success(&self) -> bool;

    fn message(&self) -> Option<&str> {
        None
    }

    fn field_errors(&self) -> Option<&FieldErrors> {
        None
    }

    fn into_payload(self) -> Option<Self::Payload>;
}

/// Convert a failure report into the matching error.
///
/// Non-empty field errors win over the message; the message wins over the
/// fallback.
pub fn rejection(message: Option<&str>, errors: Option<&FieldErrors>, fallback: &str) -> ClientError {
    match errors.filter(|e| !e.is_empty()) {
        Some(errors) => ClientError::Validation(errors.clone()),
        None => ClientError::rejected(message, fallback),
    }
}

/// Check the `success` flag and take the payload out.
pub fn unwrap_envelope<E: Envelope>(envelope: E, fallback: &str) -> Result<E::Payload, ClientError> {
    if !envelope.is_success() {
        return Err(rejection(envelope.message(), envelope.field_errors(), fallback));
    }
    let message = envelope.message().map(str::to_string);
    envelope
        .into_payload()
        .ok_or_else(|| ClientError::rejected(message.as_deref(), fallback))
}

/// Structural kind of a raw JSON payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadShape {
    Object,
    Array,
    Other(&'static str),
}

impl PayloadShape {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => Self::Object,
            Value::Array(_) => Self::Array,
            Value::Null => Self::Other("null"),
            Value::Bool(_) => Self::Other("boolean"),
            Value::Number(_) => Self::Other("number"),
            Value::String(_) => Self::Other("string"),
        }
    }
}

/// Decode a list that arrives either wrapped in `E` or as a bare array.
pub fn decode_list<T, E>(value: Value, fallback: &str) -> Result<Vec<T>, ClientError>
where
    T: DeserializeOwned,
    E: Envelope<Payload = Vec<T>>,
{
    match PayloadShape::of(&value) {
        PayloadShape::Array => Ok(serde_json::from_value::<Vec<T>>(value)?),
        PayloadShape::Object => unwrap_envelope(serde_json::from_value::<E>(value)?, fallback),
        PayloadShape::Other(kind) => Err(ClientError::decode(format!(
            "se esperaba un objeto o una lista, se recibió {}",
            kind
        ))),
    }
}

/// Body of a non-2xx response, when the server sent one
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub errors: Option<FieldErrors>,
}

impl ErrorBody {
    /// Only JSON objects are error bodies; arrays and scalars are not.
    pub fn from_value(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }

    pub fn best_message(&self) -> Option<&str> {
        [&self.message, &self.detail, &self.error]
            .into_iter()
            .filter_map(|m| m.as_deref())
            .find(|m| !m.trim().is_empty())
    }

    pub fn has_content(&self) -> bool {
        self.best_message().is_some() || self.errors.as_ref().is_some_and(|e| !e.is_empty())
    }
}

#[derive(Debug, Deserialize)]
pub struct ProfileResponse {
    pub success: bool,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub message: Option<String>,
}

impl Envelope for ProfileResponse {
    type Payload = User;

    fn is_success(&self) -> bool {
        self.success
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn into_payload(self) -> Option<User> {
        self.user
    }
}

#[derive(Debug, Deserialize)]
pub struct ClassesResponse {
    pub success: bool,
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub clases: Vec<ClassSession>,
    #[serde(default)]
    pub message: Option<String>,
}

impl Envelope for ClassesResponse {
    type Payload = Vec<ClassSession>;

    fn is_success(&self) -> bool {
        self.success
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn into_payload(self) -> Option<Vec<ClassSession>> {
        Some(self.clases)
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateClassResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    /// Not every backend version echoes the created class
    #[serde(default)]
    pub clase: Option<ClassSession>,
    #[serde(default)]
    pub errors: Option<FieldErrors>,
}

impl Envelope for CreateClassResponse {
    type Payload = Option<ClassSession>;

    fn is_success(&self) -> bool {
        self.success
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn field_errors(&self) -> Option<&FieldErrors> {
        self.errors.as_ref()
    }

    fn into_payload(self) -> Option<Option<ClassSession>> {
        Some(self.clase)
    }
}

#[derive(Debug, Deserialize)]
pub struct EvaluationsResponse {
    pub success: bool,
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub evaluaciones: Vec<Evaluation>,
    #[serde(default)]
    pub message: Option<String>,
}

impl Envelope for EvaluationsResponse {
    type Payload = Vec<Evaluation>;

    fn is_success(&self) -> bool {
        self.success
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn into_payload(self) -> Option<Vec<Evaluation>> {
        Some(self.evaluaciones)
    }
}

#[derive(Debug, Deserialize)]
pub struct BlocksResponse {
    pub success: bool,
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub bloques: Vec<Block>,
    #[serde(default)]
    pub message: Option<String>,
}

impl Envelope for BlocksResponse {
    type Payload = Vec<Block>;

    fn is_success(&self) -> bool {
        self.success
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn into_payload(self) -> Option<Vec<Block>> {
        Some(self.bloques)
    }
}

#[derive(Debug, Deserialize)]
pub struct BlockResponse {
    pub success: bool,
    #[serde(default)]
    pub bloque: Option<Block>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<FieldErrors>,
}

impl Envelope for BlockResponse {
    type Payload = Block;

    fn is_success(&self) -> bool {
        self.success
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn field_errors(&self) -> Option<&FieldErrors> {
        self.errors.as_ref()
    }

    fn into_payload(self) -> Option<Block> {
        self.bloque
    }
}

#[derive(Debug, Deserialize)]
pub struct SpecializationsResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Vec<Specialization>,
    #[serde(default)]
    pub message: Option<String>,
}

impl Envelope for SpecializationsResponse {
    type Payload = Vec<Specialization>;

    fn is_success(&self) -> bool {
        self.success
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn into_payload(self) -> Option<Vec<Specialization>> {
        Some(self.data)
    }
}

#[derive(Debug, Deserialize)]
pub struct ClubsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub clubs: Vec<Club>,
    #[serde(default)]
    pub message: Option<String>,
}

impl Envelope for ClubsResponse {
    type Payload = Vec<Club>;

    fn is_success(&self) -> bool {
        self.success
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn into_payload(self) -> Option<Vec<Club>> {
        Some(self.clubs)
    }
}

/// `professors/` and `students/` share this shape under different keys.
#[derive(Debug, Deserialize)]
pub struct PeopleResponse {
    pub success: bool,
    #[serde(default)]
    pub total: i64,
    #[serde(default, alias = "professors", alias = "students")]
    pub people: Vec<Person>,
    #[serde(default)]
    pub message: Option<String>,
}

impl Envelope for PeopleResponse {
    type Payload = Vec<Person>;

    fn is_success(&self) -> bool {
        self.success
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn into_payload(self) -> Option<Vec<Person>> {
        Some(self.people)
    }
}

#[derive(Debug, Deserialize)]
pub struct UsersResponse {
    pub success: bool,
    #[serde(default, alias = "data")]
    pub users: Vec<User>,
    #[serde(default)]
    pub message: Option<String>,
}

impl Envelope for UsersResponse {
    type Payload = Vec<User>;

    fn is_success(&self) -> bool {
        self.success
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn into_payload(self) -> Option<Vec<User>> {
        Some(self.users)
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateUserResponse {
    pub success: bool,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<FieldErrors>,
}

impl Envelope for CreateUserResponse {
    type Payload = User;

    fn is_success(&self) -> bool {
        self.success
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn field_errors(&self) -> Option<&FieldErrors> {
        self.errors.as_ref()
    }

    fn into_payload(self) -> Option<User> {
        self.user
    }
}

/// Generic `{success, data, message}` wrapper
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T: DeserializeOwned> Envelope for ApiResponse<T> {
    type Payload = T;

    fn is_success(&self) -> bool {
        self.success
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn into_payload(self) -> Option<T> {
        self.data
    }
}

/// Acknowledgement with no payload; an empty body counts as success.
#[derive(Debug, Deserialize)]
pub struct AckResponse {
    #[serde(default = "crate::shared::models::default_true")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl Envelope for AckResponse {
    type Payload = ();

    fn is_success(&self) -> bool {
        self.success
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn into_payload(self) -> Option<()> {
        Some(())
    }
}

#[derive(Debug, Deserialize)]
pub struct GalleryResponse {
    pub success: bool,
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub items: Vec<MediaItem>,
    #[serde(default)]
    pub message: Option<String>,
}

impl Envelope for GalleryResponse {
    type Payload = Vec<MediaItem>;

    fn is_success(&self) -> bool {
        self.success
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn into_payload(self) -> Option<Vec<MediaItem>> {
        Some(self.items)
    }
}

#[derive(Debug, Deserialize)]
pub struct MediaResponse {
    pub success: bool,
    #[serde(default, alias = "data")]
    pub item: Option<MediaItem>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<FieldErrors>,
}

impl Envelope for MediaResponse {
    type Payload = MediaItem;

    fn is_success(&self) -> bool {
        self.success
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn field_errors(&self) -> Option<&FieldErrors> {
        self.errors.as_ref()
    }

    fn into_payload(self) -> Option<MediaItem> {
        self.item
    }
}

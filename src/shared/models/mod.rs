//! Domain records
//!
//! Flat records mirroring the backend JSON. Non-identity fields carry serde
//! defaults and treat an explicit `null` the same as a missing key, so partial
//! server payloads still decode.

pub mod auth;
pub mod block;
pub mod class;
pub mod club;
pub mod evaluation;
pub mod media;
pub mod person;
pub mod user;

pub use auth::{LoginOutcome, LoginRequest, LoginResponse, Role};
pub use block::{Block, BlockDraft, Specialization};
pub use class::{ClassDraft, ClassSession, CreateClassRequest};
pub use club::{Club, ClubMaterial};
pub use evaluation::Evaluation;
pub use media::{CreateMediaRequest, MediaItem, MediaUpload};
pub use person::Person;
pub use user::{CreateUserRequest, User};

use serde::{Deserialize, Deserializer};

/// Deserialize `null` as `T::default()`.
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn default_true() -> bool {
    true
}

/// Deserialize `null` as `true`, for flags the backend treats as on by default.
pub(crate) fn null_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

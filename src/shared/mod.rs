//! Shared Module
//!
//! Types used across the client: the outcome wrapper handed to view-models,
//! the internal error taxonomy, configuration, and the domain records that
//! mirror the backend JSON.

/// Success/Error outcome wrapper
pub mod outcome;

/// Client error types
pub mod error;

/// Application configuration
pub mod config;

/// Domain records
pub mod models;

/// Re-export commonly used types for convenience
pub use outcome::Outcome;
pub use error::{ClientError, FieldErrors};
pub use config::{AppConfig, AppConfigBuilder, ConfigError};

//! Lengua Client - Main Library
//!
//! Client core for the Lengua language-learning platform: session handling,
//! a uniform success/error outcome for every backend call, role-based
//! navigation, and the view-models that drive the app's screens.
//!
//! # Module Structure
//!
//! - **`shared`** - Types with no I/O
//!   - `Outcome<T>` handed to view-models
//!   - `ClientError` and field-level validation errors
//!   - Configuration and the domain records mirroring the backend JSON
//!
//! - **`client`** - Everything that talks to the backend or the disk
//!   - `SessionStore` with file-backed and in-memory stores
//!   - `ApiClient` and the endpoint table
//!   - Repositories built on one authenticated-call `Gateway`
//!   - Navigation and view-models
//!
//! - **`logging`** - `tracing-subscriber` setup for embedding applications
//!
//! # Error Handling
//!
//! Repositories work with `Result<T, ClientError>` internally and return an
//! `Outcome<T>` at their public boundary. Nothing fails by panicking, and no
//! call is retried automatically; retry is up to the user.
//!
//! # Thread Safety
//!
//! Repositories are cheap to clone and share one `Arc<dyn SessionStore>`.
//! View-model state lives in `tokio::sync::watch` channels, and spawned work
//! is aborted when its view-model is dropped.

/// Shared types and data structures
pub mod shared;

/// Backend access, session and view-models
pub mod client;

/// Tracing initialisation
pub mod logging;

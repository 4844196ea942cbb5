//! Client Module
//!
//! Everything between the screens and the backend: configuration, the
//! session store, the HTTP gateway, repositories, navigation and view-models.
//!
//! # Wiring
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use lengua_client::client::{AuthRepository, Config, FileSessionStore, Gateway};
//!
//! # async fn example() -> Result<(), lengua_client::shared::ClientError> {
//! let config = Config::new();
//! let session = Arc::new(FileSessionStore::new(config.session_path()));
//! let gateway = Gateway::from_config(config, session)?;
//! let auth = AuthRepository::new(gateway);
//! let outcome = auth.login("ana", "secreto").await;
//! # Ok(())
//! # }
//! ```

/// Client configuration
pub mod config;

/// Authentication token storage
pub mod session;

/// HTTP transport and endpoint table
pub mod api;

/// Per-domain repositories
pub mod repository;

/// Role to screen mapping
pub mod navigation;

/// Screen state holders
pub mod viewmodel;

pub use api::{ApiClient, Endpoint, RequestBody};
pub use config::Config;
pub use navigation::{Destination, Role};
pub use repository::{
    AuthRepository, BlockRepository, FormDataRepository, GalleryRepository, Gateway,
    ScheduleRepository, UserRepository,
};
pub use session::{FileSessionStore, MemorySessionStore, SessionStore};
pub use viewmodel::{Loadable, TaskScope, UiState};

//! Mock backend for integration tests
//!
//! Starts a `wiremock` server and builds repositories whose gateway points
//! at it, sharing one in-memory session store the test can inspect.

use std::sync::Arc;
use std::time::Duration;

use lengua_client::client::{
    AuthRepository, BlockRepository, Config, FormDataRepository, GalleryRepository, Gateway,
    MemorySessionStore, ScheduleRepository, SessionStore, UserRepository,
};
use lengua_client::shared::AppConfig;
use wiremock::MockServer;

/// Path prefix the mock backend serves under
pub const API_PREFIX: &str = "/api/";

/// Token used by signed-in tests
pub const TEST_TOKEN: &str = "abc123";

pub struct TestBackend {
    pub server: MockServer,
    pub session: Arc<MemorySessionStore>,
}

impl TestBackend {
    /// Backend with no stored session
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
            session: Arc::new(MemorySessionStore::new()),
        }
    }

    /// Backend with `TEST_TOKEN` already stored
    pub async fn signed_in() -> Self {
        let backend = Self::start().await;
        backend.session.save(TEST_TOKEN).unwrap();
        backend
    }

    pub fn config(&self) -> Config {
        self.config_with_timeout(Duration::from_secs(5))
    }

    pub fn config_with_timeout(&self, timeout: Duration) -> Config {
        config_for(&format!("{}{}", self.server.uri(), API_PREFIX), timeout)
    }

    pub fn gateway(&self) -> Gateway {
        Gateway::from_config(self.config(), self.session.clone()).unwrap()
    }

    pub fn auth(&self) -> AuthRepository {
        AuthRepository::new(self.gateway())
    }

    pub fn users(&self) -> UserRepository {
        UserRepository::new(self.gateway())
    }

    pub fn form_data(&self) -> FormDataRepository {
        FormDataRepository::new(self.gateway())
    }

    pub fn gallery(&self) -> GalleryRepository {
        GalleryRepository::new(self.gateway())
    }

    pub fn blocks(&self) -> BlockRepository {
        BlockRepository::new(self.gateway())
    }

    pub fn schedule(&self) -> ScheduleRepository {
        ScheduleRepository::new(self.gateway())
    }

    /// Full path of an endpoint on the mock server
    pub fn path(relative: &str) -> String {
        format!("{}{}", API_PREFIX, relative)
    }
}

/// Config pointing at an arbitrary base URL
pub fn config_for(server_url: &str, timeout: Duration) -> Config {
    let builder = AppConfig::builder()
        .server_url(server_url)
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(2));
    Config::with_builder(builder).unwrap()
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

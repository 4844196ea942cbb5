//! Session Store
//!
//! Holds the single bearer token issued at login. Stores are injected into
//! repositories as `Arc<dyn SessionStore>` rather than reached through a
//! global, so tests and alternative backends can swap them freely.
//!
//! Two implementations are provided:
//!
//! - [`FileSessionStore`] - durable, a small JSON key-value file under the
//!   platform config directory (`lengua_prefs.json`, key `auth_token`)
//! - [`MemorySessionStore`] - process-local, for tests and ephemeral sessions
//!
//! There is no expiry or refresh; an absent token is the only failure signal.
//! Concurrent saves are last-write-wins.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, RwLock};

use crate::shared::ClientError;

/// Key under which the token is stored
pub const TOKEN_KEY: &str = "auth_token";

/// Persistence of the authentication token
pub trait SessionStore: Send + Sync {
    /// Persist the token, replacing any previous one
    fn save(&self, token: &str) -> Result<(), ClientError>;

    /// The stored token, if any
    fn get(&self) -> Option<String>;

    /// Remove the token. Clearing an empty store is not an error.
    fn clear(&self) -> Result<(), ClientError>;
}

/// Shortened token for log lines
pub(crate) fn token_preview(token: &str) -> String {
    let prefix: String = token.chars().take(8).collect();
    format!("{}...", prefix)
}

/// Token store backed by a JSON file
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, ClientError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) => serde_json::from_str(&contents)
                .map_err(|e| ClientError::storage(format!("{}: {}", self.path.display(), e))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(ClientError::storage(format!("{}: {}", self.path.display(), e))),
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ClientError::storage(format!("{}: {}", parent.display(), e)))?;
        }
        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| ClientError::storage(e.to_string()))?;

        // Write beside the target then rename so readers never see a torn file.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)
            .map_err(|e| ClientError::storage(format!("{}: {}", tmp.display(), e)))?;
        fs::rename(&tmp, &self.path)
            .map_err(|e| ClientError::storage(format!("{}: {}", self.path.display(), e)))
    }
}

impl SessionStore for FileSessionStore {
    fn save(&self, token: &str) -> Result<(), ClientError> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut entries = self.read_entries().unwrap_or_else(|e| {
            tracing::warn!("Discarding unreadable session file: {}", e);
            BTreeMap::new()
        });
        entries.insert(TOKEN_KEY.to_string(), token.to_string());
        self.write_entries(&entries)?;
        tracing::info!("Session token saved ({})", token_preview(token));
        Ok(())
    }

    fn get(&self) -> Option<String> {
        match self.read_entries() {
            Ok(mut entries) => entries.remove(TOKEN_KEY).filter(|t| !t.is_empty()),
            Err(e) => {
                tracing::warn!("Could not read session: {}", e);
                None
            }
        }
    }

    fn clear(&self) -> Result<(), ClientError> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Discarding unreadable session file: {}", e);
                BTreeMap::new()
            }
        };
        if entries.remove(TOKEN_KEY).is_some() || self.path.exists() {
            self.write_entries(&entries)?;
        }
        tracing::info!("Session token cleared");
        Ok(())
    }
}

/// Token store kept in memory only
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: RwLock<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, token: &str) -> Result<(), ClientError> {
        let mut slot = self.token.write().unwrap_or_else(|e| e.into_inner());
        *slot = Some(token.to_string());
        Ok(())
    }

    fn get(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
            .filter(|t| !t.is_empty())
    }

    fn clear(&self) -> Result<(), ClientError> {
        let mut slot = self.token.write().unwrap_or_else(|e| e.into_inner());
        *slot = None;
        Ok(())
    }
}

//! Persisted key-value holder for the session.
//!
//! Two entries (`token`, `user`) in a JSON file under the data directory.
//! Storage failure is never fatal: reads behave as absent, writes are
//! dropped with a warning, and the session simply comes up
//! unauthenticated.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use gymdesk_client::CredentialSource;

/// Store key holding the raw bearer token.
pub const KEY_TOKEN: &str = "token";

/// Store key holding the JSON-serialized user profile.
pub const KEY_USER: &str = "user";

/// Durable key-value persistence for the session entries.
///
/// Owned by the session manager; the API client's 401 interceptor is the
/// only other writer, and it may only [`clear`](SessionStore::clear).
pub trait SessionStore: Send + Sync {
    /// Overwrite a key. No merge semantics.
    fn set(&self, key: &str, value: &str);

    fn get(&self, key: &str) -> Option<String>;

    /// Remove every key this system uses. There is no partial clear.
    fn clear(&self);
}

/// In-memory store for tests and ephemeral (`--no-persist`) sessions.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl SessionStore for MemoryStore {
    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}

/// File-backed store: a single JSON object in `session.json`.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("session.json"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> BTreeMap<String, String> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return BTreeMap::new(),
            Err(e) => {
                tracing::warn!("session file unreadable ({e}); treating as empty");
                return BTreeMap::new();
            }
        };
        match serde_json::from_str(&content) {
            Ok(map) => map,
            Err(e) => {
                tracing::warn!("session file corrupt ({e}); treating as empty");
                BTreeMap::new()
            }
        }
    }

    fn write_map(&self, map: &BTreeMap<String, String>) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!("cannot create data directory ({e}); session not persisted");
                return;
            }
        }
        let content = match serde_json::to_string_pretty(map) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("cannot encode session file ({e}); session not persisted");
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.path, content) {
            tracing::warn!("cannot write session file ({e}); session not persisted");
        }
    }
}

impl SessionStore for FileStore {
    fn set(&self, key: &str, value: &str) {
        let mut map = self.read_map();
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map);
    }

    fn get(&self, key: &str) -> Option<String> {
        self.read_map().get(key).cloned()
    }

    fn clear(&self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("cannot remove session file ({e})"),
        }
    }
}

/// Adapter giving the API client read/clear access to the store.
pub struct StoreCredentials(pub Arc<dyn SessionStore>);

impl CredentialSource for StoreCredentials {
    fn token(&self) -> Option<String> {
        self.0.get(KEY_TOKEN)
    }

    fn clear(&self) {
        self.0.clear();
    }
}

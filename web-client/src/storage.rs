// web-client/src/storage.rs
use dashmap::DashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Storage key for the bearer token
pub const TOKEN_KEY: &str = "token";
/// Storage key for the serialized identity record
pub const IDENTITY_KEY: &str = "user";

/// Persistent key/value store scoped to the two session keys. One file
/// per key under the backing directory, fronted by an in-memory cache so
/// reads are synchronous.
///
/// A store opened without a backing directory is disabled: reads answer
/// absent and writes do nothing. Operations never fail.
pub struct SessionStore {
    dir: Option<PathBuf>,
    cache: DashMap<String, String>,
}

impl SessionStore {
    /// Open the store, loading any previously persisted session keys
    pub fn open(dir: Option<PathBuf>) -> Self {
        let dir = match dir {
            Some(path) => match fs::create_dir_all(&path) {
                Ok(()) => Some(path),
                Err(e) => {
                    tracing::warn!("Session storage unavailable at {}: {}", path.display(), e);
                    None
                }
            },
            None => None,
        };

        let cache = DashMap::new();
        if let Some(base) = &dir {
            for key in [TOKEN_KEY, IDENTITY_KEY] {
                if let Ok(value) = fs::read_to_string(base.join(key)) {
                    cache.insert(key.to_string(), value);
                }
            }
        }

        Self { dir, cache }
    }

    /// Whether a persistent backing directory is attached
    pub fn is_persistent(&self) -> bool {
        self.dir.is_some()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.dir.as_ref()?;
        self.cache.get(key).map(|entry| entry.value().clone())
    }

    pub fn set(&self, key: &str, value: &str) {
        let base = match &self.dir {
            Some(base) => base,
            None => return,
        };

        if let Err(e) = fs::write(base.join(key), value) {
            // Keep the in-memory view coherent for this process lifetime
            tracing::warn!("Failed to persist session key {}: {}", key, e);
        }
        self.cache.insert(key.to_string(), value.to_string());
    }

    pub fn remove(&self, key: &str) {
        let base = match &self.dir {
            Some(base) => base,
            None => return,
        };

        if let Err(e) = fs::remove_file(base.join(key)) {
            if e.kind() != ErrorKind::NotFound {
                tracing::warn!("Failed to remove session key {}: {}", key, e);
            }
        }
        self.cache.remove(key);
    }

    /// Drop both session keys together. Repeated eviction is a no-op.
    pub fn clear_session(&self) {
        self.remove(TOKEN_KEY);
        self.remove(IDENTITY_KEY);
    }
}

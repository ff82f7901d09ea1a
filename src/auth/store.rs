//! Token Storage
//!
//! The session tokens live in a small key-value store behind the
//! [`TokenStore`] trait so the rest of the crate never hard-wires a storage
//! backend: the CLI persists to a JSON file, tests substitute an in-memory
//! fake. Reads and writes are pure accessors with no validation.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::warn;

/// Storage key for the short-lived access token.
pub const ACCESS_TOKEN_KEY: &str = "rankwise_token";

/// Storage key for the long-lived refresh token.
pub const REFRESH_TOKEN_KEY: &str = "rankwise_refresh";

/// A persisted string key-value store for session tokens.
///
/// Mirrors the semantics of browser local storage: every operation is a
/// single synchronous primitive and never fails from the caller's point of
/// view. Backend I/O problems are logged and swallowed.
pub trait TokenStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store used by tests and short-lived embedders.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// File-backed store used by the CLI so sessions survive between
/// invocations. The whole document is rewritten on every mutation; writes go
/// through a temp file and rename so a crash never leaves a torn file.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn load(&self) -> HashMap<String, String> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("token file {} is corrupt: {e}", self.path.display());
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        }
    }

    fn save(&self, entries: &HashMap<String, String>) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                warn!("failed to create {}: {e}", parent.display());
                return;
            }
        }
        let raw = match serde_json::to_string_pretty(entries) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("failed to serialize token file: {e}");
                return;
            }
        };
        let tmp = self.path.with_extension("json.tmp");
        if let Err(e) = fs::write(&tmp, raw).and_then(|_| fs::rename(&tmp, &self.path)) {
            warn!("failed to write {}: {e}", self.path.display());
        }
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        self.load().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.load();
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.load();
        if entries.remove(key).is_some() {
            self.save(&entries);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrip() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.get(ACCESS_TOKEN_KEY), None);
        store.set(ACCESS_TOKEN_KEY, "abc");
        assert_eq!(store.get(ACCESS_TOKEN_KEY), Some("abc".to_string()));
        store.remove(ACCESS_TOKEN_KEY);
        assert_eq!(store.get(ACCESS_TOKEN_KEY), None);
        // Removing again is a no-op.
        store.remove(ACCESS_TOKEN_KEY);
    }

    #[test]
    fn file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = FileTokenStore::new(path.clone());
        store.set(ACCESS_TOKEN_KEY, "abc");
        store.set(REFRESH_TOKEN_KEY, "def");

        let reopened = FileTokenStore::new(path);
        assert_eq!(reopened.get(ACCESS_TOKEN_KEY), Some("abc".to_string()));
        assert_eq!(reopened.get(REFRESH_TOKEN_KEY), Some("def".to_string()));

        reopened.remove(ACCESS_TOKEN_KEY);
        assert_eq!(reopened.get(ACCESS_TOKEN_KEY), None);
        assert_eq!(reopened.get(REFRESH_TOKEN_KEY), Some("def".to_string()));
    }

    #[test]
    fn corrupt_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = FileTokenStore::new(path);
        assert_eq!(store.get(ACCESS_TOKEN_KEY), None);
        store.set(ACCESS_TOKEN_KEY, "abc");
        assert_eq!(store.get(ACCESS_TOKEN_KEY), Some("abc".to_string()));
    }
}

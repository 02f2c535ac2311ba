//! Session gate: bearer token persistence and the authentication state
//! derived from it.
//!
//! The token lives in a small key-value store under [`TOKEN_KEY`]. Presence
//! of a non-empty token means "logged in"; there is no expiry or refresh.
//! Another client instance sharing the same store can log in or out at any
//! time, so the gate re-reads the store on [`SessionGate::poll_external_change`].

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context as _, Result};
use serde_json::{Map, Value};
use tracing::{info, warn};

pub const TOKEN_KEY: &str = "token";

/// Persistent storage for the session token
pub trait TokenStore: Send {
    fn load(&self) -> Result<Option<String>>;
    fn save(&mut self, token: &str) -> Result<()>;
    fn clear(&mut self) -> Result<()>;
}

/// JSON object file. Only [`TOKEN_KEY`] is ours; other entries are left as
/// they are, whatever their type.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_entries(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        if raw.trim().is_empty() {
            return Ok(Map::new());
        }
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", self.path.display()))
    }

    fn write_entries(&self, entries: &Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let raw = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, raw).with_context(|| format!("writing {}", self.path.display()))
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self
            .read_entries()?
            .remove(TOKEN_KEY)
            .and_then(|value| value.as_str().map(str::to_owned)))
    }

    fn save(&mut self, token: &str) -> Result<()> {
        // A corrupt file is replaced rather than blocking the login
        let mut entries = self.read_entries().unwrap_or_default();
        entries.insert(TOKEN_KEY.to_string(), Value::String(token.to_string()));
        self.write_entries(&entries)
    }

    fn clear(&mut self) -> Result<()> {
        let mut entries = self.read_entries().unwrap_or_default();
        if entries.remove(TOKEN_KEY).is_none() && !self.path.exists() {
            return Ok(());
        }
        self.write_entries(&entries)
    }
}

/// In-process store. Clones share the same slot, like two windows sharing
/// one browser profile.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>> {
        let slot = self
            .slot
            .lock()
            .map_err(|_| anyhow::anyhow!("token store lock poisoned"))?;
        Ok(slot.clone())
    }

    fn save(&mut self, token: &str) -> Result<()> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| anyhow::anyhow!("token store lock poisoned"))?;
        *slot = Some(token.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| anyhow::anyhow!("token store lock poisoned"))?;
        *slot = None;
        Ok(())
    }
}

/// Tracks whether a bearer token exists and hands it to the API client
pub struct SessionGate {
    store: Box<dyn TokenStore>,
    token: Option<String>,
}

impl SessionGate {
    pub fn new(store: impl TokenStore + 'static) -> Self {
        let token = read_token(&store);
        Self {
            store: Box::new(store),
            token,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn login(&mut self, token: String) -> Result<()> {
        if token.is_empty() {
            anyhow::bail!("refusing to store an empty session token");
        }
        self.store.save(&token).context("storing session token")?;
        self.token = Some(token);
        info!("session started");
        Ok(())
    }

    /// Local only: the server is never told about the logout. If the store
    /// cannot be cleared the session stays active, otherwise the next poll
    /// would read the token back in.
    pub fn logout(&mut self) -> Result<()> {
        self.store.clear().context("clearing session token")?;
        self.token = None;
        info!("session cleared");
        Ok(())
    }

    /// Re-derive the authentication state from storage. Returns `true` when
    /// it flipped since the last check.
    pub fn poll_external_change(&mut self) -> bool {
        let current = read_token(self.store.as_ref());
        let flipped = current.is_some() != self.token.is_some();
        if flipped {
            info!(
                authenticated = current.is_some(),
                "session changed outside this window"
            );
        }
        self.token = current;
        flipped
    }
}

fn read_token(store: &dyn TokenStore) -> Option<String> {
    match store.load() {
        Ok(token) => token.filter(|t| !t.is_empty()),
        Err(e) => {
            warn!(error = %e, "failed to read session token");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::{resolve, Route};

    #[test]
    fn login_unlocks_protected_routes() {
        let mut gate = SessionGate::new(MemoryTokenStore::new());
        assert!(!gate.is_authenticated());
        assert_eq!(resolve(Route::Employees, gate.is_authenticated()), Route::Login);

        gate.login("abc".to_string()).unwrap();
        assert!(gate.is_authenticated());
        assert_eq!(gate.token(), Some("abc"));
        assert_eq!(resolve(Route::Employees, gate.is_authenticated()), Route::Employees);
    }

    #[test]
    fn cleared_token_redirects_every_protected_route_to_login() {
        let store = MemoryTokenStore::new();
        let mut gate = SessionGate::new(store.clone());
        gate.login("abc".to_string()).unwrap();

        // Another window clears the shared store
        store.clone().clear().unwrap();
        assert!(gate.poll_external_change());
        assert!(!gate.is_authenticated());

        for route in [
            Route::Home,
            Route::Employees,
            Route::EmployeeDetail("1".into()),
            Route::AddEmployee,
            Route::EditEmployee("1".into()),
        ] {
            assert_eq!(resolve(route, gate.is_authenticated()), Route::Login);
        }
    }

    #[test]
    fn poll_reports_only_flips() {
        let store = MemoryTokenStore::new();
        let mut gate = SessionGate::new(store.clone());
        assert!(!gate.poll_external_change());

        store.clone().save("first").unwrap();
        assert!(gate.poll_external_change());
        assert!(!gate.poll_external_change());

        // Token rotated by another window: still logged in, picks up the new value
        store.clone().save("second").unwrap();
        assert!(!gate.poll_external_change());
        assert_eq!(gate.token(), Some("second"));
    }

    #[test]
    fn empty_token_counts_as_logged_out() {
        let mut store = MemoryTokenStore::new();
        store.save("").unwrap();
        let mut gate = SessionGate::new(store);
        assert!(!gate.is_authenticated());
        assert!(gate.login(String::new()).is_err());
    }

    #[test]
    fn file_store_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let mut gate = SessionGate::new(FileTokenStore::new(&path));
        gate.login("persisted".to_string()).unwrap();

        let reopened = SessionGate::new(FileTokenStore::new(&path));
        assert_eq!(reopened.token(), Some("persisted"));

        gate.logout().unwrap();
        let reopened = SessionGate::new(FileTokenStore::new(&path));
        assert!(!reopened.is_authenticated());
    }

    #[test]
    fn file_store_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, r#"{"theme":"dark"}"#).unwrap();

        let mut store = FileTokenStore::new(&path);
        store.save("t").unwrap();
        store.clear().unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let entries: Map<String, Value> = serde_json::from_str(&raw).unwrap();
        assert_eq!(entries.get("theme"), Some(&Value::from("dark")));
        assert!(!entries.contains_key(TOKEN_KEY));
    }

    #[test]
    fn file_store_tolerates_non_string_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, r#"{"token":"abc","remember":true,"window":{"w":1200}}"#).unwrap();

        let mut gate = SessionGate::new(FileTokenStore::new(&path));
        assert_eq!(gate.token(), Some("abc"));

        gate.logout().unwrap();
        gate.login("def".to_string()).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let entries: Map<String, Value> = serde_json::from_str(&raw).unwrap();
        assert_eq!(entries.get("remember"), Some(&Value::Bool(true)));
        assert_eq!(entries.get("window"), Some(&serde_json::json!({ "w": 1200 })));
        assert_eq!(entries.get(TOKEN_KEY), Some(&Value::from("def")));
    }

    /// Keeps its token no matter what
    struct StuckStore(MemoryTokenStore);

    impl TokenStore for StuckStore {
        fn load(&self) -> Result<Option<String>> {
            self.0.load()
        }

        fn save(&mut self, token: &str) -> Result<()> {
            self.0.save(token)
        }

        fn clear(&mut self) -> Result<()> {
            anyhow::bail!("read-only file system")
        }
    }

    #[test]
    fn failed_logout_keeps_the_session_instead_of_resurrecting_it() {
        let mut gate = SessionGate::new(StuckStore(MemoryTokenStore::new()));
        gate.login("abc".to_string()).unwrap();

        assert!(gate.logout().is_err());
        assert!(gate.is_authenticated());
        assert_eq!(gate.token(), Some("abc"));

        // The store still holds the token, so polling sees nothing new
        assert!(!gate.poll_external_change());
        assert!(gate.is_authenticated());
    }

    #[test]
    fn corrupt_file_reads_as_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();

        let mut gate = SessionGate::new(FileTokenStore::new(&path));
        assert!(!gate.is_authenticated());
        gate.login("fresh".to_string()).unwrap();
        assert_eq!(FileTokenStore::new(&path).load().unwrap().as_deref(), Some("fresh"));
    }

    #[test]
    fn clearing_a_missing_file_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let mut store = FileTokenStore::new(&path);
        store.clear().unwrap();
        assert!(!path.exists());
    }
}

//! Session persistence — the remembered login between restarts.
//!
//! The store itself resets to the seed fixture at every process start;
//! the only state that survives is the authenticated-user mirror kept
//! here. A small load/save/clear interface stands in for browser-local
//! storage, injected wherever a session is needed so tests get an
//! in-memory instance.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config;
use crate::models::{User, UserRole};

// ═══════════════════════════════════════════════════════════
// SessionUser — the persisted identity
// ═══════════════════════════════════════════════════════════

/// The serialized authenticated-user object. Absence means logged out.
/// Deliberately excludes the password: only what the UI and the route
/// guards need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub phone: String,
    pub role: UserRole,
}

impl From<&User> for SessionUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            phone: user.phone.clone(),
            role: user.role,
        }
    }
}

// ═══════════════════════════════════════════════════════════
// SessionStore — load/save/clear seam
// ═══════════════════════════════════════════════════════════

/// Key-value session persistence. One key, one value: the current user.
pub trait SessionStore {
    /// Read the persisted session, if any.
    fn load(&self) -> Option<SessionUser>;
    /// Persist (or overwrite) the session mirror.
    fn save(&mut self, user: &SessionUser);
    /// Drop the persisted session. Idempotent.
    fn clear(&mut self);
}

// ═══════════════════════════════════════════════════════════
// FileSessionStore — JSON under the app data dir
// ═══════════════════════════════════════════════════════════

/// File-backed session mirror. I/O failures are logged and treated as
/// "no session" — a missing or corrupt file simply means logged out.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the standard location (`~/Dantika/session.json`).
    pub fn at_default_location() -> Self {
        Self::new(config::session_file())
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Option<SessionUser> {
        let raw = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("Discarding unreadable session file: {e}");
                None
            }
        }
    }

    fn save(&mut self, user: &SessionUser) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::warn!("Failed to create session dir: {e}");
                return;
            }
        }
        match serde_json::to_string_pretty(user) {
            Ok(json) => {
                if let Err(e) = fs::write(&self.path, json) {
                    tracing::warn!("Failed to persist session: {e}");
                }
            }
            Err(e) => tracing::warn!("Failed to serialize session: {e}"),
        }
    }

    fn clear(&mut self) {
        if self.path.exists() {
            if let Err(e) = fs::remove_file(&self.path) {
                tracing::warn!("Failed to remove session file: {e}");
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════
// MemorySessionStore — for tests and embedding
// ═══════════════════════════════════════════════════════════

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slot: Option<SessionUser>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a pre-existing session, as after a "page reload".
    pub fn with_session(user: SessionUser) -> Self {
        Self { slot: Some(user) }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<SessionUser> {
        self.slot.clone()
    }

    fn save(&mut self, user: &SessionUser) {
        self.slot = Some(user.clone());
    }

    fn clear(&mut self) {
        self.slot = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> SessionUser {
        SessionUser {
            id: "1735689600002-0a1b2c".into(),
            email: "nusrat@example.com".into(),
            full_name: "Nusrat Jahan".into(),
            phone: "+8801912345678".into(),
            role: UserRole::Patient,
        }
    }

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemorySessionStore::new();
        assert!(store.load().is_none());

        store.save(&sample_user());
        assert_eq!(store.load(), Some(sample_user()));

        store.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileSessionStore::new(dir.path().join("session.json"));

        assert!(store.load().is_none());
        store.save(&sample_user());
        assert_eq!(store.load(), Some(sample_user()));

        // A second store at the same path sees the session — the
        // "page reload restores login" behavior.
        let reopened = FileSessionStore::new(dir.path().join("session.json"));
        assert_eq!(reopened.load(), Some(sample_user()));

        store.clear();
        assert!(store.load().is_none());
        store.clear(); // idempotent
    }

    #[test]
    fn corrupt_session_file_means_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = FileSessionStore::new(path);
        assert!(store.load().is_none());
    }

    #[test]
    fn session_user_drops_password() {
        let user = User {
            id: "u-1".into(),
            email: "a@b.com".into(),
            password: "hunter2".into(),
            full_name: "A B".into(),
            phone: "0".into(),
            role: UserRole::Admin,
        };
        let session = SessionUser::from(&user);
        let json = serde_json::to_string(&session).unwrap();
        assert!(!json.contains("hunter2"));
        assert_eq!(session.role, UserRole::Admin);
    }
}

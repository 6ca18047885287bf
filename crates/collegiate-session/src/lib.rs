//! # Collegiate Session
//!
//! The durable client-side session: the bearer token and role tag issued at
//! login, surviving process restarts.
//!
//! The store has exactly one writer (the auth flow) and many readers (the
//! request authorizer, role-display helpers). Token and role are persisted
//! together or not at all; readers fetch on demand rather than caching, so a
//! fresh login in another process is visible immediately.
//!
//! # Example
//!
//! ```ignore
//! use collegiate_session::{Session, SessionStore};
//!
//! let store = SessionStore::at("/home/op/.config/collegiate/session.json");
//! store.set(&Session::new("token", "ROLE_ADMIN"))?;
//! assert_eq!(store.role().as_deref(), Some("ROLE_ADMIN"));
//! store.clear()?;
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// An authenticated session: the bearer token and the role tag the backend
/// issued with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub role: String,
}

impl Session {
    #[must_use]
    pub fn new(token: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            role: role.into(),
        }
    }
}

/// Error raised when the session cannot be persisted or removed.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("failed to write session: {0}")]
    Write(#[source] io::Error),
    #[error("failed to clear session: {0}")]
    Clear(#[source] io::Error),
}

enum Backing {
    File(PathBuf),
    Memory(Mutex<Option<Session>>),
}

/// Durable storage for the current [`Session`].
///
/// The file backing writes the whole session document to a temporary file
/// and renames it into place, so token and role always land together. An
/// unreadable or corrupt file reads as "no session".
pub struct SessionStore {
    backing: Backing,
}

impl SessionStore {
    /// A store persisted at the given path.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            backing: Backing::File(path.into()),
        }
    }

    /// A store that lives only as long as the process. Used by tests and
    /// one-shot invocations that must not touch the operator's session.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            backing: Backing::Memory(Mutex::new(None)),
        }
    }

    /// Persist a session, overwriting any prior one.
    pub fn set(&self, session: &Session) -> Result<(), SessionError> {
        match &self.backing {
            Backing::File(path) => write_atomically(path, session).map_err(SessionError::Write),
            Backing::Memory(slot) => {
                *slot.lock().expect("session lock poisoned") = Some(session.clone());
                Ok(())
            }
        }
    }

    /// The current session, if one is stored.
    #[must_use]
    pub fn get(&self) -> Option<Session> {
        match &self.backing {
            Backing::File(path) => {
                let bytes = fs::read(path).ok()?;
                match serde_json::from_slice(&bytes) {
                    Ok(session) => Some(session),
                    Err(err) => {
                        warn!(path = %path.display(), error = %err, "Ignoring unreadable session file");
                        None
                    }
                }
            }
            Backing::Memory(slot) => slot.lock().expect("session lock poisoned").clone(),
        }
    }

    /// The stored bearer token, if any.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.get().map(|session| session.token)
    }

    /// The stored role tag, if any.
    #[must_use]
    pub fn role(&self) -> Option<String> {
        self.get().map(|session| session.role)
    }

    /// Remove the session entirely. Removing an absent session is not an
    /// error.
    pub fn clear(&self) -> Result<(), SessionError> {
        match &self.backing {
            Backing::File(path) => match fs::remove_file(path) {
                Ok(()) => Ok(()),
                Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
                Err(err) => Err(SessionError::Clear(err)),
            },
            Backing::Memory(slot) => {
                *slot.lock().expect("session lock poisoned") = None;
                Ok(())
            }
        }
    }
}

fn write_atomically(path: &Path, session: &Session) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let body = serde_json::to_vec_pretty(session)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, body)?;
    fs::rename(&tmp, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_session_path() -> PathBuf {
        env::temp_dir().join(format!("collegiate-session-{}.json", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_set_then_get_round_trip() {
        let path = temp_session_path();
        let store = SessionStore::at(&path);
        store.set(&Session::new("t1", "ROLE_FACULTY")).unwrap();

        assert_eq!(store.token().as_deref(), Some("t1"));
        assert_eq!(store.role().as_deref(), Some("ROLE_FACULTY"));

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_overwrite_replaces_both_values() {
        let path = temp_session_path();
        let store = SessionStore::at(&path);
        store.set(&Session::new("t1", "ROLE_ADMIN")).unwrap();
        store.set(&Session::new("t2", "ROLE_STUDENT")).unwrap();

        assert_eq!(
            store.get(),
            Some(Session::new("t2", "ROLE_STUDENT"))
        );

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_empty_store_reads_none() {
        let store = SessionStore::at(temp_session_path());
        assert_eq!(store.get(), None);
        assert_eq!(store.token(), None);
        assert_eq!(store.role(), None);
    }

    #[test]
    fn test_clear_removes_session() {
        let path = temp_session_path();
        let store = SessionStore::at(&path);
        store.set(&Session::new("t1", "ROLE_ADMIN")).unwrap();
        store.clear().unwrap();

        assert_eq!(store.get(), None);
        assert!(!path.exists());
    }

    #[test]
    fn test_clear_absent_session_is_ok() {
        let store = SessionStore::at(temp_session_path());
        assert!(store.clear().is_ok());
    }

    #[test]
    fn test_corrupt_file_reads_none() {
        let path = temp_session_path();
        fs::write(&path, b"not json").unwrap();
        let store = SessionStore::at(&path);

        assert_eq!(store.get(), None);

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_in_memory_store() {
        let store = SessionStore::in_memory();
        assert_eq!(store.get(), None);

        store.set(&Session::new("t1", "ROLE_DEPARTMENT")).unwrap();
        assert_eq!(store.role().as_deref(), Some("ROLE_DEPARTMENT"));

        store.clear().unwrap();
        assert_eq!(store.get(), None);
    }
}

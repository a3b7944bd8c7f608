//! Durable session-token storage.
//!
//! The backend issues an opaque bearer token on successful login or email
//! verification. The [`SessionStore`] persists it to a file so the session
//! survives process restarts, and hands it to the API gateway for the
//! `Authorization` header on every request until it is cleared.
//!
//! The store is forgiving about its durable backing: a missing or
//! unreadable file simply means "no session". Clones share state, so the
//! gateway and the auth flow observe the same token.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when persisting the session token.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Writing or removing the token file failed.
    #[error("session storage at {}: {source}", .path.display())]
    Storage {
        /// Token file location.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Process-wide bearer-token store.
///
/// Exactly one logical instance exists per process; clones share the same
/// state. The token is held in memory and mirrored to the durable file,
/// so a failed write degrades to a memory-only session instead of losing
/// the login.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    /// Durable location; `None` for a memory-only store.
    path: Option<PathBuf>,
    /// Current token, loaded once from the file at construction.
    token: Mutex<Option<SecretString>>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let present = self
            .inner
            .token
            .lock()
            .map(|token| token.is_some())
            .unwrap_or(false);
        f.debug_struct("SessionStore")
            .field("path", &self.inner.path)
            .field("token", &if present { "[REDACTED]" } else { "[NONE]" })
            .finish()
    }
}

impl SessionStore {
    /// Create a store backed by a token file.
    ///
    /// An existing token at `path` is loaded immediately; any read failure
    /// (missing file, permissions, non-UTF-8 content) is treated as an
    /// absent session.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let token = read_token_file(&path);
        Self {
            inner: Arc::new(SessionInner {
                path: Some(path),
                token: Mutex::new(token),
            }),
        }
    }

    /// Create a store with no durable backing.
    ///
    /// Used when no session file location is available; the token lives
    /// for the process lifetime only.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(SessionInner {
                path: None,
                token: Mutex::new(None),
            }),
        }
    }

    /// The current bearer token, if a session exists.
    ///
    /// Never fails: storage problems surface as `None`.
    #[must_use]
    pub fn token(&self) -> Option<SecretString> {
        self.inner
            .token
            .lock()
            .ok()
            .and_then(|token| token.clone())
    }

    /// True when a session token is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Replace the stored token, or clear it with `None`.
    ///
    /// The in-memory value is updated first, so the session is usable for
    /// the rest of the process even when the durable write fails.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` if the token file cannot be
    /// written or removed.
    pub fn set_token(&self, token: Option<SecretString>) -> Result<(), SessionError> {
        if let Ok(mut current) = self.inner.token.lock() {
            current.clone_from(&token);
        }

        let Some(path) = &self.inner.path else {
            return Ok(());
        };

        match token {
            Some(token) => write_token_file(path, &token),
            None => remove_token_file(path),
        }
    }
}

fn read_token_file(path: &Path) -> Option<SecretString> {
    let contents = std::fs::read_to_string(path).ok()?;
    let trimmed = contents.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(SecretString::from(trimmed.to_owned()))
    }
}

fn write_token_file(path: &Path, token: &SecretString) -> Result<(), SessionError> {
    let storage = |source| SessionError::Storage {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(storage)?;
    }

    std::fs::write(path, token.expose_secret()).map_err(storage)?;

    // The token authorises the whole account; keep it owner-readable.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600)).map_err(storage)?;
    }

    debug!(path = %path.display(), "Session token persisted");
    Ok(())
}

fn remove_token_file(path: &Path) -> Result<(), SessionError> {
    match std::fs::remove_file(path) {
        Ok(()) => {
            debug!(path = %path.display(), "Session token cleared");
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(SessionError::Storage {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn temp_session_path() -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session");
        (dir, path)
    }

    #[test]
    fn test_missing_file_is_absent_session() {
        let (_dir, path) = temp_session_path();
        let store = SessionStore::new(&path);
        assert!(store.token().is_none());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_set_and_get_roundtrip() {
        let (_dir, path) = temp_session_path();
        let store = SessionStore::new(&path);
        store
            .set_token(Some(SecretString::from("tok-123".to_owned())))
            .unwrap();
        assert_eq!(store.token().unwrap().expose_secret(), "tok-123");
    }

    #[test]
    fn test_token_survives_new_store_at_same_path() {
        let (_dir, path) = temp_session_path();
        let first = SessionStore::new(&path);
        first
            .set_token(Some(SecretString::from("persisted".to_owned())))
            .unwrap();

        let second = SessionStore::new(&path);
        assert_eq!(second.token().unwrap().expose_secret(), "persisted");
    }

    #[test]
    fn test_clear_removes_file() {
        let (_dir, path) = temp_session_path();
        let store = SessionStore::new(&path);
        store
            .set_token(Some(SecretString::from("tok".to_owned())))
            .unwrap();
        store.set_token(None).unwrap();

        assert!(store.token().is_none());
        assert!(!path.exists());
        // Clearing an already-clear session is a no-op.
        store.set_token(None).unwrap();
    }

    #[test]
    fn test_clones_share_state() {
        let (_dir, path) = temp_session_path();
        let store = SessionStore::new(&path);
        let clone = store.clone();
        store
            .set_token(Some(SecretString::from("shared".to_owned())))
            .unwrap();
        assert_eq!(clone.token().unwrap().expose_secret(), "shared");
    }

    #[test]
    fn test_in_memory_store() {
        let store = SessionStore::in_memory();
        assert!(store.token().is_none());
        store
            .set_token(Some(SecretString::from("volatile".to_owned())))
            .unwrap();
        assert!(store.is_authenticated());
        store.set_token(None).unwrap();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_whitespace_only_file_is_absent() {
        let (_dir, path) = temp_session_path();
        std::fs::write(&path, "  \n").unwrap();
        let store = SessionStore::new(&path);
        assert!(store.token().is_none());
    }

    #[test]
    fn test_debug_redacts_token() {
        let store = SessionStore::in_memory();
        store
            .set_token(Some(SecretString::from("super-secret".to_owned())))
            .unwrap();
        let output = format!("{store:?}");
        assert!(output.contains("[REDACTED]"));
        assert!(!output.contains("super-secret"));
    }

    #[cfg(unix)]
    #[test]
    fn test_token_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let (_dir, path) = temp_session_path();
        let store = SessionStore::new(&path);
        store
            .set_token(Some(SecretString::from("tok".to_owned())))
            .unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}

//! Session store backed by the auth collaborator's session file.
//!
//! The session is read once at startup; `current_user` is a synchronous
//! in-memory read after that. Logout is treated as always-succeeding
//! from the UI's perspective: removing the session file is best-effort
//! and failures are only logged.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::StoreResult;
use crate::types::SessionUser;

/// File name under the data directory where the auth collaborator
/// persists the signed-in user.
const SESSION_FILE: &str = "session.json";

/// In-memory view of the current session
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
    user: Option<SessionUser>,
}

impl SessionStore {
    /// Load the session from `data_dir/session.json`.
    ///
    /// A missing file means a guest session. A file that exists but does
    /// not parse is also treated as a guest session rather than an
    /// error; the storefront must stay usable either way.
    pub fn load(data_dir: &Path) -> StoreResult<Self> {
        let path = data_dir.join(SESSION_FILE);
        let user = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<SessionUser>(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "ignoring unreadable session file");
                    None
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        };

        Ok(Self { path, user })
    }

    /// An empty guest session that never touches the filesystem
    pub fn guest() -> Self {
        Self {
            path: PathBuf::new(),
            user: None,
        }
    }

    /// The signed-in user, if any. Synchronous; no network call.
    pub fn current_user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    /// Clear the session.
    ///
    /// Always succeeds as far as callers are concerned; a failure to
    /// remove the session file leaves a stale file behind but the
    /// in-memory session is gone regardless.
    pub fn logout(&mut self) {
        self.user = None;
        if !self.path.as_os_str().is_empty() {
            if let Err(e) = fs::remove_file(&self.path) {
                if e.kind() != std::io::ErrorKind::NotFound {
                    debug!(path = %self.path.display(), error = %e, "could not remove session file");
                }
            }
        }
    }
}

//! Session-scoped virtual working directories.
//!
//! The interpreter is stateless per call: it reads the current directory for
//! a caller-supplied session identifier, and writes it back only after a
//! successful `cd`. Concurrent requests for the same session are expected to
//! be serialized by the transport; this store only guards the map itself.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::debug;

pub struct SessionStore {
    default_dir: PathBuf,
    sessions: RwLock<HashMap<String, PathBuf>>,
}

impl SessionStore {
    /// `default_dir` is the directory fresh sessions start in, typically the
    /// server's own working directory at startup.
    pub fn new(default_dir: PathBuf) -> Self {
        Self {
            default_dir,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Current directory for `session_id`, creating the session at the
    /// default directory on first contact.
    pub fn current_dir(&self, session_id: &str) -> PathBuf {
        if let Some(dir) = self.sessions.read().unwrap().get(session_id) {
            return dir.clone();
        }
        let mut sessions = self.sessions.write().unwrap();
        sessions
            .entry(session_id.to_string())
            .or_insert_with(|| {
                debug!(session = %session_id, dir = %self.default_dir.display(), "session created");
                self.default_dir.clone()
            })
            .clone()
    }

    pub fn set_current_dir(&self, session_id: &str, dir: &Path) {
        self.sessions
            .write()
            .unwrap()
            .insert(session_id.to_string(), dir.to_path_buf());
    }

    pub fn session_count(&self) -> usize {
        self.sessions.read().unwrap().len()
    }
}

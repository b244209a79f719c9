//! Concurrent session registry over DashMap.

use dashmap::DashMap;
use tracing::debug;

use recall_core::config::SessionConfig;

use crate::context::SessionState;

/// Thread-safe session registry. Each entry is independent; concurrent
/// queries on different sessions never contend.
pub struct SessionManager {
    sessions: DashMap<String, SessionState>,
    config: SessionConfig,
}

impl SessionManager {
    /// Create a new SessionManager with the given session config.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            sessions: DashMap::new(),
            config,
        }
    }

    /// Create a new session and return its ID. An existing session with
    /// the same ID is replaced.
    pub fn create_session(&self, session_id: String) -> String {
        let state = SessionState::new(session_id.clone(), &self.config);
        self.sessions.insert(session_id.clone(), state);
        debug!(session_id = %session_id, "session created");
        session_id
    }

    /// Get a session state by ID (cloned snapshot).
    pub fn get_session(&self, session_id: &str) -> Option<SessionState> {
        self.sessions.get(session_id).map(|r| r.clone())
    }

    /// Remove a session.
    pub fn remove_session(&self, session_id: &str) -> Option<SessionState> {
        self.sessions.remove(session_id).map(|(_, v)| v)
    }

    /// Record a completed exchange in a session. Returns false if the
    /// session does not exist.
    pub fn record_exchange(&self, session_id: &str, user: &str, assistant: &str) -> bool {
        if let Some(mut entry) = self.sessions.get_mut(session_id) {
            entry.record_exchange(user, assistant);
            true
        } else {
            false
        }
    }

    /// The current transcript of a session's history window.
    pub fn transcript(&self, session_id: &str) -> Option<String> {
        self.sessions.get(session_id).map(|s| s.history.transcript())
    }

    /// Number of active sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

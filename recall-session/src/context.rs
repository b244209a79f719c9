//! Per-conversation history and activity tracking.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use recall_core::config::SessionConfig;

use crate::history::HistoryWindow;

/// Per-session state: the rolling history window plus activity metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    /// Unique session identifier.
    pub session_id: String,
    /// When this session was created.
    pub created_at: DateTime<Utc>,
    /// Last activity timestamp.
    pub last_activity: DateTime<Utc>,
    /// Rolling window of recent turns.
    pub history: HistoryWindow,
    /// Total queries made in this session.
    pub queries_made: u64,
}

impl SessionState {
    /// Create a new session state.
    pub fn new(session_id: String, config: &SessionConfig) -> Self {
        let now = Utc::now();
        Self {
            session_id,
            created_at: now,
            last_activity: now,
            history: HistoryWindow::new(config),
            queries_made: 0,
        }
    }

    /// Record a completed user/assistant exchange.
    pub fn record_exchange(&mut self, user: impl Into<String>, assistant: impl Into<String>) {
        self.history.record_exchange(user, assistant);
        self.queries_made += 1;
        self.last_activity = Utc::now();
    }

    /// Duration since last activity.
    pub fn idle_duration(&self) -> chrono::Duration {
        Utc::now() - self.last_activity
    }
}

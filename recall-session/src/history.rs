//! Fixed-size rolling window of conversation turns.

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

use recall_core::config::SessionConfig;

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// One conversation turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Rolling window over the most recent turns. Once `max_turns` is
/// reached, the oldest turn is evicted for each new one recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryWindow {
    turns: VecDeque<ChatTurn>,
    max_turns: usize,
}

impl HistoryWindow {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            turns: VecDeque::with_capacity(config.max_turns),
            max_turns: config.max_turns,
        }
    }

    /// Append one turn, evicting the oldest if the window is full.
    /// A zero-size window stays empty.
    pub fn push(&mut self, turn: ChatTurn) {
        if self.max_turns == 0 {
            return;
        }
        if self.turns.len() == self.max_turns {
            self.turns.pop_front();
        }
        self.turns.push_back(turn);
    }

    /// Record a completed user/assistant exchange.
    pub fn record_exchange(&mut self, user: impl Into<String>, assistant: impl Into<String>) {
        self.push(ChatTurn::user(user));
        self.push(ChatTurn::assistant(assistant));
    }

    /// The retained turns, oldest first.
    pub fn recent(&self) -> impl Iterator<Item = &ChatTurn> {
        self.turns.iter()
    }

    /// Render the window as "role: content" lines, ready for prompt
    /// interpolation.
    pub fn transcript(&self) -> String {
        self.turns
            .iter()
            .map(|t| format!("{}: {}", t.role, t.content))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Drop all retained turns.
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

impl Default for HistoryWindow {
    fn default() -> Self {
        Self::new(&SessionConfig::default())
    }
}

//! # recall-session
//!
//! Per-conversation state: a fixed-size rolling window of chat turns and
//! a concurrent session registry. The orchestrator feeds the window's
//! transcript back into the prompt alongside retrieved stories.

pub mod context;
pub mod history;
pub mod manager;

pub use context::SessionState;
pub use history::{ChatTurn, HistoryWindow, Role};
pub use manager::SessionManager;

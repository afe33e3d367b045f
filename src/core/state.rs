//! # Application State
//!
//! Core business state for AyurAssist. Domain logic only, no TUI types.
//! Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── client: Arc<dyn AnalysisClient>  // analysis service
//! ├── query: String                    // free-text symptom description
//! ├── outcome: AnalysisOutcome         // the single outcome slot
//! ├── generation: u64                  // id of the newest submitted request
//! └── status_message: String           // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::analysis::{AnalysisClient, AnalysisOutcome};

pub struct App {
    pub client: Arc<dyn AnalysisClient>,
    pub query: String,
    pub outcome: AnalysisOutcome,
    /// Incremented on every accepted submit. Responses tagged with an older
    /// value are stale and dropped.
    pub generation: u64,
    pub status_message: String,
}

impl App {
    pub fn new(client: Arc<dyn AnalysisClient>) -> Self {
        Self {
            client,
            query: String::new(),
            outcome: AnalysisOutcome::Idle,
            generation: 0,
            status_message: String::from("Describe your symptoms"),
        }
    }

    pub fn endpoint(&self) -> &str {
        self.client.endpoint()
    }
}

//! The single outcome slot and the rule that fills it from a finished request.

use log::{info, warn};

use super::client::AnalysisError;
use super::types::{AnalysisReport, RawResponse};

pub const EMPTY_MESSAGE: &str = "No matching conditions found";
pub const FAILURE_MESSAGE: &str =
    "Could not reach the analysis service. Check your connection and try again.";

/// Current result of the last-triggered analysis.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AnalysisOutcome {
    #[default]
    Idle,
    Pending,
    /// Always holds at least one result.
    Succeeded(AnalysisReport),
    Empty { message: String },
    Failed { message: String },
}

impl AnalysisOutcome {
    pub fn is_pending(&self) -> bool {
        matches!(self, AnalysisOutcome::Pending)
    }

    /// Short label for logs and the title bar.
    pub fn label(&self) -> &'static str {
        match self {
            AnalysisOutcome::Idle => "idle",
            AnalysisOutcome::Pending => "analyzing",
            AnalysisOutcome::Succeeded(_) => "results",
            AnalysisOutcome::Empty { .. } => "no match",
            AnalysisOutcome::Failed { .. } => "error",
        }
    }
}

/// Convert a finished request into an outcome.
///
/// Zero results become `Empty`, so `Succeeded` never carries an empty list.
/// Error detail is logged here and never copied into the outcome.
pub fn resolve_outcome(result: Result<RawResponse, AnalysisError>) -> AnalysisOutcome {
    match result {
        Ok(raw) if raw.results.is_empty() => {
            info!("Analysis returned no results");
            AnalysisOutcome::Empty {
                message: EMPTY_MESSAGE.to_string(),
            }
        }
        Ok(raw) => AnalysisOutcome::Succeeded(raw.into_report()),
        Err(e) => {
            warn!("Analysis failed: {}", e);
            AnalysisOutcome::Failed {
                message: FAILURE_MESSAGE.to_string(),
            }
        }
    }
}

//! # Actions
//!
//! Everything that can happen in AyurAssist becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! The service responds? That's `Action::AnalysisResolved { .. }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing any I/O the caller must
//! perform. No side effects here. I/O happens in the adapter.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::analysis::{AnalysisError, AnalysisOutcome, RawResponse, resolve_outcome};
use crate::core::state::App;

#[derive(Debug)]
pub enum Action {
    /// Input text changed (every keystroke).
    SetQuery(String),
    /// User asked for an analysis of the current query.
    Submit,
    /// A spawned request finished.
    AnalysisResolved {
        generation: u64,
        result: Result<RawResponse, AnalysisError>,
    },
    /// User picked one of the "try one of these" suggestions.
    PickSuggestion(String),
    Quit,
}

/// I/O the adapter must perform after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Start one outbound call for `text`, tagged with `generation`.
    SpawnAnalysis { generation: u64, text: String },
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::SetQuery(text) => {
            app.query = text;
            Effect::None
        }
        Action::Submit => {
            if app.query.trim().is_empty() {
                debug!("Ignoring submit of blank query");
                return Effect::None;
            }
            app.generation += 1;
            app.outcome = AnalysisOutcome::Pending;
            app.status_message = String::from("Analyzing...");
            info!(
                "Submitting analysis (generation={}, len={})",
                app.generation,
                app.query.len()
            );
            Effect::SpawnAnalysis {
                generation: app.generation,
                text: app.query.clone(),
            }
        }
        Action::AnalysisResolved { generation, result } => {
            if generation != app.generation {
                info!(
                    "Discarding stale analysis response (generation={}, current={})",
                    generation, app.generation
                );
                return Effect::None;
            }
            app.outcome = resolve_outcome(result);
            app.status_message = match &app.outcome {
                AnalysisOutcome::Succeeded(report) => {
                    format!("{} condition(s) matched", report.results.len())
                }
                AnalysisOutcome::Empty { .. } => String::from("No match"),
                AnalysisOutcome::Failed { .. } => String::from("Request failed"),
                AnalysisOutcome::Idle | AnalysisOutcome::Pending => String::new(),
            };
            info!("Analysis resolved to {}", app.outcome.label());
            Effect::None
        }
        Action::PickSuggestion(text) => {
            debug!("Suggestion picked: {}", text);
            app.query = text;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{EMPTY_MESSAGE, FAILURE_MESSAGE};
    use crate::test_support::test_app;

    fn raw(body: &str) -> RawResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_blank_submit_is_noop() {
        for query in ["", "   ", "\n\t"] {
            let mut app = test_app();
            update(&mut app, Action::SetQuery(query.to_string()));
            let effect = update(&mut app, Action::Submit);
            assert_eq!(effect, Effect::None);
            assert_eq!(app.outcome, AnalysisOutcome::Idle);
            assert_eq!(app.generation, 0);
        }
    }

    #[test]
    fn test_submit_goes_pending_and_spawns() {
        let mut app = test_app();
        update(&mut app, Action::SetQuery("headache".to_string()));
        let effect = update(&mut app, Action::Submit);
        assert_eq!(
            effect,
            Effect::SpawnAnalysis {
                generation: 1,
                text: "headache".to_string()
            }
        );
        assert!(app.outcome.is_pending());
        // Query is kept after submit
        assert_eq!(app.query, "headache");
    }

    #[test]
    fn test_resolved_with_results() {
        let mut app = test_app();
        update(&mut app, Action::SetQuery("headache".to_string()));
        update(&mut app, Action::Submit);
        update(
            &mut app,
            Action::AnalysisResolved {
                generation: 1,
                result: Ok(raw(
                    r#"{"results": [{"ayurveda_term": "Shirashoola", "match_score": 82, "treatment_info": {"ottamooli_single_remedies": []}}]}"#,
                )),
            },
        );
        match &app.outcome {
            AnalysisOutcome::Succeeded(report) => {
                assert_eq!(report.results.len(), 1);
                assert_eq!(report.results[0].ayurveda_term, "Shirashoola");
            }
            other => panic!("Expected Succeeded, got {:?}", other),
        }
        assert_eq!(app.status_message, "1 condition(s) matched");
    }

    #[test]
    fn test_resolved_empty() {
        let mut app = test_app();
        update(&mut app, Action::SetQuery("xyz".to_string()));
        update(&mut app, Action::Submit);
        update(
            &mut app,
            Action::AnalysisResolved {
                generation: 1,
                result: Ok(raw(r#"{"results": []}"#)),
            },
        );
        assert_eq!(
            app.outcome,
            AnalysisOutcome::Empty {
                message: EMPTY_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn test_failure_clears_previous_results() {
        let mut app = test_app();
        update(&mut app, Action::SetQuery("fever".to_string()));
        update(&mut app, Action::Submit);
        update(
            &mut app,
            Action::AnalysisResolved {
                generation: 1,
                result: Ok(raw(r#"{"results": [{"ayurveda_term": "Jwara"}]}"#)),
            },
        );
        assert!(matches!(app.outcome, AnalysisOutcome::Succeeded(_)));

        update(&mut app, Action::Submit);
        update(
            &mut app,
            Action::AnalysisResolved {
                generation: 2,
                result: Err(AnalysisError::Status {
                    status: 502,
                    body: "bad gateway".to_string(),
                }),
            },
        );
        assert_eq!(
            app.outcome,
            AnalysisOutcome::Failed {
                message: FAILURE_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut app = test_app();
        update(&mut app, Action::SetQuery("cough".to_string()));
        update(&mut app, Action::Submit);
        update(&mut app, Action::SetQuery("cold".to_string()));
        update(&mut app, Action::Submit);
        assert_eq!(app.generation, 2);

        // Newer request lands first
        update(
            &mut app,
            Action::AnalysisResolved {
                generation: 2,
                result: Ok(raw(r#"{"results": [{"ayurveda_term": "Pratishyaya"}]}"#)),
            },
        );
        // Older one arrives late and must not overwrite
        let effect = update(
            &mut app,
            Action::AnalysisResolved {
                generation: 1,
                result: Ok(raw(r#"{"results": [{"ayurveda_term": "Kasa"}]}"#)),
            },
        );
        assert_eq!(effect, Effect::None);
        match &app.outcome {
            AnalysisOutcome::Succeeded(report) => {
                assert_eq!(report.results[0].ayurveda_term, "Pratishyaya")
            }
            other => panic!("Expected Succeeded, got {:?}", other),
        }
    }

    #[test]
    fn test_pick_suggestion_sets_query_without_submitting() {
        let mut app = test_app();
        app.outcome = AnalysisOutcome::Empty {
            message: EMPTY_MESSAGE.to_string(),
        };
        let effect = update(&mut app, Action::PickSuggestion("fever".to_string()));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.query, "fever");
        assert_eq!(app.generation, 0);
        assert!(matches!(app.outcome, AnalysisOutcome::Empty { .. }));
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}

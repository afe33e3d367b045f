//! # One-shot Mode
//!
//! `ayurassist --query "..."` runs a single analysis without the TUI and
//! prints the result screen as plain text. It drives the same reducer as
//! the interactive loop: `SetQuery`, `Submit`, then the resolved response.

use std::sync::Arc;

use log::info;

use crate::analysis::{AnalysisClient, AnalysisOutcome};
use crate::core::action::{Action, Effect, update};
use crate::core::presenter::present;
use crate::core::state::App;
use crate::report::render_text;

/// Submit `app.query` and wait for the outcome. Blank queries are a no-op
/// and leave the outcome untouched.
pub async fn run_cycle(app: &mut App) {
    if let Effect::SpawnAnalysis { generation, text } = update(app, Action::Submit) {
        let result = app.client.analyze(&text).await;
        update(app, Action::AnalysisResolved { generation, result });
    }
}

/// Analyze `query` and render the resulting screen. The flag is `false`
/// when the request failed.
pub async fn analyze_to_text(client: Arc<dyn AnalysisClient>, query: &str) -> (String, bool) {
    let mut app = App::new(client);
    update(&mut app, Action::SetQuery(query.to_string()));
    run_cycle(&mut app).await;
    info!("One-shot analysis finished: {}", app.outcome.label());

    let ok = !matches!(app.outcome, AnalysisOutcome::Failed { .. });
    (render_text(&present(&app.outcome)), ok)
}

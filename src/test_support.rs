//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::analysis::{
    AnalysisClient, AnalysisError, AnalysisReport, ConditionResult, RawResponse, Remedy,
    TreatmentInfo,
};

/// A client that never touches the network and always returns no results.
pub struct NoopClient;

#[async_trait]
impl AnalysisClient for NoopClient {
    fn endpoint(&self) -> &str {
        "noop://analysis"
    }

    async fn analyze(&self, _text: &str) -> Result<RawResponse, AnalysisError> {
        Ok(serde_json::from_str(r#"{"results": []}"#).expect("static body parses"))
    }
}

/// Creates a test App with a NoopClient.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(NoopClient))
}

/// A condition with only the header fields filled in (no enrichment).
pub fn bare_condition(term: &str, score: f64) -> ConditionResult {
    ConditionResult {
        ita_id: format!("ITA-{}", term.len()),
        ayurveda_term: term.to_string(),
        match_score: score,
        ..Default::default()
    }
}

/// A condition whose treatment info carries one remedy plus the given extras.
pub fn enriched_condition(term: &str, info: TreatmentInfo) -> ConditionResult {
    let mut info = info;
    if info.ottamooli_single_remedies.is_none() {
        info.ottamooli_single_remedies = Some(vec![Remedy {
            medicine_name: "Shunthi".to_string(),
            dosage: Some("1 tsp".to_string()),
            ..Default::default()
        }]);
    }
    ConditionResult {
        treatment_info: info,
        ..bare_condition(term, 90.0)
    }
}

/// Wrap results in a report the way a successful response would be normalized.
pub fn report_with(results: Vec<ConditionResult>) -> AnalysisReport {
    AnalysisReport {
        input_text: "test".to_string(),
        entities: Vec::new(),
        identifier_code: "N/A".to_string(),
        results,
    }
}

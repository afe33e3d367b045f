use std::sync::Arc;
use std::time::Duration;

use ayurassist::analysis::{
    AnalysisClient, AnalysisError, AnalysisOutcome, EMPTY_MESSAGE, FAILURE_MESSAGE,
    HttpAnalysisClient, RequestFlags,
};
use ayurassist::core::action::{Action, update};
use ayurassist::core::presenter::{CardBody, FALLBACK_NOTICE, Screen, present};
use ayurassist::core::state::App;
use ayurassist::oneshot::{analyze_to_text, run_cycle};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

const ANALYZE_PATH: &str = "/api/process";

fn client_for(server: &MockServer) -> Arc<dyn AnalysisClient> {
    Arc::new(HttpAnalysisClient::new(
        format!("{}{}", server.uri(), ANALYZE_PATH),
        RequestFlags::default(),
        None,
    ))
}

fn app_for(server: &MockServer) -> App {
    App::new(client_for(server))
}

async fn mount_json(server: &MockServer, status: u16, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path(ANALYZE_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

/// Type `query`, press Enter and wait for the response.
async fn submit(app: &mut App, query: &str) {
    update(app, Action::SetQuery(query.to_string()));
    run_cycle(app).await;
}

fn headache_response() -> serde_json::Value {
    json!({
        "input_text": "headache",
        "clinical_entities": [
            {"word": "headache", "entity_group": "PROBLEM", "score": 0.97}
        ],
        "umls_cui": "C0018681",
        "results": [{
            "input_entity": "headache",
            "match_type": "exact",
            "match_score": 82,
            "ita_id": "ITA-8.1",
            "ayurveda_term": "Shirashoola",
            "sanskrit": "शिरःशूल",
            "snomed_code": "25064002",
            "snomed_name": "Headache",
            "who_description": "Pain in the head region",
            "treatment_info": {"ottamooli_single_remedies": []}
        }]
    })
}

// ============================================================================
// Client Tests
// ============================================================================

#[tokio::test]
async fn test_request_body_carries_query_and_flags() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ANALYZE_PATH))
        .and(body_partial_json(json!({
            "text": "I have a headache",
            "enrich_with_llm": true,
            "top_conditions": 5
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .expect(1)
        .mount(&server)
        .await;

    let raw = client_for(&server)
        .analyze("I have a headache")
        .await
        .expect("request should succeed");
    assert_eq!(raw.result_count(), 0);
}

#[tokio::test]
async fn test_configured_flags_are_sent() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ANALYZE_PATH))
        .and(body_partial_json(json!({
            "enrich_with_llm": false,
            "top_conditions": 2
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpAnalysisClient::new(
        format!("{}{}", server.uri(), ANALYZE_PATH),
        RequestFlags {
            enrich_with_llm: false,
            top_conditions: 2,
        },
        Some(Duration::from_secs(5)),
    );
    assert!(client.analyze("cough").await.is_ok());
}

#[tokio::test]
async fn test_non_2xx_is_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ANALYZE_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("model not loaded"))
        .mount(&server)
        .await;

    match client_for(&server).analyze("fever").await {
        Err(AnalysisError::Status { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "model not loaded");
        }
        other => panic!("Expected Status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ANALYZE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let result = client_for(&server).analyze("fever").await;
    assert!(matches!(result, Err(AnalysisError::Parse(_))));
}

#[tokio::test]
async fn test_missing_results_is_parse_error() {
    let server = MockServer::start().await;
    mount_json(&server, 200, json!({"input_text": "fever"})).await;

    let result = client_for(&server).analyze("fever").await;
    assert!(matches!(result, Err(AnalysisError::Parse(_))));
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ANALYZE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"results": []}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = HttpAnalysisClient::new(
        format!("{}{}", server.uri(), ANALYZE_PATH),
        RequestFlags::default(),
        Some(Duration::from_millis(200)),
    );
    let result = client.analyze("fever").await;
    assert!(matches!(result, Err(AnalysisError::Transport(_))));
}

// ============================================================================
// Full Cycle Tests (reducer + client + presenter)
// ============================================================================

#[tokio::test]
async fn test_headache_scenario() {
    let server = MockServer::start().await;
    mount_json(&server, 200, headache_response()).await;

    let mut app = app_for(&server);
    submit(&mut app, "headache").await;

    let report = match &app.outcome {
        AnalysisOutcome::Succeeded(report) => report,
        other => panic!("Expected Succeeded, got {:?}", other),
    };
    assert_eq!(report.identifier_code, "C0018681");
    assert_eq!(report.entities[0].text, "headache");
    assert_eq!(report.entities[0].label.as_deref(), Some("PROBLEM"));

    let Screen::Results(view) = present(&app.outcome) else {
        panic!("Expected Results screen");
    };
    assert_eq!(view.cards.len(), 1);
    let card = &view.cards[0];
    assert_eq!(card.term, "Shirashoola");
    assert_eq!(card.score, "82%");
    assert_eq!(card.snomed_code, "25064002");
    assert_eq!(
        card.match_line.as_deref(),
        Some("Detected: headache → ITA-8.1 · exact")
    );
    assert!(matches!(
        card.body,
        CardBody::Fallback {
            notice: FALLBACK_NOTICE,
            ..
        }
    ));
}

#[tokio::test]
async fn test_legacy_entity_shape_normalizes() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        200,
        json!({
            "entities_extracted": [
                {"text": "fever", "label": "PROBLEM", "score": 0.9},
                {"text": "chills", "score": 0.6}
            ],
            "results": [{"ayurveda_term": "Jwara", "match_score": 91.5}]
        }),
    )
    .await;

    let mut app = app_for(&server);
    submit(&mut app, "fever with chills").await;

    let Screen::Results(view) = present(&app.outcome) else {
        panic!("Expected Results screen, got {:?}", app.outcome);
    };
    assert_eq!(view.identifier_code, "N/A");
    let chips: Vec<&str> = view.entities.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(chips, vec!["fever", "chills"]);
    assert_eq!(view.entities[0].detail, "PROBLEM · 90%");
    assert_eq!(view.cards[0].score, "91.5%");
}

#[tokio::test]
async fn test_cards_keep_response_order() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        200,
        json!({"results": [
            {"ayurveda_term": "Kasa", "match_score": 40},
            {"ayurveda_term": "Pratishyaya", "match_score": 95},
            {"ayurveda_term": "Tamaka Shwasa", "match_score": 60}
        ]}),
    )
    .await;

    let mut app = app_for(&server);
    submit(&mut app, "cough and runny nose").await;

    let Screen::Results(view) = present(&app.outcome) else {
        panic!("Expected Results screen");
    };
    let terms: Vec<&str> = view.cards.iter().map(|c| c.term.as_str()).collect();
    assert_eq!(terms, vec!["Kasa", "Pratishyaya", "Tamaka Shwasa"]);
}

#[tokio::test]
async fn test_enriched_remedies_render() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        200,
        json!({"results": [{
            "ayurveda_term": "Ajirna",
            "match_score": 77,
            "treatment_info": {
                "ottamooli_single_remedies": [{
                    "medicine_name": "Ginger",
                    "sanskrit_name": "Shunthi",
                    "preparation": "Fresh juice with rock salt",
                    "dosage": "5 ml",
                    "timing": null
                }],
                "pathya_dietary_advice": {"foods_to_avoid": ["curd", "fried food"]},
                "prognosis": "Good with diet correction"
            }
        }]}),
    )
    .await;

    let (text, ok) = analyze_to_text(client_for(&server), "indigestion").await;
    assert!(ok);
    assert!(text.contains("[Ottamooli: Single Medicine Remedies]"));
    assert!(text.contains("Ginger (Shunthi)"));
    assert!(text.contains("Preparation: Fresh juice with rock salt"));
    assert!(text.contains("Dosage: 5 ml"));
    assert!(!text.contains("Timing:"));
    assert!(text.contains("Avoid: curd, fried food"));
    assert!(!text.contains("Favor:"));
    assert!(text.contains("Good with diet correction"));
    assert!(!text.contains(FALLBACK_NOTICE));
}

#[tokio::test]
async fn test_empty_results_offer_suggestions() {
    let server = MockServer::start().await;
    mount_json(&server, 200, json!({"results": []})).await;

    let mut app = app_for(&server);
    submit(&mut app, "xyz").await;

    assert_eq!(
        app.outcome,
        AnalysisOutcome::Empty {
            message: EMPTY_MESSAGE.to_string()
        }
    );
    let Screen::NotFound { suggestions, .. } = present(&app.outcome) else {
        panic!("Expected NotFound screen");
    };
    assert!(suggestions.contains(&"fever"));

    // Choosing a chip fills the query but sends nothing
    update(&mut app, Action::PickSuggestion("fever".to_string()));
    assert_eq!(app.query, "fever");
    assert_eq!(app.generation, 1);
    assert!(matches!(app.outcome, AnalysisOutcome::Empty { .. }));
    assert_eq!(server.received_requests().await.map(|r| r.len()), Some(1));
}

#[tokio::test]
async fn test_blank_query_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .expect(0)
        .mount(&server)
        .await;

    let mut app = app_for(&server);
    for query in ["", "   ", "\n"] {
        submit(&mut app, query).await;
        assert_eq!(app.outcome, AnalysisOutcome::Idle);
    }
    assert_eq!(app.generation, 0);
}

#[tokio::test]
async fn test_failure_replaces_previous_results() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ANALYZE_PATH))
        .and(body_partial_json(json!({"text": "headache"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(headache_response()))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(ANALYZE_PATH))
        .and(body_partial_json(json!({"text": "fever"})))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let mut app = app_for(&server);
    submit(&mut app, "headache").await;
    assert!(matches!(app.outcome, AnalysisOutcome::Succeeded(_)));

    submit(&mut app, "fever").await;
    assert_eq!(
        app.outcome,
        AnalysisOutcome::Failed {
            message: FAILURE_MESSAGE.to_string()
        }
    );
    assert_eq!(
        present(&app.outcome),
        Screen::Error {
            message: FAILURE_MESSAGE.to_string()
        }
    );
}

#[tokio::test]
async fn test_one_shot_failure_reports_not_ok() {
    let server = MockServer::start().await;
    mount_json(&server, 502, json!({"detail": "upstream"})).await;

    let (text, ok) = analyze_to_text(client_for(&server), "fever").await;
    assert!(!ok);
    assert!(text.contains(FAILURE_MESSAGE));
    assert!(!text.contains("upstream"));
}

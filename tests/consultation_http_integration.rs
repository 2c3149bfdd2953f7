//! Integration tests for the coaching HTTP surface.
//!
//! These tests drive the real router end to end:
//! 1. The page serves with the framework selector and mode badge
//! 2. Empty input short-circuits to the warning without a provider call
//! 3. Demo, live and error paths produce the documented statuses
//! 4. The chart is fixed regardless of the consultation outcome

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

use kokoro_compass::adapters::ai::{MockAiProvider, MockError};
use kokoro_compass::adapters::http::{coaching_router, CoachingAppState};
use kokoro_compass::application::handlers::coaching::GenerateConsultationHandler;
use kokoro_compass::domain::coaching::templates::CONSULTATION_UNAVAILABLE;

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Builds the app with an optional mock provider; demo delay is zeroed.
fn app(provider: Option<MockAiProvider>) -> Router {
    let generator = GenerateConsultationHandler::new(
        provider.map(|p| Arc::new(p) as Arc<dyn kokoro_compass::ports::AIProvider>),
        Duration::ZERO,
    );
    coaching_router().with_state(CoachingAppState {
        generator: Arc::new(generator),
    })
}

fn consultation_request(framework: &str, challenge: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/consultations")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "framework": framework, "challenge": challenge }).to_string(),
        ))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// Page
// =============================================================================

#[tokio::test]
async fn page_serves_selector_and_demo_badge() {
    let response = app(None)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();

    assert!(html.contains("GLOBIS Kokorozashi"));
    assert!(html.contains("Blue Ocean Strategy"));
    assert!(html.contains("Emotional Intelligence"));
    assert!(html.contains("Scenario Planning"));
    assert!(html.contains("Demo mode"));
}

#[tokio::test]
async fn page_shows_live_badge_with_provider() {
    let response = app(Some(MockAiProvider::new()))
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("Live mode"));
}

// =============================================================================
// Empty input
// =============================================================================

#[tokio::test]
async fn empty_challenge_returns_warning() {
    let response = app(None)
        .oneshot(consultation_request("globis_kokorozashi", ""))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert_eq!(body["warning"], "Please describe your challenge first.");
}

#[tokio::test]
async fn empty_challenge_makes_zero_provider_calls() {
    let provider = MockAiProvider::new().with_response("unused");
    let response = app(Some(provider.clone()))
        .oneshot(consultation_request("blue_ocean_strategy", "   \n  "))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn unknown_framework_is_a_client_error() {
    let response = app(None)
        .oneshot(consultation_request("waterfall", "My team is demotivated."))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

// =============================================================================
// Demo path
// =============================================================================

#[tokio::test]
async fn demo_mode_names_the_selected_framework() {
    let response = app(None)
        .oneshot(consultation_request(
            "scenario_planning",
            "Cargo clearance takes a full day.",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "demo");
    assert!(body["body"].as_str().unwrap().contains("Scenario Planning"));
}

#[tokio::test]
async fn demo_mode_is_deterministic() {
    let first = json_body(
        app(None)
            .oneshot(consultation_request("emotional_intelligence", "Morale is low."))
            .await
            .unwrap(),
    )
    .await;
    let second = json_body(
        app(None)
            .oneshot(consultation_request("emotional_intelligence", "Morale is low."))
            .await
            .unwrap(),
    )
    .await;

    assert_eq!(first["body"], second["body"]);
    assert_eq!(first["status"], "demo");
}

// =============================================================================
// Live path
// =============================================================================

#[tokio::test]
async fn live_mode_returns_provider_text_verbatim() {
    let provider = MockAiProvider::new().with_response("T");
    let response = app(Some(provider))
        .oneshot(consultation_request(
            "globis_kokorozashi",
            "Clearance is slow.",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "live");
    assert_eq!(body["body"], "T");
}

#[tokio::test]
async fn provider_failure_degrades_to_placeholder() {
    let provider = MockAiProvider::new().with_error(MockError::Unavailable {
        message: "upstream down".to_string(),
    });
    let response = app(Some(provider))
        .oneshot(consultation_request(
            "blue_ocean_strategy",
            "Clearance is slow.",
        ))
        .await
        .unwrap();

    // The failure never surfaces as an HTTP error; the page stays usable
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["body"], CONSULTATION_UNAVAILABLE);
}

// =============================================================================
// Chart
// =============================================================================

#[tokio::test]
async fn chart_is_fixed_for_every_outcome() {
    let demo = json_body(
        app(None)
            .oneshot(consultation_request("scenario_planning", "Slow clearance."))
            .await
            .unwrap(),
    )
    .await;

    let failing = MockAiProvider::new().with_error(MockError::AuthenticationFailed);
    let error = json_body(
        app(Some(failing))
            .oneshot(consultation_request("scenario_planning", "Slow clearance."))
            .await
            .unwrap(),
    )
    .await;

    for body in [&demo, &error] {
        let points = body["chart"]["points"].as_array().unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0]["value"], 10);
        assert_eq!(points[1]["value"], 35);
        assert_eq!(points[2]["value"], 70);
        assert_eq!(points[0]["label"], "Week 0");
        assert_eq!(points[1]["label"], "Week 2");
        assert_eq!(points[2]["label"], "Week 4");
    }
    assert_eq!(demo["chart"], error["chart"]);
}

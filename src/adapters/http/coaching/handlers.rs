//! HTTP handlers for the page and consultation endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};

use crate::application::handlers::coaching::{
    GenerateConsultationCommand, GenerateConsultationHandler,
};
use crate::domain::coaching::Challenge;

use super::dto::{ConsultationResponse, CreateConsultationRequest, WarningResponse};
use super::page;

/// Application state for the coaching endpoints.
#[derive(Clone)]
pub struct CoachingAppState {
    /// Consultation generator (injected)
    pub generator: Arc<GenerateConsultationHandler>,
}

/// Serve the coaching page.
///
/// GET /
pub async fn get_page(State(state): State<CoachingAppState>) -> impl IntoResponse {
    Html(page::render(state.generator.is_live()))
}

/// Generate a consultation.
///
/// POST /api/consultations
///
/// Empty or whitespace-only input short-circuits to a 422 warning and
/// never reaches the generator.
pub async fn create_consultation(
    State(state): State<CoachingAppState>,
    Json(request): Json<CreateConsultationRequest>,
) -> Result<Json<ConsultationResponse>, (StatusCode, Json<WarningResponse>)> {
    let challenge = Challenge::new(request.challenge).map_err(|_| {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(WarningResponse::empty_challenge()),
        )
    })?;

    let consultation = state
        .generator
        .handle(GenerateConsultationCommand {
            framework: request.framework,
            challenge,
        })
        .await;

    Ok(Json(ConsultationResponse::from_consultation(
        request.framework,
        consultation,
    )))
}

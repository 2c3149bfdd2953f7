//! Axum router configuration for the coaching endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{create_consultation, get_page, CoachingAppState};

/// Create the coaching router.
///
/// # Routes
///
/// - `GET /` - The coaching page
/// - `POST /api/consultations` - Generate a consultation
///
/// # Example
///
/// ```ignore
/// use kokoro_compass::adapters::http::coaching::{coaching_router, CoachingAppState};
///
/// let app_state = CoachingAppState { /* ... */ };
/// let app = coaching_router().with_state(app_state);
/// ```
pub fn coaching_router() -> Router<CoachingAppState> {
    Router::new()
        .route("/", get(get_page))
        .route("/api/consultations", post(create_consultation))
}

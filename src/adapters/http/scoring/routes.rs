//! Axum router configuration for scoring endpoints.

use axum::{routing::post, Router};

use super::handlers::{score_behavior, score_query};
use crate::adapters::http::AppState;

/// Create the scoring router, suitable for mounting at `/api`.
///
/// # Routes
/// - `POST /scoring/behavior` - Behavior event score
/// - `POST /scoring/query` - Query event score with derived metrics
pub fn scoring_router() -> Router<AppState> {
    Router::new()
        .route("/scoring/behavior", post(score_behavior))
        .route("/scoring/query", post(score_query))
}

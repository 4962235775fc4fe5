//! HTTP handlers for scoring endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::response::IntoResponse;

use crate::application::handlers::{ScoreBehaviorEventCommand, ScoreQueryEventCommand};
use crate::domain::scoring::{BehaviorEventRecord, QueryEventRecord};

use super::dto::{BehaviorScoreResponse, QueryScoreResponse};
use crate::adapters::http::{ApiError, AppState};

/// POST /api/scoring/behavior - Score one behavior event
pub async fn score_behavior(
    State(state): State<AppState>,
    payload: Result<Json<BehaviorEventRecord>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(record) = payload?;
    let score = state
        .score_behavior_handler()
        .handle(ScoreBehaviorEventCommand::new(record))?;
    Ok(Json(BehaviorScoreResponse::from(score)))
}

/// POST /api/scoring/query - Score one query event
pub async fn score_query(
    State(state): State<AppState>,
    payload: Result<Json<QueryEventRecord>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(record) = payload?;
    let score = state
        .score_query_handler()
        .handle(ScoreQueryEventCommand::new(record))?;
    Ok(Json(QueryScoreResponse::from(score)))
}

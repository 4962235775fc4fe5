//! HTTP DTOs for scoring endpoints.
//!
//! Request bodies are the raw event records from the scoring domain; only
//! responses are defined here.

use serde::{Deserialize, Serialize};

use crate::domain::scoring::{BehaviorScore, QueryScore};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorScoreResponse {
    pub score_impact: u32,
}

impl From<BehaviorScore> for BehaviorScoreResponse {
    fn from(score: BehaviorScore) -> Self {
        Self {
            score_impact: score.score_impact,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub complexity: f64,
    pub quality: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryScoreResponse {
    pub score_impact: u32,
    pub derived_metrics: DerivedMetrics,
}

impl From<QueryScore> for QueryScoreResponse {
    fn from(score: QueryScore) -> Self {
        Self {
            score_impact: score.score_impact,
            derived_metrics: DerivedMetrics {
                complexity: score.complexity,
                quality: score.quality,
            },
        }
    }
}

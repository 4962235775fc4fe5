//! Query event scoring.

use serde::Serialize;
use std::collections::HashMap;

use super::{ComplexityModel, QualityModel, QueryEvent};

/// Weights of the final query score.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryScoringConfig {
    pub base_points: f64,
    pub complexity_weight: f64,
    pub quality_weight: f64,
    pub success_bonus: f64,
    /// Added (it is negative) when the query failed.
    pub failure_penalty: f64,
    pub type_multipliers: HashMap<String, f64>,
    pub default_multiplier: f64,
}

impl Default for QueryScoringConfig {
    fn default() -> Self {
        let type_multipliers = [("ai_chat", 1.2), ("search", 1.0), ("voice", 1.5), ("help", 0.8)]
            .into_iter()
            .map(|(kind, m)| (kind.to_string(), m))
            .collect();

        Self {
            base_points: 10.0,
            complexity_weight: 2.0,
            quality_weight: 1.5,
            success_bonus: 10.0,
            failure_penalty: -5.0,
            type_multipliers,
            default_multiplier: 1.0,
        }
    }
}

/// Query score together with the metrics it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryScore {
    pub score_impact: u32,
    pub complexity: f64,
    pub quality: f64,
    pub type_multiplier: f64,
}

/// Scores query events from prompt complexity and interaction quality.
#[derive(Debug, Clone, Default)]
pub struct QueryScorer {
    config: QueryScoringConfig,
    complexity: ComplexityModel,
    quality: QualityModel,
}

impl QueryScorer {
    pub fn new(config: QueryScoringConfig, complexity: ComplexityModel, quality: QualityModel) -> Self {
        Self {
            config,
            complexity,
            quality,
        }
    }

    /// Multiplier for a query type; unknown or missing types get the default.
    pub fn type_multiplier(&self, query_type: Option<&str>) -> f64 {
        query_type
            .and_then(|t| self.config.type_multipliers.get(t))
            .copied()
            .unwrap_or(self.config.default_multiplier)
    }

    pub fn score(&self, event: &QueryEvent) -> QueryScore {
        let complexity = self.complexity.score(&event.prompt);
        let quality = self.quality.score(event);
        let outcome = if event.success {
            self.config.success_bonus
        } else {
            self.config.failure_penalty
        };
        let type_multiplier = self.type_multiplier(event.query_type.as_deref());

        let raw = (self.config.base_points
            + complexity * self.config.complexity_weight
            + quality * self.config.quality_weight
            + outcome)
            * type_multiplier;

        QueryScore {
            score_impact: raw.max(0.0).round() as u32,
            complexity,
            quality,
            type_multiplier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{SessionId, Timestamp, UserId};

    fn event(query_type: Option<&str>, prompt: &str, success: bool, model: &str) -> QueryEvent {
        QueryEvent {
            query_type: query_type.map(str::to_string),
            prompt: prompt.to_string(),
            user_id: UserId::new("user-1").unwrap(),
            session_id: SessionId::new("sess-1").unwrap(),
            duration_ms: Some(2_000.0),
            success,
            model: Some(model.to_string()),
            timestamp: Timestamp::now(),
        }
    }

    #[test]
    fn reference_ai_chat_query_scores_52() {
        let score = QueryScorer::default().score(&event(
            Some("ai_chat"),
            "How does the algorithm optimize database integration?",
            true,
            "gpt-4",
        ));
        assert!((score.complexity - 3.96).abs() < 1e-9);
        assert_eq!(score.quality, 10.0);
        assert_eq!(score.type_multiplier, 1.2);
        // (10 + 7.92 + 15 + 10) * 1.2 = 51.504
        assert_eq!(score.score_impact, 52);
    }

    #[test]
    fn failed_help_query() {
        let score = QueryScorer::default().score(&event(Some("help"), "hi", false, "basic"));
        // complexity 1, quality 0 + 2 + 1 + 1 + 1 = 5
        // (10 + 2 + 7.5 - 5) * 0.8 = 11.6
        assert_eq!(score.quality, 5.0);
        assert_eq!(score.score_impact, 12);
    }

    #[test]
    fn unknown_and_missing_types_use_default_multiplier() {
        let scorer = QueryScorer::default();
        assert_eq!(scorer.type_multiplier(Some("telepathy")), 1.0);
        assert_eq!(scorer.type_multiplier(None), 1.0);
        assert_eq!(scorer.type_multiplier(Some("voice")), 1.5);
    }

    #[test]
    fn score_never_goes_negative() {
        let config = QueryScoringConfig {
            failure_penalty: -1_000.0,
            ..QueryScoringConfig::default()
        };
        let scorer = QueryScorer::new(config, ComplexityModel::default(), QualityModel::default());
        let score = scorer.score(&event(Some("search"), "hi", false, "basic"));
        assert_eq!(score.score_impact, 0);
    }

    #[test]
    fn scoring_is_idempotent() {
        let scorer = QueryScorer::default();
        let e = event(Some("voice"), "What exactly is the api framework?", true, "claude-3-haiku");
        assert_eq!(scorer.score(&e), scorer.score(&e));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn query_type() -> impl Strategy<Value = Option<String>> {
            proptest::option::of(prop_oneof![
                Just("ai_chat".to_string()),
                Just("search".to_string()),
                Just("voice".to_string()),
                Just("help".to_string()),
                "[a-z_]{1,10}",
            ])
        }

        fn model() -> impl Strategy<Value = Option<String>> {
            proptest::option::of(prop_oneof![
                Just("gpt-4".to_string()),
                Just("claude-3-haiku".to_string()),
                Just("basic".to_string()),
                "[a-z0-9-]{1,12}",
            ])
        }

        proptest! {
            #[test]
            fn scores_are_bounded_and_idempotent(
                prompt in "[a-zA-Z ?]{1,200}",
                query_type in query_type(),
                duration_ms in proptest::option::of(0.0f64..20_000.0),
                success in any::<bool>(),
                model in model(),
            ) {
                let scorer = QueryScorer::default();
                let event = QueryEvent {
                    query_type,
                    prompt,
                    user_id: UserId::new("user-1").unwrap(),
                    session_id: SessionId::new("sess-1").unwrap(),
                    duration_ms,
                    success,
                    model,
                    timestamp: Timestamp::now(),
                };

                let first = scorer.score(&event);
                prop_assert_eq!(first, scorer.score(&event));
                prop_assert!((1.0..=10.0).contains(&first.complexity));
                prop_assert!((0.0..=10.0).contains(&first.quality));
                // (10 + 20 + 15 + 10) * 1.5
                prop_assert!(first.score_impact <= 83);
            }
        }
    }
}

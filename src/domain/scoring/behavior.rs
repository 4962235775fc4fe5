//! Behavior event scoring.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::BehaviorEvent;

/// Weights for behavior scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehaviorScoringConfig {
    /// Base impact per event type. Types missing here score zero.
    pub base_impacts: HashMap<String, f64>,
    /// Category that earns the engagement multiplier.
    pub engagement_category: String,
    pub engagement_multiplier: f64,
    /// `value` is divided by this to produce the bonus.
    pub value_bonus_divisor: f64,
    pub value_bonus_cap: f64,
}

impl Default for BehaviorScoringConfig {
    fn default() -> Self {
        let base_impacts = [
            ("page_view", 1.0),
            ("click", 2.0),
            ("scroll", 1.0),
            ("ai_query", 5.0),
            ("feature_use", 3.0),
            ("session_start", 5.0),
            ("session_end", 0.0),
        ]
        .into_iter()
        .map(|(name, impact)| (name.to_string(), impact))
        .collect();

        Self {
            base_impacts,
            engagement_category: "engagement".to_string(),
            engagement_multiplier: 1.5,
            value_bonus_divisor: 100.0,
            value_bonus_cap: 5.0,
        }
    }
}

/// Every factor that went into a behavior score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorScore {
    pub base_impact: f64,
    pub multiplier: f64,
    pub value_bonus: f64,
    pub score_impact: u32,
}

/// Scores behavior events against a fixed weight table.
#[derive(Debug, Clone, Default)]
pub struct BehaviorScorer {
    config: BehaviorScoringConfig,
}

impl BehaviorScorer {
    pub fn new(config: BehaviorScoringConfig) -> Self {
        Self { config }
    }

    /// Base impact for an event type; unknown types score zero.
    pub fn base_impact(&self, event_type: &str) -> f64 {
        self.config
            .base_impacts
            .get(event_type)
            .copied()
            .unwrap_or(0.0)
    }

    pub fn score(&self, event: &BehaviorEvent) -> BehaviorScore {
        let base_impact = self.base_impact(&event.event_type);

        let multiplier = if event.category == self.config.engagement_category {
            self.config.engagement_multiplier
        } else {
            1.0
        };

        let value_bonus = match event.value {
            Some(value) if value > 0.0 => {
                (value / self.config.value_bonus_divisor).min(self.config.value_bonus_cap)
            }
            _ => 0.0,
        };

        let raw = base_impact * multiplier + value_bonus;

        BehaviorScore {
            base_impact,
            multiplier,
            value_bonus,
            score_impact: raw.round().max(0.0) as u32,
        }
    }
}

//! Interaction quality of a query event.

use std::collections::HashMap;

use super::QueryEvent;

/// Quality model: outcome, latency, prompt length and model tier, capped.
#[derive(Debug, Clone, PartialEq)]
pub struct QualityModel {
    pub success_points: f64,
    /// Responses faster than this earn `fast_points`.
    pub fast_response_ms: f64,
    pub fast_points: f64,
    /// Responses faster than this (but not fast) earn `moderate_points`.
    pub moderate_response_ms: f64,
    pub moderate_points: f64,
    /// Prompts longer than this many characters earn `long_prompt_points`.
    pub long_prompt_chars: usize,
    pub long_prompt_points: f64,
    pub short_prompt_points: f64,
    pub engagement_baseline: f64,
    /// Keyed by lower-cased model name.
    pub model_scores: HashMap<String, f64>,
    pub unknown_model_score: f64,
    pub cap: f64,
}

impl Default for QualityModel {
    fn default() -> Self {
        let model_scores = [
            ("gpt-4", 3.0),
            ("gpt-4-turbo", 3.0),
            ("claude-3-sonnet", 3.0),
            ("claude-3-opus", 3.0),
            ("gpt-3.5", 2.0),
            ("claude-3-haiku", 2.0),
            ("claude-2", 1.0),
            ("basic", 1.0),
        ]
        .into_iter()
        .map(|(model, score)| (model.to_string(), score))
        .collect();

        Self {
            success_points: 3.0,
            fast_response_ms: 3_000.0,
            fast_points: 2.0,
            moderate_response_ms: 8_000.0,
            moderate_points: 1.0,
            long_prompt_chars: 10,
            long_prompt_points: 2.0,
            short_prompt_points: 1.0,
            engagement_baseline: 1.0,
            model_scores,
            unknown_model_score: 1.0,
            cap: 10.0,
        }
    }
}

impl QualityModel {
    pub fn model_score(&self, model: Option<&str>) -> f64 {
        model
            .and_then(|m| self.model_scores.get(&m.trim().to_ascii_lowercase()))
            .copied()
            .unwrap_or(self.unknown_model_score)
    }

    /// Latency bucket. A missing duration earns nothing.
    pub fn response_time_points(&self, duration_ms: Option<f64>) -> f64 {
        match duration_ms {
            Some(ms) if ms < self.fast_response_ms => self.fast_points,
            Some(ms) if ms < self.moderate_response_ms => self.moderate_points,
            _ => 0.0,
        }
    }

    pub fn prompt_length_points(&self, prompt_len: usize) -> f64 {
        if prompt_len > self.long_prompt_chars {
            self.long_prompt_points
        } else {
            self.short_prompt_points
        }
    }

    /// Quality in `[0, cap]`.
    pub fn score(&self, event: &QueryEvent) -> f64 {
        let success = if event.success { self.success_points } else { 0.0 };
        let total = success
            + self.response_time_points(event.duration_ms)
            + self.prompt_length_points(event.prompt_len())
            + self.engagement_baseline
            + self.model_score(event.model.as_deref());
        total.clamp(0.0, self.cap)
    }
}

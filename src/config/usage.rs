//! Usage threshold configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::entitlement::{
    UsageThresholds, DEFAULT_BLOCK_THRESHOLD, DEFAULT_WARNING_THRESHOLD,
};

/// Percentages at which quota consumption warns and blocks
#[derive(Debug, Clone, Deserialize)]
pub struct UsageConfig {
    #[serde(default = "default_warning_threshold")]
    pub warning_threshold: f64,

    #[serde(default = "default_block_threshold")]
    pub block_threshold: f64,
}

impl UsageConfig {
    pub fn thresholds(&self) -> Result<UsageThresholds, ValidationError> {
        UsageThresholds::new(self.warning_threshold, self.block_threshold)
            .map_err(ValidationError::InvalidThresholds)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.thresholds().map(|_| ())
    }
}

impl Default for UsageConfig {
    fn default() -> Self {
        Self {
            warning_threshold: default_warning_threshold(),
            block_threshold: default_block_threshold(),
        }
    }
}

fn default_warning_threshold() -> f64 {
    DEFAULT_WARNING_THRESHOLD
}

fn default_block_threshold() -> f64 {
    DEFAULT_BLOCK_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_build_default_thresholds() {
        let thresholds = UsageConfig::default().thresholds().unwrap();
        assert_eq!(thresholds, UsageThresholds::default());
    }

    #[test]
    fn warning_above_block_is_rejected() {
        let config = UsageConfig {
            warning_threshold: 95.0,
            block_threshold: 90.0,
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidThresholds(_))
        ));
    }

    #[test]
    fn block_above_100_is_rejected() {
        let config = UsageConfig {
            warning_threshold: 80.0,
            block_threshold: 120.0,
        };
        assert!(config.validate().is_err());
    }
}

//! Graduated response to quota consumption.

use serde::{Deserialize, Serialize};

use super::usage::{DEFAULT_BLOCK_THRESHOLD, DEFAULT_WARNING_THRESHOLD};
use super::{ConfigurationError, UsageStatus};

/// Outcome of evaluating a usage status against thresholds.
///
/// Variants are ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageDecision {
    /// Below the warning threshold: proceed silently.
    Proceed,
    /// Between warning and block thresholds: proceed, but surface a warning.
    Warn,
    /// At or above the block threshold: deny the action.
    Block,
}

impl UsageDecision {
    pub fn is_allowed(&self) -> bool {
        !matches!(self, UsageDecision::Block)
    }
}

/// Warning and block percentages applied to a usage status.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UsageThresholds {
    warning: f64,
    block: f64,
}

impl UsageThresholds {
    /// Creates thresholds, requiring `0 < warning <= block <= 100`.
    pub fn new(warning: f64, block: f64) -> Result<Self, ConfigurationError> {
        let valid = warning.is_finite()
            && block.is_finite()
            && warning > 0.0
            && warning <= block
            && block <= 100.0;
        if !valid {
            return Err(ConfigurationError::InvalidThresholds { warning, block });
        }
        Ok(Self { warning, block })
    }

    pub fn warning(&self) -> f64 {
        self.warning
    }

    pub fn block(&self) -> f64 {
        self.block
    }

    pub fn should_warn(&self, status: &UsageStatus) -> bool {
        status.should_warn(self.warning)
    }

    pub fn should_block(&self, status: &UsageStatus) -> bool {
        status.should_block(self.block)
    }

    /// Maps a status onto the graduated response.
    pub fn decide(&self, status: &UsageStatus) -> UsageDecision {
        if self.should_block(status) {
            UsageDecision::Block
        } else if self.should_warn(status) {
            UsageDecision::Warn
        } else {
            UsageDecision::Proceed
        }
    }
}

impl Default for UsageThresholds {
    fn default() -> Self {
        Self {
            warning: DEFAULT_WARNING_THRESHOLD,
            block: DEFAULT_BLOCK_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entitlement::{Limit, UsageMetric};

    fn status(current: f64, limit: u64) -> UsageStatus {
        UsageStatus::compute(UsageMetric::Chats, current, Limit::Limited(limit))
    }

    #[test]
    fn defaults_are_80_and_100() {
        let thresholds = UsageThresholds::default();
        assert_eq!(thresholds.warning(), 80.0);
        assert_eq!(thresholds.block(), 100.0);
    }

    #[test]
    fn below_warning_proceeds() {
        let decision = UsageThresholds::default().decide(&status(7.0, 10));
        assert_eq!(decision, UsageDecision::Proceed);
    }

    #[test]
    fn between_warning_and_block_warns() {
        let decision = UsageThresholds::default().decide(&status(8.0, 10));
        assert_eq!(decision, UsageDecision::Warn);
        assert!(decision.is_allowed());
    }

    #[test]
    fn at_block_threshold_blocks() {
        let decision = UsageThresholds::default().decide(&status(10.0, 10));
        assert_eq!(decision, UsageDecision::Block);
        assert!(!decision.is_allowed());
    }

    #[test]
    fn custom_block_threshold_blocks_earlier() {
        let thresholds = UsageThresholds::new(50.0, 90.0).unwrap();
        assert_eq!(thresholds.decide(&status(9.0, 10)), UsageDecision::Block);
        assert_eq!(thresholds.decide(&status(5.0, 10)), UsageDecision::Warn);
    }

    #[test]
    fn unlimited_status_always_proceeds() {
        let status = UsageStatus::compute(UsageMetric::Tokens, 1e12, Limit::Unlimited);
        assert_eq!(UsageThresholds::default().decide(&status), UsageDecision::Proceed);
    }

    #[test]
    fn rejects_inverted_thresholds() {
        assert!(UsageThresholds::new(90.0, 80.0).is_err());
        assert!(UsageThresholds::new(0.0, 100.0).is_err());
        assert!(UsageThresholds::new(80.0, 120.0).is_err());
        assert!(UsageThresholds::new(f64::NAN, 100.0).is_err());
    }

    #[test]
    fn decisions_order_by_severity() {
        assert!(UsageDecision::Proceed < UsageDecision::Warn);
        assert!(UsageDecision::Warn < UsageDecision::Block);
    }
}

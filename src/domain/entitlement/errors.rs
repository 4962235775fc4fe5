//! Configuration errors for the entitlement tables.
//!
//! Every variant indicates a build or deploy defect: an unknown plan tag, a
//! malformed plan catalog, or inconsistent thresholds. None of them are
//! retried, and none are papered over with a default plan.

use thiserror::Error;

use crate::domain::foundation::ErrorCode;

use super::Plan;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("Unknown plan tag '{0}'")]
    UnknownPlan(String),

    #[error("Plan catalog has no feature set for {0}")]
    MissingPlan(Plan),

    #[error("Plan catalog defines {0} more than once")]
    DuplicatePlan(Plan),

    #[error("Plan catalog limit '{limit}' for {higher} is lower than for {lower}")]
    NonMonotonicLimit {
        limit: &'static str,
        lower: Plan,
        higher: Plan,
    },

    #[error("Upgrade prompt for {plan} targets {target}, which is not a higher plan")]
    InvalidUpgradeTarget { plan: Plan, target: Plan },

    #[error("Usage thresholds must satisfy 0 < warning <= block <= 100 (warning {warning}, block {block})")]
    InvalidThresholds { warning: f64, block: f64 },

    #[error("Plan catalog could not be loaded: {0}")]
    CatalogUnreadable(String),
}

impl ConfigurationError {
    pub fn unknown_plan(tag: impl Into<String>) -> Self {
        ConfigurationError::UnknownPlan(tag.into())
    }

    pub fn catalog_unreadable(reason: impl Into<String>) -> Self {
        ConfigurationError::CatalogUnreadable(reason.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ConfigurationError::UnknownPlan(_) => ErrorCode::UnknownPlan,
            ConfigurationError::MissingPlan(_)
            | ConfigurationError::DuplicatePlan(_)
            | ConfigurationError::NonMonotonicLimit { .. }
            | ConfigurationError::InvalidUpgradeTarget { .. }
            | ConfigurationError::CatalogUnreadable(_) => ErrorCode::InvalidCatalog,
            ConfigurationError::InvalidThresholds { .. } => ErrorCode::InvalidThresholds,
        }
    }
}

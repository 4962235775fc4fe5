//! Entitlement domain module.
//!
//! Decides feature access and quota status for a subscription plan without
//! mutating any state.
//!
//! # Module Structure
//!
//! - `plan` - Plan tiers
//! - `limit` - Numeric quota ceilings (with unlimited)
//! - `feature_set` - Capabilities and limits per plan
//! - `usage` - Usage counters and derived usage status
//! - `thresholds` - Warning/block thresholds and the graduated decision
//! - `upgrade` - Upgrade prompts per plan
//! - `comparison` - Plan-to-plan limit deltas
//! - `catalog` - The validated plan catalog that answers every lookup

mod catalog;
mod comparison;
mod errors;
mod feature_set;
mod limit;
mod plan;
mod thresholds;
mod upgrade;
mod usage;

pub use catalog::{CatalogDefinition, PlanCatalog, PlanDefinition};
pub use comparison::{LimitDelta, LimitDeltas, PlanComparison};
pub use errors::ConfigurationError;
pub use feature_set::{Capabilities, Capability, LimitKind, PlanFeatureSet};
pub use limit::Limit;
pub use plan::Plan;
pub use thresholds::{UsageDecision, UsageThresholds};
pub use upgrade::{UpgradePrompt, Urgency};
pub use usage::{
    UsageCounters, UsageMetric, UsageStatus, DEFAULT_BLOCK_THRESHOLD, DEFAULT_WARNING_THRESHOLD,
};

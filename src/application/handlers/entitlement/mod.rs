//! Entitlement handlers.
//!
//! ## Queries
//! - Check usage and capability entitlement for a plan
//! - Look up a plan's feature set and upgrade prompts
//! - Compare two plans

mod check_entitlement;
mod compare_plans;
mod get_plan;

pub use check_entitlement::{
    CapabilityVerdict, CheckEntitlementHandler, CheckEntitlementQuery, CheckEntitlementResult,
    MetricEvaluation,
};
pub use compare_plans::{ComparePlansHandler, ComparePlansQuery};
pub use get_plan::{GetPlanHandler, GetPlanResult};

//! Application handlers.
//!
//! Query handlers that orchestrate domain operations.

pub mod entitlement;
pub mod scoring;

pub use entitlement::{
    CapabilityVerdict, CheckEntitlementHandler, CheckEntitlementQuery, CheckEntitlementResult,
    ComparePlansHandler, ComparePlansQuery, GetPlanHandler, GetPlanResult, MetricEvaluation,
};
pub use scoring::{
    ScoreBehaviorEventCommand, ScoreBehaviorEventHandler, ScoreQueryEventCommand,
    ScoreQueryEventHandler,
};

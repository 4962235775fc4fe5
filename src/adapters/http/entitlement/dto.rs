//! HTTP DTOs (Data Transfer Objects) for plan and entitlement endpoints.
//!
//! Plan tags and capability names arrive as strings and are parsed in the
//! handlers, so an unknown tag produces a typed error instead of a generic
//! deserialization failure.

use serde::{Deserialize, Serialize};

use crate::application::handlers::{
    CapabilityVerdict, CheckEntitlementResult, GetPlanResult, MetricEvaluation,
};
use crate::domain::entitlement::{
    Capability, Plan, PlanFeatureSet, UpgradePrompt, UsageCounters, UsageDecision, UsageStatus,
};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to evaluate a usage snapshot against a plan.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckEntitlementRequest {
    /// Plan tag (`FREE`, `PRO`, `ENTERPRISE`).
    pub plan: String,
    #[serde(default)]
    pub usage: UsageCounters,
    /// Capability about to be used, e.g. `api_access`.
    #[serde(default)]
    pub capability: Option<String>,
}

/// Query string for plan comparison.
#[derive(Debug, Clone, Deserialize)]
pub struct ComparePlansParams {
    pub current: String,
    pub target: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlansResponse {
    pub plans: Vec<PlanFeatureSet>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse {
    pub features: PlanFeatureSet,
    pub upgrades: Vec<UpgradePrompt>,
}

impl From<GetPlanResult> for PlanResponse {
    fn from(result: GetPlanResult) -> Self {
        Self {
            features: result.features,
            upgrades: result.upgrades,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradesResponse {
    pub plan: Plan,
    pub upgrades: Vec<UpgradePrompt>,
}

/// One metric's status, decision and user-facing message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricStatusResponse {
    #[serde(flatten)]
    pub status: UsageStatus,
    pub decision: UsageDecision,
    pub message: String,
}

impl From<MetricEvaluation> for MetricStatusResponse {
    fn from(evaluation: MetricEvaluation) -> Self {
        Self {
            status: evaluation.status,
            decision: evaluation.decision,
            message: evaluation.message,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityVerdictResponse {
    pub capability: Capability,
    pub granted: bool,
    /// Lowest plan granting the capability; absent if no plan does.
    pub required_plan: Option<Plan>,
    pub message: String,
}

impl From<CapabilityVerdict> for CapabilityVerdictResponse {
    fn from(verdict: CapabilityVerdict) -> Self {
        Self {
            capability: verdict.capability,
            granted: verdict.granted,
            required_plan: verdict.required_plan,
            message: verdict.message,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckEntitlementResponse {
    pub plan: Plan,
    pub allowed: bool,
    pub decision: UsageDecision,
    pub metrics: Vec<MetricStatusResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capability: Option<CapabilityVerdictResponse>,
    pub upgrades: Vec<UpgradePrompt>,
    pub features: PlanFeatureSet,
}

impl From<CheckEntitlementResult> for CheckEntitlementResponse {
    fn from(result: CheckEntitlementResult) -> Self {
        Self {
            allowed: result.is_allowed(),
            plan: result.plan,
            decision: result.decision,
            metrics: result.metrics.into_iter().map(Into::into).collect(),
            capability: result.capability.map(Into::into),
            upgrades: result.upgrades,
            features: result.features,
        }
    }
}

//! CheckEntitlementHandler - Query handler joining usage and capability checks.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::ApplicationError;
use crate::domain::entitlement::{
    Capability, Plan, PlanCatalog, PlanFeatureSet, UpgradePrompt, UsageCounters, UsageDecision,
    UsageMetric, UsageStatus, UsageThresholds,
};

/// Query to evaluate a user's usage snapshot against their plan.
#[derive(Debug, Clone)]
pub struct CheckEntitlementQuery {
    pub plan: Plan,
    pub usage: UsageCounters,
    /// Capability the caller is about to use, if any.
    pub capability: Option<Capability>,
}

/// Status of one metric together with its graduated decision.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricEvaluation {
    pub status: UsageStatus,
    pub decision: UsageDecision,
    pub message: String,
}

/// Whether the plan grants a capability, and the lowest plan that does.
#[derive(Debug, Clone, PartialEq)]
pub struct CapabilityVerdict {
    pub capability: Capability,
    pub granted: bool,
    pub required_plan: Option<Plan>,
    pub message: String,
}

impl CapabilityVerdict {
    fn evaluate(catalog: &PlanCatalog, plan: Plan, capability: Capability) -> Self {
        let granted = catalog.has_capability(plan, capability);
        let required_plan = catalog.minimum_plan_for(capability);

        let message = match (granted, required_plan) {
            (true, _) => format!(
                "{} is included in your {} plan.",
                capability.display_name(),
                plan.display_name()
            ),
            (false, Some(required)) => format!(
                "{} requires the {} plan or higher.",
                capability.display_name(),
                required.display_name()
            ),
            (false, None) => format!("{} is not available on any plan.", capability.display_name()),
        };

        Self {
            capability,
            granted,
            required_plan,
            message,
        }
    }
}

/// Result of an entitlement check.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckEntitlementResult {
    pub plan: Plan,
    pub features: PlanFeatureSet,
    /// One entry per metric, in `UsageMetric::ALL` order.
    pub metrics: Vec<MetricEvaluation>,
    /// Most severe decision across all metrics.
    pub decision: UsageDecision,
    pub capability: Option<CapabilityVerdict>,
    /// Upgrade prompts, present whenever a limit warns or blocks or a capability is denied.
    pub upgrades: Vec<UpgradePrompt>,
}

impl CheckEntitlementResult {
    /// True when neither usage nor the requested capability stops the action.
    pub fn is_allowed(&self) -> bool {
        self.decision.is_allowed() && self.capability.as_ref().map_or(true, |c| c.granted)
    }
}

/// Handler for entitlement checks.
///
/// Pure over the injected catalog and thresholds: the same query always
/// yields the same result.
pub struct CheckEntitlementHandler {
    catalog: Arc<PlanCatalog>,
    thresholds: UsageThresholds,
}

impl CheckEntitlementHandler {
    pub fn new(catalog: Arc<PlanCatalog>, thresholds: UsageThresholds) -> Self {
        Self {
            catalog,
            thresholds,
        }
    }

    pub fn handle(
        &self,
        query: CheckEntitlementQuery,
    ) -> Result<CheckEntitlementResult, ApplicationError> {
        query.usage.validate()?;

        let metrics: Vec<MetricEvaluation> = UsageMetric::ALL
            .iter()
            .map(|&metric| {
                let status = self.catalog.usage_status(&query.usage, query.plan, metric);
                let decision = self.thresholds.decide(&status);
                debug!(
                    plan = %query.plan,
                    metric = %metric,
                    percentage = status.percentage,
                    ?decision,
                    "Usage evaluated"
                );
                MetricEvaluation {
                    message: status.user_message(),
                    status,
                    decision,
                }
            })
            .collect();

        let decision = metrics
            .iter()
            .map(|m| m.decision)
            .max()
            .unwrap_or(UsageDecision::Proceed);

        if decision == UsageDecision::Block {
            warn!(plan = %query.plan, "Usage limit reached");
        }

        let capability = query
            .capability
            .map(|capability| CapabilityVerdict::evaluate(&self.catalog, query.plan, capability));

        let capability_denied = capability.as_ref().is_some_and(|c| !c.granted);
        let upgrades = if decision != UsageDecision::Proceed || capability_denied {
            self.catalog.suggest_upgrade(query.plan).to_vec()
        } else {
            Vec::new()
        };

        Ok(CheckEntitlementResult {
            plan: query.plan,
            features: self.catalog.resolve_feature_set(query.plan).clone(),
            metrics,
            decision,
            capability,
            upgrades,
        })
    }
}

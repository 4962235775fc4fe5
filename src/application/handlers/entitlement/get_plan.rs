//! GetPlanHandler - Query handler for plan feature sets and upgrade prompts.

use std::sync::Arc;

use crate::domain::entitlement::{Plan, PlanCatalog, PlanFeatureSet, UpgradePrompt};

/// A plan's feature set with the upgrades offered from it.
#[derive(Debug, Clone, PartialEq)]
pub struct GetPlanResult {
    pub features: PlanFeatureSet,
    pub upgrades: Vec<UpgradePrompt>,
}

/// Handler for reading the plan catalog.
pub struct GetPlanHandler {
    catalog: Arc<PlanCatalog>,
}

impl GetPlanHandler {
    pub fn new(catalog: Arc<PlanCatalog>) -> Self {
        Self { catalog }
    }

    pub fn handle(&self, plan: Plan) -> GetPlanResult {
        GetPlanResult {
            features: self.catalog.resolve_feature_set(plan).clone(),
            upgrades: self.catalog.suggest_upgrade(plan).to_vec(),
        }
    }

    /// Every plan, lowest tier first.
    pub fn list(&self) -> Vec<PlanFeatureSet> {
        self.catalog.feature_sets().to_vec()
    }
}

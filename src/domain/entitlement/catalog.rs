//! Immutable plan catalog: the entitlement resolver.
//!
//! A `PlanCatalog` holds exactly one feature set and one list of upgrade
//! prompts per plan. It is built once at startup (from the built-in tables or
//! a YAML file) and shared read-only; every lookup is total because a catalog
//! that misses a plan cannot be constructed.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{
    Capability, ConfigurationError, LimitKind, Plan, PlanComparison, PlanFeatureSet,
    UpgradePrompt, UsageCounters, UsageMetric, UsageStatus,
};

/// One plan's entry in a catalog definition file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDefinition {
    #[serde(flatten)]
    pub features: PlanFeatureSet,
    #[serde(default)]
    pub upgrades: Vec<UpgradePrompt>,
}

/// Catalog definition as written in YAML.
///
/// ```yaml
/// plans:
///   - plan: FREE
///     maxChats: 10
///     maxFiles: 5
///     maxAssistants: 1
///     monthlyTokenLimit: 10000
///     storageLimitGB: 1
///     upgrades: []
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDefinition {
    pub plans: Vec<PlanDefinition>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlanCatalog {
    feature_sets: [PlanFeatureSet; 3],
    upgrades: [Vec<UpgradePrompt>; 3],
}

impl PlanCatalog {
    /// Builds a catalog, validating that:
    /// - every plan is defined exactly once
    /// - numeric limits never decrease from one tier to the next
    /// - upgrade prompts only point at higher plans
    pub fn new(definitions: Vec<PlanDefinition>) -> Result<Self, ConfigurationError> {
        let mut slots: [Option<PlanDefinition>; 3] = [None, None, None];

        for definition in definitions {
            let plan = definition.features.plan;
            let slot = &mut slots[plan.rank() as usize];
            if slot.is_some() {
                return Err(ConfigurationError::DuplicatePlan(plan));
            }
            if let Some(prompt) = definition.upgrades.iter().find(|p| p.target_plan <= plan) {
                return Err(ConfigurationError::InvalidUpgradeTarget {
                    plan,
                    target: prompt.target_plan,
                });
            }
            *slot = Some(definition);
        }

        let [free, pro, enterprise] = slots;
        let free = free.ok_or(ConfigurationError::MissingPlan(Plan::Free))?;
        let pro = pro.ok_or(ConfigurationError::MissingPlan(Plan::Pro))?;
        let enterprise = enterprise.ok_or(ConfigurationError::MissingPlan(Plan::Enterprise))?;

        let feature_sets = [free.features, pro.features, enterprise.features];

        for plan in Plan::ALL {
            let Some(next) = plan.next() else { continue };
            let lower = &feature_sets[plan.rank() as usize];
            let higher = &feature_sets[next.rank() as usize];
            if let Some(kind) = LimitKind::ALL
                .into_iter()
                .find(|&kind| higher.limit(kind) < lower.limit(kind))
            {
                return Err(ConfigurationError::NonMonotonicLimit {
                    limit: kind.as_str(),
                    lower: plan,
                    higher: next,
                });
            }
        }

        Ok(Self {
            feature_sets,
            upgrades: [free.upgrades, pro.upgrades, enterprise.upgrades],
        })
    }

    /// Parses and validates a YAML catalog definition.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigurationError> {
        let definition: CatalogDefinition = serde_yaml::from_str(yaml)
            .map_err(|e| ConfigurationError::catalog_unreadable(e.to_string()))?;
        Self::new(definition.plans)
    }

    /// Reads, parses and validates a YAML catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|e| {
            ConfigurationError::catalog_unreadable(format!("{}: {}", path.display(), e))
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Exports the catalog in its definition form.
    pub fn to_definition(&self) -> CatalogDefinition {
        CatalogDefinition {
            plans: Plan::all()
                .iter()
                .map(|plan| PlanDefinition {
                    features: self.resolve_feature_set(*plan).clone(),
                    upgrades: self.suggest_upgrade(*plan).to_vec(),
                })
                .collect(),
        }
    }

    /// Feature sets ordered by tier.
    pub fn feature_sets(&self) -> &[PlanFeatureSet] {
        &self.feature_sets
    }

    pub fn resolve_feature_set(&self, plan: Plan) -> &PlanFeatureSet {
        &self.feature_sets[plan.rank() as usize]
    }

    pub fn has_capability(&self, plan: Plan, capability: Capability) -> bool {
        self.resolve_feature_set(plan).has_capability(capability)
    }

    /// Lowest plan that grants `capability`, if any does.
    pub fn minimum_plan_for(&self, capability: Capability) -> Option<Plan> {
        self.feature_sets
            .iter()
            .find(|set| set.has_capability(capability))
            .map(|set| set.plan)
    }

    pub fn usage_status(
        &self,
        counters: &UsageCounters,
        plan: Plan,
        metric: UsageMetric,
    ) -> UsageStatus {
        let limit = self.resolve_feature_set(plan).limit(metric.limit_kind());
        UsageStatus::compute(metric, counters.current(metric), limit)
    }

    /// Upgrade prompts for `plan`, strongest first. Empty for the top tier.
    pub fn suggest_upgrade(&self, plan: Plan) -> &[UpgradePrompt] {
        &self.upgrades[plan.rank() as usize]
    }

    pub fn compare_plans(&self, current: Plan, target: Plan) -> PlanComparison {
        PlanComparison::between(
            self.resolve_feature_set(current),
            self.resolve_feature_set(target),
        )
    }
}

impl Default for PlanCatalog {
    fn default() -> Self {
        Self {
            feature_sets: Plan::ALL.map(PlanFeatureSet::default_for),
            upgrades: Plan::ALL.map(UpgradePrompt::defaults_for),
        }
    }
}

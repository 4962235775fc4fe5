//! Side-by-side plan comparison for display.

use serde::{Deserialize, Serialize};

use super::{Limit, LimitKind, PlanFeatureSet};

/// Change in one numeric limit when moving between plans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "amount", rename_all = "snake_case")]
pub enum LimitDelta {
    /// Both limits finite: `target - current`, negative on a downgrade.
    /// Saturates at the `i64` range.
    Change(i64),
    /// Finite limit becomes unlimited.
    BecomesUnlimited,
    /// Unlimited becomes finite with the given ceiling.
    BecomesLimited(u64),
    /// Both unlimited.
    Unchanged,
}

impl LimitDelta {
    pub fn between(current: Limit, target: Limit) -> Self {
        match (current, target) {
            (Limit::Limited(from), Limit::Limited(to)) => {
                let diff = i128::from(to) - i128::from(from);
                LimitDelta::Change(diff.clamp(i64::MIN.into(), i64::MAX.into()) as i64)
            }
            (Limit::Limited(_), Limit::Unlimited) => LimitDelta::BecomesUnlimited,
            (Limit::Unlimited, Limit::Limited(to)) => LimitDelta::BecomesLimited(to),
            (Limit::Unlimited, Limit::Unlimited) => LimitDelta::Unchanged,
        }
    }
}

/// Signed deltas for every numeric limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitDeltas {
    pub max_chats: LimitDelta,
    pub max_files: LimitDelta,
    pub max_assistants: LimitDelta,
    pub monthly_token_limit: LimitDelta,
    #[serde(rename = "storageLimitGB")]
    pub storage_limit_gb: LimitDelta,
}

impl LimitDeltas {
    pub fn get(&self, kind: LimitKind) -> LimitDelta {
        match kind {
            LimitKind::MaxChats => self.max_chats,
            LimitKind::MaxFiles => self.max_files,
            LimitKind::MaxAssistants => self.max_assistants,
            LimitKind::MonthlyTokenLimit => self.monthly_token_limit,
            LimitKind::StorageLimitGb => self.storage_limit_gb,
        }
    }
}

/// Two feature sets and the deltas between them.
///
/// Downgrades are allowed and produce negative deltas; `is_upgrade` tells the
/// caller which direction it is looking at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanComparison {
    pub current: PlanFeatureSet,
    pub target: PlanFeatureSet,
    pub deltas: LimitDeltas,
    pub is_upgrade: bool,
}

impl PlanComparison {
    pub fn between(current: &PlanFeatureSet, target: &PlanFeatureSet) -> Self {
        let delta = |kind| LimitDelta::between(current.limit(kind), target.limit(kind));
        Self {
            current: current.clone(),
            target: target.clone(),
            deltas: LimitDeltas {
                max_chats: delta(LimitKind::MaxChats),
                max_files: delta(LimitKind::MaxFiles),
                max_assistants: delta(LimitKind::MaxAssistants),
                monthly_token_limit: delta(LimitKind::MonthlyTokenLimit),
                storage_limit_gb: delta(LimitKind::StorageLimitGb),
            },
            is_upgrade: target.plan > current.plan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entitlement::Plan;

    #[test]
    fn free_to_pro_has_positive_deltas() {
        let comparison = PlanComparison::between(
            &PlanFeatureSet::default_for(Plan::Free),
            &PlanFeatureSet::default_for(Plan::Pro),
        );
        assert!(comparison.is_upgrade);
        assert_eq!(comparison.deltas.max_chats, LimitDelta::Change(990));
        assert_eq!(comparison.deltas.storage_limit_gb, LimitDelta::Change(9));
    }

    #[test]
    fn pro_to_enterprise_becomes_unlimited() {
        let comparison = PlanComparison::between(
            &PlanFeatureSet::default_for(Plan::Pro),
            &PlanFeatureSet::default_for(Plan::Enterprise),
        );
        assert_eq!(comparison.deltas.max_chats, LimitDelta::BecomesUnlimited);
        assert_eq!(comparison.deltas.storage_limit_gb, LimitDelta::Change(990));
    }

    #[test]
    fn downgrade_yields_negative_deltas() {
        let comparison = PlanComparison::between(
            &PlanFeatureSet::default_for(Plan::Pro),
            &PlanFeatureSet::default_for(Plan::Free),
        );
        assert!(!comparison.is_upgrade);
        assert_eq!(comparison.deltas.get(LimitKind::MaxFiles), LimitDelta::Change(-95));
    }

    #[test]
    fn enterprise_to_free_becomes_limited() {
        let comparison = PlanComparison::between(
            &PlanFeatureSet::default_for(Plan::Enterprise),
            &PlanFeatureSet::default_for(Plan::Free),
        );
        assert_eq!(comparison.deltas.max_chats, LimitDelta::BecomesLimited(10));
    }

    #[test]
    fn same_plan_comparison_is_neutral() {
        let set = PlanFeatureSet::default_for(Plan::Enterprise);
        let comparison = PlanComparison::between(&set, &set);
        assert!(!comparison.is_upgrade);
        assert_eq!(comparison.deltas.max_chats, LimitDelta::Unchanged);
        assert_eq!(comparison.deltas.storage_limit_gb, LimitDelta::Change(0));
    }

    #[test]
    fn delta_between_extreme_limits_saturates() {
        assert_eq!(
            LimitDelta::between(Limit::Limited(0), Limit::Limited(u64::MAX)),
            LimitDelta::Change(i64::MAX)
        );
        assert_eq!(
            LimitDelta::between(Limit::Limited(u64::MAX), Limit::Limited(1)),
            LimitDelta::Change(i64::MIN)
        );
        assert_eq!(
            LimitDelta::between(Limit::Limited(u64::MAX), Limit::Limited(u64::MAX - 3)),
            LimitDelta::Change(-3)
        );
    }

    #[test]
    fn delta_serializes_with_kind_tag() {
        let json = serde_json::to_value(LimitDelta::Change(-5)).unwrap();
        assert_eq!(json["kind"], "change");
        assert_eq!(json["amount"], -5);
        let json = serde_json::to_value(LimitDelta::BecomesUnlimited).unwrap();
        assert_eq!(json["kind"], "becomes_unlimited");
    }
}

//! ComparePlansHandler - Query handler for plan-to-plan comparisons.

use std::sync::Arc;

use crate::domain::entitlement::{Plan, PlanCatalog, PlanComparison};

/// Query to compare the current plan with a target plan.
#[derive(Debug, Clone, Copy)]
pub struct ComparePlansQuery {
    pub current: Plan,
    pub target: Plan,
}

/// Handler for plan comparisons.
///
/// Downgrades and same-plan comparisons are answered too; the comparison
/// reports whether the target is an upgrade.
pub struct ComparePlansHandler {
    catalog: Arc<PlanCatalog>,
}

impl ComparePlansHandler {
    pub fn new(catalog: Arc<PlanCatalog>) -> Self {
        Self { catalog }
    }

    pub fn handle(&self, query: ComparePlansQuery) -> PlanComparison {
        self.catalog.compare_plans(query.current, query.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entitlement::{LimitDelta, LimitKind};

    fn handler() -> ComparePlansHandler {
        ComparePlansHandler::new(Arc::new(PlanCatalog::default()))
    }

    #[test]
    fn free_to_pro_is_an_upgrade_with_positive_deltas() {
        let comparison = handler().handle(ComparePlansQuery {
            current: Plan::Free,
            target: Plan::Pro,
        });

        assert!(comparison.is_upgrade);
        assert_eq!(
            comparison.deltas.get(LimitKind::MaxChats),
            LimitDelta::Change(990)
        );
    }

    #[test]
    fn pro_to_enterprise_becomes_unlimited() {
        let comparison = handler().handle(ComparePlansQuery {
            current: Plan::Pro,
            target: Plan::Enterprise,
        });

        assert_eq!(
            comparison.deltas.get(LimitKind::MonthlyTokenLimit),
            LimitDelta::BecomesUnlimited
        );
    }

    #[test]
    fn downgrade_is_reported_not_rejected() {
        let comparison = handler().handle(ComparePlansQuery {
            current: Plan::Pro,
            target: Plan::Free,
        });

        assert!(!comparison.is_upgrade);
        assert_eq!(
            comparison.deltas.get(LimitKind::MaxFiles),
            LimitDelta::Change(-95)
        );
    }
}

//! Shared application state.

use std::sync::Arc;

use crate::application::handlers::{
    CheckEntitlementHandler, ComparePlansHandler, GetPlanHandler, ScoreBehaviorEventHandler,
    ScoreQueryEventHandler,
};
use crate::domain::entitlement::{PlanCatalog, UsageThresholds};
use crate::domain::scoring::{BehaviorScorer, QueryScorer};

/// Shared application state containing all dependencies.
///
/// This struct is cloned for each request and contains Arc-wrapped dependencies
/// for efficient sharing across handlers. Everything in it is immutable after
/// startup.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<PlanCatalog>,
    pub thresholds: UsageThresholds,
    pub behavior_scorer: Arc<BehaviorScorer>,
    pub query_scorer: Arc<QueryScorer>,
}

impl AppState {
    /// State with default scorers over the given catalog and thresholds.
    pub fn new(catalog: PlanCatalog, thresholds: UsageThresholds) -> Self {
        Self {
            catalog: Arc::new(catalog),
            thresholds,
            behavior_scorer: Arc::new(BehaviorScorer::default()),
            query_scorer: Arc::new(QueryScorer::default()),
        }
    }

    /// Create handlers on demand from the shared state.
    pub fn check_entitlement_handler(&self) -> CheckEntitlementHandler {
        CheckEntitlementHandler::new(self.catalog.clone(), self.thresholds)
    }

    pub fn compare_plans_handler(&self) -> ComparePlansHandler {
        ComparePlansHandler::new(self.catalog.clone())
    }

    pub fn get_plan_handler(&self) -> GetPlanHandler {
        GetPlanHandler::new(self.catalog.clone())
    }

    pub fn score_behavior_handler(&self) -> ScoreBehaviorEventHandler {
        ScoreBehaviorEventHandler::new(self.behavior_scorer.clone())
    }

    pub fn score_query_handler(&self) -> ScoreQueryEventHandler {
        ScoreQueryEventHandler::new(self.query_scorer.clone())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(PlanCatalog::default(), UsageThresholds::default())
    }
}

//! HTTP handlers for plan and entitlement endpoints.
//!
//! These handlers connect Axum routes to application layer query handlers.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Json, Path, Query, State};
use axum::response::IntoResponse;

use crate::application::handlers::{CheckEntitlementQuery, ComparePlansQuery};
use crate::domain::entitlement::{Capability, Plan};

use super::dto::{
    CheckEntitlementRequest, CheckEntitlementResponse, ComparePlansParams, PlanResponse,
    PlansResponse, UpgradesResponse,
};
use crate::adapters::http::{ApiError, AppState};

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/plans - All feature sets, lowest tier first
pub async fn list_plans(State(state): State<AppState>) -> impl IntoResponse {
    let plans = state.get_plan_handler().list();
    Json(PlansResponse { plans })
}

/// GET /api/plans/:plan - One plan's feature set and upgrades
pub async fn get_plan(
    State(state): State<AppState>,
    Path(plan): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let plan: Plan = plan.parse()?;
    let result = state.get_plan_handler().handle(plan);
    Ok(Json(PlanResponse::from(result)))
}

/// GET /api/plans/:plan/upgrades - Upgrade prompts offered from a plan
pub async fn get_upgrades(
    State(state): State<AppState>,
    Path(plan): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let plan: Plan = plan.parse()?;
    let upgrades = state.get_plan_handler().handle(plan).upgrades;
    Ok(Json(UpgradesResponse { plan, upgrades }))
}

/// GET /api/plans/compare?current=&target= - Side-by-side plan comparison
pub async fn compare_plans(
    State(state): State<AppState>,
    params: Result<Query<ComparePlansParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) = params?;
    let query = ComparePlansQuery {
        current: params.current.parse()?,
        target: params.target.parse()?,
    };
    Ok(Json(state.compare_plans_handler().handle(query)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Checks (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/entitlements/check - Evaluate usage and capability for a plan
pub async fn check_entitlement(
    State(state): State<AppState>,
    payload: Result<Json<CheckEntitlementRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    let capability = request
        .capability
        .as_deref()
        .map(str::parse::<Capability>)
        .transpose()?;

    let query = CheckEntitlementQuery {
        plan: request.plan.parse()?,
        usage: request.usage,
        capability,
    };

    let result = state.check_entitlement_handler().handle(query)?;
    Ok(Json(CheckEntitlementResponse::from(result)))
}

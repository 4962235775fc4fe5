//! Axum router configuration for plan and entitlement endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{check_entitlement, compare_plans, get_plan, get_upgrades, list_plans};
use crate::adapters::http::AppState;

/// Create the plan catalog router.
///
/// # Routes
/// - `GET /` - All feature sets
/// - `GET /compare` - Plan comparison
/// - `GET /:plan` - One feature set with upgrades
/// - `GET /:plan/upgrades` - Upgrade prompts
pub fn plan_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_plans))
        .route("/compare", get(compare_plans))
        .route("/:plan", get(get_plan))
        .route("/:plan/upgrades", get(get_upgrades))
}

/// Create the entitlement check router.
///
/// # Routes
/// - `POST /check` - Usage and capability check
pub fn entitlement_routes() -> Router<AppState> {
    Router::new().route("/check", post(check_entitlement))
}

/// Create the complete entitlement module router, suitable for mounting at `/api`.
pub fn entitlement_router() -> Router<AppState> {
    Router::new()
        .nest("/plans", plan_routes())
        .nest("/entitlements", entitlement_routes())
}

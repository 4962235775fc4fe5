//! HTTP adapter for plan and entitlement endpoints.
//!
//! - `GET /api/plans` - All feature sets
//! - `GET /api/plans/:plan` - One feature set with its upgrade prompts
//! - `GET /api/plans/:plan/upgrades` - Upgrade prompts for a plan
//! - `GET /api/plans/compare?current=&target=` - Plan comparison
//! - `POST /api/entitlements/check` - Usage and capability check

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use routes::entitlement_router;

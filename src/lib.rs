//! Plan Entitlements - plan-tiered entitlement resolution and event scoring
//!
//! This crate resolves what a subscription plan grants (limits, capabilities,
//! upgrade paths), evaluates usage against those limits, and scores behavior
//! and AI-query events for partner ranking.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod telemetry;

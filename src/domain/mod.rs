//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, timestamps, errors)
//! - `entitlement` - Plan catalog, usage status and upgrade suggestions
//! - `scoring` - Behavior and query event scoring

pub mod entitlement;
pub mod foundation;
pub mod scoring;

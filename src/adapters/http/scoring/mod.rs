//! HTTP adapter for scoring endpoints.
//!
//! - `POST /api/scoring/behavior` - Behavior event in, `{scoreImpact}` out
//! - `POST /api/scoring/query` - Query event in, score and derived metrics out

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use routes::scoring_router;

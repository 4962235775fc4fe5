//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure. The
//! [`router::app`] function assembles them behind the shared middleware.

pub mod entitlement;
mod error;
pub mod router;
pub mod scoring;
mod state;

// Re-export key types for convenience
pub use error::{ApiError, ErrorResponse};
pub use router::{api_router, app};
pub use state::AppState;

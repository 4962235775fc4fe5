//! Application layer - Queries and Handlers.
//!
//! This layer joins domain operations into the results the HTTP adapter
//! returns. Handlers hold their dependencies behind `Arc` and are cheap to
//! construct per request.

mod error;
pub mod handlers;

pub use error::ApplicationError;

//! Errors surfaced by application handlers.

use thiserror::Error;

use crate::domain::entitlement::ConfigurationError;
use crate::domain::foundation::{ErrorCode, ValidationError};

/// Failure of a handler, classified by who is at fault.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApplicationError {
    /// The caller sent something malformed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The deployment or caller's integration is broken (unknown plan tag, bad catalog).
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

impl ApplicationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ApplicationError::Validation(e) => e.code(),
            ApplicationError::Configuration(e) => e.code(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ApplicationError::Validation(_))
    }
}

//! Plan catalog configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::domain::entitlement::PlanCatalog;

/// Where the plan catalog comes from.
///
/// Without a `catalog_path` the built-in default tables are used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntitlementsConfig {
    /// YAML file replacing the built-in plan catalog
    pub catalog_path: Option<PathBuf>,
}

impl EntitlementsConfig {
    /// Builds the catalog, reading and validating the file when one is configured.
    pub fn catalog(&self) -> Result<PlanCatalog, ValidationError> {
        match &self.catalog_path {
            Some(path) => PlanCatalog::from_path(path).map_err(ValidationError::InvalidCatalog),
            None => Ok(PlanCatalog::default()),
        }
    }
}

//! Subscription plan definitions.
//!
//! Represents the subscription tiers that gate feature access and quotas.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ConfigurationError;

/// Subscription plan tier.
///
/// Ordered by increasing entitlement, so `Plan::Free < Plan::Pro < Plan::Enterprise`.
/// Set by billing state; the engine only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Plan {
    /// Free tier - small quotas, no premium capabilities.
    Free,

    /// Professional tier - larger quotas, API access and premium models.
    Pro,

    /// Enterprise tier - unlimited quotas and every capability.
    Enterprise,
}

impl Plan {
    /// Every plan, lowest tier first.
    pub const ALL: [Plan; 3] = [Plan::Free, Plan::Pro, Plan::Enterprise];

    /// Returns every plan, lowest tier first.
    pub fn all() -> &'static [Plan] {
        &Self::ALL
    }

    /// Returns the wire tag for this plan.
    pub fn as_str(&self) -> &'static str {
        match self {
            Plan::Free => "FREE",
            Plan::Pro => "PRO",
            Plan::Enterprise => "ENTERPRISE",
        }
    }

    /// Returns the display name for this plan.
    pub fn display_name(&self) -> &'static str {
        match self {
            Plan::Free => "Free",
            Plan::Pro => "Pro",
            Plan::Enterprise => "Enterprise",
        }
    }

    /// Returns the numeric rank of this plan for comparison.
    ///
    /// Higher rank = more entitlement.
    pub fn rank(&self) -> u8 {
        match self {
            Plan::Free => 0,
            Plan::Pro => 1,
            Plan::Enterprise => 2,
        }
    }

    /// Returns the next tier up, or `None` for the top tier.
    pub fn next(&self) -> Option<Plan> {
        match self {
            Plan::Free => Some(Plan::Pro),
            Plan::Pro => Some(Plan::Enterprise),
            Plan::Enterprise => None,
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Plan {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FREE" => Ok(Plan::Free),
            "PRO" => Ok(Plan::Pro),
            "ENTERPRISE" => Ok(Plan::Enterprise),
            _ => Err(ConfigurationError::unknown_plan(s)),
        }
    }
}

impl TryFrom<String> for Plan {
    type Error = ConfigurationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Plan> for String {
    fn from(plan: Plan) -> Self {
        plan.as_str().to_string()
    }
}

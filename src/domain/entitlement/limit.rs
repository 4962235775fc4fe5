//! Numeric quota limits.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A quota ceiling that may be unlimited.
///
/// On the wire a limit is a plain integer where `-1` means unlimited. Any
/// non-positive value is read as unlimited, since a zero ceiling would block
/// every action outright.
///
/// Ordering treats `Unlimited` as greater than every finite limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum Limit {
    Limited(u64),
    Unlimited,
}

impl Limit {
    /// Wire value for an unlimited quota.
    pub const UNLIMITED_SENTINEL: i64 = -1;

    pub fn is_unlimited(&self) -> bool {
        matches!(self, Limit::Unlimited)
    }

    /// Returns the finite ceiling, or `None` when unlimited.
    pub fn value(&self) -> Option<u64> {
        match self {
            Limit::Limited(max) => Some(*max),
            Limit::Unlimited => None,
        }
    }

    /// Returns true once `current` has reached the ceiling.
    ///
    /// Never true for an unlimited quota.
    pub fn is_reached(&self, current: f64) -> bool {
        self.value().map(|max| current >= max as f64).unwrap_or(false)
    }
}

impl From<i64> for Limit {
    fn from(raw: i64) -> Self {
        if raw <= 0 {
            Limit::Unlimited
        } else {
            Limit::Limited(raw as u64)
        }
    }
}

impl From<Limit> for i64 {
    fn from(limit: Limit) -> Self {
        match limit {
            Limit::Limited(max) => i64::try_from(max).unwrap_or(i64::MAX),
            Limit::Unlimited => Limit::UNLIMITED_SENTINEL,
        }
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Limit::Limited(max) => write!(f, "{}", max),
            Limit::Unlimited => write!(f, "unlimited"),
        }
    }
}

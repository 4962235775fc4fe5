//! Usage counters and the quota status derived from them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

use super::{Limit, LimitKind};

/// Default percentage at which a warning is surfaced.
pub const DEFAULT_WARNING_THRESHOLD: f64 = 80.0;

/// Default percentage at which an action is denied.
pub const DEFAULT_BLOCK_THRESHOLD: f64 = 100.0;

/// Snapshot of a user's consumption for the current billing month.
///
/// Owned by the billing subsystem; the engine only reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageCounters {
    #[serde(default)]
    pub monthly_chat_count: u64,
    #[serde(default)]
    pub monthly_token_usage: u64,
    #[serde(default, rename = "storageUsedGB")]
    pub storage_used_gb: f64,
}

impl UsageCounters {
    /// Returns the counter tracked by the given metric.
    pub fn current(&self, metric: UsageMetric) -> f64 {
        match metric {
            UsageMetric::Chats => self.monthly_chat_count as f64,
            UsageMetric::Tokens => self.monthly_token_usage as f64,
            UsageMetric::Storage => self.storage_used_gb,
        }
    }

    /// Rejects storage figures that are negative or not finite.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.storage_used_gb.is_finite() || self.storage_used_gb < 0.0 {
            return Err(ValidationError::out_of_range(
                "storageUsedGB",
                0.0,
                f64::MAX,
                self.storage_used_gb,
            ));
        }
        Ok(())
    }
}

/// Quota that a usage check is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageMetric {
    Chats,
    Tokens,
    Storage,
}

impl UsageMetric {
    pub const ALL: [UsageMetric; 3] = [UsageMetric::Chats, UsageMetric::Tokens, UsageMetric::Storage];

    pub fn as_str(&self) -> &'static str {
        match self {
            UsageMetric::Chats => "chats",
            UsageMetric::Tokens => "tokens",
            UsageMetric::Storage => "storage",
        }
    }

    /// The feature-set limit this metric is measured against.
    pub fn limit_kind(&self) -> LimitKind {
        match self {
            UsageMetric::Chats => LimitKind::MaxChats,
            UsageMetric::Tokens => LimitKind::MonthlyTokenLimit,
            UsageMetric::Storage => LimitKind::StorageLimitGb,
        }
    }

    fn unit(&self) -> &'static str {
        match self {
            UsageMetric::Chats => "chats",
            UsageMetric::Tokens => "tokens",
            UsageMetric::Storage => "GB of storage",
        }
    }
}

impl fmt::Display for UsageMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UsageMetric {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chats" => Ok(UsageMetric::Chats),
            "tokens" => Ok(UsageMetric::Tokens),
            "storage" => Ok(UsageMetric::Storage),
            _ => Err(ValidationError::invalid_format(
                "metric",
                format!("unknown metric '{}', expected chats, tokens or storage", s),
            )),
        }
    }
}

/// Derived read of how much of a quota has been consumed.
///
/// Recomputed on every check, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageStatus {
    pub metric: UsageMetric,
    pub current: f64,
    pub limit: Limit,
    /// Quota left before the ceiling; `None` when unlimited.
    pub remaining: Option<f64>,
    /// Share of the quota consumed, clamped to `[0, 100]`.
    pub percentage: f64,
    pub is_blocked: bool,
}

impl UsageStatus {
    /// Evaluates `current` consumption against `limit`.
    pub fn compute(metric: UsageMetric, current: f64, limit: Limit) -> Self {
        match limit.value() {
            None => Self {
                metric,
                current,
                limit,
                remaining: None,
                percentage: 0.0,
                is_blocked: false,
            },
            Some(max) => {
                let max = max as f64;
                let percentage = (current * 100.0 / max).clamp(0.0, 100.0);
                Self {
                    metric,
                    current,
                    limit,
                    remaining: Some((max - current).max(0.0)),
                    percentage,
                    is_blocked: limit.is_reached(current),
                }
            }
        }
    }

    pub fn is_unlimited(&self) -> bool {
        self.limit.is_unlimited()
    }

    /// True once consumption has reached `threshold` percent.
    pub fn should_warn(&self, threshold: f64) -> bool {
        !self.is_unlimited() && self.percentage >= threshold
    }

    /// True once consumption has reached `threshold` percent.
    pub fn should_block(&self, threshold: f64) -> bool {
        !self.is_unlimited() && self.percentage >= threshold
    }

    /// User-facing summary of the status.
    pub fn user_message(&self) -> String {
        match self.limit {
            Limit::Unlimited => format!("Your plan includes unlimited {}.", self.metric.unit()),
            Limit::Limited(max) => format!(
                "You've used {} of {} {} this month ({:.0}%).",
                format_quantity(self.current),
                max,
                self.metric.unit(),
                self.percentage
            ),
        }
    }
}

fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

//! Plan-based feature limits configuration.
//!
//! Defines which capabilities and numeric quotas each plan carries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

use super::{Limit, Plan};

/// Boolean capability gated by plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    ApiAccess,
    PremiumModels,
    CustomTools,
    Webhooks,
    TeamCollaboration,
    PrioritySupport,
    CustomBranding,
}

impl Capability {
    pub const ALL: [Capability; 7] = [
        Capability::ApiAccess,
        Capability::PremiumModels,
        Capability::CustomTools,
        Capability::Webhooks,
        Capability::TeamCollaboration,
        Capability::PrioritySupport,
        Capability::CustomBranding,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::ApiAccess => "api_access",
            Capability::PremiumModels => "premium_models",
            Capability::CustomTools => "custom_tools",
            Capability::Webhooks => "webhooks",
            Capability::TeamCollaboration => "team_collaboration",
            Capability::PrioritySupport => "priority_support",
            Capability::CustomBranding => "custom_branding",
        }
    }

    /// Human-readable name used in denial messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Capability::ApiAccess => "API access",
            Capability::PremiumModels => "Premium models",
            Capability::CustomTools => "Custom tools",
            Capability::Webhooks => "Webhooks",
            Capability::TeamCollaboration => "Team collaboration",
            Capability::PrioritySupport => "Priority support",
            Capability::CustomBranding => "Custom branding",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Capability {
    type Err = ValidationError;

    /// Accepts snake_case and camelCase spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();

        Capability::ALL
            .into_iter()
            .find(|cap| cap.as_str().replace('_', "") == normalized)
            .ok_or_else(|| {
                ValidationError::invalid_format("capability", format!("unknown capability '{}'", s))
            })
    }
}

/// Capability flags carried by a plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    #[serde(default)]
    pub api_access: bool,
    #[serde(default)]
    pub premium_models: bool,
    #[serde(default)]
    pub custom_tools: bool,
    #[serde(default)]
    pub webhooks: bool,
    #[serde(default)]
    pub team_collaboration: bool,
    #[serde(default)]
    pub priority_support: bool,
    #[serde(default)]
    pub custom_branding: bool,
}

impl Capabilities {
    /// Every capability enabled.
    pub fn all() -> Self {
        Self {
            api_access: true,
            premium_models: true,
            custom_tools: true,
            webhooks: true,
            team_collaboration: true,
            priority_support: true,
            custom_branding: true,
        }
    }

    pub fn has(&self, capability: Capability) -> bool {
        match capability {
            Capability::ApiAccess => self.api_access,
            Capability::PremiumModels => self.premium_models,
            Capability::CustomTools => self.custom_tools,
            Capability::Webhooks => self.webhooks,
            Capability::TeamCollaboration => self.team_collaboration,
            Capability::PrioritySupport => self.priority_support,
            Capability::CustomBranding => self.custom_branding,
        }
    }
}

/// Numeric limits carried by every feature set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LimitKind {
    #[serde(rename = "maxChats")]
    MaxChats,
    #[serde(rename = "maxFiles")]
    MaxFiles,
    #[serde(rename = "maxAssistants")]
    MaxAssistants,
    #[serde(rename = "monthlyTokenLimit")]
    MonthlyTokenLimit,
    #[serde(rename = "storageLimitGB")]
    StorageLimitGb,
}

impl LimitKind {
    pub const ALL: [LimitKind; 5] = [
        LimitKind::MaxChats,
        LimitKind::MaxFiles,
        LimitKind::MaxAssistants,
        LimitKind::MonthlyTokenLimit,
        LimitKind::StorageLimitGb,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LimitKind::MaxChats => "maxChats",
            LimitKind::MaxFiles => "maxFiles",
            LimitKind::MaxAssistants => "maxAssistants",
            LimitKind::MonthlyTokenLimit => "monthlyTokenLimit",
            LimitKind::StorageLimitGb => "storageLimitGB",
        }
    }
}

/// Feature limits for a plan.
///
/// Defines the boundaries of what a user can do based on their subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanFeatureSet {
    /// The plan these limits apply to.
    pub plan: Plan,
    pub max_chats: Limit,
    pub max_files: Limit,
    pub max_assistants: Limit,
    pub monthly_token_limit: Limit,
    #[serde(rename = "storageLimitGB")]
    pub storage_limit_gb: Limit,
    #[serde(default)]
    pub capabilities: Capabilities,
}

impl PlanFeatureSet {
    /// Get the built-in feature set for a specific plan.
    ///
    /// # Plan Configuration
    ///
    /// | Plan | Chats | Files | Assistants | Tokens/month | Storage GB | Capabilities |
    /// |------|-------|-------|------------|--------------|------------|--------------|
    /// | Free | 10 | 5 | 1 | 10,000 | 1 | none |
    /// | Pro | 1,000 | 100 | 10 | 500,000 | 10 | API, premium models, custom tools, webhooks |
    /// | Enterprise | Unlimited | Unlimited | Unlimited | Unlimited | 1,000 | all |
    pub fn default_for(plan: Plan) -> Self {
        match plan {
            Plan::Free => Self {
                plan,
                max_chats: Limit::Limited(10),
                max_files: Limit::Limited(5),
                max_assistants: Limit::Limited(1),
                monthly_token_limit: Limit::Limited(10_000),
                storage_limit_gb: Limit::Limited(1),
                capabilities: Capabilities::default(),
            },
            Plan::Pro => Self {
                plan,
                max_chats: Limit::Limited(1_000),
                max_files: Limit::Limited(100),
                max_assistants: Limit::Limited(10),
                monthly_token_limit: Limit::Limited(500_000),
                storage_limit_gb: Limit::Limited(10),
                capabilities: Capabilities {
                    api_access: true,
                    premium_models: true,
                    custom_tools: true,
                    webhooks: true,
                    ..Capabilities::default()
                },
            },
            Plan::Enterprise => Self {
                plan,
                max_chats: Limit::Unlimited,
                max_files: Limit::Unlimited,
                max_assistants: Limit::Unlimited,
                monthly_token_limit: Limit::Unlimited,
                storage_limit_gb: Limit::Limited(1_000),
                capabilities: Capabilities::all(),
            },
        }
    }

    /// Returns the numeric limit of the given kind.
    pub fn limit(&self, kind: LimitKind) -> Limit {
        match kind {
            LimitKind::MaxChats => self.max_chats,
            LimitKind::MaxFiles => self.max_files,
            LimitKind::MaxAssistants => self.max_assistants,
            LimitKind::MonthlyTokenLimit => self.monthly_token_limit,
            LimitKind::StorageLimitGb => self.storage_limit_gb,
        }
    }

    pub fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities.has(capability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Plan Configuration Tests

    #[test]
    fn free_plan_has_10_chats() {
        let set = PlanFeatureSet::default_for(Plan::Free);
        assert_eq!(set.max_chats, Limit::Limited(10));
    }

    #[test]
    fn free_plan_has_no_capabilities() {
        let set = PlanFeatureSet::default_for(Plan::Free);
        assert!(Capability::ALL.iter().all(|&cap| !set.has_capability(cap)));
    }

    #[test]
    fn pro_plan_has_api_access_but_no_branding() {
        let set = PlanFeatureSet::default_for(Plan::Pro);
        assert!(set.has_capability(Capability::ApiAccess));
        assert!(set.has_capability(Capability::Webhooks));
        assert!(!set.has_capability(Capability::CustomBranding));
        assert!(!set.has_capability(Capability::PrioritySupport));
    }

    #[test]
    fn enterprise_plan_has_every_capability() {
        let set = PlanFeatureSet::default_for(Plan::Enterprise);
        for cap in Capability::ALL {
            assert!(set.has_capability(cap), "missing {}", cap);
        }
    }

    #[test]
    fn enterprise_limits_are_unlimited_or_above_pro() {
        let pro = PlanFeatureSet::default_for(Plan::Pro);
        let enterprise = PlanFeatureSet::default_for(Plan::Enterprise);
        for kind in LimitKind::ALL {
            let e = enterprise.limit(kind);
            assert!(
                e.is_unlimited() || e > pro.limit(kind),
                "{} not above pro",
                kind.as_str()
            );
        }
    }

    #[test]
    fn limit_accessor_matches_fields() {
        let set = PlanFeatureSet::default_for(Plan::Pro);
        assert_eq!(set.limit(LimitKind::MaxFiles), set.max_files);
        assert_eq!(set.limit(LimitKind::StorageLimitGb), set.storage_limit_gb);
    }

    // Capability parsing

    #[test]
    fn capability_parses_snake_and_camel_case() {
        assert_eq!("api_access".parse::<Capability>().unwrap(), Capability::ApiAccess);
        assert_eq!(
            "teamCollaboration".parse::<Capability>().unwrap(),
            Capability::TeamCollaboration
        );
    }

    #[test]
    fn capability_rejects_unknown_name() {
        let err = "time_travel".parse::<Capability>().unwrap_err();
        assert_eq!(err.field(), "capability");
    }

    // Wire format

    #[test]
    fn feature_set_serializes_with_camel_case_and_sentinel() {
        let set = PlanFeatureSet::default_for(Plan::Enterprise);
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json["plan"], "ENTERPRISE");
        assert_eq!(json["maxChats"], -1);
        assert_eq!(json["storageLimitGB"], 1000);
        assert_eq!(json["capabilities"]["customBranding"], true);
    }
}

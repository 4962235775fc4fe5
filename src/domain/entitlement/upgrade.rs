//! Static upgrade suggestions per plan.

use serde::{Deserialize, Serialize};

use super::Plan;

/// How strongly an upgrade is pushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

/// A suggested upgrade shown to users of a given plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradePrompt {
    pub title: String,
    pub description: String,
    pub target_plan: Plan,
    pub urgency: Urgency,
    /// Selling points listed under the prompt.
    pub features: Vec<String>,
}

impl UpgradePrompt {
    /// Built-in prompts for the given plan, strongest suggestion first.
    ///
    /// Enterprise has no further upgrade path and gets none.
    pub fn defaults_for(plan: Plan) -> Vec<UpgradePrompt> {
        match plan {
            Plan::Free => vec![
                UpgradePrompt {
                    title: "Upgrade to Pro".to_string(),
                    description: "Unlock more chats, API access and premium models.".to_string(),
                    target_plan: Plan::Pro,
                    urgency: Urgency::High,
                    features: features(&[
                        "1,000 chats per month",
                        "500,000 tokens per month",
                        "API access",
                        "Premium models",
                        "Custom tools and webhooks",
                    ]),
                },
                UpgradePrompt {
                    title: "Go Enterprise".to_string(),
                    description: "Unlimited usage with team collaboration and priority support."
                        .to_string(),
                    target_plan: Plan::Enterprise,
                    urgency: Urgency::Low,
                    features: features(&[
                        "Unlimited chats and tokens",
                        "Team collaboration",
                        "Priority support",
                        "Custom branding",
                    ]),
                },
            ],
            Plan::Pro => vec![UpgradePrompt {
                title: "Upgrade to Enterprise".to_string(),
                description: "Remove usage caps and bring your whole team.".to_string(),
                target_plan: Plan::Enterprise,
                urgency: Urgency::Medium,
                features: features(&[
                    "Unlimited chats, files and assistants",
                    "1 TB of storage",
                    "Team collaboration",
                    "Priority support",
                    "Custom branding",
                ]),
            }],
            Plan::Enterprise => Vec::new(),
        }
    }
}

fn features(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

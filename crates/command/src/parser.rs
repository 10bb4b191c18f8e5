//! Natural-language campaign command classifier.
//!
//! Maps a free-text command like "create winback campaign for inactive
//! customers via email and sms" to a [`ParsedCampaign`]. The classifier is
//! total: every input, including the empty string, yields a complete
//! descriptor. Unmatched input falls back to the custom campaign type.

use crate::types::{CampaignType, Channel, ParsedCampaign};

/// One classification rule: if any keyword occurs in the lowercased
/// command, the rule's type and audience apply.
struct TypeRule {
    campaign_type: CampaignType,
    keywords: &'static [&'static str],
    audience: &'static str,
}

/// Ordered rule table, first match wins. More specific intents outrank the
/// broad loyalty keywords ("reward", "points"), which are checked last.
const TYPE_RULES: &[TypeRule] = &[
    TypeRule {
        campaign_type: CampaignType::WinBack,
        keywords: &["winback", "win back", "win-back", "inactive", "lapsed"],
        audience: "Inactive customers (90+ days)",
    },
    TypeRule {
        campaign_type: CampaignType::Recovery,
        keywords: &["recovery", "bad review", "negative", "unhappy"],
        audience: "Customers with negative reviews",
    },
    TypeRule {
        campaign_type: CampaignType::Referral,
        keywords: &["referral", "5 star", "happy"],
        audience: "5-star reviewers",
    },
    TypeRule {
        campaign_type: CampaignType::Conquest,
        keywords: &["conquest", "competitor"],
        audience: "Competitor customers",
    },
    TypeRule {
        campaign_type: CampaignType::Birthday,
        keywords: &["birthday"],
        audience: "Customers with birthdays this month",
    },
    TypeRule {
        campaign_type: CampaignType::Welcome,
        keywords: &["welcome", "new customer"],
        audience: "New customers",
    },
    TypeRule {
        campaign_type: CampaignType::Service,
        keywords: &["service", "maintenance", "reminder"],
        audience: "Customers due for service",
    },
    TypeRule {
        campaign_type: CampaignType::Loyalty,
        keywords: &["loyalty", "vip", "reward", "points"],
        audience: "Loyalty Program Members",
    },
];

/// Loyalty audience sub-rules, checked in order once the loyalty rule fires.
const LOYALTY_AUDIENCE_RULES: &[(&[&str], &str)] = &[
    (&["booking", "appointment"], "Appointment Bookers"),
    (&["website", "visitor"], "Website Visitors"),
    (&["purchase", "buy"], "Purchase Events"),
    (&["service", "complete"], "Service Completers"),
];

/// Audience description when no loyalty sub-rule matches.
const DEFAULT_LOYALTY_AUDIENCE: &str = "Loyalty Program Members";

/// Audience description for the custom fallback.
const DEFAULT_AUDIENCE: &str = "target customers";

/// Classify a free-text campaign command into a structured descriptor.
///
/// Pure and deterministic: the same command always yields the same
/// descriptor, and classification never fails. Keyword matching is
/// case-insensitive; channel detection runs independently of type
/// detection and always yields email first.
pub fn parse_campaign_command(command: &str) -> ParsedCampaign {
    let lower = command.to_lowercase();

    // Channel order is fixed (email, slack, sms) regardless of where the
    // keywords appear in the command.
    let mut channels = vec![Channel::Email];
    if lower.contains("slack") {
        channels.push(Channel::Slack);
    }
    if lower.contains("sms") || lower.contains("text") {
        channels.push(Channel::Sms);
    }

    for rule in TYPE_RULES {
        if rule.keywords.iter().any(|kw| lower.contains(kw)) {
            let is_loyalty = rule.campaign_type == CampaignType::Loyalty;
            let audience = if is_loyalty {
                loyalty_audience(&lower)
            } else {
                rule.audience
            };
            return ParsedCampaign {
                campaign_type: rule.campaign_type,
                campaign_label: rule.campaign_type.label().to_string(),
                audience_description: audience.to_string(),
                is_event_based: is_loyalty,
                is_custom_type: false,
                channels,
            };
        }
    }

    ParsedCampaign {
        campaign_type: CampaignType::Custom,
        campaign_label: CampaignType::Custom.label().to_string(),
        audience_description: DEFAULT_AUDIENCE.to_string(),
        is_event_based: false,
        is_custom_type: true,
        channels,
    }
}

fn loyalty_audience(lower: &str) -> &'static str {
    for (keywords, audience) in LOYALTY_AUDIENCE_RULES {
        if keywords.iter().any(|kw| lower.contains(kw)) {
            return audience;
        }
    }
    DEFAULT_LOYALTY_AUDIENCE
}

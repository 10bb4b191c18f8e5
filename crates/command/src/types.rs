//! Campaign command domain types: campaign types, channels, and the
//! parsed descriptor returned by the classifier.

use serde::{Deserialize, Serialize};

// ─── Campaign Types ────────────────────────────────────────────────────────

/// Every campaign type the platform knows about, including the types only
/// the classifier produces (birthday, welcome, service, custom), which are
/// not part of the planner-visible [`CAMPAIGN_TYPES`] table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum CampaignType {
    New,
    Loyalty,
    Referral,
    Recovery,
    Conquest,
    WinBack,
    Promotional,
    Seasonal,
    Birthday,
    Welcome,
    Service,
    Custom,
}

impl CampaignType {
    /// Display label shown in the dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            CampaignType::New => "New Customer",
            CampaignType::Loyalty => "Loyalty",
            CampaignType::Referral => "Referral",
            CampaignType::Recovery => "Recovery",
            CampaignType::Conquest => "Conquest",
            CampaignType::WinBack => "Win-Back",
            CampaignType::Promotional => "Promotional",
            CampaignType::Seasonal => "Seasonal",
            CampaignType::Birthday => "Birthday",
            CampaignType::Welcome => "Welcome",
            CampaignType::Service => "Service Reminder",
            CampaignType::Custom => "Custom",
        }
    }
}

/// A row of the static campaign type table shown in the campaign planner.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CampaignTypeDefinition {
    pub value: CampaignType,
    pub label: &'static str,
    pub is_event_based: bool,
}

/// The planner-visible campaign type table. Loyalty is the only event-based
/// type. The classifier can also produce birthday, welcome, service, and
/// custom, which are deliberately absent here; event-based lookups resolve
/// them to false.
pub const CAMPAIGN_TYPES: &[CampaignTypeDefinition] = &[
    CampaignTypeDefinition {
        value: CampaignType::New,
        label: "New Customer",
        is_event_based: false,
    },
    CampaignTypeDefinition {
        value: CampaignType::Loyalty,
        label: "Loyalty",
        is_event_based: true,
    },
    CampaignTypeDefinition {
        value: CampaignType::Referral,
        label: "Referral",
        is_event_based: false,
    },
    CampaignTypeDefinition {
        value: CampaignType::Recovery,
        label: "Recovery",
        is_event_based: false,
    },
    CampaignTypeDefinition {
        value: CampaignType::Conquest,
        label: "Conquest",
        is_event_based: false,
    },
    CampaignTypeDefinition {
        value: CampaignType::WinBack,
        label: "Win-Back",
        is_event_based: false,
    },
    CampaignTypeDefinition {
        value: CampaignType::Promotional,
        label: "Promotional",
        is_event_based: false,
    },
    CampaignTypeDefinition {
        value: CampaignType::Seasonal,
        label: "Seasonal",
        is_event_based: false,
    },
];

// ─── Channels ──────────────────────────────────────────────────────────────

/// Delivery channels a campaign can dispatch on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Email,
    Slack,
    Sms,
}

/// Channel identifiers accepted by [`validate_channels`], in the fixed
/// detection order used by the classifier.
///
/// [`validate_channels`]: crate::channels::validate_channels
pub const AVAILABLE_CHANNELS: [&str; 3] = ["email", "slack", "sms"];

// ─── Parsed Descriptor ─────────────────────────────────────────────────────

/// Structured campaign descriptor produced from a free-text command.
/// Constructed fresh on every classification call; never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedCampaign {
    pub campaign_type: CampaignType,
    pub campaign_label: String,
    pub audience_description: String,
    /// True only for loyalty campaigns.
    pub is_event_based: bool,
    /// True when no known keyword matched and the custom fallback applied.
    /// Callers treat this as a confidence signal, not an error.
    pub is_custom_type: bool,
    /// Detected channels, always email first, then slack, then sms.
    pub channels: Vec<Channel>,
}

/// Order-preserving partition of a requested channel list into known and
/// unknown identifiers. Original casing is preserved in both lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelValidationResult {
    pub valid: Vec<String>,
    pub invalid: Vec<String>,
}

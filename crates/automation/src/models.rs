//! Automation domain types — campaigns, command preview, audit log.

use chrono::{DateTime, Utc};
use promo_command::{CampaignType, Channel, ParsedCampaign};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ─── Campaign ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub id: Uuid,
    pub name: String,
    pub status: CampaignStatus,
    /// The free-text command this campaign was created from, if any.
    pub command: Option<String>,
    pub campaign_type: CampaignType,
    pub campaign_label: String,
    pub audience_description: String,
    pub is_event_based: bool,
    pub is_custom_type: bool,
    pub channels: Vec<Channel>,
    pub timing: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    Draft,
    Active,
    Paused,
    Completed,
}

// ─── Audit Log ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub id: Uuid,
    pub user: String,
    pub action: AuditAction,
    pub resource_type: String,
    pub resource_id: String,
    pub details: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    Create,
    Update,
    Delete,
    Pause,
    Activate,
}

// ─── API Request/Response types ────────────────────────────────────────────

/// Campaign creation payload. Tagged by `source` so each arm carries exactly
/// the fields it needs: a free-text command for the classifier, or the
/// explicit fields from the campaign form.
#[derive(Debug, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum CreateCampaignRequest {
    Command {
        name: String,
        command: String,
    },
    Manual {
        name: String,
        campaign_type: CampaignType,
        audience_description: String,
        #[serde(default)]
        channels: Vec<Channel>,
        timing: Option<String>,
    },
}

#[derive(Debug, Deserialize)]
pub struct UpdateCampaignRequest {
    pub name: Option<String>,
    pub audience_description: Option<String>,
    pub channels: Option<Vec<Channel>>,
    pub timing: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CommandRequest {
    pub command: String,
}

/// Everything the campaign form needs from one round trip: the parsed
/// descriptor plus the option lists matching its event-based flag.
#[derive(Debug, Serialize)]
pub struct CommandPreview {
    pub parsed: ParsedCampaign,
    pub timing_options: Vec<&'static str>,
    pub audience_options: Vec<&'static str>,
}

#[derive(Debug, Deserialize)]
pub struct ValidateChannelsRequest {
    pub channels: Vec<String>,
}

//! In-memory campaign store backed by DashMap.
//!
//! Production: replace with PostgreSQL (sqlx) or similar ACID store.
//! This provides the same API surface for development and testing.

use crate::models::*;
use chrono::Utc;
use dashmap::DashMap;
use promo_command::{is_event_based_campaign, parse_campaign_command, CampaignType, Channel};
use tracing::info;
use uuid::Uuid;

/// Thread-safe in-memory store for campaigns and the audit log. Passed by
/// `Arc` into request handlers; single source of truth for the serving
/// process.
pub struct AutomationStore {
    campaigns: DashMap<Uuid, Campaign>,
    audit_log: DashMap<Uuid, AuditLogEntry>,
}

impl AutomationStore {
    pub fn new() -> Self {
        info!("Automation store initialized (in-memory, development mode)");
        Self {
            campaigns: DashMap::new(),
            audit_log: DashMap::new(),
        }
    }

    // ─── Campaigns ─────────────────────────────────────────────────────────

    pub fn list_campaigns(&self) -> Vec<Campaign> {
        let mut campaigns: Vec<Campaign> =
            self.campaigns.iter().map(|r| r.value().clone()).collect();
        campaigns.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        campaigns
    }

    pub fn get_campaign(&self, id: Uuid) -> Option<Campaign> {
        self.campaigns.get(&id).map(|r| r.value().clone())
    }

    /// Create a campaign from either creation source. The `Command` arm runs
    /// the classifier over the free text; the `Manual` arm derives the label
    /// and flags from the explicit campaign type.
    pub fn create_campaign(&self, req: CreateCampaignRequest, user: &str) -> Campaign {
        let now = Utc::now();
        let campaign = match req {
            CreateCampaignRequest::Command { name, command } => {
                let parsed = parse_campaign_command(&command);
                Campaign {
                    id: Uuid::new_v4(),
                    name,
                    status: CampaignStatus::Draft,
                    command: Some(command),
                    campaign_type: parsed.campaign_type,
                    campaign_label: parsed.campaign_label,
                    audience_description: parsed.audience_description,
                    is_event_based: parsed.is_event_based,
                    is_custom_type: parsed.is_custom_type,
                    channels: parsed.channels,
                    timing: None,
                    created_at: now,
                    updated_at: now,
                }
            }
            CreateCampaignRequest::Manual {
                name,
                campaign_type,
                audience_description,
                channels,
                timing,
            } => {
                // Every campaign dispatches on email at minimum.
                let channels = if channels.is_empty() {
                    vec![Channel::Email]
                } else {
                    channels
                };
                Campaign {
                    id: Uuid::new_v4(),
                    name,
                    status: CampaignStatus::Draft,
                    command: None,
                    campaign_type,
                    campaign_label: campaign_type.label().to_string(),
                    audience_description,
                    is_event_based: is_event_based_campaign(campaign_type),
                    is_custom_type: campaign_type == CampaignType::Custom,
                    channels,
                    timing,
                    created_at: now,
                    updated_at: now,
                }
            }
        };
        let id = campaign.id;
        self.campaigns.insert(id, campaign.clone());
        self.log_audit(
            user,
            AuditAction::Create,
            "campaign",
            &id.to_string(),
            serde_json::json!({"name": &campaign.name}),
        );
        campaign
    }

    pub fn update_campaign(
        &self,
        id: Uuid,
        req: UpdateCampaignRequest,
        user: &str,
    ) -> Option<Campaign> {
        self.campaigns.get_mut(&id).map(|mut entry| {
            let c = entry.value_mut();
            if let Some(name) = req.name {
                c.name = name;
            }
            if let Some(audience) = req.audience_description {
                c.audience_description = audience;
            }
            if let Some(channels) = req.channels {
                c.channels = channels;
            }
            if let Some(timing) = req.timing {
                c.timing = Some(timing);
            }
            c.updated_at = Utc::now();
            self.log_audit(
                user,
                AuditAction::Update,
                "campaign",
                &id.to_string(),
                serde_json::json!({}),
            );
            c.clone()
        })
    }

    pub fn delete_campaign(&self, id: Uuid, user: &str) -> bool {
        let removed = self.campaigns.remove(&id).is_some();
        if removed {
            self.log_audit(
                user,
                AuditAction::Delete,
                "campaign",
                &id.to_string(),
                serde_json::json!({}),
            );
        }
        removed
    }

    pub fn pause_campaign(&self, id: Uuid, user: &str) -> Option<Campaign> {
        self.campaigns.get_mut(&id).map(|mut entry| {
            entry.value_mut().status = CampaignStatus::Paused;
            entry.value_mut().updated_at = Utc::now();
            self.log_audit(
                user,
                AuditAction::Pause,
                "campaign",
                &id.to_string(),
                serde_json::json!({}),
            );
            entry.value().clone()
        })
    }

    pub fn activate_campaign(&self, id: Uuid, user: &str) -> Option<Campaign> {
        self.campaigns.get_mut(&id).map(|mut entry| {
            entry.value_mut().status = CampaignStatus::Active;
            entry.value_mut().updated_at = Utc::now();
            self.log_audit(
                user,
                AuditAction::Activate,
                "campaign",
                &id.to_string(),
                serde_json::json!({}),
            );
            entry.value().clone()
        })
    }

    // ─── Audit Log ─────────────────────────────────────────────────────────

    pub fn get_audit_log(&self) -> Vec<AuditLogEntry> {
        let mut entries: Vec<AuditLogEntry> =
            self.audit_log.iter().map(|r| r.value().clone()).collect();
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        entries
    }

    fn log_audit(
        &self,
        user: &str,
        action: AuditAction,
        resource_type: &str,
        resource_id: &str,
        details: serde_json::Value,
    ) {
        let entry = AuditLogEntry {
            id: Uuid::new_v4(),
            user: user.to_string(),
            action,
            resource_type: resource_type.to_string(),
            resource_id: resource_id.to_string(),
            details,
            timestamp: Utc::now(),
        };
        self.audit_log.insert(entry.id, entry);
    }

    // ─── Demo Data ─────────────────────────────────────────────────────────

    /// Seed a handful of campaigns through the command path so development
    /// environments start with classifier-shaped data.
    pub fn seed_demo_data(&self) {
        let demos = [
            (
                "Spring Win-Back",
                "win back inactive customers with a spring offer via email and sms",
            ),
            ("VIP Double Points", "reward vip members with double points on slack"),
            ("Review Recovery", "follow up with customers who left a bad review"),
            ("Birthday Surprise", "send birthday discounts this month"),
            ("Grand Opening Blast", "announce the grand opening to everyone"),
        ];
        for (name, command) in demos {
            self.create_campaign(
                CreateCampaignRequest::Command {
                    name: name.to_string(),
                    command: command.to_string(),
                },
                "seed",
            );
        }
        info!(count = demos.len(), "Seeded demo campaigns");
    }
}

impl Default for AutomationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command_request(name: &str, command: &str) -> CreateCampaignRequest {
        CreateCampaignRequest::Command {
            name: name.to_string(),
            command: command.to_string(),
        }
    }

    #[test]
    fn test_create_from_command_runs_classifier() {
        let store = AutomationStore::new();
        let campaign = store.create_campaign(
            command_request("Q3 Win-Back", "win back lapsed customers via sms"),
            "admin",
        );
        assert_eq!(campaign.campaign_type, CampaignType::WinBack);
        assert_eq!(campaign.campaign_label, "Win-Back");
        assert_eq!(campaign.audience_description, "Inactive customers (90+ days)");
        assert_eq!(campaign.channels, vec![Channel::Email, Channel::Sms]);
        assert_eq!(campaign.status, CampaignStatus::Draft);
        assert_eq!(campaign.command.as_deref(), Some("win back lapsed customers via sms"));
    }

    #[test]
    fn test_create_manual_derives_flags_from_type() {
        let store = AutomationStore::new();
        let campaign = store.create_campaign(
            CreateCampaignRequest::Manual {
                name: "Members Only".to_string(),
                campaign_type: CampaignType::Loyalty,
                audience_description: "Loyalty Program Members".to_string(),
                channels: vec![Channel::Email, Channel::Slack],
                timing: Some("Ongoing (Always Active)".to_string()),
            },
            "admin",
        );
        assert!(campaign.is_event_based);
        assert!(!campaign.is_custom_type);
        assert_eq!(campaign.campaign_label, "Loyalty");
        assert!(campaign.command.is_none());
    }

    #[test]
    fn test_create_manual_defaults_to_email() {
        let store = AutomationStore::new();
        let campaign = store.create_campaign(
            CreateCampaignRequest::Manual {
                name: "Bare".to_string(),
                campaign_type: CampaignType::Promotional,
                audience_description: "All Customers".to_string(),
                channels: Vec::new(),
                timing: None,
            },
            "admin",
        );
        assert_eq!(campaign.channels, vec![Channel::Email]);
        assert!(!campaign.is_event_based);
    }

    #[test]
    fn test_create_manual_custom_type_sets_flag() {
        let store = AutomationStore::new();
        let campaign = store.create_campaign(
            CreateCampaignRequest::Manual {
                name: "Oddball".to_string(),
                campaign_type: CampaignType::Custom,
                audience_description: "target customers".to_string(),
                channels: Vec::new(),
                timing: None,
            },
            "admin",
        );
        assert!(campaign.is_custom_type);
    }

    #[test]
    fn test_lifecycle_pause_and_activate() {
        let store = AutomationStore::new();
        let campaign = store.create_campaign(command_request("Lifecycle", "vip rewards"), "admin");

        let paused = store.pause_campaign(campaign.id, "admin").unwrap();
        assert_eq!(paused.status, CampaignStatus::Paused);

        let active = store.activate_campaign(campaign.id, "admin").unwrap();
        assert_eq!(active.status, CampaignStatus::Active);
    }

    #[test]
    fn test_update_and_delete() {
        let store = AutomationStore::new();
        let campaign = store.create_campaign(command_request("Before", "birthday offers"), "admin");

        let updated = store
            .update_campaign(
                campaign.id,
                UpdateCampaignRequest {
                    name: Some("After".to_string()),
                    audience_description: None,
                    channels: Some(vec![Channel::Email, Channel::Sms]),
                    timing: Some("Send Immediately".to_string()),
                },
                "admin",
            )
            .unwrap();
        assert_eq!(updated.name, "After");
        assert_eq!(updated.channels, vec![Channel::Email, Channel::Sms]);
        // Untouched fields survive the partial update.
        assert_eq!(updated.audience_description, "Customers with birthdays this month");

        assert!(store.delete_campaign(campaign.id, "admin"));
        assert!(store.get_campaign(campaign.id).is_none());
        assert!(!store.delete_campaign(campaign.id, "admin"));
    }

    #[test]
    fn test_list_is_newest_first() {
        let store = AutomationStore::new();
        store.create_campaign(command_request("One", "welcome new customers"), "admin");
        store.create_campaign(command_request("Two", "loyalty points"), "admin");
        let listed = store.list_campaigns();
        assert_eq!(listed.len(), 2);
        assert!(listed[0].created_at >= listed[1].created_at);
    }

    #[test]
    fn test_audit_log_records_mutations() {
        let store = AutomationStore::new();
        let campaign = store.create_campaign(command_request("Audited", "conquest push"), "admin");
        store.pause_campaign(campaign.id, "admin");
        store.delete_campaign(campaign.id, "admin");

        let log = store.get_audit_log();
        assert_eq!(log.len(), 3);
        let actions: Vec<AuditAction> = log.iter().map(|e| e.action).collect();
        assert!(actions.contains(&AuditAction::Create));
        assert!(actions.contains(&AuditAction::Pause));
        assert!(actions.contains(&AuditAction::Delete));
        assert!(log.iter().all(|e| e.resource_type == "campaign"));
    }

    #[test]
    fn test_seed_demo_data() {
        let store = AutomationStore::new();
        store.seed_demo_data();
        let campaigns = store.list_campaigns();
        assert_eq!(campaigns.len(), 5);
        // The seed commands exercise the classifier, not hand-filled fields.
        assert!(campaigns.iter().any(|c| c.campaign_type == CampaignType::WinBack));
        assert!(campaigns.iter().any(|c| c.is_event_based));
        assert!(campaigns.iter().any(|c| c.is_custom_type));
    }
}

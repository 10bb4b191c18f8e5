//! Axum REST handlers for the automation API.

use crate::models::*;
use crate::store::AutomationStore;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use promo_command::{
    audience_options, parse_campaign_command, timing_options, validate_channels,
    CampaignTypeDefinition, ChannelValidationResult, CAMPAIGN_TYPES,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

/// Shared automation state.
#[derive(Clone)]
pub struct AutomationState {
    pub store: Arc<AutomationStore>,
}

// ─── Command Parsing ───────────────────────────────────────────────────────

/// POST /api/v1/commands/preview — classify a free-text command and return
/// the descriptor together with the option lists the form needs.
pub async fn preview_command(Json(req): Json<CommandRequest>) -> Json<CommandPreview> {
    let parsed = parse_campaign_command(&req.command);
    metrics::counter!("automation.commands.previewed").increment(1);
    Json(CommandPreview {
        timing_options: timing_options(parsed.is_event_based).to_vec(),
        audience_options: audience_options(parsed.is_event_based).to_vec(),
        parsed,
    })
}

/// POST /api/v1/channels/validate — partition a requested channel list into
/// known and unknown identifiers.
pub async fn validate_channel_list(
    Json(req): Json<ValidateChannelsRequest>,
) -> Json<ChannelValidationResult> {
    Json(validate_channels(&req.channels))
}

// ─── Form Options ──────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct OptionsQuery {
    #[serde(default)]
    pub event_based: bool,
}

pub async fn list_timing_options(Query(q): Query<OptionsQuery>) -> Json<Vec<&'static str>> {
    Json(timing_options(q.event_based).to_vec())
}

pub async fn list_audience_options(Query(q): Query<OptionsQuery>) -> Json<Vec<&'static str>> {
    Json(audience_options(q.event_based).to_vec())
}

pub async fn list_campaign_types() -> Json<&'static [CampaignTypeDefinition]> {
    Json(CAMPAIGN_TYPES)
}

// ─── Campaigns ─────────────────────────────────────────────────────────────

pub async fn list_campaigns(State(state): State<AutomationState>) -> Json<Vec<Campaign>> {
    Json(state.store.list_campaigns())
}

pub async fn get_campaign(
    State(state): State<AutomationState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Campaign>, StatusCode> {
    state
        .store
        .get_campaign(id)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

pub async fn create_campaign(
    State(state): State<AutomationState>,
    Json(req): Json<CreateCampaignRequest>,
) -> (StatusCode, Json<Campaign>) {
    let campaign = state.store.create_campaign(req, "admin");
    metrics::counter!("automation.campaigns.created").increment(1);
    (StatusCode::CREATED, Json(campaign))
}

pub async fn update_campaign(
    State(state): State<AutomationState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateCampaignRequest>,
) -> Result<Json<Campaign>, StatusCode> {
    state
        .store
        .update_campaign(id, req, "admin")
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

pub async fn delete_campaign(
    State(state): State<AutomationState>,
    Path(id): Path<Uuid>,
) -> StatusCode {
    if state.store.delete_campaign(id, "admin") {
        metrics::counter!("automation.campaigns.deleted").increment(1);
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

pub async fn pause_campaign(
    State(state): State<AutomationState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Campaign>, StatusCode> {
    state
        .store
        .pause_campaign(id, "admin")
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

pub async fn activate_campaign(
    State(state): State<AutomationState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Campaign>, StatusCode> {
    state
        .store
        .activate_campaign(id, "admin")
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

// ─── Audit Log ─────────────────────────────────────────────────────────────

pub async fn audit_log(State(state): State<AutomationState>) -> Json<Vec<AuditLogEntry>> {
    Json(state.store.get_audit_log())
}

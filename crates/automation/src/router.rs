//! Automation API router — mounts all automation endpoints under /api/v1.

use crate::handlers::{self, AutomationState};
use crate::store::AutomationStore;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

/// Build the automation router over an existing store.
/// Returns a Router that should be merged into the main app.
pub fn automation_router(store: Arc<AutomationStore>) -> Router {
    let state = AutomationState { store };

    Router::new()
        // Command parsing
        .route("/api/v1/commands/preview", post(handlers::preview_command))
        .route("/api/v1/channels/validate", post(handlers::validate_channel_list))
        // Form options
        .route("/api/v1/options/timing", get(handlers::list_timing_options))
        .route("/api/v1/options/audiences", get(handlers::list_audience_options))
        .route("/api/v1/campaign-types", get(handlers::list_campaign_types))
        // Campaigns
        .route("/api/v1/campaigns", get(handlers::list_campaigns).post(handlers::create_campaign))
        .route("/api/v1/campaigns/:id", get(handlers::get_campaign).put(handlers::update_campaign).delete(handlers::delete_campaign))
        .route("/api/v1/campaigns/:id/pause", post(handlers::pause_campaign))
        .route("/api/v1/campaigns/:id/activate", post(handlers::activate_campaign))
        // Audit log
        .route("/api/v1/audit-log", get(handlers::audit_log))
        .with_state(state)
}

//! PromoPilot — marketing automation campaign service.
//!
//! Main entry point that wires configuration, the campaign store, and the
//! HTTP server.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use clap::Parser;
use promo_automation::{automation_router, AutomationStore};
use promo_core::AppConfig;
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "promopilot")]
#[command(about = "Marketing automation campaign service")]
#[command(version)]
struct Cli {
    /// Bind host (overrides config)
    #[arg(long, env = "PROMOPILOT__API__HOST")]
    host: Option<String>,

    /// HTTP port (overrides config)
    #[arg(long, env = "PROMOPILOT__API__HTTP_PORT")]
    http_port: Option<u16>,

    /// Metrics port (overrides config)
    #[arg(long, env = "PROMOPILOT__METRICS__PORT")]
    metrics_port: Option<u16>,

    /// Start with an empty store (skip demo data seeding)
    #[arg(long, default_value_t = false)]
    no_seed: bool,
}

/// Shared state for the operational endpoints.
#[derive(Clone)]
struct OpsState {
    start_time: Instant,
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    uptime_secs: u64,
}

/// GET /health — Health check endpoint.
async fn health_check(State(state): State<OpsState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

/// GET /ready — Readiness probe for Kubernetes.
async fn readiness() -> StatusCode {
    StatusCode::OK
}

/// GET /live — Liveness probe for Kubernetes.
async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// Start the metrics exporter on a separate port.
fn start_metrics(config: &AppConfig) -> anyhow::Result<()> {
    let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
    let handle = builder
        .with_http_listener(SocketAddr::new(
            config.api.host.parse()?,
            config.metrics.port,
        ))
        .install_recorder()?;

    info!(port = config.metrics.port, "Metrics exporter started");

    // Keep the handle alive
    std::mem::forget(handle);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "promopilot=info,tower_http=info".into()),
        )
        .json()
        .init();

    let cli = Cli::parse();

    info!("PromoPilot starting up");

    // Load configuration
    let mut config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    // Apply CLI overrides
    if let Some(host) = cli.host {
        config.api.host = host;
    }
    if let Some(port) = cli.http_port {
        config.api.http_port = port;
    }
    if let Some(port) = cli.metrics_port {
        config.metrics.port = port;
    }

    info!(
        host = %config.api.host,
        http_port = config.api.http_port,
        metrics_port = config.metrics.port,
        "Configuration loaded"
    );

    // Initialize the campaign store
    let store = Arc::new(AutomationStore::new());
    if config.store.seed_demo_data && !cli.no_seed {
        store.seed_demo_data();
    }

    // Start metrics exporter
    if let Err(e) = start_metrics(&config) {
        error!(error = %e, "Failed to start metrics exporter");
    }

    let ops = OpsState {
        start_time: Instant::now(),
    };

    let app = Router::new()
        // Operational endpoints
        .route("/health", get(health_check))
        .route("/ready", get(readiness))
        .route("/live", get(liveness))
        .with_state(ops)
        // Automation API
        .merge(automation_router(store))
        // Middleware
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::new(config.api.host.parse()?, config.api.http_port);

    info!(addr = %addr, "Starting HTTP server");

    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("PromoPilot is ready to serve traffic");

    axum::serve(listener, app).await?;

    Ok(())
}

//! Campaign automation backend — campaigns, command preview, audit log.
//!
//! Provides REST API endpoints for the automation dashboard UI.
//! Data stored in DashMap (development); swap to PostgreSQL for production.

pub mod handlers;
pub mod models;
pub mod router;
pub mod store;

pub use handlers::AutomationState;
pub use router::automation_router;
pub use store::AutomationStore;

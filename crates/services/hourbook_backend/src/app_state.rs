// --- File: crates/services/hourbook_backend/src/app_state.rs ---
use hourbook_config::AppConfig;
use hourbook_db::ReservationStore;
use std::sync::Arc;

/// Application state shared across all routes.
///
/// The store is held behind the trait so tests (and embedded setups) can
/// inject the in-memory implementation in place of the SQL one.
#[derive(Clone)]
pub struct AppState {
    /// The application configuration loaded at startup.
    pub config: Arc<AppConfig>,
    /// The reservation store, constructed once and shared by every call.
    pub store: Arc<dyn ReservationStore>,
}

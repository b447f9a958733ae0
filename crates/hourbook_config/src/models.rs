// --- File: crates/hourbook_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Database Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    pub url: String, // e.g., DATABASE_URL loaded via APP_DATABASE__URL
}

// --- Booking Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BookingConfig {
    /// How many whole ISO weeks ahead the default listing window covers.
    #[serde(default = "default_scan_weeks")]
    pub scan_weeks: u32,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            scan_weeks: default_scan_weeks(),
        }
    }
}

fn default_scan_weeks() -> u32 {
    5
}

// --- Top-level application configuration ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: Option<DatabaseConfig>,
    #[serde(default)]
    pub booking: BookingConfig,
}

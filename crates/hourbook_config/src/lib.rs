// --- File: crates/hourbook_config/src/lib.rs ---
//! Typed configuration for hourbook.
//!
//! Configuration is layered: built-in defaults, then an optional
//! `config/default.*` file, then `APP_`-prefixed environment variables
//! with `__` as the nesting separator (e.g. `APP_DATABASE__URL`,
//! `APP_SERVER__PORT`). A `.env` file is honored if present.

pub mod models;

use config::{Config, ConfigError, Environment, File};
use std::sync::Once;

pub use models::{AppConfig, BookingConfig, DatabaseConfig, ServerConfig};

static DOTENV: Once = Once::new();

/// Load `.env` into the process environment, once.
pub fn ensure_dotenv_loaded() {
    DOTENV.call_once(|| {
        dotenv::dotenv().ok();
    });
}

/// Load the application configuration.
///
/// # Errors
///
/// Returns a [`ConfigError`] when the file or environment layers cannot
/// be read or do not deserialize into [`AppConfig`].
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let builder = Config::builder()
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 8080)?
        .add_source(File::with_name("config/default").required(false))
        .add_source(Environment::with_prefix("APP").separator("__"));

    builder.build()?.try_deserialize()
}

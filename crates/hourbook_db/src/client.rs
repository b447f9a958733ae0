//! Pooled database client.
//!
//! Database-agnostic over SQLx's `Any` driver; the concrete backend is
//! selected by feature flag (sqlite by default, postgres and mysql
//! available) and by the URL scheme at runtime.

use crate::error::DbError;
use hourbook_config::AppConfig;
use sqlx::pool::PoolOptions;
use sqlx::Pool;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};

/// Database client holding the shared connection pool.
///
/// Constructed once at startup and cloned into whatever needs it; clones
/// share the pool.
#[derive(Debug, Clone)]
pub struct DbClient {
    pool: Pool<sqlx::Any>,
}

impl DbClient {
    /// Create a client from the application configuration.
    ///
    /// # Errors
    ///
    /// Fails when the database section is missing, the URL is empty, or
    /// the pool cannot connect.
    pub async fn new(config: &Arc<AppConfig>) -> Result<Self, DbError> {
        let db_config = config
            .database
            .as_ref()
            .ok_or_else(|| DbError::ConfigError("database configuration is missing".to_string()))?;

        Self::from_url(&db_config.url).await
    }

    /// Create a client from a database URL.
    pub async fn from_url(db_url: &str) -> Result<Self, DbError> {
        if db_url.is_empty() {
            return Err(DbError::UrlError("database URL is empty".to_string()));
        }

        let pool = Self::create_pool(db_url).await?;
        Ok(Self { pool })
    }

    async fn create_pool(db_url: &str) -> Result<Pool<sqlx::Any>, DbError> {
        debug!("creating database pool for {}", db_url);

        // Register the compiled-in drivers with the Any driver.
        sqlx::any::install_default_drivers();

        let pool_options = PoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .idle_timeout(Duration::from_secs(600));

        // SQLite will not create the database file through the Any
        // driver, so bootstrap the file and its directory here.
        #[cfg(feature = "sqlite")]
        if db_url.starts_with("sqlite:") {
            let db_path = db_url
                .strip_prefix("sqlite://")
                .or_else(|| db_url.strip_prefix("sqlite:"))
                .unwrap_or(db_url);

            if !db_path.is_empty() && !db_path.contains(":memory:") {
                if let Some(dir) = std::path::Path::new(db_path).parent() {
                    if !dir.exists() {
                        std::fs::create_dir_all(dir).map_err(|e| {
                            error!("failed to create directory for SQLite database: {}", e);
                            DbError::PoolError(format!("failed to create directory: {}", e))
                        })?;
                    }
                }
                if !std::path::Path::new(db_path).exists() {
                    debug!("creating empty SQLite database file: {}", db_path);
                    std::fs::File::create(db_path).map_err(|e| {
                        error!("failed to create SQLite database file: {}", e);
                        DbError::PoolError(format!("failed to create database file: {}", e))
                    })?;
                }
            }
        }

        let pool = pool_options
            .connect_with(sqlx::any::AnyConnectOptions::from_str(db_url)?)
            .await
            .map_err(|e| {
                error!("failed to create database pool: {}", e);
                DbError::PoolError(e.to_string())
            })?;

        info!("database pool created");
        Ok(pool)
    }

    /// The shared connection pool.
    pub fn pool(&self) -> &Pool<sqlx::Any> {
        &self.pool
    }

    /// Execute a statement that returns no rows.
    pub async fn execute(&self, query: &str) -> Result<u64, DbError> {
        sqlx::query(query)
            .execute(&self.pool)
            .await
            .map(|r| r.rows_affected())
            .map_err(|e| DbError::QueryError(e.to_string()))
    }

    /// Check backing-store reachability with a trivial query.
    pub async fn is_healthy(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

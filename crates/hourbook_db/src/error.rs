//! Error types for reservation storage

use hourbook_common::HttpStatusCode;
use thiserror::Error;

/// Errors surfaced by [`crate::ReservationStore`] operations.
///
/// All variants are recoverable by the caller; the store never retries
/// internally and never leaves partial state behind.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A reservation already exists for the requested slot, regardless
    /// of which user owns it.
    #[error("slot is already reserved")]
    AlreadyExists,

    /// Delete precondition failed: either no reservation exists for the
    /// slot, or it is owned by a different user. The two cases are
    /// intentionally indistinguishable so a non-owner cannot probe who
    /// holds a slot.
    #[error("reservation does not exist or is owned by another user")]
    NotOwnerOrMissing,

    /// Rejected before any storage call: empty reservation field or
    /// missing scan bound.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Failure in the backing store unrelated to the conditional checks.
    #[error("storage error: {0}")]
    Storage(String),
}

impl HttpStatusCode for StoreError {
    fn status_code(&self) -> u16 {
        match self {
            StoreError::AlreadyExists => 409,
            StoreError::NotOwnerOrMissing => 409,
            StoreError::InvalidArgument(_) => 400,
            StoreError::Storage(_) => 500,
        }
    }
}

/// Errors that can occur when setting up or probing the database client.
#[derive(Debug, Error)]
pub enum DbError {
    /// Error from SQLx
    #[error("Database error: {0}")]
    SqlxError(#[from] sqlx::Error),

    /// Error with the database configuration
    #[error("Database configuration error: {0}")]
    ConfigError(String),

    /// Error with database URL parsing
    #[error("Database URL error: {0}")]
    UrlError(String),

    /// Error with database pool creation
    #[error("Database pool error: {0}")]
    PoolError(String),

    /// Error with database query
    #[error("Database query error: {0}")]
    QueryError(String),
}

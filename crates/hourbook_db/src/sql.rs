//! SQL implementation of the reservation store.
//!
//! Both conditional writes map onto single statements, so atomicity
//! comes from the database itself rather than from any check-then-act
//! sequence in here:
//!
//! - create: plain `INSERT`; the primary key on `time_from` is the
//!   insert-if-absent condition, and a unique violation is the losing
//!   side of a race.
//! - delete: `DELETE … WHERE time_from = $1 AND user_name = $2`; zero
//!   rows affected means the slot was absent or owned by someone else.

use crate::client::DbClient;
use crate::error::{DbError, StoreError};
use crate::reservation::Reservation;
use crate::store::{validate_reservation, validate_scan_bounds, ReservationStore};
use hourbook_common::BoxFuture;
use sqlx::Row;
use tracing::{debug, error};

/// Reservation store backed by a SQL database.
#[derive(Debug, Clone)]
pub struct SqlReservationStore {
    db_client: DbClient,
}

impl SqlReservationStore {
    /// Wrap a database client.
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }

    /// Create the reservations table if it does not exist.
    ///
    /// The layout is the persisted record contract: `time_from` as the
    /// primary key, `user_name` as the owner. Nothing else.
    pub async fn init_schema(&self) -> Result<(), DbError> {
        debug!("initializing reservations schema");

        let query = r#"
            CREATE TABLE IF NOT EXISTS reservations (
                time_from TEXT PRIMARY KEY,
                user_name TEXT NOT NULL
            )
        "#;

        self.db_client.execute(query).await?;
        Ok(())
    }
}

impl ReservationStore for SqlReservationStore {
    fn create(&self, reservation: Reservation) -> BoxFuture<'_, (), StoreError> {
        Box::pin(async move {
            validate_reservation(&reservation)?;
            debug!(slot = reservation.start_time(), "creating reservation");

            let query = r#"
                INSERT INTO reservations (time_from, user_name)
                VALUES ($1, $2)
            "#;

            sqlx::query(query)
                .bind(reservation.start_time())
                .bind(reservation.user_name())
                .execute(self.db_client.pool())
                .await
                .map_err(|e| match &e {
                    sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                        StoreError::AlreadyExists
                    }
                    _ => {
                        error!("failed to insert reservation: {}", e);
                        StoreError::Storage(e.to_string())
                    }
                })?;

            Ok(())
        })
    }

    fn delete(&self, reservation: Reservation) -> BoxFuture<'_, (), StoreError> {
        Box::pin(async move {
            validate_reservation(&reservation)?;
            debug!(slot = reservation.start_time(), "deleting reservation");

            let query = r#"
                DELETE FROM reservations
                WHERE time_from = $1 AND user_name = $2
            "#;

            let result = sqlx::query(query)
                .bind(reservation.start_time())
                .bind(reservation.user_name())
                .execute(self.db_client.pool())
                .await
                .map_err(|e| {
                    error!("failed to delete reservation: {}", e);
                    StoreError::Storage(e.to_string())
                })?;

            if result.rows_affected() == 0 {
                return Err(StoreError::NotOwnerOrMissing);
            }
            Ok(())
        })
    }

    fn scan(
        &self,
        start_time: &str,
        end_time: &str,
    ) -> BoxFuture<'_, Vec<Reservation>, StoreError> {
        let start_time = start_time.to_owned();
        let end_time = end_time.to_owned();

        Box::pin(async move {
            validate_scan_bounds(&start_time, &end_time)?;
            debug!(start = %start_time, end = %end_time, "scanning reservations");

            let query = r#"
                SELECT time_from, user_name
                FROM reservations
                WHERE time_from >= $1 AND time_from < $2
            "#;

            let rows = sqlx::query(query)
                .bind(&start_time)
                .bind(&end_time)
                .fetch_all(self.db_client.pool())
                .await
                .map_err(|e| {
                    error!("failed to scan reservations: {}", e);
                    StoreError::Storage(e.to_string())
                })?;

            rows.into_iter()
                .map(|row| {
                    let time_from: String = row
                        .try_get("time_from")
                        .map_err(|e| StoreError::Storage(e.to_string()))?;
                    let user_name: String = row
                        .try_get("user_name")
                        .map_err(|e| StoreError::Storage(e.to_string()))?;
                    Ok(Reservation::new(time_from, user_name))
                })
                .collect()
        })
    }

    fn ping(&self) -> BoxFuture<'_, (), StoreError> {
        Box::pin(async move {
            if self.db_client.is_healthy().await {
                Ok(())
            } else {
                Err(StoreError::Storage("database unreachable".into()))
            }
        })
    }
}

//! In-memory implementation of the reservation store.
//!
//! The substitutable backing used by handler tests and embedded setups.
//! One mutex held across each check-and-mutate stands in for the SQL
//! backend's conditional writes, giving the same per-key atomicity.

use crate::error::StoreError;
use crate::reservation::Reservation;
use crate::store::{validate_reservation, validate_scan_bounds, ReservationStore};
use hourbook_common::BoxFuture;
use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::Mutex;

/// Reservation store over a locked map from slot key to owner.
#[derive(Debug, Default)]
pub struct MemoryReservationStore {
    slots: Mutex<BTreeMap<String, String>>,
}

impl MemoryReservationStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, String>>, StoreError> {
        self.slots
            .lock()
            .map_err(|_| StoreError::Storage("reservation map lock poisoned".into()))
    }
}

impl ReservationStore for MemoryReservationStore {
    fn create(&self, reservation: Reservation) -> BoxFuture<'_, (), StoreError> {
        Box::pin(async move {
            validate_reservation(&reservation)?;

            let mut slots = self.lock()?;
            if slots.contains_key(reservation.start_time()) {
                return Err(StoreError::AlreadyExists);
            }
            slots.insert(
                reservation.start_time().to_owned(),
                reservation.user_name().to_owned(),
            );
            Ok(())
        })
    }

    fn delete(&self, reservation: Reservation) -> BoxFuture<'_, (), StoreError> {
        Box::pin(async move {
            validate_reservation(&reservation)?;

            let mut slots = self.lock()?;
            match slots.get(reservation.start_time()) {
                Some(owner) if owner == reservation.user_name() => {
                    slots.remove(reservation.start_time());
                    Ok(())
                }
                // Absent slot and wrong owner are the same outcome.
                _ => Err(StoreError::NotOwnerOrMissing),
            }
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

            if start_time >= end_time {
                return Ok(Vec::new());
            }

            let slots = self.lock()?;
            let reservations = slots
                .range::<str, _>((
                    Bound::Included(start_time.as_str()),
                    Bound::Excluded(end_time.as_str()),
                ))
                .map(|(time_from, user_name)| Reservation::new(time_from, user_name))
                .collect();
            Ok(reservations)
        })
    }

    fn ping(&self) -> BoxFuture<'_, (), StoreError> {
        Box::pin(async move {
            self.lock()?;
            Ok(())
        })
    }
}

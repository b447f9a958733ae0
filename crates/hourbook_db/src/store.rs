//! The reservation store trait.
//!
//! Handlers hold the store as `Arc<dyn ReservationStore>`, so the trait
//! returns boxed futures to stay object-safe. Implementations must make
//! each conditional write atomic with respect to all other concurrent
//! operations on the same slot key; the trait itself adds no locking.

use crate::error::StoreError;
use crate::reservation::Reservation;
use hourbook_common::BoxFuture;

/// Concurrency-safe persistence of reservations keyed by slot start time.
pub trait ReservationStore: Send + Sync {
    /// Insert a reservation only if its slot is currently unreserved.
    ///
    /// The existence check and the insert are a single atomic step: of
    /// two concurrent creates for the same slot, exactly one succeeds
    /// and the other observes [`StoreError::AlreadyExists`]. No record
    /// is written on any failure path.
    fn create(&self, reservation: Reservation) -> BoxFuture<'_, (), StoreError>;

    /// Remove a reservation only if the slot is reserved *and* its
    /// stored owner matches `reservation.user_name()`.
    ///
    /// An absent slot and a wrong owner both yield
    /// [`StoreError::NotOwnerOrMissing`].
    fn delete(&self, reservation: Reservation) -> BoxFuture<'_, (), StoreError>;

    /// All reservations whose slot key lies in `[start_time, end_time)`,
    /// in no guaranteed order.
    ///
    /// A failure mid-scan surfaces as [`StoreError::Storage`], never as
    /// a silently truncated list.
    fn scan(
        &self,
        start_time: &str,
        end_time: &str,
    ) -> BoxFuture<'_, Vec<Reservation>, StoreError>;

    /// Probe backing-store reachability.
    fn ping(&self) -> BoxFuture<'_, (), StoreError>;
}

/// Shared precondition: a reservation with an empty field never reaches
/// the backing store.
pub(crate) fn validate_reservation(reservation: &Reservation) -> Result<(), StoreError> {
    if reservation.start_time().is_empty() {
        return Err(StoreError::InvalidArgument(
            "reservation start time is empty".into(),
        ));
    }
    if reservation.user_name().is_empty() {
        return Err(StoreError::InvalidArgument(
            "reservation user name is empty".into(),
        ));
    }
    Ok(())
}

/// Shared precondition: both scan bounds must be present.
pub(crate) fn validate_scan_bounds(start_time: &str, end_time: &str) -> Result<(), StoreError> {
    if start_time.is_empty() || end_time.is_empty() {
        return Err(StoreError::InvalidArgument("missing scan bound".into()));
    }
    Ok(())
}

//! Reservation storage for hourbook
//!
//! This crate holds the core of the booking service: the [`Reservation`]
//! value type and the [`ReservationStore`] trait with its SQL-backed and
//! in-memory implementations.
//!
//! The one invariant worth the crate's existence: a slot (a whole-hour
//! start timestamp) is owned by at most one user, and a reservation can
//! only be removed by its owner. Both are enforced by atomic conditional
//! writes in the backing store — never by check-then-act in application
//! code.

pub mod client;
pub mod error;
pub mod memory;
pub mod reservation;
pub mod sql;
pub mod store;

pub use client::DbClient;
pub use error::{DbError, StoreError};
pub use memory::MemoryReservationStore;
pub use reservation::{Reservation, TIME_FORMAT};
pub use sql::SqlReservationStore;
pub use store::ReservationStore;

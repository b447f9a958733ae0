//! The reservation value type.

use serde::{Deserialize, Serialize};

/// Canonical timestamp format for slot keys: `YYYY-MM-DDTHH:mm:ss`.
///
/// Fixed-width and zero-padded, so lexical order over keys is
/// chronological order. Slot keys always have minutes and seconds
/// zeroed.
pub const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A single one-hour slot booking.
///
/// Immutable once constructed; an update is modeled as delete + create.
/// The constructor performs no validation — normalizing the timestamp to
/// a whole hour and rejecting malformed input is the caller's job, done
/// before a `Reservation` ever exists.
///
/// Serialized with the wire field names `startTime` and `userName`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    start_time: String,
    user_name: String,
}

impl Reservation {
    /// Build a reservation from a pre-normalized slot timestamp and the
    /// owning user's name.
    pub fn new(start_time: impl Into<String>, user_name: impl Into<String>) -> Self {
        Self {
            start_time: start_time.into(),
            user_name: user_name.into(),
        }
    }

    /// The slot's start timestamp, the unique key.
    pub fn start_time(&self) -> &str {
        &self.start_time
    }

    /// The owning user's name.
    pub fn user_name(&self) -> &str {
        &self.user_name
    }
}

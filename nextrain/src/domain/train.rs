//! Departure records.

use std::fmt;

/// A train departing the queried station.
///
/// Built only by the decoder from a complete `objStationData` element, and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Train {
    origin: String,
    destination: String,
    expected_departure_time: String,
    due_in: u32,
}

impl Train {
    /// Create a train record.
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        expected_departure_time: impl Into<String>,
        due_in: u32,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            expected_departure_time: expected_departure_time.into(),
            due_in,
        }
    }

    /// Station the service started from.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Station the service terminates at.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Expected departure from the queried station, as sent ("HH:MM").
    pub fn expected_departure_time(&self) -> &str {
        &self.expected_departure_time
    }

    /// Minutes until the train is due at the queried station.
    pub fn due_in(&self) -> u32 {
        self.due_in
    }
}

impl fmt::Display for Train {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} – due in {} minutes", self.destination, self.due_in)
    }
}

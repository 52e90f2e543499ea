//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from I/O and CSV errors, which live with the graph loader.

use super::AirportCode;

/// A row that could not be turned into a [`FlightRecord`](super::FlightRecord).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// A required column is absent or empty
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A column is present but its value cannot be parsed
    #[error("malformed {field} {value:?}: {reason}")]
    Malformed {
        field: &'static str,
        value: String,
        reason: &'static str,
    },
}

impl RecordError {
    pub(crate) fn malformed(field: &'static str, value: &str, reason: &'static str) -> Self {
        RecordError::Malformed {
            field,
            value: value.to_string(),
            reason,
        }
    }
}

/// Errors assembling legs into itineraries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Consecutive legs don't share an airport
    #[error("legs do not connect: arrives at {0}, next departs from {1}")]
    LegsNotConnected(AirportCode, AirportCode),
}

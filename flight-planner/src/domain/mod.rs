//! Domain types for the flight planner.
//!
//! This module contains the core domain model types that represent
//! validated scheduling data. Records are validated when parsed, so code
//! that receives these types can trust their contents.

mod airport;
mod error;
mod flight;
mod itinerary;
mod timestamp;

pub use airport::AirportCode;
pub use error::{DomainError, RecordError};
pub use flight::{FlightRecord, RawRecord};
pub use itinerary::{Candidate, Itinerary, Leg};
pub use timestamp::{TIMESTAMP_FORMAT, TimestampError, format_timestamp, parse_timestamp};

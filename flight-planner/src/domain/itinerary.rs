//! Leg, candidate and itinerary types.
//!
//! A `Leg` is a flight record placed in context (which airport it leaves
//! from and which it reaches). The search produces `Candidate`s, and the
//! ranker turns each one into a priced `Itinerary`.

use std::sync::Arc;

use chrono::{Duration, NaiveDateTime};

use super::{AirportCode, DomainError, FlightRecord};

/// One flight of an itinerary.
///
/// Uses `Arc<FlightRecord>` so candidates share the graph's records
/// instead of copying them.
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    origin: AirportCode,
    destination: AirportCode,
    record: Arc<FlightRecord>,
}

impl Leg {
    /// Creates a leg flying `record` from `origin` to `destination`.
    pub fn new(origin: AirportCode, destination: AirportCode, record: Arc<FlightRecord>) -> Self {
        Self {
            origin,
            destination,
            record,
        }
    }

    /// Returns the departure airport.
    pub fn origin(&self) -> &AirportCode {
        &self.origin
    }

    /// Returns the arrival airport.
    pub fn destination(&self) -> &AirportCode {
        &self.destination
    }

    /// Returns the underlying schedule record.
    pub fn record(&self) -> &FlightRecord {
        &self.record
    }

    /// Returns the flight number.
    pub fn flight_no(&self) -> &str {
        self.record.flight_no()
    }

    /// Returns the scheduled departure.
    pub fn departure_time(&self) -> NaiveDateTime {
        self.record.departure()
    }

    /// Returns the scheduled arrival.
    pub fn arrival_time(&self) -> NaiveDateTime {
        self.record.arrival()
    }
}

/// A search hit before pricing: one leg, or two legs with a layover.
#[derive(Debug, Clone, PartialEq)]
pub enum Candidate {
    /// A single leg from origin to destination
    Direct(Leg),
    /// Two legs sharing an intermediate airport
    Connecting(Leg, Leg),
}

impl Candidate {
    /// Pair two legs into a connecting candidate.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `first` does not land where `second` takes off.
    pub fn connecting(first: Leg, second: Leg) -> Result<Self, DomainError> {
        if first.destination() != second.origin() {
            return Err(DomainError::LegsNotConnected(
                first.destination().clone(),
                second.origin().clone(),
            ));
        }
        Ok(Candidate::Connecting(first, second))
    }

    /// Returns the legs in flying order.
    pub fn legs(&self) -> Vec<&Leg> {
        match self {
            Candidate::Direct(leg) => vec![leg],
            Candidate::Connecting(first, second) => vec![first, second],
        }
    }

    /// Returns the legs in flying order, by value.
    pub fn into_legs(self) -> Vec<Leg> {
        match self {
            Candidate::Direct(leg) => vec![leg],
            Candidate::Connecting(first, second) => vec![first, second],
        }
    }

    /// Returns true for a single-leg candidate.
    pub fn is_direct(&self) -> bool {
        matches!(self, Candidate::Direct(_))
    }

    /// Returns the bag allowance of the whole trip.
    ///
    /// A direct flight uses its leg's allowance; a connection is limited by
    /// its stricter leg.
    pub fn bags_allowed(&self) -> u32 {
        match self {
            Candidate::Direct(leg) => leg.record().bags_allowed(),
            Candidate::Connecting(first, second) => first
                .record()
                .bags_allowed()
                .min(second.record().bags_allowed()),
        }
    }

    /// Returns the time spent at the intermediate airport, if any.
    pub fn layover(&self) -> Option<Duration> {
        match self {
            Candidate::Direct(_) => None,
            Candidate::Connecting(first, second) => Some(
                second
                    .departure_time()
                    .signed_duration_since(first.arrival_time()),
            ),
        }
    }

    /// Returns the wall-clock span from first takeoff to last landing.
    pub fn travel_time(&self) -> Duration {
        match self {
            Candidate::Direct(leg) => leg.arrival_time().signed_duration_since(leg.departure_time()),
            Candidate::Connecting(first, second) => second
                .arrival_time()
                .signed_duration_since(first.departure_time()),
        }
    }
}

/// A priced trip from origin to destination.
///
/// # Invariants
///
/// - One or two legs
/// - Consecutive legs connect (destination of one = origin of next)
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    legs: Vec<Leg>,
    bags_allowed: u32,
    bags_requested: u32,
    total_price: f64,
    travel_time: Duration,
}

impl Itinerary {
    /// Builds an itinerary from a candidate and its computed price.
    pub fn from_candidate(candidate: Candidate, bags_requested: u32, total_price: f64) -> Self {
        let bags_allowed = candidate.bags_allowed();
        let travel_time = candidate.travel_time();
        Self {
            legs: candidate.into_legs(),
            bags_allowed,
            bags_requested,
            total_price,
            travel_time,
        }
    }

    /// Returns the legs in flying order.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Returns the departure airport of the first leg.
    pub fn origin(&self) -> &AirportCode {
        // Safe: a candidate always has at least one leg
        self.legs[0].origin()
    }

    /// Returns the arrival airport of the last leg.
    pub fn destination(&self) -> &AirportCode {
        self.legs[self.legs.len() - 1].destination()
    }

    /// Returns the effective bag allowance.
    pub fn bags_allowed(&self) -> u32 {
        self.bags_allowed
    }

    /// Returns the bag count the traveller asked for.
    pub fn bags_requested(&self) -> u32 {
        self.bags_requested
    }

    /// Returns the total price including bag fees.
    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    /// Returns the elapsed time from first departure to last arrival.
    pub fn travel_time(&self) -> Duration {
        self.travel_time
    }

    /// Returns the number of changes (0 for direct).
    pub fn change_count(&self) -> usize {
        self.legs.len() - 1
    }

    /// Returns true if this is a direct flight.
    pub fn is_direct(&self) -> bool {
        self.legs.len() == 1
    }
}

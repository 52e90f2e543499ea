//! Flight record types.
//!
//! A `RawRecord` is one schedule row exactly as read, every column a string.
//! A `FlightRecord` is the validated leg data parsed from it.

use chrono::{Duration, NaiveDateTime};
use serde::Deserialize;

use super::{AirportCode, RecordError, parse_timestamp};

/// One schedule row, keyed by column name.
///
/// Every field is optional so that a missing column surfaces as
/// [`RecordError::MissingField`] instead of a deserializer error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawRecord {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub flight_no: Option<String>,
    pub departure: Option<String>,
    pub arrival: Option<String>,
    pub base_price: Option<String>,
    pub bag_price: Option<String>,
    pub bags_allowed: Option<String>,
}

impl RawRecord {
    /// Returns the row's `(origin, destination)` airport codes, unmodified.
    pub fn endpoints(&self) -> Result<(AirportCode, AirportCode), RecordError> {
        let origin = required("origin", &self.origin)?;
        let destination = required("destination", &self.destination)?;
        Ok((AirportCode::new(origin), AirportCode::new(destination)))
    }
}

fn required<'a>(field: &'static str, value: &'a Option<String>) -> Result<&'a str, RecordError> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(RecordError::MissingField(field)),
    }
}

fn parse_count(field: &'static str, value: &Option<String>) -> Result<u32, RecordError> {
    let raw = required(field, value)?;
    raw.parse::<u32>()
        .map_err(|_| RecordError::malformed(field, raw, "not a non-negative integer"))
}

/// A single scheduled leg.
///
/// Records carry no airport codes: those belong to the route graph edge
/// the record sits on. Fields are private so a record cannot change once
/// it is in the graph.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightRecord {
    flight_no: String,
    departure: NaiveDateTime,
    arrival: NaiveDateTime,
    base_price: f64,
    bag_price: u32,
    bags_allowed: u32,
}

impl FlightRecord {
    /// Construct a record from already-typed values.
    pub fn new(
        flight_no: impl Into<String>,
        departure: NaiveDateTime,
        arrival: NaiveDateTime,
        base_price: f64,
        bag_price: u32,
        bags_allowed: u32,
    ) -> Self {
        Self {
            flight_no: flight_no.into(),
            departure,
            arrival,
            base_price,
            bag_price,
            bags_allowed,
        }
    }

    /// Parse a record from a raw row.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any of `flight_no`, `departure`, `arrival`,
    /// `base_price`, `bag_price` or `bags_allowed` is missing, or if:
    /// - `base_price` is not a finite, non-negative decimal
    /// - `bag_price` or `bags_allowed` is not a non-negative integer
    /// - `departure` or `arrival` is not `YYYY-MM-DDTHH:MM:SS`
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_planner::domain::{FlightRecord, RawRecord};
    ///
    /// let row = RawRecord {
    ///     flight_no: Some("ZH214".into()),
    ///     departure: Some("2021-09-01T14:35:00".into()),
    ///     arrival: Some("2021-09-01T19:40:00".into()),
    ///     base_price: Some("258.0".into()),
    ///     bag_price: Some("12".into()),
    ///     bags_allowed: Some("1".into()),
    ///     ..RawRecord::default()
    /// };
    ///
    /// let record = FlightRecord::parse(&row).unwrap();
    /// assert_eq!(record.flight_no(), "ZH214");
    /// assert_eq!(record.bags_allowed(), 1);
    /// ```
    pub fn parse(row: &RawRecord) -> Result<Self, RecordError> {
        let flight_no = required("flight_no", &row.flight_no)?;

        let departure_raw = required("departure", &row.departure)?;
        let departure = parse_timestamp(departure_raw)
            .map_err(|e| RecordError::malformed("departure", departure_raw, e.reason()))?;

        let arrival_raw = required("arrival", &row.arrival)?;
        let arrival = parse_timestamp(arrival_raw)
            .map_err(|e| RecordError::malformed("arrival", arrival_raw, e.reason()))?;

        let base_raw = required("base_price", &row.base_price)?;
        let base_price = base_raw
            .parse::<f64>()
            .map_err(|_| RecordError::malformed("base_price", base_raw, "not a decimal"))?;
        if !base_price.is_finite() || base_price < 0.0 {
            return Err(RecordError::malformed(
                "base_price",
                base_raw,
                "must be a finite, non-negative decimal",
            ));
        }

        let bag_price = parse_count("bag_price", &row.bag_price)?;
        let bags_allowed = parse_count("bags_allowed", &row.bags_allowed)?;

        Ok(Self::new(
            flight_no,
            departure,
            arrival,
            base_price,
            bag_price,
            bags_allowed,
        ))
    }

    /// Returns the flight number.
    pub fn flight_no(&self) -> &str {
        &self.flight_no
    }

    /// Returns the scheduled departure.
    pub fn departure(&self) -> NaiveDateTime {
        self.departure
    }

    /// Returns the scheduled arrival.
    pub fn arrival(&self) -> NaiveDateTime {
        self.arrival
    }

    /// Returns the fare before bag fees.
    pub fn base_price(&self) -> f64 {
        self.base_price
    }

    /// Returns the fee per checked bag.
    pub fn bag_price(&self) -> u32 {
        self.bag_price
    }

    /// Returns the maximum number of bags this leg carries.
    pub fn bags_allowed(&self) -> u32 {
        self.bags_allowed
    }

    /// Returns the time in the air.
    pub fn duration(&self) -> Duration {
        self.arrival.signed_duration_since(self.departure)
    }
}

//! Serializable views of search results.
//!
//! These types shape itineraries for JSON output. Times are rendered as
//! `YYYY-MM-DDTHH:MM:SS` and travel time as `H:MM:SS`, with a day count in
//! front once a trip reaches 24 hours.

use chrono::Duration;
use serde::Serialize;

use crate::domain::{AirportCode, Itinerary, Leg, format_timestamp};

/// One flight within an itinerary.
#[derive(Debug, Serialize)]
pub struct FlightView {
    pub flight_no: String,
    pub origin: AirportCode,
    pub destination: AirportCode,
    pub departure: String,
    pub arrival: String,
    pub base_price: f64,
    pub bag_price: f64,
    pub bags_allowed: u32,
}

impl From<&Leg> for FlightView {
    fn from(leg: &Leg) -> Self {
        let record = leg.record();
        Self {
            flight_no: record.flight_no().to_string(),
            origin: leg.origin().clone(),
            destination: leg.destination().clone(),
            departure: format_timestamp(record.departure()),
            arrival: format_timestamp(record.arrival()),
            base_price: record.base_price(),
            bag_price: f64::from(record.bag_price()),
            bags_allowed: record.bags_allowed(),
        }
    }
}

/// A priced itinerary.
#[derive(Debug, Serialize)]
pub struct ItineraryView {
    /// Flights in flying order
    pub flights: Vec<FlightView>,
    pub bags_allowed: u32,
    /// Bags the traveller asked for
    pub bags_count: u32,
    pub destination: AirportCode,
    pub origin: AirportCode,
    pub total_price: f64,
    /// Door-to-door time, layover included
    pub travel_time: String,
}

impl From<&Itinerary> for ItineraryView {
    fn from(itinerary: &Itinerary) -> Self {
        Self {
            flights: itinerary.legs().iter().map(FlightView::from).collect(),
            bags_allowed: itinerary.bags_allowed(),
            bags_count: itinerary.bags_requested(),
            destination: itinerary.destination().clone(),
            origin: itinerary.origin().clone(),
            total_price: itinerary.total_price(),
            travel_time: format_travel_time(itinerary.travel_time()),
        }
    }
}

/// Outbound and return results of a `--return` search, kept apart.
#[derive(Debug, Serialize)]
pub struct RoundTripView {
    pub outbound: Vec<ItineraryView>,
    #[serde(rename = "return")]
    pub inbound: Vec<ItineraryView>,
}

impl RoundTripView {
    /// Builds the view from two independent result lists.
    pub fn new(outbound: &[Itinerary], inbound: &[Itinerary]) -> Self {
        Self {
            outbound: views(outbound),
            inbound: views(inbound),
        }
    }
}

/// Converts ranked itineraries into views, preserving order.
pub fn views(itineraries: &[Itinerary]) -> Vec<ItineraryView> {
    itineraries.iter().map(ItineraryView::from).collect()
}

/// Render itineraries as a JSON array.
pub fn render_json(itineraries: &[Itinerary], pretty: bool) -> serde_json::Result<String> {
    to_json(&views(itineraries), pretty)
}

/// Render any view as JSON.
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

/// One-line console summary of a search.
pub fn summary_line(origin: &AirportCode, destination: &AirportCode, found: usize) -> String {
    if found == 0 {
        format!("Nothing found, please recheck your {origin} and/or {destination}.")
    } else {
        format!("{found} itineraries found {origin} to {destination}")
    }
}

/// Format a duration as `H:MM:SS`, or `N day(s), H:MM:SS` past 24 hours.
///
/// Negative durations borrow whole days, so -1 hour renders as
/// `-1 day, 23:00:00`.
///
/// # Examples
///
/// ```
/// use chrono::Duration;
/// use flight_planner::output::format_travel_time;
///
/// assert_eq!(format_travel_time(Duration::minutes(305)), "5:05:00");
/// assert_eq!(format_travel_time(Duration::hours(26)), "1 day, 2:00:00");
/// ```
pub fn format_travel_time(duration: Duration) -> String {
    const SECS_PER_DAY: i64 = 24 * 60 * 60;

    let total = duration.num_seconds();
    let days = total.div_euclid(SECS_PER_DAY);
    let rest = total.rem_euclid(SECS_PER_DAY);
    let clock = format!("{}:{:02}:{:02}", rest / 3600, (rest % 3600) / 60, rest % 60);

    match days {
        0 => clock,
        1 | -1 => format!("{days} day, {clock}"),
        _ => format!("{days} days, {clock}"),
    }
}

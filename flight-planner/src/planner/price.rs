//! Itinerary pricing.

use crate::domain::{Candidate, FlightRecord};

/// Price a candidate itinerary, bag fees included.
///
/// - Direct: `base_price + bags × bag_price`. Callers pass a bag count
///   already capped at the leg's allowance (see [`rank`](super::rank)).
/// - Connecting: every leg charges `base_price + bag_price × bags_allowed`,
///   whatever the traveller asked for.
///
/// The connecting formula charges each leg's full allowance. That matches
/// the fares this tool has always reported; changing it changes every
/// connecting price.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use flight_planner::domain::{AirportCode, Candidate, FlightRecord, Leg, parse_timestamp};
/// use flight_planner::planner::price;
///
/// let record = FlightRecord::new(
///     "ZH214",
///     parse_timestamp("2021-09-01T08:00:00").unwrap(),
///     parse_timestamp("2021-09-01T10:00:00").unwrap(),
///     100.0,
///     20,
///     2,
/// );
/// let leg = Leg::new(AirportCode::new("WIW"), AirportCode::new("ECV"), Arc::new(record));
///
/// assert_eq!(price(&Candidate::Direct(leg), 1), 120.0);
/// ```
pub fn price(candidate: &Candidate, bags: u32) -> f64 {
    match candidate {
        Candidate::Direct(leg) => {
            let record = leg.record();
            record.base_price() + f64::from(bags) * f64::from(record.bag_price())
        }
        Candidate::Connecting(first, second) => {
            full_allowance_price(first.record()) + full_allowance_price(second.record())
        }
    }
}

fn full_allowance_price(record: &FlightRecord) -> f64 {
    record.base_price() + f64::from(record.bag_price()) * f64::from(record.bags_allowed())
}

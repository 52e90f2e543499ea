//! Direct and one-stop connection search.
//!
//! Finds every leg from the origin straight to the destination, plus every
//! pair of legs through a single intermediate airport whose layover fits
//! the configured window. Longer chains are never considered.

use tracing::{debug, trace, warn};

use crate::domain::{AirportCode, Candidate, Itinerary};
use crate::graph::RouteGraph;

use super::config::SearchConfig;
use super::rank::rank;

/// Error from itinerary search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Layover window is unusable
    #[error("invalid search configuration: {0}")]
    InvalidConfig(String),

    /// Origin and destination are the same airport
    #[error("origin and destination are both {0}")]
    SameAirport(AirportCode),
}

/// Request for an itinerary search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Departure airport.
    pub origin: AirportCode,

    /// Arrival airport.
    pub destination: AirportCode,

    /// Number of checked bags the traveller brings.
    pub bags: u32,
}

impl SearchQuery {
    /// Create a new search query.
    pub fn new(origin: AirportCode, destination: AirportCode, bags: u32) -> Self {
        Self {
            origin,
            destination,
            bags,
        }
    }

    /// Returns the same query flown the other way.
    pub fn reversed(&self) -> Self {
        Self::new(self.destination.clone(), self.origin.clone(), self.bags)
    }

    /// Validate the search query.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.origin == self.destination {
            return Err(SearchError::SameAirport(self.origin.clone()));
        }
        Ok(())
    }
}

/// Unpriced search hits, in adjacency-list order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Candidates {
    /// Single legs from origin to destination.
    pub direct: Vec<Candidate>,

    /// Two-leg connections through one intermediate airport.
    pub connecting: Vec<Candidate>,
}

impl Candidates {
    /// Returns the total number of candidates.
    pub fn len(&self) -> usize {
        self.direct.len() + self.connecting.len()
    }

    /// Returns true if nothing was found.
    pub fn is_empty(&self) -> bool {
        self.direct.is_empty() && self.connecting.is_empty()
    }
}

/// Enumerate direct and one-stop candidates from `origin` to `destination`.
///
/// Unknown airports are not an error: they simply yield no candidates.
/// The layover bounds in `config` are both inclusive.
pub fn search(
    graph: &RouteGraph,
    origin: &AirportCode,
    destination: &AirportCode,
    config: &SearchConfig,
) -> Candidates {
    let mut found = Candidates::default();

    if !graph.contains(origin.as_str()) || !graph.contains(destination.as_str()) {
        debug!(%origin, %destination, "airport not in schedule");
        return found;
    }

    for edge in graph.departures(origin.as_str()) {
        let first = edge.leg_from(origin);

        if &edge.destination == destination {
            trace!(flight = first.flight_no(), "direct");
            found.direct.push(Candidate::Direct(first));
            continue;
        }

        let via = &edge.destination;
        for onward in graph.departures(via.as_str()) {
            if &onward.destination != destination {
                continue;
            }

            let layover = onward
                .record
                .departure()
                .signed_duration_since(first.arrival_time());
            if !config.allows_layover(layover) {
                trace!(
                    first = first.flight_no(),
                    second = onward.record.flight_no(),
                    layover_mins = layover.num_minutes(),
                    "layover outside window"
                );
                continue;
            }

            match Candidate::connecting(first.clone(), onward.leg_from(via)) {
                Ok(candidate) => found.connecting.push(candidate),
                Err(e) => warn!(error = %e, "skipping connection"),
            }
        }
    }

    debug!(
        %origin,
        %destination,
        direct = found.direct.len(),
        connecting = found.connecting.len(),
        "search complete"
    );
    found
}

/// Itinerary planner over a fixed route graph.
pub struct Planner<'a> {
    graph: &'a RouteGraph,
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(graph: &'a RouteGraph, config: &'a SearchConfig) -> Self {
        Self { graph, config }
    }

    /// Search, price and rank itineraries for a query, cheapest first.
    pub fn plan(&self, query: &SearchQuery) -> Result<Vec<Itinerary>, SearchError> {
        self.config.validate()?;
        query.validate()?;

        let candidates = search(self.graph, &query.origin, &query.destination, self.config);
        Ok(rank(candidates, query.bags))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::test_support::{priced_row, row};
    use chrono::Duration;

    fn airport(s: &str) -> AirportCode {
        AirportCode::new(s)
    }

    fn flight_numbers(candidates: &[Candidate]) -> Vec<Vec<&str>> {
        candidates
            .iter()
            .map(|c| c.legs().iter().map(|l| l.flight_no()).collect())
            .collect()
    }

    fn run(graph: &RouteGraph, from: &str, to: &str) -> Candidates {
        search(graph, &airport(from), &airport(to), &SearchConfig::default())
    }

    /// WIW -> ECV lands at 10:00; the onward ECV -> RFZ departs `dep`.
    fn layover_graph(dep: &str) -> RouteGraph {
        RouteGraph::build(vec![
            row("WIW", "ECV", "IN", "2021-09-01T08:00:00", "2021-09-01T10:00:00"),
            row("ECV", "RFZ", "OUT", dep, "2021-09-01T23:00:00"),
        ])
        .unwrap()
    }

    #[test]
    fn direct_found() {
        let graph = RouteGraph::build(vec![
            row("WIW", "ECV", "D1", "2021-09-01T08:00:00", "2021-09-01T10:00:00"),
            row("WIW", "RFZ", "X1", "2021-09-01T08:00:00", "2021-09-01T10:00:00"),
            row("WIW", "ECV", "D2", "2021-09-01T12:00:00", "2021-09-01T14:00:00"),
        ])
        .unwrap();

        let found = run(&graph, "WIW", "ECV");

        assert_eq!(flight_numbers(&found.direct), vec![vec!["D1"], vec!["D2"]]);
        assert!(found.connecting.is_empty());
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn connection_legs_carry_context() {
        let found = run(&layover_graph("2021-09-01T12:00:00"), "WIW", "RFZ");

        assert!(found.direct.is_empty());
        assert_eq!(found.connecting.len(), 1);

        let legs = found.connecting[0].legs();
        assert_eq!(legs[0].origin(), &airport("WIW"));
        assert_eq!(legs[0].destination(), &airport("ECV"));
        assert_eq!(legs[1].origin(), &airport("ECV"));
        assert_eq!(legs[1].destination(), &airport("RFZ"));
        assert_eq!(found.connecting[0].layover(), Some(Duration::hours(2)));
    }

    #[test]
    fn layover_minimum_is_inclusive() {
        assert_eq!(run(&layover_graph("2021-09-01T11:00:00"), "WIW", "RFZ").connecting.len(), 1);
        assert!(run(&layover_graph("2021-09-01T10:59:00"), "WIW", "RFZ").is_empty());
        assert!(run(&layover_graph("2021-09-01T10:59:59"), "WIW", "RFZ").is_empty());
    }

    #[test]
    fn layover_maximum_is_inclusive() {
        assert_eq!(run(&layover_graph("2021-09-01T16:00:00"), "WIW", "RFZ").connecting.len(), 1);
        assert!(run(&layover_graph("2021-09-01T16:01:00"), "WIW", "RFZ").is_empty());
    }

    #[test]
    fn departure_before_arrival_is_not_a_connection() {
        assert!(run(&layover_graph("2021-09-01T09:30:00"), "WIW", "RFZ").is_empty());
    }

    #[test]
    fn custom_window() {
        let graph = layover_graph("2021-09-01T10:30:00");
        let tight = SearchConfig::new(30, 45);

        let found = search(&graph, &airport("WIW"), &airport("RFZ"), &tight);
        assert_eq!(found.connecting.len(), 1);
    }

    #[test]
    fn out_of_range_window_finds_no_connections() {
        let graph = layover_graph("2021-09-01T12:00:00");
        let huge = SearchConfig::new(60, 200_000_000_000_000);

        let found = search(&graph, &airport("WIW"), &airport("RFZ"), &huge);
        assert!(found.is_empty());
    }

    #[test]
    fn three_leg_chain_not_found() {
        let graph = RouteGraph::build(vec![
            row("AAA", "BBB", "AB", "2021-09-01T06:00:00", "2021-09-01T07:00:00"),
            row("BBB", "CCC", "BC", "2021-09-01T08:00:00", "2021-09-01T09:00:00"),
            row("CCC", "DDD", "CD", "2021-09-01T10:00:00", "2021-09-01T11:00:00"),
        ])
        .unwrap();

        let found = run(&graph, "AAA", "DDD");
        assert!(found.direct.is_empty());
        assert!(found.connecting.is_empty());
    }

    #[test]
    fn unknown_airports_yield_nothing() {
        let graph = layover_graph("2021-09-01T12:00:00");

        assert!(run(&graph, "WIW", "XXX").is_empty());
        assert!(run(&graph, "XXX", "RFZ").is_empty());
        assert!(run(&graph, "wiw", "RFZ").is_empty());
    }

    #[test]
    fn connections_follow_adjacency_order() {
        let graph = RouteGraph::build(vec![
            row("WIW", "NRX", "W-N", "2021-09-01T06:00:00", "2021-09-01T07:00:00"),
            row("WIW", "ECV", "W-E", "2021-09-01T06:00:00", "2021-09-01T07:00:00"),
            row("ECV", "RFZ", "E-R1", "2021-09-01T09:00:00", "2021-09-01T10:00:00"),
            row("NRX", "RFZ", "N-R", "2021-09-01T09:00:00", "2021-09-01T10:00:00"),
            row("ECV", "RFZ", "E-R2", "2021-09-01T08:00:00", "2021-09-01T09:00:00"),
        ])
        .unwrap();

        let found = run(&graph, "WIW", "RFZ");

        assert_eq!(
            flight_numbers(&found.connecting),
            vec![vec!["W-N", "N-R"], vec!["W-E", "E-R1"], vec!["W-E", "E-R2"]]
        );
    }

    #[test]
    fn search_leaves_graph_untouched() {
        let graph = layover_graph("2021-09-01T12:00:00");
        let before = graph.edge_count();

        let _ = run(&graph, "WIW", "RFZ");
        let _ = run(&graph, "ECV", "RFZ");

        assert_eq!(graph.edge_count(), before);
        assert_eq!(graph.departures("WIW")[0].destination, airport("ECV"));
    }

    #[test]
    fn query_validation() {
        let same = SearchQuery::new(airport("WIW"), airport("WIW"), 0);
        assert_eq!(same.validate(), Err(SearchError::SameAirport(airport("WIW"))));

        let ok = SearchQuery::new(airport("WIW"), airport("ECV"), 2);
        assert!(ok.validate().is_ok());

        let back = ok.reversed();
        assert_eq!(back.origin, airport("ECV"));
        assert_eq!(back.destination, airport("WIW"));
        assert_eq!(back.bags, 2);
    }

    #[test]
    fn planner_ranks_by_price() {
        let graph = RouteGraph::build(vec![
            priced_row("WIW", "RFZ", "DIRECT", "2021-09-01T08:00:00", "2021-09-01T12:00:00", "400", "20", "2"),
            priced_row("WIW", "ECV", "LEG1", "2021-09-01T08:00:00", "2021-09-01T10:00:00", "100", "10", "1"),
            priced_row("ECV", "RFZ", "LEG2", "2021-09-01T11:30:00", "2021-09-01T13:00:00", "150", "5", "2"),
        ])
        .unwrap();
        let config = SearchConfig::default();
        let planner = Planner::new(&graph, &config);

        let itineraries = planner
            .plan(&SearchQuery::new(airport("WIW"), airport("RFZ"), 1))
            .unwrap();

        assert_eq!(itineraries.len(), 2);
        assert_eq!(itineraries[0].total_price(), 270.0);
        assert_eq!(itineraries[0].travel_time(), Duration::hours(5));
        assert_eq!(itineraries[1].total_price(), 420.0);
        assert!(itineraries[1].is_direct());
    }

    #[test]
    fn planner_rejects_bad_input() {
        let graph = RouteGraph::default();

        let inverted = SearchConfig::new(90, 30);
        let planner = Planner::new(&graph, &inverted);
        assert!(matches!(
            planner.plan(&SearchQuery::new(airport("WIW"), airport("ECV"), 0)),
            Err(SearchError::InvalidConfig(_))
        ));

        let huge = SearchConfig::new(60, 200_000_000_000_000);
        let planner = Planner::new(&graph, &huge);
        assert!(matches!(
            planner.plan(&SearchQuery::new(airport("WIW"), airport("ECV"), 0)),
            Err(SearchError::InvalidConfig(_))
        ));

        let config = SearchConfig::default();
        let planner = Planner::new(&graph, &config);
        assert!(matches!(
            planner.plan(&SearchQuery::new(airport("WIW"), airport("WIW"), 0)),
            Err(SearchError::SameAirport(_))
        ));
        assert_eq!(
            planner.plan(&SearchQuery::new(airport("WIW"), airport("ECV"), 0)),
            Ok(Vec::new())
        );
    }
}

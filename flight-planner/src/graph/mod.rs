//! Route graph built from schedule rows.
//!
//! The graph maps every airport code to the legs departing it, in input
//! order. It is built once and never mutated afterwards, so one graph can
//! serve any number of searches, including from several threads.

mod csv_source;
mod error;

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::domain::{AirportCode, FlightRecord, Leg, RawRecord, RecordError};

pub use csv_source::read_rows;
pub use error::GraphError;

/// A directed edge: one scheduled leg towards `destination`.
#[derive(Debug, Clone)]
pub struct Edge {
    /// Airport this leg lands at
    pub destination: AirportCode,
    /// Schedule data for the leg
    pub record: Arc<FlightRecord>,
}

impl Edge {
    /// Returns this edge as a leg departing `origin`.
    pub fn leg_from(&self, origin: &AirportCode) -> Leg {
        Leg::new(origin.clone(), self.destination.clone(), self.record.clone())
    }
}

/// Adjacency list of scheduled legs keyed by departure airport.
///
/// # Invariants
///
/// - Both endpoints of every edge are keys, even airports with no departures
/// - Each key's edges are in input order
/// - Parallel edges between the same pair are kept
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    adjacency: HashMap<AirportCode, Vec<Edge>>,
}

impl RouteGraph {
    /// Builds the graph from schedule rows.
    ///
    /// Rows are taken in order. Construction stops at the first bad row:
    /// no partial graph is returned.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Record`] with the 1-based row number if a row
    /// is missing a field or has an unparseable value.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_planner::domain::RawRecord;
    /// use flight_planner::graph::RouteGraph;
    ///
    /// let row = RawRecord {
    ///     origin: Some("WIW".into()),
    ///     destination: Some("ECV".into()),
    ///     flight_no: Some("ZH214".into()),
    ///     departure: Some("2021-09-01T14:35:00".into()),
    ///     arrival: Some("2021-09-01T19:40:00".into()),
    ///     base_price: Some("258.0".into()),
    ///     bag_price: Some("12".into()),
    ///     bags_allowed: Some("1".into()),
    /// };
    ///
    /// let graph = RouteGraph::build(vec![row]).unwrap();
    /// assert!(graph.contains("WIW"));
    /// assert!(graph.contains("ECV"));
    /// assert_eq!(graph.departures("ECV").len(), 0);
    /// ```
    pub fn build<I>(rows: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = RawRecord>,
    {
        let mut adjacency: HashMap<AirportCode, Vec<Edge>> = HashMap::new();

        for (idx, row) in rows.into_iter().enumerate() {
            let with_row = |source: RecordError| GraphError::Record {
                row: idx + 1,
                source,
            };

            let (origin, destination) = row.endpoints().map_err(with_row)?;
            let record = FlightRecord::parse(&row).map_err(with_row)?;

            adjacency.entry(destination.clone()).or_default();
            adjacency.entry(origin).or_default().push(Edge {
                destination,
                record: Arc::new(record),
            });
        }

        let graph = RouteGraph { adjacency };
        debug!(
            airports = graph.airport_count(),
            edges = graph.edge_count(),
            "built route graph"
        );
        Ok(graph)
    }

    /// Check if an airport appears anywhere in the schedule.
    pub fn contains(&self, code: &str) -> bool {
        self.adjacency.contains_key(code)
    }

    /// Get the legs departing an airport, in input order.
    ///
    /// Unknown airports have no departures.
    pub fn departures(&self, code: &str) -> &[Edge] {
        self.adjacency
            .get(code)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Returns every airport code, sorted.
    pub fn airports(&self) -> Vec<&AirportCode> {
        let mut airports: Vec<_> = self.adjacency.keys().collect();
        airports.sort();
        airports
    }

    /// Returns the number of distinct airports.
    pub fn airport_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of scheduled legs.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Returns true if the schedule had no rows.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

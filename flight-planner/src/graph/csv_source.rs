//! CSV schedule loading.
//!
//! Columns are matched by header name, so their order in the file does not
//! matter. Every value is read as a string; typed parsing happens in
//! [`FlightRecord::parse`](crate::domain::FlightRecord::parse).

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::info;

use super::{GraphError, RouteGraph};
use crate::domain::RawRecord;

/// Read every row of a headed CSV schedule.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<RawRecord>, GraphError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .from_reader(reader);

    let rows = reader
        .deserialize::<RawRecord>()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

impl RouteGraph {
    /// Load a graph from any CSV source.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, GraphError> {
        let rows = read_rows(reader)?;
        let row_count = rows.len();
        let graph = RouteGraph::build(rows)?;
        info!(
            rows = row_count,
            airports = graph.airport_count(),
            "loaded flight schedule"
        );
        Ok(graph)
    }

    /// Load a graph from a CSV file on disk.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, GraphError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| GraphError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_csv_reader(file)
    }
}

//! Itinerary planner.
//!
//! This module implements the core question the tool answers:
//! "what are all the ways to fly from A to B, cheapest first?"
//!
//! The search looks at direct legs and at every two-leg connection whose
//! layover fits the configured window. Candidates are then priced and
//! ranked by total price.

mod config;
mod price;
mod rank;
mod search;

pub use config::{DEFAULT_MAX_LAYOVER_MINS, DEFAULT_MIN_LAYOVER_MINS, SearchConfig};
pub use price::price;
pub use rank::rank;
pub use search::{Candidates, Planner, SearchError, SearchQuery, search};

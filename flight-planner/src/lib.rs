//! Flight itinerary planner.
//!
//! Loads a schedule of flight legs and answers: "how can I fly from here
//! to there, direct or with one change, and what does it cost with my bags?"

pub mod domain;
pub mod graph;
pub mod output;
pub mod planner;

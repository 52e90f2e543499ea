//! Itinerary ranking for search results.

use tracing::trace;

use crate::domain::{Candidate, Itinerary};

use super::price::price;
use super::search::Candidates;

/// Price every candidate and order them cheapest first.
///
/// Direct itineraries come before connecting ones prior to sorting, and
/// the sort is stable, so itineraries with equal prices keep that order.
/// Nothing is dropped or truncated.
///
/// A direct itinerary is priced with the requested bag count capped at its
/// leg's allowance.
pub fn rank(candidates: Candidates, bags_requested: u32) -> Vec<Itinerary> {
    let Candidates { direct, connecting } = candidates;

    let mut itineraries: Vec<Itinerary> = direct
        .into_iter()
        .chain(connecting)
        .map(|candidate| {
            let bags = chargeable_bags(&candidate, bags_requested);
            let total_price = price(&candidate, bags);
            Itinerary::from_candidate(candidate, bags_requested, total_price)
        })
        .collect();

    // `sort_by` is stable
    itineraries.sort_by(|a, b| a.total_price().total_cmp(&b.total_price()));

    trace!(count = itineraries.len(), "ranked itineraries");
    itineraries
}

fn chargeable_bags(candidate: &Candidate, bags_requested: u32) -> u32 {
    bags_requested.min(candidate.bags_allowed())
}

pub mod fuzzy;
pub mod geo;
pub mod time;

pub use geo::*;
pub use time::*;

use rayon::prelude::*;
use std::cmp::Ordering;

/// Minimum score for a search hit.
pub const SEARCH_THRESHOLD: f64 = 0.6;

pub trait Identifiable {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn normalized_name(&self) -> &str;
    /// Secondary text matched by [`search`], if any.
    fn normalized_address(&self) -> Option<&str> {
        None
    }
}

/// Generic fuzzy search function built for multithreaded searching.
/// Results are ordered by score; equal scores keep the haystack order.
/// An empty needle returns the whole haystack.
pub fn search<'a, T>(needle: &str, haystack: &'a [T]) -> Vec<&'a T>
where
    T: Send + Sync + Identifiable,
{
    let normalized_needle = fuzzy::normalize(needle.trim());
    if normalized_needle.is_empty() {
        return haystack.iter().collect();
    }

    let mut results: Vec<(&T, f64)> = haystack
        .par_iter()
        .filter_map(|hay| {
            let name_score = fuzzy::score(&normalized_needle, hay.normalized_name());
            let address_score = hay
                .normalized_address()
                .map(|address| fuzzy::score(&normalized_needle, address))
                .unwrap_or(0.0);
            let score = name_score.max(address_score);
            if score >= SEARCH_THRESHOLD {
                Some((hay, score))
            } else {
                None
            }
        })
        .collect();

    results.par_sort_by(|(_, a): &(_, f64), (_, b): &(_, f64)| {
        b.partial_cmp(a).unwrap_or(Ordering::Equal)
    });
    results.into_iter().map(|(entity, _)| entity).collect()
}

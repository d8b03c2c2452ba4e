//! Nearest-neighbor constructive heuristic.
//!
//! Builds a closed tour greedily: starting from the chosen city, always
//! visit the nearest unvisited city, then return to the start.
//!
//! # Complexity
//!
//! O(n²) edge-weight evaluations where n = number of cities. Every
//! remaining city is scanned at every step; there is no spatial index.
//!
//! # Reference
//!
//! This is the simplest constructive heuristic for the TSP. Solution
//! quality is typically well above optimal, but it provides a fast,
//! deterministic baseline.

use crate::distance::edge_weight;
use crate::error::{Error, Result};
use crate::models::{City, Tour};

/// Builds a closed tour over `cities` using the nearest-neighbor heuristic.
///
/// The city matching `start_id` seeds the tour; from there the nearest
/// unvisited city (by truncated edge weight) is appended until all cities
/// are visited, and the loop is closed back to the start. Equal-weight
/// candidates are resolved in favor of the first one encountered in
/// collection order, so tie-breaking is reproducible for a given input
/// ordering.
///
/// The collection is consumed by the call; callers needing the original
/// data must keep their own copy.
///
/// # Errors
///
/// Fails with [`Error::EmptyCities`] when `cities` is empty, and with
/// [`Error::StartCityNotFound`] when no city carries `start_id`. No tour is
/// produced in either case.
///
/// # Examples
///
/// ```
/// use nn_tour::constructive::build_tour;
/// use nn_tour::models::City;
///
/// let cities = vec![
///     City::new(1, 0.0, 0.0),
///     City::new(2, 3.0, 0.0),
///     City::new(3, 3.0, 4.0),
/// ];
/// let tour = build_tour(cities, 1).unwrap();
/// assert_eq!(tour.city_ids(), vec![1, 2, 3, 1]);
/// assert_eq!(tour.weights(), &[0, 3, 4, 5]);
/// assert_eq!(tour.total_distance(), 12);
/// ```
pub fn build_tour(cities: Vec<City>, start_id: usize) -> Result<Tour> {
    if cities.is_empty() {
        return Err(Error::EmptyCities);
    }

    let start_idx = cities
        .iter()
        .position(|c| c.id() == start_id)
        .ok_or(Error::StartCityNotFound(start_id))?;

    let n = cities.len();
    let mut visited = vec![false; n];
    visited[start_idx] = true;

    let start = cities[start_idx];
    let mut tour = Tour::new(start);
    let mut current = start;

    loop {
        // Scan unvisited cities in collection order. Strict `<` keeps the
        // first-encountered candidate on equal weights.
        let mut best: Option<(usize, u64)> = None;
        for (i, city) in cities.iter().enumerate() {
            if visited[i] {
                continue;
            }
            let w = edge_weight(&current, city);
            if best.is_none() || w < best.expect("checked is_none").1 {
                best = Some((i, w));
            }
        }

        match best {
            Some((next_idx, weight)) => {
                visited[next_idx] = true;
                let next = cities[next_idx];
                log::debug!(
                    "visit {} -> {} weight={}",
                    current.id(),
                    next.id(),
                    weight
                );
                tour.push(next, weight);
                current = next;
            }
            None => break,
        }
    }

    // Close the loop back to the start
    let closing = edge_weight(&current, &start);
    tour.push(start, closing);

    log::info!(
        "nearest-neighbor tour: cities={} total_distance={}",
        n,
        tour.total_distance()
    );

    Ok(tour)
}

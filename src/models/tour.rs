//! Tour type.

use serde::Serialize;

use super::City;

/// A closed route visiting every city exactly once before returning to the
/// start.
///
/// `path` has length n+1 for n input cities: the start city appears both
/// first and last. `weights` runs parallel to `path`; `weights[0]` is always
/// 0 (no incoming edge to the start) and `weights[i]` is the edge weight
/// from `path[i-1]` to `path[i]`. `total_distance` is the sum of all
/// weights.
///
/// Tours are assembled by the builder and immutable once returned.
///
/// # Examples
///
/// ```
/// use nn_tour::constructive::build_tour;
/// use nn_tour::models::City;
///
/// let cities = vec![City::new(1, 0.0, 0.0), City::new(2, 3.0, 4.0)];
/// let tour = build_tour(cities, 1).unwrap();
/// assert_eq!(tour.city_ids(), vec![1, 2, 1]);
/// assert_eq!(tour.weights(), &[0, 5, 5]);
/// assert_eq!(tour.total_distance(), 10);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Tour {
    path: Vec<City>,
    weights: Vec<u64>,
    total_distance: u64,
}

impl Tour {
    /// Creates a tour seeded with its start city and a leading weight of 0.
    pub(crate) fn new(start: City) -> Self {
        Self {
            path: vec![start],
            weights: vec![0],
            total_distance: 0,
        }
    }

    /// Appends a city reached over an edge of the given weight.
    pub(crate) fn push(&mut self, city: City, weight: u64) {
        self.path.push(city);
        self.weights.push(weight);
        self.total_distance += weight;
    }

    /// The ordered path, start city first and last.
    pub fn path(&self) -> &[City] {
        &self.path
    }

    /// Edge weights parallel to [`path`](Self::path).
    pub fn weights(&self) -> &[u64] {
        &self.weights
    }

    /// Sum of all edge weights.
    pub fn total_distance(&self) -> u64 {
        self.total_distance
    }

    /// Number of path entries, including the closing return to the start.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Returns `true` if the tour holds no cities.
    ///
    /// Never true for a tour returned by the builder.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// City IDs in path order.
    pub fn city_ids(&self) -> Vec<usize> {
        self.path.iter().map(|c| c.id()).collect()
    }

    /// Iterates over `(from, to, weight)` for each traversed edge.
    pub fn edges(&self) -> impl Iterator<Item = (&City, &City, u64)> + '_ {
        self.path
            .windows(2)
            .zip(self.weights.iter().skip(1))
            .map(|(pair, &w)| (&pair[0], &pair[1], w))
    }
}

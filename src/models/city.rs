//! City type.

use serde::{Deserialize, Serialize};

/// A labeled 2D point in a tour construction problem.
///
/// Identity is the `id`; coordinates carry no identity. Cities are created
/// once (by the parser or by hand) and are read-only thereafter.
///
/// # Examples
///
/// ```
/// use nn_tour::models::City;
///
/// let c = City::new(1, 3.0, 4.0);
/// assert_eq!(c.id(), 1);
/// assert_eq!(c.x(), 3.0);
/// assert_eq!(c.y(), 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct City {
    id: usize,
    x: f64,
    y: f64,
}

impl City {
    /// Creates a new city.
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// Unique city ID within a run.
    pub fn id(&self) -> usize {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }
}

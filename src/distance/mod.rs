//! Distance computation.
//!
//! Provides the Euclidean metric and the truncated integral edge weight
//! used throughout tour construction.

mod metric;

pub use metric::{edge_weight, euclidean};

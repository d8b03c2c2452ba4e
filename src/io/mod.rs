//! Coordinate-file input.

mod tsplib;

pub use tsplib::{load_cities, parse_cities};

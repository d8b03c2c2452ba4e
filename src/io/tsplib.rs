//! TSPLIB-style coordinate file parsing.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::City;

/// Marker line preceding the coordinate records. Matched by substring, so
/// surrounding metadata on the same line is tolerated.
const COORD_SECTION_MARKER: &str = "NODE_COORD_SECTION";

/// Loads cities from a coordinate file.
///
/// Everything up to the line containing `NODE_COORD_SECTION` is skipped as
/// metadata; after it, each line holds one `<id> <x> <y>` record. Parsing
/// stops at end of file or at the first non-parseable line (such as an
/// `EOF` trailer), which is not an error.
///
/// # Errors
///
/// [`Error::ReadFile`] if the file is missing or unreadable, and
/// [`Error::MissingCoordSection`] if no marker line is present.
pub fn load_cities(path: impl AsRef<Path>) -> Result<Vec<City>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    parse_cities(BufReader::new(file))
}

/// Parses cities from any buffered reader.
///
/// Records are returned in input order, which is the order the tour builder
/// breaks equal-weight ties in.
///
/// # Examples
///
/// ```
/// use nn_tour::io::parse_cities;
///
/// let input = b"NAME: demo\nNODE_COORD_SECTION\n1 0.0 0.0\n2 3.0 4.0\n" as &[u8];
/// let cities = parse_cities(input).unwrap();
/// assert_eq!(cities.len(), 2);
/// assert_eq!(cities[0].id(), 1);
/// ```
pub fn parse_cities(reader: impl BufRead) -> Result<Vec<City>> {
    let mut lines = reader.lines();

    loop {
        match lines.next() {
            Some(line) => {
                if line?.contains(COORD_SECTION_MARKER) {
                    break;
                }
            }
            None => return Err(Error::MissingCoordSection),
        }
    }

    let mut cities = Vec::new();
    for line in lines {
        match parse_record(&line?) {
            Some(city) => cities.push(city),
            None => break,
        }
    }

    log::debug!("parsed {} city records", cities.len());
    Ok(cities)
}

fn parse_record(line: &str) -> Option<City> {
    let mut fields = line.split_whitespace();
    let id = fields.next()?.parse().ok()?;
    let x = fields.next()?.parse().ok()?;
    let y = fields.next()?.parse().ok()?;
    Some(City::new(id, x, y))
}

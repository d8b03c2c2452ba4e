//! Human-readable tour reports.

use std::io::{self, Write};

use crate::models::Tour;

/// Writes one line per traversed edge followed by the total distance.
///
/// The output shape is stable and consumed verbatim by downstream tooling:
///
/// ```text
/// EDGE 1 -> 2 | WEIGHT : 3
/// EDGE 2 -> 3 | WEIGHT : 4
/// EDGE 3 -> 1 | WEIGHT : 5
/// TOTAL DISTANCE: 12
/// ```
pub fn write_report<W: Write>(tour: &Tour, out: &mut W) -> io::Result<()> {
    for (from, to, weight) in tour.edges() {
        writeln!(out, "EDGE {} -> {} | WEIGHT : {}", from.id(), to.id(), weight)?;
    }
    writeln!(out, "TOTAL DISTANCE: {}", tour.total_distance())
}

/// Prints the report for `tour` to stdout.
pub fn print_report(tour: &Tour) -> io::Result<()> {
    let stdout = io::stdout();
    write_report(tour, &mut stdout.lock())
}

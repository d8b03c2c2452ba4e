//! Crate-wide error type.

use std::io;
use std::path::PathBuf;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("could not read file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("no NODE_COORD_SECTION found in input")]
    MissingCoordSection,
    #[error("city collection is empty")]
    EmptyCities,
    #[error("start city {0} not found")]
    StartCityNotFound(usize),
}

pub type Result<T> = std::result::Result<T, Error>;

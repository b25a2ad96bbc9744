//! Errors raised while building or loading maps.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to construct a [`Graph`](crate::Graph) or [`Grid`](crate::Grid).
#[derive(Error, Debug)]
pub enum MapError {
    #[error("grid has no cells")]
    EmptyGrid,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown cell {ch:?} at row {row}, column {col}")]
    UnknownCell { row: usize, col: usize, ch: char },

    #[error("marker {0:?} appears more than once")]
    DuplicateMarker(char),

    #[error("map file must define exactly one of [graph] or [grid]")]
    AmbiguousMap,

    #[error("failed to read map file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "serde")]
    #[error("invalid map file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

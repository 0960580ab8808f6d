//! Error type shared by both solvers.
//!
//! Every failure is fatal: the CLI reports it and exits without printing
//! any answers.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or parsing puzzle input
#[derive(Debug, Error)]
pub enum PuzzleError {
    /// The input file could not be read
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A segment started with something other than R, L, U or D
    #[error("invalid direction {0:?} (expected one of R, L, U, D)")]
    InvalidDirection(char),

    /// A segment length was missing, non-numeric or zero
    #[error("invalid segment length in {0:?}")]
    InvalidLength(String),

    /// A wire description contained an empty token (e.g. "R8,,U5")
    #[error("empty segment in wire description")]
    EmptySegment,

    /// Fewer than two wire descriptions were supplied
    #[error("expected two wire descriptions, found {0}")]
    MissingWire(usize),

    /// The password range was not of the form `dddddd-dddddd`
    #[error("invalid password range {0:?}")]
    InvalidRange(String),

    /// The wires never share a cell other than the origin
    #[error("wires never cross")]
    NoCrossing,

    /// The JSON report could not be encoded
    #[error("failed to encode output: {0}")]
    Output(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PuzzleError>;

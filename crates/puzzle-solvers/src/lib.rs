//! Solvers for two small grid and digit puzzles.
//!
//! The wire tracer finds where two wires laid out on a grid cross, and
//! the password checker counts six-digit passwords in a range that obey
//! the repeated-digit rules.

pub mod error;
pub mod grid;
pub mod input;
pub mod password;
pub mod tracer;

// Re-export main types
pub use error::{PuzzleError, Result};
pub use grid::{Direction, Position, Segment, WirePath};
pub use input::{parse_range, parse_wires, read_lines};
pub use password::{count_matching, Candidate, PasswordRange, Rule};
pub use tracer::{find_crossings, find_crossings_in, CrossingReport, VisitedCells};

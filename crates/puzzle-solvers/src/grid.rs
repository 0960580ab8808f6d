//! Grid types for the crossed-wires puzzle.
//!
//! The grid is unbounded. `y` grows upwards, so `U` moves to `y + 1`.

use std::str::FromStr;

use serde::Serialize;

use crate::error::PuzzleError;

/// Direction of a wire segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Parse the single-letter form used in wire descriptions
    pub fn from_letter(letter: char) -> Result<Direction, PuzzleError> {
        match letter {
            'U' => Ok(Direction::Up),
            'D' => Ok(Direction::Down),
            'L' => Ok(Direction::Left),
            'R' => Ok(Direction::Right),
            other => Err(PuzzleError::InvalidDirection(other)),
        }
    }

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Position on the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// The central port both wires start from
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one unit in `direction`
    pub fn step(self, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        Position::new(self.x + dx, self.y + dy)
    }

    /// Manhattan distance from the origin
    pub fn manhattan_length(self) -> u32 {
        self.x.unsigned_abs() + self.y.unsigned_abs()
    }
}

/// One leg of a wire: a direction and how many cells it covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub direction: Direction,
    pub length: u32,
}

impl FromStr for Segment {
    type Err = PuzzleError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim();
        let mut chars = token.chars();
        let letter = chars.next().ok_or(PuzzleError::EmptySegment)?;
        let direction = Direction::from_letter(letter)?;

        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PuzzleError::InvalidLength(token.to_string()));
        }
        let length: u32 = digits
            .parse()
            .map_err(|_| PuzzleError::InvalidLength(token.to_string()))?;
        if length == 0 {
            return Err(PuzzleError::InvalidLength(token.to_string()));
        }

        Ok(Segment { direction, length })
    }
}

/// A full wire description such as `R8,U5,L5,D3`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WirePath {
    pub segments: Vec<Segment>,
}

impl WirePath {
    /// Total number of cells the wire enters
    pub fn total_steps(&self) -> u32 {
        self.segments.iter().map(|s| s.length).sum()
    }

    /// Walk the wire cell by cell from the origin.
    ///
    /// Yields `(step, position)` for every cell entered; the first cell is
    /// step 1 and the origin itself is never yielded.
    pub fn cells(&self) -> impl Iterator<Item = (u32, Position)> + '_ {
        let mut position = Position::ORIGIN;
        self.segments
            .iter()
            .flat_map(|segment| (0..segment.length).map(move |_| segment.direction))
            .zip(1..)
            .map(move |(direction, step)| {
                position = position.step(direction);
                (step, position)
            })
    }
}

impl FromStr for WirePath {
    type Err = PuzzleError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let segments = line
            .trim()
            .split(',')
            .map(str::parse)
            .collect::<Result<Vec<Segment>, _>>()?;
        Ok(WirePath { segments })
    }
}

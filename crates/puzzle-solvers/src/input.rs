//! Puzzle input loading.

use std::fs;
use std::path::Path;

use crate::error::{PuzzleError, Result};
use crate::grid::WirePath;
use crate::password::PasswordRange;

/// Read every line of the input file
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|source| PuzzleError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(content.lines().map(str::to_string).collect())
}

/// Parse the first two non-empty lines as wire descriptions
pub fn parse_wires(lines: &[String]) -> Result<(WirePath, WirePath)> {
    let mut wires = lines.iter().filter(|line| !line.trim().is_empty());
    match (wires.next(), wires.next()) {
        (Some(first), Some(second)) => Ok((first.parse()?, second.parse()?)),
        (Some(_), None) => Err(PuzzleError::MissingWire(1)),
        _ => Err(PuzzleError::MissingWire(0)),
    }
}

/// Parse the first line as a password range
pub fn parse_range(lines: &[String]) -> Result<PasswordRange> {
    match lines.first() {
        Some(line) => line.parse(),
        None => Err(PuzzleError::InvalidRange(String::new())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(str::to_string).collect()
    }

    #[test]
    fn test_parse_wires() {
        let (first, second) = parse_wires(&lines("R8,U5,L5,D3\nU7,R6,D4,L4\n")).unwrap();
        assert_eq!(first.segments.len(), 4);
        assert_eq!(second.total_steps(), 21);
    }

    #[test]
    fn test_parse_wires_missing_line() {
        assert!(matches!(
            parse_wires(&lines("R8,U5,L5,D3\n\n")),
            Err(PuzzleError::MissingWire(1))
        ));
        assert!(matches!(parse_wires(&[]), Err(PuzzleError::MissingWire(0))));
    }

    #[test]
    fn test_parse_wires_bad_token() {
        assert!(matches!(
            parse_wires(&lines("R8,Q5\nU7")),
            Err(PuzzleError::InvalidDirection('Q'))
        ));
    }

    #[test]
    fn test_parse_range() {
        let range = parse_range(&lines("100000-100100")).unwrap();
        assert_eq!(range, PasswordRange::new(100000, 100100).unwrap());
        assert!(matches!(parse_range(&[]), Err(PuzzleError::InvalidRange(_))));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_lines(Path::new("does/not/exist/input.txt")).unwrap_err();
        assert!(matches!(err, PuzzleError::Io { .. }));
    }
}

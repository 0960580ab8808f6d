//! Password rules for the secure-container puzzle.
//!
//! Candidates are checked digit by digit on their zero-padded six-digit
//! form. Every rule requires digits that never decrease left to right.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use smallvec::SmallVec;
use tracing::debug;

use crate::error::PuzzleError;

/// Number of digits in a password
pub const PASSWORD_DIGITS: usize = 6;

/// Largest value that fits in `PASSWORD_DIGITS` digits
const MAX_PASSWORD: u32 = 999_999;

/// Inclusive range of six-digit passwords, always with `low <= high`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordRange {
    low: u32,
    high: u32,
}

impl PasswordRange {
    pub fn new(low: u32, high: u32) -> Result<Self, PuzzleError> {
        if low > high || high > MAX_PASSWORD {
            return Err(PuzzleError::InvalidRange(format!(
                "{:06}-{:06}",
                low, high
            )));
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> u32 {
        self.low
    }

    pub fn high(&self) -> u32 {
        self.high
    }

    /// Number of values in the range
    pub fn size(&self) -> usize {
        (self.high - self.low) as usize + 1
    }

    pub fn candidates(&self) -> impl Iterator<Item = Candidate> {
        (self.low..=self.high).map(Candidate::new)
    }
}

fn range_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(\d{6})-(\d{6})$").expect("range pattern is valid"))
}

impl FromStr for PasswordRange {
    type Err = PuzzleError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let invalid = || PuzzleError::InvalidRange(line.trim().to_string());

        let captures = range_pattern().captures(line.trim()).ok_or_else(invalid)?;
        let low: u32 = captures[1].parse().map_err(|_| invalid())?;
        let high: u32 = captures[2].parse().map_err(|_| invalid())?;
        PasswordRange::new(low, high).map_err(|_| invalid())
    }
}

/// Digits of one candidate password, most significant first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    digits: SmallVec<[u8; PASSWORD_DIGITS]>,
}

impl Candidate {
    /// Split `value` into its zero-padded digits.
    ///
    /// Only the lowest `PASSWORD_DIGITS` digits are kept.
    pub fn new(value: u32) -> Self {
        let digits = (0..PASSWORD_DIGITS as u32)
            .rev()
            .map(|place| (value / 10u32.pow(place) % 10) as u8)
            .collect();
        Self { digits }
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Digits never decrease from left to right
    pub fn is_non_decreasing(&self) -> bool {
        self.digits.windows(2).all(|pair| pair[0] <= pair[1])
    }

    /// At least two adjacent digits are equal
    pub fn has_adjacent_pair(&self) -> bool {
        self.digits.windows(2).any(|pair| pair[0] == pair[1])
    }

    /// Some digit value appears exactly twice in the whole password.
    ///
    /// This counts occurrences, not run lengths. For non-decreasing
    /// candidates equal digits are always contiguous, so the two agree.
    pub fn has_exact_pair(&self) -> bool {
        let mut counts = [0u8; 10];
        for &digit in &self.digits {
            counts[digit as usize] += 1;
        }
        counts.contains(&2)
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.digits {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

/// Which repeated-digit rule a password must satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Any two adjacent digits are equal
    AnyPair,
    /// Some digit occurs exactly twice
    ExactPair,
}

impl Rule {
    pub fn accepts(self, candidate: &Candidate) -> bool {
        let has_repeat = match self {
            Rule::AnyPair => candidate.has_adjacent_pair(),
            Rule::ExactPair => candidate.has_exact_pair(),
        };
        has_repeat && candidate.is_non_decreasing()
    }
}

/// Count the passwords in `range` accepted by `rule`
pub fn count_matching(range: &PasswordRange, rule: Rule) -> usize {
    let count = range
        .candidates()
        .filter(|candidate| rule.accepts(candidate))
        .count();
    debug!(?rule, low = range.low, high = range.high, count, "counted passwords");
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accepts(rule: Rule, value: u32) -> bool {
        rule.accepts(&Candidate::new(value))
    }

    #[test]
    fn test_any_pair_rule() {
        assert!(accepts(Rule::AnyPair, 111111));
        assert!(!accepts(Rule::AnyPair, 223450)); // decreasing 5 -> 0
        assert!(!accepts(Rule::AnyPair, 123789)); // no double
        assert!(accepts(Rule::AnyPair, 123444));
    }

    #[test]
    fn test_exact_pair_rule() {
        assert!(accepts(Rule::ExactPair, 112233));
        assert!(!accepts(Rule::ExactPair, 123444));
        assert!(accepts(Rule::ExactPair, 111122));
        assert!(!accepts(Rule::ExactPair, 111111));
    }

    #[test]
    fn test_exact_pair_counts_whole_password() {
        // Split pair of 1s: total count is 2 even though they are not adjacent
        let candidate = Candidate::new(121345);
        assert!(candidate.has_exact_pair());
        assert!(!candidate.has_adjacent_pair());
        assert!(!Rule::ExactPair.accepts(&candidate));
    }

    #[test]
    fn test_candidate_zero_padding() {
        let candidate = Candidate::new(42);
        assert_eq!(candidate.digits(), &[0, 0, 0, 0, 4, 2]);
        assert_eq!(candidate.to_string(), "000042");
        assert!(candidate.has_adjacent_pair());
        assert!(candidate.is_non_decreasing());
    }

    #[test]
    fn test_single_value_range() {
        let range: PasswordRange = "111111-111111".parse().unwrap();
        assert_eq!(range.size(), 1);
        assert_eq!(count_matching(&range, Rule::AnyPair), 1);
        assert_eq!(count_matching(&range, Rule::ExactPair), 0);
    }

    #[test]
    fn test_small_range_counts() {
        // 111120 and 111121 decrease; of the rest only 111122 has an exact pair
        let range = PasswordRange::new(111111, 111122).unwrap();
        assert_eq!(count_matching(&range, Rule::AnyPair), 10);
        assert_eq!(count_matching(&range, Rule::ExactPair), 1);
    }

    #[test]
    fn test_reversed_range_rejected() {
        assert!(matches!(
            PasswordRange::new(200000, 100000),
            Err(PuzzleError::InvalidRange(_))
        ));
        assert!(matches!(
            PasswordRange::new(0, 1_000_000),
            Err(PuzzleError::InvalidRange(_))
        ));

        let range = PasswordRange::new(100000, 100000).unwrap();
        assert_eq!(range.size(), 1);
        assert_eq!(range.low(), range.high());
    }

    #[test]
    fn test_candidate_digits() {
        assert_eq!(Candidate::new(178416).digits(), &[1, 7, 8, 4, 1, 6]);
        assert_eq!(Candidate::new(0).to_string(), "000000");
        assert_eq!(Candidate::new(999999).to_string(), "999999");
    }

    #[test]
    fn test_parse_range() {
        let range: PasswordRange = " 178416-676461\n".parse().unwrap();
        assert_eq!(range, PasswordRange::new(178416, 676461).unwrap());

        for bad in ["12345-123456", "123456_654321", "abcdef-123456", "200000-100000", ""] {
            assert!(
                matches!(bad.parse::<PasswordRange>(), Err(PuzzleError::InvalidRange(_))),
                "{bad:?} should be rejected"
            );
        }
    }
}

//! Digit-level analysis of a numeric pattern.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// A validated numeric pattern: one or more ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pattern(String);

impl Pattern {
    /// Parse a pattern, trimming surrounding whitespace.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyPattern);
        }
        if let Some((position, ch)) = trimmed.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(ParseError::InvalidDigit { ch, position });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn digits(&self) -> Vec<u8> {
        digits_of(&self.0)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Pattern {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Pattern {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Pattern> for String {
    fn from(pattern: Pattern) -> Self {
        pattern.0
    }
}

/// Digits of `input` in order. Non-digit characters are dropped.
pub fn digits_of(input: &str) -> Vec<u8> {
    input
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as u8)
        .collect()
}

/// The most frequent non-zero digit.
///
/// Ties go to the digit that occurs first in the pattern, not the smaller
/// digit. A pattern with no non-zero digits yields 0.
pub fn dominant_digit(digits: &[u8]) -> u8 {
    // (count, first position) per digit
    let mut seen: BTreeMap<u8, (usize, usize)> = BTreeMap::new();
    for (position, &digit) in digits.iter().enumerate() {
        if digit == 0 {
            continue;
        }
        seen.entry(digit).or_insert((0, position)).0 += 1;
    }

    seen.into_iter()
        .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_a.cmp(count_b).then(first_b.cmp(first_a))
        })
        .map(|(digit, _)| digit)
        .unwrap_or(0)
}

/// Distinct digits in ascending order, zero included.
pub fn unique_digits(digits: &[u8]) -> Vec<u8> {
    let mut unique = digits.to_vec();
    unique.sort_unstable();
    unique.dedup();
    unique
}

/// Overall shape of a pattern's digit sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternShape {
    /// A single digit, or one digit repeated ("777")
    Repeating,
    /// Each digit one more than the last ("1234")
    Ascending,
    /// Each digit one less than the last ("4321")
    Descending,
    /// Reads the same both ways ("1221")
    Palindrome,
    Mixed,
}

/// Frequency and sequence profile of a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternAnalysis {
    pub frequencies: BTreeMap<u8, usize>,
    pub shape: PatternShape,
    pub digit_sum: u32,
    /// Digit sum reduced to a single digit
    pub root: u8,
}

pub fn analyze(digits: &[u8]) -> PatternAnalysis {
    let mut frequencies = BTreeMap::new();
    for &digit in digits {
        *frequencies.entry(digit).or_insert(0) += 1;
    }

    let digit_sum: u32 = digits.iter().map(|&d| u32::from(d)).sum();

    PatternAnalysis {
        frequencies,
        shape: classify(digits),
        digit_sum,
        root: reduce(digit_sum),
    }
}

fn classify(digits: &[u8]) -> PatternShape {
    if digits.windows(2).all(|w| w[0] == w[1]) {
        return PatternShape::Repeating;
    }
    if digits.windows(2).all(|w| w[1] == w[0] + 1) {
        return PatternShape::Ascending;
    }
    if digits.windows(2).all(|w| w[0] == w[1] + 1) {
        return PatternShape::Descending;
    }
    if digits.iter().eq(digits.iter().rev()) {
        return PatternShape::Palindrome;
    }
    PatternShape::Mixed
}

fn reduce(mut n: u32) -> u8 {
    while n > 9 {
        let mut sum = 0;
        while n > 0 {
            sum += n % 10;
            n /= 10;
        }
        n = sum;
    }
    n as u8
}

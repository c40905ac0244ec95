//! Alphabet partitioning across reducers.
//!
//! The 26 letters are split into contiguous ranges, one per reducer. With
//! `base = 26 / R` and `remainder = 26 % R`, the first `remainder` reducers
//! own `base + 1` letters and the others own `base`. When there are more
//! reducers than letters, the surplus reducers own an empty range.

use std::fmt;

use crate::error::{AlphadexError, Result};

/// Number of letters distributed across reducers.
pub const ALPHABET_LEN: usize = 26;

/// A contiguous, possibly empty, range of lowercase ASCII letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterRange {
    /// Offset of the first letter from `a`.
    start: u8,
    /// Number of letters in the range.
    len: u8,
}

impl LetterRange {
    fn new(start: usize, len: usize) -> Self {
        debug_assert!(start + len <= ALPHABET_LEN);
        LetterRange {
            start: start as u8,
            len: len as u8,
        }
    }

    /// A range holding no letters.
    pub fn empty() -> Self {
        LetterRange { start: 0, len: 0 }
    }

    /// Number of letters in the range.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Whether the range holds no letters.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// First letter of the range.
    pub fn first(&self) -> Option<char> {
        self.letters().next()
    }

    /// Last letter of the range.
    pub fn last(&self) -> Option<char> {
        self.letters().last()
    }

    /// Letters of the range in alphabetical order.
    pub fn letters(&self) -> impl Iterator<Item = char> + use<> {
        let start = b'a' + self.start;
        (start..start + self.len).map(char::from)
    }

    /// Whether `letter` falls inside the range.
    pub fn contains(&self, letter: char) -> bool {
        self.offset_of(letter).is_some()
    }

    /// Position of `letter` within the range, if it falls inside.
    pub fn offset_of(&self, letter: char) -> Option<usize> {
        if !letter.is_ascii_lowercase() {
            return None;
        }
        let offset = (letter as u8 - b'a').checked_sub(self.start)?;
        (offset < self.len).then_some(offset as usize)
    }
}

impl fmt::Display for LetterRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) if first == last => write!(f, "{first}"),
            (Some(first), Some(last)) => write!(f, "{first}-{last}"),
            _ => write!(f, "-"),
        }
    }
}

/// Splits the alphabet into one contiguous range per reducer.
#[derive(Debug, Clone, Copy)]
pub struct AlphabetPartitioner {
    reducer_count: usize,
}

impl AlphabetPartitioner {
    /// Create a partitioner for `reducer_count` reducers.
    pub fn new(reducer_count: usize) -> Result<Self> {
        if reducer_count == 0 {
            return Err(AlphadexError::config("reducer count cannot be zero"));
        }
        Ok(AlphabetPartitioner { reducer_count })
    }

    /// Letter range owned by the reducer at `reducer_index` (0-based).
    pub fn range_for(&self, reducer_index: usize) -> Result<LetterRange> {
        if reducer_index >= self.reducer_count {
            return Err(AlphadexError::invalid_argument(format!(
                "reducer index {reducer_index} out of bounds for {} reducers",
                self.reducer_count
            )));
        }

        let base = ALPHABET_LEN / self.reducer_count;
        let remainder = ALPHABET_LEN % self.reducer_count;

        let range = if reducer_index < remainder {
            LetterRange::new(reducer_index * (base + 1), base + 1)
        } else if base == 0 {
            LetterRange::empty()
        } else {
            LetterRange::new(reducer_index * base + remainder, base)
        };

        Ok(range)
    }

    /// Ranges of every reducer, ordered by reducer index.
    pub fn ranges(&self) -> Vec<LetterRange> {
        (0..self.reducer_count)
            .map(|index| self.range_for(index).unwrap_or_else(|_| LetterRange::empty()))
            .collect()
    }

    /// Get a human-readable description of this partitioner.
    pub fn description(&self) -> String {
        format!("AlphabetPartitioner(reducers={})", self.reducer_count)
    }
}

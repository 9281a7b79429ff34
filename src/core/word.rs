//! Puzzle word representation
//!
//! A `PuzzleWord` stores a 5-letter word along with its letter set for the
//! membership checks feedback needs.

use rustc_hash::FxHashSet;
use std::fmt;
use thiserror::Error;

/// Number of letters in every puzzle word
pub const WORD_LEN: usize = 5;

/// A 5-letter puzzle word
///
/// Letters are kept exactly as supplied: comparison is case-sensitive and no
/// normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleWord {
    text: String,
    chars: [char; WORD_LEN],
    letters: FxHashSet<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("word contains non-alphabetic character {0:?}")]
    InvalidCharacter(char),
}

impl PuzzleWord {
    /// Create a new word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5 characters
    /// - Any character is not alphabetic
    ///
    /// # Examples
    /// ```
    /// use thridle::core::PuzzleWord;
    ///
    /// let word = PuzzleWord::new("brain").unwrap();
    /// assert_eq!(word.text(), "brain");
    ///
    /// assert!(PuzzleWord::new("too long").is_err());
    /// assert!(PuzzleWord::new("gh0st").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        let count = text.chars().count();
        if count != WORD_LEN {
            return Err(WordError::InvalidLength(count));
        }

        if let Some(bad) = text.chars().find(|c| !c.is_alphabetic()) {
            return Err(WordError::InvalidCharacter(bad));
        }

        let mut chars = [' '; WORD_LEN];
        for (slot, ch) in chars.iter_mut().zip(text.chars()) {
            *slot = ch;
        }
        let letters = chars.iter().copied().collect();

        Ok(Self {
            text,
            chars,
            letters,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's letters in order
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[char; WORD_LEN] {
        &self.chars
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> char {
        self.chars[position]
    }

    /// Check if the word contains a letter anywhere, ignoring how often
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Check whether two words share no letters at all
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.letters.is_disjoint(&other.letters)
    }

    /// Number of distinct letters in the word
    #[must_use]
    pub fn distinct_letters(&self) -> usize {
        self.letters.len()
    }
}

impl fmt::Display for PuzzleWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for PuzzleWord {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

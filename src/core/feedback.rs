//! Per-letter feedback for a submitted guess
//!
//! Each slot gets one verdict:
//! - Neutral: nothing submitted yet
//! - Green: correct letter in the correct slot (always for the revealed slot)
//! - Yellow: letter appears somewhere in the target
//! - Red: letter does not appear in the target
//!
//! Membership is tested against the target's letter *set*. There is no
//! remaining-count bookkeeping, so a target like `SPOOL` can produce more
//! yellows than the letter actually occurs.

use super::word::{PuzzleWord, WORD_LEN};
use std::fmt;

/// Feedback classification for a single slot
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    #[default]
    Neutral,
    Green,
    Yellow,
    Red,
}

impl Verdict {
    /// Emoji square for this verdict
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Neutral => '⬜',
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::Red => '🟥',
        }
    }

    /// Parse a single verdict character
    ///
    /// Accepts `G`/`Y`/`R` (either case), `-`/`_`/`N` for neutral, or the
    /// matching emoji square.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Green),
            'Y' | 'y' | '🟨' => Some(Self::Yellow),
            'R' | 'r' | '🟥' => Some(Self::Red),
            '-' | '_' | 'N' | 'n' | '⬜' => Some(Self::Neutral),
            _ => None,
        }
    }
}

/// Verdicts for all five slots of one submission
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackRow([Verdict; WORD_LEN]);

impl FeedbackRow {
    /// A row with no feedback yet
    pub const NEUTRAL: Self = Self([Verdict::Neutral; WORD_LEN]);

    /// All slots correct
    pub const PERFECT: Self = Self([Verdict::Green; WORD_LEN]);

    #[must_use]
    pub const fn new(verdicts: [Verdict; WORD_LEN]) -> Self {
        Self(verdicts)
    }

    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; WORD_LEN] {
        &self.0
    }

    /// Verdict at a specific slot (0-4)
    ///
    /// # Panics
    /// Panics if slot >= 5
    #[inline]
    #[must_use]
    pub const fn at(&self, slot: usize) -> Verdict {
        self.0[slot]
    }

    /// True until the first accepted submission fills the row
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        self.0.iter().all(|v| *v == Verdict::Neutral)
    }

    /// Whether every slot other than `revealed` is green
    ///
    /// This is the condition that solves a panel. The revealed slot is
    /// skipped since it is green by construction.
    #[must_use]
    pub fn all_correct_except(&self, revealed: usize) -> bool {
        self.0
            .iter()
            .enumerate()
            .filter(|(slot, _)| *slot != revealed)
            .all(|(_, v)| *v == Verdict::Green)
    }

    /// Count slots with the given verdict
    #[must_use]
    pub fn count(&self, verdict: Verdict) -> usize {
        self.0.iter().filter(|v| **v == verdict).count()
    }

    /// Convert the row to an emoji string like "🟩🟨🟥🟩🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.to_emoji()).collect()
    }
}

impl fmt::Display for FeedbackRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

impl std::str::FromStr for FeedbackRow {
    type Err = String;

    /// Parse a row from a string like "GGYRR" or "🟩🟩🟨🟥🟥"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LEN {
            return Err(format!("Invalid feedback string: {s}"));
        }

        let mut verdicts = [Verdict::Neutral; WORD_LEN];
        for (slot, ch) in verdicts.iter_mut().zip(chars) {
            *slot = Verdict::from_char(ch).ok_or_else(|| format!("Invalid feedback string: {s}"))?;
        }

        Ok(Self(verdicts))
    }
}

/// Compute the feedback row for `candidate` against `target`
///
/// Slots are judged independently, left to right:
/// 1. the revealed slot is always green, whatever the candidate holds there
/// 2. an exact positional match is green
/// 3. a letter found anywhere in the target is yellow
/// 4. anything else is red
///
/// # Examples
/// ```
/// use thridle::core::{FeedbackRow, PuzzleWord, evaluate};
///
/// let target = PuzzleWord::new("GHOST").unwrap();
/// let row = evaluate(&target, 0, &['G', 'H', 'O', 'T', 'S']);
///
/// assert_eq!(row, "GGGYY".parse::<FeedbackRow>().unwrap());
/// ```
#[must_use]
pub fn evaluate(target: &PuzzleWord, revealed: usize, candidate: &[char; WORD_LEN]) -> FeedbackRow {
    let mut verdicts = [Verdict::Neutral; WORD_LEN];

    for (slot, (verdict, &letter)) in verdicts.iter_mut().zip(candidate).enumerate() {
        *verdict = if slot == revealed || letter == target.char_at(slot) {
            Verdict::Green
        } else if target.has_letter(letter) {
            Verdict::Yellow
        } else {
            Verdict::Red
        };
    }

    FeedbackRow(verdicts)
}

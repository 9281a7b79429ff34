//! Feedback check command
//!
//! Evaluates one guess against a target without any services.

use crate::core::{FeedbackRow, PuzzleWord, WORD_LEN, evaluate};
use anyhow::{Context, Result, ensure};

/// Result of checking a guess
pub struct CheckResult {
    pub target: String,
    /// Zero-based revealed slot
    pub revealed: usize,
    /// The guess with the revealed letter taken from the target
    pub candidate: String,
    pub feedback: FeedbackRow,
    pub solved: bool,
}

/// Evaluate `guess` against `target` with slot `revealed` (1-based) given away
///
/// # Errors
///
/// Returns an error if either word is not five letters or the slot is not
/// between 1 and 5.
pub fn check_guess(target: &str, revealed: usize, guess: &str) -> Result<CheckResult> {
    ensure!(
        (1..=WORD_LEN).contains(&revealed),
        "revealed slot must be between 1 and {WORD_LEN}, got {revealed}"
    );
    let revealed = revealed - 1;

    let target = PuzzleWord::new(target).context("invalid target word")?;
    let guess = PuzzleWord::new(guess).context("invalid guess")?;

    let mut letters = *guess.chars();
    letters[revealed] = target.char_at(revealed);

    let feedback = evaluate(&target, revealed, &letters);
    Ok(CheckResult {
        target: target.text().to_string(),
        revealed,
        candidate: letters.iter().collect(),
        feedback,
        solved: feedback.all_correct_except(revealed),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_solved_guess() {
        let result = check_guess("BRAIN", 3, "BRAIN").unwrap();
        assert!(result.solved);
        assert_eq!(result.feedback, FeedbackRow::PERFECT);
    }

    #[test]
    fn check_partial_guess() {
        let result = check_guess("GHOST", 1, "GHOTS").unwrap();
        assert!(!result.solved);
        assert_eq!(result.feedback.to_emoji(), "🟩🟩🟩🟨🟨");
    }

    #[test]
    fn revealed_letter_overrides_guess() {
        let result = check_guess("ghost", 5, "ghosx").unwrap();
        assert_eq!(result.candidate, "ghost");
        assert!(result.solved);
    }

    #[test]
    fn rejects_bad_slot() {
        assert!(check_guess("ghost", 0, "ghost").is_err());
        assert!(check_guess("ghost", 6, "ghost").is_err());
    }

    #[test]
    fn rejects_bad_words() {
        assert!(check_guess("ghosts", 1, "ghost").is_err());
        assert!(check_guess("ghost", 1, "gh0st").is_err());
    }
}

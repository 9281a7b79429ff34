//! One round's puzzle panel
//!
//! A panel owns a single word, the slot revealed to the player, the letters
//! typed so far and the feedback from the last accepted submission.
//!
//! Submitting is split in two so the dictionary call can run elsewhere:
//! [`Panel::submit`] hands out a [`ValidationTicket`] and
//! [`Panel::resolve`] applies the dictionary's answer. Every ticket carries the
//! panel's generation stamp; assigning a new word or resetting bumps it, so an
//! answer that arrives late is discarded instead of being applied to the
//! wrong word.

use super::GameError;
use crate::core::{FeedbackRow, PuzzleWord, WORD_LEN, evaluate};
use crate::services::{Dictionary, ServiceError};
use rand::Rng;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Notice shown when the dictionary rejects a candidate
pub const NOT_A_WORD_NOTICE: &str = "Invalid English word. Try again!";

/// Picks which slot is revealed when a word is assigned
pub trait RevealSource {
    /// Return an index in `0..len`
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: Rng + ?Sized> RevealSource for R {
    fn pick(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Always reveals the same slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedReveal(pub usize);

impl RevealSource for FixedReveal {
    fn pick(&mut self, len: usize) -> usize {
        self.0 % len
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    /// Fresh word, nothing submitted yet
    AwaitingGuess,
    /// A candidate is with the dictionary
    Validating,
    /// Last submission was rejected or not fully correct; keep editing
    Retryable,
    /// Every slot is green; the panel is read-only
    Solved,
}

impl PanelState {
    /// Whether the player may type and submit
    #[must_use]
    pub const fn is_editable(self) -> bool {
        matches!(self, Self::AwaitingGuess | Self::Retryable)
    }
}

/// Why a submission was not sent to the dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRefused {
    #[error("this puzzle is not accepting guesses right now")]
    NotEditable,
    #[error("fill in every letter before submitting")]
    Incomplete,
}

/// Result of applying a dictionary answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All letters correct
    Solved(FeedbackRow),
    /// Valid word with at least one wrong letter
    Retry(FeedbackRow),
    /// The dictionary does not know the candidate
    NotAWord,
    /// The answer belonged to an earlier word or submission and was ignored
    Stale,
}

/// An in-flight validation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationTicket {
    generation: u64,
    letters: [char; WORD_LEN],
    candidate: String,
}

impl ValidationTicket {
    /// The full word sent to the dictionary
    #[must_use]
    pub fn candidate(&self) -> &str {
        &self.candidate
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

/// The player's letters, one optional char per slot
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GuessBuffer([Option<char>; WORD_LEN]);

impl GuessBuffer {
    #[must_use]
    pub const fn get(&self, slot: usize) -> Option<char> {
        self.0[slot]
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<char>> + '_ {
        self.0.iter().copied()
    }

    /// All five letters, if no slot is empty
    #[must_use]
    pub fn complete(&self) -> Option<[char; WORD_LEN]> {
        let mut letters = [' '; WORD_LEN];
        for (out, slot) in letters.iter_mut().zip(self.0) {
            *out = slot?;
        }
        Some(letters)
    }

    fn revealing(word: &PuzzleWord, revealed: usize) -> Self {
        let mut slots = [None; WORD_LEN];
        slots[revealed] = Some(word.char_at(revealed));
        Self(slots)
    }
}

/// State machine for a single round
#[derive(Debug, Clone)]
pub struct Panel {
    word: PuzzleWord,
    revealed: usize,
    buffer: GuessBuffer,
    feedback: FeedbackRow,
    validity: Option<bool>,
    state: PanelState,
    generation: u64,
}

impl Panel {
    /// Create a panel for `word` with a slot chosen by `reveal`
    pub fn new<R: RevealSource + ?Sized>(word: PuzzleWord, reveal: &mut R) -> Self {
        let revealed = reveal.pick(WORD_LEN);
        Self::with_reveal(word, revealed)
    }

    /// Create a panel revealing a specific slot
    ///
    /// # Panics
    /// Panics in debug mode if `revealed >= 5`
    #[must_use]
    pub fn with_reveal(word: PuzzleWord, revealed: usize) -> Self {
        debug_assert!(revealed < WORD_LEN, "revealed slot must be < 5");
        let revealed = revealed % WORD_LEN;

        Self {
            buffer: GuessBuffer::revealing(&word, revealed),
            word,
            revealed,
            feedback: FeedbackRow::NEUTRAL,
            validity: None,
            state: PanelState::AwaitingGuess,
            generation: 0,
        }
    }

    /// Replace the word, picking a new revealed slot
    ///
    /// Clears letters and feedback. A validation still in flight for the old
    /// word will be discarded when it returns.
    pub fn assign_word<R: RevealSource + ?Sized>(&mut self, word: PuzzleWord, reveal: &mut R) {
        let revealed = reveal.pick(WORD_LEN);
        self.assign_word_revealing(word, revealed);
    }

    /// Replace the word, revealing a specific slot
    pub fn assign_word_revealing(&mut self, word: PuzzleWord, revealed: usize) {
        let generation = self.generation + 1;
        *self = Self::with_reveal(word, revealed);
        self.generation = generation;
        debug!(word = %self.word, revealed = self.revealed, generation, "word assigned");
    }

    /// Clear the player's letters and feedback, keeping the word and reveal
    pub fn reset(&mut self) {
        self.buffer = GuessBuffer::revealing(&self.word, self.revealed);
        self.feedback = FeedbackRow::NEUTRAL;
        self.validity = None;
        self.state = PanelState::AwaitingGuess;
        self.generation += 1;
        debug!(generation = self.generation, "panel reset");
    }

    /// Put a letter into a slot
    ///
    /// `input` holds at most one character; an empty string clears the slot.
    /// Returns `false` and changes nothing if the slot is out of range or
    /// revealed, the input is longer than one character, or the panel is
    /// solved. Typing while a validation is in flight is allowed; the ticket
    /// already holds the submitted letters.
    pub fn set_letter(&mut self, slot: usize, input: &str) -> bool {
        if slot >= WORD_LEN || slot == self.revealed || self.state == PanelState::Solved {
            return false;
        }

        let mut chars = input.chars();
        let letter = chars.next();
        if chars.next().is_some() {
            return false;
        }

        self.buffer.0[slot] = letter;
        true
    }

    /// The candidate word as it would be submitted now
    ///
    /// The revealed slot always comes from the word itself.
    #[must_use]
    pub fn candidate(&self) -> Option<[char; WORD_LEN]> {
        let mut letters = self.buffer.complete()?;
        letters[self.revealed] = self.word.char_at(self.revealed);
        Some(letters)
    }

    /// Start a submission
    ///
    /// # Errors
    ///
    /// Returns `SubmitRefused::NotEditable` when solved or already validating,
    /// and `SubmitRefused::Incomplete` if any slot is still empty.
    pub fn submit(&mut self) -> Result<ValidationTicket, SubmitRefused> {
        if !self.state.is_editable() {
            return Err(SubmitRefused::NotEditable);
        }
        let letters = self.candidate().ok_or(SubmitRefused::Incomplete)?;

        self.state = PanelState::Validating;
        let candidate: String = letters.iter().collect();
        debug!(%candidate, generation = self.generation, "validating");

        Ok(ValidationTicket {
            generation: self.generation,
            letters,
            candidate,
        })
    }

    /// Apply the dictionary's answer for `ticket`
    ///
    /// # Errors
    ///
    /// Passes a service failure straight back to the caller after returning
    /// the panel to an editable state. Nothing is retried.
    pub fn resolve(
        &mut self,
        ticket: &ValidationTicket,
        is_word: Result<bool, ServiceError>,
    ) -> Result<SubmitOutcome, ServiceError> {
        if ticket.generation != self.generation || self.state != PanelState::Validating {
            debug!(
                candidate = ticket.candidate(),
                ticket = ticket.generation,
                current = self.generation,
                "discarding stale validation"
            );
            return Ok(SubmitOutcome::Stale);
        }

        match is_word {
            Err(err) => {
                warn!(candidate = ticket.candidate(), error = %err, "dictionary lookup failed");
                self.state = PanelState::Retryable;
                Err(err)
            }
            Ok(false) => {
                info!(candidate = ticket.candidate(), "{NOT_A_WORD_NOTICE}");
                self.validity = Some(false);
                self.state = PanelState::Retryable;
                Ok(SubmitOutcome::NotAWord)
            }
            Ok(true) => {
                self.validity = Some(true);
                let row = evaluate(&self.word, self.revealed, &ticket.letters);
                self.feedback = row;

                if row.all_correct_except(self.revealed) {
                    self.state = PanelState::Solved;
                    debug!(word = %self.word, "solved");
                    Ok(SubmitOutcome::Solved(row))
                } else {
                    self.state = PanelState::Retryable;
                    Ok(SubmitOutcome::Retry(row))
                }
            }
        }
    }

    /// Submit and wait for the dictionary in one call
    ///
    /// # Errors
    ///
    /// Returns `GameError::Refused` if the submission could not start and
    /// `GameError::Service` if the lookup failed.
    pub async fn submit_with(
        &mut self,
        dictionary: &dyn Dictionary,
    ) -> Result<SubmitOutcome, GameError> {
        let ticket = self.submit()?;
        let is_word = dictionary.is_word(ticket.candidate()).await;
        Ok(self.resolve(&ticket, is_word)?)
    }

    /// First slot the cursor should land on
    #[must_use]
    pub const fn first_slot(&self) -> usize {
        if self.revealed == 0 { 1 } else { 0 }
    }

    /// Slot after `slot`, skipping the revealed one
    #[must_use]
    pub const fn next_slot(&self, slot: usize) -> Option<usize> {
        let mut next = slot + 1;
        if next == self.revealed {
            next += 1;
        }
        if next < WORD_LEN { Some(next) } else { None }
    }

    /// Slot before `slot`, skipping the revealed one
    #[must_use]
    pub const fn prev_slot(&self, slot: usize) -> Option<usize> {
        match slot.checked_sub(1) {
            Some(prev) if prev == self.revealed => prev.checked_sub(1),
            other => other,
        }
    }

    #[must_use]
    pub const fn word(&self) -> &PuzzleWord {
        &self.word
    }

    #[must_use]
    pub const fn revealed(&self) -> usize {
        self.revealed
    }

    #[must_use]
    pub const fn buffer(&self) -> &GuessBuffer {
        &self.buffer
    }

    #[must_use]
    pub const fn feedback(&self) -> &FeedbackRow {
        &self.feedback
    }

    /// `Some(false)` after a rejected word, `Some(true)` after an accepted one
    #[must_use]
    pub const fn validity(&self) -> Option<bool> {
        self.validity
    }

    #[must_use]
    pub const fn state(&self) -> PanelState {
        self.state
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.state == PanelState::Solved
    }
}

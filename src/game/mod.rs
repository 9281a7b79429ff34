//! Game state machines
//!
//! [`Panel`] runs one round's guess/feedback cycle; [`RoundSequencer`] chains
//! three panels into a game.

mod error;
pub mod panel;
pub mod sequencer;
mod triple;

/// Rounds in one game
pub const ROUNDS: usize = 3;

pub use error::GameError;
pub use panel::{
    FixedReveal, GuessBuffer, NOT_A_WORD_NOTICE, Panel, PanelState, RevealSource, SubmitOutcome,
    SubmitRefused, ValidationTicket,
};
pub use sequencer::{GameTicket, Progress, RoundSequencer, SequencerStatus, SubmissionTicket};
pub use triple::{FetchError, parse_triple};

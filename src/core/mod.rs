//! Core domain types for the puzzle
//!
//! Pure values and the feedback rule. Nothing here performs I/O.

mod feedback;
mod word;

pub use feedback::{FeedbackRow, Verdict, evaluate};
pub use word::{PuzzleWord, WORD_LEN, WordError};

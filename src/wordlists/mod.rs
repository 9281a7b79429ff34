//! Word lists for offline play
//!
//! The embedded list backs the offline puzzle generator and the offline
//! dictionary when no remote services are configured.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

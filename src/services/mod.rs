//! External word services
//!
//! The game core only sees the [`Dictionary`] and [`WordSource`] traits, so
//! the terminal front ends can plug in remote HTTP services, the embedded
//! offline word list, or in-memory fixtures for tests.

mod dictionary;
mod error;
mod generator;
#[cfg(test)]
mod testing;

use async_trait::async_trait;

pub use dictionary::{DictionaryApi, WordListDictionary};
pub use error::ServiceError;
pub use generator::{HttpWordSource, LocalWordSource};

/// Decides whether a candidate is a recognized word
#[async_trait]
pub trait Dictionary: Send + Sync {
    /// Look up `candidate` exactly as submitted (case-sensitive)
    ///
    /// An unknown word is `Ok(false)`; only transport failures are errors.
    async fn is_word(&self, candidate: &str) -> Result<bool, ServiceError>;
}

/// Produces the words for one game
#[async_trait]
pub trait WordSource: Send + Sync {
    /// Fetch three comma-separated five-letter words in a single string
    async fn fetch_triple(&self) -> Result<String, ServiceError>;
}

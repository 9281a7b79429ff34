//! Runtime settings and service wiring
//!
//! The CLI resolves flags and environment variables into [`Settings`], which
//! then decides whether each collaborator is a remote service or the offline
//! word list.

use crate::core::PuzzleWord;
use crate::services::{
    Dictionary, DictionaryApi, HttpWordSource, LocalWordSource, WordListDictionary, WordSource,
};
use crate::wordlists::WORDS;
use crate::wordlists::loader::{load_from_file, words_from_slice};
use anyhow::{Context, Result, bail};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Base URL of the dictionary API
    pub dictionary_url: String,
    /// Remote puzzle generator; `None` uses the offline generator
    pub generator_url: Option<String>,
    /// Validate guesses against the word list instead of the dictionary API
    pub offline: bool,
    /// Custom word list for offline play
    pub wordlist: Option<PathBuf>,
    /// Timeout for each HTTP request
    pub timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dictionary_url: DictionaryApi::DEFAULT_URL.to_string(),
            generator_url: None,
            offline: false,
            wordlist: None,
            timeout: Duration::from_secs(10),
        }
    }
}

/// The collaborators a game session talks to
#[derive(Clone)]
pub struct Services {
    pub dictionary: Arc<dyn Dictionary>,
    pub words: Arc<dyn WordSource>,
}

impl Settings {
    /// Load the offline word list
    ///
    /// # Errors
    ///
    /// Returns an error if a custom list cannot be read or holds no valid
    /// five-letter words.
    pub fn load_words(&self) -> Result<Vec<PuzzleWord>> {
        let words = match &self.wordlist {
            Some(path) => load_from_file(path)
                .with_context(|| format!("failed to read word list {}", path.display()))?,
            None => words_from_slice(WORDS),
        };

        if words.is_empty() {
            bail!("word list contains no five-letter words");
        }
        Ok(words)
    }

    /// Build the dictionary and word source these settings describe
    ///
    /// # Errors
    ///
    /// Returns an error if the word list cannot be loaded or an HTTP client
    /// cannot be built.
    pub fn services(&self) -> Result<Services> {
        let needs_words = self.offline || self.generator_url.is_none();
        let words = if needs_words { self.load_words()? } else { Vec::new() };

        let dictionary: Arc<dyn Dictionary> = if self.offline {
            debug!(words = words.len(), "using offline dictionary");
            Arc::new(WordListDictionary::new(&words))
        } else {
            Arc::new(DictionaryApi::new(self.dictionary_url.clone(), self.timeout)?)
        };

        let source: Arc<dyn WordSource> = match &self.generator_url {
            Some(url) => Arc::new(HttpWordSource::new(url.clone(), self.timeout)?),
            None => {
                debug!(words = words.len(), "using offline generator");
                Arc::new(LocalWordSource::new(words))
            }
        };

        Ok(Services {
            dictionary,
            words: source,
        })
    }
}

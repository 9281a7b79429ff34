//! Dictionary lookups used to validate a submitted candidate

use super::{Dictionary, ServiceError};
use crate::core::PuzzleWord;
use async_trait::async_trait;
use rustc_hash::FxHashSet;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument};

/// Client for the free dictionary API
///
/// `GET {base_url}/{word}` answers with a JSON array of entries when the word
/// is known and a 404 otherwise.
pub struct DictionaryApi {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct Entry {
    word: String,
}

impl DictionaryApi {
    pub const DEFAULT_URL: &'static str = "https://api.dictionaryapi.dev/api/v2/entries/en";

    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn entry_url(&self, word: &str) -> String {
        format!("{}/{word}", self.base_url.trim_end_matches('/'))
    }
}

/// The lookup only counts if the first entry is the exact word asked for
fn entries_match(entries: &[Entry], candidate: &str) -> bool {
    entries.first().is_some_and(|entry| entry.word == candidate)
}

#[async_trait]
impl Dictionary for DictionaryApi {
    #[instrument(skip(self))]
    async fn is_word(&self, candidate: &str) -> Result<bool, ServiceError> {
        let response = self.client.get(self.entry_url(candidate)).send().await?;

        let status = response.status();
        if !status.is_success() {
            debug!(%status, "dictionary has no entry");
            return Ok(false);
        }

        let entries: Vec<Entry> = serde_json::from_slice(&response.bytes().await?)?;
        Ok(entries_match(&entries, candidate))
    }
}

/// Offline dictionary backed by a fixed word list
///
/// Lookups are case-sensitive, like the remote dictionary.
pub struct WordListDictionary {
    words: FxHashSet<String>,
}

impl WordListDictionary {
    #[must_use]
    pub fn new(words: &[PuzzleWord]) -> Self {
        Self {
            words: words.iter().map(|w| w.text().to_string()).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[async_trait]
impl Dictionary for WordListDictionary {
    async fn is_word(&self, candidate: &str) -> Result<bool, ServiceError> {
        Ok(self.words.contains(candidate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{refused_url, serve_once};
    use crate::wordlists::loader::words_from_slice;

    fn api(base_url: String) -> DictionaryApi {
        DictionaryApi::new(base_url, Duration::from_secs(5)).unwrap()
    }

    fn parse(body: &str) -> Vec<Entry> {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn matching_first_entry_is_a_word() {
        let entries = parse(r#"[{"word":"ghost","phonetic":"/ɡəʊst/"},{"word":"ghost"}]"#);
        assert!(entries_match(&entries, "ghost"));
    }

    #[test]
    fn entry_for_other_word_is_not_a_match() {
        let entries = parse(r#"[{"word":"Ghost"}]"#);
        assert!(!entries_match(&entries, "ghost"));
    }

    #[test]
    fn empty_entries_are_not_a_match() {
        assert!(!entries_match(&[], "ghost"));
    }

    #[test]
    fn entry_url_joins_base_and_word() {
        let api = DictionaryApi::new("https://example.test/en/", Duration::from_secs(1)).unwrap();
        assert_eq!(api.entry_url("brain"), "https://example.test/en/brain");
    }

    #[tokio::test]
    async fn word_list_lookup_is_case_sensitive() {
        let dictionary = WordListDictionary::new(&words_from_slice(&["brain", "ghost"]));

        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.is_word("brain").await.unwrap());
        assert!(!dictionary.is_word("BRAIN").await.unwrap());
        assert!(!dictionary.is_word("brian").await.unwrap());
    }

    #[tokio::test]
    async fn unknown_word_status_is_not_an_error() {
        let api = api(serve_once("404 Not Found", r#"{"title":"No Definitions Found"}"#));
        assert!(!api.is_word("brain").await.unwrap());
    }

    #[tokio::test]
    async fn known_word_is_accepted() {
        let api = api(serve_once("200 OK", r#"[{"word":"brain"}]"#));
        assert!(api.is_word("brain").await.unwrap());
    }

    #[tokio::test]
    async fn entry_for_different_word_is_rejected() {
        let api = api(serve_once("200 OK", r#"[{"word":"brains"}]"#));
        assert!(!api.is_word("brain").await.unwrap());
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let api = api(serve_once("200 OK", "<html>oops</html>"));
        assert!(matches!(api.is_word("brain").await, Err(ServiceError::Decode(_))));
    }

    #[tokio::test]
    async fn unreachable_dictionary_is_an_error() {
        let api = api(refused_url());
        assert!(matches!(api.is_word("brain").await, Err(ServiceError::Http(_))));
    }
}

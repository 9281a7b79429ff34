//! Sources of puzzle word triples
//!
//! Every source answers with a single comma-separated string, the same shape
//! the remote generator produces. Parsing and validating it is the
//! sequencer's job.

use super::{ServiceError, WordSource};
use crate::core::PuzzleWord;
use async_trait::async_trait;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument};

/// Client for an HTTP puzzle generator
///
/// Expects `GET {endpoint}` to answer `{"result": "brain,ghost,mucky"}`.
pub struct HttpWordSource {
    client: reqwest::Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    result: String,
}

impl HttpWordSource {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl WordSource for HttpWordSource {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn fetch_triple(&self) -> Result<String, ServiceError> {
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Status(status.as_u16()));
        }

        let body: GenerateResponse = serde_json::from_slice(&response.bytes().await?)?;
        debug!(result = %body.result, "generator answered");
        Ok(body.result)
    }
}

/// Offline generator drawing from a word list
///
/// Picks three words such that no letter of one appears in either of the
/// other two.
pub struct LocalWordSource {
    words: Vec<PuzzleWord>,
}

impl LocalWordSource {
    #[must_use]
    pub const fn new(words: Vec<PuzzleWord>) -> Self {
        Self { words }
    }

    /// Pick three pairwise letter-disjoint words in random order
    ///
    /// Returns `None` only if the list holds no such triple.
    pub fn pick_triple<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<[&PuzzleWord; 3]> {
        let mut pool: Vec<&PuzzleWord> = self.words.iter().collect();
        pool.shuffle(rng);

        for (i, first) in pool.iter().enumerate() {
            for (j, second) in pool.iter().enumerate().skip(i + 1) {
                if !first.is_disjoint(second) {
                    continue;
                }
                let third = pool
                    .iter()
                    .skip(j + 1)
                    .find(|w| w.is_disjoint(first) && w.is_disjoint(second));
                if let Some(third) = third {
                    return Some([*first, *second, *third]);
                }
            }
        }

        None
    }
}

#[async_trait]
impl WordSource for LocalWordSource {
    async fn fetch_triple(&self) -> Result<String, ServiceError> {
        let triple = self
            .pick_triple(&mut rand::rng())
            .ok_or(ServiceError::NoDisjointTriple)?;

        Ok(triple
            .iter()
            .map(|w| w.text())
            .collect::<Vec<_>>()
            .join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{refused_url, serve_once};
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn picks_disjoint_words() {
        let source = LocalWordSource::new(words_from_slice(WORDS));
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let [a, b, c] = source.pick_triple(&mut rng).unwrap();
            assert!(a.is_disjoint(b), "{a} / {b}");
            assert!(a.is_disjoint(c), "{a} / {c}");
            assert!(b.is_disjoint(c), "{b} / {c}");
        }
    }

    #[test]
    fn finds_the_only_triple() {
        let source = LocalWordSource::new(words_from_slice(&["crane", "brain", "ghost", "mucky"]));
        let mut rng = StdRng::seed_from_u64(1);

        let mut picked: Vec<&str> = source
            .pick_triple(&mut rng)
            .unwrap()
            .iter()
            .map(|w| w.text())
            .collect();
        picked.sort_unstable();

        // crane overlaps both brain and mucky
        assert_eq!(picked, ["brain", "ghost", "mucky"]);
    }

    #[test]
    fn no_triple_in_overlapping_list() {
        let source = LocalWordSource::new(words_from_slice(&["crane", "brain", "grain"]));
        assert!(source.pick_triple(&mut StdRng::seed_from_u64(3)).is_none());
    }

    #[tokio::test]
    async fn fetch_joins_with_commas() {
        let source = LocalWordSource::new(words_from_slice(&["brain", "ghost", "mucky"]));
        let raw = source.fetch_triple().await.unwrap();

        let mut parts: Vec<&str> = raw.split(',').collect();
        parts.sort_unstable();
        assert_eq!(parts, ["brain", "ghost", "mucky"]);
    }

    #[tokio::test]
    async fn fetch_fails_without_triple() {
        let source = LocalWordSource::new(words_from_slice(&["brain"]));
        assert!(matches!(
            source.fetch_triple().await,
            Err(ServiceError::NoDisjointTriple)
        ));
    }

    fn http(endpoint: String) -> HttpWordSource {
        HttpWordSource::new(endpoint, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn http_source_returns_result_field() {
        let source = http(serve_once("200 OK", r#"{"result":"brain,ghost,mucky"}"#));
        assert_eq!(source.fetch_triple().await.unwrap(), "brain,ghost,mucky");
    }

    #[tokio::test]
    async fn http_source_reports_failure_status() {
        let source = http(serve_once("500 Internal Server Error", "{}"));
        assert!(matches!(
            source.fetch_triple().await,
            Err(ServiceError::Status(500))
        ));
    }

    #[tokio::test]
    async fn http_source_rejects_unexpected_body() {
        let source = http(serve_once("200 OK", r#"{"words":"brain"}"#));
        assert!(matches!(source.fetch_triple().await, Err(ServiceError::Decode(_))));
    }

    #[tokio::test]
    async fn unreachable_generator_is_an_error() {
        let source = http(refused_url());
        assert!(matches!(source.fetch_triple().await, Err(ServiceError::Http(_))));
    }
}

use thiserror::Error;

/// Failure talking to a word service
///
/// A dictionary answering "not found" is not an error; it is reported as
/// `Ok(false)` by [`Dictionary::is_word`](super::Dictionary::is_word).
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("word service returned status {0}")]
    Status(u16),

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("word list has no three words with disjoint letters")]
    NoDisjointTriple,
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

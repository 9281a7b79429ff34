//! Parsing the generator's word triple

use super::ROUNDS;
use crate::core::{PuzzleWord, WordError};
use thiserror::Error;

/// The generator's answer did not hold three usable words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("expected exactly three words separated by commas, got {0}")]
    WrongCount(usize),

    #[error("invalid puzzle word {word:?}: {source}")]
    InvalidWord {
        word: String,
        #[source]
        source: WordError,
    },
}

/// Split a raw `"brain,ghost,mucky"` answer into the three round words
///
/// The whole answer is trimmed and embedded line breaks are dropped before
/// splitting; each segment is trimmed again.
///
/// # Errors
///
/// Returns `FetchError::WrongCount` unless there are exactly three segments,
/// and `FetchError::InvalidWord` if a segment is not a five-letter word.
///
/// # Examples
/// ```
/// use thridle::game::parse_triple;
///
/// let words = parse_triple(" brain,ghost,\nmucky\n").unwrap();
/// assert_eq!(words[2].text(), "mucky");
///
/// assert!(parse_triple("brain,ghost").is_err());
/// ```
pub fn parse_triple(raw: &str) -> Result<[PuzzleWord; ROUNDS], FetchError> {
    let cleaned: String = raw.trim().chars().filter(|c| !matches!(c, '\n' | '\r')).collect();

    let segments: Vec<&str> = cleaned.split(',').map(str::trim).collect();
    let [first, second, third] = segments.as_slice() else {
        return Err(FetchError::WrongCount(segments.len()));
    };

    Ok([parse_word(first)?, parse_word(second)?, parse_word(third)?])
}

fn parse_word(segment: &str) -> Result<PuzzleWord, FetchError> {
    PuzzleWord::new(segment).map_err(|source| FetchError::InvalidWord {
        word: segment.to_string(),
        source,
    })
}

//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::PuzzleWord;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Returns a vector of valid `PuzzleWord` instances, skipping blank lines and
/// any entry that is not exactly five letters.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use thridle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<PuzzleWord>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(content.lines()))
}

/// Convert embedded string slice to a word vector
///
/// # Examples
/// ```
/// use thridle::wordlists::loader::words_from_slice;
/// use thridle::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<PuzzleWord> {
    words_from_lines(slice.iter().copied())
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<PuzzleWord> {
    lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| PuzzleWord::new(line).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["brain", "ghost", "mucky"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "brain");
        assert_eq!(words[1].text(), "ghost");
        assert_eq!(words[2].text(), "mucky");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["brain", "toolong", "abc", "", "gh0st", "spool"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "brain");
        assert_eq!(words[1].text(), "spool");
    }

    #[test]
    fn words_from_slice_keeps_case() {
        let words = words_from_slice(&["BRAIN"]);
        assert_eq!(words[0].text(), "BRAIN");
    }

    #[test]
    fn load_from_file_reads_lines() {
        let path = std::env::temp_dir().join(format!("thridle-words-{}.txt", std::process::id()));
        fs::write(&path, "brain\n\n  ghost  \nnope\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "ghost");
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("/definitely/not/here.txt").is_err());
    }
}

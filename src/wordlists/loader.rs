//! Corpus loading
//!
//! Custom corpora are plain text, one word per line. Entries that are not
//! five ASCII letters are skipped, as are blank lines and `#` comments.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load a corpus from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use gridle_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/corpus_en.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_text(&content))
}

/// Parse a corpus from text, keeping the first occurrence of each word
#[must_use]
pub fn words_from_text(content: &str) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| Word::new(line).ok())
        .filter(|word| seen.insert(word.text().to_string()))
        .collect()
}

/// Convert an embedded string slice to words
///
/// # Examples
/// ```
/// use gridle_solver::wordlists::loader::words_from_slice;
/// use gridle_solver::wordlists::CORPUS_EN;
///
/// let words = words_from_slice(CORPUS_EN);
/// assert_eq!(words.len(), CORPUS_EN.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["botch", "brash", "hotel"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "botch");
        assert_eq!(words[2].text(), "hotel");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["botch", "toolong", "abc", "ca-fe", "hotel"]);
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["botch", "hotel"]);
    }

    #[test]
    fn words_from_text_skips_comments_and_duplicates() {
        let words = words_from_text("# corpus\nbotch\n\n  Avert \nbotch\nhotels\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["botch", "avert"]);
    }

    #[test]
    fn load_from_embedded_corpus() {
        use crate::wordlists::CORPUS_EN;

        let words = words_from_slice(CORPUS_EN);
        assert_eq!(words.len(), CORPUS_EN.len());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_from_file("does/not/exist.txt").is_err());
    }
}

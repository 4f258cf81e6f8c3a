//! Corpus word representation
//!
//! A `Word` stores one five-letter candidate for a row or column of the board.

use super::letters::LetterSet;
use std::fmt;
use thiserror::Error;

/// Length of every row-word and column-word on the board
pub const WORD_LEN: usize = 5;

/// A five-letter lowercase word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly {WORD_LEN} letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use gridle_solver::core::Word;
    ///
    /// let word = Word::new("HOTEL").unwrap();
    /// assert_eq!(word.text(), "hotel");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("h0tel").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();
        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }
        let text = text.to_ascii_lowercase();

        let chars: [u8; WORD_LEN] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !chars.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check whether every position holds a letter from its class
    #[must_use]
    pub fn matches(&self, classes: &[LetterSet; WORD_LEN]) -> bool {
        self.chars
            .iter()
            .zip(classes)
            .all(|(&ch, class)| class.contains(ch))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("hotel").unwrap();
        assert_eq!(word.text(), "hotel");
        assert_eq!(word.chars(), b"hotel");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("BOTCH").unwrap();
        assert_eq!(word.text(), "botch");
        assert_eq!(Word::new("BoTcH").unwrap(), word);
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("too long"),
            Err(WordError::InvalidLength(8))
        ));
        assert!(matches!(Word::new("ace"), Err(WordError::InvalidLength(3))));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(matches!(
            Word::new("hot3l"),
            Err(WordError::InvalidCharacters)
        ));
        assert!(Word::new("hot l").is_err());
        assert!(matches!(Word::new("hôtel"), Err(WordError::NonAscii)));
    }

    #[test]
    fn word_creation_rejects_letters_that_lowercase_to_ascii() {
        // KELVIN SIGN lowercases to ASCII k
        assert!(matches!(Word::new("\u{212A}nock"), Err(WordError::NonAscii)));
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("avert").unwrap();
        assert_eq!(word.char_at(0), b'a');
        assert_eq!(word.char_at(2), b'e');
        assert_eq!(word.char_at(4), b't');
    }

    #[test]
    fn word_matches_position_classes() {
        let word = Word::new("treat").unwrap();
        let mut classes = [LetterSet::from_bytes(b"abcdefghijklmnopqrstuvwxyz"); WORD_LEN];
        assert!(word.matches(&classes));

        classes[0] = LetterSet::single(b't');
        assert!(word.matches(&classes));

        classes[3] = LetterSet::from_bytes(b"xyz");
        assert!(!word.matches(&classes));
    }

    #[test]
    fn word_display() {
        let word = Word::new("clash").unwrap();
        assert_eq!(format!("{word}"), "clash");
    }
}

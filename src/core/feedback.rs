//! Per-cell feedback colors
//!
//! Every tile on a gridle board carries one of three colors:
//! - Gray: the letter is not used in any word containing the cell
//! - Yellow: the letter belongs somewhere else in a word containing the cell
//! - Green: the letter is correct at this exact position

use std::fmt;

/// Feedback color of a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feedback {
    Gray,
    Yellow,
    Green,
}

impl Feedback {
    /// Parse a feedback character
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for green
    /// - 'Y'/'y'/🟨 for yellow
    /// - '-'/'_'/⬜ for gray
    ///
    /// # Examples
    /// ```
    /// use gridle_solver::core::Feedback;
    ///
    /// assert_eq!(Feedback::from_char('G'), Some(Feedback::Green));
    /// assert_eq!(Feedback::from_char('🟨'), Some(Feedback::Yellow));
    /// assert_eq!(Feedback::from_char('x'), None);
    /// ```
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Green),
            'Y' | 'y' | '🟨' => Some(Self::Yellow),
            '-' | '_' | '⬜' => Some(Self::Gray),
            _ => None,
        }
    }

    /// The canonical ASCII character used in board files
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::Gray => '-',
        }
    }

    #[inline]
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::Gray => '⬜',
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_green(self) -> bool {
        matches!(self, Self::Green)
    }

    #[inline]
    #[must_use]
    pub const fn is_yellow(self) -> bool {
        matches!(self, Self::Yellow)
    }

    #[inline]
    #[must_use]
    pub const fn is_gray(self) -> bool {
        matches!(self, Self::Gray)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

//! Letter sets and the tile multiset
//!
//! `LetterSet` is a per-position character class; `CharBag` counts the tiles
//! physically present on a board so committed words never invent letters.

use std::fmt;

const ALPHABET: usize = 26;

#[inline]
const fn slot(letter: u8) -> Option<usize> {
    if letter.is_ascii_lowercase() {
        Some((letter - b'a') as usize)
    } else {
        None
    }
}

/// A set of lowercase ASCII letters stored as a bitmask
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    pub const EMPTY: Self = Self(0);

    #[inline]
    #[must_use]
    pub const fn single(letter: u8) -> Self {
        match slot(letter) {
            Some(i) => Self(1 << i),
            None => Self::EMPTY,
        }
    }

    /// Build a set from raw bytes, ignoring anything outside `a..=z`
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        bytes.iter().copied().collect()
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        match slot(letter) {
            Some(i) => self.0 & (1 << i) != 0,
            None => false,
        }
    }

    #[inline]
    pub fn insert(&mut self, letter: u8) {
        if let Some(i) = slot(letter) {
            self.0 |= 1 << i;
        }
    }

    #[inline]
    pub fn remove(&mut self, letter: u8) {
        if let Some(i) = slot(letter) {
            self.0 &= !(1 << i);
        }
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        let mut set = Self::EMPTY;
        iter.into_iter().for_each(|letter| set.insert(letter));
        set
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        write!(f, "]")
    }
}

/// Multiset of the letters on a board
///
/// Each physical tile contributes one occurrence. Removing a letter that is
/// no longer present fails instead of going negative.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct CharBag {
    counts: [u8; ALPHABET],
}

impl CharBag {
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut bag = Self::default();
        for &letter in bytes {
            if let Some(i) = slot(letter) {
                bag.counts[i] += 1;
            }
        }
        bag
    }

    #[inline]
    #[must_use]
    pub fn count(&self, letter: u8) -> u8 {
        slot(letter).map_or(0, |i| self.counts[i])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.iter().map(|&c| usize::from(c)).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Remove one occurrence of `letter`
    ///
    /// Returns `false` and leaves the bag untouched if none is left.
    pub fn take(&mut self, letter: u8) -> bool {
        match slot(letter) {
            Some(i) if self.counts[i] > 0 => {
                self.counts[i] -= 1;
                true
            }
            _ => false,
        }
    }

    /// Check whether every letter of `letters` can be drawn, counting repeats
    #[must_use]
    pub fn can_supply(&self, letters: &[u8]) -> bool {
        let mut working = self.clone();
        letters.iter().all(|&letter| working.take(letter))
    }
}

impl fmt::Debug for CharBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (letter, &count) in (b'a'..=b'z').zip(&self.counts) {
            for _ in 0..count {
                write!(f, "{}", letter as char)?;
            }
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_set_basic_operations() {
        let mut set = LetterSet::from_bytes(b"crane");
        assert_eq!(set.len(), 5);
        assert!(set.contains(b'c'));
        assert!(!set.contains(b'z'));

        set.remove(b'c');
        assert!(!set.contains(b'c'));
        set.insert(b'z');
        assert!(set.contains(b'z'));
    }

    #[test]
    fn letter_set_ignores_non_letters() {
        let set = LetterSet::from_bytes(b"a.B1 ");
        assert_eq!(set.len(), 1);
        assert!(set.contains(b'a'));
        assert!(!set.contains(b'.'));
        assert!(LetterSet::single(b'?').is_empty());
    }

    #[test]
    fn letter_set_algebra() {
        let ab = LetterSet::from_bytes(b"ab");
        let bc = LetterSet::from_bytes(b"bc");
        assert_eq!(ab.union(bc), LetterSet::from_bytes(b"abc"));
        assert_eq!(ab.difference(bc), LetterSet::single(b'a'));
        assert!(ab.difference(ab).is_empty());
    }

    #[test]
    fn letter_set_iterates_alphabetically() {
        let set = LetterSet::from_bytes(b"zebra");
        let letters: Vec<u8> = set.iter().collect();
        assert_eq!(letters, b"aberz");
        assert_eq!(format!("{set:?}"), "[aberz]");
    }

    #[test]
    fn char_bag_counts_duplicates() {
        let bag = CharBag::from_bytes(b"speed");
        assert_eq!(bag.count(b'e'), 2);
        assert_eq!(bag.count(b's'), 1);
        assert_eq!(bag.count(b'z'), 0);
        assert_eq!(bag.len(), 5);
    }

    #[test]
    fn char_bag_take_depletes() {
        let mut bag = CharBag::from_bytes(b"ee");
        assert!(bag.take(b'e'));
        assert!(bag.take(b'e'));
        assert!(!bag.take(b'e'));
        assert!(bag.is_empty());
    }

    #[test]
    fn char_bag_can_supply_respects_multiplicity() {
        let bag = CharBag::from_bytes(b"hotelsa");
        assert!(bag.can_supply(b"hotel"));
        assert!(bag.can_supply(b"least"));
        assert!(!bag.can_supply(b"tents"));
        // Checking does not consume
        assert_eq!(bag.len(), 7);
    }
}

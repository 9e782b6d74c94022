//! Five-letter words.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::WordError;
use crate::WORD_LENGTH;

/// A validated word: exactly five uppercase ASCII letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    /// Parse a word, accepting either case and normalizing to uppercase.
    pub fn parse(s: &str) -> Result<Self, WordError> {
        if let Some(ch) = s.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(WordError::Character {
                word: s.to_string(),
                ch,
            });
        }
        let bytes = s.as_bytes();
        if bytes.len() != WORD_LENGTH {
            return Err(WordError::Length {
                word: s.to_string(),
                len: bytes.len(),
            });
        }

        let mut letters = [0u8; WORD_LENGTH];
        for (slot, &b) in letters.iter_mut().zip(bytes) {
            *slot = b.to_ascii_uppercase();
        }
        Ok(Self(letters))
    }

    pub fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII letters are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Index of the letter at `pos` in the 26-letter alphabet.
    #[inline]
    pub(crate) fn letter_index(&self, pos: usize) -> usize {
        (self.0[pos] - b'A') as usize
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Word {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_uppercases() {
        let word = Word::parse("crane").unwrap();
        assert_eq!(word.as_str(), "CRANE");
        assert_eq!(word, Word::parse("CRANE").unwrap());
    }

    #[test]
    fn test_parse_rejects_bad_length() {
        assert!(matches!(Word::parse("cran"), Err(WordError::Length { len: 4, .. })));
        assert!(matches!(Word::parse("cranes"), Err(WordError::Length { len: 6, .. })));
        assert!(Word::parse("").is_err());
    }

    #[test]
    fn test_parse_rejects_non_letters() {
        assert!(matches!(
            Word::parse("cr4ne"),
            Err(WordError::Character { ch: '4', .. })
        ));
        // Five bytes but four characters; the report names the character.
        assert!(matches!(
            Word::parse("caf\u{e9}"),
            Err(WordError::Character { ch: '\u{e9}', .. })
        ));
    }

    #[test]
    fn test_letter_index() {
        let word = Word::parse("AZBYC").unwrap();
        assert_eq!(word.letter_index(0), 0);
        assert_eq!(word.letter_index(1), 25);
        assert_eq!(word.letter_index(4), 2);
    }
}

//! Feedback calculation for guesses.
//!
//! This module computes the feedback pattern (green/yellow/absent) for a
//! guess against an answer.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::word::Word;
use crate::WORD_LENGTH;

/// Feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Correct letter in correct position
    Green,
    /// Correct letter in wrong position
    Yellow,
    /// Letter not in word (or all instances already accounted for)
    Absent,
}

impl Mark {
    pub fn to_emoji(self) -> char {
        match self {
            Mark::Green => '🟩',
            Mark::Yellow => '🟨',
            Mark::Absent => '⬛',
        }
    }

    /// Letter used in compact display (`g`, `y`, `b`)
    pub fn to_char(self) -> char {
        match self {
            Mark::Green => 'g',
            Mark::Yellow => 'y',
            Mark::Absent => 'b',
        }
    }

    /// Letter shown to text agents (`G`, `Y`, `X`)
    pub fn to_agent_char(self) -> char {
        match self {
            Mark::Green => 'G',
            Mark::Yellow => 'Y',
            Mark::Absent => 'X',
        }
    }

    /// Parse from a character (g=green, y=yellow, b/x=absent)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'g' | '2' => Some(Mark::Green),
            'y' | '1' => Some(Mark::Yellow),
            'b' | 'x' | '0' => Some(Mark::Absent),
            _ => None,
        }
    }

    fn digit(self) -> u8 {
        match self {
            Mark::Absent => 0,
            Mark::Yellow => 1,
            Mark::Green => 2,
        }
    }
}

/// A complete feedback pattern for a five-letter guess.
///
/// Encoded as a single u8 value (0-242). Each position is 0 (absent),
/// 1 (yellow) or 2 (green), and the pattern is p0 + 3*p1 + 9*p2 + 27*p3 + 81*p4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pattern(pub u8);

impl Pattern {
    pub const ALL_GREEN: Self = Self(2 + 2 * 3 + 2 * 9 + 2 * 27 + 2 * 81); // 242

    pub const ALL_ABSENT: Self = Self(0);

    /// Total number of possible patterns (3^5)
    pub const COUNT: usize = 243;

    pub fn from_marks(marks: [Mark; WORD_LENGTH]) -> Self {
        let mut pattern: u8 = 0;
        let mut multiplier: u8 = 1;
        for mark in marks {
            pattern += mark.digit() * multiplier;
            multiplier *= 3;
        }
        Self(pattern)
    }

    /// Feedback for `guess` against `answer`.
    ///
    /// Exact matches are reserved before displaced matches are granted, and
    /// displaced matches go to the leftmost guess positions first. A letter
    /// repeated in the guess is only marked as often as it occurs in the
    /// answer.
    pub fn compute(guess: Word, answer: Word) -> Self {
        let g = guess.letters();
        let a = answer.letters();

        let mut marks = [Mark::Absent; WORD_LENGTH];
        let mut remaining = [0u8; 26];
        for pos in 0..WORD_LENGTH {
            remaining[answer.letter_index(pos)] += 1;
        }

        for pos in 0..WORD_LENGTH {
            if g[pos] == a[pos] {
                marks[pos] = Mark::Green;
                remaining[guess.letter_index(pos)] -= 1;
            }
        }

        for pos in 0..WORD_LENGTH {
            if marks[pos] == Mark::Green {
                continue;
            }
            let idx = guess.letter_index(pos);
            if remaining[idx] > 0 {
                marks[pos] = Mark::Yellow;
                remaining[idx] -= 1;
            }
        }

        Self::from_marks(marks)
    }

    pub fn marks(self) -> [Mark; WORD_LENGTH] {
        let mut value = self.0;
        let mut marks = [Mark::Absent; WORD_LENGTH];
        for mark in marks.iter_mut() {
            *mark = match value % 3 {
                0 => Mark::Absent,
                1 => Mark::Yellow,
                _ => Mark::Green,
            };
            value /= 3;
        }
        marks
    }

    pub fn is_win(self) -> bool {
        self == Self::ALL_GREEN
    }

    /// Parse a pattern from a string like "gybbb", "GYXXX" or "21000"
    pub fn parse(s: &str) -> Option<Self> {
        if s.chars().count() != WORD_LENGTH {
            return None;
        }
        let marks: Option<Vec<_>> = s.chars().map(Mark::from_char).collect();
        let marks: [Mark; WORD_LENGTH] = marks?.try_into().ok()?;
        Some(Self::from_marks(marks))
    }

    pub fn to_emoji_string(self) -> String {
        self.marks().iter().map(|m| m.to_emoji()).collect()
    }

    /// Space-separated agent letters, e.g. `X X Y X Y`
    pub fn to_agent_string(self) -> String {
        self.marks()
            .iter()
            .map(|m| m.to_agent_char().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.marks() {
            write!(f, "{}", mark.to_char())?;
        }
        Ok(())
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

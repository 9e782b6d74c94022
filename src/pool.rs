//! The candidate pool: answers still consistent with every pattern seen.

use std::ops::Deref;

use crate::feedback::Pattern;
use crate::word::Word;

/// Members of `pool` whose pattern against `guess` is `pattern`.
pub fn filter(pool: &[Word], guess: Word, pattern: Pattern) -> Vec<Word> {
    pool.iter()
        .copied()
        .filter(|&answer| Pattern::compute(guess, answer) == pattern)
        .collect()
}

/// Words still possible in the current episode.
///
/// Built from the answer list and only ever narrowed, so it stays a subset
/// of that list in its original order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePool {
    words: Vec<Word>,
}

impl CandidatePool {
    pub fn new(answers: &[Word]) -> Self {
        Self {
            words: answers.to_vec(),
        }
    }

    /// Keep only the words consistent with `pattern` for `guess`.
    pub fn narrow(&mut self, guess: Word, pattern: Pattern) {
        self.words
            .retain(|&answer| Pattern::compute(guess, answer) == pattern);
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

impl Deref for CandidatePool {
    type Target = [Word];

    fn deref(&self) -> &[Word] {
        &self.words
    }
}

//! Answer and guess lists.
//!
//! Both lists are fixed once a [`WordLists`] is built. Sessions share them
//! read-only and derive everything else by filtering.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::WordListError;
use crate::word::Word;

const BUILTIN_ANSWERS: &str = include_str!("../data/answers.txt");
const BUILTIN_GUESSES: &str = include_str!("../data/guesses.txt");

/// The answer list (possible targets) and the accepted-guess set.
#[derive(Debug, Clone)]
pub struct WordLists {
    answers: Vec<Word>,
    guesses: Vec<Word>,
    answer_set: HashSet<Word>,
    guess_set: HashSet<Word>,
}

impl WordLists {
    /// Build the lists. Duplicates are dropped keeping first-seen order, and
    /// every answer is also accepted as a guess.
    pub fn new(answers: Vec<Word>, guesses: Vec<Word>) -> Result<Self, WordListError> {
        if answers.is_empty() {
            return Err(WordListError::EmptyAnswers);
        }
        if guesses.is_empty() {
            return Err(WordListError::EmptyGuesses);
        }

        let mut answer_set = HashSet::with_capacity(answers.len());
        let answers: Vec<Word> = answers
            .into_iter()
            .filter(|w| answer_set.insert(*w))
            .collect();

        let mut guess_set = HashSet::with_capacity(guesses.len() + answers.len());
        let guesses: Vec<Word> = guesses
            .into_iter()
            .chain(answers.iter().copied())
            .filter(|w| guess_set.insert(*w))
            .collect();

        Ok(Self {
            answers,
            guesses,
            answer_set,
            guess_set,
        })
    }

    /// The lists compiled into the crate.
    pub fn builtin() -> Result<Self, WordListError> {
        Self::new(parse_lines(BUILTIN_ANSWERS)?, parse_lines(BUILTIN_GUESSES)?)
    }

    pub fn load(
        answers: impl AsRef<Path>,
        guesses: impl AsRef<Path>,
    ) -> Result<Self, WordListError> {
        Self::new(load_list(answers)?, load_list(guesses)?)
    }

    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    pub fn is_answer(&self, word: Word) -> bool {
        self.answer_set.contains(&word)
    }

    pub fn is_accepted(&self, word: Word) -> bool {
        self.guess_set.contains(&word)
    }
}

/// One word per line. Blank lines and `#` comments are skipped.
pub fn parse_lines(text: &str) -> Result<Vec<Word>, WordListError> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line, entry)| {
            Word::parse(entry).map_err(|source| WordListError::Malformed { line, source })
        })
        .collect()
}

/// A JSON array of strings.
pub fn parse_json(text: &str) -> Result<Vec<Word>, WordListError> {
    let entries: Vec<String> = serde_json::from_str(text)?;
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            Word::parse(entry).map_err(|source| WordListError::Malformed {
                line: i + 1,
                source,
            })
        })
        .collect()
}

/// Load a list from `.json`, `.txt` or extensionless files.
pub fn load_list(path: impl AsRef<Path>) -> Result<Vec<Word>, WordListError> {
    let path = path.as_ref();
    let json = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => true,
        Some("txt") | None => false,
        Some(_) => return Err(WordListError::UnsupportedFormat(path.to_path_buf())),
    };

    let text = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if json {
        parse_json(&text)
    } else {
        parse_lines(&text)
    }
}

//! Text adapter for agents that play through prompts.
//!
//! Agents are asked to wrap their word as `<guess>[crane]</guess>` and are
//! shown the board as letter rows over `G`/`Y`/`X` rows. The session never
//! sees the reply itself, only the extracted token or `None`.

use std::fmt::Write;
use std::sync::OnceLock;

use regex::Regex;

use crate::session::AttemptRecord;

static GUESS_TAG: OnceLock<Regex> = OnceLock::new();

fn guess_tag() -> &'static Regex {
    GUESS_TAG.get_or_init(|| {
        Regex::new(r"<guess>\s*\[(\w{5})\]\s*</guess>").expect("guess tag pattern is valid")
    })
}

/// Pull the five-letter token out of `<guess>[xxxxx]</guess>`, uppercased.
///
/// Whitespace is allowed around the brackets. The first well-formed tag
/// wins; `None` means the reply has to be treated as an absent guess.
pub fn extract_guess(reply: &str) -> Option<String> {
    let captures = guess_tag().captures(reply)?;
    captures.get(1).map(|token| token.as_str().to_uppercase())
}

/// Board shown to an agent after its latest guess.
///
/// Only valid attempts appear, each as its letters over its marks.
pub fn render_board(history: &[AttemptRecord], max_attempts: usize) -> String {
    let mut board = String::new();
    let mut used = 0;

    for attempt in history.iter().filter(|a| a.valid) {
        let (Some(guess), Some(pattern)) = (&attempt.guess, attempt.pattern) else {
            continue;
        };
        used += 1;
        let letters: Vec<String> = guess.chars().map(String::from).collect();
        // Writing to a String cannot fail.
        let _ = writeln!(board, "\n{}\n{}", letters.join(" "), pattern.to_agent_string());
    }

    let left = max_attempts.saturating_sub(used);
    let _ = write!(board, "\nYou have {left} guesses left.");
    board
}

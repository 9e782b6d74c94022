use std::sync::Arc;

use wordle_env::harness::{extract_guess, render_board};
use wordle_env::{Session, SessionConfig, Word, WordLists};

#[test]
fn test_extract_guess() {
    let reply = "<think>\nCRANE covers common letters.\n</think>\n<guess>[crane]</guess>";
    assert_eq!(extract_guess(reply).as_deref(), Some("CRANE"));
}

#[test]
fn test_extract_guess_allows_whitespace() {
    assert_eq!(
        extract_guess("<guess> [slate]\n</guess>").as_deref(),
        Some("SLATE")
    );
}

#[test]
fn test_extract_guess_rejects_malformed() {
    assert_eq!(extract_guess("I think the answer is [crane]"), None);
    assert_eq!(extract_guess("<guess>crane</guess>"), None);
    assert_eq!(extract_guess("<guess>[cranes]</guess>"), None);
    assert_eq!(extract_guess("<guess>[cran]</guess>"), None);
    assert_eq!(extract_guess("<guess>[crane]"), None);
    assert_eq!(extract_guess(""), None);
}

#[test]
fn test_extract_guess_takes_first_well_formed() {
    let reply = "<guess>[oops!!]</guess> <guess>[steam]</guess> <guess>[slate]</guess>";
    assert_eq!(extract_guess(reply).as_deref(), Some("STEAM"));
}

#[test]
fn test_extract_guess_needs_both_tags() {
    assert_eq!(extract_guess("[crane]</guess>"), None);
    assert_eq!(extract_guess("<guess>\t[crane]\t</guess>").as_deref(), Some("CRANE"));
    assert_eq!(
        extract_guess("<guess>[<guess>[crane]</guess>").as_deref(),
        Some("CRANE")
    );
}

#[test]
fn test_extract_guess_keeps_word_characters() {
    // Validation against the word list happens in the session, not here.
    assert_eq!(extract_guess("<guess>[a_b1c]</guess>").as_deref(), Some("A_B1C"));
}

#[test]
fn test_render_board() {
    let words = |list: &[&str]| -> Vec<Word> {
        list.iter().map(|s| Word::parse(s).unwrap()).collect()
    };
    let lists = WordLists::new(words(&["STEAM", "CRANE", "SLATE"]), words(&["AUDIO"])).unwrap();
    let mut session = Session::seeded(Arc::new(lists), SessionConfig::default(), 0);
    session.reset_with_target(Word::parse("STEAM").unwrap()).unwrap();

    session.step(Some("CRANE")).unwrap();
    session.step(Some("nope")).unwrap();

    let board = render_board(session.history(), 6);
    assert_eq!(board, "\nC R A N E\nX X Y X Y\n\nYou have 5 guesses left.");
}

#[test]
fn test_render_empty_board() {
    assert_eq!(render_board(&[], 6), "\nYou have 6 guesses left.");
}

use std::sync::Arc;

use wordle_env::{
    play_episode, play_target, EntropyGuesser, Session, SessionConfig, Status, Turn, Word,
    WordLists,
};

fn words(list: &[&str]) -> Vec<Word> {
    list.iter().map(|s| Word::parse(s).unwrap()).collect()
}

fn test_lists() -> Arc<WordLists> {
    Arc::new(
        WordLists::new(
            words(&["CRANE", "SLATE", "TRACE", "CRATE", "RAISE", "ARISE", "STARE", "ROAST", "TOAST", "BEAST"]),
            words(&["AUDIO", "QUICK"]),
        )
        .unwrap(),
    )
}

#[test]
fn test_entropy_guesser_solves_every_answer() {
    let lists = test_lists();
    let mut session = Session::seeded(lists.clone(), SessionConfig::default(), 0);

    for &target in lists.answers() {
        let summary = play_target(&mut session, target, &mut EntropyGuesser, 6).unwrap();
        assert_eq!(summary.status, Status::Won, "failed on {target}");
        assert_eq!(summary.target, Some(target));
        assert!(summary.valid_attempts <= 6);
        assert_eq!(
            summary.guesses.last().cloned().flatten(),
            Some(target.to_string())
        );
    }
}

#[test]
fn test_entropy_guesser_without_opening_ranking() {
    let config = SessionConfig {
        rank_on_reset: false,
        ..SessionConfig::default()
    };
    let mut session = Session::seeded(test_lists(), config, 11);
    let summary = play_episode(&mut session, &mut EntropyGuesser, 6).unwrap();
    assert_eq!(summary.status, Status::Won);
    // The opening guess came from ranking the pool, so it was valid.
    assert_eq!(summary.valid_attempts, summary.total_attempts);
}

#[test]
fn test_closure_guesser() {
    let mut session = Session::seeded(test_lists(), SessionConfig::default(), 3);
    let mut calls = 0;
    let mut guesser = |turn: Turn<'_>| {
        calls += 1;
        if calls == 1 {
            None
        } else {
            turn.pool.first().map(|w| w.to_string())
        }
    };

    let summary = play_episode(&mut session, &mut guesser, 20).unwrap();
    assert_eq!(summary.guesses[0], None);
    assert!(summary.status.is_terminal());
    assert_eq!(summary.total_attempts, summary.valid_attempts + 1);
}

#[test]
fn test_max_calls_bounds_invalid_guessers() {
    let mut session = Session::seeded(test_lists(), SessionConfig::default(), 3);
    let mut guesser = |_: Turn<'_>| Some("?????".to_string());

    let summary = play_episode(&mut session, &mut guesser, 4).unwrap();
    assert_eq!(summary.status, Status::Active);
    assert_eq!(summary.total_attempts, 4);
    assert_eq!(summary.valid_attempts, 0);
    assert!((summary.total_reward + 8.0).abs() < 1e-9);
    assert_eq!(summary.target, None);
}

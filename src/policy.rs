//! Guessers that drive a session.
//!
//! The session treats every guesser as a producer of strings. A guesser can
//! be a person at a terminal, a scripted policy, or an external agent whose
//! replies go through [`harness::extract_guess`](crate::harness::extract_guess).

use rand::Rng;
use serde::Serialize;

use crate::entropy::rank_guesses;
use crate::error::SessionError;
use crate::session::{Diagnostics, Observation, Session, Status};
use crate::word::Word;

/// What a guesser sees before each step.
#[derive(Debug, Clone, Copy)]
pub struct Turn<'a> {
    pub observation: &'a Observation,
    pub diagnostics: &'a Diagnostics,
    /// Words still consistent with the feedback so far
    pub pool: &'a [Word],
}

pub trait Guesser {
    /// Next guess, or `None` when the guesser produced nothing usable.
    fn guess(&mut self, turn: Turn<'_>) -> Option<String>;
}

impl<F> Guesser for F
where
    F: FnMut(Turn<'_>) -> Option<String>,
{
    fn guess(&mut self, turn: Turn<'_>) -> Option<String> {
        self(turn)
    }
}

/// Always plays the highest-entropy guess.
///
/// Uses the session's ranking when there is one. After an invalid guess, or
/// when the opening ranking was skipped, it ranks the pool against itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropyGuesser;

impl Guesser for EntropyGuesser {
    fn guess(&mut self, turn: Turn<'_>) -> Option<String> {
        let best = match turn.diagnostics.ranking.first() {
            Some(best) => best.word,
            None => rank_guesses(turn.pool, turn.pool).first()?.word,
        };
        Some(best.to_string())
    }
}

/// Outcome of [`play_episode`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpisodeSummary {
    pub target: Option<Word>,
    pub status: Status,
    pub valid_attempts: usize,
    pub total_attempts: usize,
    pub total_reward: f64,
    pub guesses: Vec<Option<String>>,
}

/// Reset `session` and let `guesser` play until the episode ends or
/// `max_calls` steps have been made, whichever comes first.
///
/// `max_calls` bounds guessers that never produce an accepted word, since
/// invalid guesses do not use up attempts.
pub fn play_episode<R, G>(
    session: &mut Session<R>,
    guesser: &mut G,
    max_calls: usize,
) -> Result<EpisodeSummary, SessionError>
where
    R: Rng,
    G: Guesser + ?Sized,
{
    let (observation, diagnostics) = session.reset();
    drive(session, guesser, max_calls, observation, diagnostics)
}

/// Like [`play_episode`] against a chosen target.
pub fn play_target<R, G>(
    session: &mut Session<R>,
    target: Word,
    guesser: &mut G,
    max_calls: usize,
) -> Result<EpisodeSummary, SessionError>
where
    R: Rng,
    G: Guesser + ?Sized,
{
    let (observation, diagnostics) = session.reset_with_target(target)?;
    drive(session, guesser, max_calls, observation, diagnostics)
}

fn drive<R, G>(
    session: &mut Session<R>,
    guesser: &mut G,
    max_calls: usize,
    mut observation: Observation,
    mut diagnostics: Diagnostics,
) -> Result<EpisodeSummary, SessionError>
where
    R: Rng,
    G: Guesser + ?Sized,
{
    let mut total_reward = 0.0;
    let mut guesses = Vec::new();

    for _ in 0..max_calls {
        let guess = guesser.guess(Turn {
            observation: &observation,
            diagnostics: &diagnostics,
            pool: session.pool(),
        });
        let step = session.step(guess.as_deref())?;
        guesses.push(guess);
        total_reward += step.reward;
        observation = step.observation;
        diagnostics = step.diagnostics;
        if step.terminated {
            break;
        }
    }

    Ok(EpisodeSummary {
        target: session.target(),
        status: observation.status,
        valid_attempts: observation.valid_attempts,
        total_attempts: observation.total_attempts,
        total_reward,
        guesses,
    })
}

//! Step-based game session.
//!
//! A [`Session`] plays one episode at a time against a hidden target. Each
//! call to [`Session::step`] scores the guess, narrows the candidate pool and
//! returns an observation, a reward and a termination flag. Until the episode
//! ends it also returns the ranking of every accepted guess against the pool
//! that is left.
//!
//! ```
//! use std::sync::Arc;
//! use wordle_env::{Session, SessionConfig, Status, Word, WordLists};
//!
//! let words = |list: &[&str]| -> Vec<Word> {
//!     list.iter().map(|w| Word::parse(w).unwrap()).collect()
//! };
//! let lists = WordLists::new(
//!     words(&["CRANE", "SLATE", "STEAM"]),
//!     words(&["CRANE", "SLATE", "STEAM", "AUDIO"]),
//! )
//! .unwrap();
//!
//! let mut session = Session::seeded(Arc::new(lists), SessionConfig::default(), 7);
//! let (observation, _) = session.reset();
//! assert_eq!(observation.pool_size, 3);
//!
//! let target = session.peek_target().unwrap();
//! let step = session.step(Some(target.as_str())).unwrap();
//! assert!(step.terminated);
//! assert_eq!(session.status(), Some(Status::Won));
//! ```

use std::fmt;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::config::SessionConfig;
use crate::entropy::{entropy_for_guess, information_gain, rank_guesses, ScoredGuess};
use crate::error::SessionError;
use crate::feedback::Pattern;
use crate::pool::CandidatePool;
use crate::word::Word;
use crate::words::WordLists;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Active,
    Won,
    Lost,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        self != Status::Active
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Active => "active",
            Status::Won => "won",
            Status::Lost => "lost",
        })
    }
}

/// One call to [`Session::step`], valid or not.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttemptRecord {
    /// The submitted text, uppercased when it parsed as a word
    pub guess: Option<String>,
    pub valid: bool,
    pub pattern: Option<Pattern>,
    /// Expected entropy of the guess over the pool before filtering
    pub entropy: Option<f64>,
    /// Bits actually resolved by the realized pattern
    pub information_gain: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    pub attempts: Vec<AttemptRecord>,
    pub pool_size: usize,
    pub valid_attempts: usize,
    pub total_attempts: usize,
    pub status: Status,
}

/// Ranked guesses against the current pool.
///
/// The ranking is empty once the episode is over and after an invalid guess.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Diagnostics {
    pub pool_size: usize,
    pub ranking: Vec<ScoredGuess>,
}

impl Diagnostics {
    pub fn top(&self, n: usize) -> &[ScoredGuess] {
        &self.ranking[..n.min(self.ranking.len())]
    }
}

/// Result of [`Session::step`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    pub observation: Observation,
    pub reward: f64,
    pub terminated: bool,
    pub diagnostics: Diagnostics,
}

#[derive(Debug, Clone)]
struct Episode {
    target: Word,
    status: Status,
    valid_attempts: usize,
    pool: CandidatePool,
    history: Vec<AttemptRecord>,
}

pub struct Session<R = StdRng> {
    lists: Arc<WordLists>,
    config: SessionConfig,
    rng: R,
    opening: Option<Arc<Vec<ScoredGuess>>>,
    episode: Option<Episode>,
}

impl Session<StdRng> {
    /// Session with a deterministic target sequence.
    pub fn seeded(lists: Arc<WordLists>, config: SessionConfig, seed: u64) -> Self {
        Self::new(lists, config, StdRng::seed_from_u64(seed))
    }

    /// Session seeded from the operating system.
    pub fn from_entropy(lists: Arc<WordLists>, config: SessionConfig) -> Self {
        Self::new(lists, config, StdRng::from_entropy())
    }
}

impl<R: Rng> Session<R> {
    /// No episode is in progress until the first [`reset`](Self::reset).
    pub fn new(lists: Arc<WordLists>, config: SessionConfig, rng: R) -> Self {
        Self {
            lists,
            config,
            rng,
            opening: None,
            episode: None,
        }
    }

    /// Start a new episode with a target drawn uniformly from the answers.
    pub fn reset(&mut self) -> (Observation, Diagnostics) {
        // WordLists never holds an empty answer list.
        let target = *self
            .lists
            .answers()
            .choose(&mut self.rng)
            .expect("answer list is empty");
        self.start(target)
    }

    /// Start a new episode with a chosen target.
    pub fn reset_with_target(
        &mut self,
        target: Word,
    ) -> Result<(Observation, Diagnostics), SessionError> {
        if !self.lists.is_answer(target) {
            return Err(SessionError::UnknownTarget(target));
        }
        Ok(self.start(target))
    }

    fn start(&mut self, target: Word) -> (Observation, Diagnostics) {
        let episode = Episode {
            target,
            status: Status::Active,
            valid_attempts: 0,
            pool: CandidatePool::new(self.lists.answers()),
            history: Vec::new(),
        };
        let observation = episode.observation();
        self.episode = Some(episode);

        let ranking = if self.config.rank_on_reset {
            self.opening_ranking().as_ref().clone()
        } else {
            Vec::new()
        };
        let diagnostics = Diagnostics {
            pool_size: observation.pool_size,
            ranking,
        };
        (observation, diagnostics)
    }

    /// Ranking over the full answer list. It only depends on the word lists,
    /// so it is computed once and reused by every reset.
    pub fn opening_ranking(&mut self) -> Arc<Vec<ScoredGuess>> {
        let lists = &self.lists;
        self.opening
            .get_or_insert_with(|| Arc::new(rank_guesses(lists.guesses(), lists.answers())))
            .clone()
    }

    /// Submit a guess. `None` stands for a reply that contained no guess.
    ///
    /// Absent or unaccepted guesses are penalized and recorded but cost no
    /// attempt. Fails without touching the episode if it has already ended.
    pub fn step(&mut self, guess: Option<&str>) -> Result<Step, SessionError> {
        let config = &self.config;
        let lists = &self.lists;
        let episode = self.episode.as_mut().ok_or(SessionError::NotStarted)?;
        if episode.status.is_terminal() {
            return Err(SessionError::AlreadyTerminated {
                status: episode.status,
            });
        }

        let word = guess
            .and_then(|g| Word::parse(g).ok())
            .filter(|&w| lists.is_accepted(w));

        let Some(word) = word else {
            episode.history.push(AttemptRecord {
                guess: guess.map(str::to_string),
                valid: false,
                pattern: None,
                entropy: None,
                information_gain: None,
            });
            return Ok(Step {
                observation: episode.observation(),
                reward: config.rewards.invalid,
                terminated: false,
                // The pool is unchanged, so the previous ranking still holds.
                diagnostics: Diagnostics {
                    pool_size: episode.pool.len(),
                    ranking: Vec::new(),
                },
            });
        };

        episode.valid_attempts += 1;

        let before = episode.pool.len();
        let pattern = Pattern::compute(word, episode.target);
        let entropy = entropy_for_guess(word, &episode.pool);
        episode.pool.narrow(word, pattern);
        let gain = information_gain(before, episode.pool.len());

        episode.history.push(AttemptRecord {
            guess: Some(word.to_string()),
            valid: true,
            pattern: Some(pattern),
            entropy: Some(entropy),
            information_gain: Some(gain),
        });

        let reward = if word == episode.target {
            episode.status = Status::Won;
            config.rewards.win
        } else if episode.valid_attempts >= config.max_attempts {
            episode.status = Status::Lost;
            config.rewards.loss
        } else {
            gain - config.rewards.time_cost
        };

        let terminated = episode.status.is_terminal();
        let ranking = if terminated {
            Vec::new()
        } else {
            rank_guesses(lists.guesses(), &episode.pool)
        };
        let diagnostics = Diagnostics {
            pool_size: episode.pool.len(),
            ranking,
        };

        Ok(Step {
            observation: episode.observation(),
            reward,
            terminated,
            diagnostics,
        })
    }

    pub fn observation(&self) -> Option<Observation> {
        self.episode.as_ref().map(Episode::observation)
    }

    pub fn status(&self) -> Option<Status> {
        self.episode.as_ref().map(|e| e.status)
    }

    /// Words still consistent with every pattern seen this episode.
    pub fn pool(&self) -> &[Word] {
        self.episode
            .as_ref()
            .map(|e| e.pool.words())
            .unwrap_or_default()
    }

    pub fn history(&self) -> &[AttemptRecord] {
        self.episode
            .as_ref()
            .map(|e| e.history.as_slice())
            .unwrap_or_default()
    }

    /// The target, once the episode is over.
    pub fn target(&self) -> Option<Word> {
        self.episode
            .as_ref()
            .filter(|e| e.status.is_terminal())
            .map(|e| e.target)
    }

    /// The target of the running episode, whatever its status.
    pub fn peek_target(&self) -> Option<Word> {
        self.episode.as_ref().map(|e| e.target)
    }

    pub fn lists(&self) -> &Arc<WordLists> {
        &self.lists
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}

impl Episode {
    fn observation(&self) -> Observation {
        Observation {
            attempts: self.history.clone(),
            pool_size: self.pool.len(),
            valid_attempts: self.valid_attempts,
            total_attempts: self.history.len(),
            status: self.status,
        }
    }
}

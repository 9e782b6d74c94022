//! # Wordle Env
//!
//! A step-based Wordle environment with an entropy-based solver.
//!
//! Every valid guess is scored twice. Before the feedback is known, the
//! Shannon entropy of the pattern split it induces over the candidate pool
//! measures what it is expected to reveal. After the feedback, the drop in
//! log2 of the pool size measures what it actually revealed, and that
//! realized gain feeds the step reward.

pub mod config;
pub mod entropy;
pub mod error;
pub mod feedback;
pub mod harness;
pub mod policy;
pub mod pool;
pub mod session;
pub mod word;
pub mod words;

pub use config::{Config, Rewards, SessionConfig};
pub use entropy::{entropy_for_guess, information_gain, rank_guesses, ScoredGuess};
pub use error::{ConfigError, Error, SessionError, WordError, WordListError};
pub use feedback::{Mark, Pattern};
pub use policy::{play_episode, play_target, EntropyGuesser, EpisodeSummary, Guesser, Turn};
pub use pool::{filter, CandidatePool};
pub use session::{AttemptRecord, Diagnostics, Observation, Session, Status, Step};
pub use word::Word;
pub use words::WordLists;

/// Word length for Wordle
pub const WORD_LENGTH: usize = 5;

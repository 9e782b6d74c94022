//! Entropy-based guess scoring.
//!
//! A guess splits the candidate pool into classes, one per feedback pattern.
//! With a uniform prior over the pool, the Shannon entropy of that split is
//! the number of bits the guess is expected to reveal. Once the real pattern
//! is known, the realized gain is the drop in log2 of the pool size.

use std::cmp::Ordering;

use rayon::prelude::*;
use serde::Serialize;

use crate::feedback::Pattern;
use crate::word::Word;

/// A guess together with its expected entropy over some pool.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredGuess {
    pub word: Word,
    pub entropy: f64,
    /// Whether the guess could itself be the answer
    pub in_pool: bool,
}

/// Number of pool members falling into each pattern class.
pub fn partition(guess: Word, pool: &[Word]) -> [u32; Pattern::COUNT] {
    let mut counts = [0u32; Pattern::COUNT];
    for &answer in pool {
        counts[Pattern::compute(guess, answer).0 as usize] += 1;
    }
    counts
}

/// Expected information, in bits, that `guess` reveals about which member of
/// `pool` is the answer. Zero for an empty or single-word pool.
pub fn entropy_for_guess(guess: Word, pool: &[Word]) -> f64 {
    if pool.len() <= 1 {
        return 0.0;
    }
    let n = pool.len() as f64;

    // Summing in size order makes equal splits score bit-for-bit equal.
    let mut sizes: Vec<u32> = partition(guess, pool)
        .into_iter()
        .filter(|&count| count > 0)
        .collect();
    sizes.sort_unstable();

    let mut entropy = 0.0;
    for count in sizes {
        let p = count as f64 / n;
        entropy -= p * p.log2();
    }
    // Rounding can leave a tiny negative value when everything lands in one class.
    entropy.max(0.0)
}

/// Bits actually resolved when the pool shrank from `before` to `after`.
pub fn information_gain(before: usize, after: usize) -> f64 {
    (before.max(1) as f64).log2() - (after.max(1) as f64).log2()
}

/// Average pool size left after a guess with the given entropy.
pub fn expected_remaining(pool_len: usize, entropy: f64) -> f64 {
    pool_len as f64 / 2_f64.powf(entropy)
}

/// Score every guess against `pool`, best first.
///
/// Guesses are ordered by entropy, descending. Ties go to guesses that are
/// themselves in the pool, then keep their order in `guesses`.
/// A single-word pool ranks just that word.
pub fn rank_guesses(guesses: &[Word], pool: &[Word]) -> Vec<ScoredGuess> {
    match pool {
        [] => return vec![],
        [only] => {
            return vec![ScoredGuess {
                word: *only,
                entropy: 0.0,
                in_pool: true,
            }]
        }
        _ => {}
    }

    let mut sorted_pool = pool.to_vec();
    sorted_pool.sort_unstable();

    let mut ranking: Vec<ScoredGuess> = guesses
        .par_iter()
        .map(|&word| ScoredGuess {
            word,
            entropy: entropy_for_guess(word, pool),
            in_pool: sorted_pool.binary_search(&word).is_ok(),
        })
        .collect();

    ranking.sort_by(compare_scored);
    ranking
}

fn compare_scored(a: &ScoredGuess, b: &ScoredGuess) -> Ordering {
    match b.entropy.partial_cmp(&a.entropy) {
        Some(Ordering::Equal) | None => b.in_pool.cmp(&a.in_pool),
        Some(ord) => ord,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::parse(w).unwrap()).collect()
    }

    #[test]
    fn test_partition_sums_to_pool_size() {
        let pool = words(&["CRANE", "SLATE", "STEAM", "TRACE", "CRATE"]);
        let guess = Word::parse("CRANE").unwrap();
        let counts = partition(guess, &pool);
        assert_eq!(counts.iter().sum::<u32>(), 5);
        assert_eq!(counts[Pattern::ALL_GREEN.0 as usize], 1);
    }

    #[test]
    fn test_compare_prefers_pool_members_on_ties() {
        let a = ScoredGuess {
            word: Word::parse("AAAAA").unwrap(),
            entropy: 1.0,
            in_pool: false,
        };
        let b = ScoredGuess {
            word: Word::parse("BBBBB").unwrap(),
            entropy: 1.0,
            in_pool: true,
        };
        assert_eq!(compare_scored(&a, &b), Ordering::Greater);
        assert_eq!(compare_scored(&b, &a), Ordering::Less);
    }
}

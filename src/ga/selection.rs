//! Tournament selection.
//!
//! A tournament samples `k` distinct members of the population and keeps
//! the one with the fewest conflicts. The comparison itself is
//! deterministic: on equal scores the candidate drawn first wins.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::board::{evaluate, Individual};
use rand::seq::index;
use rand::Rng;

/// Returns the candidate with the fewest conflicts.
///
/// Ties go to the earliest candidate in the slice. Returns `None` only
/// for an empty slice. No randomness is involved: the caller supplies
/// the sampled candidates.
///
/// # Examples
///
/// ```
/// use eight_queens_ga::ga::{tournament, Individual};
///
/// let crowded = Individual::new(&[1; 8]).unwrap();
/// let solved = Individual::new(&[1, 5, 8, 6, 3, 7, 2, 4]).unwrap();
/// assert_eq!(tournament(&[crowded, solved]), Some(&solved));
/// ```
pub fn tournament(candidates: &[Individual]) -> Option<&Individual> {
    candidates.iter().min_by_key(|ind| evaluate(ind))
}

/// Samples `k` distinct members of `population` and returns the one with
/// the fewest conflicts, first drawn on ties.
///
/// Convenience entry point for callers holding a bare population. It
/// scores the population and delegates to the same slot tournament the
/// generational loop runs over its cached scores, so both consume the RNG
/// identically.
///
/// Returns `None` if the population is empty or `k` is zero. `k` larger
/// than the population is capped at the population size.
pub fn tournament_select<'a, R: Rng>(
    population: &'a [Individual],
    k: usize,
    rng: &mut R,
) -> Option<&'a Individual> {
    let k = k.min(population.len());
    if k == 0 {
        return None;
    }
    let scores: Vec<u32> = population.iter().map(evaluate).collect();
    Some(&population[select_slot(&scores, k, rng)])
}

/// Tournament over cached scores: samples `k` distinct slots of `scores`
/// without replacement and returns the slot with the lowest score.
///
/// Ties go to the slot drawn first. Callers guarantee
/// `1 <= k <= scores.len()`.
pub(crate) fn select_slot<R: Rng>(scores: &[u32], k: usize, rng: &mut R) -> usize {
    let sample = index::sample(rng, scores.len(), k);
    best_slot(scores, sample.iter())
}

/// Slot with the lowest score among `slots`, first occurrence on ties.
///
/// `slots` must yield at least one index.
pub(crate) fn best_slot(scores: &[u32], slots: impl IntoIterator<Item = usize>) -> usize {
    let mut slots = slots.into_iter();
    let mut best = slots.next().unwrap_or(0);
    for slot in slots {
        if scores[slot] < scores[best] {
            best = slot;
        }
    }
    best
}

//! Genetic operators for row-per-column boards.
//!
//! # Crossover
//!
//! - [`crossover`]: single cut point, two complementary offspring
//!
//! # Mutation
//!
//! - [`mutate`]: with probability `m`, redraw one gene uniformly from `[1, 8]`
//!
//! Both operators take boards by reference or by value and return fresh
//! boards; parents are never modified.

use super::board::{Individual, BOARD_SIZE, MAX_ROW, MIN_ROW};
use crate::error::{GaError, Result};
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Single-point crossover at `index`.
///
/// The first offspring takes `parent_1[..index]` followed by
/// `parent_2[index..]`; the second takes `parent_2[..index]` followed by
/// `parent_1[index..]`. A cut at `0` swaps the parents wholesale and a cut
/// at [`BOARD_SIZE`] returns them unchanged.
///
/// # Errors
/// [`GaError::InvalidCutPoint`] if `index > BOARD_SIZE`.
///
/// # Examples
///
/// ```
/// use eight_queens_ga::ga::{crossover, Individual};
///
/// let a = Individual::new(&[2, 4, 7, 4, 8, 5, 5, 2]).unwrap();
/// let b = Individual::new(&[3, 2, 7, 5, 2, 4, 1, 1]).unwrap();
/// let (c, d) = crossover(&a, &b, 3).unwrap();
/// assert_eq!(c.genes(), &[2, 4, 7, 5, 2, 4, 1, 1]);
/// assert_eq!(d.genes(), &[3, 2, 7, 4, 8, 5, 5, 2]);
/// ```
pub fn crossover(
    parent_1: &Individual,
    parent_2: &Individual,
    index: usize,
) -> Result<(Individual, Individual)> {
    if index > BOARD_SIZE {
        return Err(GaError::InvalidCutPoint { index });
    }
    Ok(splice(parent_1, parent_2, index))
}

/// Crossover body. `index` must be within `[0, BOARD_SIZE]`.
pub(crate) fn splice(
    parent_1: &Individual,
    parent_2: &Individual,
    index: usize,
) -> (Individual, Individual) {
    let mut offspring_1 = *parent_1;
    let mut offspring_2 = *parent_2;
    offspring_1.0[index..].copy_from_slice(&parent_2.0[index..]);
    offspring_2.0[index..].copy_from_slice(&parent_1.0[index..]);
    (offspring_1, offspring_2)
}

/// Draws a cut point uniformly from `[0, BOARD_SIZE]`.
pub fn random_cut_point<R: Rng>(rng: &mut R) -> usize {
    rng.random_range(0..=BOARD_SIZE)
}

// ============================================================================
// Mutation
// ============================================================================

/// Point mutation with probability `m`.
///
/// Draws a uniform `u` in `[0, 1)`. If `u < m`, one position is chosen
/// uniformly and its gene is replaced by a uniform draw from `[1, 8]`. The
/// new gene may equal the old one. Otherwise the board is returned as is.
///
/// `m <= 0` never mutates and `m >= 1` always mutates. The input is taken
/// by value, so the caller's copy is untouched.
///
/// # Examples
///
/// ```
/// use eight_queens_ga::ga::{mutate, Individual};
/// use eight_queens_ga::random::create_rng;
///
/// let mut rng = create_rng(1);
/// let board = Individual::new(&[1, 5, 8, 6, 3, 7, 2, 4]).unwrap();
/// assert_eq!(mutate(board, 0.0, &mut rng), board);
/// ```
pub fn mutate<R: Rng>(individual: Individual, m: f64, rng: &mut R) -> Individual {
    let mut mutated = individual;
    if rng.random::<f64>() < m {
        let position = rng.random_range(0..BOARD_SIZE);
        mutated.0[position] = rng.random_range(MIN_ROW..=MAX_ROW);
    }
    mutated
}

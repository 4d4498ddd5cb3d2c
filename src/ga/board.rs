//! Board encoding and conflict evaluation.
//!
//! An [`Individual`] stores one gene per column: gene `i` is the row
//! (1-based) of the queen standing in column `i`. Rows may repeat, so the
//! encoding is not a permutation and row attacks are possible.

use crate::error::{GaError, Result};
use rand::Rng;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of columns (and rows) on the board.
pub const BOARD_SIZE: usize = 8;

/// Conflict count when every queen shares one row: C(8, 2).
pub const MAX_CONFLICTS: u32 = 28;

/// Smallest valid gene value.
pub const MIN_ROW: u8 = 1;

/// Largest valid gene value.
pub const MAX_ROW: u8 = BOARD_SIZE as u8;

/// One queen placement per column.
///
/// The type guarantees exactly [`BOARD_SIZE`] genes, each within
/// `[MIN_ROW, MAX_ROW]`. It is `Copy`, so offspring and elites never share
/// storage with the population member they came from.
///
/// # Examples
///
/// ```
/// use eight_queens_ga::ga::Individual;
///
/// let board = Individual::new(&[1, 5, 8, 6, 3, 7, 2, 4]).unwrap();
/// assert!(board.is_solution());
///
/// assert!(Individual::new(&[1, 2, 3]).is_err());
/// assert!(Individual::new(&[0, 1, 1, 1, 1, 1, 1, 1]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<u8>", into = "Vec<u8>")
)]
pub struct Individual(pub(super) [u8; BOARD_SIZE]);

impl Individual {
    /// Builds a board from untyped genes, rejecting malformed input.
    pub fn new(genes: &[u8]) -> Result<Self> {
        if genes.len() != BOARD_SIZE {
            return Err(GaError::WrongLength {
                expected: BOARD_SIZE,
                actual: genes.len(),
            });
        }
        if let Some((position, &value)) = genes
            .iter()
            .enumerate()
            .find(|(_, g)| !(MIN_ROW..=MAX_ROW).contains(*g))
        {
            return Err(GaError::GeneOutOfRange { position, value });
        }

        let mut board = [0u8; BOARD_SIZE];
        board.copy_from_slice(genes);
        Ok(Individual(board))
    }

    /// Draws every gene independently and uniformly from `[1, 8]`,
    /// column 0 first.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Individual(std::array::from_fn(|_| rng.random_range(MIN_ROW..=MAX_ROW)))
    }

    /// The genes, column by column.
    pub fn genes(&self) -> &[u8; BOARD_SIZE] {
        &self.0
    }

    /// Number of attacking pairs. See [`evaluate`].
    pub fn conflicts(&self) -> u32 {
        evaluate(self)
    }

    /// Returns `true` if no two queens attack each other.
    pub fn is_solution(&self) -> bool {
        self.conflicts() == 0
    }

    /// Zero-based `(row, column)` coordinates of every queen.
    fn coordinates(&self) -> [(i32, i32); BOARD_SIZE] {
        std::array::from_fn(|col| (self.0[col] as i32 - 1, col as i32))
    }
}

impl TryFrom<&[u8]> for Individual {
    type Error = GaError;

    fn try_from(genes: &[u8]) -> Result<Self> {
        Individual::new(genes)
    }
}

impl TryFrom<Vec<u8>> for Individual {
    type Error = GaError;

    fn try_from(genes: Vec<u8>) -> Result<Self> {
        Individual::new(&genes)
    }
}

impl TryFrom<[u8; BOARD_SIZE]> for Individual {
    type Error = GaError;

    fn try_from(genes: [u8; BOARD_SIZE]) -> Result<Self> {
        Individual::new(&genes)
    }
}

impl From<Individual> for Vec<u8> {
    fn from(individual: Individual) -> Self {
        individual.0.to_vec()
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, gene) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{gene}")?;
        }
        write!(f, "]")
    }
}

/// Counts the unordered pairs of queens that attack each other.
///
/// Every ordered pair of queens is checked for a shared row, a shared
/// column, or equal row and column distance. Self-pairs match all three
/// tests and are removed by subtracting [`BOARD_SIZE`]; the remaining
/// total sees each unordered pair twice and is halved.
///
/// The result lies in `[0, MAX_CONFLICTS]`.
///
/// # Examples
///
/// ```
/// use eight_queens_ga::ga::{evaluate, Individual};
///
/// let same_row = Individual::new(&[1; 8]).unwrap();
/// assert_eq!(evaluate(&same_row), 28);
///
/// let board = Individual::new(&[2, 2, 4, 8, 1, 6, 3, 4]).unwrap();
/// assert_eq!(evaluate(&board), 10);
/// ```
pub fn evaluate(individual: &Individual) -> u32 {
    let queens = individual.coordinates();
    let mut attacks = 0u32;

    for &(row, col) in &queens {
        for &(other_row, other_col) in &queens {
            let same_row = row == other_row;
            // Never true for distinct queens: the column is the gene index.
            let same_col = col == other_col;
            let same_diagonal = (row - other_row).abs() == (col - other_col).abs();

            if same_row || same_col || same_diagonal {
                attacks += 1;
            }
        }
    }

    let paired = attacks - BOARD_SIZE as u32;
    debug_assert_eq!(paired % 2, 0, "ordered pairs must come in twos");
    paired / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn board(genes: [u8; BOARD_SIZE]) -> Individual {
        Individual::new(&genes).unwrap()
    }

    #[test]
    fn test_all_same_row() {
        for row in MIN_ROW..=MAX_ROW {
            assert_eq!(evaluate(&board([row; BOARD_SIZE])), MAX_CONFLICTS);
        }
    }

    #[test]
    fn test_known_solution() {
        assert_eq!(evaluate(&board([1, 5, 8, 6, 3, 7, 2, 4])), 0);
    }

    #[test]
    fn test_main_diagonal_fully_attacked() {
        // Every queen on one diagonal: all 28 pairs attack.
        assert_eq!(evaluate(&board([1, 2, 3, 4, 5, 6, 7, 8])), MAX_CONFLICTS);
        assert_eq!(evaluate(&board([8, 7, 6, 5, 4, 3, 2, 1])), MAX_CONFLICTS);
    }

    #[test]
    fn test_reference_examples() {
        assert_eq!(evaluate(&board([2, 2, 4, 8, 1, 6, 3, 4])), 10);
        assert_eq!(evaluate(&board([2, 4, 7, 4, 8, 5, 5, 2])), 4);
    }

    #[test]
    fn test_order_matters() {
        let a = board([1, 5, 8, 6, 3, 7, 2, 4]);
        let b = board([1, 5, 8, 6, 3, 7, 4, 2]);
        assert_ne!(evaluate(&a), evaluate(&b));
    }

    #[test]
    fn test_conflicts_and_is_solution() {
        let solved = board([1, 5, 8, 6, 3, 7, 2, 4]);
        assert_eq!(solved.conflicts(), 0);
        assert!(solved.is_solution());
        assert!(!board([1; BOARD_SIZE]).is_solution());
    }

    #[test]
    fn test_new_rejects_wrong_length() {
        assert_eq!(
            Individual::new(&[1, 2, 3]),
            Err(GaError::WrongLength {
                expected: 8,
                actual: 3
            })
        );
        assert!(Individual::new(&[1; 9]).is_err());
        assert!(Individual::new(&[]).is_err());
    }

    #[test]
    fn test_new_rejects_out_of_range_gene() {
        assert_eq!(
            Individual::new(&[1, 2, 3, 4, 9, 6, 7, 8]),
            Err(GaError::GeneOutOfRange {
                position: 4,
                value: 9
            })
        );
        assert_eq!(
            Individual::new(&[0, 2, 3, 4, 5, 6, 7, 8]),
            Err(GaError::GeneOutOfRange {
                position: 0,
                value: 0
            })
        );
    }

    #[test]
    fn test_try_from_conversions() {
        let genes = vec![3u8, 1, 4, 1, 5, 2, 6, 5];
        let from_vec = Individual::try_from(genes.clone()).unwrap();
        let from_slice = Individual::try_from(genes.as_slice()).unwrap();
        let from_array = Individual::try_from([3u8, 1, 4, 1, 5, 2, 6, 5]).unwrap();
        assert_eq!(from_vec, from_slice);
        assert_eq!(from_vec, from_array);
        assert_eq!(Vec::from(from_vec), genes);
    }

    #[test]
    fn test_random_genes_in_range() {
        let mut rng = create_rng(42);
        for _ in 0..500 {
            let ind = Individual::random(&mut rng);
            assert!(ind.genes().iter().all(|g| (MIN_ROW..=MAX_ROW).contains(g)));
            assert!(ind.conflicts() <= MAX_CONFLICTS);
        }
    }

    #[test]
    fn test_random_covers_all_rows() {
        let mut rng = create_rng(42);
        let mut seen = [false; BOARD_SIZE];
        for _ in 0..100 {
            for &g in Individual::random(&mut rng).genes() {
                seen[(g - 1) as usize] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            board([1, 5, 8, 6, 3, 7, 2, 4]).to_string(),
            "[1, 5, 8, 6, 3, 7, 2, 4]"
        );
    }
}

//! Genetic algorithm for the 8-queens problem.
//!
//! A candidate board places one queen per column; the GA searches for a
//! placement with zero attacking pairs by evolving a population of such
//! boards:
//!
//! - **Evaluation**: count unordered attacking pairs (row or diagonal).
//! - **Selection**: tournament over `k` individuals sampled without
//!   replacement.
//! - **Crossover**: single cut point, two offspring.
//! - **Mutation**: with probability `m`, redraw one gene.
//! - **Elitism**: optionally carry the best board into the next generation.
//!
//! # Example
//!
//! ```
//! use eight_queens_ga::ga::{GaRunner, RunConfig};
//!
//! let config = RunConfig::default().with_seed(7);
//! let result = GaRunner::run(&config).unwrap();
//! assert!(result.best_fitness <= 28);
//! assert_eq!(result.history.len(), config.generations);
//! ```
//!
//! All randomness flows through an explicit [`rand::Rng`] handle, so a run
//! is reproducible from its seed.

pub mod error;
pub mod ga;
pub mod random;

pub use error::{GaError, Result};

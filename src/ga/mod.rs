//! Genetic algorithm for the 8-queens problem.
//!
//! Boards are evolved by a generational GA that minimizes the number of
//! attacking queen pairs.
//!
//! # Key Types
//!
//! - [`Individual`]: One queen row per column, validated on construction
//! - [`RunConfig`]: Run parameters (`g`, `n`, `k`, `m`, `e`, seed)
//! - [`GaRunner`]: Executes the generational loop
//! - [`Evolution`]: The loop as an iterator of [`GenerationStats`]
//! - [`GaResult`]: Best board plus per-generation statistics
//!
//! # Operators
//!
//! - [`evaluate`]: Conflict count, `0..=28`
//! - [`tournament`]: Fewest conflicts among given candidates
//! - [`crossover`]: Single-point recombination
//! - [`mutate`]: Probabilistic single-gene redraw
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod board;
mod config;
mod operators;
mod runner;
mod selection;

pub use board::{evaluate, Individual, BOARD_SIZE, MAX_CONFLICTS, MAX_ROW, MIN_ROW};
pub use config::RunConfig;
pub use operators::{crossover, mutate, random_cut_point};
pub use runner::{run, Evolution, GaResult, GaRunner, GenerationStats};
pub use selection::{tournament, tournament_select};

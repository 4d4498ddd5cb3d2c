//! GA run configuration.
//!
//! [`RunConfig`] holds every parameter of a run. It is immutable once the
//! run starts.

use crate::error::{GaError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for one GA run.
///
/// # Defaults
///
/// The defaults are the reference driver settings: 200 generations of 40
/// boards, binary tournaments, mutation probability 0.25, no elitism.
///
/// ```
/// use eight_queens_ga::ga::RunConfig;
///
/// let config = RunConfig::default();
/// assert_eq!(config.generations, 200);
/// assert_eq!(config.population_size, 40);
/// assert_eq!(config.tournament_size, 2);
/// assert!(!config.elitism);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use eight_queens_ga::ga::RunConfig;
///
/// let config = RunConfig::default()
///     .with_population_size(100)
///     .with_tournament_size(5)
///     .with_mutation_rate(0.1)
///     .with_elitism(true)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunConfig {
    /// Number of generations to run (`g`). Zero returns the best initial board.
    pub generations: usize,

    /// Number of boards per generation (`n`), at least 2.
    pub population_size: usize,

    /// Boards per tournament (`k`), within `[2, population_size]`.
    ///
    /// Candidates are sampled without replacement.
    pub tournament_size: usize,

    /// Probability of mutating each offspring (`m`), within `[0, 1]`.
    pub mutation_rate: f64,

    /// Whether the best board is copied unchanged into the next generation (`e`).
    pub elitism: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            generations: 200,
            population_size: 40,
            tournament_size: 2,
            mutation_rate: 0.25,
            elitism: false,
            seed: None,
        }
    }
}

impl RunConfig {
    /// Builds a configuration from the five run parameters, with no seed.
    pub fn new(g: usize, n: usize, k: usize, m: f64, e: bool) -> Self {
        Self {
            generations: g,
            population_size: n,
            tournament_size: k,
            mutation_rate: m,
            elitism: e,
            seed: None,
        }
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, g: usize) -> Self {
        self.generations = g;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the mutation probability.
    ///
    /// Out-of-range values are kept and rejected by [`validate`](Self::validate).
    pub fn with_mutation_rate(mut self, m: f64) -> Self {
        self.mutation_rate = m;
        self
    }

    /// Enables or disables elitism.
    pub fn with_elitism(mut self, e: bool) -> Self {
        self.elitism = e;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// [`GaError::InvalidConfig`] describing the first offending parameter.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(GaError::config("population_size must be at least 2"));
        }
        if self.tournament_size < 2 {
            return Err(GaError::config("tournament_size must be at least 2"));
        }
        if self.tournament_size > self.population_size {
            return Err(GaError::config(format!(
                "tournament_size ({}) must not exceed population_size ({})",
                self.tournament_size, self.population_size
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GaError::config(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        Ok(())
    }
}

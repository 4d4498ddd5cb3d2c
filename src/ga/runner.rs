//! GA generational loop.
//!
//! [`GaRunner`] drives the complete run:
//! initialization → (elitism → breeding → replacement) × g → best board.
//!
//! [`Evolution`] exposes the same loop one generation at a time as an
//! iterator of [`GenerationStats`], for callers that want to observe or
//! plot progress.

use super::board::{evaluate, Individual, MAX_CONFLICTS};
use super::config::RunConfig;
use super::operators::{mutate, random_cut_point, splice};
use super::selection::{best_slot, select_slot};
use crate::error::Result;
use crate::random::rng_from_seed;
use rand::Rng;
use tracing::instrument;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Conflict statistics of one generation's population.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GenerationStats {
    /// Number of completed generations when these stats were taken (1-based).
    pub generation: usize,

    /// Mean conflict count.
    pub mean: f64,

    /// Fewest conflicts on any board.
    pub min: u32,

    /// Most conflicts on any board.
    pub max: u32,
}

impl GenerationStats {
    fn from_scores(generation: usize, scores: &[u32]) -> Self {
        let total: u64 = scores.iter().map(|&s| s as u64).sum();
        Self {
            generation,
            mean: total as f64 / scores.len() as f64,
            min: scores.iter().copied().min().unwrap_or(0),
            max: scores.iter().copied().max().unwrap_or(MAX_CONFLICTS),
        }
    }
}

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Best board of the final population (lowest slot on ties).
    pub best: Individual,

    /// Conflict count of `best`.
    pub best_fitness: u32,

    /// Number of generations executed.
    pub generations: usize,

    /// Statistics after each generation, oldest first.
    pub history: Vec<GenerationStats>,
}

impl GaResult {
    /// Returns `true` if the best board has no attacking pairs.
    pub fn solved(&self) -> bool {
        self.best_fitness == 0
    }
}

/// A run in progress.
///
/// Holds the current population together with its conflict counts. The
/// counts are recomputed once per generation and read by selection,
/// elitism, statistics and termination.
///
/// Each call to [`next`](Iterator::next) runs one generation and yields
/// its statistics; the iterator ends after `config.generations` steps.
/// Computing statistics draws no randomness, so observing a run does not
/// change its outcome.
///
/// ```
/// use eight_queens_ga::ga::{GaRunner, RunConfig};
/// use eight_queens_ga::random::create_rng;
///
/// let config = RunConfig::default().with_generations(20);
/// let mut evolution = GaRunner::evolve(&config, create_rng(3)).unwrap();
/// for stats in evolution.by_ref() {
///     assert!(stats.min <= stats.max);
/// }
/// assert_eq!(evolution.generation(), 20);
/// ```
#[derive(Debug, Clone)]
pub struct Evolution<R> {
    config: RunConfig,
    rng: R,
    population: Vec<Individual>,
    scores: Vec<u32>,
    generation: usize,
}

impl<R: Rng> Evolution<R> {
    /// Validates `config` and builds the initial population.
    pub fn new(config: RunConfig, mut rng: R) -> Result<Self> {
        config.validate()?;

        let population: Vec<Individual> = (0..config.population_size)
            .map(|_| Individual::random(&mut rng))
            .collect();
        let scores = evaluate_population(&population);

        Ok(Self {
            config,
            rng,
            population,
            scores,
            generation: 0,
        })
    }

    /// Number of generations completed so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Returns `true` once all configured generations have run.
    pub fn is_finished(&self) -> bool {
        self.generation >= self.config.generations
    }

    /// The run's configuration.
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// The current population.
    pub fn population(&self) -> &[Individual] {
        &self.population
    }

    /// Conflict counts of the current population, slot by slot.
    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    /// Best board of the current population (lowest slot on ties).
    pub fn best(&self) -> &Individual {
        &self.population[self.best_slot()]
    }

    /// Conflict count of [`best`](Self::best).
    pub fn best_fitness(&self) -> u32 {
        self.scores[self.best_slot()]
    }

    /// Statistics of the current population.
    pub fn stats(&self) -> GenerationStats {
        GenerationStats::from_scores(self.generation, &self.scores)
    }

    /// Packages the current best board with the given history.
    pub fn into_result(self, history: Vec<GenerationStats>) -> GaResult {
        let slot = self.best_slot();
        GaResult {
            best: self.population[slot],
            best_fitness: self.scores[slot],
            generations: self.generation,
            history,
        }
    }

    fn best_slot(&self) -> usize {
        best_slot(&self.scores, 0..self.scores.len())
    }

    /// Runs one generation: elitism, breeding, replacement.
    ///
    /// The next population is filled up to exactly `population_size`
    /// boards. Each breeding step draws both parents, the cut point and
    /// both mutations before appending; when only one slot is left the
    /// second offspring is discarded.
    fn step(&mut self) -> GenerationStats {
        let n = self.config.population_size;
        let k = self.config.tournament_size;
        let m = self.config.mutation_rate;

        let mut next = Vec::with_capacity(n);

        if self.config.elitism {
            next.push(self.population[self.best_slot()]);
        }

        while next.len() < n {
            let parent_1 = select_slot(&self.scores, k, &mut self.rng);
            let parent_2 = select_slot(&self.scores, k, &mut self.rng);

            let cut = random_cut_point(&mut self.rng);
            let (offspring_1, offspring_2) =
                splice(&self.population[parent_1], &self.population[parent_2], cut);

            let offspring_1 = mutate(offspring_1, m, &mut self.rng);
            let offspring_2 = mutate(offspring_2, m, &mut self.rng);

            next.push(offspring_1);
            if next.len() < n {
                next.push(offspring_2);
            }
        }

        self.population = next;
        self.scores = evaluate_population(&self.population);
        self.generation += 1;

        let stats = self.stats();
        tracing::debug!(
            generation = stats.generation,
            min = stats.min,
            mean = stats.mean,
            max = stats.max,
            "generation complete"
        );
        stats
    }
}

impl<R: Rng> Iterator for Evolution<R> {
    type Item = GenerationStats;

    fn next(&mut self) -> Option<GenerationStats> {
        if self.is_finished() {
            None
        } else {
            Some(self.step())
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.config.generations.saturating_sub(self.generation);
        (remaining, Some(remaining))
    }
}

/// Executes the GA.
///
/// # Usage
///
/// ```
/// use eight_queens_ga::ga::{GaRunner, RunConfig};
///
/// let config = RunConfig::new(100, 40, 3, 0.25, true).with_seed(42);
/// let result = GaRunner::run(&config).unwrap();
/// println!("Best board {} with {} conflicts", result.best, result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with an RNG seeded from `config.seed`.
    ///
    /// # Errors
    /// [`GaError::InvalidConfig`](crate::GaError::InvalidConfig) if the
    /// configuration does not validate.
    pub fn run(config: &RunConfig) -> Result<GaResult> {
        Self::run_with_rng(config, rng_from_seed(config.seed))
    }

    /// Runs the GA with a caller-supplied RNG. `config.seed` is ignored.
    #[instrument(
        level = "debug",
        skip(config, rng),
        fields(
            generations = config.generations,
            population_size = config.population_size,
            tournament_size = config.tournament_size,
            mutation_rate = config.mutation_rate,
            elitism = config.elitism
        )
    )]
    pub fn run_with_rng<R: Rng>(config: &RunConfig, rng: R) -> Result<GaResult> {
        let mut evolution = Self::evolve(config, rng)?;
        tracing::debug!(
            initial_best = evolution.best_fitness(),
            "population initialized"
        );

        let history: Vec<GenerationStats> = evolution.by_ref().collect();
        let result = evolution.into_result(history);

        tracing::info!(
            best = %result.best,
            best_fitness = result.best_fitness,
            generations = result.generations,
            "GA run finished"
        );
        Ok(result)
    }

    /// Starts a run without executing any generation.
    pub fn evolve<R: Rng>(config: &RunConfig, rng: R) -> Result<Evolution<R>> {
        Evolution::new(config.clone(), rng)
    }
}

/// Runs the GA and returns only the best board.
///
/// # Errors
/// [`GaError::InvalidConfig`](crate::GaError::InvalidConfig) if the
/// configuration does not validate.
pub fn run(config: &RunConfig) -> Result<Individual> {
    GaRunner::run(config).map(|result| result.best)
}

/// Conflict count of every board, slot by slot.
fn evaluate_population(population: &[Individual]) -> Vec<u32> {
    population.iter().map(evaluate).collect()
}

// ============================================================================
// Tests
// ============================================================================

//! End-to-end runs with the reference driver settings.

use eight_queens_ga::ga::{self, GaRunner, RunConfig, MAX_CONFLICTS};
use eight_queens_ga::random::create_rng;
use eight_queens_ga::GaError;

#[test]
fn reference_driver_run() {
    // g=200, n=40, k=2, m=0.25, no elitism, seed 0.
    let config = RunConfig::default().with_seed(0);
    let result = GaRunner::run(&config).unwrap();

    assert_eq!(result.best.genes().len(), 8);
    assert!(result.best_fitness <= MAX_CONFLICTS);
    assert_eq!(result.history.len(), 200);
    assert_eq!(result.best_fitness, result.best.conflicts());
}

#[test]
fn reference_driver_improves_across_seeds() {
    let config = RunConfig::default();
    let mut not_worse = 0;
    for seed in 100..120 {
        let mut evolution = GaRunner::evolve(&config, create_rng(seed)).unwrap();
        let initial = evolution.best_fitness();
        evolution.by_ref().for_each(drop);
        if evolution.best_fitness() <= initial {
            not_worse += 1;
        }
    }
    assert!(not_worse >= 16, "only {not_worse}/20 seeds did not regress");
}

#[test]
fn free_function_matches_runner() {
    let config = RunConfig::new(60, 30, 3, 0.2, true).with_seed(17);
    assert_eq!(ga::run(&config).unwrap(), GaRunner::run(&config).unwrap().best);
}

#[test]
fn invalid_config_surfaces_error() {
    let config = RunConfig::new(10, 4, 5, 0.25, false);
    match GaRunner::run(&config) {
        Err(GaError::InvalidConfig { reason }) => {
            assert!(reason.contains("tournament_size"), "reason: {reason}")
        }
        other => panic!("expected InvalidConfig, got {other:?}"),
    }
}

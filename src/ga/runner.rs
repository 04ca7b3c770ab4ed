//! GA evolutionary loop execution.
//!
//! [`GaRunner`] drives the generational cycle:
//! seeding → evaluation → selection → crossover → mutation → replacement.
//!
//! There is no elitism. Each generation is replaced wholesale by its
//! children, and the best individual ever evaluated is tracked separately
//! as an independent copy.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::config::GaConfig;
use super::types::{Fitness, GaProblem, Individual};
use crate::random::create_rng;

/// Why the evolutionary loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    /// The configured generation count was reached.
    MaxGenerations,
    /// A generation produced no admissible children.
    BreedingStalled,
    /// The cancellation token was set.
    Cancelled,
}

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// The best individual evaluated during the entire run.
    pub best: I,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: I::Fitness,

    /// Number of generations that were evaluated.
    pub generations: usize,

    /// Why the loop ended.
    pub stop_reason: StopReason,

    /// Best-ever fitness after each evaluated generation.
    pub fitness_history: Vec<f64>,
}

/// Failure outcomes of a GA run.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GaError<E: std::fmt::Debug> {
    /// The configuration did not pass [`GaConfig::validate`].
    #[error("invalid GA configuration: {0}")]
    InvalidConfig(String),

    /// Every seeding attempt failed.
    ///
    /// `last_issue` carries the reason reported by the last failed attempt,
    /// if the problem reported one.
    #[error("no individual could be seeded in {attempts} attempts (last issue: {last_issue:?})")]
    SeedingFailed {
        attempts: usize,
        last_issue: Option<E>,
    },

    /// The loop stopped before any individual was evaluated.
    #[error("search stopped ({reason:?}) before any individual was recorded")]
    NoBest { reason: StopReason },
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("Best fitness: {:?}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with a generator built from `config.seed`.
    pub fn run<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
    ) -> Result<GaResult<P::Individual>, GaError<P::SeedError>> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set, the GA stops at the next
    /// generation boundary and returns the best individual found so far.
    pub fn run_with_cancel<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult<P::Individual>, GaError<P::SeedError>> {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with_rng(problem, config, &mut rng, cancel)
    }

    /// Runs the GA drawing all randomness from `rng`.
    ///
    /// `config.seed` is ignored; the caller owns reproducibility.
    pub fn run_with_rng<P: GaProblem, R: Rng>(
        problem: &P,
        config: &GaConfig,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult<P::Individual>, GaError<P::SeedError>> {
        config.validate().map_err(GaError::InvalidConfig)?;

        // 1. Seed
        let mut population = seed_population(problem, config, rng)?;

        let mut best: Option<P::Individual> = None;
        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);
        let mut generations = 0usize;
        let mut stop_reason = StopReason::MaxGenerations;

        // 2. Evolutionary loop
        for gen in 0..config.max_generations {
            if is_cancelled(cancel.as_ref()) {
                stop_reason = StopReason::Cancelled;
                break;
            }

            evaluate_population(problem, &mut population, config.parallel);
            update_best(&mut best, &population);
            generations = gen + 1;
            if let Some(b) = &best {
                fitness_history.push(b.fitness().to_f64());
                problem.on_generation(generations, b.fitness());
            }

            let next_gen = breed(problem, config, &population, rng);
            if next_gen.is_empty() {
                stop_reason = StopReason::BreedingStalled;
                break;
            }
            population = next_gen;
        }

        // The children of the final generation still count.
        if stop_reason == StopReason::MaxGenerations {
            evaluate_population(problem, &mut population, config.parallel);
            update_best(&mut best, &population);
            if let Some(b) = &best {
                fitness_history.push(b.fitness().to_f64());
            }
        }

        match best {
            Some(best) => Ok(GaResult {
                best_fitness: best.fitness(),
                best,
                generations,
                stop_reason,
                fitness_history,
            }),
            None => Err(GaError::NoBest {
                reason: stop_reason,
            }),
        }
    }
}

fn is_cancelled(cancel: Option<&Arc<AtomicBool>>) -> bool {
    cancel.is_some_and(|flag| flag.load(Ordering::Relaxed))
}

/// Builds the initial population, keeping only valid individuals.
fn seed_population<P: GaProblem, R: Rng>(
    problem: &P,
    config: &GaConfig,
    rng: &mut R,
) -> Result<Vec<P::Individual>, GaError<P::SeedError>> {
    let attempts = config.seeding_attempts();
    let mut population = Vec::with_capacity(config.population_size);
    let mut last_issue = None;

    for _ in 0..attempts {
        match problem.create_individual(rng) {
            Ok(ind) if problem.is_valid(&ind) => population.push(ind),
            Ok(_) => {}
            Err(issue) => last_issue = Some(issue),
        }
        if population.len() >= config.population_size {
            break;
        }
    }

    if population.is_empty() {
        return Err(GaError::SeedingFailed {
            attempts,
            last_issue,
        });
    }
    Ok(population)
}

/// Produces the next generation from a fully evaluated population.
///
/// Returns an empty vector when no breeding event admitted a child.
fn breed<P: GaProblem, R: Rng>(
    problem: &P,
    config: &GaConfig,
    population: &[P::Individual],
    rng: &mut R,
) -> Vec<P::Individual> {
    let Some(sampler) = config.selection.sampler(population) else {
        return Vec::new();
    };

    let mut next_gen = Vec::with_capacity(config.population_size);
    for _ in 0..config.population_size / 2 {
        let (p1, p2) = sampler.sample_pair(rng);

        let children = if rng.random_range(0.0..1.0) < config.crossover_rate {
            problem.crossover(&population[p1], &population[p2], rng)
        } else {
            vec![population[p1].clone(), population[p2].clone()]
        };

        for mut child in children {
            if rng.random_range(0.0..1.0) < config.mutation_rate {
                problem.mutate(&mut child, rng);
            }
            if problem.is_valid(&child) {
                child.set_fitness(<P::Individual as Individual>::Fitness::worst());
                next_gen.push(child);
            }
        }
    }
    next_gen
}

/// Evaluates every individual in the population.
///
/// The parallel path collects the whole generation before returning, so
/// selection always sees a complete fitness vector.
fn evaluate_population<P: GaProblem>(problem: &P, population: &mut [P::Individual], parallel: bool) {
    #[cfg(feature = "parallel")]
    if parallel {
        population.par_iter_mut().for_each(|ind| {
            let f = problem.evaluate(ind);
            ind.set_fitness(f);
        });
        return;
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    for ind in population.iter_mut() {
        let f = problem.evaluate(ind);
        ind.set_fitness(f);
    }
}

/// Replaces `best` with a copy of the fittest member if it strictly improves.
fn update_best<I: Individual>(best: &mut Option<I>, population: &[I]) {
    let Some(gen_best) = find_best(population) else {
        return;
    };
    let improves = match best {
        Some(b) => gen_best.fitness() > b.fitness(),
        None => true,
    };
    if improves {
        *best = Some(gen_best.clone());
    }
}

/// Finds the individual with the highest fitness; ties keep the earliest.
fn find_best<I: Individual>(population: &[I]) -> Option<&I> {
    population.iter().fold(None, |acc: Option<&I>, ind| match acc {
        Some(b) if ind.fitness() > b.fitness() => Some(ind),
        Some(b) => Some(b),
        None => Some(ind),
    })
}

// ============================================================================
// Tests
// ============================================================================

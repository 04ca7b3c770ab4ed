//! Core trait definitions for the GA engine.
//!
//! [`Individual`] and [`GaProblem`] are the contract between the generic
//! evolutionary loop and a concrete problem such as team selection.

use rand::Rng;

/// Marker trait for fitness values.
///
/// Higher fitness is better (maximization).
pub trait Fitness: PartialOrd + Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Returns a value below every attainable fitness.
    ///
    /// Used for individuals that have not been evaluated yet.
    fn worst() -> Self;

    /// Converts the fitness to `f64` for selection weights and statistics.
    fn to_f64(self) -> f64;
}

impl Fitness for f64 {
    fn worst() -> Self {
        f64::NEG_INFINITY
    }

    fn to_f64(self) -> f64 {
        self
    }
}

/// A candidate solution in the GA population.
///
/// Individuals carry their own fitness value. The runner calls
/// [`GaProblem::evaluate`] and stores the result via
/// [`set_fitness`](Individual::set_fitness).
pub trait Individual: Clone + Send + Sync {
    /// The fitness type.
    type Fitness: Fitness;

    /// Returns the last stored fitness.
    fn fitness(&self) -> Self::Fitness;

    /// Stores a freshly computed fitness.
    fn set_fitness(&mut self, fitness: Self::Fitness);
}

/// Defines a GA optimization problem.
///
/// Covers seeding, evaluation, structural validation and the two variation
/// operators. The runner owns the loop; the problem owns the semantics.
///
/// # Thread Safety
///
/// `GaProblem` must be `Send + Sync` because the runner may evaluate a
/// generation in parallel.
pub trait GaProblem: Send + Sync {
    /// The individual (solution) type for this problem.
    type Individual: Individual;

    /// Why a seeding attempt produced no individual.
    type SeedError: std::fmt::Debug + Clone + Send;

    /// Attempts to build one individual for the initial population.
    ///
    /// Seeding is allowed to fail; the runner retries up to
    /// [`GaConfig::seeding_attempts`](super::GaConfig::seeding_attempts)
    /// times and keeps the successes.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Result<Self::Individual, Self::SeedError>;

    /// Evaluates an individual. Higher is better.
    ///
    /// Must be a pure function of the individual so that a generation can be
    /// evaluated concurrently.
    fn evaluate(&self, individual: &Self::Individual) -> <Self::Individual as Individual>::Fitness;

    /// Returns `false` for individuals that must never enter a population.
    ///
    /// The default accepts everything.
    fn is_valid(&self, _individual: &Self::Individual) -> bool {
        true
    }

    /// Recombines two parents into offspring.
    ///
    /// The default clones both parents.
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        parent2: &Self::Individual,
        _rng: &mut R,
    ) -> Vec<Self::Individual> {
        vec![parent1.clone(), parent2.clone()]
    }

    /// Mutates an individual in place.
    ///
    /// The default is a no-op.
    fn mutate<R: Rng>(&self, _individual: &mut Self::Individual, _rng: &mut R) {}

    /// Called at the end of each evaluated generation with the best-ever
    /// fitness. The default is a no-op.
    fn on_generation(
        &self,
        _generation: usize,
        _best_fitness: <Self::Individual as Individual>::Fitness,
    ) {
    }
}

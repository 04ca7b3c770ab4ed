//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use serde::{Deserialize, Serialize};

use super::selection::Selection;

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use squad_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.max_generations, 50);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use squad_ga::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(80)
///     .with_selection(Selection::Tournament(3))
///     .with_mutation_rate(0.2)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    /// Target number of individuals per generation.
    ///
    /// Each generation runs `population_size / 2` breeding events, each of
    /// which yields up to two children.
    pub population_size: usize,

    /// Number of generations before termination.
    pub max_generations: usize,

    /// Parent selection strategy.
    pub selection: Selection,

    /// Probability of recombining a selected pair (0.0–1.0).
    ///
    /// When crossover is skipped, the children are clones of the parents.
    pub crossover_rate: f64,

    /// Probability of mutating each child (0.0–1.0).
    pub mutation_rate: f64,

    /// Seeding tries per population slot.
    ///
    /// Seeding stops after `population_size * seeding_attempt_factor`
    /// attempts or once the population is full, whichever comes first.
    pub seeding_attempt_factor: usize,

    /// Whether to evaluate a generation in parallel.
    ///
    /// Only effective with the `parallel` feature.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a fresh seed from the thread-local generator.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_generations: 50,
            selection: Selection::default(),
            crossover_rate: 1.0,
            mutation_rate: 0.1,
            seeding_attempt_factor: 2,
            parallel: true,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the seeding attempt factor.
    pub fn with_seeding_attempt_factor(mut self, factor: usize) -> Self {
        self.seeding_attempt_factor = factor;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Total seeding attempt budget.
    pub fn seeding_attempts(&self) -> usize {
        self.population_size.saturating_mul(self.seeding_attempt_factor)
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.max_generations == 0 {
            return Err("max_generations must be at least 1".into());
        }
        if self.seeding_attempt_factor == 0 {
            return Err("seeding_attempt_factor must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err("crossover_rate must lie in [0, 1]".into());
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err("mutation_rate must lie in [0, 1]".into());
        }
        if let Selection::Tournament(0) = self.selection {
            return Err("tournament size must be at least 1".into());
        }
        Ok(())
    }
}

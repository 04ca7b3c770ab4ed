//! Optimizer configuration.

use serde::{Deserialize, Serialize};

use crate::evaluation::{ChemistryConfig, FitnessConfig};
use crate::ga::GaConfig;
use crate::scoring::ScoringConfig;

/// Every tunable of a team optimization, in one serializable value.
///
/// # Examples
///
/// ```
/// use squad_ga::search::OptimizerConfig;
///
/// let config: OptimizerConfig =
///     serde_json::from_str(r#"{"ga": {"max_generations": 20, "seed": 3}}"#).unwrap();
/// assert_eq!(config.ga.max_generations, 20);
/// assert_eq!(config.ga.population_size, 50);
/// assert!(!config.league_prefilter);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    pub ga: GaConfig,
    pub scoring: ScoringConfig,
    pub chemistry: ChemistryConfig,
    pub fitness: FitnessConfig,
    /// Restrict the pool to the leagues named in a quota map.
    ///
    /// Off by default. Quotas are scored as penalties either way; turning
    /// this on can leave a role with no eligible candidate.
    pub league_prefilter: bool,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            ga: GaConfig::default(),
            scoring: ScoringConfig::default(),
            chemistry: ChemistryConfig::default(),
            fitness: FitnessConfig::default(),
            league_prefilter: false,
        }
    }
}

impl OptimizerConfig {
    pub fn with_ga(mut self, ga: GaConfig) -> Self {
        self.ga = ga;
        self
    }

    pub fn with_scoring(mut self, scoring: ScoringConfig) -> Self {
        self.scoring = scoring;
        self
    }

    pub fn with_chemistry(mut self, chemistry: ChemistryConfig) -> Self {
        self.chemistry = chemistry;
        self
    }

    pub fn with_fitness(mut self, fitness: FitnessConfig) -> Self {
        self.fitness = fitness;
        self
    }

    pub fn with_league_prefilter(mut self, enabled: bool) -> Self {
        self.league_prefilter = enabled;
        self
    }

    /// Shorthand for `self.ga.seed = Some(seed)`.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.ga.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        self.ga.validate()?;
        self.scoring.validate()?;
        self.chemistry.validate()?;
        self.fitness.validate()
    }
}

//! Request entry point.
//!
//! [`TeamOptimizer`] wires the pieces together for one request:
//! constraint filtering → seeding → genetic search → reporting.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use rand::Rng;

use super::config::OptimizerConfig;
use super::error::OptimizeError;
use super::problem::TeamProblem;
use super::result::{chemistry_points, TeamSelection};
use super::seeding::PopulationInitializer;
use crate::evaluation::{ChemistryModel, FitnessEvaluator};
use crate::ga::{GaRunner, StopReason};
use crate::random::create_rng;
use crate::roster::{Catalog, ConstraintFilter, Constraints};

/// Selects the best five-role team for a request.
///
/// # Usage
///
/// ```
/// use squad_ga::roster::{Candidate, Catalog, Constraints, Role};
/// use squad_ga::search::{OptimizerConfig, TeamOptimizer};
///
/// let candidates = vec![
///     Candidate::new(1, "ace").with_roles(&[Role::Duelist]),
///     Candidate::new(2, "scout").with_roles(&[Role::Initiator]),
///     Candidate::new(3, "smokes").with_roles(&[Role::Controller]),
///     Candidate::new(4, "anchor").with_roles(&[Role::Sentinel]),
///     Candidate::new(5, "swiss").with_roles(&[Role::Duelist, Role::Controller]),
/// ];
///
/// let optimizer = TeamOptimizer::new(OptimizerConfig::default().with_seed(1)).unwrap();
/// let catalog = optimizer.prepare_catalog(Catalog::new(candidates));
/// let selection = optimizer.optimize(&catalog, &Constraints::default()).unwrap();
/// assert_eq!(selection.member(Role::Flex).handle, "swiss");
/// ```
#[derive(Debug, Clone)]
pub struct TeamOptimizer {
    config: OptimizerConfig,
}

impl TeamOptimizer {
    pub fn new(config: OptimizerConfig) -> Result<Self, OptimizeError> {
        config.validate().map_err(OptimizeError::InvalidConfig)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Derives roles, normalizes metrics and scores every candidate.
    ///
    /// Run once per catalog; the result is shared read-only by requests.
    pub fn prepare_catalog(&self, catalog: Catalog) -> Catalog {
        catalog.prepare(&self.config.scoring)
    }

    /// Runs one optimization with a generator built from the configured
    /// seed.
    pub fn optimize(&self, catalog: &Catalog, constraints: &Constraints) -> Result<TeamSelection, OptimizeError> {
        self.optimize_with_cancel(catalog, constraints, None)
    }

    /// Like [`optimize`](Self::optimize), checking `cancel` once per
    /// generation.
    pub fn optimize_with_cancel(
        &self,
        catalog: &Catalog,
        constraints: &Constraints,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<TeamSelection, OptimizeError> {
        let mut rng = create_rng(self.config.ga.seed.unwrap_or_else(rand::random));
        self.optimize_with_rng(catalog, constraints, &mut rng, cancel)
    }

    /// Runs one optimization drawing all randomness from `rng`.
    ///
    /// `catalog` must already be prepared; see
    /// [`prepare_catalog`](Self::prepare_catalog).
    #[tracing::instrument(
        level = "info",
        skip_all,
        fields(catalog_size = catalog.len(), mandatory = constraints.player.len())
    )]
    pub fn optimize_with_rng<R: Rng>(
        &self,
        catalog: &Catalog,
        constraints: &Constraints,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<TeamSelection, OptimizeError> {
        let pool = ConstraintFilter::new(self.config.league_prefilter).eligible_pool(catalog, constraints);
        if pool.is_empty() {
            tracing::warn!("no candidate passed constraint filtering");
            return Err(OptimizeError::CatalogEmpty);
        }

        let absent: Vec<&str> = constraints
            .player
            .iter()
            .filter(|h| pool.find_handle(h).is_none())
            .map(String::as_str)
            .collect();
        if !absent.is_empty() {
            tracing::debug!(?absent, "mandatory handles not in catalog");
        }
        tracing::debug!(pool_size = pool.len(), "eligible pool built");

        let evaluator = FitnessEvaluator::new(
            self.config.fitness,
            ChemistryModel::new(self.config.chemistry),
            constraints,
        );
        let problem = TeamProblem::new(PopulationInitializer::new(pool, constraints), evaluator);

        let result = GaRunner::run_with_rng(&problem, &self.config.ga, rng, cancel)?;
        match result.stop_reason {
            StopReason::MaxGenerations => {}
            reason => tracing::warn!(?reason, generations = result.generations, "search ended early"),
        }

        let fitness = problem.evaluator().breakdown(&result.best);
        let chemistry_score = chemistry_points(fitness.chemistry);
        tracing::info!(
            stop_reason = ?result.stop_reason,
            generations = result.generations,
            best_fitness = fitness.fitness,
            chemistry_score,
            "team selected"
        );

        Ok(TeamSelection {
            team: result.best,
            chemistry_score,
            fitness,
            generations: result.generations,
            stop_reason: result.stop_reason,
            fitness_history: result.fitness_history,
        })
    }
}

//! Genetic team search.
//!
//! [`TeamOptimizer`] is the entry point. It filters the catalog into an
//! eligible pool, seeds teams with the [`PopulationInitializer`] and evolves
//! them with the generic [`GaRunner`](crate::ga::GaRunner) through
//! [`TeamProblem`].

mod config;
mod error;
mod optimizer;
mod problem;
mod result;
mod seeding;

pub use config::OptimizerConfig;
pub use error::OptimizeError;
pub use optimizer::TeamOptimizer;
pub use problem::{crossover_teams, mutate_team, TeamProblem};
pub use result::{MemberRecord, SelectionReport, TeamSelection};
pub use seeding::{PopulationInitializer, SeedingIssue};

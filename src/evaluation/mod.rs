//! Team evaluation: chemistry and penalized fitness.

mod chemistry;
mod fitness;

pub use chemistry::{ChemistryConfig, ChemistryModel};
pub use fitness::{FitnessBreakdown, FitnessConfig, FitnessEvaluator, PenaltyConfig};

//! Candidate scoring.
//!
//! Runs once per catalog, before any search:
//!
//! 1. [`derive_missing_roles`]: role lists from agent usage
//! 2. [`normalize_metrics`]: raw metrics rescaled to `[0, 1]`
//! 3. [`score_candidates`]: per-role suitability scores
//!
//! [`Catalog::prepare`](crate::roster::Catalog::prepare) chains the three.

mod classify;
mod config;
mod normalize;
mod score;

pub use classify::{derive_missing_roles, derive_roles};
pub use config::{AgentRoles, LeagueWeights, RoleWeights, ScoringConfig};
pub use normalize::normalize_metrics;
pub use score::{role_score, score_candidates};

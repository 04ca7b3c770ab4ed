use crate::ga::{GaError, StopReason};

use super::seeding::SeedingIssue;

/// Failure outcomes of a team optimization.
///
/// Soft constraint violations are never errors; they only lower fitness.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OptimizeError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// No candidate survived constraint filtering.
    #[error("eligible pool is empty")]
    CatalogEmpty,

    /// Not a single team could be seeded.
    #[error("could not seed any team: {issue}")]
    SeedingFailed { issue: SeedingIssue },

    /// The search stopped before any team was evaluated.
    #[error("search ended ({reason:?}) without a team")]
    NoTeamFound { reason: StopReason },
}

impl From<GaError<SeedingIssue>> for OptimizeError {
    fn from(err: GaError<SeedingIssue>) -> Self {
        match err {
            GaError::InvalidConfig(msg) => OptimizeError::InvalidConfig(msg),
            GaError::SeedingFailed { last_issue, .. } => OptimizeError::SeedingFailed {
                issue: last_issue.unwrap_or(SeedingIssue::Exhausted),
            },
            GaError::NoBest { reason } => OptimizeError::NoTeamFound { reason },
        }
    }
}

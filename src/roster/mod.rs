//! Team-selection data model.
//!
//! - [`Candidate`]: an immutable, scoreable individual
//! - [`Catalog`]: every candidate available to a run
//! - [`Team`] / [`Slot`]: five role-tagged candidate snapshots
//! - [`Constraints`]: per-request league, region and mandatory-member rules
//! - [`ConstraintFilter`]: derives the [`EligiblePool`] for a request

mod candidate;
mod catalog;
mod constraints;
mod filter;
mod role;
mod team;

pub use candidate::{Candidate, CandidateId, Metric, Metrics, PastTeam};
pub use catalog::{Catalog, CatalogError};
pub use constraints::{Constraints, LeagueQuota, RegionConstraint};
pub use filter::{ConstraintFilter, EligiblePool};
pub use role::{ParseRoleError, Role};
pub use team::{Slot, Team, TeamError, TEAM_SIZE};

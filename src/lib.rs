//! Constraint-aware five-role team selection.
//!
//! Picks a team of five distinct candidates, one per role (Duelist,
//! Initiator, Controller, Sentinel, Flex), maximizing
//!
//! ```text
//! fitness = α · Σ role_score + β · chemistry / 100 − γ · penalties
//! ```
//!
//! with a seeded genetic search. League quotas, region diversity and
//! mandatory members are soft constraints scored as penalties; only a role
//! that nobody can fill is a hard failure.
//!
//! # Modules
//!
//! - [`roster`]: candidates, catalog, teams, constraints and pool filtering
//! - [`scoring`]: metric normalization, role derivation and role scores
//! - [`evaluation`]: chemistry and penalized fitness
//! - [`ga`]: a generic genetic algorithm engine
//! - [`search`]: the team problem and the [`TeamOptimizer`] entry point
//! - [`random`]: seeded generators for reproducible runs
//!
//! # Example
//!
//! ```
//! use squad_ga::{Catalog, Constraints, OptimizerConfig, TeamOptimizer};
//!
//! let json = r#"[
//!     {"player_id": 1, "handle": "a", "roles": ["Duelist"], "acs": 250.0},
//!     {"player_id": 2, "handle": "b", "roles": ["Initiator"], "acs": 210.0},
//!     {"player_id": 3, "handle": "c", "roles": ["Controller"], "acs": 190.0},
//!     {"player_id": 4, "handle": "d", "roles": ["Sentinel"], "acs": 200.0},
//!     {"player_id": 5, "handle": "e", "roles": ["Duelist", "Sentinel"], "acs": 230.0},
//!     {"player_id": 6, "handle": "f", "roles": ["Initiator", "Controller"], "acs": 180.0}
//! ]"#;
//!
//! let optimizer = TeamOptimizer::new(OptimizerConfig::default().with_seed(42)).unwrap();
//! let catalog = optimizer.prepare_catalog(Catalog::from_json_str(json).unwrap());
//! let selection = optimizer.optimize(&catalog, &Constraints::default()).unwrap();
//!
//! let report = serde_json::to_value(selection.report()).unwrap();
//! assert!(report["chemistry_score"].as_u64().unwrap() <= 100);
//! ```

pub mod evaluation;
pub mod ga;
pub mod random;
pub mod roster;
pub mod scoring;
pub mod search;

pub use roster::{Candidate, Catalog, Constraints, Role, Team};
pub use search::{OptimizeError, OptimizerConfig, TeamOptimizer, TeamSelection};

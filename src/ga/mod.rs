//! Genetic Algorithm engine.
//!
//! A generic GA built on trait-based abstractions. A problem plugs in by
//! implementing [`GaProblem`], which specifies how to seed, evaluate,
//! validate, recombine and mutate individuals. Team selection in
//! [`crate::search`] is one such problem.
//!
//! # Core Traits
//!
//! - [`Individual`]: A candidate solution carrying its fitness
//! - [`GaProblem`]: Problem definition (seeding, evaluation, operators)
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters
//! - [`Selection`] / [`ParentSampler`]: Per-generation parent sampling
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`] / [`GaError`]: Outcome of a run
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{GaError, GaResult, GaRunner, StopReason};
pub use selection::{ParentSampler, Selection};
pub use types::{Fitness, GaProblem, Individual};

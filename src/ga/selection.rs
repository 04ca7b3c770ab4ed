//! Parent selection.
//!
//! Selection runs once per generation over a fully evaluated population: a
//! [`ParentSampler`] is built from the complete fitness vector and then
//! queried for every breeding event of that generation.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::types::{Fitness, Individual};

/// Selection strategy for choosing parents.
///
/// All strategies assume **maximization** (higher fitness = better).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Selection {
    /// Fitness-proportionate (roulette wheel) selection.
    ///
    /// The probability of picking an individual is its fitness divided by
    /// the population total. When that total is not positive, every member
    /// is equally likely. Otherwise negative members get no weight.
    ///
    /// Sampling walks an explicit prefix-sum array with one uniform draw,
    /// so results depend only on the injected generator.
    #[default]
    FitnessProportionate,

    /// Tournament selection: pick `k` individuals at random, keep the best.
    Tournament(usize),
}

impl Selection {
    /// Prepares a sampler for one generation.
    ///
    /// Returns `None` when the population has fewer than two members, in
    /// which case no breeding can happen.
    pub fn sampler<I: Individual>(&self, population: &[I]) -> Option<ParentSampler> {
        if population.len() < 2 {
            return None;
        }

        let fitness: Vec<f64> = population.iter().map(|ind| ind.fitness().to_f64()).collect();
        let kind = match self {
            Selection::FitnessProportionate => proportionate(&fitness),
            Selection::Tournament(k) => SamplerKind::Tournament {
                fitness,
                k: (*k).max(1),
            },
        };
        Some(ParentSampler { kind })
    }
}

/// Per-generation parent sampler produced by [`Selection::sampler`].
#[derive(Debug, Clone)]
pub struct ParentSampler {
    kind: SamplerKind,
}

#[derive(Debug, Clone)]
enum SamplerKind {
    Wheel { prefix: Vec<f64> },
    Uniform { n: usize },
    Tournament { fitness: Vec<f64>, k: usize },
}

fn proportionate(fitness: &[f64]) -> SamplerKind {
    let total: f64 = fitness.iter().filter(|f| f.is_finite()).sum();
    if !(total.is_finite() && total > 0.0) {
        return SamplerKind::Uniform { n: fitness.len() };
    }

    let mut prefix = Vec::with_capacity(fitness.len());
    let mut acc = 0.0;
    for &f in fitness {
        if f.is_finite() && f > 0.0 {
            acc += f;
        }
        prefix.push(acc);
    }
    SamplerKind::Wheel { prefix }
}

impl ParentSampler {
    /// Draws one parent index.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match &self.kind {
            SamplerKind::Wheel { prefix } => {
                let n = prefix.len();
                let total = prefix[n - 1];
                let threshold = rng.random_range(0.0..total);
                prefix.partition_point(|&c| c <= threshold).min(n - 1)
            }
            SamplerKind::Uniform { n } => rng.random_range(0..*n),
            SamplerKind::Tournament { fitness, k } => {
                let n = fitness.len();
                let mut best_idx = rng.random_range(0..n);
                for _ in 1..*k {
                    let idx = rng.random_range(0..n);
                    if fitness[idx] > fitness[best_idx] {
                        best_idx = idx;
                    }
                }
                best_idx
            }
        }
    }

    /// Draws two parents independently (with replacement).
    pub fn sample_pair<R: Rng>(&self, rng: &mut R) -> (usize, usize) {
        let first = self.sample(rng);
        let second = self.sample(rng);
        (first, second)
    }

    /// Whether the sampler fell back to uniform probabilities.
    pub fn is_uniform(&self) -> bool {
        matches!(self.kind, SamplerKind::Uniform { .. })
    }
}

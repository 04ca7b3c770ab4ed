//! The read-only candidate catalog.

use std::io::Read;

use super::candidate::Candidate;
use crate::scoring::{self, ScoringConfig};

/// Errors raised while decoding upstream records.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("catalog I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// All candidates available to a run.
///
/// Build it once, [`prepare`](Catalog::prepare) it once, then share it
/// read-only across requests.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    candidates: Vec<Candidate>,
}

impl Catalog {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }

    /// Decodes a JSON array of upstream player records.
    pub fn from_json_str(s: &str) -> Result<Self, CatalogError> {
        Ok(Self::new(serde_json::from_str(s)?))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        Ok(Self::new(serde_json::from_reader(reader)?))
    }

    /// Derives missing role lists, normalizes metrics and computes role
    /// scores, in that order.
    pub fn prepare(mut self, config: &ScoringConfig) -> Self {
        scoring::derive_missing_roles(&mut self.candidates, &config.agent_roles);
        if config.normalize {
            scoring::normalize_metrics(&mut self.candidates);
        }
        scoring::score_candidates(&mut self.candidates, config);
        self
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.candidates.iter()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn find_handle(&self, handle: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.handle == handle)
    }
}

impl FromIterator<Candidate> for Catalog {
    fn from_iter<T: IntoIterator<Item = Candidate>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

//! Eligible pool construction.
//!
//! The pool starts from the whole catalog and is narrowed by league
//! membership and by the region allow-list. Mandatory candidates are then
//! added back regardless of those filters, without duplicating anyone.

use std::collections::BTreeSet;

use super::candidate::Candidate;
use super::catalog::Catalog;
use super::constraints::Constraints;

/// Candidates a request may build teams from.
///
/// Borrows from the catalog; teams take their own copies.
#[derive(Debug, Clone)]
pub struct EligiblePool<'a> {
    members: Vec<&'a Candidate>,
}

impl<'a> EligiblePool<'a> {
    pub fn members(&self) -> &[&'a Candidate] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn find_handle(&self, handle: &str) -> Option<&'a Candidate> {
        self.members.iter().copied().find(|c| c.handle == handle)
    }
}

/// Derives the eligible pool from request constraints.
///
/// The default filter leaves league quotas to the penalty terms.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstraintFilter {
    league_prefilter: bool,
}

impl ConstraintFilter {
    /// `league_prefilter` controls whether a league quota map also restricts
    /// the pool to its leagues. Quotas are always enforced as penalties.
    pub fn new(league_prefilter: bool) -> Self {
        Self { league_prefilter }
    }

    pub fn eligible_pool<'a>(&self, catalog: &'a Catalog, constraints: &Constraints) -> EligiblePool<'a> {
        let leagues = constraints.league_quotas().filter(|_| self.league_prefilter);
        let regions = constraints.region_list();

        let mut members: Vec<&Candidate> = catalog
            .iter()
            .filter(|c| leagues.is_none_or(|l| l.contains_key(&c.league)))
            .filter(|c| regions.is_none_or(|r| r.contains(&c.current_region)))
            .collect();

        if !constraints.player.is_empty() {
            let mut seen: BTreeSet<_> = members.iter().map(|c| c.id).collect();
            for c in catalog.iter().filter(|c| constraints.is_mandatory(&c.handle)) {
                if seen.insert(c.id) {
                    members.push(c);
                }
            }
        }

        EligiblePool { members }
    }
}

//! Initial team construction.

use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::roster::{Candidate, CandidateId, Constraints, EligiblePool, Role, Slot, Team, TeamError};

/// Why one seeding attempt produced no team.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeedingIssue {
    /// A mandatory candidate found none of its roles free.
    #[error("mandatory candidate {handle} cannot be placed in any free role")]
    MandatoryUnassignable { handle: String },

    #[error("no candidate available for role {role}")]
    RoleUnfillable { role: Role },

    #[error("assembled team failed verification: {0}")]
    InvalidTeam(#[from] TeamError),

    /// Every attempt failed without a more specific reason.
    #[error("no structurally valid team was produced")]
    Exhausted,
}

/// Builds random, greedy-filled teams from an eligible pool.
///
/// Mandatory candidates claim their roles first, in pool order. The
/// remaining roles go to the best-scoring filler after a shuffle, so
/// equally scored candidates are picked in random order.
#[derive(Debug, Clone)]
pub struct PopulationInitializer<'a> {
    pool: EligiblePool<'a>,
    mandatory: Vec<&'a Candidate>,
}

impl<'a> PopulationInitializer<'a> {
    pub fn new(pool: EligiblePool<'a>, constraints: &Constraints) -> Self {
        let mut seen = BTreeSet::new();
        let mandatory = pool
            .members()
            .iter()
            .copied()
            .filter(|c| constraints.is_mandatory(&c.handle))
            .filter(|c| seen.insert(c.id))
            .collect();
        Self { pool, mandatory }
    }

    pub fn pool(&self) -> &EligiblePool<'a> {
        &self.pool
    }

    /// Mandatory candidates present in the pool, deduplicated.
    pub fn mandatory(&self) -> &[&'a Candidate] {
        &self.mandatory
    }

    /// Runs one seeding attempt.
    pub fn build_team<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Team, SeedingIssue> {
        let mut assigned: [Option<&Candidate>; Role::COUNT] = [None; Role::COUNT];
        let mut taken: BTreeSet<CandidateId> = BTreeSet::new();

        for &c in &self.mandatory {
            let listed = c
                .roles
                .iter()
                .copied()
                .find(|r| assigned[r.index()].is_none() && c.can_fill(*r));
            let role = listed
                .or_else(|| (assigned[Role::Flex.index()].is_none() && c.can_fill(Role::Flex)).then_some(Role::Flex))
                .ok_or_else(|| SeedingIssue::MandatoryUnassignable {
                    handle: c.handle.clone(),
                })?;
            assigned[role.index()] = Some(c);
            taken.insert(c.id);
        }

        let mut rest: Vec<&Candidate> = self
            .pool
            .members()
            .iter()
            .copied()
            .filter(|c| !taken.contains(&c.id))
            .collect();
        rest.shuffle(rng);

        for role in Role::ALL {
            if assigned[role.index()].is_some() {
                continue;
            }
            let pick = best_filler(&rest, role, &taken).ok_or(SeedingIssue::RoleUnfillable { role })?;
            taken.insert(pick.id);
            assigned[role.index()] = Some(pick);
        }

        let slots = Role::ALL
            .into_iter()
            .zip(assigned)
            .filter_map(|(role, c)| c.map(|c| Slot::assign(c, role)))
            .collect();
        Ok(Team::new(slots)?)
    }
}

/// Highest-scoring untaken candidate for `role`; ties keep the earliest.
fn best_filler<'a>(candidates: &[&'a Candidate], role: Role, taken: &BTreeSet<CandidateId>) -> Option<&'a Candidate> {
    candidates
        .iter()
        .copied()
        .filter(|c| !taken.contains(&c.id) && c.can_fill(role))
        .fold(None, |best: Option<&Candidate>, c| match best {
            Some(b) if score(c, role) > score(b, role) => Some(c),
            Some(b) => Some(b),
            None => Some(c),
        })
}

fn score(c: &Candidate, role: Role) -> f64 {
    c.role_score(role).unwrap_or(0.0)
}

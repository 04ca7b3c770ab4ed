//! Teams of five role-tagged candidate snapshots.

use std::collections::BTreeSet;

use serde::Serialize;

use super::candidate::{Candidate, CandidateId};
use super::role::Role;
use crate::ga::Individual;

/// Number of members in a team.
pub const TEAM_SIZE: usize = Role::COUNT;

/// One team position: a candidate snapshot tagged with its assigned role.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slot {
    pub candidate: Candidate,
    pub assigned_role: Role,
}

impl Slot {
    /// Takes an independent copy of `candidate` for `role`.
    pub fn assign(candidate: &Candidate, role: Role) -> Self {
        Self {
            candidate: candidate.clone(),
            assigned_role: role,
        }
    }
}

/// Why a set of slots does not form a team.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TeamError {
    #[error("a team needs {TEAM_SIZE} members, got {0}")]
    WrongSize(usize),
    #[error("candidate {0} appears more than once")]
    DuplicateCandidate(CandidateId),
    #[error("role {0} is assigned more than once")]
    DuplicateRole(Role),
    #[error("role {0} is not assigned")]
    MissingRole(Role),
}

/// A structurally valid team.
///
/// Invariants, checked by [`Team::new`] and preserved by every mutator:
///
/// - exactly [`TEAM_SIZE`] slots, in [`Role::ALL`] order, so slot `i` is
///   always assigned `Role::ALL[i]`;
/// - the candidate identities are pairwise distinct.
///
/// Teams own their candidates; changing one team never affects another
/// team or the catalog.
#[derive(Debug, Clone)]
pub struct Team {
    slots: [Slot; TEAM_SIZE],
    fitness: f64,
}

impl Team {
    /// Validates `slots` and orders them by role.
    pub fn new(slots: Vec<Slot>) -> Result<Self, TeamError> {
        check_slots(&slots)?;
        let mut slots: [Slot; TEAM_SIZE] = slots
            .try_into()
            .map_err(|v: Vec<Slot>| TeamError::WrongSize(v.len()))?;
        slots.sort_by_key(|s| s.assigned_role);
        Ok(Self {
            slots,
            fitness: f64::NEG_INFINITY,
        })
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// The slot holding `role`.
    pub fn slot(&self, role: Role) -> &Slot {
        &self.slots[role.index()]
    }

    pub fn member(&self, role: Role) -> &Candidate {
        &self.slot(role).candidate
    }

    pub fn members(&self) -> impl Iterator<Item = &Candidate> {
        self.slots.iter().map(|s| &s.candidate)
    }

    pub fn contains(&self, id: CandidateId) -> bool {
        self.slots.iter().any(|s| s.candidate.id == id)
    }

    pub fn contains_handle(&self, handle: &str) -> bool {
        self.slots.iter().any(|s| s.candidate.handle == handle)
    }

    /// Re-checks the structural invariants.
    pub fn is_structurally_valid(&self) -> bool {
        check_slots(&self.slots).is_ok()
            && self
                .slots
                .iter()
                .zip(Role::ALL)
                .all(|(s, r)| s.assigned_role == r)
    }

    /// Swaps the occupants at `index` between two teams.
    ///
    /// Role tags stay with the position. The swap is refused, leaving both
    /// teams unchanged, if either incoming candidate is already a member of
    /// the receiving team. Returns whether the swap happened.
    pub fn exchange_occupants(&mut self, other: &mut Team, index: usize) -> bool {
        let incoming = other.slots[index].candidate.id;
        let outgoing = self.slots[index].candidate.id;
        if self.contains(incoming) || other.contains(outgoing) {
            return false;
        }
        std::mem::swap(
            &mut self.slots[index].candidate,
            &mut other.slots[index].candidate,
        );
        self.fitness = f64::NEG_INFINITY;
        other.fitness = f64::NEG_INFINITY;
        true
    }

    /// Puts a copy of `candidate` into slot `index`, keeping its role.
    ///
    /// Refused if the candidate is already a member. Returns whether the
    /// replacement happened.
    pub fn replace_occupant(&mut self, index: usize, candidate: &Candidate) -> bool {
        if self.contains(candidate.id) {
            return false;
        }
        let role = self.slots[index].assigned_role;
        self.slots[index] = Slot::assign(candidate, role);
        self.fitness = f64::NEG_INFINITY;
        true
    }

    /// Member identities in slot order.
    pub fn ids(&self) -> [CandidateId; TEAM_SIZE] {
        std::array::from_fn(|i| self.slots[i].candidate.id)
    }
}

impl Individual for Team {
    type Fitness = f64;

    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}

fn check_slots(slots: &[Slot]) -> Result<(), TeamError> {
    if slots.len() != TEAM_SIZE {
        return Err(TeamError::WrongSize(slots.len()));
    }

    let mut ids = BTreeSet::new();
    let mut roles = BTreeSet::new();
    for slot in slots {
        if !ids.insert(slot.candidate.id) {
            return Err(TeamError::DuplicateCandidate(slot.candidate.id));
        }
        if !roles.insert(slot.assigned_role) {
            return Err(TeamError::DuplicateRole(slot.assigned_role));
        }
    }
    match Role::ALL.into_iter().find(|r| !roles.contains(r)) {
        Some(missing) => Err(TeamError::MissingRole(missing)),
        None => Ok(()),
    }
}

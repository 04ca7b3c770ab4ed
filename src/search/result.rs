//! Optimization output.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::evaluation::FitnessBreakdown;
use crate::ga::StopReason;
use crate::roster::{Candidate, CandidateId, Metrics, Role, Team};

/// The best team found, with its scores and run statistics.
#[derive(Debug, Clone)]
pub struct TeamSelection {
    pub team: Team,
    /// Chemistry rounded to an integer in `[0, 100]`.
    pub chemistry_score: u8,
    pub fitness: FitnessBreakdown,
    /// Generations evaluated.
    pub generations: usize,
    pub stop_reason: StopReason,
    /// Best-ever fitness after each evaluated generation.
    pub fitness_history: Vec<f64>,
}

impl TeamSelection {
    pub fn member(&self, role: Role) -> &Candidate {
        self.team.member(role)
    }

    /// Role name → public member record, plus `chemistry_score`.
    ///
    /// ```ignore
    /// let json = serde_json::to_string(&selection.report())?;
    /// // {"Duelist": {"handle": "...", ...}, ..., "chemistry_score": 64}
    /// ```
    pub fn report(&self) -> SelectionReport {
        let roles = self
            .team
            .slots()
            .iter()
            .map(|s| (s.assigned_role, MemberRecord::new(&s.candidate, s.assigned_role)))
            .collect();
        SelectionReport {
            roles,
            chemistry_score: self.chemistry_score,
        }
    }
}

/// Serializable summary of a [`TeamSelection`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionReport {
    #[serde(flatten)]
    pub roles: BTreeMap<Role, MemberRecord>,
    pub chemistry_score: u8,
}

/// Public fields of a selected candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberRecord {
    pub handle: String,
    pub player_id: CandidateId,
    pub league: String,
    pub current_region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    pub role_score: f64,
    pub metrics: Metrics,
}

impl MemberRecord {
    fn new(c: &Candidate, role: Role) -> Self {
        Self {
            handle: c.handle.clone(),
            player_id: c.id,
            league: c.league.clone(),
            current_region: c.current_region.clone(),
            nationality: c.nationality.clone(),
            role_score: c.role_score(role).unwrap_or(0.0),
            metrics: c.metrics,
        }
    }
}

/// Rounds a chemistry value onto the integer report scale.
pub(crate) fn chemistry_points(chemistry: f64) -> u8 {
    if chemistry.is_nan() {
        return 0;
    }
    chemistry.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Slot;

    fn selection() -> TeamSelection {
        let slots = Role::ALL
            .into_iter()
            .enumerate()
            .map(|(i, role)| {
                let c = Candidate::new(i as u64 + 10, format!("h{i}"))
                    .with_league("vct-international")
                    .with_region("EU")
                    .with_role_score(role, 0.5);
                Slot::assign(&c, role)
            })
            .collect();
        TeamSelection {
            team: Team::new(slots).unwrap(),
            chemistry_score: 36,
            fitness: FitnessBreakdown {
                team_score: 2.5,
                chemistry: 36.4,
                penalties: 0.0,
                fitness: 1.86,
            },
            generations: 50,
            stop_reason: StopReason::MaxGenerations,
            fitness_history: vec![1.86],
        }
    }

    #[test]
    fn test_report_maps_every_role() {
        let report = selection().report();
        assert_eq!(report.roles.len(), 5);
        assert_eq!(report.roles[&Role::Controller].handle, "h2");
        assert_eq!(report.roles[&Role::Flex].player_id, 14);
        assert_eq!(report.roles[&Role::Flex].role_score, 0.5);
    }

    #[test]
    fn test_report_json_shape() {
        let value = serde_json::to_value(selection().report()).unwrap();
        assert_eq!(value["chemistry_score"], 36);
        assert_eq!(value["Duelist"]["handle"], "h0");
        assert_eq!(value["Sentinel"]["current_region"], "EU");
        assert!(value["Initiator"].get("nationality").is_none());
        assert!(value["Flex"]["metrics"]["acs"].is_number());
    }

    #[test]
    fn test_chemistry_points() {
        assert_eq!(chemistry_points(36.4), 36);
        assert_eq!(chemistry_points(99.5), 100);
        assert_eq!(chemistry_points(120.0), 100);
        assert_eq!(chemistry_points(-3.0), 0);
        assert_eq!(chemistry_points(f64::NAN), 0);
    }
}

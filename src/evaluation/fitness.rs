//! Team fitness: weighted role scores and chemistry, minus penalties.
//!
//! ```text
//! fitness = team_weight · Σ role_score
//!         + chemistry_weight · chemistry / 100
//!         − penalty_weight · penalties
//! ```
//!
//! Soft constraints (league quotas, region diversity, mandatory members)
//! only ever add penalties; they never reject a team.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::chemistry::ChemistryModel;
use crate::roster::{Constraints, Role, Slot, Team, TEAM_SIZE};

/// Penalty charged per violation unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PenaltyConfig {
    /// Per role absent from the team.
    pub missing_role: f64,
    /// Per member below a league minimum or above its maximum.
    pub league_quota: f64,
    /// Per distinct region short of the required diversity.
    pub region_diversity: f64,
    /// Per mandatory handle absent from the team.
    pub missing_mandatory: f64,
}

impl Default for PenaltyConfig {
    fn default() -> Self {
        Self {
            missing_role: 10.0,
            league_quota: 25.0,
            region_diversity: 25.0,
            missing_mandatory: 25.0,
        }
    }
}

/// Objective coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitnessConfig {
    pub team_weight: f64,
    pub chemistry_weight: f64,
    pub penalty_weight: f64,
    pub penalties: PenaltyConfig,
}

impl Default for FitnessConfig {
    fn default() -> Self {
        Self {
            team_weight: 0.7,
            chemistry_weight: 0.3,
            penalty_weight: 1.0,
            penalties: PenaltyConfig::default(),
        }
    }
}

impl FitnessConfig {
    pub fn with_coefficients(mut self, team: f64, chemistry: f64, penalty: f64) -> Self {
        self.team_weight = team;
        self.chemistry_weight = chemistry;
        self.penalty_weight = penalty;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        let p = &self.penalties;
        let all = [
            self.team_weight,
            self.chemistry_weight,
            self.penalty_weight,
            p.missing_role,
            p.league_quota,
            p.region_diversity,
            p.missing_mandatory,
        ];
        if all.iter().any(|v| !v.is_finite()) {
            return Err("fitness coefficients must be finite".into());
        }
        if all[2..].iter().any(|v| *v < 0.0) {
            return Err("penalty weights must be non-negative".into());
        }
        Ok(())
    }
}

/// The parts that make up a fitness value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FitnessBreakdown {
    pub team_score: f64,
    /// Chemistry on the 0–100 scale.
    pub chemistry: f64,
    pub penalties: f64,
    pub fitness: f64,
}

/// Evaluates teams against one request's constraints.
///
/// Pure and read-only, so one evaluator can score a whole generation from
/// several threads.
#[derive(Debug, Clone)]
pub struct FitnessEvaluator<'a> {
    config: FitnessConfig,
    chemistry: ChemistryModel,
    constraints: &'a Constraints,
}

impl<'a> FitnessEvaluator<'a> {
    pub fn new(config: FitnessConfig, chemistry: ChemistryModel, constraints: &'a Constraints) -> Self {
        Self {
            config,
            chemistry,
            constraints,
        }
    }

    pub fn chemistry(&self) -> &ChemistryModel {
        &self.chemistry
    }

    /// `Σ role_score(candidate, assigned_role)`; unscored pairs add nothing.
    pub fn team_score(&self, slots: &[Slot]) -> f64 {
        slots
            .iter()
            .map(|s| s.candidate.role_score(s.assigned_role).unwrap_or(0.0))
            .sum()
    }

    /// Total penalty for a set of slots.
    ///
    /// Works on any slot list, including ones that would not pass
    /// [`Team::new`].
    pub fn penalties(&self, slots: &[Slot]) -> f64 {
        let p = &self.config.penalties;
        let mut total = 0.0;

        let roles: BTreeSet<Role> = slots.iter().map(|s| s.assigned_role).collect();
        let missing_roles = Role::ALL.iter().filter(|r| !roles.contains(r)).count();
        total += p.missing_role * missing_roles as f64;

        if let Some(quotas) = self.constraints.league_quotas() {
            let mut counts: BTreeMap<&str, u32> = BTreeMap::new();
            for s in slots {
                *counts.entry(s.candidate.league.as_str()).or_default() += 1;
            }
            for (league, quota) in quotas {
                let count = counts.get(league.as_str()).copied().unwrap_or(0);
                let max = quota.max_or(TEAM_SIZE as u32);
                if count < quota.min {
                    total += p.league_quota * f64::from(quota.min - count);
                }
                if count > max {
                    total += p.league_quota * f64::from(count - max);
                }
            }
        }

        if let Some(required) = self.constraints.region_diversity() {
            let distinct = slots
                .iter()
                .map(|s| s.candidate.current_region.as_str())
                .filter(|r| !r.is_empty())
                .collect::<BTreeSet<_>>()
                .len() as u32;
            if distinct < required {
                total += p.region_diversity * f64::from(required - distinct);
            }
        }

        let missing_mandatory = self
            .constraints
            .player
            .iter()
            .filter(|h| !slots.iter().any(|s| &s.candidate.handle == *h))
            .count();
        total += p.missing_mandatory * missing_mandatory as f64;

        total
    }

    pub fn breakdown(&self, team: &Team) -> FitnessBreakdown {
        let team_score = self.team_score(team.slots());
        let chemistry = self.chemistry.team_score(team);
        let penalties = self.penalties(team.slots());
        let c = &self.config;
        FitnessBreakdown {
            team_score,
            chemistry,
            penalties,
            fitness: c.team_weight * team_score + c.chemistry_weight * (chemistry / 100.0)
                - c.penalty_weight * penalties,
        }
    }

    pub fn fitness(&self, team: &Team) -> f64 {
        self.breakdown(team).fitness
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::ChemistryConfig;
    use crate::roster::{Candidate, LeagueQuota};

    fn scored(id: u64, league: &str, region: &str, role: Role, score: f64) -> Candidate {
        Candidate::new(id, format!("p{id}"))
            .with_league(league)
            .with_region(region)
            .with_role_score(role, score)
    }

    fn team(leagues: [&str; 5], regions: [&str; 5]) -> Team {
        let slots = Role::ALL
            .into_iter()
            .enumerate()
            .map(|(i, role)| Slot::assign(&scored(i as u64, leagues[i], regions[i], role, 1.0), role))
            .collect();
        Team::new(slots).unwrap()
    }

    fn uniform_team() -> Team {
        team(["X", "Y", "Y", "Y", "Y"], ["EU"; 5])
    }

    #[test]
    fn test_unconstrained_fitness() {
        let constraints = Constraints::default();
        let eval = FitnessEvaluator::new(FitnessConfig::default(), ChemistryModel::default(), &constraints);
        let t = uniform_team();

        let b = eval.breakdown(&t);
        assert!((b.team_score - 5.0).abs() < 1e-12);
        assert_eq!(b.penalties, 0.0);
        let expected = 0.7 * 5.0 + 0.3 * (b.chemistry / 100.0);
        assert!((b.fitness - expected).abs() < 1e-12);
    }

    #[test]
    fn test_unscored_assignment_contributes_nothing() {
        let constraints = Constraints::default();
        let eval = FitnessEvaluator::new(FitnessConfig::default(), ChemistryModel::default(), &constraints);
        let slots = vec![Slot::assign(&scored(1, "", "", Role::Duelist, 2.0), Role::Sentinel)];
        assert_eq!(eval.team_score(&slots), 0.0);
    }

    #[test]
    fn test_missing_roles_are_penalized() {
        let constraints = Constraints::default();
        let eval = FitnessEvaluator::new(FitnessConfig::default(), ChemistryModel::default(), &constraints);
        let slots: Vec<Slot> = uniform_team().slots()[..3].to_vec();
        assert!((eval.penalties(&slots) - 20.0).abs() < 1e-12);
        assert_eq!(eval.penalties(uniform_team().slots()), 0.0);
    }

    #[test]
    fn test_league_min_shortfall_is_linear() {
        let t = uniform_team();
        // One member from X. Each extra unit of `min` beyond it costs 25.
        for min in 1..=5u32 {
            let constraints = Constraints::default().with_league_quota("X", LeagueQuota::new(min, None));
            let eval = FitnessEvaluator::new(FitnessConfig::default(), ChemistryModel::default(), &constraints);
            let expected = 25.0 * f64::from(min - 1);
            assert!((eval.penalties(t.slots()) - expected).abs() < 1e-12, "min={min}");
        }
    }

    #[test]
    fn test_league_max_excess() {
        let constraints = Constraints::default().with_league_quota("Y", LeagueQuota::new(0, Some(2)));
        let eval = FitnessEvaluator::new(FitnessConfig::default(), ChemistryModel::default(), &constraints);
        assert!((eval.penalties(uniform_team().slots()) - 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_absent_league_counts_as_zero() {
        let constraints = Constraints::default().with_league_quota("Z", LeagueQuota::new(2, Some(2)));
        let eval = FitnessEvaluator::new(FitnessConfig::default(), ChemistryModel::default(), &constraints);
        assert!((eval.penalties(uniform_team().slots()) - 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_region_diversity_shortfall() {
        let constraints = Constraints::default().with_region_diversity(3);
        let eval = FitnessEvaluator::new(FitnessConfig::default(), ChemistryModel::default(), &constraints);

        assert!((eval.penalties(uniform_team().slots()) - 50.0).abs() < 1e-12);

        // Empty regions do not count as a region.
        let t = team(["X"; 5], ["EU", "NA", "", "", ""]);
        assert!((eval.penalties(t.slots()) - 25.0).abs() < 1e-12);

        let t = team(["X"; 5], ["EU", "NA", "AP", "", ""]);
        assert_eq!(eval.penalties(t.slots()), 0.0);
    }

    #[test]
    fn test_missing_mandatory_members() {
        let constraints = Constraints::default()
            .with_mandatory("p0")
            .with_mandatory("ghost")
            .with_mandatory("nobody");
        let eval = FitnessEvaluator::new(FitnessConfig::default(), ChemistryModel::default(), &constraints);
        assert!((eval.penalties(uniform_team().slots()) - 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_coefficients_are_configurable() {
        let constraints = Constraints::default().with_mandatory("ghost");
        let config = FitnessConfig::default().with_coefficients(1.0, 0.0, 2.0);
        let eval = FitnessEvaluator::new(
            config,
            ChemistryModel::new(ChemistryConfig::default()),
            &constraints,
        );
        assert!((eval.fitness(&uniform_team()) - (5.0 - 50.0)).abs() < 1e-12);
    }

    #[test]
    fn test_validate() {
        assert!(FitnessConfig::default().validate().is_ok());
        assert!(FitnessConfig::default().with_coefficients(0.7, 0.3, -1.0).validate().is_err());
        assert!(FitnessConfig::default().with_coefficients(f64::NAN, 0.3, 1.0).validate().is_err());
    }
}

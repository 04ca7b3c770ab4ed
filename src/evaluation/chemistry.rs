//! Pairwise team chemistry.

use serde::{Deserialize, Serialize};

use crate::roster::{Candidate, Team};

/// Synergy contributions for a pair of members.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChemistryConfig {
    /// Every pair earns this.
    pub base: f64,
    pub shared_nationality: f64,
    pub shared_region: f64,
    /// Both played for a team of the same name at some point.
    pub shared_past_team: f64,
}

impl Default for ChemistryConfig {
    fn default() -> Self {
        Self {
            base: 0.1,
            shared_nationality: 0.5,
            shared_region: 0.3,
            shared_past_team: 0.2,
        }
    }
}

impl ChemistryConfig {
    /// Value of a pair that earns every bonus.
    pub fn max_pair_value(&self) -> f64 {
        self.base + self.shared_nationality + self.shared_region + self.shared_past_team
    }

    pub fn validate(&self) -> Result<(), String> {
        let parts = [
            self.base,
            self.shared_nationality,
            self.shared_region,
            self.shared_past_team,
        ];
        if parts.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err("chemistry contributions must be finite and non-negative".into());
        }
        Ok(())
    }
}

/// Scores team composition on a 0–100 scale.
///
/// The score is the mean pair value over all unordered pairs, relative to
/// the best possible pair. It ignores assigned roles and member order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChemistryModel {
    config: ChemistryConfig,
}

impl ChemistryModel {
    pub fn new(config: ChemistryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ChemistryConfig {
        &self.config
    }

    pub fn pair_value(&self, a: &Candidate, b: &Candidate) -> f64 {
        let c = &self.config;
        let mut value = c.base;
        if matches!((&a.nationality, &b.nationality), (Some(x), Some(y)) if !x.is_empty() && x == y) {
            value += c.shared_nationality;
        }
        if !a.current_region.is_empty() && a.current_region == b.current_region {
            value += c.shared_region;
        }
        if a.shares_past_team(b) {
            value += c.shared_past_team;
        }
        value
    }

    /// Chemistry of an arbitrary group, in `[0, 100]`.
    ///
    /// The mean pair value is divided by [`ChemistryConfig::max_pair_value`]
    /// before scaling, so this is not a plain mean × 100: with the default
    /// bonuses a fully matched team scores 100, not 110. Groups with fewer
    /// than two members score `0.0`.
    pub fn score(&self, members: &[&Candidate]) -> f64 {
        let max_pair = self.config.max_pair_value();
        let mut total = 0.0;
        let mut pairs = 0usize;
        for (i, a) in members.iter().enumerate() {
            for b in &members[i + 1..] {
                total += self.pair_value(a, b);
                pairs += 1;
            }
        }
        if pairs == 0 || max_pair <= 0.0 {
            return 0.0;
        }
        (total / pairs as f64 / max_pair * 100.0).clamp(0.0, 100.0)
    }

    pub fn team_score(&self, team: &Team) -> f64 {
        let members: Vec<&Candidate> = team.members().collect();
        self.score(&members)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn member(id: u64, nat: &str, region: &str, past: &str) -> Candidate {
        let mut c = Candidate::new(id, format!("m{id}")).with_region(region);
        if !nat.is_empty() {
            c = c.with_nationality(nat);
        }
        if !past.is_empty() {
            c = c.with_past_team(past);
        }
        c
    }

    #[test]
    fn test_pair_value_bonuses() {
        let model = ChemistryModel::default();
        let a = member(1, "BR", "NA", "LOUD");
        let b = member(2, "BR", "NA", "LOUD");
        let c = member(3, "US", "EU", "");
        assert!((model.pair_value(&a, &b) - 1.1).abs() < 1e-12);
        assert!((model.pair_value(&a, &c) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_missing_fields_earn_no_bonus() {
        let model = ChemistryModel::default();
        let a = member(1, "", "", "");
        let b = member(2, "", "", "");
        assert!((model.pair_value(&a, &b) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_perfect_and_minimal_teams() {
        let model = ChemistryModel::default();
        let same: Vec<Candidate> = (0..5).map(|i| member(i, "KR", "AP", "DRX")).collect();
        let refs: Vec<&Candidate> = same.iter().collect();
        assert!((model.score(&refs) - 100.0).abs() < 1e-9);

        let apart: Vec<Candidate> = (0..5)
            .map(|i| member(i, &format!("n{i}"), &format!("r{i}"), ""))
            .collect();
        let refs: Vec<&Candidate> = apart.iter().collect();
        assert!((model.score(&refs) - 0.1 / 1.1 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_small_groups_score_zero() {
        let model = ChemistryModel::default();
        let a = member(1, "BR", "NA", "");
        assert_eq!(model.score(&[]), 0.0);
        assert_eq!(model.score(&[&a]), 0.0);
    }

    fn arb_member() -> impl Strategy<Value = (u8, u8, u8)> {
        (0u8..3, 0u8..3, 0u8..3)
    }

    proptest! {
        #[test]
        fn prop_score_in_range_and_order_independent(
            attrs in prop::collection::vec(arb_member(), 5)
        ) {
            let model = ChemistryModel::default();
            let members: Vec<Candidate> = attrs
                .iter()
                .enumerate()
                .map(|(i, (n, r, p))| member(i as u64, &format!("n{n}"), &format!("r{r}"), &format!("t{p}")))
                .collect();
            let forward: Vec<&Candidate> = members.iter().collect();
            let backward: Vec<&Candidate> = members.iter().rev().collect();

            let s = model.score(&forward);
            prop_assert!((0.0..=100.0).contains(&s));
            prop_assert!((s - model.score(&backward)).abs() < 1e-9);
        }
    }
}

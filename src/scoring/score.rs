//! Per-role suitability scores.

use std::collections::BTreeMap;

use super::config::ScoringConfig;
use crate::roster::{Candidate, Role};

/// Suitability of `candidate` for `role`.
///
/// `Σ metric · weight` over the role's weight vector, times the league
/// multiplier. `None` when the role is neither listed for the candidate nor
/// Flex, which every candidate can be scored for.
pub fn role_score(candidate: &Candidate, role: Role, config: &ScoringConfig) -> Option<f64> {
    if role != Role::Flex && !candidate.roles.contains(&role) {
        return None;
    }
    let weights = config.role_weights.for_role(role);
    let league = config.league_weights.weight(&candidate.league);
    Some(candidate.metrics.dot(&weights) * league)
}

/// Recomputes `role_scores` for every candidate.
pub fn score_candidates(candidates: &mut [Candidate], config: &ScoringConfig) {
    for c in candidates.iter_mut() {
        let scores: BTreeMap<Role, f64> = Role::ALL
            .into_iter()
            .filter_map(|role| role_score(c, role, config).map(|s| (role, s)))
            .collect();
        c.role_scores = scores;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Metric;

    fn maxed(league: &str, roles: &[Role]) -> Candidate {
        let mut c = Candidate::new(1, "x").with_league(league).with_roles(roles);
        for m in Metric::ALL {
            c.metrics.set(m, 1.0);
        }
        c
    }

    #[test]
    fn test_weighted_sum_times_league() {
        let config = ScoringConfig::default();
        let c = Candidate::new(1, "x")
            .with_league("vct-challengers")
            .with_roles(&[Role::Duelist])
            .with_metric(Metric::Acs, 1.0)
            .with_metric(Metric::KdRatio, 0.5);

        let score = role_score(&c, Role::Duelist, &config).unwrap();
        assert!((score - (0.3 + 0.125) * 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_league_is_neutral() {
        let config = ScoringConfig::default();
        let score = role_score(&maxed("regional-open", &[Role::Sentinel]), Role::Sentinel, &config).unwrap();
        assert!((score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_unlisted_roles_get_no_score() {
        let config = ScoringConfig::default();
        let mut cs = vec![maxed("game-changers", &[Role::Controller])];
        score_candidates(&mut cs, &config);

        let scores = &cs[0].role_scores;
        assert_eq!(scores.len(), 2);
        assert!((scores[&Role::Controller] - 0.5).abs() < 1e-12);
        assert!((scores[&Role::Flex] - 0.5).abs() < 1e-12);
        assert!(cs[0].role_score(Role::Duelist).is_none());
    }

    #[test]
    fn test_rescoring_replaces_stale_scores() {
        let config = ScoringConfig::default();
        let mut cs = vec![maxed("", &[Role::Initiator]).with_role_score(Role::Sentinel, 99.0)];
        score_candidates(&mut cs, &config);
        assert!(cs[0].role_score(Role::Sentinel).is_none());
    }
}

//! Per-request constraints.
//!
//! Mirrors the request shape:
//!
//! ```json
//! {
//!   "league": {"game-changers": {"min": 2, "max": 2}},
//!   "region": {"diversity": 3, "region_list": ["EU", "NA"]},
//!   "player": ["Didii"]
//! }
//! ```
//!
//! Every key is optional; an absent key leaves that axis unconstrained.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Inclusive bounds on how many members may come from one league.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueQuota {
    #[serde(default)]
    pub min: u32,
    /// `None` means "up to the whole team".
    #[serde(default)]
    pub max: Option<u32>,
}

impl LeagueQuota {
    pub fn new(min: u32, max: Option<u32>) -> Self {
        Self { min, max }
    }

    /// Upper bound, defaulting to `team_size`.
    pub fn max_or(&self, team_size: u32) -> u32 {
        self.max.unwrap_or(team_size)
    }
}

/// Region requirements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionConstraint {
    /// Minimum number of distinct current regions in the team.
    #[serde(default)]
    pub diversity: Option<u32>,
    /// Only candidates currently in one of these regions are eligible.
    #[serde(default)]
    pub region_list: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraints {
    #[serde(default)]
    pub league: Option<BTreeMap<String, LeagueQuota>>,
    #[serde(default)]
    pub region: Option<RegionConstraint>,
    /// Handles that must appear in the team whenever feasible.
    #[serde(default)]
    pub player: Vec<String>,
}

impl Constraints {
    /// Parses a JSON request body.
    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    pub fn with_league_quota(mut self, league: impl Into<String>, quota: LeagueQuota) -> Self {
        self.league
            .get_or_insert_with(BTreeMap::new)
            .insert(league.into(), quota);
        self
    }

    pub fn with_region_diversity(mut self, distinct: u32) -> Self {
        self.region.get_or_insert_with(RegionConstraint::default).diversity = Some(distinct);
        self
    }

    pub fn with_region_list<S: Into<String>>(mut self, regions: impl IntoIterator<Item = S>) -> Self {
        self.region.get_or_insert_with(RegionConstraint::default).region_list =
            Some(regions.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_mandatory(mut self, handle: impl Into<String>) -> Self {
        self.player.push(handle.into());
        self
    }

    /// League quotas, if any league is constrained.
    ///
    /// An empty map counts as unconstrained.
    pub fn league_quotas(&self) -> Option<&BTreeMap<String, LeagueQuota>> {
        self.league.as_ref().filter(|m| !m.is_empty())
    }

    pub fn region_diversity(&self) -> Option<u32> {
        self.region.as_ref().and_then(|r| r.diversity)
    }

    pub fn region_list(&self) -> Option<&[String]> {
        self.region.as_ref().and_then(|r| r.region_list.as_deref())
    }

    pub fn is_mandatory(&self, handle: &str) -> bool {
        self.player.iter().any(|h| h == handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_request_shape() {
        let c = Constraints::from_json_str(
            r#"{
                "region": {"diversity": 3},
                "league": {
                    "game-changers": {"min": 2, "max": 2},
                    "vct-international": {"min": 3}
                },
                "player": ["Didii"]
            }"#,
        )
        .unwrap();

        let leagues = c.league_quotas().unwrap();
        assert_eq!(leagues["game-changers"], LeagueQuota::new(2, Some(2)));
        assert_eq!(leagues["vct-international"].max_or(5), 5);
        assert_eq!(c.region_diversity(), Some(3));
        assert!(c.region_list().is_none());
        assert!(c.is_mandatory("Didii"));
    }

    #[test]
    fn test_empty_request_is_unconstrained() {
        let c = Constraints::from_json_str("{}").unwrap();
        assert_eq!(c, Constraints::default());
        assert!(c.league_quotas().is_none());
        assert!(c.region_diversity().is_none());
        assert!(c.player.is_empty());
    }

    #[test]
    fn test_empty_league_map_is_unconstrained() {
        let c = Constraints::from_json_str(r#"{"league": {}}"#).unwrap();
        assert!(c.league_quotas().is_none());
    }

    #[test]
    fn test_builders() {
        let c = Constraints::default()
            .with_league_quota("X", LeagueQuota::new(3, None))
            .with_region_diversity(2)
            .with_region_list(["EU", "NA"])
            .with_mandatory("TenZ");

        assert_eq!(c.league_quotas().unwrap()["X"].min, 3);
        assert_eq!(c.region_diversity(), Some(2));
        assert_eq!(c.region_list().unwrap(), ["EU".to_string(), "NA".to_string()]);
        assert_eq!(c.player, vec!["TenZ".to_string()]);
    }
}

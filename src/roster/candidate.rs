//! Candidate records and their metrics.
//!
//! A [`Candidate`] is the fixed-shape form of an upstream player record.
//! Absent numeric fields read as `0.0`, absent optional fields as empty,
//! and explicit `null` values are treated the same as absent ones.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use super::role::Role;

/// Stable candidate identity.
pub type CandidateId = u64;

/// A per-candidate performance metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Average combat score.
    Acs,
    KdRatio,
    AssistScore,
    MapAwareness,
    TeamSurvivalTradeEfficiency,
    /// Average damage per round.
    Adr,
    ClutchFactor,
}

impl Metric {
    pub const ALL: [Metric; 7] = [
        Metric::Acs,
        Metric::KdRatio,
        Metric::AssistScore,
        Metric::MapAwareness,
        Metric::TeamSurvivalTradeEfficiency,
        Metric::Adr,
        Metric::ClutchFactor,
    ];
}

/// One value per [`Metric`].
///
/// Used both for candidate metrics and for per-role weight vectors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    #[serde(default, deserialize_with = "null_as_default")]
    pub acs: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub kd_ratio: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub assist_score: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub map_awareness: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub team_survival_trade_efficiency: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub adr: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub clutch_factor: f64,
}

impl Metrics {
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Acs => self.acs,
            Metric::KdRatio => self.kd_ratio,
            Metric::AssistScore => self.assist_score,
            Metric::MapAwareness => self.map_awareness,
            Metric::TeamSurvivalTradeEfficiency => self.team_survival_trade_efficiency,
            Metric::Adr => self.adr,
            Metric::ClutchFactor => self.clutch_factor,
        }
    }

    pub fn set(&mut self, metric: Metric, value: f64) {
        let slot = match metric {
            Metric::Acs => &mut self.acs,
            Metric::KdRatio => &mut self.kd_ratio,
            Metric::AssistScore => &mut self.assist_score,
            Metric::MapAwareness => &mut self.map_awareness,
            Metric::TeamSurvivalTradeEfficiency => &mut self.team_survival_trade_efficiency,
            Metric::Adr => &mut self.adr,
            Metric::ClutchFactor => &mut self.clutch_factor,
        };
        *slot = value;
    }

    /// Builds a vector from `(metric, value)` pairs; unlisted metrics are 0.
    pub fn from_pairs(pairs: &[(Metric, f64)]) -> Self {
        let mut m = Self::default();
        for &(metric, value) in pairs {
            m.set(metric, value);
        }
        m
    }

    /// Weighted sum `Σ self[m] · weights[m]`.
    pub fn dot(&self, weights: &Metrics) -> f64 {
        Metric::ALL
            .iter()
            .map(|&m| self.get(m) * weights.get(m))
            .sum()
    }
}

/// A prior team affiliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PastTeam {
    pub team_name: String,
    #[serde(default)]
    pub period: Option<String>,
}

/// A scoreable individual.
///
/// Catalog candidates are never mutated during a search. Teams hold
/// independent clones taken through [`Slot::assign`](super::Slot::assign).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(rename = "player_id", alias = "id")]
    pub id: CandidateId,
    pub handle: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub league: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub current_region: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub previous_regions: Vec<String>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub past_teams: Vec<PastTeam>,
    /// Roles this candidate can plausibly fill, most played first.
    #[serde(default, deserialize_with = "null_as_default")]
    pub roles: Vec<Role>,
    /// Agent name → times played. Used to derive `roles` when absent.
    #[serde(default, deserialize_with = "null_as_default")]
    pub agent_specialization: BTreeMap<String, u32>,
    #[serde(flatten)]
    pub metrics: Metrics,
    /// Suitability per role, filled in by catalog preparation.
    #[serde(default, deserialize_with = "null_as_default")]
    pub role_scores: BTreeMap<Role, f64>,
}

impl Candidate {
    pub fn new(id: CandidateId, handle: impl Into<String>) -> Self {
        Self {
            id,
            handle: handle.into(),
            league: String::new(),
            current_region: String::new(),
            previous_regions: Vec::new(),
            nationality: None,
            past_teams: Vec::new(),
            roles: Vec::new(),
            agent_specialization: BTreeMap::new(),
            metrics: Metrics::default(),
            role_scores: BTreeMap::new(),
        }
    }

    pub fn with_league(mut self, league: impl Into<String>) -> Self {
        self.league = league.into();
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.current_region = region.into();
        self
    }

    pub fn with_nationality(mut self, nationality: impl Into<String>) -> Self {
        self.nationality = Some(nationality.into());
        self
    }

    pub fn with_past_team(mut self, team_name: impl Into<String>) -> Self {
        self.past_teams.push(PastTeam {
            team_name: team_name.into(),
            period: None,
        });
        self
    }

    pub fn with_roles(mut self, roles: &[Role]) -> Self {
        self.roles = roles.to_vec();
        self
    }

    pub fn with_metric(mut self, metric: Metric, value: f64) -> Self {
        self.metrics.set(metric, value);
        self
    }

    pub fn with_role_score(mut self, role: Role, score: f64) -> Self {
        self.role_scores.insert(role, score);
        self
    }

    /// Whether this candidate may occupy `role` in a team.
    ///
    /// Flex needs at least two listed roles; a named role must be listed.
    pub fn can_fill(&self, role: Role) -> bool {
        match role {
            Role::Flex => self.roles.len() >= 2,
            named => self.roles.contains(&named),
        }
    }

    /// Computed suitability for `role`, if the role was scored.
    pub fn role_score(&self, role: Role) -> Option<f64> {
        self.role_scores.get(&role).copied()
    }

    /// Whether the two candidates ever played for a team of the same name.
    pub fn shares_past_team(&self, other: &Candidate) -> bool {
        self.past_teams
            .iter()
            .any(|a| other.past_teams.iter().any(|b| a.team_name == b.team_name))
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

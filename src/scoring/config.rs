//! Scoring tables.
//!
//! Every table is an immutable value handed to the scoring functions, so a
//! request can override weights without touching shared state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::roster::{Metric, Metrics, Role};

/// Per-role metric weight vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleWeights(BTreeMap<Role, Metrics>);

impl Default for RoleWeights {
    fn default() -> Self {
        use Metric::*;
        let table = [
            (
                Role::Duelist,
                Metrics::from_pairs(&[
                    (Acs, 0.3),
                    (KdRatio, 0.25),
                    (MapAwareness, 0.2),
                    (Adr, 0.15),
                    (ClutchFactor, 0.1),
                ]),
            ),
            (
                Role::Initiator,
                Metrics::from_pairs(&[
                    (AssistScore, 0.3),
                    (MapAwareness, 0.25),
                    (TeamSurvivalTradeEfficiency, 0.2),
                    (Acs, 0.15),
                    (ClutchFactor, 0.1),
                ]),
            ),
            (
                Role::Controller,
                Metrics::from_pairs(&[
                    (AssistScore, 0.3),
                    (TeamSurvivalTradeEfficiency, 0.25),
                    (ClutchFactor, 0.2),
                    (MapAwareness, 0.15),
                    (Acs, 0.1),
                ]),
            ),
            (
                Role::Sentinel,
                Metrics::from_pairs(&[
                    (KdRatio, 0.3),
                    (ClutchFactor, 0.25),
                    (MapAwareness, 0.2),
                    (TeamSurvivalTradeEfficiency, 0.15),
                    (Acs, 0.1),
                ]),
            ),
            (
                Role::Flex,
                Metrics::from_pairs(&[
                    (Acs, 0.2),
                    (KdRatio, 0.2),
                    (AssistScore, 0.2),
                    (MapAwareness, 0.2),
                    (ClutchFactor, 0.2),
                ]),
            ),
        ];
        Self(table.into_iter().collect())
    }
}

impl RoleWeights {
    /// Weight vector for `role`; an unlisted role weighs nothing.
    pub fn for_role(&self, role: Role) -> Metrics {
        self.0.get(&role).copied().unwrap_or_default()
    }

    pub fn with_role(mut self, role: Role, weights: Metrics) -> Self {
        self.0.insert(role, weights);
        self
    }
}

/// Per-league score multipliers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueWeights {
    pub weights: BTreeMap<String, f64>,
    /// Multiplier for leagues missing from `weights`.
    pub default_weight: f64,
}

impl Default for LeagueWeights {
    fn default() -> Self {
        let weights = [
            ("vct-international", 1.0),
            ("vct-challengers", 0.7),
            ("game-changers", 0.5),
        ];
        Self {
            weights: weights
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
            default_weight: 1.0,
        }
    }
}

impl LeagueWeights {
    pub fn weight(&self, league: &str) -> f64 {
        self.weights.get(league).copied().unwrap_or(self.default_weight)
    }
}

/// Agent name → role classification, keyed by lowercase agent name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRoles(BTreeMap<String, Role>);

impl Default for AgentRoles {
    fn default() -> Self {
        let table: [(&str, Role); 25] = [
            ("jett", Role::Duelist),
            ("raze", Role::Duelist),
            ("reyna", Role::Duelist),
            ("phoenix", Role::Duelist),
            ("yoru", Role::Duelist),
            ("neon", Role::Duelist),
            ("iso", Role::Duelist),
            ("clove", Role::Duelist),
            ("sage", Role::Sentinel),
            ("killjoy", Role::Sentinel),
            ("cypher", Role::Sentinel),
            ("chamber", Role::Sentinel),
            ("deadlock", Role::Sentinel),
            ("vyse", Role::Sentinel),
            ("viper", Role::Controller),
            ("brimstone", Role::Controller),
            ("omen", Role::Controller),
            ("astra", Role::Controller),
            ("harbor", Role::Controller),
            ("sova", Role::Initiator),
            ("breach", Role::Initiator),
            ("skye", Role::Initiator),
            ("kayo", Role::Initiator),
            ("fade", Role::Initiator),
            ("gekko", Role::Initiator),
        ];
        Self(
            table
                .into_iter()
                .map(|(agent, role)| (agent.to_string(), role))
                .collect(),
        )
    }
}

impl AgentRoles {
    /// Role of `agent`, matched case-insensitively.
    pub fn role_of(&self, agent: &str) -> Option<Role> {
        self.0.get(&agent.to_lowercase()).copied()
    }

    pub fn with_agent(mut self, agent: &str, role: Role) -> Self {
        self.0.insert(agent.to_lowercase(), role);
        self
    }

    fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.0.values().copied()
    }
}

/// Configuration for catalog preparation.
///
/// # Examples
///
/// ```
/// use squad_ga::scoring::ScoringConfig;
///
/// let config = ScoringConfig::default();
/// assert!((config.league_weights.weight("game-changers") - 0.5).abs() < 1e-12);
/// assert!((config.league_weights.weight("somewhere-else") - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub role_weights: RoleWeights,
    pub league_weights: LeagueWeights,
    pub agent_roles: AgentRoles,
    /// Rescale raw metrics to `[0, 1]` before scoring. Disable when the
    /// catalog already carries normalized metrics.
    pub normalize: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            role_weights: RoleWeights::default(),
            league_weights: LeagueWeights::default(),
            agent_roles: AgentRoles::default(),
            normalize: true,
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), String> {
        for role in Role::ALL {
            let w = self.role_weights.for_role(role);
            if Metric::ALL.iter().any(|&m| !w.get(m).is_finite() || w.get(m) < 0.0) {
                return Err(format!("weights for {role} must be finite and non-negative"));
            }
        }
        let league = &self.league_weights;
        if league
            .weights
            .values()
            .chain(std::iter::once(&league.default_weight))
            .any(|w| !w.is_finite() || *w < 0.0)
        {
            return Err("league weights must be finite and non-negative".into());
        }
        if self.agent_roles.roles().any(|r| r == Role::Flex) {
            return Err("agents cannot be classified as Flex".into());
        }
        Ok(())
    }
}

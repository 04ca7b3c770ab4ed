//! Role derivation from agent usage.

use std::collections::BTreeMap;

use super::config::AgentRoles;
use crate::roster::{Candidate, Role};

/// Orders the named roles by how often the candidate played their agents.
///
/// Roles with no recorded usage are dropped; ties keep [`Role::NAMED`]
/// order. Unknown agents are ignored.
pub fn derive_roles(agent_usage: &BTreeMap<String, u32>, agents: &AgentRoles) -> Vec<Role> {
    let mut totals = [0u64; Role::COUNT];
    for (agent, &usage) in agent_usage {
        if let Some(role) = agents.role_of(agent) {
            totals[role.index()] += u64::from(usage);
        }
    }

    let mut roles: Vec<Role> = Role::NAMED
        .into_iter()
        .filter(|r| totals[r.index()] > 0)
        .collect();
    roles.sort_by(|a, b| totals[b.index()].cmp(&totals[a.index()]));
    roles
}

/// Fills in `roles` for candidates that arrived without a role list.
pub fn derive_missing_roles(candidates: &mut [Candidate], agents: &AgentRoles) {
    for c in candidates.iter_mut().filter(|c| c.roles.is_empty()) {
        c.roles = derive_roles(&c.agent_specialization, agents);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usage(pairs: &[(&str, u32)]) -> BTreeMap<String, u32> {
        pairs.iter().map(|&(a, n)| (a.to_string(), n)).collect()
    }

    #[test]
    fn test_orders_by_total_usage() {
        let roles = derive_roles(
            &usage(&[("jett", 3), ("Viper", 5), ("omen", 4), ("sova", 1)]),
            &AgentRoles::default(),
        );
        assert_eq!(roles, vec![Role::Controller, Role::Duelist, Role::Initiator]);
    }

    #[test]
    fn test_ties_keep_role_order() {
        let roles = derive_roles(&usage(&[("killjoy", 2), ("raze", 2)]), &AgentRoles::default());
        assert_eq!(roles, vec![Role::Duelist, Role::Sentinel]);
    }

    #[test]
    fn test_unknown_and_unused_agents_are_dropped() {
        let roles = derive_roles(&usage(&[("tejo", 40), ("sage", 0)]), &AgentRoles::default());
        assert!(roles.is_empty());
    }

    #[test]
    fn test_existing_roles_are_kept() {
        let mut cs = vec![
            Candidate::new(1, "listed").with_roles(&[Role::Sentinel]),
            Candidate::new(2, "derived"),
        ];
        cs[0].agent_specialization = usage(&[("jett", 10)]);
        cs[1].agent_specialization = usage(&[("breach", 1)]);

        derive_missing_roles(&mut cs, &AgentRoles::default());
        assert_eq!(cs[0].roles, vec![Role::Sentinel]);
        assert_eq!(cs[1].roles, vec![Role::Initiator]);
    }
}

//! The five fixed team roles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A team position. Every team fills each role exactly once.
///
/// The declaration order is the canonical slot order of a [`Team`](super::Team).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    Duelist,
    Initiator,
    Controller,
    Sentinel,
    /// Filled by candidates able to play at least two named roles.
    Flex,
}

impl Role {
    /// Number of roles, which is also the team size.
    pub const COUNT: usize = 5;

    /// All roles in slot order.
    pub const ALL: [Role; Role::COUNT] = [
        Role::Duelist,
        Role::Initiator,
        Role::Controller,
        Role::Sentinel,
        Role::Flex,
    ];

    /// The four roles a candidate can specialize in.
    pub const NAMED: [Role; 4] = [Role::Duelist, Role::Initiator, Role::Controller, Role::Sentinel];

    /// Position of this role in [`Role::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Role::Duelist => "Duelist",
            Role::Initiator => "Initiator",
            Role::Controller => "Controller",
            Role::Sentinel => "Sentinel",
            Role::Flex => "Flex",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no role.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseRoleError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_all_order() {
        for (i, role) in Role::ALL.into_iter().enumerate() {
            assert_eq!(role.index(), i);
        }
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("duelist".parse::<Role>().unwrap(), Role::Duelist);
        assert_eq!(" FLEX ".parse::<Role>().unwrap(), Role::Flex);
        assert!("igl".parse::<Role>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for role in Role::ALL {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_serde_uses_role_names() {
        let json = serde_json::to_string(&Role::Controller).unwrap();
        assert_eq!(json, "\"Controller\"");
        let back: Role = serde_json::from_str("\"Sentinel\"").unwrap();
        assert_eq!(back, Role::Sentinel);
    }
}

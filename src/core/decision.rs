//! The one choice every exploring player makes each step.

use serde::{Deserialize, Serialize};

/// Explore deeper or retreat to camp with what you carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    Explore,
    Retreat,
}

impl Decision {
    /// Map a boolean "keep exploring" flag.
    #[must_use]
    pub const fn from_explore(explore: bool) -> Self {
        if explore {
            Decision::Explore
        } else {
            Decision::Retreat
        }
    }

    #[must_use]
    pub const fn is_explore(self) -> bool {
        matches!(self, Decision::Explore)
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::Explore => write!(f, "E"),
            Decision::Retreat => write!(f, "R"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_explore() {
        assert_eq!(Decision::from_explore(true), Decision::Explore);
        assert_eq!(Decision::from_explore(false), Decision::Retreat);
        assert!(Decision::Explore.is_explore());
        assert!(!Decision::Retreat.is_explore());
        assert_eq!(Decision::Retreat.to_string(), "R");
    }
}

//! Agent kind tag.
//!
//! Kind-specific behavior is selected by matching on this tag rather than by
//! dynamic dispatch.  Obstacles are not agents; they live in their own static
//! collection and never take part in a tick.

use std::fmt;

/// Which rule set an agent follows.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AgentKind {
    /// Prey: cohesion, alignment, separation, and avoidance.
    #[default]
    Boid,
    /// Predator: picks one boid and pursues it.
    Hoik,
}

impl AgentKind {
    #[inline]
    pub fn is_boid(self) -> bool {
        matches!(self, AgentKind::Boid)
    }

    #[inline]
    pub fn is_hoik(self) -> bool {
        matches!(self, AgentKind::Hoik)
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AgentKind::Boid => "boid",
            AgentKind::Hoik => "hoik",
        })
    }
}

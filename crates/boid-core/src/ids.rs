//! Typed indices for agents and obstacles.
//!
//! Both are thin `u32` newtypes that index straight into the SoA vectors of
//! their owning collection.  Use `.index()` rather than `.0 as usize`.

use std::fmt;

/// Declare a `Copy + Ord + Hash` index newtype.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of an agent (boid or hoik) in the world's fixed iteration order.
    ///
    /// Boids occupy the low indices and hoiks follow, so ascending `AgentId`
    /// order *is* the tick order.
    pub struct AgentId(u32);
}

typed_id! {
    /// Index of a static obstacle.
    pub struct ObstacleId(u32);
}

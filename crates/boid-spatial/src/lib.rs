//! `boid-spatial`: neighborhood queries and flock aggregates.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`query`]   | `NeighborQuery` trait, `LinearScan`, `neighbors_within`, `obstacles_near` |
//! | [`index`]   | `RTreeIndex` - R-tree rebuilt once per tick from a snapshot |
//! | [`flock`]   | `Flock` - mean position / velocity / heading of a neighbor set |
//!
//! # Which query to use
//!
//! `LinearScan` is O(population) per call and reads whatever store it is
//! handed, so it stays correct while agents are updated in place during a
//! tick.  `RTreeIndex` answers in O(log n + k) but only reflects the
//! positions it was built from; use it when every query in a tick reads the
//! same snapshot.

pub mod flock;
pub mod index;
pub mod query;

#[cfg(test)]
mod tests;

pub use flock::Flock;
pub use index::RTreeIndex;
pub use query::{LinearScan, NeighborQuery, neighbors_within, obstacles_near};

//! World observer trait for progress reporting and rendering.

use boid_core::Tick;
use tracing::info;

use crate::{Frame, TickStats};

/// Callbacks invoked by [`World::run`][crate::World::run] and
/// [`World::run_ticks`][crate::World::run_ticks] at key points in the tick
/// loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: headless renderer
///
/// ```rust,ignore
/// struct Ascii;
///
/// impl WorldObserver for Ascii {
///     fn on_frame(&mut self, frame: &Frame) {
///         for boid in frame.boids() {
///             println!("{} at {}", boid.id, boid.position);
///         }
///     }
/// }
/// ```
pub trait WorldObserver {
    /// Called at the very start of each tick, before any agent moves.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once the tick is complete.
    fn on_tick_end(&mut self, _stats: &TickStats) {}

    /// Called every `config.frame_interval_ticks` ticks, after
    /// [`on_tick_end`][Self::on_tick_end].  The frame is built only when it
    /// is due.
    fn on_frame(&mut self, _frame: &Frame) {}

    /// Called once after the final tick of [`World::run`][crate::World::run].
    fn on_run_end(&mut self, _final_tick: Tick) {}
}

/// A [`WorldObserver`] that does nothing.
pub struct NoopObserver;

impl WorldObserver for NoopObserver {}

/// Logs a tick summary through `tracing` every `interval` ticks.
pub struct TracingObserver {
    interval: u64,
}

impl TracingObserver {
    /// An `interval` of 0 is treated as 1.
    pub fn new(interval: u64) -> Self {
        Self { interval: interval.max(1) }
    }
}

impl WorldObserver for TracingObserver {
    fn on_tick_end(&mut self, stats: &TickStats) {
        if stats.tick.0.is_multiple_of(self.interval) {
            info!(
                tick      = %stats.tick,
                agents    = stats.agents,
                tracking  = stats.tracking,
                retargets = stats.retargets,
                shared    = stats.shared,
                "tick complete"
            );
        }
    }

    fn on_run_end(&mut self, final_tick: Tick) {
        info!(%final_tick, "run finished");
    }
}

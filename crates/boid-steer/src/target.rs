//! Predator target assignment.
//!
//! Each hoik is either [`Untargeted`][TargetState::Untargeted] or
//! [`Tracking`][TargetState::Tracking] one boid.  The state is derived from
//! `AgentStore::target`; there is no separate state field.
//!
//! ```text
//!   Untargeted ──(any boid exists)──────────────► Tracking(t)
//!   Tracking(t) ──(t beyond give-up radius)─────► Tracking(t')   reselect
//!   Tracking(t) ──(t no longer a valid boid)────► Tracking(t')   reselect
//!   any         ──(no boids at all)─────────────► Untargeted
//! ```
//!
//! # Exclusivity
//!
//! Selection prefers the nearest boid not already tracked by another hoik.
//! Hoiks are assigned one at a time in world order, so a later hoik sees the
//! targets earlier hoiks picked this tick and no two hoiks that selected
//! while free boids remained share a boid.  When every boid is claimed the
//! hoik falls back to the nearest boid regardless.

use boid_agent::AgentStore;
use boid_core::AgentId;

/// Pursuit state of one hoik.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TargetState {
    Untargeted,
    Tracking(AgentId),
}

/// What [`assign_target`] did for one hoik.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TargetUpdate {
    /// The current target is still valid and in range.
    Kept(AgentId),
    /// A new target was selected.
    Acquired {
        target:   AgentId,
        previous: Option<AgentId>,
        /// `true` if every boid was already claimed and the hoik fell back
        /// to sharing the nearest one.
        shared:   bool,
    },
    /// There are no boids to chase.
    Idle,
}

impl TargetUpdate {
    /// The hoik's target after the update.
    pub fn target(&self) -> Option<AgentId> {
        match *self {
            TargetUpdate::Kept(t) | TargetUpdate::Acquired { target: t, .. } => Some(t),
            TargetUpdate::Idle => None,
        }
    }

    #[inline]
    pub fn is_retarget(&self) -> bool {
        matches!(self, TargetUpdate::Acquired { .. })
    }
}

/// Current pursuit state of `hoik`.  A stored target that is no longer a
/// valid boid reads as `Untargeted`.
pub fn target_state(agents: &AgentStore, hoik: AgentId) -> TargetState {
    match agents.target[hoik.index()] {
        Some(t) if agents.is_boid(t) => TargetState::Tracking(t),
        _ => TargetState::Untargeted,
    }
}

/// Pick a target for `hoik` without changing any state.
///
/// Returns the nearest boid (by squared distance, ties to the lower id) that
/// no *other* hoik is tracking; if all are claimed, the nearest boid overall.
/// `None` only when there are no boids.
pub fn select_target(agents: &AgentStore, hoik: AgentId) -> Option<AgentId> {
    let mut claimed = vec![false; agents.boid_count()];
    for other in agents.hoik_ids().filter(|&h| h != hoik) {
        if let TargetState::Tracking(t) = target_state(agents, other) {
            claimed[t.index()] = true;
        }
    }

    let origin = agents.position[hoik.index()];
    let mut nearest: Option<(f32, AgentId)> = None;
    let mut nearest_free: Option<(f32, AgentId)> = None;
    for boid in agents.boid_ids() {
        let d2 = origin.distance_sq(agents.position[boid.index()]);
        // Strict `<` keeps the lower id on ties.
        if nearest.is_none_or(|(best, _)| d2 < best) {
            nearest = Some((d2, boid));
        }
        if !claimed[boid.index()] && nearest_free.is_none_or(|(best, _)| d2 < best) {
            nearest_free = Some((d2, boid));
        }
    }
    nearest_free.or(nearest).map(|(_, id)| id)
}

/// Revalidate `hoik`'s target and reselect if needed, writing the result
/// into `agents.target`.
///
/// The target is kept while it is a valid boid no farther than
/// `give_up_radius`; otherwise (including on the hoik's first tick) a new one
/// is chosen with [`select_target`].
pub fn assign_target(agents: &mut AgentStore, hoik: AgentId, give_up_radius: f32) -> TargetUpdate {
    debug_assert!(!agents.is_boid(hoik), "{hoik} is not a hoik");
    let i = hoik.index();
    let previous = agents.target[i];

    if let TargetState::Tracking(t) = target_state(agents, hoik) {
        let d2 = agents.position[i].distance_sq(agents.position[t.index()]);
        if d2 <= give_up_radius * give_up_radius {
            return TargetUpdate::Kept(t);
        }
    }

    let Some(target) = select_target(agents, hoik) else {
        agents.target[i] = None;
        return TargetUpdate::Idle;
    };
    let shared = agents
        .hoik_ids()
        .any(|h| h != hoik && target_state(agents, h) == TargetState::Tracking(target));
    agents.target[i] = Some(target);
    TargetUpdate::Acquired { target, previous, shared }
}

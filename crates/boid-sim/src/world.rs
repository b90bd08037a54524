//! The `World` struct and its tick loop.

use boid_agent::{AgentStore, Drive, Obstacle};
use boid_core::{AgentId, AgentKind, Arena, CoreError, ObstacleId, Tick, Vec2, WorldConfig};
use boid_spatial::{LinearScan, NeighborQuery, RTreeIndex, obstacles_near};
use boid_steer::{SteeringContext, SteeringModel, TargetState, TargetUpdate, assign_target, target_state};
use tracing::{debug, trace};

use crate::{AgentView, Frame, SimResult, WorldObserver};

// ── Tick mode ─────────────────────────────────────────────────────────────────

/// How agents within one tick see each other.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TickMode {
    /// In-place updates in ascending `AgentId` order.  An agent sees the
    /// already-updated state of every agent before it this tick.
    #[default]
    Sequential,
    /// Double-buffered.  Every query reads last tick's state; moves are
    /// committed together at the end of the tick.
    Snapshot,
}

// ── Tick statistics ───────────────────────────────────────────────────────────

/// Summary of one completed tick, handed to observers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickStats {
    /// The tick that was processed.
    pub tick:      Tick,
    /// Agents moved (obstacles are never counted).
    pub agents:    usize,
    /// Hoiks tracking a boid at the end of the tick.
    pub tracking:  usize,
    /// Hoiks that selected a new target this tick.
    pub retargets: usize,
    /// Retargets that had to share a boid because every boid was claimed.
    pub shared:    usize,
}

impl TickStats {
    fn new(tick: Tick, agents: usize) -> Self {
        Self { tick, agents, ..Self::default() }
    }

    fn record(&mut self, hoik: AgentId, update: TargetUpdate) {
        if update.target().is_some() {
            self.tracking += 1;
        }
        if let TargetUpdate::Acquired { target, previous, shared } = update {
            self.retargets += 1;
            self.shared += usize::from(shared);
            trace!(%hoik, %target, ?previous, shared, "hoik retargeted");
        }
    }
}

// ── World ─────────────────────────────────────────────────────────────────────

/// The simulation world: agents, obstacles, arena, and the tick loop.
///
/// Each tick visits every agent in ascending `AgentId` order (boids, then
/// hoiks).  For a hoik the target is revalidated first; then the steering
/// model produces a [`Drive`] which is integrated:
///
/// ```text
/// velocity ← velocity + accel   (or ← desired for a pursuing hoik)
/// velocity ← clamp(velocity, max_speed)
/// heading  ← normalize(velocity)   unless velocity = 0
/// position ← position + velocity
/// ```
///
/// Create via [`WorldBuilder`][crate::WorldBuilder].  The builder validates
/// the population and obstacles, so the state is read-only from outside.
pub struct World<S: SteeringModel> {
    /// Construction-time configuration.  Read-only during a run.
    pub(crate) config: WorldConfig,

    pub(crate) mode: TickMode,

    /// Agent state (SoA arrays).
    pub(crate) agents: AgentStore,

    /// Static obstacles.  Never move.
    pub(crate) obstacles: Vec<Obstacle>,

    /// The steering model.  Called once per agent per tick.
    pub(crate) steering: S,

    /// Number of ticks completed so far.
    pub(crate) tick: Tick,
}

impl<S: SteeringModel> World<S> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Number of ticks completed so far.
    #[inline]
    pub fn tick(&self) -> Tick {
        self.tick
    }

    #[inline]
    pub fn arena(&self) -> Arena {
        self.config.arena
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    #[inline]
    pub fn mode(&self) -> TickMode {
        self.mode
    }

    /// Agent state (SoA arrays).
    pub fn agents(&self) -> &AgentStore {
        &self.agents
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn steering(&self) -> &S {
        &self.steering
    }

    /// Run the world from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: WorldObserver>(&mut self, observer: &mut O) {
        while self.tick < self.config.end_tick() {
            self.advance(observer);
        }
        observer.on_run_end(self.tick);
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    pub fn run_ticks<O: WorldObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.advance(observer);
        }
    }

    /// Process one tick without observers.
    pub fn step(&mut self) -> TickStats {
        let now = self.tick;
        let mut stats = TickStats::new(now, self.agents.count);
        match self.mode {
            TickMode::Sequential => self.step_sequential(&mut stats),
            TickMode::Snapshot => self.step_snapshot(&mut stats),
        }
        self.tick = now.next();
        debug!(
            tick      = %now,
            tracking  = stats.tracking,
            retargets = stats.retargets,
            "tick processed"
        );
        stats
    }

    /// A render view of the current state.
    pub fn frame(&self) -> Frame {
        Frame::capture(self.tick, self.config.arena, &self.agents, &self.obstacles)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Render view of one agent.
    pub fn agent(&self, id: AgentId) -> SimResult<AgentView> {
        if !self.agents.contains(id) {
            return Err(CoreError::AgentNotFound(id).into());
        }
        Ok(AgentView::of(&self.agents, id))
    }

    /// Boids within `radius` of `origin` (inclusive), ascending by id.
    pub fn boids_within(&self, origin: Vec2, radius: f32) -> Vec<AgentId> {
        LinearScan.agents_within(&self.agents, origin, radius, AgentKind::Boid, None)
    }

    /// Hoiks within `radius` of `origin` (inclusive), ascending by id.
    pub fn hoiks_within(&self, origin: Vec2, radius: f32) -> Vec<AgentId> {
        LinearScan.agents_within(&self.agents, origin, radius, AgentKind::Hoik, None)
    }

    /// Obstacles whose rim is closer than `margin` to `origin`.
    pub fn obstacles_near(&self, origin: Vec2, margin: f32) -> Vec<ObstacleId> {
        obstacles_near(&self.obstacles, origin, margin).map(|(id, _)| id).collect()
    }

    /// Pursuit state of `hoik`.
    pub fn target_state(&self, hoik: AgentId) -> SimResult<TargetState> {
        if !self.agents.contains(hoik) {
            return Err(CoreError::AgentNotFound(hoik).into());
        }
        Ok(target_state(&self.agents, hoik))
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn advance<O: WorldObserver>(&mut self, observer: &mut O) {
        observer.on_tick_start(self.tick);
        let stats = self.step();
        observer.on_tick_end(&stats);

        let interval = self.config.frame_interval_ticks;
        if interval > 0 && self.tick.0.is_multiple_of(interval) {
            observer.on_frame(&self.frame());
        }
    }

    /// In-place: target, steer, and integrate one agent at a time.
    fn step_sequential(&mut self, stats: &mut TickStats) {
        let give_up = self.config.steering.give_up_radius;
        for agent in self.agents.agent_ids() {
            if self.agents.kind[agent.index()].is_hoik() {
                let update = assign_target(&mut self.agents, agent, give_up);
                stats.record(agent, update);
            }
            let ctx = SteeringContext::new(
                &self.agents,
                &self.obstacles,
                self.config.arena,
                &self.config.steering,
                &LinearScan,
            );
            let drive = self.steering.drive(agent, &ctx);
            self.agents.apply(agent, drive);
        }
    }

    /// Double-buffered: assign targets and compute every drive against a
    /// copy of last tick's state, then commit.
    fn step_snapshot(&mut self, stats: &mut TickStats) {
        let give_up = self.config.steering.give_up_radius;
        let mut snapshot = self.agents.clone();

        // ── Phase 1: target assignment (sequential, world order) ──────────
        //
        // Progressive writes into the snapshot so later hoiks see targets
        // claimed earlier this tick.
        for hoik in snapshot.hoik_ids() {
            let update = assign_target(&mut snapshot, hoik, give_up);
            stats.record(hoik, update);
        }

        // ── Phase 2: force phase (reads the snapshot only) ────────────────
        let index = RTreeIndex::build(&snapshot);
        let ctx = SteeringContext::new(
            &snapshot,
            &self.obstacles,
            self.config.arena,
            &self.config.steering,
            &index,
        );
        let drives = compute_drives(&self.steering, &ctx);

        // ── Phase 3: commit (sequential, ascending AgentId) ───────────────
        self.agents.target.clone_from(&snapshot.target);
        for (agent, drive) in self.agents.agent_ids().zip(drives) {
            self.agents.apply(agent, drive);
        }
    }
}

/// One drive per agent, in `AgentId` order.
///
/// With the `parallel` Cargo feature the agents are spread over Rayon's
/// thread pool; the result order is the same either way.
fn compute_drives<S: SteeringModel>(steering: &S, ctx: &SteeringContext<'_>) -> Vec<Drive> {
    #[cfg(not(feature = "parallel"))]
    {
        ctx.agents.agent_ids().map(|agent| steering.drive(agent, ctx)).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        (0..ctx.agents.count as u32)
            .into_par_iter()
            .map(|i| steering.drive(AgentId(i), ctx))
            .collect()
    }
}

//! The `OfficeSim` struct and its tick pipeline.

use office_agent::AgentRecord;
use office_core::{BoardPoint, SimClock, SimTuning, ZoneKind};
use office_grid::{Planner, WalkGrid};
use office_layout::OfficeLayout;
use office_motion::{begin_walk, finalize_pose, maybe_wander, step_walk};
use office_session::{ChatEvent, SessionSnapshot, SessionStateManager};
use office_zone::{choose_seat, OccupiedSeats, ZonePolicy};

use crate::snapshot::{AgentFrame, FrameSink};

/// The main simulation runner.
///
/// `OfficeSim<P>` owns all simulation state and drives the per-frame
/// pipeline:
///
/// 1. **Aging**: idle agents fall asleep, animation counters advance.
/// 2. **Zone phase** (read-only): every agent's target zone is computed
///    against the same roster snapshot.
/// 3. **Apply phase** (sequential, spawn order for determinism): seat
///    allocation under a shared occupancy set, walk triggering, movement
///    stepping, wander, position clamp, and resting pose.
///
/// Telemetry enters between ticks via [`handle_chat_event`] and
/// [`update_from_sessions`]; the renderer reads [`frame`] once per frame.
///
/// Create via [`OfficeSimBuilder`][crate::OfficeSimBuilder].
///
/// [`handle_chat_event`]: Self::handle_chat_event
/// [`update_from_sessions`]: Self::update_from_sessions
/// [`frame`]: Self::frame
#[derive(Debug)]
pub struct OfficeSim<P: Planner> {
    /// Static board configuration (zones, seats, blockers, POIs).
    pub layout: OfficeLayout,

    /// Walkability grid derived from `layout`.  Read-only once built.
    pub grid: WalkGrid,

    /// The path planner.
    pub planner: P,

    /// Owner of the agent map; all telemetry flows through it.
    pub sessions: SessionStateManager,

    /// Zone assignment rules, including the lead memo.
    pub policy: ZonePolicy,

    /// Behavioral constants.
    pub tuning: SimTuning,

    /// The simulation clock, advanced once per tick.
    pub clock: SimClock,
}

impl<P: Planner> OfficeSim<P> {
    // ── Telemetry entry points ────────────────────────────────────────────

    /// Register a configured agent as a permanent character.
    pub fn add_configured_agent(&mut self, agent_id: &str) {
        self.sessions.add_configured_agent(agent_id, self.clock.now_ms());
    }

    /// Apply one chat telemetry event.
    pub fn handle_chat_event(&mut self, event: &ChatEvent) {
        self.sessions.handle_chat_event(event, self.clock.now_ms());
    }

    /// Reconcile the polled session list.
    pub fn update_from_sessions(&mut self, sessions: &[SessionSnapshot]) {
        self.sessions.update_from_sessions(sessions, self.clock.now_ms());
    }

    /// Forget the memoized lead agent (call on reconnect).
    pub fn reset_lead(&mut self) {
        self.policy.reset_lead();
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance the simulation by `dt` seconds of frame time.
    pub fn tick(&mut self, dt: f32) {
        self.clock.advance(dt);
        let now = self.clock.now_ms();

        // ── Phase 0: time-based aging ─────────────────────────────────────
        self.sessions.tick(dt, now);

        let keys = self.sessions.keys_in_spawn_order();

        // ── Phase 1: zone decisions ───────────────────────────────────────
        //
        // Computed for every agent against the same roster snapshot before
        // anything mutates, so decision order cannot leak into the results.
        let decisions: Vec<(String, ZoneKind)> = {
            let sessions = &self.sessions;
            let policy = &mut self.policy;
            let top_level: Vec<&AgentRecord> = keys
                .iter()
                .filter_map(|k| sessions.agent(k))
                .filter(|a| !a.is_sub_agent())
                .collect();
            keys.iter()
                .filter_map(|k| {
                    sessions
                        .agent(k)
                        .map(|a| (k.clone(), policy.assign_zone(a, &top_level, now)))
                })
                .collect()
        };

        // ── Phase 2: apply (spawn order, shared occupancy set) ────────────
        let layout = &self.layout;
        let grid = &self.grid;
        let planner = &self.planner;
        let tuning = &self.tuning;
        let sessions = &mut self.sessions;

        let mut occupied = OccupiedSeats::default();
        for (key, zone) in decisions {
            // Seat choice reads the record; the mutations below re-borrow it.
            let Some(agent) = sessions.agent(&key) else { continue };
            let seat = choose_seat(layout, agent, zone, &mut occupied);
            let seat_id = seat.map(|s| s.id);
            let raw_target = seat.map(|s| s.pos).unwrap_or_else(|| zone_fallback(layout, zone));
            let target = grid.clamp_to_walkable(raw_target);

            let Some(agent) = sessions.agent_mut(&key) else { continue };

            let changed_target = agent
                .target
                .is_none_or(|t| t.distance(target) > tuning.target_epsilon);
            agent.seat = seat_id;
            agent.target = Some(target);
            if agent.zone.is_none() {
                agent.zone = Some(zone);
            }

            // First spawn: place directly at the seat, no walk-in from origin.
            if !agent.placed {
                agent.pos = target;
                agent.zone = Some(zone);
                agent.placed = true;
            }

            let needs_move = agent.zone != Some(zone)
                || changed_target
                || agent.pos.distance(target) > tuning.arrive_epsilon;
            if !agent.is_walking() && needs_move {
                let path = planner.find_path(grid, agent.pos, target);
                begin_walk(agent, path, Some(zone));
            }

            step_walk(agent, dt, tuning.walk_speed);
            maybe_wander(agent, layout, grid, planner, tuning, now);

            // Keep the character on the floor no matter what moved it.
            agent.pos = grid.clamp_to_walkable(agent.pos);
            finalize_pose(agent, seat_id.and_then(|id| layout.seat(id)));

            if agent.is_sub_agent() && agent.spawn_alpha < 1.0 {
                agent.spawn_alpha =
                    (agent.spawn_alpha + dt * tuning.spawn_fade_rate).min(1.0);
            }
        }
    }

    /// Tick and hand the finished frame to `sink`.
    pub fn run_frame<S: FrameSink>(&mut self, dt: f32, sink: &mut S) {
        self.tick(dt);
        let frame = self.frame();
        sink.on_frame(self.clock.now_ms(), &frame);
    }

    // ── Render output ─────────────────────────────────────────────────────

    /// Snapshot of every character in spawn order, for the renderer.
    pub fn frame(&self) -> Vec<AgentFrame> {
        self.sessions
            .keys_in_spawn_order()
            .iter()
            .filter_map(|k| self.sessions.agent(k))
            .map(|a| AgentFrame {
                agent_id: a.agent_id.clone(),
                label: a.label.clone(),
                x: a.pos.x,
                y: a.pos.y,
                facing: a.facing,
                activity: a.activity,
                zone: a.zone,
                seated: a.seated,
                color: a.color,
                spawn_alpha: a.spawn_alpha,
                anim_frame: a.anim_frame,
            })
            .collect()
    }
}

/// Walk target for a zone with no seats: the middle of its floor region.
fn zone_fallback(layout: &OfficeLayout, zone: ZoneKind) -> BoardPoint {
    layout
        .zone(zone)
        .map(|z| z.rect.center())
        .unwrap_or_else(|| BoardPoint::new(layout.board_w * 0.5, layout.board_h * 0.5))
}

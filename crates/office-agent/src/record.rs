//! The `AgentRecord` — all mutable state for one character.

use office_core::{Activity, AgentRng, AgentSeq, BoardPoint, Facing, SeatId, ZoneKind};

use crate::{color_for, keys};

/// Maximum characters kept from a message preview.
const PREVIEW_CHARS: usize = 200;

/// Everything the simulation knows about one agent character.
///
/// Created the first time a session key is observed and mutated in place by
/// the session manager (telemetry) and the tick pipeline (zones, movement).
/// Sub-agent records are removed when their session disappears from the
/// polled list; permanent (configured) records are never removed.
#[derive(Debug)]
pub struct AgentRecord {
    // ── Identity ──────────────────────────────────────────────────────────
    /// Live session key.  For configured agents this is remapped to the real
    /// session key once telemetry arrives, while the record itself stays
    /// registered under its permanent `configured:` key.
    pub session_key: String,

    pub agent_id: String,

    /// Display label shown under the character.
    pub label: String,

    /// Spawn-order sequence, used for stable tick iteration.
    pub seq: AgentSeq,

    /// Render color (hex), derived from `agent_id`.
    pub color: &'static str,

    /// Parent session key for sub-agents; `None` for top-level agents.
    /// A lookup key into the agent map, not a pointer.
    pub parent_key: Option<String>,

    /// Configured agents are permanent and survive session churn.
    pub permanent: bool,

    // ── Telemetry ─────────────────────────────────────────────────────────
    pub activity: Activity,
    pub last_active_ms: u64,
    pub model: Option<String>,
    pub last_message: Option<String>,

    // ── Placement ─────────────────────────────────────────────────────────
    pub pos: BoardPoint,
    pub facing: Facing,
    pub zone: Option<ZoneKind>,
    pub seat: Option<SeatId>,
    pub seated: bool,

    /// `false` until the first zone pass drops the agent on its seat, so
    /// freshly spawned characters don't walk in from the board origin.
    pub placed: bool,

    // ── Walking ───────────────────────────────────────────────────────────
    /// In-flight path; empty when stationary.
    pub walk_path: Vec<BoardPoint>,
    pub walk_cursor: usize,
    /// Zone the current walk is heading to.
    pub target_zone: Option<ZoneKind>,
    /// Seat target of the last zone pass (change detection).
    pub target: Option<BoardPoint>,
    /// Business activity saved while `activity == Walking`.
    pub previous_activity: Option<Activity>,

    // ── Idle behavior ─────────────────────────────────────────────────────
    /// Clock time at which the next wander fires; re-armed after each one.
    pub wander_deadline_ms: Option<u64>,

    /// Per-agent deterministic RNG (wander timing, POI choice).
    pub rng: AgentRng,

    // ── Cosmetics ─────────────────────────────────────────────────────────
    /// Sub-agents fade in from 0; everyone else starts at 1.
    pub spawn_alpha: f32,
    pub anim_frame: u8,
    pub anim_timer: f32,
}

impl AgentRecord {
    /// Create a record for a newly observed session.
    ///
    /// `agent_id` defaults to the id embedded in the session key.  The label
    /// starts as the agent id and is refined by later telemetry.
    pub fn new(
        session_key: &str,
        agent_id: Option<&str>,
        parent_key: Option<&str>,
        seq: AgentSeq,
        seed: u64,
        now_ms: u64,
    ) -> Self {
        let agent_id = agent_id
            .unwrap_or_else(|| keys::extract_agent_id(session_key))
            .to_owned();
        let is_sub = parent_key.is_some();
        Self {
            color: color_for(&agent_id),
            label: agent_id.clone(),
            agent_id,
            seq,
            parent_key: parent_key.map(str::to_owned),
            permanent: false,
            activity: Activity::Idle,
            last_active_ms: now_ms,
            model: None,
            last_message: None,
            pos: BoardPoint::default(),
            facing: Facing::default(),
            zone: None,
            seat: None,
            seated: false,
            placed: false,
            walk_path: Vec::new(),
            walk_cursor: 0,
            target_zone: None,
            target: None,
            previous_activity: None,
            wander_deadline_ms: None,
            rng: AgentRng::new(seed, session_key),
            spawn_alpha: if is_sub { 0.0 } else { 1.0 },
            anim_frame: 0,
            anim_timer: 0.0,
            session_key: session_key.to_owned(),
        }
    }

    /// Create a permanent record for a configured agent, registered under
    /// `configured:<agent_id>`.
    pub fn permanent(agent_id: &str, seq: AgentSeq, seed: u64, now_ms: u64) -> Self {
        let key = keys::configured_key(agent_id);
        let mut rec = Self::new(&key, Some(agent_id), None, seq, seed, now_ms);
        rec.permanent = true;
        rec
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// A record with a parent reference is a sub-agent.
    #[inline]
    pub fn is_sub_agent(&self) -> bool {
        self.parent_key.is_some()
    }

    #[inline]
    pub fn is_walking(&self) -> bool {
        self.activity == Activity::Walking
    }

    // ── Telemetry updates ─────────────────────────────────────────────────

    /// Stamp the record as active now.
    #[inline]
    pub fn touch(&mut self, now_ms: u64) {
        self.last_active_ms = now_ms;
    }

    /// Store a truncated message preview (char-boundary safe).
    pub fn set_preview(&mut self, text: &str) {
        self.last_message = Some(text.chars().take(PREVIEW_CHARS).collect());
    }

    /// Switch to a new business activity.
    ///
    /// If the agent is mid-walk the walk continues and the new activity
    /// replaces the saved one, so it applies on arrival instead of
    /// interrupting the excursion.
    pub fn set_activity(&mut self, activity: Activity) {
        if self.is_walking() {
            self.previous_activity = Some(activity);
        } else {
            self.activity = activity;
        }
    }
}

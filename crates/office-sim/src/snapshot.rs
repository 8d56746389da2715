//! The per-frame render snapshot.

use office_core::{Activity, Facing, ZoneKind};

/// Everything the rendering collaborator needs to draw one character.
///
/// Produced once per frame; the renderer never touches agent records
/// directly.
#[derive(Clone, Debug, PartialEq)]
pub struct AgentFrame {
    pub agent_id: String,
    pub label: String,
    pub x: f32,
    pub y: f32,
    pub facing: Facing,
    pub activity: Activity,
    pub zone: Option<ZoneKind>,
    pub seated: bool,
    pub color: &'static str,

    /// Sub-agent fade-in factor in `[0, 1]`.
    pub spawn_alpha: f32,
    /// Cosmetic sprite frame (0..4).
    pub anim_frame: u8,
}

/// Callback invoked with the finished frame at the end of each tick.
///
/// The default implementation does nothing, so implementors only override
/// what they care about.
pub trait FrameSink {
    fn on_frame(&mut self, _now_ms: u64, _frame: &[AgentFrame]) {}
}

/// A [`FrameSink`] that does nothing.  Use when driving the sim headless
/// (tests, tools) via [`run_frame`][crate::OfficeSim::run_frame].
pub struct NoopSink;

impl FrameSink for NoopSink {}

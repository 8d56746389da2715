//! The Stationary ↔ Walking state machine.

use office_agent::AgentRecord;
use office_core::{Activity, BoardPoint, Facing, ZoneKind};
use office_layout::Seat;

/// Displacement below which facing is left unchanged (avoids flicker from
/// float noise when snapping onto a waypoint).
const FACING_EPSILON: f32 = 0.001;

/// Enter the Walking state along `path`.
///
/// Saves the current business activity for restoration on arrival and resets
/// the waypoint cursor.  Calling this while already walking replaces the
/// path and keeps the originally saved activity — the walk simply re-routes.
pub fn begin_walk(agent: &mut AgentRecord, path: Vec<BoardPoint>, target_zone: Option<ZoneKind>) {
    if !agent.is_walking() {
        agent.previous_activity = Some(agent.activity);
        agent.activity = Activity::Walking;
    }
    agent.seated = false;
    agent.walk_path = path;
    agent.walk_cursor = 0;
    agent.target_zone = target_zone;
}

/// Advance a walking agent by one frame.  No-op for stationary agents.
///
/// Moves toward the current waypoint at `walk_speed` board units per second,
/// faces the dominant displacement axis, snaps onto a waypoint when within
/// one frame's step, and on the final waypoint leaves the Walking state:
/// the saved activity is restored and the target zone adopted.
///
/// Returns `true` if the agent arrived (left the Walking state) this frame.
pub fn step_walk(agent: &mut AgentRecord, dt: f32, walk_speed: f32) -> bool {
    if !agent.is_walking() {
        return false;
    }
    let Some(&waypoint) = agent.walk_path.get(agent.walk_cursor) else {
        // Empty or exhausted path — treat as already there.
        return finish_walk(agent);
    };

    let dx = waypoint.x - agent.pos.x;
    let dy = waypoint.y - agent.pos.y;
    let dist = dx.hypot(dy);
    let step = walk_speed * dt;

    if dist > FACING_EPSILON {
        agent.facing = Facing::from_displacement(dx, dy);
    }

    if dist <= step || dist < FACING_EPSILON {
        // Snap exactly onto the waypoint and advance.
        agent.pos = waypoint;
        agent.walk_cursor += 1;
        if agent.walk_cursor >= agent.walk_path.len() {
            return finish_walk(agent);
        }
    } else {
        agent.pos.x += dx / dist * step;
        agent.pos.y += dy / dist * step;
    }
    false
}

/// Apply the resting pose for a stationary agent.
///
/// Seated means: not walking, not sleeping, and not in the break room —
/// break-room occupants read as standing or lounging.  A seated agent faces
/// exactly with its chair.
pub fn finalize_pose(agent: &mut AgentRecord, seat: Option<&Seat>) {
    agent.seated = !agent.is_walking()
        && agent.activity != Activity::Sleeping
        && agent.zone != Some(ZoneKind::BreakRoom);
    if agent.seated {
        if let Some(seat) = seat {
            agent.facing = seat.facing;
        }
    }
}

// ── Private helpers ───────────────────────────────────────────────────────────

/// Leave the Walking state: adopt the target zone, restore the saved
/// activity, and clear the walk bookkeeping.
fn finish_walk(agent: &mut AgentRecord) -> bool {
    if let Some(zone) = agent.target_zone.take() {
        agent.zone = Some(zone);
    }
    agent.activity = agent.previous_activity.take().unwrap_or(Activity::Idle);
    agent.walk_path.clear();
    agent.walk_cursor = 0;
    true
}

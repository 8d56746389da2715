//! Deterministic seat allocation.

use office_agent::AgentRecord;
use office_core::{stable_hash, SeatId, ZoneKind};
use office_layout::{OfficeLayout, Seat};
use rustc_hash::FxHashSet;

/// Seats claimed so far in the current allocation pass.
///
/// Rebuilt every tick; seat assignment is re-derived, not persisted.
pub type OccupiedSeats = FxHashSet<SeatId>;

/// Pick a seat for `agent` in `zone` and claim it in `occupied`.
///
/// Preference order:
///
/// 1. The seat the agent already holds, if it is in the target zone and not
///    yet claimed this pass — temporal stability without permanent ownership.
/// 2. A free seat of the zone, chosen by a stable hash of
///    `(agent_id, session_key)` modulo the pool — the same agent always
///    lands on the same seat given an unchanged pool.
/// 3. If every seat is taken, the full zone pool with the same hash rule —
///    an accepted visual collision, logged, never an error.
///
/// Returns `None` only when the zone has no seats at all; callers fall back
/// to the zone's floor region.
pub fn choose_seat<'a>(
    layout:   &'a OfficeLayout,
    agent:    &AgentRecord,
    zone:     ZoneKind,
    occupied: &mut OccupiedSeats,
) -> Option<&'a Seat> {
    // Stability: keep the previous seat when possible.
    if let Some(prev) = agent.seat.and_then(|id| layout.seat(id)) {
        if prev.zone == zone && !occupied.contains(&prev.id) {
            occupied.insert(prev.id);
            return Some(prev);
        }
    }

    let zone_seats: Vec<&Seat> = layout.seats_in(zone).collect();
    if zone_seats.is_empty() {
        return None;
    }

    let free: Vec<&Seat> = zone_seats
        .iter()
        .copied()
        .filter(|s| !occupied.contains(&s.id))
        .collect();

    let pool = if free.is_empty() {
        tracing::debug!(
            zone = %zone, agent = %agent.agent_id,
            "seat pool exhausted; reusing an occupied seat"
        );
        &zone_seats
    } else {
        &free
    };

    let key = format!("{}:{}", agent.agent_id, agent.session_key);
    let chosen = pool[(stable_hash(&key) % pool.len() as u64) as usize];
    occupied.insert(chosen.id);
    Some(chosen)
}

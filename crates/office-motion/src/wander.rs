//! Idle wander: occasional excursions to points of interest.
//!
//! Only stationary agents in the break room or lead office wander — working
//! zones stay orderly.  Each agent carries its own countdown; when it fires,
//! the agent picks a random point of interest for its zone and, if the point
//! is far enough away to be worth the trip, walks there through the normal
//! Walking machinery.  The next zone pass walks the agent back to its seat,
//! so a wander reads as "get up, stretch, come back" without ever changing
//! the agent's logical activity.

use office_agent::AgentRecord;
use office_core::{Activity, SimTuning};
use office_grid::{Planner, WalkGrid};
use office_layout::OfficeLayout;

/// Run the wander countdown for one agent.  Call once per tick, after
/// movement stepping.
pub fn maybe_wander<P: Planner>(
    agent:   &mut AgentRecord,
    layout:  &OfficeLayout,
    grid:    &WalkGrid,
    planner: &P,
    tuning:  &SimTuning,
    now_ms:  u64,
) {
    if agent.is_walking() {
        return;
    }
    // Only truly idle characters get up; sleepers and workers stay put.
    // The countdown holds where it is until the agent is idle again.
    if agent.activity != Activity::Idle {
        return;
    }
    let Some(zone) = agent.zone else { return };
    if !zone.allows_wander() {
        // Leaving a wander zone disarms the timer; it re-arms fresh on return.
        agent.wander_deadline_ms = None;
        return;
    }

    let Some(deadline) = agent.wander_deadline_ms else {
        agent.wander_deadline_ms = Some(now_ms + roll_delay(agent, tuning));
        return;
    };
    if now_ms < deadline {
        return;
    }

    // Fired: re-arm first so a skipped excursion still waits a full cycle.
    agent.wander_deadline_ms = Some(now_ms + roll_delay(agent, tuning));

    let pois = layout.pois(zone);
    let Some(&poi) = agent.rng.choose(pois) else {
        return;
    };
    if agent.pos.distance(poi) <= tuning.wander_min_dist {
        return;
    }

    let target = grid.clamp_to_walkable(poi);
    let path = planner.find_path(grid, agent.pos, target);
    tracing::trace!(agent = %agent.agent_id, zone = %zone, to = %target, "wandering");
    // Stay in the same zone; the walk is purely cosmetic.
    crate::walk::begin_walk(agent, path, Some(zone));
}

fn roll_delay(agent: &mut AgentRecord, tuning: &SimTuning) -> u64 {
    let (lo, hi) = tuning.wander_delay_ms;
    agent.rng.gen_range(lo..=hi.max(lo))
}

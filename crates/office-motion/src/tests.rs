//! Unit tests for office-motion.

#[cfg(test)]
mod helpers {
    use office_agent::AgentRecord;
    use office_core::{AgentSeq, BoardPoint};

    pub fn agent_at(x: f32, y: f32) -> AgentRecord {
        let mut a = AgentRecord::new("agent:worker:k", None, None, AgentSeq(0), 7, 0);
        a.pos = BoardPoint::new(x, y);
        a.placed = true;
        a
    }

    pub fn pt(x: f32, y: f32) -> BoardPoint {
        BoardPoint::new(x, y)
    }
}

// ── Walking state machine ─────────────────────────────────────────────────────

#[cfg(test)]
mod walking {
    use office_core::{Activity, Facing, ZoneKind};

    use super::helpers::{agent_at, pt};
    use crate::{begin_walk, step_walk};

    #[test]
    fn begin_saves_activity_and_resets_cursor() {
        let mut a = agent_at(0.0, 0.0);
        a.activity = Activity::Coding;
        begin_walk(&mut a, vec![pt(10.0, 0.0)], Some(ZoneKind::MainFloor));
        assert_eq!(a.activity, Activity::Walking);
        assert_eq!(a.previous_activity, Some(Activity::Coding));
        assert_eq!(a.walk_cursor, 0);
        assert!(!a.seated);
    }

    #[test]
    fn reroute_keeps_original_saved_activity() {
        let mut a = agent_at(0.0, 0.0);
        a.activity = Activity::Reading;
        begin_walk(&mut a, vec![pt(10.0, 0.0)], None);
        // Replanning mid-walk must not save Walking as the previous activity.
        begin_walk(&mut a, vec![pt(0.0, 10.0)], None);
        assert_eq!(a.previous_activity, Some(Activity::Reading));
    }

    #[test]
    fn moves_at_fixed_speed_toward_waypoint() {
        let mut a = agent_at(0.0, 0.0);
        begin_walk(&mut a, vec![pt(10.0, 0.0)], None);
        let arrived = step_walk(&mut a, 0.1, 20.0); // step = 2 units
        assert!(!arrived);
        assert_eq!(a.pos.x, 2.0);
        assert_eq!(a.facing, Facing::Right);
    }

    #[test]
    fn snaps_to_waypoint_within_one_step() {
        let mut a = agent_at(9.0, 0.0);
        begin_walk(&mut a, vec![pt(10.0, 0.0), pt(10.0, 20.0)], None);
        step_walk(&mut a, 0.1, 20.0); // 2-unit step covers the 1-unit gap
        assert_eq!((a.pos.x, a.pos.y), (10.0, 0.0));
        assert_eq!(a.walk_cursor, 1);
        assert!(a.is_walking());
    }

    #[test]
    fn facing_follows_dominant_axis() {
        let mut a = agent_at(0.0, 0.0);
        begin_walk(&mut a, vec![pt(0.0, -10.0)], None);
        step_walk(&mut a, 0.05, 20.0);
        assert_eq!(a.facing, Facing::Up);
    }

    #[test]
    fn arrival_restores_activity_and_zone() {
        let mut a = agent_at(0.0, 0.0);
        a.activity = Activity::Thinking;
        begin_walk(&mut a, vec![pt(3.0, 0.0)], Some(ZoneKind::BreakRoom));

        let mut arrived = false;
        for _ in 0..100 {
            if step_walk(&mut a, 0.05, 20.0) {
                arrived = true;
                break;
            }
        }
        assert!(arrived, "walk never completed");
        assert_eq!(a.activity, Activity::Thinking);
        assert_eq!(a.zone, Some(ZoneKind::BreakRoom));
        assert_eq!((a.pos.x, a.pos.y), (3.0, 0.0));
        assert!(a.walk_path.is_empty());
        assert!(a.previous_activity.is_none());
    }

    #[test]
    fn empty_path_finishes_immediately() {
        let mut a = agent_at(5.0, 5.0);
        a.activity = Activity::Coding;
        begin_walk(&mut a, vec![], Some(ZoneKind::MainFloor));
        assert!(step_walk(&mut a, 0.016, 20.0));
        assert_eq!(a.activity, Activity::Coding);
    }

    #[test]
    fn stationary_step_is_noop() {
        let mut a = agent_at(5.0, 5.0);
        a.activity = Activity::Coding;
        assert!(!step_walk(&mut a, 0.016, 20.0));
        assert_eq!((a.pos.x, a.pos.y), (5.0, 5.0));
    }
}

// ── Resting pose ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod pose {
    use office_core::{Activity, Facing, ZoneKind};
    use office_layout::OfficeLayout;

    use super::helpers::agent_at;
    use crate::finalize_pose;

    #[test]
    fn seated_adopts_chair_facing() {
        let layout = OfficeLayout::standard();
        let seat = layout.seats_in(ZoneKind::MainFloor).next().unwrap();

        let mut a = agent_at(seat.pos.x, seat.pos.y);
        a.activity = Activity::Coding;
        a.zone = Some(ZoneKind::MainFloor);
        finalize_pose(&mut a, Some(seat));
        assert!(a.seated);
        assert_eq!(a.facing, seat.facing);
    }

    #[test]
    fn break_room_never_seated() {
        let layout = OfficeLayout::standard();
        let seat = layout.seats_in(ZoneKind::BreakRoom).next().unwrap();

        let mut a = agent_at(seat.pos.x, seat.pos.y);
        a.activity = Activity::Idle;
        a.zone = Some(ZoneKind::BreakRoom);
        a.facing = Facing::Down;
        finalize_pose(&mut a, Some(seat));
        assert!(!a.seated);
        // Facing untouched for standing agents.
        assert_eq!(a.facing, Facing::Down);
    }

    #[test]
    fn sleeping_never_seated() {
        let layout = OfficeLayout::standard();
        let seat = layout.seats_in(ZoneKind::MainFloor).next().unwrap();

        let mut a = agent_at(seat.pos.x, seat.pos.y);
        a.activity = Activity::Sleeping;
        a.zone = Some(ZoneKind::MainFloor);
        finalize_pose(&mut a, Some(seat));
        assert!(!a.seated);
    }
}

// ── Wander ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod wander {
    use office_core::{Activity, SimTuning, ZoneKind};
    use office_grid::BfsPlanner;
    use office_layout::OfficeLayout;

    use super::helpers::agent_at;
    use crate::maybe_wander;

    fn tuning() -> SimTuning {
        SimTuning {
            wander_delay_ms: (1_000, 1_000), // fixed for exact assertions
            ..SimTuning::default()
        }
    }

    #[test]
    fn first_call_arms_the_timer() {
        let layout = OfficeLayout::standard();
        let grid = layout.build_grid();
        let mut a = agent_at(250.0, 120.0);
        a.zone = Some(ZoneKind::BreakRoom);

        maybe_wander(&mut a, &layout, &grid, &BfsPlanner, &tuning(), 5_000);
        assert_eq!(a.wander_deadline_ms, Some(6_000));
        assert!(!a.is_walking());
    }

    #[test]
    fn fires_after_deadline_and_rearms() {
        let layout = OfficeLayout::standard();
        let grid = layout.build_grid();
        let mut a = agent_at(250.0, 120.0);
        a.zone = Some(ZoneKind::BreakRoom);
        a.activity = Activity::Idle;
        a.wander_deadline_ms = Some(1_000);

        maybe_wander(&mut a, &layout, &grid, &BfsPlanner, &tuning(), 1_000);
        assert_eq!(a.wander_deadline_ms, Some(2_000), "timer must re-arm");
    }

    #[test]
    fn excursion_reuses_walking_machinery() {
        let layout = OfficeLayout::standard();
        let grid = layout.build_grid();
        let t = tuning();

        // Park far from every break-room POI so any pick is worth the trip.
        let mut a = agent_at(250.0, 60.0);
        a.zone = Some(ZoneKind::BreakRoom);
        a.activity = Activity::Idle;
        a.wander_deadline_ms = Some(0);

        maybe_wander(&mut a, &layout, &grid, &BfsPlanner, &t, 0);
        assert!(a.is_walking());
        assert_eq!(a.previous_activity, Some(Activity::Idle));
        assert_eq!(a.target_zone, Some(ZoneKind::BreakRoom));
        assert!(!a.walk_path.is_empty());
    }

    #[test]
    fn working_zones_do_not_wander() {
        let layout = OfficeLayout::standard();
        let grid = layout.build_grid();
        let mut a = agent_at(90.0, 85.0);
        a.zone = Some(ZoneKind::MainFloor);
        a.wander_deadline_ms = Some(0);

        maybe_wander(&mut a, &layout, &grid, &BfsPlanner, &tuning(), 10_000);
        assert!(!a.is_walking());
        assert_eq!(a.wander_deadline_ms, None, "timer disarmed outside wander zones");
    }

    #[test]
    fn walking_agents_are_left_alone() {
        let layout = OfficeLayout::standard();
        let grid = layout.build_grid();
        let mut a = agent_at(250.0, 120.0);
        a.zone = Some(ZoneKind::BreakRoom);
        a.activity = Activity::Walking;
        a.wander_deadline_ms = Some(0);

        maybe_wander(&mut a, &layout, &grid, &BfsPlanner, &tuning(), 10_000);
        assert_eq!(a.wander_deadline_ms, Some(0), "deadline untouched mid-walk");
    }

    #[test]
    fn deterministic_for_fixed_seed() {
        let layout = OfficeLayout::standard();
        let grid = layout.build_grid();
        let t = tuning();

        let run = || {
            let mut a = agent_at(250.0, 60.0);
            a.zone = Some(ZoneKind::BreakRoom);
            a.wander_deadline_ms = Some(0);
            maybe_wander(&mut a, &layout, &grid, &BfsPlanner, &t, 0);
            (a.walk_path.clone(), a.wander_deadline_ms)
        };
        assert_eq!(run(), run());
    }
}

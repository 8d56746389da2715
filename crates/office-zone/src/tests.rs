//! Unit tests for office-zone.

#[cfg(test)]
mod helpers {
    use office_agent::AgentRecord;
    use office_core::AgentSeq;

    pub fn agent(key: &str, seq: u32) -> AgentRecord {
        AgentRecord::new(key, None, None, AgentSeq(seq), 0, 0)
    }

    pub fn sub_agent(key: &str, parent: &str, seq: u32) -> AgentRecord {
        AgentRecord::new(key, None, Some(parent), AgentSeq(seq), 0, 0)
    }
}

// ── Zone policy ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod policy {
    use office_core::{Activity, ZoneKind};

    use super::helpers::{agent, sub_agent};
    use crate::ZonePolicy;

    const IDLE_BREAK_MS: u64 = 30_000;

    #[test]
    fn sub_agents_always_sub_zone() {
        let mut p = ZonePolicy::new(IDLE_BREAK_MS);
        let mut sub = sub_agent("agent:max:subagent:1", "agent:max:x", 1);
        // Even a sleeping sub-agent stays in the sub zone.
        sub.activity = Activity::Sleeping;
        assert_eq!(p.assign_zone(&sub, &[], 0), ZoneKind::SubAgentZone);
    }

    #[test]
    fn sleeping_goes_to_break_room() {
        let mut p = ZonePolicy::new(IDLE_BREAK_MS);
        let mut a = agent("agent:worker:1", 0);
        a.activity = Activity::Sleeping;
        let refs = [&a];
        assert_eq!(p.assign_zone(&a, &refs, 0), ZoneKind::BreakRoom);
    }

    #[test]
    fn idle_past_threshold_goes_to_break_room() {
        let mut p = ZonePolicy::new(IDLE_BREAK_MS);
        let mut a = agent("agent:worker:1", 0);
        a.activity = Activity::Idle;
        a.last_active_ms = 0;

        let refs = [&a];
        // Exactly at the threshold: not yet.
        assert_ne!(p.assign_zone(&a, &refs, IDLE_BREAK_MS), ZoneKind::BreakRoom);
        // One past it: break room on the very next computation.
        assert_eq!(
            p.assign_zone(&a, &refs, IDLE_BREAK_MS + 1),
            ZoneKind::BreakRoom
        );
    }

    #[test]
    fn lead_hint_wins_over_observation_order() {
        let mut p = ZonePolicy::new(IDLE_BREAK_MS);
        let mut worker = agent("agent:worker:1", 0);
        let mut lead = agent("agent:tech-lead:1", 1);
        worker.activity = Activity::Coding;
        lead.activity = Activity::Coding;

        let refs = [&worker, &lead];
        assert_eq!(p.assign_zone(&worker, &refs, 0), ZoneKind::MainFloor);
        assert_eq!(p.assign_zone(&lead, &refs, 0), ZoneKind::LeadOffice);
        assert_eq!(p.lead_id(), Some("tech-lead"));
    }

    #[test]
    fn first_agent_is_fallback_lead() {
        let mut p = ZonePolicy::new(IDLE_BREAK_MS);
        let mut a = agent("agent:alpha:1", 0);
        let mut b = agent("agent:beta:1", 1);
        a.activity = Activity::Coding;
        b.activity = Activity::Coding;

        let refs = [&a, &b];
        assert_eq!(p.assign_zone(&a, &refs, 0), ZoneKind::LeadOffice);
        assert_eq!(p.assign_zone(&b, &refs, 0), ZoneKind::MainFloor);
    }

    #[test]
    fn lead_memo_does_not_flap() {
        let mut p = ZonePolicy::new(IDLE_BREAK_MS);
        let mut a = agent("agent:alpha:1", 0);
        a.activity = Activity::Coding;
        let refs = [&a];
        assert_eq!(p.assign_zone(&a, &refs, 0), ZoneKind::LeadOffice);

        // A hinted candidate appearing later must NOT steal the office…
        let mut late = agent("agent:team-lead:9", 1);
        late.activity = Activity::Coding;
        let refs = [&a, &late];
        assert_eq!(p.assign_zone(&late, &refs, 0), ZoneKind::MainFloor);
        assert_eq!(p.assign_zone(&a, &refs, 0), ZoneKind::LeadOffice);

        // …until an explicit reset re-resolves.
        p.reset_lead();
        assert_eq!(p.assign_zone(&late, &refs, 0), ZoneKind::LeadOffice);
        assert_eq!(p.assign_zone(&a, &refs, 0), ZoneKind::MainFloor);
    }

    #[test]
    fn sub_agents_never_lead() {
        let mut p = ZonePolicy::new(IDLE_BREAK_MS);
        let mut sub = sub_agent("agent:lead-helper:subagent:1", "agent:x:1", 0);
        sub.activity = Activity::Coding;
        assert_eq!(p.assign_zone(&sub, &[], 0), ZoneKind::SubAgentZone);
    }
}

// ── Seat allocation ───────────────────────────────────────────────────────────

#[cfg(test)]
mod seats {
    use office_core::ZoneKind;
    use office_layout::OfficeLayout;

    use super::helpers::agent;
    use crate::{choose_seat, OccupiedSeats};

    #[test]
    fn deterministic_for_same_identity() {
        let layout = OfficeLayout::standard();
        let a = agent("agent:worker:abc", 0);

        let mut occ1 = OccupiedSeats::default();
        let mut occ2 = OccupiedSeats::default();
        let s1 = choose_seat(&layout, &a, ZoneKind::MainFloor, &mut occ1).unwrap();
        let s2 = choose_seat(&layout, &a, ZoneKind::MainFloor, &mut occ2).unwrap();
        assert_eq!(s1.id, s2.id);
    }

    #[test]
    fn previous_seat_kept_when_free() {
        let layout = OfficeLayout::standard();
        let mut a = agent("agent:worker:abc", 0);

        let mut occ = OccupiedSeats::default();
        let first = choose_seat(&layout, &a, ZoneKind::MainFloor, &mut occ).unwrap().id;
        a.seat = Some(first);

        let mut occ = OccupiedSeats::default();
        let again = choose_seat(&layout, &a, ZoneKind::MainFloor, &mut occ).unwrap().id;
        assert_eq!(first, again);
    }

    #[test]
    fn previous_seat_dropped_on_zone_change() {
        let layout = OfficeLayout::standard();
        let mut a = agent("agent:worker:abc", 0);

        let mut occ = OccupiedSeats::default();
        let main_seat = choose_seat(&layout, &a, ZoneKind::MainFloor, &mut occ).unwrap().id;
        a.seat = Some(main_seat);

        let mut occ = OccupiedSeats::default();
        let break_seat = choose_seat(&layout, &a, ZoneKind::BreakRoom, &mut occ).unwrap();
        assert_eq!(break_seat.zone, ZoneKind::BreakRoom);
        assert_ne!(break_seat.id, main_seat);
    }

    #[test]
    fn no_double_booking_while_seats_remain() {
        let layout = OfficeLayout::standard();
        let mut occ = OccupiedSeats::default();
        let mut taken = Vec::new();

        // Six agents, six main-floor seats: all distinct.
        for i in 0..6 {
            let a = agent(&format!("agent:worker-{i}:k{i}"), i);
            let seat = choose_seat(&layout, &a, ZoneKind::MainFloor, &mut occ)
                .unwrap()
                .id;
            assert!(!taken.contains(&seat), "seat {seat} double-booked");
            taken.push(seat);
        }
    }

    #[test]
    fn exhausted_pool_reuses_rather_than_fails() {
        let layout = OfficeLayout::standard();
        let mut occ = OccupiedSeats::default();

        // Seven agents into six seats: the seventh reuses one.
        for i in 0..6 {
            let a = agent(&format!("agent:worker-{i}:k{i}"), i);
            choose_seat(&layout, &a, ZoneKind::MainFloor, &mut occ).unwrap();
        }
        let overflow = agent("agent:worker-6:k6", 6);
        let seat = choose_seat(&layout, &overflow, ZoneKind::MainFloor, &mut occ).unwrap();
        assert_eq!(seat.zone, ZoneKind::MainFloor);
    }

    #[test]
    fn stale_seat_id_ignored() {
        let layout = OfficeLayout::standard();
        let mut a = agent("agent:worker:abc", 0);
        a.seat = Some(office_core::SeatId(9_999));

        let mut occ = OccupiedSeats::default();
        let seat = choose_seat(&layout, &a, ZoneKind::MainFloor, &mut occ);
        assert!(seat.is_some());
    }
}

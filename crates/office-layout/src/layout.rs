//! The assembled office layout and the standard board.
//!
//! Coordinates for the standard board are intentionally explicit and
//! layout-driven: every desk, blocker, and point of interest is a literal so
//! the board can be re-tuned without touching simulation code.

use office_core::{BoardPoint, BoardRect, Facing, SeatId, ZoneKind};
use office_grid::{GridBuilder, WalkGrid};

use crate::seat::{Seat, SeatRole};
use crate::zone::{Floor, Zone};
use crate::{LayoutError, LayoutResult};

/// Wall band across the top of the board.
const WALL_H: f32 = 38.0;

/// Margin kept unwalkable around the board interior.
const FLOOR_MARGIN: f32 = 6.0;

/// Static configuration of the whole office: board dimensions, zone
/// rectangles, the seat table, furniture blockers, and per-zone points of
/// interest.  Built once, shared read-only.
#[derive(Clone, Debug)]
pub struct OfficeLayout {
    pub board_w: f32,
    pub board_h: f32,

    /// Walk-grid cell size in board units.
    pub nav_cell: f32,

    zones:    Vec<Zone>,
    seats:    Vec<Seat>,
    blockers: Vec<BoardRect>,

    /// Wander destinations per zone, parallel to [`ZoneKind::ALL`].
    pois: [Vec<BoardPoint>; 4],
}

impl OfficeLayout {
    /// Assemble a layout from parts.  Seat ids must match their table index
    /// (the loader guarantees this).
    pub fn new(
        board_w:  f32,
        board_h:  f32,
        nav_cell: f32,
        zones:    Vec<Zone>,
        seats:    Vec<Seat>,
        blockers: Vec<BoardRect>,
        pois:     [Vec<BoardPoint>; 4],
    ) -> LayoutResult<Self> {
        for (i, seat) in seats.iter().enumerate() {
            if seat.id.index() != i {
                return Err(LayoutError::SeatIdMismatch {
                    label: seat.label.clone(),
                    expected: i,
                    got: seat.id,
                });
            }
        }
        Ok(Self { board_w, board_h, nav_cell, zones, seats, blockers, pois })
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn zone(&self, kind: ZoneKind) -> Option<&Zone> {
        self.zones.iter().find(|z| z.kind == kind)
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Seat by id.  Returns `None` for stale ids from an older layout.
    pub fn seat(&self, id: SeatId) -> Option<&Seat> {
        self.seats.get(id.index())
    }

    /// All seats belonging to `zone`, in table order.
    pub fn seats_in(&self, zone: ZoneKind) -> impl Iterator<Item = &Seat> + '_ {
        self.seats.iter().filter(move |s| s.zone == zone)
    }

    /// Wander points of interest for `zone`.
    pub fn pois(&self, zone: ZoneKind) -> &[BoardPoint] {
        let idx = ZoneKind::ALL.iter().position(|&z| z == zone).unwrap_or(0);
        &self.pois[idx]
    }

    /// Zone containing `p`, if any.
    pub fn zone_at(&self, p: BoardPoint) -> Option<ZoneKind> {
        self.zones.iter().find(|z| z.rect.contains(p)).map(|z| z.kind)
    }

    // ── Walk grid ─────────────────────────────────────────────────────────

    /// Build the walkability grid for this layout: interior floor, minus
    /// declared blockers, with every seat footprint forced open.
    ///
    /// The grid is derived data — call again after changing the layout;
    /// there is no incremental patching.
    pub fn build_grid(&self) -> WalkGrid {
        let mut b = GridBuilder::new(self.board_w, self.board_h, self.nav_cell);
        b.open_rect(BoardRect::new(
            FLOOR_MARGIN,
            FLOOR_MARGIN,
            self.board_w - 2.0 * FLOOR_MARGIN,
            self.board_h - 2.0 * FLOOR_MARGIN,
        ));
        for &rect in &self.blockers {
            b.block_rect(rect);
        }
        for seat in &self.seats {
            b.open_seat(seat.pos);
        }
        b.build()
    }

    // ── Standard board ────────────────────────────────────────────────────

    /// The standard 320×256 office board: four zones, twelve seats, and the
    /// furniture arrangement the character sprites were drawn for.
    pub fn standard() -> Self {
        let zones = vec![
            Zone::new(ZoneKind::LeadOffice,   BoardRect::new(0.0, 142.0, 196.0, 114.0), Floor::Carpet),
            Zone::new(ZoneKind::MainFloor,    BoardRect::new(0.0, WALL_H, 196.0, 104.0), Floor::Wood),
            Zone::new(ZoneKind::BreakRoom,    BoardRect::new(196.0, WALL_H, 124.0, 104.0), Floor::Tile),
            Zone::new(ZoneKind::SubAgentZone, BoardRect::new(196.0, 142.0, 124.0, 114.0), Floor::Wood),
        ];

        let mut seats = Vec::new();
        let mut add = |label: &str, zone, role, desk: (f32, f32), pos: (f32, f32), facing| {
            let id = SeatId(seats.len() as u16);
            seats.push(Seat {
                id,
                label: label.to_owned(),
                zone,
                role,
                desk: BoardPoint::new(desk.0, desk.1),
                pos: BoardPoint::new(pos.0, pos.1),
                facing,
            });
        };

        add("lead-manager-0", ZoneKind::LeadOffice, SeatRole::Manager, (111.0, 214.0), (111.0, 205.0), Facing::Left);

        add("main-0", ZoneKind::MainFloor, SeatRole::Main, (39.0, 76.0),  (39.0, 85.0),  Facing::Down);
        add("main-1", ZoneKind::MainFloor, SeatRole::Main, (90.0, 76.0),  (90.0, 85.0),  Facing::Down);
        add("main-2", ZoneKind::MainFloor, SeatRole::Main, (141.0, 76.0), (141.0, 85.0), Facing::Down);
        add("main-3", ZoneKind::MainFloor, SeatRole::Main, (39.0, 122.0), (39.0, 131.0), Facing::Down);
        add("main-4", ZoneKind::MainFloor, SeatRole::Main, (90.0, 122.0), (90.0, 131.0), Facing::Down);
        add("main-5", ZoneKind::MainFloor, SeatRole::Main, (141.0, 122.0), (141.0, 131.0), Facing::Down);

        add("break-0", ZoneKind::BreakRoom, SeatRole::Break, (257.0, 90.0),  (257.0, 76.0),  Facing::Up);
        add("break-1", ZoneKind::BreakRoom, SeatRole::Break, (286.0, 90.0),  (286.0, 76.0),  Facing::Up);
        add("break-2", ZoneKind::BreakRoom, SeatRole::Break, (257.0, 100.0), (242.0, 108.0), Facing::Right);
        add("break-3", ZoneKind::BreakRoom, SeatRole::Break, (271.0, 100.0), (288.0, 108.0), Facing::Left);

        add("sub-0", ZoneKind::SubAgentZone, SeatRole::Sub, (244.0, 223.0), (244.0, 232.0), Facing::Down);

        let blockers = vec![
            // Top wall fixtures
            BoardRect::new(8.0, 10.0, 146.0, 20.0),
            BoardRect::new(196.0, 10.0, 118.0, 20.0),
            // Main-floor desks
            BoardRect::new(25.0, 58.0, 28.0, 18.0),
            BoardRect::new(76.0, 58.0, 28.0, 18.0),
            BoardRect::new(127.0, 58.0, 28.0, 18.0),
            BoardRect::new(25.0, 104.0, 28.0, 18.0),
            BoardRect::new(76.0, 104.0, 28.0, 18.0),
            BoardRect::new(127.0, 104.0, 28.0, 18.0),
            // Break-room tables
            BoardRect::new(247.0, 80.0, 48.0, 18.0),
            BoardRect::new(250.0, 100.0, 40.0, 18.0),
            // Lead-office desk
            BoardRect::new(102.0, 206.0, 46.0, 18.0),
            // Lounge + decor
            BoardRect::new(18.0, 186.0, 40.0, 10.0),
            BoardRect::new(157.0, 182.0, 40.0, 14.0),
            BoardRect::new(130.0, 242.0, 40.0, 10.0),
            // Sub-agent desk and lower-right fixtures
            BoardRect::new(229.0, 214.0, 28.0, 18.0),
            BoardRect::new(203.0, 152.0, 108.0, 20.0),
            BoardRect::new(282.0, 236.0, 30.0, 16.0),
        ];

        // Wander destinations — open floor near recognizable fixtures.
        // Order matches ZoneKind::ALL.
        let pois = [
            // Lead office: window wall, bookshelf corner, doorway.
            vec![
                BoardPoint::new(30.0, 160.0),
                BoardPoint::new(80.0, 236.0),
                BoardPoint::new(170.0, 220.0),
            ],
            // Main floor: none — working agents stay seated.
            vec![],
            // Break room: water cooler, couch end, doorway.
            vec![
                BoardPoint::new(215.0, 60.0),
                BoardPoint::new(302.0, 120.0),
                BoardPoint::new(210.0, 128.0),
            ],
            // Sub-agent zone: none.
            vec![],
        ];

        Self {
            board_w: 320.0,
            board_h: 256.0,
            nav_cell: 4.0,
            zones,
            seats,
            blockers,
            pois,
        }
    }
}

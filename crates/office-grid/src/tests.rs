//! Unit tests for office-grid.
//!
//! All tests use hand-crafted boards so they run without any image asset.

#[cfg(test)]
mod helpers {
    use office_core::{BoardPoint, BoardRect};

    use crate::{GridBuilder, WalkGrid};

    /// 80×64-unit board at 4-unit cells (20×16 grid) with one vertical wall
    /// splitting the floor, pierced by a doorway:
    ///
    /// ```text
    /// ┌────────────────────┐
    /// │ left   ║    right  │   wall x ∈ [38, 42)
    /// │        ║           │   doorway y ∈ [28, 40)
    /// │      doorway       │
    /// │        ║           │
    /// └────────────────────┘
    /// ```
    pub fn walled_board() -> WalkGrid {
        let mut b = GridBuilder::new(80.0, 64.0, 4.0);
        b.open_rect(BoardRect::new(0.0, 0.0, 80.0, 64.0));
        b.block_rect(BoardRect::new(38.0, 0.0, 4.0, 28.0));
        b.block_rect(BoardRect::new(38.0, 40.0, 4.0, 24.0));
        b.build()
    }

    /// Board cut in two with no doorway — right half unreachable from left.
    pub fn split_board() -> WalkGrid {
        let mut b = GridBuilder::new(80.0, 64.0, 4.0);
        b.open_rect(BoardRect::new(0.0, 0.0, 80.0, 64.0));
        b.block_rect(BoardRect::new(38.0, 0.0, 4.0, 64.0));
        b.build()
    }

    pub fn pt(x: f32, y: f32) -> BoardPoint {
        BoardPoint::new(x, y)
    }
}

// ── Builder & border ──────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use office_core::{BoardPoint, BoardRect};

    use crate::{GridBuilder, WalkGrid};

    #[test]
    fn open_board_interior_walkable() {
        let g = WalkGrid::open(320.0, 256.0, 4.0);
        assert_eq!(g.width(), 80);
        assert_eq!(g.height(), 64);
        assert!(g.is_walkable(10, 10));
        assert!(g.is_walkable(40, 32));
    }

    #[test]
    fn border_always_sealed() {
        let g = WalkGrid::open(320.0, 256.0, 4.0);
        for cx in 0..g.width() as i32 {
            assert!(!g.is_walkable(cx, 0));
            assert!(!g.is_walkable(cx, g.height() as i32 - 1));
        }
        for cy in 0..g.height() as i32 {
            assert!(!g.is_walkable(0, cy));
            assert!(!g.is_walkable(g.width() as i32 - 1, cy));
        }
    }

    #[test]
    fn out_of_range_unwalkable() {
        let g = WalkGrid::open(80.0, 64.0, 4.0);
        assert!(!g.is_walkable(-1, 5));
        assert!(!g.is_walkable(5, -1));
        assert!(!g.is_walkable(20, 5));
        assert!(!g.is_walkable(5, 16));
    }

    #[test]
    fn blocker_subtracts_floor() {
        let g = super::helpers::walled_board();
        // Wall column: x ∈ [38,42) → cells cx 9..10; cy 2 is wall territory.
        assert!(!g.is_walkable(9, 2));
        // Doorway row y ∈ [28,40) → cy 7..9 stays open.
        assert!(g.is_walkable(9, 8));
    }

    #[test]
    fn seat_override_wins_over_blocker() {
        let mut b = GridBuilder::new(80.0, 64.0, 4.0);
        b.open_rect(BoardRect::new(0.0, 0.0, 80.0, 64.0));
        b.block_rect(BoardRect::new(20.0, 20.0, 20.0, 20.0));
        b.open_seat(BoardPoint::new(30.0, 30.0));
        let g = b.build();

        let (cx, cy) = g.to_cell(BoardPoint::new(30.0, 30.0));
        assert!(g.is_walkable(cx, cy), "seat footprint must stay walkable");
        // The rest of the blocker is still solid.
        assert!(!g.is_walkable(6, 6));
    }
}

// ── Image sampling ────────────────────────────────────────────────────────────

#[cfg(test)]
mod sampling {
    use crate::{GridBuilder, PixelSource};

    /// Synthetic 160×128 image: left half floor-colored, right half not.
    struct HalfFloor;

    const FLOOR: [u8; 3] = [200, 180, 140];

    impl PixelSource for HalfFloor {
        fn width(&self) -> u32 {
            160
        }
        fn height(&self) -> u32 {
            128
        }
        fn pixel(&self, x: u32, _y: u32) -> [u8; 3] {
            if x < 80 { FLOOR } else { [40, 40, 60] }
        }
    }

    #[test]
    fn majority_classification_follows_floor_color() {
        let mut b = GridBuilder::new(320.0, 256.0, 4.0);
        b.sample_floor(&HalfFloor, |rgb| rgb == FLOOR);
        let g = b.build();

        // Left half of the board is floor (interior cells).
        assert!(g.is_walkable(10, 10));
        // Right half is not.
        assert!(!g.is_walkable(70, 10));
    }

    #[test]
    fn empty_image_leaves_grid_untouched() {
        struct Empty;
        impl PixelSource for Empty {
            fn width(&self) -> u32 {
                0
            }
            fn height(&self) -> u32 {
                0
            }
            fn pixel(&self, _: u32, _: u32) -> [u8; 3] {
                [0, 0, 0]
            }
        }
        let mut b = GridBuilder::new(80.0, 64.0, 4.0);
        b.sample_floor(&Empty, |_| true);
        let g = b.build();
        assert!(!g.is_walkable(5, 5)); // still all-unwalkable
    }
}

// ── Clamping ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod clamp {
    use super::helpers::{pt, split_board, walled_board};
    use crate::GridBuilder;

    #[test]
    fn walkable_point_returns_unchanged() {
        let g = walled_board();
        let c = g.clamp_to_walkable(pt(10.3, 9.7));
        assert_eq!((c.x, c.y), (10.3, 9.7));
    }

    #[test]
    fn idempotent_everywhere() {
        let g = walled_board();
        for y in (0..64).step_by(3) {
            for x in (0..80).step_by(3) {
                let once = g.clamp_to_walkable(pt(x as f32, y as f32));
                let twice = g.clamp_to_walkable(once);
                assert_eq!(once, twice, "clamp not idempotent at ({x}, {y})");
            }
        }
    }

    #[test]
    fn blocked_point_moves_to_nearest_open_cell() {
        let g = walled_board();
        // Inside the wall, just above the doorway.
        let c = g.clamp_to_walkable(pt(40.0, 24.0));
        let (cx, cy) = g.to_cell(c);
        assert!(g.is_walkable(cx, cy));
    }

    #[test]
    fn degenerate_grid_falls_back_to_board_clamp() {
        // build() with nothing opened → no walkable cell at all.
        let g = GridBuilder::new(80.0, 64.0, 4.0).build();
        let c = g.clamp_to_walkable(pt(500.0, -20.0));
        assert_eq!((c.x, c.y), (79.0, 0.0));
    }

    #[test]
    fn split_board_clamps_within_closed_region_too() {
        let g = split_board();
        let c = g.clamp_to_walkable(pt(40.0, 32.0)); // inside the full wall
        let (cx, cy) = g.to_cell(c);
        assert!(g.is_walkable(cx, cy));
    }
}

// ── Path planning ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod paths {
    use super::helpers::{pt, split_board, walled_board};
    use crate::{BfsPlanner, Planner, WalkGrid};

    #[test]
    fn path_ends_at_clamped_goal() {
        let g = walled_board();
        let end = pt(70.0, 50.0);
        let path = BfsPlanner.find_path(&g, pt(10.0, 10.0), end);
        assert!(!path.is_empty());
        assert_eq!(*path.last().unwrap(), g.clamp_to_walkable(end));
    }

    #[test]
    fn same_cell_single_point() {
        let g = walled_board();
        let path = BfsPlanner.find_path(&g, pt(10.0, 10.0), pt(11.0, 9.0));
        assert_eq!(path.len(), 1);
        assert_eq!(path[0], g.clamp_to_walkable(pt(11.0, 9.0)));
    }

    #[test]
    fn straight_corridor_compresses_to_endpoints() {
        let g = WalkGrid::open(80.0, 64.0, 4.0);
        let path = BfsPlanner.find_path(&g, pt(10.0, 30.0), pt(70.0, 30.0));
        // One straight run: start cell center plus the clamped end.
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn doorway_route_contains_turns() {
        let g = walled_board();
        let path = BfsPlanner.find_path(&g, pt(10.0, 10.0), pt(70.0, 10.0));
        // Must dip down through the doorway: more than a straight shot.
        assert!(path.len() > 2, "expected turn points, got {path:?}");
        // Every consecutive pair is axis-aligned (4-connected travel).
        for w in path.windows(2) {
            let dx = (w[1].x - w[0].x).abs();
            let dy = (w[1].y - w[0].y).abs();
            assert!(dx < 0.001 || dy < 0.001, "diagonal segment {w:?}");
        }
    }

    #[test]
    fn unreachable_goal_degrades_to_direct_waypoint() {
        let g = split_board();
        let end = pt(70.0, 32.0);
        let path = BfsPlanner.find_path(&g, pt(10.0, 32.0), end);
        assert_eq!(path.len(), 1);
        assert_eq!(path[0], g.clamp_to_walkable(end));
    }

    #[test]
    fn endpoints_are_walkable_cells() {
        let g = walled_board();
        let path = BfsPlanner.find_path(&g, pt(39.0, 2.0), pt(41.0, 60.0));
        for p in &path {
            let (cx, cy) = g.to_cell(*p);
            assert!(g.is_walkable(cx, cy), "waypoint {p} lands on a wall");
        }
    }
}

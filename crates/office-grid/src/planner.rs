//! Path planning trait and default breadth-first implementation.
//!
//! # Pluggability
//!
//! Movement code calls planning via the [`Planner`] trait, so a weighted
//! search or flow-field planner can be swapped in without touching the state
//! machine.  The default [`BfsPlanner`] is exact for a uniform-cost grid and
//! the board is small enough that the full search costs microseconds.
//!
//! # Contract
//!
//! `find_path` always returns a non-empty waypoint list whose final element
//! equals `grid.clamp_to_walkable(end)`.  An unreachable goal degrades to a
//! single direct waypoint (the agent walks straight there) — logged for
//! diagnostics, never an error.

use std::collections::VecDeque;

use office_core::BoardPoint;

use crate::WalkGrid;

/// Sentinel parent index for unvisited cells during search.
const NO_PARENT: u32 = u32::MAX;

// ── Planner trait ─────────────────────────────────────────────────────────────

/// Pluggable path planner over a [`WalkGrid`].
pub trait Planner: Send + Sync {
    /// Ordered waypoints from `start` to `end`, both clamped to walkable
    /// cells first.  Never empty; the last element is the clamped `end`.
    fn find_path(&self, grid: &WalkGrid, start: BoardPoint, end: BoardPoint) -> Vec<BoardPoint>;
}

// ── BfsPlanner ────────────────────────────────────────────────────────────────

/// 4-connected breadth-first search with colinear waypoint compression.
///
/// BFS is optimal here because every step costs the same; no heap or
/// heuristic needed.  The produced cell chain is collapsed to turn points
/// only, so a straight corridor becomes a single segment.
#[derive(Debug)]
pub struct BfsPlanner;

impl Planner for BfsPlanner {
    fn find_path(&self, grid: &WalkGrid, start: BoardPoint, end: BoardPoint) -> Vec<BoardPoint> {
        let start_pt = grid.clamp_to_walkable(start);
        let end_pt = grid.clamp_to_walkable(end);
        let (scx, scy) = grid.to_cell(start_pt);
        let (gcx, gcy) = grid.to_cell(end_pt);

        if (scx, scy) == (gcx, gcy) {
            return vec![end_pt];
        }

        let width = grid.width();
        let idx = |cx: i32, cy: i32| cy as usize * width + cx as usize;

        // Parent pointer per visited cell; the start is its own marker.
        let mut parent = vec![NO_PARENT; width * grid.height()];
        parent[idx(scx, scy)] = idx(scx, scy) as u32;

        let mut queue = VecDeque::from([(scx, scy)]);
        'search: while let Some((cx, cy)) = queue.pop_front() {
            if (cx, cy) == (gcx, gcy) {
                break 'search;
            }
            for (nx, ny) in [(cx + 1, cy), (cx - 1, cy), (cx, cy + 1), (cx, cy - 1)] {
                if !grid.is_walkable(nx, ny) || parent[idx(nx, ny)] != NO_PARENT {
                    continue;
                }
                parent[idx(nx, ny)] = idx(cx, cy) as u32;
                queue.push_back((nx, ny));
            }
        }

        if parent[idx(gcx, gcy)] == NO_PARENT {
            // Disconnected region: degrade to a direct hop (§ crate docs).
            tracing::debug!(
                from = %start_pt, to = %end_pt,
                "no grid path; falling back to direct waypoint"
            );
            return vec![end_pt];
        }

        // Walk parents goal → start, then reverse into travel order.
        let mut cells = Vec::new();
        let mut cur = idx(gcx, gcy);
        loop {
            cells.push(cur);
            let prev = parent[cur] as usize;
            if prev == cur {
                break;
            }
            cur = prev;
        }
        cells.reverse();

        // Cell centers, with the true clamped endpoint replacing the last
        // cell's center so agents stop exactly on their seat.
        let mut points: Vec<BoardPoint> = cells
            .iter()
            .map(|&i| grid.cell_center((i % width) as i32, (i / width) as i32))
            .collect();
        if let Some(last) = points.last_mut() {
            *last = end_pt;
        }

        compress_colinear(points)
    }
}

// ── Waypoint compression ──────────────────────────────────────────────────────

/// Keep only the first point, the last point, and every turn point — a point
/// where the travel direction changes on either side of it.
fn compress_colinear(points: Vec<BoardPoint>) -> Vec<BoardPoint> {
    if points.len() <= 2 {
        return points;
    }
    let mut out = Vec::with_capacity(points.len());
    for i in 0..points.len() {
        if i == 0 || i == points.len() - 1 {
            out.push(points[i]);
            continue;
        }
        let (a, b, c) = (points[i - 1], points[i], points[i + 1]);
        let dir_in = (sign(b.x - a.x), sign(b.y - a.y));
        let dir_out = (sign(c.x - b.x), sign(c.y - b.y));
        if dir_in != dir_out {
            out.push(b);
        }
    }
    out
}

/// Three-way sign.  `f32::signum` maps 0.0 to 1.0, which would treat an
/// axis-aligned segment as diagonal and drop real turn points.
#[inline]
fn sign(v: f32) -> i8 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

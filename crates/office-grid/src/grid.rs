//! Walkability grid over the virtual office board.
//!
//! # Data layout
//!
//! A row-major `Vec<bool>` of `width × height` cells, each covering
//! `cell_size × cell_size` board units.  Cell `(cx, cy)` occupies index
//! `cy * width + cx`.  At the default 4-unit cells a 320×256 board is an
//! 80×64 grid — 5,120 cells, small enough that the grid is rebuilt wholesale
//! whenever the floor plan changes rather than patched incrementally.
//!
//! # Construction strategies
//!
//! [`GridBuilder`] supports two ways to establish the floor:
//!
//! 1. **Declared rectangles** — open the floor region(s), subtract blocker
//!    rectangles for furniture and walls.
//! 2. **Image sampling** — classify each cell's pixels against a floor-color
//!    rule via a caller-supplied [`PixelSource`]; the engine never decodes
//!    images itself.
//!
//! Either way, seat footprints are forced open as a final override and
//! `build()` seals a 1-cell border so agents cannot leave the board.

use std::collections::VecDeque;

use office_core::{BoardPoint, BoardRect};

// ── PixelSource ───────────────────────────────────────────────────────────────

/// Read-only view of a decoded background image.
///
/// Implemented by the rendering collaborator; the grid only needs RGB
/// lookups.  Image pixels are addressed in image space — the builder maps
/// board-space cells onto it proportionally.
pub trait PixelSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// RGB triple at `(x, y)`.  `x < width()`, `y < height()`.
    fn pixel(&self, x: u32, y: u32) -> [u8; 3];
}

// ── WalkGrid ──────────────────────────────────────────────────────────────────

/// Fixed-resolution boolean occupancy grid.  Derived data: rebuild via
/// [`GridBuilder`] when the floor plan changes.
#[derive(Clone, Debug)]
pub struct WalkGrid {
    board_w:   f32,
    board_h:   f32,
    cell_size: f32,
    width:     usize,
    height:    usize,
    walkable:  Vec<bool>,
}

impl WalkGrid {
    /// Degraded default when no floor plan is available: every interior cell
    /// walkable, border sealed.  Agents roam freely instead of freezing.
    pub fn open(board_w: f32, board_h: f32, cell_size: f32) -> Self {
        let mut b = GridBuilder::new(board_w, board_h, cell_size);
        b.open_rect(BoardRect::new(0.0, 0.0, board_w, board_h));
        b.build()
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn board_size(&self) -> (f32, f32) {
        (self.board_w, self.board_h)
    }

    // ── Cell queries ──────────────────────────────────────────────────────

    /// `true` if `(cx, cy)` is inside the grid and walkable.
    /// Out-of-range cells are unwalkable by definition.
    #[inline]
    pub fn is_walkable(&self, cx: i32, cy: i32) -> bool {
        cx >= 0
            && (cx as usize) < self.width
            && cy >= 0
            && (cy as usize) < self.height
            && self.walkable[cy as usize * self.width + cx as usize]
    }

    /// Containing cell for a board point, clamped into grid range.
    #[inline]
    pub fn to_cell(&self, p: BoardPoint) -> (i32, i32) {
        let cx = (p.x / self.cell_size).floor() as i64;
        let cy = (p.y / self.cell_size).floor() as i64;
        (
            cx.clamp(0, self.width as i64 - 1) as i32,
            cy.clamp(0, self.height as i64 - 1) as i32,
        )
    }

    /// Board-space center of cell `(cx, cy)`, rounded to whole units so
    /// waypoints land on pixel-stable coordinates.
    #[inline]
    pub fn cell_center(&self, cx: i32, cy: i32) -> BoardPoint {
        BoardPoint::new(
            (cx as f32 * self.cell_size + self.cell_size * 0.5).round(),
            (cy as f32 * self.cell_size + self.cell_size * 0.5).round(),
        )
    }

    // ── Clamping ──────────────────────────────────────────────────────────

    /// Nearest walkable point to `p`: the point itself when its containing
    /// cell is walkable, else the center of the first walkable cell found by
    /// a 4-connected breadth-first ring expansion outward.
    ///
    /// Idempotent: an already-walkable point returns unchanged, and a
    /// clamped result lands on a walkable cell, so clamping twice equals
    /// clamping once.  This also makes the per-frame position clamp a no-op
    /// for agents mid-walk instead of snapping them back to cell centers.
    /// If no walkable cell exists anywhere (degenerate grid), falls back to
    /// the input clamped to board bounds.
    pub fn clamp_to_walkable(&self, p: BoardPoint) -> BoardPoint {
        let (scx, scy) = self.to_cell(p);
        if self.is_walkable(scx, scy) {
            return p;
        }

        let mut seen = vec![false; self.width * self.height];
        seen[scy as usize * self.width + scx as usize] = true;
        let mut queue = VecDeque::from([(scx, scy)]);

        while let Some((cx, cy)) = queue.pop_front() {
            for (nx, ny) in [(cx + 1, cy), (cx - 1, cy), (cx, cy + 1), (cx, cy - 1)] {
                if nx < 0 || nx as usize >= self.width || ny < 0 || ny as usize >= self.height {
                    continue;
                }
                let idx = ny as usize * self.width + nx as usize;
                if seen[idx] {
                    continue;
                }
                if self.walkable[idx] {
                    return self.cell_center(nx, ny);
                }
                seen[idx] = true;
                queue.push_back((nx, ny));
            }
        }

        BoardPoint::new(
            p.x.round().clamp(0.0, self.board_w - 1.0),
            p.y.round().clamp(0.0, self.board_h - 1.0),
        )
    }
}

// ── GridBuilder ───────────────────────────────────────────────────────────────

/// Construct a [`WalkGrid`] from floor/blocker rectangles or an image sample,
/// then call [`build`](Self::build).
///
/// Operations apply in call order; later calls override earlier ones.  The
/// usual sequence is floor → blockers → seat footprints, matching how a real
/// office plan layers furniture over floor.
pub struct GridBuilder {
    board_w:   f32,
    board_h:   f32,
    cell_size: f32,
    width:     usize,
    height:    usize,
    walkable:  Vec<bool>,
}

impl GridBuilder {
    /// All cells start unwalkable.
    pub fn new(board_w: f32, board_h: f32, cell_size: f32) -> Self {
        debug_assert!(board_w > 0.0 && board_h > 0.0 && cell_size > 0.0);
        let width  = (board_w / cell_size).ceil() as usize;
        let height = (board_h / cell_size).ceil() as usize;
        Self {
            board_w,
            board_h,
            cell_size,
            width,
            height,
            walkable: vec![false; width * height],
        }
    }

    /// Mark every cell overlapping `rect` walkable.
    pub fn open_rect(&mut self, rect: BoardRect) -> &mut Self {
        self.fill_rect(rect, true);
        self
    }

    /// Mark every cell overlapping `rect` unwalkable (furniture, walls).
    pub fn block_rect(&mut self, rect: BoardRect) -> &mut Self {
        self.fill_rect(rect, false);
        self
    }

    /// Force the 3×3 board-unit footprint around a seat point walkable so a
    /// seat buried in a desk blocker remains a valid walk target.
    pub fn open_seat(&mut self, seat: BoardPoint) -> &mut Self {
        self.fill_rect(BoardRect::new(seat.x - 1.0, seat.y - 1.0, 3.0, 3.0), true);
        self
    }

    /// Classify every cell from a background image: a cell is walkable when
    /// the majority of its pixels satisfy `is_floor`.
    ///
    /// The image is mapped onto the board proportionally, so any resolution
    /// works.  Apply blockers and seat overrides after sampling as usual.
    pub fn sample_floor<S, F>(&mut self, source: &S, is_floor: F) -> &mut Self
    where
        S: PixelSource,
        F: Fn([u8; 3]) -> bool,
    {
        let (img_w, img_h) = (source.width(), source.height());
        if img_w == 0 || img_h == 0 {
            return self;
        }
        let sx = img_w as f32 / self.board_w;
        let sy = img_h as f32 / self.board_h;

        for cy in 0..self.height {
            for cx in 0..self.width {
                let x0 = (cx as f32 * self.cell_size * sx) as u32;
                let y0 = (cy as f32 * self.cell_size * sy) as u32;
                let x1 = (((cx + 1) as f32 * self.cell_size * sx) as u32).clamp(x0 + 1, img_w);
                let y1 = (((cy + 1) as f32 * self.cell_size * sy) as u32).clamp(y0 + 1, img_h);

                let mut floor = 0usize;
                let mut total = 0usize;
                for y in y0..y1 {
                    for x in x0..x1 {
                        total += 1;
                        if is_floor(source.pixel(x.min(img_w - 1), y.min(img_h - 1))) {
                            floor += 1;
                        }
                    }
                }
                self.walkable[cy * self.width + cx] = floor * 2 >= total.max(1);
            }
        }
        self
    }

    /// Seal the border and produce the grid.
    ///
    /// The outermost ring of cells is always unwalkable regardless of what
    /// the floor plan or image sample said — the hard guarantee that keeps
    /// agents on the board.
    pub fn build(&mut self) -> WalkGrid {
        for cx in 0..self.width {
            self.walkable[cx] = false;
            self.walkable[(self.height - 1) * self.width + cx] = false;
        }
        for cy in 0..self.height {
            self.walkable[cy * self.width] = false;
            self.walkable[cy * self.width + self.width - 1] = false;
        }
        WalkGrid {
            board_w:   self.board_w,
            board_h:   self.board_h,
            cell_size: self.cell_size,
            width:     self.width,
            height:    self.height,
            walkable:  self.walkable.clone(),
        }
    }

    // ── Private helpers ───────────────────────────────────────────────────

    fn fill_rect(&mut self, rect: BoardRect, value: bool) {
        if rect.w <= 0.0 || rect.h <= 0.0 {
            return;
        }
        let c0x = ((rect.x / self.cell_size).floor() as i64).clamp(0, self.width as i64 - 1) as usize;
        let c0y = ((rect.y / self.cell_size).floor() as i64).clamp(0, self.height as i64 - 1) as usize;
        let c1x = (((rect.x + rect.w - 1.0) / self.cell_size).floor() as i64)
            .clamp(0, self.width as i64 - 1) as usize;
        let c1y = (((rect.y + rect.h - 1.0) / self.cell_size).floor() as i64)
            .clamp(0, self.height as i64 - 1) as usize;

        for cy in c0y..=c1y {
            for cx in c0x..=c1x {
                self.walkable[cy * self.width + cx] = value;
            }
        }
    }
}

//! Virtual-board geometry: points, rectangles, and facing directions.
//!
//! All coordinates are **virtual-board units** stored as `f32`.  The board is
//! small (a few hundred units per side) so single precision is exact for every
//! integer coordinate and cheap to interpolate during walking.

/// A position on the virtual office board.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardPoint {
    pub x: f32,
    pub y: f32,
}

impl BoardPoint {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other` in board units.
    #[inline]
    pub fn distance(self, other: BoardPoint) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// `true` if `other` is within `eps` board units of `self`.
    #[inline]
    pub fn near(self, other: BoardPoint, eps: f32) -> bool {
        self.distance(other) <= eps
    }
}

impl std::fmt::Display for BoardPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

// ── BoardRect ─────────────────────────────────────────────────────────────────

/// An axis-aligned rectangle in board units, `(x, y)` top-left.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl BoardRect {
    #[inline]
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// `true` if `p` lies inside the rectangle (inclusive of the top-left
    /// edge, exclusive of the bottom-right, so adjacent rects don't overlap).
    #[inline]
    pub fn contains(&self, p: BoardPoint) -> bool {
        p.x >= self.x && p.x < self.x + self.w && p.y >= self.y && p.y < self.y + self.h
    }

    /// Center point of the rectangle.
    #[inline]
    pub fn center(&self) -> BoardPoint {
        BoardPoint::new(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }
}

// ── Facing ────────────────────────────────────────────────────────────────────

/// The cardinal direction a character sprite faces.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Facing {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Facing {
    /// Human-readable label, matching the wire format the renderer expects.
    pub fn as_str(self) -> &'static str {
        match self {
            Facing::Up    => "up",
            Facing::Down  => "down",
            Facing::Left  => "left",
            Facing::Right => "right",
        }
    }

    /// Facing for a displacement `(dx, dy)`.
    ///
    /// The dominant axis wins; ties favor horizontal so side-stepping
    /// characters don't flicker between sprites.
    pub fn from_displacement(dx: f32, dy: f32) -> Facing {
        if dx.abs() >= dy.abs() {
            if dx >= 0.0 { Facing::Right } else { Facing::Left }
        } else if dy >= 0.0 {
            Facing::Down
        } else {
            Facing::Up
        }
    }
}

impl std::fmt::Display for Facing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

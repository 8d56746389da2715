//! Seat configuration: a (desk, chair) anchor pair with a canonical facing.

use office_core::{BoardPoint, Facing, SeatId, ZoneKind};

/// What kind of workstation a seat is.  Layout tooling groups seats by role;
/// the allocator only cares about the owning zone.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SeatRole {
    Manager,
    Main,
    Sub,
    Break,
}

impl SeatRole {
    pub fn as_str(self) -> &'static str {
        match self {
            SeatRole::Manager => "manager",
            SeatRole::Main    => "main",
            SeatRole::Sub     => "sub",
            SeatRole::Break   => "break",
        }
    }

    /// Parse a layout-file label.  Returns `None` for unknown labels.
    pub fn parse(s: &str) -> Option<SeatRole> {
        match s.trim() {
            "manager" => Some(SeatRole::Manager),
            "main"    => Some(SeatRole::Main),
            "sub"     => Some(SeatRole::Sub),
            "break"   => Some(SeatRole::Break),
            _ => None,
        }
    }
}

/// A fixed workstation on the board.
///
/// `desk` is where the furniture sits (a blocker for the walk grid); `seat`
/// is the tile the character occupies, with the direction the chair faces.
#[derive(Clone, Debug)]
pub struct Seat {
    /// Index into the layout's seat table.
    pub id: SeatId,

    /// Stable human-readable name ("main-0", "lead-manager-0", …).
    pub label: String,

    /// The zone this seat belongs to.  Exactly one.
    pub zone: ZoneKind,

    pub role: SeatRole,

    /// Desk anchor (furniture position).
    pub desk: BoardPoint,

    /// Chair anchor — the walk target and resting position.
    pub pos: BoardPoint,

    /// Direction a seated character faces.
    pub facing: Facing,
}

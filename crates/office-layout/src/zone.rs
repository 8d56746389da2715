//! Zone regions and floor materials.

use office_core::{BoardRect, ZoneKind};

/// Visual floor material of a zone.  Not used by the simulation itself; the
/// renderer picks tiles from it.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Floor {
    Carpet,
    Wood,
    Tile,
}

impl Floor {
    pub fn as_str(self) -> &'static str {
        match self {
            Floor::Carpet => "carpet",
            Floor::Wood   => "wood",
            Floor::Tile   => "tile",
        }
    }
}

/// One of the four regions of the office board.
#[derive(Clone, Debug)]
pub struct Zone {
    pub kind:  ZoneKind,
    pub rect:  BoardRect,
    pub floor: Floor,
}

impl Zone {
    pub fn new(kind: ZoneKind, rect: BoardRect, floor: Floor) -> Self {
        Self { kind, rect, floor }
    }
}

//! CSV seat-table loader.
//!
//! # CSV format
//!
//! One row per seat.  Rows are assigned `SeatId`s in file order.
//!
//! ```csv
//! label,zone,role,desk_x,desk_y,seat_x,seat_y,facing
//! lead-manager-0,lead-office,manager,111,214,111,205,left
//! main-0,main-floor,main,39,76,39,85,down
//! break-0,break-room,break,257,90,257,76,up
//! ```
//!
//! | Column   | Values                                          |
//! |----------|-------------------------------------------------|
//! | `zone`   | `lead-office`, `main-floor`, `break-room`, `sub-agent-zone` |
//! | `role`   | `manager`, `main`, `sub`, `break`               |
//! | `facing` | `up`, `down`, `left`, `right`                   |
//!
//! Custom boards ship their seat table as an asset next to the background
//! image; the standard board is compiled in and needs no file.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use office_core::{BoardPoint, Facing, SeatId, ZoneKind};

use crate::seat::{Seat, SeatRole};
use crate::LayoutError;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct SeatRecord {
    label:  String,
    zone:   String,
    role:   String,
    desk_x: f32,
    desk_y: f32,
    seat_x: f32,
    seat_y: f32,
    facing: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a seat table from a CSV file.
pub fn load_seats_csv(path: &Path) -> Result<Vec<Seat>, LayoutError> {
    let file = std::fs::File::open(path).map_err(LayoutError::Io)?;
    load_seats_reader(file)
}

/// Like [`load_seats_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded assets.
pub fn load_seats_reader<R: Read>(reader: R) -> Result<Vec<Seat>, LayoutError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut seats = Vec::new();

    for result in csv_reader.deserialize::<SeatRecord>() {
        let row = result.map_err(|e| LayoutError::Parse(e.to_string()))?;
        let id = SeatId(seats.len() as u16);
        seats.push(Seat {
            id,
            zone: ZoneKind::parse(&row.zone)
                .ok_or_else(|| LayoutError::UnknownZone(row.zone.clone()))?,
            role: SeatRole::parse(&row.role)
                .ok_or_else(|| LayoutError::UnknownRole(row.role.clone()))?,
            desk: BoardPoint::new(row.desk_x, row.desk_y),
            pos: BoardPoint::new(row.seat_x, row.seat_y),
            facing: parse_facing(&row.facing)?,
            label: row.label,
        });
    }

    Ok(seats)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_facing(s: &str) -> Result<Facing, LayoutError> {
    match s.trim() {
        "up"    => Ok(Facing::Up),
        "down"  => Ok(Facing::Down),
        "left"  => Ok(Facing::Left),
        "right" => Ok(Facing::Right),
        other   => Err(LayoutError::UnknownFacing(other.to_owned())),
    }
}

//! `office-layout` — static configuration of the virtual office.
//!
//! # Crate layout
//!
//! | Module     | Contents                                             |
//! |------------|------------------------------------------------------|
//! | [`zone`]   | `Zone` (floor region), `Floor`                       |
//! | [`seat`]   | `Seat`, `SeatRole`                                   |
//! | [`layout`] | `OfficeLayout`, the standard 320×256 board           |
//! | [`loader`] | CSV seat-table loading                               |
//! | [`error`]  | `LayoutError`, `LayoutResult<T>`                     |
//!
//! Everything here is configuration data: built once at startup, then shared
//! read-only with the zone, motion, and sim crates.  Seats are not owned by
//! agents — an agent merely holds a `SeatId` for as long as the allocator
//! keeps assigning it.

pub mod error;
pub mod layout;
pub mod loader;
pub mod seat;
pub mod zone;


pub use error::{LayoutError, LayoutResult};
pub use layout::OfficeLayout;
pub use loader::{load_seats_csv, load_seats_reader};
pub use seat::{Seat, SeatRole};
pub use zone::{Floor, Zone};

//! `office-zone` — who sits where.
//!
//! # Crate layout
//!
//! | Module     | Contents                                   |
//! |------------|--------------------------------------------|
//! | [`policy`] | `ZonePolicy` — agent → zone, lead memo     |
//! | [`seats`]  | `choose_seat` — deterministic seat picking |
//!
//! Both halves are pure given the current tick's inputs: the policy reads
//! only the agent's state and the clock, the allocator reads only the layout
//! and the pass's occupancy set.  Re-running a tick with the same inputs
//! yields the same placement, which is what keeps the viewer stable and the
//! tests exact.

pub mod policy;
pub mod seats;

#[cfg(test)]
mod tests;

pub use policy::ZonePolicy;
pub use seats::{choose_seat, OccupiedSeats};

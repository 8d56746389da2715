//! `office-motion` — how characters move.
//!
//! # Crate layout
//!
//! | Module     | Contents                                            |
//! |------------|-----------------------------------------------------|
//! | [`walk`]   | Stationary ↔ Walking state machine                  |
//! | [`wander`] | randomized idle excursions to points of interest    |
//!
//! # The two states
//!
//! An agent is **stationary** (its activity is whatever the session is
//! doing) or **walking** (`Activity::Walking` temporarily overrides the
//! business activity, which is saved and restored on arrival).  Replacing an
//! in-flight path simply discards the old one — there is nothing to cancel
//! or clean up.

pub mod walk;
pub mod wander;

#[cfg(test)]
mod tests;

pub use walk::{begin_walk, finalize_pose, step_walk};
pub use wander::maybe_wander;

//! `office-grid` — walkability grid and path planning.
//!
//! # Crate layout
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`grid`]    | `WalkGrid`, `GridBuilder`, `PixelSource`              |
//! | [`planner`] | `Planner` trait, `BfsPlanner`                         |
//!
//! # Failure philosophy
//!
//! Nothing in this crate returns an error.  An unreachable goal degrades to a
//! direct waypoint, an off-board query clamps to the board, and a missing
//! floor plan yields an all-open grid.  The worst case is an agent walking
//! through a wall — visually wrong, never fatal.

pub mod grid;
pub mod planner;

#[cfg(test)]
mod tests;

pub use grid::{GridBuilder, PixelSource, WalkGrid};
pub use planner::{BfsPlanner, Planner};

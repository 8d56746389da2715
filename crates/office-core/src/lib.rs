//! `office-core` — foundational types for the agent office simulation engine.
//!
//! This crate is a dependency of every other `office-*` crate.  It
//! intentionally has no `office-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`ids`]      | `SeatId`, `AgentSeq`                                   |
//! | [`board`]    | `BoardPoint`, `BoardRect`, `Facing`                    |
//! | [`activity`] | `Activity` enum                                        |
//! | [`zone`]     | `ZoneKind` enum                                        |
//! | [`time`]     | `SimClock`, `SimTuning`                                |
//! | [`rng`]      | `AgentRng` (per-agent), `SimRng` (global), `stable_hash` |
//! | [`error`]    | `OfficeError`, `OfficeResult`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod activity;
pub mod board;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;
pub mod zone;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use activity::Activity;
pub use board::{BoardPoint, BoardRect, Facing};
pub use error::{OfficeError, OfficeResult};
pub use ids::{AgentSeq, SeatId};
pub use rng::{stable_hash, AgentRng, SimRng};
pub use time::{SimClock, SimTuning};
pub use zone::ZoneKind;

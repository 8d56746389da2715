//! `office-sim` — the tick loop that ties the engine together.
//!
//! # Crate layout
//!
//! | Module       | Contents                                          |
//! |--------------|---------------------------------------------------|
//! | [`sim`]      | `OfficeSim` and its per-frame tick pipeline       |
//! | [`builder`]  | `OfficeSimBuilder`                                |
//! | [`snapshot`] | `AgentFrame`, `FrameSink`                         |
//! | [`error`]    | `SimError`, `SimResult<T>`                        |
//!
//! # Concurrency model
//!
//! Single-threaded, cooperative: one scheduler drives a fixed per-frame
//! tick, and telemetry events execute as ordinary synchronous calls inside
//! the same turn.  No two mutations of an agent record ever interleave —
//! there is no locking because there is no parallelism.  Nothing blocks:
//! pathfinding is a bounded synchronous grid search re-run only when a
//! target changes, and timeouts are clock comparisons re-evaluated every
//! tick rather than scheduled.

pub mod builder;
pub mod error;
pub mod sim;
pub mod snapshot;


pub use builder::OfficeSimBuilder;
pub use error::{SimError, SimResult};
pub use sim::OfficeSim;
pub use snapshot::{AgentFrame, FrameSink, NoopSink};

//! `office-agent` — the per-agent record and its identity helpers.
//!
//! # Crate layout
//!
//! | Module      | Contents                                          |
//! |-------------|---------------------------------------------------|
//! | [`record`]  | `AgentRecord` — all mutable per-agent state       |
//! | [`keys`]    | session-key parsing and configured-agent keys     |
//! | [`palette`] | deterministic character colors                    |
//!
//! # Ownership model
//!
//! Records live in a single map owned by the session manager; every other
//! crate receives `&mut AgentRecord` for exactly one agent at a time inside
//! the cooperative tick.  Sub-agents reference their parent by session key
//! (a lookup into that same map), never by pointer, so there are no
//! ownership cycles to manage.

pub mod keys;
pub mod palette;
pub mod record;


pub use keys::{configured_key, extract_agent_id, is_subagent_key, parent_from_subagent_key};
pub use palette::color_for;
pub use record::AgentRecord;

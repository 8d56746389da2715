//! `office-session` — from telemetry to agent state.
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`events`]   | `ChatEvent`, `SessionSnapshot` wire types             |
//! | [`classify`] | tool-name → activity rule table                       |
//! | [`manager`]  | `SessionStateManager` — owns the agent map            |
//! | [`error`]    | `SessionError`, `SessionResult<T>`                    |
//!
//! # Tolerance
//!
//! Telemetry is advisory, never authoritative: a malformed content block, an
//! unknown tool name, or a missing message degrades to a weaker activity
//! signal (`Thinking`/`Coding`) rather than rejecting the event.  Only JSON
//! that fails to parse at all surfaces an error, and the caller is expected
//! to drop that one event and carry on.

pub mod classify;
pub mod error;
pub mod events;
pub mod manager;


pub use classify::classify_tool;
pub use error::{SessionError, SessionResult};
pub use events::{ChatEvent, ChatMessage, ChatState, SessionSnapshot};
pub use manager::SessionStateManager;

//! Base error type.
//!
//! Sub-crates define their own error enums and either convert into
//! `OfficeError` via `From` impls or stay separate; both patterns are fine —
//! prefer whichever keeps error sites clean.  Note that most of the engine's
//! failure modes are deliberate degradations (fallback paths, reused seats)
//! and are not errors at all.

use thiserror::Error;

/// The top-level error type for `office-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum OfficeError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `office-*` crates.
pub type OfficeResult<T> = Result<T, OfficeError>;

use office_core::SeatId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("seat {label:?}: id {got} does not match table position {expected}")]
    SeatIdMismatch {
        label:    String,
        expected: usize,
        got:      SeatId,
    },

    #[error("unknown zone {0:?}")]
    UnknownZone(String),

    #[error("unknown facing {0:?}")]
    UnknownFacing(String),

    #[error("unknown seat role {0:?}")]
    UnknownRole(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type LayoutResult<T> = Result<T, LayoutError>;

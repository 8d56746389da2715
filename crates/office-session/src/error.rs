use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("malformed telemetry payload: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SessionResult<T> = Result<T, SessionError>;

use office_layout::LayoutError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),
}

pub type SimResult<T> = Result<T, SimError>;

use foresight_core::{HistoryError, InferenceError, ValidationError};
use thiserror::Error;

/// Terminal error for a forecast run.
///
/// Any failure aborts the entire run. A missing or invalid day would break
/// window continuity for every later day, so no partial trajectory is ever
/// returned.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ForecastError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    History(#[from] HistoryError),

    #[error(transparent)]
    Inference(#[from] InferenceError),

    #[error("forecast cancelled at step {step}")]
    Cancelled { step: usize },

    #[error("forecast deadline exceeded at step {step}")]
    DeadlineExceeded { step: usize },
}

//! One-step price predictor contract.

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

/// Inference failure classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InferenceErrorKind {
    /// The model backend rejected or dropped the call.
    Failed,
    /// The call did not return within the collaborator's own time budget.
    Timeout,
    /// The model produced NaN or an infinity.
    NonFinite,
}

/// Structured predictor error.
#[derive(Debug, Clone, PartialEq)]
pub struct InferenceError {
    kind: InferenceErrorKind,
    message: String,
}

impl InferenceError {
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            kind: InferenceErrorKind::Failed,
            message: message.into(),
        }
    }

    pub fn timed_out(message: impl Into<String>) -> Self {
        Self {
            kind: InferenceErrorKind::Timeout,
            message: message.into(),
        }
    }

    pub fn non_finite(step: usize, value: f64) -> Self {
        Self {
            kind: InferenceErrorKind::NonFinite,
            message: format!("predictor produced non-finite value {value} at step {step}"),
        }
    }

    pub const fn kind(&self) -> InferenceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            InferenceErrorKind::Failed => "oracle.failed",
            InferenceErrorKind::Timeout => "oracle.timeout",
            InferenceErrorKind::NonFinite => "oracle.non_finite",
        }
    }
}

impl Display for InferenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for InferenceError {}

/// Black-box one-step predictor.
///
/// Given the current window of normalized closes (oldest first), returns the
/// next normalized close. Implementations must either be safe for concurrent
/// read-only invocation or serialize calls internally; the simulation loop
/// treats every call as stateless inference.
pub trait PricePredictorOracle: Send + Sync {
    /// Predict the next normalized close from `window`.
    ///
    /// # Errors
    ///
    /// Returns [`InferenceError`] when the backing model fails or times
    /// out. A successful call returning NaN/Inf is rejected by the caller.
    fn predict_next<'a>(
        &'a self,
        window: &'a [f64],
    ) -> Pin<Box<dyn Future<Output = Result<f64, InferenceError>> + Send + 'a>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_are_stable() {
        assert_eq!(InferenceError::failed("boom").code(), "oracle.failed");
        assert_eq!(InferenceError::timed_out("slow").code(), "oracle.timeout");
        assert_eq!(InferenceError::non_finite(3, f64::NAN).code(), "oracle.non_finite");
    }

    #[test]
    fn non_finite_message_names_the_step() {
        let err = InferenceError::non_finite(17, f64::INFINITY);
        assert!(err.message().contains("17"), "message: {}", err.message());
    }
}

//! Cooperative cancellation and deadlines.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::ForecastError;

/// Cancellation flag plus optional deadline for one forecast run.
///
/// The day loop checks the control once per simulated day, bounding
/// worst-case latency after a trip to a single step. A tripped run fails
/// terminally; no partial trajectory is surfaced.
#[derive(Debug, Clone, Default)]
pub struct RunControl {
    cancelled: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl RunControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Control that trips once `timeout` has elapsed.
    pub fn with_deadline(timeout: Duration) -> Self {
        Self {
            cancelled: Arc::default(),
            deadline: Some(Instant::now() + timeout),
        }
    }

    /// Request cancellation; takes effect at the next per-day checkpoint.
    /// Clones share the flag, so a caller can keep one and cancel remotely.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    pub(crate) fn checkpoint(&self, step: usize) -> Result<(), ForecastError> {
        if self.is_cancelled() {
            return Err(ForecastError::Cancelled { step });
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                return Err(ForecastError::DeadlineExceeded { step });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_control_passes_checkpoints() {
        let control = RunControl::new();
        assert!(control.checkpoint(0).is_ok());
        assert!(!control.is_cancelled());
    }

    #[test]
    fn cancel_trips_the_next_checkpoint() {
        let control = RunControl::new();
        let remote = control.clone();
        remote.cancel();
        assert!(matches!(
            control.checkpoint(12),
            Err(ForecastError::Cancelled { step: 12 })
        ));
    }

    #[test]
    fn elapsed_deadline_trips() {
        let control = RunControl::with_deadline(Duration::ZERO);
        assert!(matches!(
            control.checkpoint(0),
            Err(ForecastError::DeadlineExceeded { step: 0 })
        ));
    }
}

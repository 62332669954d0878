//! Rolling predictor-input window.

use std::collections::VecDeque;

use foresight_core::{Scaler, ValidationError};

/// Fixed-length rolling window of normalized prices, oldest first.
///
/// The window is the predictor's entire input contract: it always holds
/// exactly the configured number of values once seeded.
#[derive(Debug, Clone)]
pub struct WindowBuffer {
    values: VecDeque<f64>,
    capacity: usize,
}

impl WindowBuffer {
    /// Seed from exactly `capacity` raw prices, normalizing each through the
    /// fitted scaler.
    pub fn init(
        scaler: &dyn Scaler,
        raw_tail: &[f64],
        capacity: usize,
    ) -> Result<Self, ValidationError> {
        if raw_tail.len() != capacity {
            return Err(ValidationError::WindowSeedLength {
                expected: capacity,
                actual: raw_tail.len(),
            });
        }
        let values = raw_tail.iter().map(|&raw| scaler.transform(raw)).collect();
        Ok(Self { values, capacity })
    }

    /// Normalize `raw` and append it, dropping the oldest entry.
    pub fn push(&mut self, scaler: &dyn Scaler, raw: f64) {
        if self.values.len() == self.capacity {
            self.values.pop_front();
        }
        self.values.push_back(scaler.transform(raw));
    }

    /// Ordered snapshot handed to the predictor.
    pub fn snapshot(&self) -> Vec<f64> {
        self.values.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

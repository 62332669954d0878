//! Affine price normalization.

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Affine map between the raw price domain and the bounded domain consumed
/// by the predictor. `transform` and `inverse_transform` must be exact
/// inverses up to floating tolerance.
pub trait Scaler: Send + Sync {
    fn transform(&self, raw: f64) -> f64;
    fn inverse_transform(&self, normalized: f64) -> f64;
}

/// Min-max scaler mapping the fitted range onto `[0, 1]`.
///
/// Fit once per forecast call on the full historical close series, outside
/// the per-day loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinMaxScaler {
    min: f64,
    scale: f64,
}

impl MinMaxScaler {
    /// Fit on raw observations. A degenerate range (all observations equal)
    /// keeps unit scale so the map stays invertible.
    pub fn fit(values: &[f64]) -> Result<Self, ValidationError> {
        if values.is_empty() {
            return Err(ValidationError::EmptyScalerFit);
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &value in values {
            if !value.is_finite() {
                return Err(ValidationError::NonFiniteValue { field: "scaler_fit" });
            }
            min = min.min(value);
            max = max.max(value);
        }

        let range = max - min;
        let scale = if range == 0.0 { 1.0 } else { range };
        Ok(Self { min, scale })
    }
}

impl Scaler for MinMaxScaler {
    fn transform(&self, raw: f64) -> f64 {
        (raw - self.min) / self.scale
    }

    fn inverse_transform(&self, normalized: f64) -> f64 {
        normalized * self.scale + self.min
    }
}

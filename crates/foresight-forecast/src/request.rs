//! Forecast request validation.

use foresight_core::{Symbol, ValidationError};

/// Default forecast horizon in years.
pub const DEFAULT_HORIZON_YEARS: u32 = 2;
/// Default predictor lookback window length.
pub const DEFAULT_LOOKBACK_WINDOW: usize = 60;

const MIN_LOOKBACK_WINDOW: usize = 2;

/// Validated forecast request.
///
/// Construction is the single validation point: no simulation state exists
/// for a request that never passed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastRequest {
    symbol: Symbol,
    horizon_years: u32,
    lookback_window: usize,
}

impl ForecastRequest {
    /// Validate a request; zero and negative horizons are rejected.
    pub fn new(symbol: Symbol, horizon_years: i32) -> Result<Self, ValidationError> {
        if horizon_years < 1 {
            return Err(ValidationError::InvalidHorizon {
                years: horizon_years,
            });
        }
        Ok(Self {
            symbol,
            horizon_years: horizon_years as u32,
            lookback_window: DEFAULT_LOOKBACK_WINDOW,
        })
    }

    /// Request with the default two-year horizon.
    pub fn with_defaults(symbol: Symbol) -> Self {
        Self {
            symbol,
            horizon_years: DEFAULT_HORIZON_YEARS,
            lookback_window: DEFAULT_LOOKBACK_WINDOW,
        }
    }

    /// Override the predictor lookback window.
    pub fn with_lookback_window(mut self, window: usize) -> Result<Self, ValidationError> {
        if window < MIN_LOOKBACK_WINDOW {
            return Err(ValidationError::LookbackTooShort {
                window,
                min: MIN_LOOKBACK_WINDOW,
            });
        }
        self.lookback_window = window;
        Ok(self)
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub const fn horizon_years(&self) -> u32 {
        self.horizon_years
    }

    pub const fn lookback_window(&self) -> usize {
        self.lookback_window
    }
}

//! Historical volatility estimation.

use crate::stats;

/// Derives the shock scale (sigma) from trailing historical closes.
#[derive(Debug, Clone, Copy)]
pub struct VolatilityEstimator {
    lookback: usize,
}

impl VolatilityEstimator {
    pub fn new(lookback: usize) -> Self {
        Self { lookback }
    }

    /// Population standard deviation of daily log returns over the trailing
    /// `lookback` closes.
    ///
    /// Fewer than two closes yield 0.0, a deterministic degraded mode
    /// rather than an error: the simulation then runs shock-free.
    pub fn estimate(&self, closes: &[f64]) -> f64 {
        let start = closes.len().saturating_sub(self.lookback);
        let tail = &closes[start..];
        if tail.len() < 2 {
            return 0.0;
        }
        stats::population_std(&stats::log_returns(tail))
    }
}

//! Forecast run configuration.

/// Tuning parameters for a forecast run.
///
/// Defaults reproduce the advisory backend's production behavior; override
/// individual fields for experiments and tests.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastConfig {
    /// Simulated trading days per horizon year.
    pub trading_days_per_year: usize,
    /// Largest allowed relative day-to-day move once shocks apply.
    pub max_daily_move: f64,
    /// Hard floor on a day's price as a fraction of the previous day's.
    pub floor_ratio: f64,
    /// Trailing closes used for the volatility estimate.
    pub volatility_lookback: usize,
    /// Calendar days of real history included as chart context.
    pub historical_context_days: i64,
    /// Calendar days of history requested from the provider.
    pub history_fetch_days: i64,
    /// Seed for the per-run random generator; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            trading_days_per_year: 252,
            max_daily_move: 0.2,
            floor_ratio: 0.5,
            volatility_lookback: 252,
            historical_context_days: 730,
            history_fetch_days: 3 * 365 + 120,
            seed: None,
        }
    }
}

impl ForecastConfig {
    /// Config with a fixed seed for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}

//! Risk statistics over the finished trajectory.

use crate::result::ForecastStats;
use crate::stats;

impl ForecastStats {
    /// Derive the risk summary from the last real price and the simulated
    /// path.
    ///
    /// Daily returns are simple percentage changes of the simulated path
    /// (not log returns); volatility annualizes their population deviation.
    pub fn from_path(
        current_price: f64,
        prices: &[f64],
        horizon_years: u32,
        trading_days_per_year: usize,
    ) -> Self {
        let final_price = prices.last().copied().unwrap_or(current_price);

        let total_return_pct = (final_price - current_price) / current_price * 100.0;
        let annualized_return_pct = ((final_price / current_price)
            .powf(1.0 / f64::from(horizon_years))
            - 1.0)
            * 100.0;

        let daily_returns = stats::simple_returns(prices);
        let volatility_pct = stats::population_std(&daily_returns)
            * (trading_days_per_year as f64).sqrt()
            * 100.0;
        let max_drawdown_pct = max_drawdown_pct(&daily_returns);

        Self {
            current_price,
            final_price,
            total_return_pct,
            annualized_return_pct,
            volatility_pct,
            max_drawdown_pct,
        }
    }
}

/// Deepest peak-to-trough decline of the cumulative return path, as a
/// percentage. Zero or negative by construction: the running maximum is
/// touched at least once.
fn max_drawdown_pct(daily_returns: &[f64]) -> f64 {
    if daily_returns.is_empty() {
        return 0.0;
    }

    let mut cumulative = 1.0_f64;
    let mut running_max = f64::NEG_INFINITY;
    let mut worst = f64::INFINITY;
    for &daily in daily_returns {
        cumulative *= 1.0 + daily;
        running_max = running_max.max(cumulative);
        worst = worst.min(cumulative / running_max - 1.0);
    }
    worst * 100.0
}

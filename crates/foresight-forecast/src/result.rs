//! Terminal forecast output.

use serde::{Deserialize, Serialize};

use foresight_core::{Symbol, TradingDate};

/// Summary risk statistics for a finished forecast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastStats {
    pub current_price: f64,
    pub final_price: f64,
    pub total_return_pct: f64,
    pub annualized_return_pct: f64,
    pub volatility_pct: f64,
    pub max_drawdown_pct: f64,
}

/// Terminal output of one forecast call: trailing real history for chart
/// context, the simulated future path with uncertainty bands, and the risk
/// summary. The engine does not retain it; persistence is the caller's
/// concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub symbol: Symbol,
    pub historical_dates: Vec<TradingDate>,
    pub historical_prices: Vec<f64>,
    pub future_dates: Vec<TradingDate>,
    pub future_prices: Vec<f64>,
    pub uncertainty_upper: Vec<f64>,
    pub uncertainty_lower: Vec<f64>,
    pub stats: ForecastStats,
}

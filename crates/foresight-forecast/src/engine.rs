//! Forecast orchestration.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};
use uuid::Uuid;

use foresight_core::{
    HistoryError, HistoryRequest, MinMaxScaler, PriceHistoryProvider, PricePredictorOracle,
    PriceSeries, TradingDate,
};

use crate::config::ForecastConfig;
use crate::control::RunControl;
use crate::error::ForecastError;
use crate::request::ForecastRequest;
use crate::result::{ForecastResult, ForecastStats};
use crate::step::StepSimulator;
use crate::trajectory::TrajectoryAssembler;
use crate::volatility::VolatilityEstimator;
use crate::window::WindowBuffer;

/// Lifecycle phase of a single forecast run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForecastPhase {
    Initialized,
    Simulating,
    Assembled,
    Completed,
    Failed,
}

/// Per-call run identity and phase tracking.
///
/// `Completed` and `Failed` are terminal; nothing is persisted between
/// phases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastRun {
    id: Uuid,
    phase: ForecastPhase,
}

impl ForecastRun {
    fn start() -> Self {
        Self {
            id: Uuid::new_v4(),
            phase: ForecastPhase::Initialized,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn phase(&self) -> ForecastPhase {
        self.phase
    }

    fn advance(&mut self, phase: ForecastPhase) {
        debug!(run_id = %self.id, from = ?self.phase, to = ?phase, "forecast phase transition");
        self.phase = phase;
    }
}

/// Orchestrates one forecast call end to end: fetch, fit, simulate,
/// assemble, summarize.
///
/// Collaborators are injected trait objects shared across calls; everything
/// per-call (scaler fit, RNG, window, step state) lives on this call's stack
/// and dies with it.
pub struct Forecaster {
    provider: Arc<dyn PriceHistoryProvider>,
    oracle: Arc<dyn PricePredictorOracle>,
    config: ForecastConfig,
}

impl Forecaster {
    pub fn new(
        provider: Arc<dyn PriceHistoryProvider>,
        oracle: Arc<dyn PricePredictorOracle>,
    ) -> Self {
        Self::with_config(provider, oracle, ForecastConfig::default())
    }

    pub fn with_config(
        provider: Arc<dyn PriceHistoryProvider>,
        oracle: Arc<dyn PricePredictorOracle>,
        config: ForecastConfig,
    ) -> Self {
        Self {
            provider,
            oracle,
            config,
        }
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Run a forecast with no external cancellation.
    pub async fn forecast(
        &self,
        request: &ForecastRequest,
    ) -> Result<ForecastResult, ForecastError> {
        self.forecast_with_control(request, &RunControl::new()).await
    }

    /// Run a forecast under a cancellation/deadline control, checked once
    /// per simulated day.
    pub async fn forecast_with_control(
        &self,
        request: &ForecastRequest,
        control: &RunControl,
    ) -> Result<ForecastResult, ForecastError> {
        let mut run = ForecastRun::start();
        match self.execute(request, control, &mut run).await {
            Ok(result) => {
                run.advance(ForecastPhase::Completed);
                info!(
                    run_id = %run.id(),
                    symbol = %request.symbol(),
                    final_price = result.stats.final_price,
                    "forecast completed"
                );
                Ok(result)
            }
            Err(error) => {
                run.advance(ForecastPhase::Failed);
                warn!(
                    run_id = %run.id(),
                    symbol = %request.symbol(),
                    error = %error,
                    "forecast failed"
                );
                Err(error)
            }
        }
    }

    async fn execute(
        &self,
        request: &ForecastRequest,
        control: &RunControl,
        run: &mut ForecastRun,
    ) -> Result<ForecastResult, ForecastError> {
        let history = self.fetch_history(request).await?;

        let window_len = request.lookback_window();
        if history.len() < window_len {
            return Err(
                HistoryError::insufficient(request.symbol(), window_len, history.len()).into(),
            );
        }
        let last = history
            .last()
            .ok_or_else(|| HistoryError::unavailable(request.symbol()))?;
        let last_close = last.close;
        let last_date = last.date;

        let closes = history.closes();
        let scaler = MinMaxScaler::fit(&closes)?;
        let sigma = VolatilityEstimator::new(self.config.volatility_lookback).estimate(&closes);

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let window = WindowBuffer::init(&scaler, &closes[closes.len() - window_len..], window_len)?;
        let total_days = request.horizon_years() as usize * self.config.trading_days_per_year;

        run.advance(ForecastPhase::Simulating);
        debug!(run_id = %run.id(), sigma, total_days, "starting day loop");

        let simulator = StepSimulator::new(
            self.oracle.as_ref(),
            &scaler,
            &mut rng,
            window,
            last_close,
            sigma,
            &self.config,
        )?;
        let assembler = TrajectoryAssembler::new(total_days);
        let path = assembler.run(simulator, last_date, control).await?;

        run.advance(ForecastPhase::Assembled);
        let (uncertainty_upper, uncertainty_lower) = assembler.uncertainty_bands(&path.prices);

        let context = history.trailing_context(self.config.historical_context_days);
        let stats = ForecastStats::from_path(
            last_close,
            &path.prices,
            request.horizon_years(),
            self.config.trading_days_per_year,
        );

        Ok(ForecastResult {
            symbol: request.symbol().clone(),
            historical_dates: context.iter().map(|point| point.date).collect(),
            historical_prices: context.iter().map(|point| point.close).collect(),
            future_dates: path.dates,
            future_prices: path.prices,
            uncertainty_upper,
            uncertainty_lower,
            stats,
        })
    }

    async fn fetch_history(
        &self,
        request: &ForecastRequest,
    ) -> Result<PriceSeries, ForecastError> {
        let end = TradingDate::today_utc();
        let start = end.minus_days(self.config.history_fetch_days);
        let fetch = HistoryRequest::new(request.symbol().clone(), start, end)?;

        let history = self.provider.daily_closes(fetch).await?;
        if history.is_empty() {
            return Err(HistoryError::unavailable(request.symbol()).into());
        }
        Ok(history)
    }
}

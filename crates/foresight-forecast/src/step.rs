//! Per-day simulation step.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use foresight_core::{InferenceError, PricePredictorOracle, Scaler, ValidationError};

use crate::config::ForecastConfig;
use crate::error::ForecastError;
use crate::window::WindowBuffer;

/// Per-call simulation state: the rolling window, the previous day's price,
/// and the step index. Created fresh for each forecast, exclusively owned by
/// that call, and discarded when the trajectory is done.
pub struct StepSimulator<'a, R: Rng> {
    oracle: &'a dyn PricePredictorOracle,
    scaler: &'a dyn Scaler,
    rng: &'a mut R,
    shock: Normal<f64>,
    window: WindowBuffer,
    prev_price: f64,
    step: usize,
    max_daily_move: f64,
    floor_ratio: f64,
}

impl<'a, R: Rng> StepSimulator<'a, R> {
    /// Build the per-call state. `last_close` is the final real price; sigma
    /// stays fixed for the entire run.
    pub fn new(
        oracle: &'a dyn PricePredictorOracle,
        scaler: &'a dyn Scaler,
        rng: &'a mut R,
        window: WindowBuffer,
        last_close: f64,
        sigma: f64,
        config: &ForecastConfig,
    ) -> Result<Self, ForecastError> {
        let shock = Normal::new(0.0, sigma)
            .map_err(|_| ValidationError::NonFiniteValue { field: "sigma" })?;
        Ok(Self {
            oracle,
            scaler,
            rng,
            shock,
            window,
            prev_price: last_close,
            step: 0,
            max_daily_move: config.max_daily_move,
            floor_ratio: config.floor_ratio,
        })
    }

    /// Simulate one trading day and return its price.
    ///
    /// Day 0 takes the raw inverse-transformed prediction untouched; shock,
    /// clamp, and floor apply from day 1 onward. Any oracle failure or
    /// non-finite value aborts the whole run.
    pub async fn advance(&mut self) -> Result<f64, ForecastError> {
        let snapshot = self.window.snapshot();
        let predicted = self.oracle.predict_next(&snapshot).await?;
        if !predicted.is_finite() {
            return Err(InferenceError::non_finite(self.step, predicted).into());
        }

        let raw_prediction = self.scaler.inverse_transform(predicted);
        if !raw_prediction.is_finite() {
            return Err(InferenceError::non_finite(self.step, raw_prediction).into());
        }

        let price = if self.step == 0 {
            raw_prediction
        } else {
            let shock = self.shock.sample(self.rng);
            let adjusted = raw_prediction + raw_prediction * shock;
            let prev = self.prev_price;
            let max_move = prev * self.max_daily_move;
            // Clamp before floor, matching the recorded operation order.
            let bounded = adjusted.max(prev - max_move).min(prev + max_move);
            bounded.max(prev * self.floor_ratio)
        };

        self.window.push(self.scaler, price);
        self.prev_price = price;
        self.step += 1;
        Ok(price)
    }

    /// Number of days simulated so far.
    pub fn step(&self) -> usize {
        self.step
    }
}

#[cfg(test)]
mod tests {
    use std::future::Future;
    use std::pin::Pin;

    use foresight_core::MinMaxScaler;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    struct ConstOracle(f64);

    impl PricePredictorOracle for ConstOracle {
        fn predict_next<'a>(
            &'a self,
            _window: &'a [f64],
        ) -> Pin<Box<dyn Future<Output = Result<f64, InferenceError>> + Send + 'a>> {
            let value = self.0;
            Box::pin(async move { Ok(value) })
        }
    }

    /// Returns each scripted value in turn, repeating the last one.
    struct SequenceOracle {
        values: Vec<f64>,
        calls: std::sync::atomic::AtomicUsize,
    }

    impl SequenceOracle {
        fn new(values: Vec<f64>) -> Self {
            Self {
                values,
                calls: std::sync::atomic::AtomicUsize::new(0),
            }
        }
    }

    impl PricePredictorOracle for SequenceOracle {
        fn predict_next<'a>(
            &'a self,
            _window: &'a [f64],
        ) -> Pin<Box<dyn Future<Output = Result<f64, InferenceError>> + Send + 'a>> {
            let call = self
                .calls
                .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            let value = self.values[call.min(self.values.len() - 1)];
            Box::pin(async move { Ok(value) })
        }
    }

    fn simulator<'a>(
        oracle: &'a dyn PricePredictorOracle,
        scaler: &'a MinMaxScaler,
        rng: &'a mut StdRng,
        sigma: f64,
    ) -> StepSimulator<'a, StdRng> {
        let window = WindowBuffer::init(scaler, &[100.0, 100.0, 100.0], 3).expect("seed");
        StepSimulator::new(
            oracle,
            scaler,
            rng,
            window,
            100.0,
            sigma,
            &ForecastConfig::default(),
        )
        .expect("simulator")
    }

    #[tokio::test]
    async fn day_zero_takes_the_raw_prediction() {
        // Constant history fit keeps unit scale: normalized 5.0 is raw 105.0.
        let scaler = MinMaxScaler::fit(&[100.0; 10]).expect("fit");
        let oracle = ConstOracle(5.0);
        let mut rng = StdRng::seed_from_u64(7);
        let mut sim = simulator(&oracle, &scaler, &mut rng, 0.0);

        let day_zero = sim.advance().await.expect("day 0");
        assert_eq!(day_zero, 105.0);
        assert_eq!(sim.step(), 1);
    }

    #[tokio::test]
    async fn later_days_clamp_to_twenty_percent_of_previous() {
        // Day 0 holds at 100, then the target jumps to 200: day 1 may move
        // at most 20% off the previous price.
        let scaler = MinMaxScaler::fit(&[100.0; 10]).expect("fit");
        let oracle = SequenceOracle::new(vec![0.0, 100.0]); // raw 100.0, then 200.0
        let mut rng = StdRng::seed_from_u64(7);
        let mut sim = simulator(&oracle, &scaler, &mut rng, 0.0);

        let day_zero = sim.advance().await.expect("day 0");
        assert_eq!(day_zero, 100.0);

        let day_one = sim.advance().await.expect("day 1");
        assert!((day_one - 120.0).abs() < 1e-9, "expected 100 * 1.2, got {day_one}");
    }

    #[tokio::test]
    async fn crashes_are_bounded_from_below() {
        // Target collapses to 10 after day 0; the clamp's lower bound keeps
        // each day within 20% of the last.
        let scaler = MinMaxScaler::fit(&[100.0; 10]).expect("fit");
        let oracle = SequenceOracle::new(vec![0.0, -90.0]); // raw 100.0, then 10.0
        let mut rng = StdRng::seed_from_u64(7);
        let mut sim = simulator(&oracle, &scaler, &mut rng, 0.0);

        let day_zero = sim.advance().await.expect("day 0");
        assert_eq!(day_zero, 100.0);

        let day_one = sim.advance().await.expect("day 1");
        assert!((day_one - 80.0).abs() < 1e-9, "expected 100 * 0.8, got {day_one}");
        assert!(day_one >= 0.5 * day_zero);
    }

    #[tokio::test]
    async fn non_finite_prediction_aborts() {
        let scaler = MinMaxScaler::fit(&[100.0; 10]).expect("fit");
        let oracle = ConstOracle(f64::NAN);
        let mut rng = StdRng::seed_from_u64(7);
        let mut sim = simulator(&oracle, &scaler, &mut rng, 0.0);

        let err = sim.advance().await.expect_err("must fail");
        assert!(matches!(err, ForecastError::Inference(_)));
    }

    #[tokio::test]
    async fn zero_sigma_draws_no_shock() {
        let scaler = MinMaxScaler::fit(&[100.0; 10]).expect("fit");
        let oracle = ConstOracle(5.0);
        let mut rng = StdRng::seed_from_u64(7);
        let mut sim = simulator(&oracle, &scaler, &mut rng, 0.0);

        for _ in 0..10 {
            let price = sim.advance().await.expect("step");
            assert!((price - 105.0).abs() < 1e-9);
        }
    }
}

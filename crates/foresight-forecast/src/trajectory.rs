//! Full-horizon trajectory assembly.

use foresight_core::TradingDate;
use rand::Rng;

use crate::control::RunControl;
use crate::error::ForecastError;
use crate::stats;
use crate::step::StepSimulator;

/// Date-aligned simulated path.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedPath {
    pub dates: Vec<TradingDate>,
    pub prices: Vec<f64>,
}

/// Drives the per-day loop for the whole horizon and derives the
/// display-oriented uncertainty bands.
#[derive(Debug, Clone, Copy)]
pub struct TrajectoryAssembler {
    total_days: usize,
}

impl TrajectoryAssembler {
    pub fn new(total_days: usize) -> Self {
        Self { total_days }
    }

    /// Run the full horizon, consuming the simulator state.
    ///
    /// The first simulated date is the first weekday after
    /// `last_historical`; a weekend successor rolls forward. The control is
    /// checked before each day.
    pub async fn run<R: Rng>(
        &self,
        mut simulator: StepSimulator<'_, R>,
        last_historical: TradingDate,
        control: &RunControl,
    ) -> Result<SimulatedPath, ForecastError> {
        let mut dates = Vec::with_capacity(self.total_days);
        let mut prices = Vec::with_capacity(self.total_days);
        let mut date = last_historical;

        for _ in 0..self.total_days {
            control.checkpoint(simulator.step())?;
            let price = simulator.advance().await?;
            date = date.next_business_day();
            dates.push(date);
            prices.push(price);
        }

        Ok(SimulatedPath { dates, prices })
    }

    /// Uncertainty bands over the finished path.
    ///
    /// The spread is the population standard deviation of the path's first
    /// differences, scaled by the square root of the step index. Computed
    /// retrospectively over the whole path: a display statistic, not a
    /// causal forecast input.
    pub fn uncertainty_bands(&self, prices: &[f64]) -> (Vec<f64>, Vec<f64>) {
        let spread = stats::population_std(&stats::first_differences(prices));

        let mut upper = Vec::with_capacity(prices.len());
        let mut lower = Vec::with_capacity(prices.len());
        for (index, &price) in prices.iter().enumerate() {
            let band = spread * (index as f64).sqrt();
            upper.push(price + band);
            lower.push(price - band);
        }
        (upper, lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_start_closed_and_widen_with_sqrt_of_step() {
        let assembler = TrajectoryAssembler::new(4);
        let prices = [100.0, 102.0, 103.0, 107.0];
        let (upper, lower) = assembler.uncertainty_bands(&prices);

        // Differences [2, 1, 4]: population variance 14/9.
        let spread = (14.0_f64 / 9.0).sqrt();

        assert_eq!(upper[0], 100.0);
        assert_eq!(lower[0], 100.0);
        assert!((upper[2] - (103.0 + spread * 2.0_f64.sqrt())).abs() < 1e-12);
        assert!((lower[3] - (107.0 - spread * 3.0_f64.sqrt())).abs() < 1e-12);
    }

    #[test]
    fn linear_path_has_zero_width_bands() {
        let assembler = TrajectoryAssembler::new(3);
        let (upper, lower) = assembler.uncertainty_bands(&[100.0, 101.0, 102.0]);
        assert_eq!(upper, vec![100.0, 101.0, 102.0]);
        assert_eq!(lower, vec![100.0, 101.0, 102.0]);
    }
}

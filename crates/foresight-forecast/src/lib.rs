//! # Foresight Forecast
//!
//! Recursive multi-year price forecasting engine.
//!
//! ## Overview
//!
//! Turns a single-step price predictor into a multi-year trajectory with
//! calibrated randomness, bounded day-to-day movement, uncertainty bands,
//! and summary risk statistics:
//!
//! - **Calibrated shocks** from per-day Gaussian noise scaled by historical
//!   volatility, drawn from an explicit seedable generator
//! - **Bounded movement**: each simulated day moves at most 20% off the
//!   previous day, with a hard floor at half of it
//! - **Fail-fast**: any oracle failure or non-finite value aborts the run;
//!   no partial trajectory is ever returned
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Run configuration and defaults |
//! | [`control`] | Cooperative cancellation and deadlines |
//! | [`engine`] | The orchestrating [`Forecaster`] and run phases |
//! | [`error`] | Terminal forecast error |
//! | [`request`] | Validated forecast request |
//! | [`result`] | Forecast output and risk summary |
//! | [`step`] | Per-day step simulator |
//! | [`trajectory`] | Day-loop driver and uncertainty bands |
//! | [`volatility`] | Historical volatility estimation |
//! | [`window`] | Rolling predictor-input window |
//!
//! ## Data Flow
//!
//! ```text
//! ┌─────────────────┐   closes    ┌──────────────────────┐
//! │ History provider│────────────▶│ VolatilityEstimator  │──▶ sigma
//! └────────┬────────┘             └──────────────────────┘
//!          │ tail (W closes)
//!          ▼
//! ┌─────────────────┐  snapshot   ┌──────────────────────┐
//! │  WindowBuffer   │────────────▶│   Predictor oracle   │
//! └────────▲────────┘             └──────────┬───────────┘
//!          │ push(today)                     │ next normalized close
//!          │                                 ▼
//!          │                      ┌──────────────────────┐
//!          └──────────────────────│    StepSimulator     │ shock, clamp,
//!                    once per day └──────────┬───────────┘ floor
//!                                            ▼
//!                                 ┌──────────────────────┐
//!                                 │ TrajectoryAssembler  │──▶ bands, dates
//!                                 └──────────┬───────────┘
//!                                            ▼
//!                                 ┌──────────────────────┐
//!                                 │    RiskStatistics    │──▶ ForecastResult
//!                                 └──────────────────────┘
//! ```
//!
//! ## Determinism
//!
//! With a seed pinned in [`ForecastConfig`], repeated runs against the same
//! oracle, scaler, and history produce bit-identical paths. The day loop is
//! strictly sequential within one call; independent calls may run
//! concurrently and share collaborators.

pub mod config;
pub mod control;
pub mod engine;
pub mod error;
pub mod request;
pub mod result;
mod risk;
mod stats;
pub mod step;
pub mod trajectory;
pub mod volatility;
pub mod window;

// Re-export commonly used types at crate root for convenience

pub use config::ForecastConfig;
pub use control::RunControl;
pub use engine::{ForecastPhase, ForecastRun, Forecaster};
pub use error::ForecastError;
pub use request::{ForecastRequest, DEFAULT_HORIZON_YEARS, DEFAULT_LOOKBACK_WINDOW};
pub use result::{ForecastResult, ForecastStats};
pub use step::StepSimulator;
pub use trajectory::{SimulatedPath, TrajectoryAssembler};
pub use volatility::VolatilityEstimator;
pub use window::WindowBuffer;

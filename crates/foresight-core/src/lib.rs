//! # Foresight Core
//!
//! Core contracts and domain types for the foresight forecasting engine.
//!
//! ## Overview
//!
//! This crate provides the foundational components consumed by
//! `foresight-forecast`:
//!
//! - **Canonical domain models** for instruments, trading dates, and daily
//!   close series, validated at construction
//! - **Collaborator traits** for the three external dependencies of a
//!   forecast call: the history provider, the one-step predictor oracle,
//!   and the price scaler
//! - **Structured errors** with stable machine-readable codes
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`domain`] | Domain models (Symbol, TradingDate, PricePoint, PriceSeries) |
//! | [`error`] | Validation error type |
//! | [`history`] | History provider trait and request/error types |
//! | [`oracle`] | Predictor oracle trait and error types |
//! | [`scaler`] | Scaler trait and the min-max implementation |
//!
//! ## Collaborator contracts
//!
//! The forecasting core owns no I/O. Everything it needs from the outside
//! world arrives through three injected trait objects:
//!
//! ```text
//! ┌────────────────────┐
//! │ Forecast call      │
//! └─────┬──────┬───────┘
//!       │      │
//!       ▼      ▼
//! ┌──────────┐ ┌──────────────┐ ┌──────────┐
//! │ History  │ │ Predictor    │ │ Scaler   │
//! │ provider │ │ oracle       │ │ (affine) │
//! └──────────┘ └──────────────┘ └──────────┘
//! ```
//!
//! All collaborator traits are `Send + Sync`; independent forecast calls may
//! share them concurrently.
//!
//! ## Error Handling
//!
//! Domain construction returns [`ValidationError`]; collaborator failures
//! use kinded error structs with stable `code()` strings:
//!
//! ```rust
//! use foresight_core::{HistoryError, Symbol};
//!
//! let symbol = Symbol::parse("AAPL").unwrap();
//! let error = HistoryError::unavailable(&symbol);
//! assert_eq!(error.code(), "history.unavailable");
//! ```

pub mod domain;
pub mod error;
pub mod history;
pub mod oracle;
pub mod scaler;

// Re-export commonly used types at crate root for convenience

pub use domain::{PricePoint, PriceSeries, Symbol, TradingDate};
pub use error::ValidationError;
pub use history::{HistoryError, HistoryErrorKind, HistoryRequest, PriceHistoryProvider};
pub use oracle::{InferenceError, InferenceErrorKind, PricePredictorOracle};
pub use scaler::{MinMaxScaler, Scaler};

//! Price-history collaborator contract.
//!
//! The forecasting core never talks to a market-data source directly; it is
//! handed a [`PriceHistoryProvider`] and reads whatever ordered series the
//! provider returns for the requested range.

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use crate::{PriceSeries, Symbol, TradingDate, ValidationError};

/// Inclusive date range for a daily-close fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRequest {
    pub symbol: Symbol,
    pub start: TradingDate,
    pub end: TradingDate,
}

impl HistoryRequest {
    pub fn new(
        symbol: Symbol,
        start: TradingDate,
        end: TradingDate,
    ) -> Result<Self, ValidationError> {
        if end < start {
            return Err(ValidationError::InvertedDateRange);
        }
        Ok(Self { symbol, start, end })
    }
}

/// History failure classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryErrorKind {
    /// The provider has no data at all for the symbol.
    Unavailable,
    /// Data exists but is shorter than the forecast needs.
    Insufficient,
    /// The upstream source failed (network, auth, malformed payload).
    Upstream,
}

/// Structured history-provider error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryError {
    kind: HistoryErrorKind,
    message: String,
}

impl HistoryError {
    pub fn unavailable(symbol: &Symbol) -> Self {
        Self {
            kind: HistoryErrorKind::Unavailable,
            message: format!("no price history available for '{symbol}'"),
        }
    }

    pub fn insufficient(symbol: &Symbol, required: usize, actual: usize) -> Self {
        Self {
            kind: HistoryErrorKind::Insufficient,
            message: format!(
                "price history for '{symbol}' has {actual} closes, forecast needs {required}"
            ),
        }
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self {
            kind: HistoryErrorKind::Upstream,
            message: message.into(),
        }
    }

    pub const fn kind(&self) -> HistoryErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            HistoryErrorKind::Unavailable => "history.unavailable",
            HistoryErrorKind::Insufficient => "history.insufficient",
            HistoryErrorKind::Upstream => "history.upstream",
        }
    }
}

impl Display for HistoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for HistoryError {}

/// Market-data collaborator contract.
///
/// Implementations must be `Send + Sync`: independent forecast calls may
/// share one provider concurrently.
pub trait PriceHistoryProvider: Send + Sync {
    /// Fetch ordered daily closes for the requested symbol and range.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError`] when the symbol has no data, too little
    /// data, or the upstream source fails.
    fn daily_closes<'a>(
        &'a self,
        request: HistoryRequest,
    ) -> Pin<Box<dyn Future<Output = Result<PriceSeries, HistoryError>> + Send + 'a>>;
}

use thiserror::Error;

/// Validation and contract errors exposed by `foresight-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol must start with an ASCII letter: '{ch}'")]
    SymbolInvalidStart { ch: char },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("date must be ISO calendar YYYY-MM-DD: '{value}'")]
    InvalidDate { value: String },
    #[error("history range end must not precede start")]
    InvertedDateRange,
    #[error("price series dates must be strictly increasing at index {index}")]
    NonMonotonicDates { index: usize },

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("field '{field}' must be positive")]
    NonPositiveValue { field: &'static str },

    #[error("scaler must be fitted on at least one observation")]
    EmptyScalerFit,

    #[error("forecast horizon must be at least 1 year: {years}")]
    InvalidHorizon { years: i32 },
    #[error("lookback window {window} is below the minimum of {min}")]
    LookbackTooShort { window: usize, min: usize },
    #[error("window seed requires exactly {expected} prices, got {actual}")]
    WindowSeedLength { expected: usize, actual: usize },
}

use serde::Serialize;

use crate::{Symbol, TradingDate, ValidationError};

/// Single daily close observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricePoint {
    pub date: TradingDate,
    pub close: f64,
}

impl PricePoint {
    pub fn new(date: TradingDate, close: f64) -> Result<Self, ValidationError> {
        if !close.is_finite() {
            return Err(ValidationError::NonFiniteValue { field: "close" });
        }
        if close <= 0.0 {
            return Err(ValidationError::NonPositiveValue { field: "close" });
        }
        Ok(Self { date, close })
    }
}

/// Ordered daily-close series for one instrument.
///
/// Owned by the history collaborator; the forecasting core only reads it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    symbol: Symbol,
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Build a series, enforcing strictly increasing dates.
    pub fn new(symbol: Symbol, points: Vec<PricePoint>) -> Result<Self, ValidationError> {
        for (index, pair) in points.windows(2).enumerate() {
            if pair[1].date <= pair[0].date {
                return Err(ValidationError::NonMonotonicDates { index: index + 1 });
            }
        }
        Ok(Self { symbol, points })
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.close).collect()
    }

    /// Last `count` points; the whole series when shorter.
    pub fn tail(&self, count: usize) -> &[PricePoint] {
        let start = self.points.len().saturating_sub(count);
        &self.points[start..]
    }

    /// Points within `days` calendar days of the series end, inclusive.
    ///
    /// Anchored at the last observation rather than the wall clock so the
    /// slice is a pure function of the series.
    pub fn trailing_context(&self, days: i64) -> &[PricePoint] {
        let Some(last) = self.points.last() else {
            return &[];
        };
        let cutoff = last.date.minus_days(days);
        let start = self.points.partition_point(|point| point.date < cutoff);
        &self.points[start..]
    }
}

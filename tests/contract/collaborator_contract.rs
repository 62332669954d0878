//! Contract tests for the collaborator traits.
//!
//! The forecast engine consumes all three collaborators as shared trait
//! objects; these tests pin the object-safety, thread-safety, and error-code
//! guarantees implementations rely on.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use foresight_core::{
    HistoryError, HistoryErrorKind, HistoryRequest, InferenceError, InferenceErrorKind,
    MinMaxScaler, PriceHistoryProvider, PricePoint, PricePredictorOracle, PriceSeries, Scaler,
    Symbol, TradingDate, ValidationError,
};

/// Echoes the window's most recent value.
struct EchoOracle;

impl PricePredictorOracle for EchoOracle {
    fn predict_next<'a>(
        &'a self,
        window: &'a [f64],
    ) -> Pin<Box<dyn Future<Output = Result<f64, InferenceError>> + Send + 'a>> {
        Box::pin(async move {
            window
                .last()
                .copied()
                .ok_or_else(|| InferenceError::failed("empty window"))
        })
    }
}

/// Serves a small canned series for any request.
struct CannedHistory;

impl PriceHistoryProvider for CannedHistory {
    fn daily_closes<'a>(
        &'a self,
        request: HistoryRequest,
    ) -> Pin<Box<dyn Future<Output = Result<PriceSeries, HistoryError>> + Send + 'a>> {
        Box::pin(async move {
            let dates = ["2024-01-02", "2024-01-03", "2024-01-04"];
            let mut points = Vec::with_capacity(dates.len());
            for (index, date) in dates.iter().enumerate() {
                let date = TradingDate::parse(date).map_err(|e| HistoryError::upstream(e.to_string()))?;
                let point = PricePoint::new(date, 100.0 + index as f64)
                    .map_err(|e| HistoryError::upstream(e.to_string()))?;
                points.push(point);
            }
            PriceSeries::new(request.symbol, points)
                .map_err(|e| HistoryError::upstream(e.to_string()))
        })
    }
}

fn assert_shareable<T: Send + Sync + ?Sized>() {}

#[test]
fn collaborator_objects_are_send_and_sync() {
    assert_shareable::<Arc<dyn PricePredictorOracle>>();
    assert_shareable::<Arc<dyn PriceHistoryProvider>>();
    assert_shareable::<Arc<dyn Scaler>>();
}

#[tokio::test]
async fn oracle_round_trips_through_a_shared_trait_object() {
    let oracle: Arc<dyn PricePredictorOracle> = Arc::new(EchoOracle);

    let predicted = oracle.predict_next(&[0.1, 0.2, 0.7]).await.expect("predict");
    assert_eq!(predicted, 0.7);

    let error = oracle.predict_next(&[]).await.expect_err("must fail");
    assert_eq!(error.kind(), InferenceErrorKind::Failed);
}

#[tokio::test]
async fn history_provider_returns_an_ordered_series() {
    let provider: Arc<dyn PriceHistoryProvider> = Arc::new(CannedHistory);
    let symbol = Symbol::parse("AAPL").expect("valid");
    let request = HistoryRequest::new(
        symbol,
        TradingDate::parse("2024-01-01").expect("valid"),
        TradingDate::parse("2024-02-01").expect("valid"),
    )
    .expect("valid request");

    let series = provider.daily_closes(request).await.expect("history");

    assert_eq!(series.len(), 3);
    assert_eq!(series.last().expect("non-empty").close, 102.0);
    for pair in series.points().windows(2) {
        assert!(pair[0].date < pair[1].date, "dates must be increasing");
    }
}

#[test]
fn history_request_rejects_an_inverted_range() {
    let symbol = Symbol::parse("AAPL").expect("valid");
    let err = HistoryRequest::new(
        symbol,
        TradingDate::parse("2024-02-01").expect("valid"),
        TradingDate::parse("2024-01-01").expect("valid"),
    )
    .expect_err("must fail");
    assert_eq!(err, ValidationError::InvertedDateRange);
}

#[test]
fn scaler_contract_holds_through_a_trait_object() {
    let concrete = MinMaxScaler::fit(&[80.0, 120.0]).expect("fit");
    let scaler: &dyn Scaler = &concrete;

    for raw in [80.0, 95.5, 120.0, 150.0] {
        let back = scaler.inverse_transform(scaler.transform(raw));
        assert!((back - raw).abs() < 1e-9, "{raw} round-tripped to {back}");
    }
}

#[test]
fn error_codes_are_stable_across_the_boundary() {
    let symbol = Symbol::parse("AAPL").expect("valid");

    assert_eq!(HistoryError::unavailable(&symbol).code(), "history.unavailable");
    assert_eq!(
        HistoryError::insufficient(&symbol, 60, 12).kind(),
        HistoryErrorKind::Insufficient
    );
    assert_eq!(InferenceError::timed_out("slow").code(), "oracle.timeout");
    assert_eq!(
        InferenceError::non_finite(0, f64::NAN).kind(),
        InferenceErrorKind::NonFinite
    );
}

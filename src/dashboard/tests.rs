//! Tests for dashboard orchestration and the fallback dataset.

use super::*;
use crate::config::{AppConfig, Config, SheetConfig};
use crate::domain::{MonthTable, SeasonStatus};
use crate::sheet::SheetError;

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicUsize, Ordering};

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn test_config(testimonials_url: Option<&str>) -> Config {
    Config {
        app: AppConfig {
            name: "test".to_string(),
            log_level: None,
        },
        sheet: SheetConfig {
            results_url: Some("https://example.com/results.csv".to_string()),
            testimonials_url: testimonials_url.map(str::to_string),
            ..SheetConfig::default()
        },
        calculator: None,
    }
}

/// Stub source returning a fixed body, or a 500 when none is set.
struct StubSource {
    body: Option<&'static str>,
    calls: AtomicUsize,
}

impl StubSource {
    fn new(body: Option<&'static str>) -> Arc<Self> {
        Arc::new(Self {
            body,
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl crate::sheet::SheetSource for StubSource {
    async fn fetch_csv(&self, _url: &str) -> Result<String, SheetError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.body {
            Some(text) => Ok(text.to_string()),
            None => Err(SheetError::Status(
                reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            )),
        }
    }
}

// ==================== Fallback dataset tests ====================

#[test]
fn test_fallback_table_sums_to_published_all_time() {
    let table = fallback::month_table();
    let folded = MonthTable::fold(table.records());
    assert_eq!(folded, fallback::all_time());
}

#[test]
fn test_fallback_seasons_match_published_constants() {
    let data = fallback::results_data();
    assert_eq!(data.seasons.len(), 2);

    let current = &data.seasons[0];
    assert_eq!(current.label, "2025/2026");
    assert_eq!(current.status, SeasonStatus::Current);
    assert_eq!(current.stat.total_bets, 1110);
    assert_eq!(current.stat.profit_units, dec("116.53"));
    assert_eq!(current.stat.roi, dec("9.53"));

    let completed = &data.seasons[1];
    assert_eq!(completed.label, "2024/2025");
    assert_eq!(completed.status, SeasonStatus::Completed);
    assert_eq!(completed.stat.total_bets, 1967);
    assert_eq!(completed.stat.profit_units, dec("233.73"));
    assert_eq!(completed.stat.roi, dec("12.73"));
}

#[test]
fn test_fallback_month_roi_matches_published() {
    let table = fallback::month_table();
    let august = table
        .records()
        .iter()
        .find(|r| r.month == "August 2025")
        .unwrap();
    assert_eq!(august.roi(), dec("11.66"));
}

// ==================== Load and cache tests ====================

#[tokio::test]
async fn test_results_fetched_once() {
    let source = StubSource::new(Some("Total Bets,,42"));
    let dyn_source: Arc<dyn crate::sheet::SheetSource> = source.clone();
    let dashboard = Dashboard::with_source(test_config(None), dyn_source);

    let first = dashboard.results().await;
    let second = dashboard.results().await;

    assert_eq!(first.all_time.total_bets, 42);
    assert_eq!(first, second);
    assert_eq!(source.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_results_fallback_on_transport_error() {
    let source = StubSource::new(None);
    let dyn_source: Arc<dyn crate::sheet::SheetSource> = source.clone();
    let dashboard = Dashboard::with_source(test_config(None), dyn_source);

    let results = dashboard.results().await;
    assert_eq!(*results, fallback::results_data());

    // The degraded snapshot is cached like any other.
    dashboard.results().await;
    assert_eq!(source.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_testimonials_unconfigured_skips_fetch() {
    let source = StubSource::new(Some("Name,Quote\nAlex,Good"));
    let dyn_source: Arc<dyn crate::sheet::SheetSource> = source.clone();
    let dashboard = Dashboard::with_source(test_config(None), dyn_source);

    let testimonials = dashboard.testimonials().await;
    assert!(testimonials.is_empty());
    assert_eq!(source.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_testimonials_loaded_when_configured() {
    let source = StubSource::new(Some("Name,Quote\nAlex,Good"));
    let dyn_source: Arc<dyn crate::sheet::SheetSource> = source.clone();
    let dashboard = Dashboard::with_source(
        test_config(Some("https://example.com/quotes.csv")),
        dyn_source,
    );

    let testimonials = dashboard.testimonials().await;
    assert_eq!(testimonials.len(), 1);
    assert_eq!(testimonials[0].name, "Alex");
}

#[tokio::test]
async fn test_testimonials_empty_on_transport_error() {
    let source = StubSource::new(None);
    let dyn_source: Arc<dyn crate::sheet::SheetSource> = source.clone();
    let dashboard = Dashboard::with_source(
        test_config(Some("https://example.com/quotes.csv")),
        dyn_source,
    );

    assert!(dashboard.testimonials().await.is_empty());
}

// ==================== View assembly tests ====================

#[test]
fn test_view_all_time_calculator() {
    let dashboard = Dashboard::with_source(test_config(None), StubSource::new(None));
    let data = fallback::results_data();

    let view = dashboard.view(&data, "10", None);
    assert_eq!(view.calculator.unit_value, dec("10"));
    assert_eq!(view.calculator.total_profit, dec("3502.6"));
    assert_eq!(view.calculator.avg_stake.round_dp(2), dec("9.94"));
    assert_eq!(view.calculator.start_month, None);
}

#[test]
fn test_view_empty_unit_input_yields_zero() {
    let dashboard = Dashboard::with_source(test_config(None), StubSource::new(None));
    let data = fallback::results_data();

    let view = dashboard.view(&data, "", None);
    assert_eq!(view.calculator.total_profit, Decimal::ZERO);
    assert_eq!(view.calculator.avg_stake, Decimal::ZERO);
}

#[test]
fn test_view_start_month_folds_tail() {
    let dashboard = Dashboard::with_source(test_config(None), StubSource::new(None));
    let data = fallback::results_data();

    let view = dashboard.view(&data, "10", Some("January 2026"));
    assert_eq!(view.calculator.stat.total_bets, 108);
    assert_eq!(view.calculator.stat.profit_units, dec("0.23"));
    assert_eq!(view.calculator.total_profit, dec("2.3"));
}

#[test]
fn test_view_months_presented_newest_first() {
    let dashboard = Dashboard::with_source(test_config(None), StubSource::new(None));
    let data = fallback::results_data();

    let view = dashboard.view(&data, "10", None);
    assert_eq!(view.months[0].month, "January 2026");
    assert_eq!(view.months.last().unwrap().month, "August 2024");
    assert_eq!(view.months[0].roi, dec("0.21"));
}

//! Behavior-driven tests for a screening session.
//!
//! These tests describe WHAT a user sees after choosing stocks and moving the
//! threshold controls, using in-memory provider data.

use ferroscreen_core::{
    FixtureCall, HistoryBar, ScreenWarning, SourceError, ThresholdSelection, WarningSection,
    SCREEN_PERIOD,
};
use ferroscreen_tests::{nse, passing_ratios, screener, ticker, FixtureRatios, FixtureSource};
use time::macros::date;

const EPSILON: f64 = 1e-9;

// =============================================================================
// Screening: End-to-end
// =============================================================================

#[tokio::test]
async fn user_screening_reliance_and_infosys_with_defaults_sees_only_reliance() {
    // Given: Reliance is cheap and Infosys trades above the default P/E ceiling
    let source = FixtureSource::new()
        .with_ratios(
            ticker("RELIANCE.NS"),
            FixtureRatios::new(Some(22.1), Some(2.3), Some(0.004), Some(0.15)),
        )
        .with_ratios(
            ticker("INFY.NS"),
            FixtureRatios::new(Some(60.0), Some(8.1), Some(0.02), Some(0.25)),
        );
    let (screener, _) = screener(source);
    let screener = screener.with_charts(false);
    let selection = nse().select(["Reliance", "Infosys"]).expect("known stocks");

    // When: The screen renders with the initial control positions
    let report = screener
        .render(&selection, &ThresholdSelection::default())
        .await;

    // Then: Exactly one row is shown, for Reliance, in percent
    assert_eq!(report.rows.len(), 1);
    let row = &report.rows[0];
    assert_eq!(row.stock, "Reliance");
    assert_eq!(row.pe, 22.1);
    assert_eq!(row.pb, 2.3);
    assert!((row.roe_percent - 15.0).abs() < EPSILON);
    assert!((row.dividend_yield_percent - 0.4).abs() < EPSILON);

    // And: Being filtered out is not a warning
    assert!(report.warnings.is_empty());
}

#[tokio::test]
async fn rows_follow_selection_order_not_registry_order() {
    // Given: Three passing stocks selected out of registry order
    let source = FixtureSource::new()
        .with_ratios(ticker("WIPRO.NS"), passing_ratios())
        .with_ratios(ticker("RELIANCE.NS"), passing_ratios())
        .with_ratios(ticker("TCS.NS"), passing_ratios());
    let (screener, _) = screener(source);
    let selection = nse().select(["Wipro", "Reliance", "TCS"]).expect("known");

    // When: The screen renders without charts
    let report = screener
        .with_charts(false)
        .render(&selection, &ThresholdSelection::default())
        .await;

    // Then: Rows appear in the order the user picked
    let stocks: Vec<_> = report.rows.iter().map(|row| row.stock.as_str()).collect();
    assert_eq!(stocks, vec!["Wipro", "Reliance", "TCS"]);
}

// =============================================================================
// Screening: Failure isolation
// =============================================================================

#[tokio::test]
async fn one_failing_stock_does_not_hide_the_others() {
    // Given: The middle of three stocks cannot be fetched
    let source = FixtureSource::new()
        .with_ratios(ticker("TCS.NS"), passing_ratios())
        .with_fundamentals_error(
            ticker("HDFCBANK.NS"),
            SourceError::unavailable("yahoo returned status 503"),
        )
        .with_ratios(ticker("SBIN.NS"), passing_ratios());
    let (screener, _) = screener(source);
    let selection = nse().select(["TCS", "HDFC Bank", "SBI"]).expect("known");

    // When: The screen renders
    let report = screener
        .with_charts(false)
        .render(&selection, &ThresholdSelection::default())
        .await;

    // Then: Rows exist for the first and third stock
    let stocks: Vec<_> = report.rows.iter().map(|row| row.stock.as_str()).collect();
    assert_eq!(stocks, vec!["TCS", "SBI"]);

    // And: A single warning names the failing stock
    assert_eq!(
        report.warnings,
        vec![ScreenWarning {
            stock: String::from("HDFC Bank"),
            section: WarningSection::Fundamentals,
            message: String::from("yahoo returned status 503 (source.unavailable)"),
        }]
    );
}

#[tokio::test]
async fn chart_failure_only_affects_the_chart_section() {
    // Given: Kotak fundamentals load but its price history does not
    let bars = vec![
        HistoryBar::new(date!(2024 - 07 - 01), Some(1800.0), Some(1795.0)),
        HistoryBar::new(date!(2024 - 07 - 02), Some(1810.0), Some(1805.5)),
    ];
    let source = FixtureSource::new()
        .with_ratios(ticker("KOTAKBANK.NS"), passing_ratios())
        .with_history_error(ticker("KOTAKBANK.NS"), SourceError::rate_limited("slow down"))
        .with_ratios(ticker("BHARTIARTL.NS"), passing_ratios())
        .with_history(ticker("BHARTIARTL.NS"), bars);
    let (screener, _) = screener(source);
    let selection = nse().select(["Kotak Bank", "Bharti Airtel"]).expect("known");

    // When: The screen renders with charts
    let report = screener
        .render(&selection, &ThresholdSelection::default())
        .await;

    // Then: Both rows are present
    assert_eq!(report.rows.len(), 2);

    // And: Only Bharti Airtel has a chart, titled with the six-month window
    assert_eq!(report.charts.len(), 1);
    assert_eq!(report.charts[0].title, "Bharti Airtel Price (Last 6 Months)");
    assert_eq!(report.charts[0].points.len(), 2);

    // And: Kotak's chart failure is reported against the chart section
    let chart_warnings: Vec<_> = report.warnings_for(WarningSection::Chart).collect();
    assert_eq!(chart_warnings.len(), 1);
    assert_eq!(chart_warnings[0].stock, "Kotak Bank");
}

#[tokio::test]
async fn provider_is_asked_sequentially_fundamentals_first() {
    // Given: A demo source that records every call
    let (screener, source) = screener(FixtureSource::demo());
    let selection = nse().select(["Adani Ports", "ICICI Bank"]).expect("known");

    // When: The screen renders
    screener
        .render(&selection, &ThresholdSelection::default())
        .await;

    // Then: All fundamentals are fetched, in order, before any history
    assert_eq!(
        source.calls().expect("call log"),
        vec![
            FixtureCall::Fundamentals(ticker("ADANIPORTS.NS")),
            FixtureCall::Fundamentals(ticker("ICICIBANK.NS")),
            FixtureCall::PriceHistory(ticker("ADANIPORTS.NS"), SCREEN_PERIOD),
            FixtureCall::PriceHistory(ticker("ICICIBANK.NS"), SCREEN_PERIOD),
        ]
    );
}

// =============================================================================
// Screening: Threshold controls
// =============================================================================

#[tokio::test]
async fn stock_missing_any_ratio_never_appears() {
    // Given: Four stocks, each missing a different ratio
    let source = FixtureSource::new()
        .with_ratios(
            ticker("RELIANCE.NS"),
            FixtureRatios::new(None, Some(2.0), Some(0.01), Some(0.1)),
        )
        .with_ratios(
            ticker("INFY.NS"),
            FixtureRatios::new(Some(20.0), None, Some(0.01), Some(0.1)),
        )
        .with_ratios(
            ticker("TCS.NS"),
            FixtureRatios::new(Some(20.0), Some(2.0), None, Some(0.1)),
        )
        .with_ratios(
            ticker("WIPRO.NS"),
            FixtureRatios::new(Some(20.0), Some(2.0), Some(0.01), None),
        );
    let (screener, _) = screener(source);
    let selection = nse()
        .select(["Reliance", "Infosys", "TCS", "Wipro"])
        .expect("known");
    let wide_open = ThresholdSelection::new(0.0, 100.0, 0.0, 20.0, 0.0, 0.0).expect("valid");

    // When: The screen renders with the widest possible thresholds
    let report = screener.with_charts(false).render(&selection, &wide_open).await;

    // Then: No row is shown and nothing is reported as a failure
    assert!(report.rows.is_empty());
    assert!(report.warnings.is_empty());
}

#[tokio::test]
async fn raising_minimum_roe_filters_out_weaker_stocks() {
    // Given: Two stocks with ROE of 12% and 24%
    let source = FixtureSource::new()
        .with_ratios(
            ticker("SBIN.NS"),
            FixtureRatios::new(Some(10.0), Some(1.5), Some(0.02), Some(0.12)),
        )
        .with_ratios(
            ticker("ICICIBANK.NS"),
            FixtureRatios::new(Some(18.0), Some(3.0), Some(0.008), Some(0.24)),
        );
    let (screener, _) = screener(source);
    let screener = screener.with_charts(false);
    let selection = nse().select(["SBI", "ICICI Bank"]).expect("known");

    // When: The ROE minimum moves from 0 to exactly 24
    let before = screener
        .render(&selection, &ThresholdSelection::default())
        .await;
    let strict = ThresholdSelection::new(0.0, 50.0, 0.0, 10.0, 0.0, 24.0).expect("valid");
    let after = screener.render(&selection, &strict).await;

    // Then: Both pass at first, and only ICICI Bank passes at the boundary
    assert_eq!(before.rows.len(), 2);
    assert_eq!(after.rows.len(), 1);
    assert_eq!(after.rows[0].stock, "ICICI Bank");
}

#[tokio::test]
async fn displayed_values_are_rounded_to_two_decimals() {
    // Given: Provider ratios with long fractional parts
    let source = FixtureSource::new().with_ratios(
        ticker("HDFCBANK.NS"),
        FixtureRatios::new(Some(19.456), Some(2.446), Some(0.011_11), Some(0.167_77)),
    );
    let (screener, _) = screener(source);
    let selection = nse().select(["hdfc bank"]).expect("lookup ignores case");

    // When: The screen renders
    let report = screener
        .with_charts(false)
        .render(&selection, &ThresholdSelection::default())
        .await;

    // Then: Each number shows two decimals
    let row = &report.rows[0];
    assert_eq!(row.stock, "HDFC Bank");
    assert_eq!(row.pe, 19.46);
    assert_eq!(row.pb, 2.45);
    assert_eq!(row.dividend_yield_percent, 1.11);
    assert_eq!(row.roe_percent, 16.78);
}

#[tokio::test]
async fn report_serializes_for_machine_consumers() {
    // Given: A rendered report with one row and one warning
    let source = FixtureSource::new()
        .with_ratios(ticker("TCS.NS"), passing_ratios())
        .with_fundamentals_error(ticker("WIPRO.NS"), SourceError::internal("bad body"));
    let (screener, _) = screener(source);
    let selection = nse().select(["TCS", "Wipro"]).expect("known");
    let report = screener
        .with_charts(false)
        .render(&selection, &ThresholdSelection::default())
        .await;

    // When: It is serialized to JSON
    let json = serde_json::to_value(&report).expect("serializes");

    // Then: Rows, charts and warnings are plain fields
    assert_eq!(json["rows"][0]["stock"], "TCS");
    assert_eq!(json["rows"][0]["pe"], 18.0);
    assert_eq!(json["charts"].as_array().map(Vec::len), Some(0));
    assert_eq!(json["warnings"][0]["section"], "fundamentals");
    assert_eq!(json["warnings"][0]["stock"], "Wipro");
}

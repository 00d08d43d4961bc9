//! Regime Report Example
//!
//! This example compares the regime classifier's output across market
//! scenarios with different noise profiles, and shows how the expected
//! price range widens with volatility.
//!
//! Run with: `cargo run --example regime_report`

use vol_estimator_rs::analysis::analyze;
use vol_estimator_rs::loader::mock::MockSeriesLoader;
use vol_estimator_rs::prelude::*;

use chrono::NaiveDate;

#[tokio::main]
async fn main() -> VolResult<()> {
    println!("=== Regime Report Example ===\n");

    let end = NaiveDate::from_ymd_opt(2024, 6, 28).expect("valid date");
    let request = LoaderRequest::lookback_years("SCEN", end, 2)?;
    let config = EstimatorConfig::default();

    let scenarios = [
        ("calm drift", 0.0003, 0.004),
        ("typical equity", 0.0004, 0.012),
        ("choppy", 0.0000, 0.025),
    ];

    for (name, drift, wobble) in scenarios {
        let loader = MockSeriesLoader::new()
            .with_daily_return(drift)
            .with_wobble(wobble);

        let prices = loader.fetch(&request).await?;
        let report = analyze(&prices, &config)?;

        println!("Scenario: {name}");
        println!("  Regime: {}", report.regime.regime);
        println!(
            "  60-day vol: {:.2}% (median {:.2}%)",
            report.regime.current * 100.0,
            report.regime.median * 100.0
        );
        println!(
            "  1-year band: {:.2} .. {:.2} (price {:.2})",
            report.range.lower, report.range.upper, report.range.current_price
        );
        println!();
    }

    // Error handling at the loader boundary.
    println!("--- Loader Failures ---\n");

    let no_data = MockSeriesLoader::new().with_no_data();
    match no_data.fetch(&request).await {
        Err(VolError::NoData(ticker)) => println!("  no data for {ticker} (expected)"),
        other => println!("  unexpected: {other:?}"),
    }

    let broken = MockSeriesLoader::new().with_failure("provider timeout");
    match broken.fetch(&request).await {
        Err(VolError::DataSource(msg)) => println!("  data source error: {msg} (expected)"),
        other => println!("  unexpected: {other:?}"),
    }

    Ok(())
}

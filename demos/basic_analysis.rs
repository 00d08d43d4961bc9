//! Basic Analysis Example
//!
//! This example runs the full volatility pipeline end to end:
//! - Fetch a synthetic price series through the loader boundary
//! - Compute historical, rolling (20/60/120), and EWMA volatility
//! - Print the regime assessment, expected range, and a latest-values table
//!
//! Run with: `cargo run --example basic_analysis`

use vol_estimator_rs::analysis::analyze;
use vol_estimator_rs::loader::mock::MockSeriesLoader;
use vol_estimator_rs::prelude::*;

use chrono::NaiveDate;

#[tokio::main]
async fn main() -> VolResult<()> {
    println!("=== Volatility Analysis Example ===\n");

    // Fetch three years of synthetic prices through the loader boundary.
    let end = NaiveDate::from_ymd_opt(2024, 6, 28).expect("valid date");
    let request = LoaderRequest::lookback_years("DEMO", end, 3)?;

    let loader = MockSeriesLoader::new()
        .with_start_price(180.0)
        .with_daily_return(0.0004)
        .with_wobble(0.012);

    let prices = loader.fetch(&request).await?;
    println!(
        "Loaded {} observations for {} ({} .. {})\n",
        prices.len(),
        prices.ticker,
        request.start,
        request.end
    );

    // Run the pipeline.
    let config = EstimatorConfig::default();
    let report = analyze(&prices, &config)?;

    // Headline metrics.
    println!("--- Annualized Volatility ---\n");
    println!("  Historical: {:6.2}%", report.result.historical_vol * 100.0);
    for series in report.result.series() {
        println!("  {:>10}: {:6.2}%", series.label, series.latest() * 100.0);
    }

    // Regime.
    println!("\n--- Regime ---\n");
    println!(
        "  {} (current {:.2}%, median {:.2}%)",
        report.regime.regime,
        report.regime.current * 100.0,
        report.regime.median * 100.0
    );

    // Expected range.
    println!("\n--- Expected Range ---\n");
    println!("  Current price: {:.2}", report.range.current_price);
    println!(
        "  Daily expected move: ±{:.2} ({:.2}%)",
        report.range.daily_move,
        report.range.daily_std * 100.0
    );
    println!(
        "  1-year 1-sigma band: {:.2} .. {:.2}",
        report.range.lower, report.range.upper
    );

    // Latest values table.
    println!("\n--- Latest Values ---\n");
    print!("  {:>10}  {:>8}", "date", "price");
    for series in report.result.series() {
        print!("  {:>6}", series.label);
    }
    println!();

    for row in report.result.tail(10) {
        print!("  {:>10}  {:>8.2}", row.date, row.price);
        for vol in &row.vols {
            print!("  {:>5.1}%", vol * 100.0);
        }
        println!();
    }

    Ok(())
}

//! Multi-Timeframe Volatility Estimation Library
//!
//! A Rust library for computing annualized volatility of a traded asset's
//! price series using several estimation methodologies, plus a derived
//! volatility-regime classification and an expected price-range projection.
//!
//! # Overview
//!
//! Volatility — the standard deviation of periodic returns, scaled to a
//! yearly basis — is the fundamental risk measure in quantitative finance.
//! Different estimators trade responsiveness against stability:
//!
//! - **Historical**: one full-sample number, the overall baseline.
//! - **Rolling windows**: fixed-length windows (20/60/120 trading days by
//!   default) that track how risk evolves over time.
//! - **EWMA**: exponentially-weighted estimate that reacts quickly to
//!   shocks while discounting stale observations.
//!
//! On top of the estimators, the library classifies the current volatility
//! **regime** (high / normal / low relative to the series' own median) and
//! projects a one-standard-deviation expected price **range**.
//!
//! # Pipeline
//!
//! Data flows strictly forward through a single synchronous pipeline:
//!
//! ```text
//! PriceSeries -> ReturnSeries -> estimators -> { regime, range } -> AnalysisReport
//! ```
//!
//! The pipeline is a pure function of the input series and the
//! [`EstimatorConfig`](estimator::EstimatorConfig); it performs no I/O.
//! Fetching prices is a collaborator boundary expressed as the async
//! [`SeriesLoader`](loader::SeriesLoader) trait, and presentation consumes
//! the plain numbers in [`AnalysisReport`](analysis::AnalysisReport).
//!
//! # Modules
//!
//! - [`series`]: Validated price series and log-return computation
//! - [`estimator`]: Historical, rolling-window, and EWMA estimators
//! - [`analysis`]: The analysis pipeline, regime classifier, and range projector
//! - [`loader`]: Async price-series loading boundary and a mock loader
//! - [`types`]: Common types and error definitions
//!
//! # Example
//!
//! ```rust
//! use vol_estimator_rs::prelude::*;
//! use vol_estimator_rs::analysis::analyze;
//! use vol_estimator_rs::loader::mock::MockSeriesLoader;
//!
//! # fn main() -> VolResult<()> {
//! let prices = MockSeriesLoader::synthetic_series("DEMO", 300, 100.0, 0.001)?;
//! let config = EstimatorConfig::default();
//!
//! let report = analyze(&prices, &config)?;
//! println!("historical vol: {:.4}", report.result.historical_vol);
//! println!("regime: {}", report.regime.regime);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod analysis;
pub mod estimator;
pub mod loader;
pub mod prelude;
pub mod series;
pub mod types;

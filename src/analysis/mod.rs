//! The analysis pipeline.
//!
//! [`analyze`] runs the full sequence — log returns, the estimator bank,
//! regime classification, and range projection — as a single pure,
//! deterministic function of the input [`PriceSeries`] and the
//! [`EstimatorConfig`]. It performs no I/O and holds no state between
//! calls; the caller owns the returned [`AnalysisReport`] and replaces it
//! on the next run.

use tracing::debug;

use crate::estimator::ewma::EwmaVolatility;
use crate::estimator::historical::historical_volatility;
use crate::estimator::rolling::RollingVolatility;
use crate::estimator::EstimatorConfig;
use crate::series::price::PriceSeries;
use crate::series::returns::ReturnSeries;
use crate::types::error::VolResult;

#[cfg(feature = "serde")]
use pretty_simple_display::{DebugPretty, DisplaySimple};

/// Regime classification.
pub mod regime;

/// Expected price-range projection.
pub mod range;

/// Immutable analysis result aggregate.
pub mod result;

pub use range::RangeProjection;
pub use regime::{classify_regime, RegimeAssessment, VolatilityRegime};
pub use result::{AnalysisResult, CleanSeries, ResultRow};

/// Everything one analysis run produces: the clean-aligned result plus the
/// derived regime assessment and range projection.
#[derive(Clone, PartialEq)]
#[cfg_attr(not(feature = "serde"), derive(Debug))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize, DebugPretty, DisplaySimple)
)]
pub struct AnalysisReport {
    /// Clean-aligned series and the historical volatility scalar.
    pub result: AnalysisResult,

    /// Current volatility regime, derived from the full (untruncated)
    /// regime-window series.
    pub regime: RegimeAssessment,

    /// One-standard-deviation expected price band and daily move.
    pub range: RangeProjection,
}

/// Runs the full volatility analysis pipeline over a price series.
///
/// Steps, in order:
///
/// 1. Log returns from the price series.
/// 2. Historical volatility scalar over the full return series.
/// 3. One rolling series per configured window, plus the EWMA series.
/// 4. Regime classification from the full regime-window series (median over
///    all its defined values, not just the clean range).
/// 5. Range projection from the latest price, the latest regime-window
///    volatility, and the full-sample daily standard deviation.
/// 6. Clean alignment of every series into an [`AnalysisResult`].
///
/// # Errors
///
/// - `VolError::InvalidInput` if the series is too short to produce returns.
/// - `VolError::InsufficientData` if the return series is shorter than the
///   longest configured window (no clean range, no regime-window value).
///
/// The run aborts on the first failure; estimators remain independently
/// callable for callers that prefer to degrade gracefully by omitting only
/// the affected series.
///
/// # Example
///
/// ```rust
/// use vol_estimator_rs::analysis::analyze;
/// use vol_estimator_rs::estimator::EstimatorConfig;
/// use vol_estimator_rs::loader::mock::MockSeriesLoader;
///
/// let prices = MockSeriesLoader::synthetic_series("DEMO", 300, 100.0, 0.001).unwrap();
/// let report = analyze(&prices, &EstimatorConfig::default()).unwrap();
///
/// assert_eq!(report.result.series().len(), 4); // 20d, 60d, 120d, ewma
/// assert!(report.range.upper >= report.range.lower);
/// ```
pub fn analyze(prices: &PriceSeries, config: &EstimatorConfig) -> VolResult<AnalysisReport> {
    let returns = ReturnSeries::from_prices(prices)?;

    debug!(
        ticker = %prices.ticker,
        observations = returns.len(),
        windows = ?config.windows,
        "starting volatility analysis"
    );

    let historical_vol = historical_volatility(&returns, config)?;

    let mut series = Vec::with_capacity(config.windows.len() + 1);
    let mut regime_series = None;
    for &window in &config.windows {
        let computed = RollingVolatility::new(window)?.compute(&returns, config);
        if window == config.regime_window {
            regime_series = Some(computed.clone());
        }
        series.push(computed);
    }
    series.push(EwmaVolatility::new(config.ewma_alpha)?.compute(&returns, config));

    // regime_window is a member of windows whenever the config came
    // through EstimatorConfig::new; reject hand-rolled configs here.
    let regime_series = regime_series.ok_or_else(|| {
        crate::types::error::VolError::InvalidConfiguration(format!(
            "regime_window {} is not one of the configured windows",
            config.regime_window
        ))
    })?;
    let regime = classify_regime(&regime_series, config)?;

    let range = RangeProjection::new(
        prices.latest().price,
        regime.current,
        returns.sample_std()?,
    );

    let result = AnalysisResult::build(prices, &returns, historical_vol, series)?;

    debug!(
        ticker = %result.ticker,
        clean_rows = result.len(),
        regime = %regime.regime,
        "analysis complete"
    );

    Ok(AnalysisReport {
        result,
        regime,
        range,
    })
}

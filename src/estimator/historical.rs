//! Full-sample historical volatility.

use tracing::debug;

use crate::estimator::EstimatorConfig;
use crate::series::returns::ReturnSeries;
use crate::types::error::VolResult;
use crate::types::primitives::Volatility;

/// Annualized historical volatility over the entire return series.
///
/// Sample standard deviation (n − 1 divisor) of all returns, scaled by
/// √(trading days per year). This is the single-number risk baseline the
/// rolling and EWMA series are compared against.
///
/// # Errors
///
/// Returns `VolError::InsufficientData` if fewer than 2 return observations
/// exist.
///
/// # Example
///
/// ```rust
/// use vol_estimator_rs::estimator::{historical::historical_volatility, EstimatorConfig};
/// use vol_estimator_rs::series::price::{PricePoint, PriceSeries};
/// use vol_estimator_rs::series::returns::ReturnSeries;
/// use chrono::NaiveDate;
///
/// let points = (0..10)
///     .map(|i| {
///         let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Days::new(i);
///         PricePoint::new(date, 100.0 + i as f64)
///     })
///     .collect();
/// let prices = PriceSeries::new("DEMO", points).unwrap();
/// let returns = ReturnSeries::from_prices(&prices).unwrap();
///
/// let vol = historical_volatility(&returns, &EstimatorConfig::default()).unwrap();
/// assert!(vol > 0.0);
/// ```
pub fn historical_volatility(
    returns: &ReturnSeries,
    config: &EstimatorConfig,
) -> VolResult<Volatility> {
    let vol = returns.sample_std()? * config.annualization_factor();

    debug!(
        observations = returns.len(),
        vol, "computed historical volatility"
    );

    Ok(vol)
}

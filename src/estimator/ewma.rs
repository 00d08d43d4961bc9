//! Exponentially-weighted moving average volatility.

use tracing::debug;

use crate::estimator::{EstimatorConfig, VolatilitySeries};
use crate::series::returns::ReturnSeries;
use crate::types::error::{VolError, VolResult};
use crate::types::primitives::DecayFactor;

/// EWMA annualized volatility estimator.
///
/// Maintains a running exponentially-weighted variance estimate
///
/// ```text
/// ewvar[0] = r[0]^2
/// ewvar[i] = alpha * r[i]^2 + (1 - alpha) * ewvar[i - 1]
/// ```
///
/// with output `sqrt(ewvar[i]) * sqrt(trading days per year)` for every i.
/// There is no warm-up gap: the series is defined from the first
/// observation, though early values are statistically unstable — an
/// accepted, documented property of the estimator, not a defect.
///
/// The mean return is not subtracted before squaring. Assuming zero-mean
/// returns is the standard convention for short-horizon EWMA volatility
/// (daily means are negligible next to daily standard deviations) and is
/// kept deliberately rather than "corrected".
///
/// # Example
///
/// ```rust
/// use vol_estimator_rs::estimator::{ewma::EwmaVolatility, EstimatorConfig};
/// use vol_estimator_rs::series::price::{PricePoint, PriceSeries};
/// use vol_estimator_rs::series::returns::ReturnSeries;
/// use chrono::NaiveDate;
///
/// let points = (0..10)
///     .map(|i| {
///         let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Days::new(i);
///         PricePoint::new(date, 100.0 + (i % 2) as f64)
///     })
///     .collect();
/// let prices = PriceSeries::new("DEMO", points).unwrap();
/// let returns = ReturnSeries::from_prices(&prices).unwrap();
///
/// let estimator = EwmaVolatility::new(0.06).unwrap();
/// let series = estimator.compute(&returns, &EstimatorConfig::default());
/// assert_eq!(series.len(), returns.len());
/// assert_eq!(series.warmup(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EwmaVolatility {
    alpha: DecayFactor,
}

impl EwmaVolatility {
    /// Creates an EWMA estimator with the given decay factor.
    ///
    /// # Errors
    ///
    /// Returns `VolError::InvalidConfiguration` if `alpha` is outside
    /// (0, 1].
    pub fn new(alpha: DecayFactor) -> VolResult<Self> {
        if !(alpha > 0.0 && alpha <= 1.0) {
            return Err(VolError::InvalidConfiguration(format!(
                "ewma alpha must be in (0, 1], got {alpha}"
            )));
        }
        Ok(Self { alpha })
    }

    /// Returns the decay factor.
    #[must_use]
    pub fn alpha(&self) -> DecayFactor {
        self.alpha
    }

    /// Computes the EWMA volatility series over a return series.
    ///
    /// Output length equals input length; every entry is defined.
    #[must_use]
    pub fn compute(&self, returns: &ReturnSeries, config: &EstimatorConfig) -> VolatilitySeries {
        let values = returns.values();
        let factor = config.annualization_factor();

        let mut out = Vec::with_capacity(values.len());
        let mut ewvar: Option<f64> = None;

        for r in values {
            let squared = r.powi(2);
            let next = match ewvar {
                None => squared,
                Some(prev) => self.alpha * squared + (1.0 - self.alpha) * prev,
            };
            ewvar = Some(next);
            out.push(Some(next.sqrt() * factor));
        }

        debug!(
            alpha = self.alpha,
            observations = values.len(),
            "computed EWMA volatility series"
        );

        VolatilitySeries::new("ewma", out)
    }
}

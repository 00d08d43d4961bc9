//! Volatility regime classification.

use crate::estimator::{EstimatorConfig, VolatilitySeries};
use crate::types::error::{VolError, VolResult};
use crate::types::primitives::Volatility;

#[cfg(feature = "serde")]
use pretty_simple_display::{DebugPretty, DisplaySimple};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Coarse classification of current volatility relative to its own recent
/// historical distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VolatilityRegime {
    /// Current volatility is well above its historical median. Elevated
    /// risk environment.
    High,
    /// Current volatility is in line with its historical median.
    Normal,
    /// Current volatility is well below its historical median. Calm market
    /// conditions.
    Low,
}

impl VolatilityRegime {
    /// Returns true if the regime is `High`.
    #[must_use]
    pub fn is_high(&self) -> bool {
        matches!(self, Self::High)
    }

    /// Returns true if the regime is `Normal`.
    #[must_use]
    pub fn is_normal(&self) -> bool {
        matches!(self, Self::Normal)
    }

    /// Returns true if the regime is `Low`.
    #[must_use]
    pub fn is_low(&self) -> bool {
        matches!(self, Self::Low)
    }
}

impl std::fmt::Display for VolatilityRegime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "high volatility"),
            Self::Normal => write!(f, "normal volatility"),
            Self::Low => write!(f, "low volatility"),
        }
    }
}

/// The regime label together with the numbers it was derived from.
#[derive(Clone, Copy, PartialEq)]
#[cfg_attr(not(feature = "serde"), derive(Debug))]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize, DebugPretty, DisplaySimple)
)]
pub struct RegimeAssessment {
    /// The classified regime.
    pub regime: VolatilityRegime,

    /// Latest value of the regime-window volatility series.
    pub current: Volatility,

    /// Median over all defined values of that series (current included).
    pub median: Volatility,
}

/// Classifies the current volatility regime from a rolling-volatility
/// series.
///
/// The latest value is compared against the median of all defined values of
/// the same series (itself included):
///
/// - `High` if current > high_threshold × median
/// - `Low` if current < low_threshold × median
/// - `Normal` otherwise
///
/// Both boundaries are exclusive: a value at exactly the threshold is
/// `Normal`. When the median is exactly 0 (a degenerate constant series)
/// and the current value is also 0, both comparisons are false and the
/// classification falls through to `Normal`.
///
/// # Errors
///
/// Returns `VolError::InsufficientData` if the series has no defined
/// values.
pub fn classify_regime(
    series: &VolatilitySeries,
    config: &EstimatorConfig,
) -> VolResult<RegimeAssessment> {
    let current = series.latest().ok_or(VolError::InsufficientData {
        required: 1,
        actual: 0,
    })?;
    let median = series.median()?;

    let regime = if current > config.high_threshold * median {
        VolatilityRegime::High
    } else if current < config.low_threshold * median {
        VolatilityRegime::Low
    } else {
        VolatilityRegime::Normal
    };

    Ok(RegimeAssessment {
        regime,
        current,
        median,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series_with(values: Vec<f64>) -> VolatilitySeries {
        VolatilitySeries::new("60d", values.into_iter().map(Some).collect())
    }

    /// 11 values with median exactly 100, ending at `current`.
    fn series_with_median_100(current: f64) -> VolatilitySeries {
        let mut values = vec![90.0, 92.0, 95.0, 98.0, 100.0, 100.0, 102.0, 105.0, 108.0, 110.0];
        values.push(current);
        // current is the 11th value; with values spread around 100 the
        // median stays at 100 for the currents used in these tests.
        series_with(values)
    }

    #[test]
    fn test_boundary_exactly_high_is_normal() {
        let series = series_with_median_100(130.0);
        assert_eq!(series.median().unwrap(), 100.0);

        let assessment = classify_regime(&series, &EstimatorConfig::default()).unwrap();
        assert_eq!(assessment.regime, VolatilityRegime::Normal);
        assert_eq!(assessment.current, 130.0);
    }

    #[test]
    fn test_just_above_high_boundary() {
        let series = series_with_median_100(130.0001);
        let assessment = classify_regime(&series, &EstimatorConfig::default()).unwrap();
        assert_eq!(assessment.regime, VolatilityRegime::High);
        assert!(assessment.regime.is_high());
    }

    #[test]
    fn test_boundary_exactly_low_is_normal() {
        let series = series_with_median_100(70.0);
        assert_eq!(series.median().unwrap(), 100.0);

        let assessment = classify_regime(&series, &EstimatorConfig::default()).unwrap();
        assert_eq!(assessment.regime, VolatilityRegime::Normal);
    }

    #[test]
    fn test_just_below_low_boundary() {
        let series = series_with_median_100(69.9999);
        let assessment = classify_regime(&series, &EstimatorConfig::default()).unwrap();
        assert_eq!(assessment.regime, VolatilityRegime::Low);
        assert!(assessment.regime.is_low());
    }

    #[test]
    fn test_median_in_between_is_normal() {
        let series = series_with_median_100(100.0);
        let assessment = classify_regime(&series, &EstimatorConfig::default()).unwrap();
        assert_eq!(assessment.regime, VolatilityRegime::Normal);
        assert!(assessment.regime.is_normal());
    }

    #[test]
    fn test_degenerate_zero_median_zero_current_is_normal() {
        // Constant synthetic series: every vol is 0, median 0, current 0.
        // Both threshold comparisons are strict and false, so this falls
        // through to Normal.
        let series = series_with(vec![0.0; 10]);
        let assessment = classify_regime(&series, &EstimatorConfig::default()).unwrap();
        assert_eq!(assessment.regime, VolatilityRegime::Normal);
        assert_eq!(assessment.median, 0.0);
    }

    #[test]
    fn test_no_defined_values_is_insufficient_data() {
        let series = VolatilitySeries::new("60d", vec![None, None, None]);
        let err = classify_regime(&series, &EstimatorConfig::default()).unwrap_err();
        assert!(matches!(err, VolError::InsufficientData { .. }));
    }

    #[test]
    fn test_median_includes_current_value() {
        // Three values; the current (latest) one shifts the median.
        let series = series_with(vec![10.0, 20.0, 30.0]);
        let assessment = classify_regime(&series, &EstimatorConfig::default()).unwrap();
        assert_eq!(assessment.median, 20.0);
        assert_eq!(assessment.current, 30.0);
        // 30 > 1.3 * 20 = 26 -> High.
        assert_eq!(assessment.regime, VolatilityRegime::High);
    }

    #[test]
    fn test_regime_display() {
        assert_eq!(VolatilityRegime::High.to_string(), "high volatility");
        assert_eq!(VolatilityRegime::Normal.to_string(), "normal volatility");
        assert_eq!(VolatilityRegime::Low.to_string(), "low volatility");
    }
}

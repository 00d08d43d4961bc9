//! Estimator configuration parameters.

use crate::types::error::{VolError, VolResult};
use crate::types::primitives::DecayFactor;

#[cfg(feature = "serde")]
use pretty_simple_display::{DebugPretty, DisplaySimple};

/// Rolling windows used when none are specified: 20, 60, and 120 trading
/// days (roughly one month, one quarter, and half a year).
pub const DEFAULT_WINDOWS: [usize; 3] = [20, 60, 120];

/// Default rolling window feeding the regime classifier and range projector.
pub const DEFAULT_REGIME_WINDOW: usize = 60;

/// Default EWMA decay factor.
pub const DEFAULT_EWMA_ALPHA: DecayFactor = 0.06;

/// Trading days per year used for annualization by default.
pub const DEFAULT_TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Default high-regime threshold multiple over the series median.
pub const DEFAULT_HIGH_THRESHOLD: f64 = 1.3;

/// Default low-regime threshold multiple over the series median.
pub const DEFAULT_LOW_THRESHOLD: f64 = 0.7;

/// Configuration for the volatility estimator bank and the derived
/// regime/range computations.
///
/// # Example
///
/// ```rust
/// use vol_estimator_rs::estimator::EstimatorConfig;
///
/// let config = EstimatorConfig::new(
///     vec![20, 60, 120], // rolling windows (trading days)
///     60,                // regime window
///     0.06,              // EWMA alpha
///     252.0,             // trading days per year
///     1.3,               // high-regime threshold
///     0.7,               // low-regime threshold
/// )
/// .unwrap();
///
/// assert_eq!(config.annualization_factor(), 252.0f64.sqrt());
/// ```
#[derive(Clone, PartialEq)]
#[cfg_attr(not(feature = "serde"), derive(Debug))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize, DebugPretty, DisplaySimple)
)]
pub struct EstimatorConfig {
    /// Rolling window lengths in trading days. Each must be >= 2.
    pub windows: Vec<usize>,

    /// The rolling window whose series feeds the regime classifier and the
    /// range projector. Must be a member of `windows`.
    pub regime_window: usize,

    /// EWMA decay factor (alpha). Must be in (0, 1].
    pub ewma_alpha: DecayFactor,

    /// Trading days per year used for annualization. Must be positive.
    ///
    /// 252 is the equity-market convention; override for other asset
    /// classes (e.g. 365 for crypto).
    pub trading_days_per_year: f64,

    /// Regime is `High` when the current value exceeds this multiple of the
    /// series median. Must be > 1.
    pub high_threshold: f64,

    /// Regime is `Low` when the current value is below this multiple of the
    /// series median. Must be in (0, 1).
    pub low_threshold: f64,
}

impl EstimatorConfig {
    /// Creates a new estimator configuration with validation.
    ///
    /// # Arguments
    ///
    /// * `windows` - Rolling window lengths, each >= 2, non-empty
    /// * `regime_window` - Window feeding regime/range, must be in `windows`
    /// * `ewma_alpha` - EWMA decay factor, in (0, 1]
    /// * `trading_days_per_year` - Annualization base, must be positive
    /// * `high_threshold` - High-regime multiple, must be > 1
    /// * `low_threshold` - Low-regime multiple, in (0, 1)
    ///
    /// # Errors
    ///
    /// Returns `VolError::InvalidConfiguration` if any parameter is invalid.
    pub fn new(
        windows: Vec<usize>,
        regime_window: usize,
        ewma_alpha: DecayFactor,
        trading_days_per_year: f64,
        high_threshold: f64,
        low_threshold: f64,
    ) -> VolResult<Self> {
        if windows.is_empty() {
            return Err(VolError::InvalidConfiguration(
                "windows must not be empty".to_string(),
            ));
        }

        if let Some(w) = windows.iter().find(|w| **w < 2) {
            return Err(VolError::InvalidConfiguration(format!(
                "rolling window must be >= 2, got {w}"
            )));
        }

        if !windows.contains(&regime_window) {
            return Err(VolError::InvalidConfiguration(format!(
                "regime_window {regime_window} is not one of the configured windows"
            )));
        }

        if !(ewma_alpha > 0.0 && ewma_alpha <= 1.0) {
            return Err(VolError::InvalidConfiguration(format!(
                "ewma_alpha must be in (0, 1], got {ewma_alpha}"
            )));
        }

        if !(trading_days_per_year > 0.0) {
            return Err(VolError::InvalidConfiguration(format!(
                "trading_days_per_year must be positive, got {trading_days_per_year}"
            )));
        }

        if !(high_threshold > 1.0) {
            return Err(VolError::InvalidConfiguration(format!(
                "high_threshold must be > 1, got {high_threshold}"
            )));
        }

        if !(low_threshold > 0.0 && low_threshold < 1.0) {
            return Err(VolError::InvalidConfiguration(format!(
                "low_threshold must be in (0, 1), got {low_threshold}"
            )));
        }

        Ok(Self {
            windows,
            regime_window,
            ewma_alpha,
            trading_days_per_year,
            high_threshold,
            low_threshold,
        })
    }

    /// Annualization factor: √(trading days per year).
    #[must_use]
    pub fn annualization_factor(&self) -> f64 {
        self.trading_days_per_year.sqrt()
    }

    /// The longest configured rolling window, which dominates the clean
    /// (warm-up-satisfied) range of an analysis.
    #[must_use]
    pub fn max_window(&self) -> usize {
        // Non-empty by construction.
        self.windows.iter().copied().max().unwrap_or(0)
    }
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            windows: DEFAULT_WINDOWS.to_vec(),
            regime_window: DEFAULT_REGIME_WINDOW,
            ewma_alpha: DEFAULT_EWMA_ALPHA,
            trading_days_per_year: DEFAULT_TRADING_DAYS_PER_YEAR,
            high_threshold: DEFAULT_HIGH_THRESHOLD,
            low_threshold: DEFAULT_LOW_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EstimatorConfig::default();
        assert_eq!(config.windows, vec![20, 60, 120]);
        assert_eq!(config.regime_window, 60);
        assert_eq!(config.ewma_alpha, 0.06);
        assert_eq!(config.trading_days_per_year, 252.0);
        assert_eq!(config.max_window(), 120);
    }

    #[test]
    fn test_valid_custom_config() {
        let config = EstimatorConfig::new(vec![5, 10], 10, 0.1, 365.0, 1.5, 0.5);
        assert!(config.is_ok());
        assert_eq!(config.unwrap().annualization_factor(), 365.0f64.sqrt());
    }

    #[test]
    fn test_empty_windows_rejected() {
        let config = EstimatorConfig::new(vec![], 60, 0.06, 252.0, 1.3, 0.7);
        assert!(matches!(
            config.unwrap_err(),
            VolError::InvalidConfiguration(_)
        ));
    }

    #[test]
    fn test_window_of_one_rejected() {
        let config = EstimatorConfig::new(vec![1, 20], 20, 0.06, 252.0, 1.3, 0.7);
        assert!(config.is_err());
        if let Err(VolError::InvalidConfiguration(msg)) = config {
            assert!(msg.contains("window must be >= 2"));
        }
    }

    #[test]
    fn test_regime_window_must_be_configured() {
        let config = EstimatorConfig::new(vec![20, 120], 60, 0.06, 252.0, 1.3, 0.7);
        assert!(config.is_err());
        if let Err(VolError::InvalidConfiguration(msg)) = config {
            assert!(msg.contains("regime_window"));
        }
    }

    #[test]
    fn test_alpha_zero_rejected() {
        let config = EstimatorConfig::new(vec![20], 20, 0.0, 252.0, 1.3, 0.7);
        assert!(config.is_err());
    }

    #[test]
    fn test_alpha_above_one_rejected() {
        let config = EstimatorConfig::new(vec![20], 20, 1.1, 252.0, 1.3, 0.7);
        assert!(config.is_err());
    }

    #[test]
    fn test_alpha_of_one_accepted() {
        let config = EstimatorConfig::new(vec![20], 20, 1.0, 252.0, 1.3, 0.7);
        assert!(config.is_ok());
    }

    #[test]
    fn test_negative_trading_days_rejected() {
        let config = EstimatorConfig::new(vec![20], 20, 0.06, -252.0, 1.3, 0.7);
        assert!(config.is_err());
    }

    #[test]
    fn test_thresholds_out_of_order_rejected() {
        let config = EstimatorConfig::new(vec![20], 20, 0.06, 252.0, 0.9, 0.7);
        assert!(config.is_err());

        let config = EstimatorConfig::new(vec![20], 20, 0.06, 252.0, 1.3, 1.2);
        assert!(config.is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_display() {
        let config = EstimatorConfig::default();
        let display_str = format!("{}", config);
        assert!(display_str.contains("regime_window"));
        assert!(display_str.contains("60"));
    }
}

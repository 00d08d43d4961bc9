//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types, traits, and
//! functions from the volatility estimation library. Users can import
//! everything they need with:
//!
//! ```rust
//! use vol_estimator_rs::prelude::*;
//! ```

// Re-export types module
pub use crate::types::error::{VolError, VolResult};
pub use crate::types::primitives::{Date, DecayFactor, LogReturn, Price, Volatility};

// Re-export series types
pub use crate::series::price::{PricePoint, PriceSeries};
pub use crate::series::returns::ReturnSeries;

// Re-export estimator types
pub use crate::estimator::ewma::EwmaVolatility;
pub use crate::estimator::historical::historical_volatility;
pub use crate::estimator::rolling::RollingVolatility;
pub use crate::estimator::{EstimatorConfig, VolatilitySeries};

// Re-export analysis types
pub use crate::analysis::{
    analyze, AnalysisReport, AnalysisResult, CleanSeries, RangeProjection, RegimeAssessment,
    ResultRow, VolatilityRegime,
};

// Re-export loader boundary
pub use crate::loader::{LoaderRequest, SeriesLoader};

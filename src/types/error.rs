//! Error types for the volatility estimation library.
//!
//! All fallible operations return [`VolResult`], and every failure mode is a
//! variant of [`VolError`]. Failures are data-quality or configuration
//! issues, not transient faults: nothing in this library retries, and errors
//! are reported once at the boundary where they are detected.

use thiserror::Error;

/// Errors produced by the volatility estimation pipeline and its
/// collaborator boundaries.
#[derive(Debug, Error)]
pub enum VolError {
    /// The loader returned an empty series for the requested ticker/span.
    ///
    /// Terminal: there is nothing to analyze for this input.
    #[error("no data available for {0}")]
    NoData(String),

    /// Malformed price data: non-positive price, unordered or duplicate
    /// timestamps, or a series too short to produce any return.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Too few observations for a requested estimator or classifier.
    #[error("insufficient data: need at least {required} observations, got {actual}")]
    InsufficientData {
        /// Minimum number of observations the operation needs.
        required: usize,
        /// Number of observations actually available.
        actual: usize,
    },

    /// A configuration parameter failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The loader failed to retrieve data (transport or provider error).
    #[error("data source error: {0}")]
    DataSource(String),
}

/// Convenience result alias used throughout the library.
pub type VolResult<T> = Result<T, VolError>;

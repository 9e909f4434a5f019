//! Error types for Aerogrid

use thiserror::Error;

/// Main error type for Aerogrid operations.
///
/// Every variant is caller-correctable (adjust the input or relax the
/// configuration); none represents an internal or fatal condition.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A latitude/longitude pair outside the valid WGS84 ranges.
    #[error(
        "Invalid coordinate: latitude {latitude}, longitude {longitude} \
         (latitude must be in [-90, 90], longitude in [-180, 180])"
    )]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    /// Fewer usable samples than the estimator requires.
    #[error("Insufficient samples: {actual} available, {required} required")]
    InsufficientSamples { actual: usize, required: usize },

    /// A construction-time parameter outside its valid range.
    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Result type alias for Aerogrid operations
pub type Result<T> = std::result::Result<T, Error>;

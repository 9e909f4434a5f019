//! # Aerogrid Interpolation
//!
//! Spatial estimation of air-quality values from sparse sensor readings:
//!
//! - **idw**: Inverse Distance Weighting over great-circle distances
//! - **nearest**: closest-sensor baseline
//! - **service**: single-point and grid queries over a hot-swappable
//!   estimation method
//!
//! All estimation is synchronous and side-effect-free per call; batch
//! queries parallelize across targets when the `parallel` feature is on.

mod maybe_rayon;

pub mod idw;
pub mod nearest;
pub mod service;

pub use idw::InverseDistanceEstimator;
pub use nearest::NearestNeighborEstimator;
pub use service::InterpolationService;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::idw::InverseDistanceEstimator;
    pub use crate::nearest::NearestNeighborEstimator;
    pub use crate::service::InterpolationService;
    pub use aerogrid_core::prelude::*;
}

/// Distance at which proximity confidence drops to 50%, in kilometers.
pub const CONFIDENCE_HALF_DISTANCE_KM: f64 = 5.0;

/// Confidence floor: far-away evidence reads as "low but present",
/// never as no information at all.
pub const CONFIDENCE_FLOOR: f64 = 0.1;

/// Map the distance to the nearest contributing sample to a confidence
/// score in `[CONFIDENCE_FLOOR, 1.0]`.
///
/// `1 / (1 + (d / d_half)²)`: 1.0 at the sample itself, 0.5 at
/// [`CONFIDENCE_HALF_DISTANCE_KM`], decaying quadratically and clamped to
/// the floor beyond ~3 half-distances.
pub fn proximity_confidence(nearest_km: f64) -> f64 {
    let ratio = nearest_km / CONFIDENCE_HALF_DISTANCE_KM;
    (1.0 / (1.0 + ratio * ratio)).clamp(CONFIDENCE_FLOOR, 1.0)
}

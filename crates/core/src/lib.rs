//! # Aerogrid Core
//!
//! Core types, errors and the estimator trait for the Aerogrid spatial
//! interpolation engine.
//!
//! This crate provides:
//! - [`GeoPoint`]: validated WGS84 location, plus Haversine distances
//! - [`Sample`]: one sensor's geolocated air-quality measurement
//! - [`EstimatorConfig`]: immutable parameters governing an estimator
//! - [`EstimationOutcome`]: the per-call interpolation result
//! - [`Estimator`]: the capability trait concrete methods implement

pub mod config;
pub mod error;
pub mod geo;
pub mod outcome;
pub mod sample;

pub use config::EstimatorConfig;
pub use error::{Error, Result};
pub use geo::GeoPoint;
pub use outcome::EstimationOutcome;
pub use sample::Sample;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::EstimatorConfig;
    pub use crate::error::{Error, Result};
    pub use crate::geo::GeoPoint;
    pub use crate::outcome::EstimationOutcome;
    pub use crate::sample::Sample;
    pub use crate::Estimator;
}

/// Capability trait for spatial estimation methods.
///
/// Implementations are interchangeable at runtime: the interpolation
/// service holds exactly one active estimator and can swap it without
/// affecting call sites. The one required operation estimates a value at
/// `target` from borrowed `samples` under an explicit configuration;
/// future methods that also report a variance can implement this same
/// trait without changing the service contract.
pub trait Estimator: Send + Sync {
    /// Short identifier reported in [`EstimationOutcome::method_name`].
    fn name(&self) -> &'static str;

    /// The configuration this instance was constructed with.
    fn config(&self) -> &EstimatorConfig;

    /// Estimate the value at `target` from `samples` under `config`.
    ///
    /// # Errors
    /// - [`Error::InsufficientSamples`] when no samples are given, or
    ///   fewer than `config.min_samples()` remain after distance
    ///   filtering
    fn interpolate(
        &self,
        samples: &[Sample],
        target: GeoPoint,
        config: &EstimatorConfig,
    ) -> Result<EstimationOutcome>;

    /// Estimate with the instance's own configuration.
    fn estimate(&self, samples: &[Sample], target: GeoPoint) -> Result<EstimationOutcome> {
        self.interpolate(samples, target, self.config())
    }
}

//! Inverse Distance Weighting (IDW) estimation
//!
//! Estimates the air-quality value at a target location as a weighted
//! average of nearby sensor readings, where weights are inversely
//! proportional to great-circle distance raised to a power parameter.
//!
//! Reference:
//! Shepard, D. (1968). A two-dimensional interpolation function for
//! irregularly-spaced data. ACM National Conference.

use aerogrid_core::geo::{self, ZERO_DISTANCE_EPSILON_KM};
use aerogrid_core::{
    Error, EstimationOutcome, Estimator, EstimatorConfig, GeoPoint, Result, Sample,
};
use tracing::trace;

use crate::proximity_confidence;

/// IDW implementation of the [`Estimator`] capability.
///
/// The estimate is a convex combination of the retained sample values, so
/// it always falls within `[min(values), max(values)]`. A sensor within
/// [`ZERO_DISTANCE_EPSILON_KM`] of the target is authoritative: its value
/// is reported directly with full confidence.
#[derive(Debug, Clone, Default)]
pub struct InverseDistanceEstimator {
    config: EstimatorConfig,
}

impl InverseDistanceEstimator {
    /// Create an estimator owning `config`.
    ///
    /// The configuration is immutable for the life of the instance;
    /// reconfiguring means constructing a new estimator.
    pub fn new(config: EstimatorConfig) -> Self {
        Self { config }
    }
}

impl Estimator for InverseDistanceEstimator {
    fn name(&self) -> &'static str {
        "idw"
    }

    fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    fn interpolate(
        &self,
        samples: &[Sample],
        target: GeoPoint,
        config: &EstimatorConfig,
    ) -> Result<EstimationOutcome> {
        if samples.is_empty() {
            return Err(Error::InsufficientSamples {
                actual: 0,
                required: config.min_samples(),
            });
        }

        // Distance to every sample, dropping those outside the search
        // radius when one is configured.
        let mut candidates: Vec<(f64, f64)> = samples
            .iter()
            .map(|s| (geo::distance_km(target, s.location), s.value()))
            .filter(|&(d, _)| config.max_distance_km().is_none_or(|max| d <= max))
            .collect();

        if candidates.len() < config.min_samples() {
            return Err(Error::InsufficientSamples {
                actual: candidates.len(),
                required: config.min_samples(),
            });
        }

        // Keep only the closest max_samples. The sort is stable, so ties
        // in distance resolve by input order.
        if let Some(max) = config.max_samples() {
            if candidates.len() > max {
                candidates.sort_by(|a, b| a.0.total_cmp(&b.0));
                candidates.truncate(max);
            }
        }

        // A sensor at the target location is authoritative; reporting its
        // value directly also keeps the weights free of a vanishing
        // denominator.
        if let Some(&(nearest, value)) = candidates
            .iter()
            .find(|&&(d, _)| d < ZERO_DISTANCE_EPSILON_KM)
        {
            return Ok(EstimationOutcome {
                estimated_value: value,
                confidence: 1.0,
                samples_used: 1,
                nearest_sample_distance_km: nearest,
                method_name: self.name().to_string(),
            });
        }

        let mut weight_sum = 0.0;
        let mut weighted_value_sum = 0.0;
        let mut nearest = f64::MAX;

        for &(d, value) in &candidates {
            let w = 1.0 / d.powf(config.power());
            weight_sum += w;
            weighted_value_sum += w * value;
            nearest = nearest.min(d);
        }

        let estimated_value = weighted_value_sum / weight_sum;

        trace!(
            samples_used = candidates.len(),
            nearest_km = nearest,
            estimated_value,
            "idw estimate"
        );

        Ok(EstimationOutcome {
            estimated_value,
            confidence: proximity_confidence(nearest),
            samples_used: candidates.len(),
            nearest_sample_distance_km: nearest,
            method_name: self.name().to_string(),
        })
    }
}

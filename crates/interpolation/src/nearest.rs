//! Nearest-sensor estimation
//!
//! Reports the value of the closest sensor outright. Useful as a baseline
//! against IDW and as a second method behind the [`Estimator`] trait for
//! exercising runtime method swaps.

use aerogrid_core::geo;
use aerogrid_core::{
    Error, EstimationOutcome, Estimator, EstimatorConfig, GeoPoint, Result, Sample,
};

use crate::proximity_confidence;

/// Closest-sensor implementation of the [`Estimator`] capability.
///
/// Honors the same search radius and minimum-sample gate as IDW;
/// `max_samples` has no effect since exactly one sensor contributes.
#[derive(Debug, Clone, Default)]
pub struct NearestNeighborEstimator {
    config: EstimatorConfig,
}

impl NearestNeighborEstimator {
    /// Create an estimator owning `config`.
    pub fn new(config: EstimatorConfig) -> Self {
        Self { config }
    }
}

impl Estimator for NearestNeighborEstimator {
    fn name(&self) -> &'static str {
        "nearest"
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

        let mut usable = 0usize;
        let mut nearest: Option<(f64, f64)> = None;

        for s in samples {
            let d = geo::distance_km(target, s.location);
            if let Some(max) = config.max_distance_km() {
                if d > max {
                    continue;
                }
            }
            usable += 1;
            // Strict comparison keeps the first of two tied sensors.
            if nearest.is_none_or(|(best, _)| d < best) {
                nearest = Some((d, s.value()));
            }
        }

        if usable < config.min_samples() {
            return Err(Error::InsufficientSamples {
                actual: usable,
                required: config.min_samples(),
            });
        }

        // usable >= min_samples >= 1, so a nearest sensor exists.
        let (distance, value) = nearest.ok_or(Error::InsufficientSamples {
            actual: 0,
            required: config.min_samples(),
        })?;

        Ok(EstimationOutcome {
            estimated_value: value,
            confidence: proximity_confidence(distance),
            samples_used: 1,
            nearest_sample_distance_km: distance,
            method_name: self.name().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(lat: f64, lon: f64, value: f64) -> Sample {
        Sample::new(lat, lon, value).unwrap()
    }

    fn target(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    #[test]
    fn test_closest_sensor_wins() {
        let samples = vec![
            sample(0.0, 0.2, 10.0),
            sample(0.0, 1.0, 20.0),
            sample(0.0, 3.0, 30.0),
        ];
        let outcome = NearestNeighborEstimator::default()
            .estimate(&samples, target(0.0, 0.0))
            .unwrap();

        assert_eq!(outcome.estimated_value, 10.0);
        assert_eq!(outcome.samples_used, 1);
        assert_eq!(outcome.method_name, "nearest");
    }

    #[test]
    fn test_tie_keeps_first_sensor() {
        // Equidistant east and west of the target.
        let samples = vec![sample(0.0, 1.0, 70.0), sample(0.0, -1.0, 30.0)];
        let outcome = NearestNeighborEstimator::default()
            .estimate(&samples, target(0.0, 0.0))
            .unwrap();

        assert_eq!(outcome.estimated_value, 70.0);
    }

    #[test]
    fn test_radius_filter_applies() {
        let config = EstimatorConfig::new(2.0, 1, None, Some(50.0)).unwrap();
        let samples = vec![sample(0.0, 10.0, 10.0)];
        let err = NearestNeighborEstimator::new(config)
            .estimate(&samples, target(0.0, 0.0))
            .unwrap_err();

        assert_eq!(
            err,
            Error::InsufficientSamples {
                actual: 0,
                required: 1
            }
        );
    }

    #[test]
    fn test_empty_samples_rejected() {
        let err = NearestNeighborEstimator::default()
            .estimate(&[], target(0.0, 0.0))
            .unwrap_err();
        assert!(matches!(err, Error::InsufficientSamples { .. }));
    }
}

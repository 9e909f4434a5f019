//! Interpolation service: the public orchestration surface
//!
//! Validates inputs, delegates to the active estimator, and evaluates
//! single-point or grid (batch) queries. The active method can be swapped
//! at runtime without affecting outcomes already returned.

use std::sync::{Arc, PoisonError, RwLock};

use aerogrid_core::{Error, EstimationOutcome, Estimator, GeoPoint, Result, Sample};
use tracing::debug;

use crate::idw::InverseDistanceEstimator;
use crate::maybe_rayon::*;

/// Orchestrates estimation over a swappable [`Estimator`].
///
/// Stateless apart from the active estimator reference; `estimate` and
/// `estimate_batch` may run concurrently from multiple threads, and
/// [`set_estimator`](Self::set_estimator) is an atomic swap: a concurrent
/// reader observes the old or the new estimator in full, never a torn one.
pub struct InterpolationService {
    estimator: RwLock<Arc<dyn Estimator>>,
}

impl InterpolationService {
    /// Service with the given estimation method.
    pub fn new(estimator: Arc<dyn Estimator>) -> Self {
        Self {
            estimator: RwLock::new(estimator),
        }
    }

    /// Estimate the value at one target location.
    ///
    /// An empty sample set is rejected before any distance work; target
    /// coordinates are validated when the query point is constructed.
    ///
    /// # Errors
    /// - [`Error::InsufficientSamples`] for an empty sample set, or too
    ///   few usable sensors after the estimator's distance filtering
    /// - [`Error::InvalidCoordinate`] for an out-of-range target
    pub fn estimate(
        &self,
        samples: &[Sample],
        latitude: f64,
        longitude: f64,
    ) -> Result<EstimationOutcome> {
        if samples.is_empty() {
            return Err(Error::InsufficientSamples {
                actual: 0,
                required: 1,
            });
        }
        let target = GeoPoint::new(latitude, longitude)?;
        self.active().estimate(samples, target)
    }

    /// Estimate every target against the same fixed sample set.
    ///
    /// Returns one result per target, in target order. Failures are
    /// per-target: a grid cell with no usable sensors reports its own
    /// error without discarding the rest of the grid. The whole batch is
    /// evaluated against the estimator active at call time, even if a
    /// swap races with it.
    pub fn estimate_batch(
        &self,
        samples: &[Sample],
        targets: &[(f64, f64)],
    ) -> Vec<Result<EstimationOutcome>> {
        let estimator = self.active();
        debug!(
            targets = targets.len(),
            samples = samples.len(),
            method = estimator.name(),
            "batch estimate"
        );

        targets
            .par_iter()
            .map(|&(latitude, longitude)| {
                if samples.is_empty() {
                    return Err(Error::InsufficientSamples {
                        actual: 0,
                        required: 1,
                    });
                }
                let target = GeoPoint::new(latitude, longitude)?;
                estimator.estimate(samples, target)
            })
            .collect()
    }

    /// Atomically replace the active estimator for subsequent calls.
    pub fn set_estimator(&self, estimator: Arc<dyn Estimator>) {
        *self
            .estimator
            .write()
            .unwrap_or_else(PoisonError::into_inner) = estimator;
    }

    /// Name of the active estimation method.
    pub fn method_name(&self) -> &'static str {
        self.active().name()
    }

    fn active(&self) -> Arc<dyn Estimator> {
        // Clone the Arc and drop the guard immediately so estimation never
        // runs under the lock.
        self.estimator
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for InterpolationService {
    /// IDW with default parameters.
    fn default() -> Self {
        Self::new(Arc::new(InverseDistanceEstimator::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nearest::NearestNeighborEstimator;
    use aerogrid_core::EstimatorConfig;

    fn sample(lat: f64, lon: f64, value: f64) -> Sample {
        Sample::new(lat, lon, value).unwrap()
    }

    #[test]
    fn test_empty_samples_rejected_early() {
        let service = InterpolationService::default();
        let err = service.estimate(&[], 0.0, 0.0).unwrap_err();
        assert!(matches!(err, Error::InsufficientSamples { actual: 0, .. }));
    }

    #[test]
    fn test_invalid_target_rejected() {
        let service = InterpolationService::default();
        let samples = vec![sample(0.0, 0.0, 10.0)];
        let err = service.estimate(&samples, 95.0, 0.0).unwrap_err();
        assert!(matches!(err, Error::InvalidCoordinate { .. }));
    }

    #[test]
    fn test_delegates_to_active_estimator() {
        let service = InterpolationService::default();
        let samples = vec![sample(10.0, 10.0, 42.0)];
        let outcome = service.estimate(&samples, 10.0, 10.0).unwrap();

        assert_eq!(outcome.estimated_value, 42.0);
        assert_eq!(outcome.method_name, "idw");
    }

    #[test]
    fn test_swap_changes_method() {
        let service = InterpolationService::default();
        assert_eq!(service.method_name(), "idw");

        service.set_estimator(Arc::new(NearestNeighborEstimator::default()));
        assert_eq!(service.method_name(), "nearest");

        let samples = vec![sample(0.0, 0.2, 10.0), sample(0.0, 1.0, 90.0)];
        let outcome = service.estimate(&samples, 0.0, 0.0).unwrap();
        assert_eq!(outcome.method_name, "nearest");
        assert_eq!(outcome.estimated_value, 10.0);
    }

    #[test]
    fn test_batch_preserves_target_order() {
        let service = InterpolationService::default();
        let samples = vec![sample(0.0, 0.0, 10.0), sample(1.0, 1.0, 30.0)];
        let targets = [(0.0, 0.0), (1.0, 1.0), (0.5, 0.5)];

        let results = service.estimate_batch(&samples, &targets);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().estimated_value, 10.0);
        assert_eq!(results[1].as_ref().unwrap().estimated_value, 30.0);
        let mid = results[2].as_ref().unwrap();
        assert!(mid.estimated_value > 10.0 && mid.estimated_value < 30.0);
    }

    #[test]
    fn test_batch_failures_are_per_target() {
        // Tight search radius: the middle grid cell has no sensor in range.
        let config = EstimatorConfig::new(2.0, 1, None, Some(30.0)).unwrap();
        let service =
            InterpolationService::new(Arc::new(InverseDistanceEstimator::new(config)));

        let samples = vec![sample(0.0, 0.0, 10.0), sample(0.0, 4.0, 50.0)];
        let targets = [(0.0, 0.1), (0.0, 2.0), (0.0, 3.9)];

        let results = service.estimate_batch(&samples, &targets);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(matches!(
            results[1],
            Err(Error::InsufficientSamples { actual: 0, .. })
        ));
        assert!(results[2].is_ok());
    }

    #[test]
    fn test_batch_invalid_target_is_per_target() {
        let service = InterpolationService::default();
        let samples = vec![sample(0.0, 0.0, 10.0)];
        let targets = [(0.0, 0.0), (95.0, 0.0)];

        let results = service.estimate_batch(&samples, &targets);
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(Error::InvalidCoordinate { .. })));
    }

    #[test]
    fn test_batch_empty_samples() {
        let service = InterpolationService::default();
        let results = service.estimate_batch(&[], &[(0.0, 0.0), (1.0, 1.0)]);

        assert_eq!(results.len(), 2);
        for result in &results {
            assert!(matches!(
                result,
                Err(Error::InsufficientSamples { actual: 0, .. })
            ));
        }
    }
}

//! Estimator configuration

use serde::Serialize;

use crate::{Error, Result};

/// Parameters governing an estimator instance.
///
/// Immutable once constructed; reconfiguring means building a new
/// estimator. These four fields are the complete tunable surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimatorConfig {
    power: f64,
    min_samples: usize,
    max_samples: Option<usize>,
    max_distance_km: Option<f64>,
}

impl Default for EstimatorConfig {
    /// Power 2.0, one required sample, no distance or count limits.
    fn default() -> Self {
        Self {
            power: 2.0,
            min_samples: 1,
            max_samples: None,
            max_distance_km: None,
        }
    }
}

impl EstimatorConfig {
    /// Create a configuration, validating every field.
    ///
    /// # Errors
    /// [`Error::InvalidParameter`] when `power` is not a positive finite
    /// number, `min_samples` is zero, `max_samples` is below
    /// `min_samples`, or `max_distance_km` is not positive.
    pub fn new(
        power: f64,
        min_samples: usize,
        max_samples: Option<usize>,
        max_distance_km: Option<f64>,
    ) -> Result<Self> {
        if !(power > 0.0) || !power.is_finite() {
            return Err(Error::InvalidParameter {
                name: "power",
                value: power.to_string(),
                reason: "weighting power must be a positive finite number".to_string(),
            });
        }
        if min_samples == 0 {
            return Err(Error::InvalidParameter {
                name: "min_samples",
                value: "0".to_string(),
                reason: "at least one sample must be required".to_string(),
            });
        }
        if let Some(max) = max_samples {
            if max < min_samples {
                return Err(Error::InvalidParameter {
                    name: "max_samples",
                    value: max.to_string(),
                    reason: format!("must be at least min_samples ({min_samples})"),
                });
            }
        }
        if let Some(radius) = max_distance_km {
            if !(radius > 0.0) || !radius.is_finite() {
                return Err(Error::InvalidParameter {
                    name: "max_distance_km",
                    value: radius.to_string(),
                    reason: "search radius must be a positive finite number".to_string(),
                });
            }
        }

        Ok(Self {
            power,
            min_samples,
            max_samples,
            max_distance_km,
        })
    }

    /// Distance-decay exponent for inverse-distance weights.
    pub fn power(&self) -> f64 {
        self.power
    }

    /// Minimum number of usable samples after filtering.
    pub fn min_samples(&self) -> usize {
        self.min_samples
    }

    /// Cap on the number of (closest) samples used, `None` for unlimited.
    pub fn max_samples(&self) -> Option<usize> {
        self.max_samples
    }

    /// Search radius in kilometers, `None` for unlimited.
    pub fn max_distance_km(&self) -> Option<f64> {
        self.max_distance_km
    }
}

//! Sensor readings used as interpolation evidence

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::geo::GeoPoint;
use crate::{Error, Result};

/// One sensor's geolocated air-quality measurement.
///
/// Created by the sensor-data collaborator for each query; estimators
/// borrow a read-only slice and never mutate or retain it. The measured
/// value is validated non-negative at construction, so no partially-valid
/// reading exists downstream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample {
    /// Sensor location
    pub location: GeoPoint,
    value: f64,
    /// Sensor identifier, for traceability
    pub id: Option<String>,
    /// Capture time of the reading
    pub observed_at: Option<DateTime<Utc>>,
}

impl Sample {
    /// Create a reading at `(latitude, longitude)` with a measured value.
    ///
    /// Fails with [`Error::InvalidCoordinate`] for an out-of-range
    /// location and [`Error::InvalidParameter`] for a negative (or NaN)
    /// value.
    pub fn new(latitude: f64, longitude: f64, value: f64) -> Result<Self> {
        let location = GeoPoint::new(latitude, longitude)?;
        if !(value >= 0.0) {
            return Err(Error::InvalidParameter {
                name: "value",
                value: value.to_string(),
                reason: "measured air-quality value must be non-negative".to_string(),
            });
        }
        Ok(Self {
            location,
            value,
            id: None,
            observed_at: None,
        })
    }

    /// Attach a sensor identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Attach a capture timestamp.
    pub fn with_observed_at(mut self, observed_at: DateTime<Utc>) -> Self {
        self.observed_at = Some(observed_at);
        self
    }

    /// The measured air-quality value, guaranteed non-negative.
    pub fn value(&self) -> f64 {
        self.value
    }
}

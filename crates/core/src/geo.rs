//! Geodesic math and coordinate validation
//!
//! Great-circle distances between sensor locations via the Haversine
//! formula on a spherical Earth. The spherical approximation is accurate
//! to ~0.5%, well inside the tolerance of sensor-network interpolation
//! at city scale.
//!
//! Reference:
//! Sinnott, R.W. (1984). Virtues of the Haversine. Sky and Telescope, 68(2).

use serde::Serialize;

use crate::{Error, Result};

/// Mean Earth radius in kilometers (IUGG).
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distances below this threshold count as "at the sample location".
///
/// Absorbs floating-point artifacts when two coordinates are nominally
/// identical, and lets the weighting step avoid a vanishing denominator.
pub const ZERO_DISTANCE_EPSILON_KM: f64 = 1e-6;

/// Validate a latitude/longitude pair in degrees.
///
/// Fails with [`Error::InvalidCoordinate`] when the latitude is outside
/// `[-90, 90]` or the longitude outside `[-180, 180]`. NaN fails both.
pub fn validate(latitude: f64, longitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::InvalidCoordinate {
            latitude,
            longitude,
        });
    }
    Ok(())
}

/// A validated geographic location (WGS84 degrees).
///
/// Construction is the validation boundary: a `GeoPoint` that exists is
/// always in range. Pure value type, no identity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Create a point, failing with [`Error::InvalidCoordinate`] for
    /// out-of-range input.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        validate(latitude, longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees, guaranteed within `[-90, 90]`.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees, guaranteed within `[-180, 180]`.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Great-circle distance between two points in kilometers.
///
/// Haversine formula on a sphere of radius [`EARTH_RADIUS_KM`]. Identical
/// points return exactly `0.0`, not a near-zero artifact.
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    if a == b {
        return 0.0;
    }

    let dlat = (b.latitude - a.latitude).to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos()
            * b.latitude.to_radians().cos()
            * (dlon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

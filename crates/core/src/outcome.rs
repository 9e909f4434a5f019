//! Interpolation results

use serde::Serialize;

/// The result of one interpolation call.
///
/// Produced fresh per call, immutable, no shared state between calls.
///
/// Serialization is a stable downstream contract: the field set is exactly
/// `estimated_value`, `confidence`, `samples_used`,
/// `nearest_sample_distance_km` and `interpolation_method`, with distances
/// in kilometers and confidence unitless in `[0.1, 1.0]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimationOutcome {
    /// Interpolated air-quality value
    pub estimated_value: f64,
    /// Proximity-derived reliability proxy in `[0.1, 1.0]`;
    /// exactly `1.0` for a co-located sensor
    pub confidence: f64,
    /// Number of samples that contributed to the estimate
    pub samples_used: usize,
    /// Distance to the closest contributing sample, kilometers
    pub nearest_sample_distance_km: f64,
    /// Name of the method that produced this outcome
    #[serde(rename = "interpolation_method")]
    pub method_name: String,
}

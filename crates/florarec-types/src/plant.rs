use serde::{Deserialize, Serialize};

/// One candidate species exactly as returned by the recommendation service.
///
/// Field names mirror the service wire format; the localized common name is
/// carried under `common_name_ua` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPlantRecord {
    pub id: u64,
    pub scientific_name: String,
    #[serde(rename = "common_name_ua")]
    pub common_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Continuous suitability score in [0, 1].
    pub score: f64,
    /// Cold-tolerance threshold in degrees Celsius.
    pub cold_tolerance_c: f64,
    /// Ordinal 1..=5.
    pub drought_tolerance: u8,
    /// Service-side code, possibly compound (e.g. `full_sun,partial_shade`).
    /// Kept as a free string so new service codes survive deserialization.
    pub light_requirement: String,
    /// Ordinal 1..=5.
    pub biodiversity_support: u8,
    /// Ordinal 1..=5.
    pub growth_rate: u8,
    /// Ordinal 1..=5.
    pub recovery_speed: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// Fully formatted, presentation-ready record derived from a
/// [`RawPlantRecord`].
///
/// Every field is a finite, already-formatted value; downstream consumers
/// must not re-interpret any of them numerically. A missing image reference
/// stays `None` — substituting a placeholder is a presentation concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayPlantRecord {
    pub id: String,
    pub scientific_name: String,
    pub common_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub cold_tolerance: String,
    pub pollution_tolerance: String,
    pub recovery_speed: String,
    pub sunlight: String,
    pub soil_type: String,
    pub height: String,
    pub drought_tolerance: String,
    pub spread_speed: String,
    pub resilience: String,
    /// Guaranteed non-empty; the adapter substitutes a fixed fallback when
    /// the service omits an explanation.
    pub explanation: String,
}

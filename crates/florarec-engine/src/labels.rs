//! Banding rules mapping raw numeric/ordinal plant attributes to the fixed
//! categorical vocabulary shown to users.
//!
//! The tables are deliberately declarative so every threshold stays
//! auditable in one place. All functions here are total: out-of-range input
//! falls back to a defined label instead of failing.

/// Explanation substituted when the service omits one or sends an empty
/// string.
pub const DEFAULT_EXPLANATION: &str = "The plant matches the given criteria.";

/// The service does not report soil preference; the display record carries
/// this fixed placeholder instead.
pub const DEFAULT_SOIL_TYPE: &str = "generalist";

/// The service does not report mature height; the display record carries
/// this fixed placeholder instead.
pub const DEFAULT_HEIGHT: &str = "unspecified";

/// Drought-tolerance labels indexed by ordinal − 1.
pub const DROUGHT_LABELS: [&str; 5] = [
    "low",
    "moderately low",
    "medium",
    "moderately high",
    "high",
];

/// Light-requirement codes the client knows how to phrase, including the
/// compound combinations the service emits today.
pub const LIGHT_LABELS: &[(&str, &str)] = &[
    ("full_sun", "full sun"),
    ("partial_shade", "partial shade"),
    ("shade", "shade"),
    ("full_sun,partial_shade", "full sun / partial shade"),
    ("partial_shade,shade", "partial shade / shade"),
];

/// Cold tolerance is shown verbatim with a degree suffix, no banding.
pub fn cold_tolerance_label(cold_c: f64) -> String {
    format!("{}°C", cold_c)
}

/// Band a continuous suitability score in [0, 1] onto the pollution
/// tolerance vocabulary. The score is scaled by 5 and rounded half-up
/// before banding.
pub fn pollution_tolerance_label(score: f64) -> &'static str {
    let scaled = (score * 5.0).round() as i64;
    match scaled {
        s if s >= 5 => "very high",
        4 => "high",
        3 => "moderate",
        2 => "moderately low",
        _ => "low",
    }
}

/// Ordinal 1..=5 through [`DROUGHT_LABELS`]; anything outside the table
/// falls back to the middle label.
pub fn drought_tolerance_label(drought: u8) -> &'static str {
    DROUGHT_LABELS
        .get((drought as usize).wrapping_sub(1))
        .copied()
        .unwrap_or(DROUGHT_LABELS[2])
}

/// Recovery speed passes through as `n/5`, no banding.
pub fn recovery_speed_label(recovery: u8) -> String {
    format!("{}/5", recovery)
}

/// Phrase a service-side light code. Unrecognized codes pass through
/// unchanged so new service vocabulary degrades gracefully instead of
/// being rejected.
pub fn light_requirement_label(code: &str) -> String {
    LIGHT_LABELS
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, label)| (*label).to_string())
        .unwrap_or_else(|| code.to_string())
}

/// Band a growth-rate ordinal onto the four spread-speed labels.
pub fn spread_speed_label(growth: u8) -> &'static str {
    match growth {
        g if g >= 4 => "fast",
        3 => "moderate-to-fast",
        2 => "moderate",
        _ => "slow",
    }
}

/// Synthesize the overall resilience category. The three rules are checked
/// in this fixed priority order; both boundaries of the first rule are
/// inclusive.
pub fn resilience_label(score: f64, recovery: u8, biodiversity: u8) -> &'static str {
    if score >= 0.8 && recovery >= 4 {
        "high resilience to urban conditions"
    } else if biodiversity >= 4 {
        "high biodiversity support"
    } else {
        "good adaptation to urban conditions"
    }
}

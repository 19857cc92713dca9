//! Sample criteria and plant records shared across integration tests.

use florarec_types::{Criteria, LightRequirement, RawPlantRecord, SoilCategory};

/// Criteria for a cold steppe restoration site on chernozem soil.
pub fn chernozem_criteria() -> Criteria {
    Criteria {
        soil: SoilCategory::Chernozem,
        min_temp_c: -25.0,
        drought: 3,
        light: LightRequirement::FullSun,
        biodiversity: 4,
        growth: 3,
        recovery: 4,
    }
}

/// A well-scored candidate: score 0.85 with recovery 4 lands in the "high
/// resilience" category after adaptation.
pub fn resilient_record(id: u64) -> RawPlantRecord {
    RawPlantRecord {
        id,
        scientific_name: "Quercus robur".to_string(),
        common_name: "Дуб звичайний".to_string(),
        image_url: None,
        score: 0.85,
        cold_tolerance_c: -30.0,
        drought_tolerance: 3,
        light_requirement: "full_sun".to_string(),
        biodiversity_support: 5,
        growth_rate: 2,
        recovery_speed: 4,
        explanation: None,
    }
}

/// A mid-field candidate with every optional field populated.
pub fn documented_record(id: u64) -> RawPlantRecord {
    RawPlantRecord {
        id,
        scientific_name: "Tilia cordata".to_string(),
        common_name: "Липа серцелиста".to_string(),
        image_url: Some("https://example.org/tilia.jpg".to_string()),
        score: 0.6,
        cold_tolerance_c: -28.0,
        drought_tolerance: 2,
        light_requirement: "full_sun,partial_shade".to_string(),
        biodiversity_support: 3,
        growth_rate: 3,
        recovery_speed: 3,
        explanation: Some("Supports pollinators in early summer.".to_string()),
    }
}

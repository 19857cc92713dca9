use serde::{Deserialize, Serialize};

/// Soil category vocabulary understood by the recommendation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoilCategory {
    Chernozem,
    GreyForest,
    Podzolic,
    Meadow,
    Solonets,
    Sandy,
    Disturbed,
}

impl SoilCategory {
    /// Wire code sent to the service (e.g. `grey_forest`).
    pub fn code(&self) -> &'static str {
        match self {
            SoilCategory::Chernozem => "chernozem",
            SoilCategory::GreyForest => "grey_forest",
            SoilCategory::Podzolic => "podzolic",
            SoilCategory::Meadow => "meadow",
            SoilCategory::Solonets => "solonets",
            SoilCategory::Sandy => "sandy",
            SoilCategory::Disturbed => "disturbed",
        }
    }
}

/// Light requirement a user can select on the input form.
///
/// Raw plant records carry light requirements as free strings instead,
/// because the service may introduce compound codes the client has never
/// seen (see `RawPlantRecord::light_requirement`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightRequirement {
    FullSun,
    PartialShade,
    Shade,
}

impl LightRequirement {
    /// Wire code sent to the service (e.g. `full_sun`).
    pub fn code(&self) -> &'static str {
        match self {
            LightRequirement::FullSun => "full_sun",
            LightRequirement::PartialShade => "partial_shade",
            LightRequirement::Shade => "shade",
        }
    }
}

/// Site criteria submitted by the user, immutable once submitted.
///
/// All ordinal fields are inclusive integers in 1..=5. Submitting values
/// outside that range is a caller error; use [`Criteria::validate`] at the
/// input boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criteria {
    pub soil: SoilCategory,
    /// Minimum survivable temperature in degrees Celsius.
    pub min_temp_c: f64,
    pub drought: u8,
    pub light: LightRequirement,
    pub biodiversity: u8,
    pub growth: u8,
    pub recovery: u8,
}

impl Criteria {
    pub fn validate(&self) -> Result<(), String> {
        let ordinals = [
            ("drought", self.drought),
            ("biodiversity", self.biodiversity),
            ("growth", self.growth),
            ("recovery", self.recovery),
        ];
        for (name, value) in ordinals {
            if !(1..=5).contains(&value) {
                return Err(format!("{} must be within 1..=5, got {}", name, value));
            }
        }
        if !self.min_temp_c.is_finite() {
            return Err("min_temp_c must be a finite temperature".to_string());
        }
        Ok(())
    }
}

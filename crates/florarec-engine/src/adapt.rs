use crate::labels;
use florarec_types::{DisplayPlantRecord, RawPlantRecord};

/// Adapt one raw service record into its display form.
///
/// Pure and total: no I/O, no mutable state, and the same input always
/// yields the same output. Out-of-range ordinals fall back to their table
/// defaults instead of failing.
pub fn adapt_one(raw: &RawPlantRecord) -> DisplayPlantRecord {
    let explanation = raw
        .explanation
        .clone()
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| labels::DEFAULT_EXPLANATION.to_string());

    DisplayPlantRecord {
        id: raw.id.to_string(),
        scientific_name: raw.scientific_name.clone(),
        common_name: raw.common_name.clone(),
        image_url: raw.image_url.clone(),
        cold_tolerance: labels::cold_tolerance_label(raw.cold_tolerance_c),
        pollution_tolerance: labels::pollution_tolerance_label(raw.score).to_string(),
        recovery_speed: labels::recovery_speed_label(raw.recovery_speed),
        sunlight: labels::light_requirement_label(&raw.light_requirement),
        soil_type: labels::DEFAULT_SOIL_TYPE.to_string(),
        height: labels::DEFAULT_HEIGHT.to_string(),
        drought_tolerance: labels::drought_tolerance_label(raw.drought_tolerance).to_string(),
        spread_speed: labels::spread_speed_label(raw.growth_rate).to_string(),
        resilience: labels::resilience_label(
            raw.score,
            raw.recovery_speed,
            raw.biodiversity_support,
        )
        .to_string(),
        explanation,
    }
}

/// Adapt a whole response element-wise, preserving input order.
///
/// The service is the sole authority on ranking order; this function never
/// re-sorts.
pub fn adapt_many(raw: &[RawPlantRecord]) -> Vec<DisplayPlantRecord> {
    raw.iter().map(adapt_one).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_record(id: u64) -> RawPlantRecord {
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

    #[test]
    fn test_adapt_one_formats_every_field() {
        let display = adapt_one(&raw_record(17));

        assert_eq!(display.id, "17");
        assert_eq!(display.scientific_name, "Quercus robur");
        assert_eq!(display.common_name, "Дуб звичайний");
        assert_eq!(display.image_url, None);
        assert_eq!(display.cold_tolerance, "-30°C");
        assert_eq!(display.pollution_tolerance, "high"); // 0.85 * 5 rounds to 4
        assert_eq!(display.recovery_speed, "4/5");
        assert_eq!(display.sunlight, "full sun");
        assert_eq!(display.soil_type, "generalist");
        assert_eq!(display.height, "unspecified");
        assert_eq!(display.drought_tolerance, "medium");
        assert_eq!(display.spread_speed, "moderate");
        assert_eq!(display.resilience, "high resilience to urban conditions");
        assert_eq!(display.explanation, labels::DEFAULT_EXPLANATION);
    }

    #[test]
    fn test_adapt_one_keeps_supplied_explanation_and_image() {
        let mut raw = raw_record(1);
        raw.image_url = Some("https://example.org/oak.jpg".to_string());
        raw.explanation = Some("Deep roots stabilize slopes.".to_string());

        let display = adapt_one(&raw);
        assert_eq!(display.image_url.as_deref(), Some("https://example.org/oak.jpg"));
        assert_eq!(display.explanation, "Deep roots stabilize slopes.");
    }

    #[test]
    fn test_adapt_one_replaces_empty_explanation() {
        let mut raw = raw_record(1);
        raw.explanation = Some(String::new());
        assert_eq!(adapt_one(&raw).explanation, labels::DEFAULT_EXPLANATION);
    }

    #[test]
    fn test_adapt_one_is_pure() {
        let raw = raw_record(3);
        assert_eq!(adapt_one(&raw), adapt_one(&raw));
    }

    #[test]
    fn test_adapt_many_preserves_order_and_length() {
        let raws: Vec<RawPlantRecord> = (1..=4).map(raw_record).collect();
        let displays = adapt_many(&raws);

        assert_eq!(displays.len(), raws.len());
        let ids: Vec<&str> = displays.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4"]);
    }

    #[test]
    fn test_adapt_many_empty_input() {
        assert!(adapt_many(&[]).is_empty());
    }

    #[test]
    fn test_resilience_boundary_record() {
        // Score exactly 0.8 with recovery exactly 4 sits on the inclusive
        // boundary of the resilience rule.
        let mut raw = raw_record(9);
        raw.score = 0.8;
        raw.recovery_speed = 4;
        raw.biodiversity_support = 1;
        assert_eq!(
            adapt_one(&raw).resilience,
            "high resilience to urban conditions"
        );

        raw.score = 0.7999;
        raw.recovery_speed = 5;
        raw.biodiversity_support = 4;
        assert_eq!(adapt_one(&raw).resilience, "high biodiversity support");
    }
}

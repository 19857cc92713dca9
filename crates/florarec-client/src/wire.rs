use florarec_types::{Criteria, LightRequirement, RawPlantRecord, SoilCategory};
use serde::{Deserialize, Serialize};

/// Result-count cap sent with each submission.
pub const DEFAULT_RESULT_LIMIT: u32 = 10;

/// Request payload for the single `/recommend` exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendRequest {
    pub soil_code: SoilCategory,
    pub min_temp_c: f64,
    pub drought: u8,
    pub light: LightRequirement,
    pub biodiversity: u8,
    pub growth: u8,
    pub recovery: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl RecommendRequest {
    /// Direct, lossless projection of user criteria onto the wire payload.
    pub fn from_criteria(criteria: &Criteria, limit: Option<u32>) -> Self {
        Self {
            soil_code: criteria.soil,
            min_temp_c: criteria.min_temp_c,
            drought: criteria.drought,
            light: criteria.light,
            biodiversity: criteria.biodiversity,
            growth: criteria.growth,
            recovery: criteria.recovery,
            limit,
        }
    }
}

/// Success envelope: an ordered candidate list. A missing `results` field
/// deserializes as the empty list, which is a valid answer distinct from an
/// error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendResponse {
    #[serde(default)]
    pub results: Vec<RawPlantRecord>,
}

/// Structured failure body the service may attach to a non-success status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_is_lossless_projection_of_criteria() {
        let criteria = Criteria {
            soil: SoilCategory::Chernozem,
            min_temp_c: -25.0,
            drought: 3,
            light: LightRequirement::FullSun,
            biodiversity: 4,
            growth: 3,
            recovery: 4,
        };

        let request = RecommendRequest::from_criteria(&criteria, Some(DEFAULT_RESULT_LIMIT));
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["soil_code"], "chernozem");
        assert_eq!(json["min_temp_c"], -25.0);
        assert_eq!(json["drought"], 3);
        assert_eq!(json["light"], "full_sun");
        assert_eq!(json["biodiversity"], 4);
        assert_eq!(json["growth"], 3);
        assert_eq!(json["recovery"], 4);
        assert_eq!(json["limit"], 10);
    }

    #[test]
    fn test_request_omits_absent_limit() {
        let criteria = Criteria {
            soil: SoilCategory::Sandy,
            min_temp_c: -10.0,
            drought: 5,
            light: LightRequirement::Shade,
            biodiversity: 1,
            growth: 1,
            recovery: 1,
        };

        let json = serde_json::to_value(RecommendRequest::from_criteria(&criteria, None)).unwrap();
        assert!(json.get("limit").is_none());
    }

    #[test]
    fn test_response_tolerates_missing_results_field() {
        let response: RecommendResponse = serde_json::from_str("{}").unwrap();
        assert!(response.results.is_empty());
    }

    #[test]
    fn test_response_parses_record_list() {
        let json = r#"{
            "results": [{
                "id": 1,
                "scientific_name": "Acer campestre",
                "common_name_ua": "Клен польовий",
                "score": 0.6,
                "cold_tolerance_c": -25,
                "drought_tolerance": 4,
                "light_requirement": "full_sun,partial_shade",
                "biodiversity_support": 3,
                "growth_rate": 3,
                "recovery_speed": 3
            }]
        }"#;

        let response: RecommendResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].scientific_name, "Acer campestre");
    }
}

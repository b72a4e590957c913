//! Food record models
//!
//! Decoded forms of the JSON the FDC API returns, plus the request bodies
//! for the POST endpoints. Records are fetched per request, never persisted,
//! and discarded after formatting.

use serde::{Deserialize, Serialize};

/// A food record as returned by the FDC API.
///
/// The upstream data is loosely structured: any field may be missing
/// depending on the dataset a record comes from, so everything is optional.
/// Formatters render placeholder text for absent fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodRecord {
    pub fdc_id: Option<i64>,
    pub description: Option<String>,
    pub data_type: Option<String>,
    pub brand_owner: Option<String>,
    pub ingredients: Option<String>,
    pub published_date: Option<String>,
    pub food_category: Option<FoodCategory>,
    #[serde(default)]
    pub food_nutrients: Vec<NutrientEntry>,
}

/// Category metadata nested inside a food record
#[derive(Debug, Clone, Deserialize)]
pub struct FoodCategory {
    pub description: Option<String>,
}

/// One nutrient measurement on a food record
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NutrientEntry {
    pub nutrient: Option<NutrientInfo>,
    pub amount: Option<f64>,
}

/// Nested nutrient identity (name and unit)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientInfo {
    pub name: Option<String>,
    pub unit_name: Option<String>,
}

impl NutrientEntry {
    /// Nutrient name, or "Unknown" when the nested object is absent
    pub fn name(&self) -> &str {
        self.nutrient
            .as_ref()
            .and_then(|n| n.name.as_deref())
            .unwrap_or("Unknown")
    }

    /// Unit name, empty when absent
    pub fn unit(&self) -> &str {
        self.nutrient
            .as_ref()
            .and_then(|n| n.unit_name.as_deref())
            .unwrap_or("")
    }

    /// The amount, if it is positive. Zero and negative amounts are not
    /// reportable and are excluded from all output.
    pub fn reportable_amount(&self) -> Option<f64> {
        self.amount.filter(|a| *a > 0.0)
    }
}

/// Response envelope for POST foods/search
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub foods: Vec<FoodRecord>,
    pub total_hits: Option<u64>,
}

/// Request body for POST foods/search
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub query: String,
    pub page_size: u32,
    pub page_number: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<Vec<String>>,
}

/// Request body for POST foods (multi-food lookup)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodsRequest {
    pub fdc_ids: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrients: Option<Vec<i64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_sparse_record() {
        // Branded records omit category; Foundation records omit brand.
        let json = r#"{"fdcId": 171688, "description": "Apples, raw, with skin"}"#;
        let food: FoodRecord = serde_json::from_str(json).unwrap();
        assert_eq!(food.fdc_id, Some(171688));
        assert_eq!(food.description.as_deref(), Some("Apples, raw, with skin"));
        assert!(food.brand_owner.is_none());
        assert!(food.food_nutrients.is_empty());
    }

    #[test]
    fn test_decode_nutrient_entry() {
        let json = r#"{"nutrient": {"name": "Protein", "unitName": "g"}, "amount": 0.26}"#;
        let entry: NutrientEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.name(), "Protein");
        assert_eq!(entry.unit(), "g");
        assert_eq!(entry.reportable_amount(), Some(0.26));
    }

    #[test]
    fn test_zero_amount_not_reportable() {
        let entry = NutrientEntry {
            nutrient: None,
            amount: Some(0.0),
        };
        assert_eq!(entry.reportable_amount(), None);
        assert_eq!(entry.name(), "Unknown");
        assert_eq!(entry.unit(), "");

        let negative = NutrientEntry {
            nutrient: None,
            amount: Some(-1.5),
        };
        assert_eq!(negative.reportable_amount(), None);
    }

    #[test]
    fn test_search_request_body() {
        let request = SearchRequest {
            query: "apple".to_string(),
            page_size: 25,
            page_number: 1,
            data_type: Some(vec!["Foundation".to_string()]),
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["query"], "apple");
        assert_eq!(body["pageSize"], 25);
        assert_eq!(body["pageNumber"], 1);
        assert_eq!(body["dataType"][0], "Foundation");
    }

    #[test]
    fn test_foods_request_omits_empty_nutrients() {
        let request = FoodsRequest {
            fdc_ids: vec![123456, 789012],
            nutrients: None,
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["fdcIds"][1], 789012);
        assert!(body.get("nutrients").is_none());
    }

    #[test]
    fn test_search_response_missing_foods() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.foods.is_empty());
        assert!(response.total_hits.is_none());
    }
}

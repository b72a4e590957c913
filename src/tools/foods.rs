//! Food lookup tools
//!
//! The four network-backed handlers: search, detail lookup, nutrient
//! filtering, and multi-food comparison. Each validates its arguments before
//! calling the FDC client, and every path returns a `String`; upstream
//! failures come back as descriptive text, never as errors.

use crate::fdc::FdcApi;
use crate::format;
use crate::models::{DataType, FoodsRequest, SearchRequest};

/// Search responses show at most this many summaries
const SEARCH_RESULT_CAP: usize = 10;

/// Upper bound on the requested page size; larger values are clamped
const MAX_PAGE_SIZE: u32 = 50;

/// compare_foods accepts at most this many ids
const MAX_COMPARE_FOODS: usize = 5;

/// Comparison blocks show at most this many nutrient entries per food
const COMPARE_NUTRIENT_CAP: usize = 8;

const INVALID_NUTRIENT_IDS: &str =
    "Invalid nutrient IDs. Provide comma-separated numbers (e.g., '203,204,208')";
const INVALID_FDC_IDS: &str =
    "Invalid FDC IDs. Provide comma-separated numbers (e.g., '123456,789012')";

/// Parse a comma-separated list of integer ids, trimming whitespace
fn parse_id_list(raw: &str) -> Result<Vec<i64>, std::num::ParseIntError> {
    raw.split(',').map(|part| part.trim().parse()).collect()
}

/// Search for foods matching a query, optionally filtered by data type
pub async fn search_foods(
    api: &dyn FdcApi,
    query: &str,
    data_type: Option<&str>,
    page_size: u32,
) -> String {
    let data_type = match data_type {
        Some(raw) => match DataType::from_str(raw) {
            Some(dt) => Some(vec![dt.as_str().to_string()]),
            None => {
                return format!(
                    "Invalid data type. Valid options: {}",
                    DataType::valid_options()
                )
            }
        },
        None => None,
    };

    let request = SearchRequest {
        query: query.to_string(),
        page_size: page_size.min(MAX_PAGE_SIZE),
        page_number: 1,
        data_type,
    };

    let response = match api.search_foods(&request).await {
        Ok(response) => response,
        Err(e) => return format!("Search failed: {e}"),
    };

    if response.foods.is_empty() {
        return "No foods found for your search query.".to_string();
    }

    let total = response
        .total_hits
        .unwrap_or(response.foods.len() as u64);
    let shown: Vec<String> = response
        .foods
        .iter()
        .take(SEARCH_RESULT_CAP)
        .map(format::food_summary)
        .collect();

    let mut summary = format!(
        "Found {} foods. Showing top {} results:\n\n",
        total,
        shown.len()
    );
    summary.push_str(&shown.join("\n---\n"));

    if total > shown.len() as u64 {
        summary.push_str(&format!(
            "\n\n... and {} more results.",
            total - shown.len() as u64
        ));
    }

    summary
}

/// Fetch the full detail block for one food
pub async fn get_food_details(api: &dyn FdcApi, fdc_id: i64) -> String {
    match api.get_food(fdc_id, None).await {
        Ok(food) => format::food_details(&food),
        Err(e) => format!("Failed to get food details: {e}"),
    }
}

/// List every reportable nutrient on a food, optionally filtered by id
pub async fn get_food_nutrients(
    api: &dyn FdcApi,
    fdc_id: i64,
    nutrient_ids: Option<&str>,
) -> String {
    let filter = match nutrient_ids.map(parse_id_list).transpose() {
        Ok(ids) => ids,
        Err(_) => return INVALID_NUTRIENT_IDS.to_string(),
    };

    let food = match api.get_food(fdc_id, filter.as_deref()).await {
        Ok(food) => food,
        Err(e) => return format!("Failed to get nutrient data: {e}"),
    };

    let food_name = food.description.as_deref().unwrap_or("Unknown Food");
    let mut info = format!("Nutrient information for {food_name} (FDC ID: {fdc_id}):\n\n");

    if food.food_nutrients.is_empty() {
        info.push_str("No nutrient data available.");
        return info;
    }

    for entry in &food.food_nutrients {
        if let Some(amount) = entry.reportable_amount() {
            info.push_str(&format!("{}: {} {}\n", entry.name(), amount, entry.unit()));
        }
    }

    info
}

/// Compare nutrient profiles of up to five foods side by side
pub async fn compare_foods(api: &dyn FdcApi, fdc_ids: &str, nutrient_ids: Option<&str>) -> String {
    let ids = match parse_id_list(fdc_ids) {
        Ok(ids) => ids,
        Err(_) => return INVALID_FDC_IDS.to_string(),
    };
    if ids.len() > MAX_COMPARE_FOODS {
        return "Maximum 5 foods can be compared at once.".to_string();
    }

    let nutrients = match nutrient_ids.map(parse_id_list).transpose() {
        Ok(nutrients) => nutrients,
        Err(_) => return "Invalid nutrient IDs. Provide comma-separated numbers.".to_string(),
    };

    let request = FoodsRequest {
        fdc_ids: ids,
        nutrients,
    };

    let foods = match api.get_foods(&request).await {
        Ok(foods) => foods,
        Err(e) => return format!("Failed to compare foods: {e}"),
    };

    if foods.is_empty() {
        return "No food data found for the provided IDs.".to_string();
    }

    let mut comparison = String::from("Food Comparison:\n\n");
    for food in &foods {
        comparison.push_str(&format!(
            "=== {} (ID: {}) ===\n",
            food.description.as_deref().unwrap_or("Unknown"),
            food.fdc_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
        ));

        for entry in food.food_nutrients.iter().take(COMPARE_NUTRIENT_CAP) {
            if let Some(amount) = entry.reportable_amount() {
                comparison.push_str(&format!(
                    "  {}: {} {}\n",
                    entry.name(),
                    amount,
                    entry.unit()
                ));
            }
        }

        comparison.push('\n');
    }

    comparison
}

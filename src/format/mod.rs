//! Text formatters
//!
//! Pure functions turning a [`FoodRecord`] into fixed-layout text blocks.
//! Total over their input: missing fields render as placeholder text and
//! nothing here can panic on upstream data.

use crate::models::FoodRecord;

/// Detail view shows at most this many nutrient entries
const DETAIL_NUTRIENT_CAP: usize = 10;

fn fdc_id_text(food: &FoodRecord) -> String {
    food.fdc_id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

/// Five-line summary block used in search results
pub fn food_summary(food: &FoodRecord) -> String {
    format!(
        "Food: {}\nFDC ID: {}\nData Type: {}\nBrand: {}\nPublished: {}",
        food.description.as_deref().unwrap_or("Unknown"),
        fdc_id_text(food),
        food.data_type.as_deref().unwrap_or("Unknown"),
        food.brand_owner.as_deref().unwrap_or("Generic"),
        food.published_date.as_deref().unwrap_or("N/A"),
    )
}

/// Detailed view with category, brand, ingredients, and a capped nutrient list
pub fn food_details(food: &FoodRecord) -> String {
    let mut details = format!(
        "Food: {}\nFDC ID: {}\nData Type: {}\nCategory: {}\n",
        food.description.as_deref().unwrap_or("Unknown"),
        fdc_id_text(food),
        food.data_type.as_deref().unwrap_or("Unknown"),
        food.food_category
            .as_ref()
            .and_then(|c| c.description.as_deref())
            .unwrap_or("N/A"),
    );

    if let Some(brand) = food.brand_owner.as_deref() {
        details.push_str(&format!("Brand: {brand}\n"));
    }

    if let Some(ingredients) = food.ingredients.as_deref() {
        details.push_str(&format!("Ingredients: {ingredients}\n"));
    }

    if !food.food_nutrients.is_empty() {
        details.push_str("\nNutritional Information (per 100g):\n");
        for entry in food.food_nutrients.iter().take(DETAIL_NUTRIENT_CAP) {
            if let Some(amount) = entry.reportable_amount() {
                details.push_str(&format!("  {}: {} {}\n", entry.name(), amount, entry.unit()));
            }
        }
    }

    details
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FoodCategory, NutrientEntry, NutrientInfo};

    fn nutrient(name: &str, amount: f64, unit: &str) -> NutrientEntry {
        NutrientEntry {
            nutrient: Some(NutrientInfo {
                name: Some(name.to_string()),
                unit_name: Some(unit.to_string()),
            }),
            amount: Some(amount),
        }
    }

    fn sample_food() -> FoodRecord {
        FoodRecord {
            fdc_id: Some(171688),
            description: Some("Apples, raw, with skin".to_string()),
            data_type: Some("Foundation".to_string()),
            food_category: Some(FoodCategory {
                description: Some("Fruits and Fruit Juices".to_string()),
            }),
            food_nutrients: vec![
                nutrient("Protein", 0.0, "g"),
                nutrient("Total lipid (fat)", 5.2, "g"),
            ],
            ..FoodRecord::default()
        }
    }

    #[test]
    fn test_summary_block() {
        let text = food_summary(&sample_food());
        assert_eq!(
            text,
            "Food: Apples, raw, with skin\n\
             FDC ID: 171688\n\
             Data Type: Foundation\n\
             Brand: Generic\n\
             Published: N/A"
        );
    }

    #[test]
    fn test_summary_of_empty_record_uses_placeholders() {
        let text = food_summary(&FoodRecord::default());
        assert_eq!(
            text,
            "Food: Unknown\nFDC ID: N/A\nData Type: Unknown\nBrand: Generic\nPublished: N/A"
        );
    }

    #[test]
    fn test_details_excludes_zero_amounts() {
        let text = food_details(&sample_food());
        assert!(text.contains("Nutritional Information (per 100g):"));
        assert!(text.contains("Total lipid (fat): 5.2 g"));
        assert!(!text.contains("Protein"));
    }

    #[test]
    fn test_details_optional_lines() {
        let mut food = sample_food();
        food.brand_owner = Some("Acme Foods".to_string());
        food.ingredients = Some("APPLES".to_string());
        let text = food_details(&food);
        assert!(text.contains("Brand: Acme Foods\n"));
        assert!(text.contains("Ingredients: APPLES\n"));

        let without = food_details(&sample_food());
        assert!(!without.contains("Brand:"));
        assert!(!without.contains("Ingredients:"));
    }

    #[test]
    fn test_details_caps_nutrient_list_at_ten() {
        let mut food = sample_food();
        food.food_nutrients = (1..=15)
            .map(|i| nutrient(&format!("Nutrient {i}"), i as f64, "mg"))
            .collect();
        let text = food_details(&food);
        assert!(text.contains("Nutrient 10:"));
        assert!(!text.contains("Nutrient 11:"));
    }

    #[test]
    fn test_details_no_nutrient_section_when_list_empty() {
        let mut food = sample_food();
        food.food_nutrients.clear();
        assert!(!food_details(&food).contains("Nutritional Information"));
    }

    #[test]
    fn test_formatting_is_deterministic() {
        let food = sample_food();
        assert_eq!(food_details(&food), food_details(&food));
        assert_eq!(food_summary(&food), food_summary(&food));
    }
}

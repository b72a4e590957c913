//! Reference data tools
//!
//! Static lookup tables rendered as text. No network calls, fully
//! deterministic.

use crate::models::DataType;

/// Common nutrient numbers and their names, in the order FDC documents them.
/// These are the legacy nutrient numbers accepted by the `nutrients` filter.
const NUTRIENT_REFERENCE: &[(u32, &str)] = &[
    (203, "Protein"),
    (204, "Total lipid (fat)"),
    (205, "Carbohydrate, by difference"),
    (208, "Energy (kcal)"),
    (269, "Sugars, total including NLEA"),
    (291, "Fiber, total dietary"),
    (301, "Calcium, Ca"),
    (303, "Iron, Fe"),
    (304, "Magnesium, Mg"),
    (305, "Phosphorus, P"),
    (306, "Potassium, K"),
    (307, "Sodium, Na"),
    (309, "Zinc, Zn"),
    (401, "Vitamin C, total ascorbic acid"),
    (404, "Thiamin (Vitamin B1)"),
    (405, "Riboflavin (Vitamin B2)"),
    (406, "Niacin (Vitamin B3)"),
    (415, "Vitamin B-6"),
    (417, "Folate, total"),
    (418, "Vitamin B-12"),
    (320, "Vitamin A, RAE"),
    (324, "Vitamin D (D2 + D3)"),
    (323, "Vitamin E (alpha-tocopherol)"),
    (430, "Vitamin K (phylloquinone)"),
];

/// Render the nutrient id reference table
pub fn get_nutrient_reference() -> String {
    let mut reference = String::from("Common Nutrient IDs for filtering:\n\n");
    for (id, name) in NUTRIENT_REFERENCE {
        reference.push_str(&format!("{id}: {name}\n"));
    }
    reference.push_str("\nUsage: Use these IDs with get_food_nutrients() or compare_foods()");
    reference.push_str("\nExample: get_food_nutrients(fdc_id=123456, nutrient_ids='203,204,208')");
    reference
}

/// Render the data type reference
pub fn get_data_types() -> String {
    let mut info = String::from("Available Food Data Types:\n\n");
    for data_type in DataType::ALL {
        info.push_str(&format!(
            "{}:\n  {}\n\n",
            data_type.as_str(),
            data_type.describe()
        ));
    }
    info.push_str("Usage: Use these data type names with search_foods()");
    info.push_str("\nExample: search_foods(query='apple', data_type='Foundation')");
    info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nutrient_reference_contents() {
        let text = get_nutrient_reference();
        assert!(text.starts_with("Common Nutrient IDs for filtering:\n\n"));
        assert!(text.contains("203: Protein\n"));
        assert!(text.contains("430: Vitamin K (phylloquinone)\n"));
        assert!(text.ends_with("nutrient_ids='203,204,208')"));
        assert_eq!(NUTRIENT_REFERENCE.len(), 24);
    }

    #[test]
    fn test_data_types_lists_all_five() {
        let text = get_data_types();
        for dt in DataType::ALL {
            assert!(text.contains(dt.as_str()));
            assert!(text.contains(dt.describe()));
        }
        assert!(text.ends_with("data_type='Foundation')"));
    }

    #[test]
    fn test_reference_tools_deterministic() {
        assert_eq!(get_nutrient_reference(), get_nutrient_reference());
        assert_eq!(get_data_types(), get_data_types());
    }
}

//! FoodData Central data types
//!
//! FDC partitions its records into five datasets. Search requests may filter
//! by one of them; anything else is rejected before touching the network.

/// One of the five FDC dataset types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Foundation,
    Branded,
    Survey,
    Legacy,
    Experimental,
}

impl DataType {
    /// All data types, in the order FDC documents them
    pub const ALL: [DataType; 5] = [
        DataType::Foundation,
        DataType::Branded,
        DataType::Survey,
        DataType::Legacy,
        DataType::Experimental,
    ];

    /// The exact name the FDC API expects in search filters
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Foundation => "Foundation",
            DataType::Branded => "Branded",
            DataType::Survey => "Survey (FNDDS)",
            DataType::Legacy => "Legacy",
            DataType::Experimental => "Experimental",
        }
    }

    /// Parse the API name back into a data type (case-sensitive, like the API)
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Foundation" => Some(DataType::Foundation),
            "Branded" => Some(DataType::Branded),
            "Survey (FNDDS)" => Some(DataType::Survey),
            "Legacy" => Some(DataType::Legacy),
            "Experimental" => Some(DataType::Experimental),
            _ => None,
        }
    }

    /// Human-readable description for the get_data_types reference tool
    pub fn describe(&self) -> &'static str {
        match self {
            DataType::Foundation => {
                "Comprehensive nutrient data on a diverse set of foods that provide the foundation for other food composition data"
            }
            DataType::Branded => {
                "Label data from branded/packaged foods available in the marketplace"
            }
            DataType::Survey => {
                "Foods from the Food and Nutrient Database for Dietary Studies, used in dietary surveys"
            }
            DataType::Legacy => "Historical data from the Standard Reference database",
            DataType::Experimental => "Foods from research studies and experimental data",
        }
    }

    /// Comma-separated list of valid names, used in validation messages
    pub fn valid_options() -> String {
        DataType::ALL
            .iter()
            .map(|dt| dt.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

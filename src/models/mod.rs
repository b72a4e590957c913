//! Data models
//!
//! Typed representations of FoodData Central records and request bodies.
//! Upstream JSON is semi-structured, so every record field is optional and
//! decoded once at the client boundary.

mod data_type;
mod food;

pub use data_type::DataType;
pub use food::{
    FoodCategory, FoodRecord, FoodsRequest, NutrientEntry, NutrientInfo, SearchRequest,
    SearchResponse,
};

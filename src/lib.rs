//! USDA FoodData Central MCP Server Library
//!
//! Tool mediation between an MCP agent runtime and the FDC REST API.

pub mod build_info;
pub mod config;
pub mod fdc;
pub mod format;
pub mod mcp;
pub mod models;
pub mod tools;

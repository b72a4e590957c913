//! FDC MCP Server Implementation
//!
//! Registers the FoodData Central tools with the MCP tool router.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Deserialize;

use crate::config::FdcConfig;
use crate::fdc::FdcClient;
use crate::tools::status::StatusTracker;
use crate::tools::{foods, reference};

/// FoodData Central MCP Service
#[derive(Clone)]
pub struct FdcService {
    client: Arc<FdcClient>,
    status_tracker: Arc<StatusTracker>,
    tool_router: ToolRouter<FdcService>,
}

impl FdcService {
    pub fn new(config: FdcConfig) -> Self {
        Self {
            status_tracker: Arc::new(StatusTracker::new(&config)),
            client: Arc::new(FdcClient::new(config)),
            tool_router: Self::tool_router(),
        }
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchFoodsParams {
    /// Search terms (e.g., "apple", "cheddar cheese")
    pub query: String,
    /// Filter by data type: Foundation, Branded, Survey (FNDDS), Legacy, or Experimental
    pub data_type: Option<String>,
    /// Number of results to request (default 25, clamped to 50)
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page_size() -> u32 {
    25
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetFoodDetailsParams {
    /// FoodData Central ID of the food
    pub fdc_id: i64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetFoodNutrientsParams {
    /// FoodData Central ID of the food
    pub fdc_id: i64,
    /// Comma-separated nutrient IDs to filter by (e.g., "203,204,208").
    /// See get_nutrient_reference for common IDs.
    pub nutrient_ids: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CompareFoodsParams {
    /// Comma-separated FDC IDs to compare, up to 5 (e.g., "123456,789012")
    pub fdc_ids: String,
    /// Comma-separated nutrient IDs to filter by (optional)
    pub nutrient_ids: Option<String>,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl FdcService {
    #[tool(description = "Search for foods in the USDA Food Data Central database")]
    async fn search_foods(
        &self,
        Parameters(p): Parameters<SearchFoodsParams>,
    ) -> Result<CallToolResult, McpError> {
        let text = foods::search_foods(
            self.client.as_ref(),
            &p.query,
            p.data_type.as_deref(),
            p.page_size,
        )
        .await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Get detailed nutritional information for a specific food item")]
    async fn get_food_details(
        &self,
        Parameters(p): Parameters<GetFoodDetailsParams>,
    ) -> Result<CallToolResult, McpError> {
        let text = foods::get_food_details(self.client.as_ref(), p.fdc_id).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Get specific nutrient information for a food item")]
    async fn get_food_nutrients(
        &self,
        Parameters(p): Parameters<GetFoodNutrientsParams>,
    ) -> Result<CallToolResult, McpError> {
        let text = foods::get_food_nutrients(
            self.client.as_ref(),
            p.fdc_id,
            p.nutrient_ids.as_deref(),
        )
        .await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Compare nutritional information between multiple foods (up to 5)")]
    async fn compare_foods(
        &self,
        Parameters(p): Parameters<CompareFoodsParams>,
    ) -> Result<CallToolResult, McpError> {
        let text = foods::compare_foods(
            self.client.as_ref(),
            &p.fdc_ids,
            p.nutrient_ids.as_deref(),
        )
        .await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Get reference information for common nutrient IDs used in filtering")]
    fn get_nutrient_reference(&self) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(
            reference::get_nutrient_reference(),
        )]))
    }

    #[tool(description = "Get information about available food data types")]
    fn get_data_types(&self) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(
            reference::get_data_types(),
        )]))
    }

    #[tool(description = "Get the current status of the FDC MCP server including build info, upstream configuration, and process information")]
    fn fdc_status(&self) -> Result<CallToolResult, McpError> {
        let status = self.status_tracker.get_status();
        let json = serde_json::to_string_pretty(&status)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for FdcService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "usda-fdc-mcp".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("USDA FoodData Central".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "USDA FoodData Central (FDC) - food and nutrition lookups. \
                 Search: search_foods(query, data_type?, page_size?). \
                 Details: get_food_details(fdc_id). \
                 Nutrients: get_food_nutrients(fdc_id, nutrient_ids?) with comma-separated nutrient IDs. \
                 Comparison: compare_foods(fdc_ids, nutrient_ids?) for up to 5 foods. \
                 Reference: get_nutrient_reference for common nutrient IDs, get_data_types for dataset types. \
                 Diagnostics: fdc_status. \
                 Requires FDC_API_KEY; without it, data tools return an error message."
                    .into(),
            ),
        }
    }
}

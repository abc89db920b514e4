//! Variant Units MCP Server Implementation
//!
//! Implements the MCP server with all unit tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::models::Variant;
use crate::tools::status::StatusTracker;
use crate::tools::units;

/// Variant Units MCP Service
#[derive(Clone)]
pub struct UnitsService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    tool_router: ToolRouter<UnitsService>,
}

impl UnitsService {
    pub fn new() -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new())),
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for UnitsService {
    fn default() -> Self {
        Self::new()
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

fn invalid(message: String) -> McpError {
    McpError::invalid_params(message, None)
}

// ============================================================================
// Unit Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetScaleParams {
    /// Quantity in base units (grams for weight, litres for volume)
    pub value: f64,
    /// Unit family: weight or volume
    pub family: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetUnitNameParams {
    /// Scale factor, exactly as listed by unit_scales (e.g. 1000, 28.34952, 0.001)
    pub scale: f64,
    /// Unit family: weight or volume
    pub family: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct UnitScalesParams {
    /// Unit family: weight or volume
    pub family: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ParseOptionKeyParams {
    /// Option key from variant_unit_options (e.g. "weight_1000", "items")
    pub key: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct VariantParams {
    /// Option key of the product's unit (e.g. "weight_1", "volume_1", "items")
    pub variant_unit: String,
    /// Amount in base units: grams, litres, or item count
    pub unit_value: Option<f64>,
    /// Free text shown after the amount (optional)
    pub unit_description: Option<String>,
    /// Item noun for "items" products, e.g. "bunch" (optional)
    pub variant_unit_name: Option<String>,
}

impl VariantParams {
    fn into_variant(self) -> Result<Variant, McpError> {
        Variant::from_option_key(
            &self.variant_unit,
            self.unit_value,
            self.unit_description,
            self.variant_unit_name,
        )
        .map_err(|e| invalid(e.to_string()))
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct UnitPriceParams {
    /// Price of one variant
    pub price: f64,
    #[serde(flatten)]
    pub variant: VariantParams,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl UnitsService {
    // --- Status ---

    #[tool(description = "Get the current status of the Variant Units service including build info and process information")]
    async fn unit_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        json_result(&tracker.get_status())
    }

    #[tool(description = "Get instructions for choosing, displaying and pricing variant units. Call this when unsure how the unit tools fit together.")]
    fn unit_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::UNIT_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(UNIT_INSTRUCTIONS)]))
    }

    // --- Scales ---

    #[tool(description = "Pick the display scale for a quantity: the largest unit the value still reads as at least 1 in (1200 g -> 1000/kg)")]
    fn get_scale(
        &self,
        Parameters(p): Parameters<GetScaleParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = units::get_scale(p.value, &p.family).map_err(invalid)?;
        json_result(&result)
    }

    #[tool(description = "Get the unit symbol for a scale factor. The scale must exactly match a table entry.")]
    fn get_unit_name(
        &self,
        Parameters(p): Parameters<GetUnitNameParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = units::get_unit_name(p.scale, &p.family).map_err(invalid)?;
        json_result(&result)
    }

    #[tool(description = "List the scale factors of a unit family in ascending order")]
    fn unit_scales(
        &self,
        Parameters(p): Parameters<UnitScalesParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = units::unit_scales(&p.family).map_err(invalid)?;
        json_result(&result)
    }

    #[tool(description = "List every unit choice for a product (label + option key), ending with Items")]
    fn variant_unit_options(&self) -> Result<CallToolResult, McpError> {
        json_result(&units::variant_unit_options())
    }

    #[tool(description = "Validate and decode an option key such as weight_1000, volume_0.001 or items")]
    fn parse_option_key(
        &self,
        Parameters(p): Parameters<ParseOptionKeyParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = units::parse_option_key(&p.key).map_err(invalid)?;
        json_result(&result)
    }

    // --- Variants ---

    #[tool(description = "Render the display name of a variant, e.g. 1.5kg, 250mL or 2 bunches, followed by its description")]
    fn option_value_name(
        &self,
        Parameters(p): Parameters<VariantParams>,
    ) -> Result<CallToolResult, McpError> {
        let variant = p.into_variant()?;
        let result = units::get_option_value_name(&variant).map_err(invalid)?;
        json_result(&result)
    }

    #[tool(description = "Compute the price per kg, lb, L or item of a variant")]
    fn unit_price(
        &self,
        Parameters(p): Parameters<UnitPriceParams>,
    ) -> Result<CallToolResult, McpError> {
        let variant = p.variant.into_variant()?;
        let result = units::get_unit_price(p.price, &variant).map_err(invalid)?;
        json_result(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for UnitsService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "variant-units".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Variant Units".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Variant Units - unit scaling, naming and unit pricing for product variants. \
                 IMPORTANT: Call unit_instructions before choosing or displaying units. \
                 Scales: get_scale, get_unit_name, unit_scales. \
                 Options: variant_unit_options, parse_option_key \
                 (keys like weight_1000, volume_0.001, items). \
                 Variants: option_value_name, unit_price. \
                 Status: unit_status."
                    .into(),
            ),
        }
    }
}

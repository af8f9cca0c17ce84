//! Shrekdroid MCP Server Implementation
//!
//! Exposes the catalog, stateless conversions and a selection session as
//! MCP tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::conversion::DEFAULT_DIRECTION;
use crate::session::Session;
use crate::tools::catalog;
use crate::tools::convert;
use crate::tools::session;
use crate::tools::status::StatusTracker;

/// Shrekdroid MCP Service
#[derive(Clone)]
pub struct ShrekService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    catalog: Arc<Catalog>,
    session: Arc<Mutex<Session>>,
    config: Config,
    tool_router: ToolRouter<ShrekService>,
}

impl ShrekService {
    /// The catalog must be fully populated before the service is built
    pub fn new(catalog: Catalog, config: Config) -> Self {
        let catalog = Arc::new(catalog);
        let session = Session::from_config(catalog.clone(), &config);
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(
                catalog.len(),
                catalog.unit_count(),
            ))),
            catalog,
            session: Arc::new(Mutex::new(session)),
            config,
            tool_router: Self::tool_router(),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

fn user_error(message: String) -> McpError {
    tracing::debug!("Rejected request: {}", message);
    McpError::invalid_params(message, None)
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListUnitsParams {
    /// Category name, e.g. "Time" or "Distance"
    pub category: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertParams {
    /// Category name
    pub category: String,
    /// Unit name within the category, e.g. "Minutes"
    pub unit: String,
    /// Amount as entered, e.g. "190"
    pub amount: String,
    /// "to_unit" (amount in Shreks) or "to_base" (amount in the unit). Default to_base
    #[serde(default = "default_direction")]
    pub direction: String,
}

fn default_direction() -> String { DEFAULT_DIRECTION.as_str().to_string() }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertBetweenParams {
    /// Category name
    pub category: String,
    /// Unit the amount is given in
    pub from_unit: String,
    /// Unit to convert into
    pub to_unit: String,
    /// Amount as entered
    pub amount: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SelectCategoryParams {
    /// Category name
    pub name: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SelectUnitParams {
    /// Unit name within the selected category
    pub name: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SessionConvertParams {
    /// Amount as entered; interpreted in Shreks when Shrek mode is on
    pub amount: String,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl ShrekService {
    // --- Status ---

    #[tool(description = "Get the current status of the Shrekdroid service including build info, catalog size, and process information")]
    async fn converter_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        to_json(&tracker.get_status())
    }

    #[tool(description = "Get instructions for converting units with Shrekdroid. Call this when unsure how the conversion tools fit together.")]
    fn converter_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::CONVERTER_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(CONVERTER_INSTRUCTIONS)]))
    }

    // --- Catalog ---

    #[tool(description = "List all unit categories")]
    fn list_categories(&self) -> Result<CallToolResult, McpError> {
        to_json(&catalog::list_categories(&self.catalog))
    }

    #[tool(description = "List the units of a category with their factors relative to one Shrek")]
    fn list_units(&self, Parameters(p): Parameters<ListUnitsParams>) -> Result<CallToolResult, McpError> {
        let result = catalog::list_units(&self.catalog, &p.category).map_err(user_error)?;
        to_json(&result)
    }

    // --- Conversion ---

    #[tool(description = "Convert an amount between Shreks and a unit. direction=to_unit converts Shreks into the unit, direction=to_base converts the unit into Shreks.")]
    fn convert(&self, Parameters(p): Parameters<ConvertParams>) -> Result<CallToolResult, McpError> {
        let result = convert::convert(&self.catalog, &p.category, &p.unit, &p.amount, &p.direction, self.config.precision)
            .map_err(user_error)?;
        tracing::info!(category = %result.category, unit = %result.unit, "{}", result.formatted);
        to_json(&result)
    }

    #[tool(description = "Convert an amount from one unit to another unit of the same category")]
    fn convert_between(&self, Parameters(p): Parameters<ConvertBetweenParams>) -> Result<CallToolResult, McpError> {
        let result = convert::convert_between(&self.catalog, &p.category, &p.from_unit, &p.to_unit, &p.amount, self.config.precision)
            .map_err(user_error)?;
        tracing::info!(category = %result.category, "{} {} -> {}", p.amount, result.from_unit, result.formatted);
        to_json(&result)
    }

    // --- Session ---

    #[tool(description = "Get the current selection: category, unit, Shrek mode, input hint, and available units")]
    async fn get_session(&self) -> Result<CallToolResult, McpError> {
        let session = self.session.lock().await;
        to_json(&session::get_session(&session))
    }

    #[tool(description = "Select a category. The unit selection moves to the category's first unit.")]
    async fn select_category(&self, Parameters(p): Parameters<SelectCategoryParams>) -> Result<CallToolResult, McpError> {
        let mut session = self.session.lock().await;
        let result = session::select_category(&mut session, &p.name).map_err(user_error)?;
        to_json(&result)
    }

    #[tool(description = "Select a unit of the currently selected category")]
    async fn select_unit(&self, Parameters(p): Parameters<SelectUnitParams>) -> Result<CallToolResult, McpError> {
        let mut session = self.session.lock().await;
        let result = session::select_unit(&mut session, &p.name).map_err(user_error)?;
        to_json(&result)
    }

    #[tool(description = "Toggle Shrek mode. When on, amounts are entered in Shreks and results are in the selected unit.")]
    async fn toggle_shrek_mode(&self) -> Result<CallToolResult, McpError> {
        let mut session = self.session.lock().await;
        to_json(&session::toggle_shrek_mode(&mut session))
    }

    #[tool(description = "Convert an amount using the selected unit and the current Shrek mode")]
    async fn session_convert(&self, Parameters(p): Parameters<SessionConvertParams>) -> Result<CallToolResult, McpError> {
        let session = self.session.lock().await;
        let result = session::session_convert(&session, &p.amount).map_err(user_error)?;
        to_json(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for ShrekService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "shrekdroid".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Shrekdroid".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Shrekdroid - converts time and distance units through the Shrek base unit. \
                 Call converter_instructions for details. \
                 Catalog: list_categories, list_units. \
                 Conversion: convert (direction to_unit or to_base), convert_between. \
                 Session: get_session, select_category, select_unit, toggle_shrek_mode, session_convert. \
                 Status: converter_status."
                    .into(),
            ),
        }
    }
}

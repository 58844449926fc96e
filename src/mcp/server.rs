//! Conversion MCP Server Implementation
//!
//! Implements the MCP server with all conversion tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::form::ConversionForm;
use crate::tools::conversion::{self, FormUpdate};
use crate::tools::status::StatusTracker;
use crate::units::ConversionCategory;

/// Conversion MCP Service
#[derive(Clone)]
pub struct ConversionService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    /// The session's form, owned by the presentation side
    form: Arc<Mutex<ConversionForm>>,
    default_category: ConversionCategory,
    tool_router: ToolRouter<ConversionService>,
}

impl ConversionService {
    pub fn new(default_category: ConversionCategory) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(default_category))),
            form: Arc::new(Mutex::new(ConversionForm::with_category(default_category))),
            default_category,
            tool_router: Self::tool_router(),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListUnitsParams {
    /// Category label: Temperature, Length, Time or Volume
    pub category: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertParams {
    /// Category label: Temperature, Length, Time or Volume
    pub category: String,
    /// Source unit (e.g. "celsius")
    pub from_unit: String,
    /// Target unit (e.g. "fahrenheit")
    pub to_unit: String,
    /// Value as typed, e.g. "12.5". Anything unparsable converts as 0.
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct UpdateFormParams {
    /// New category label (optional). Changing category clears both units.
    pub category: Option<String>,
    /// New source unit (optional, must belong to the category)
    pub from_unit: Option<String>,
    /// New target unit (optional, must belong to the category)
    pub to_unit: Option<String>,
    /// New value text (optional)
    pub value: Option<String>,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl ConversionService {
    // --- Status ---

    #[tool(description = "Get the current status of the conversion service including build info and process information")]
    async fn conversion_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        to_json(&tracker.get_status())
    }

    #[tool(description = "Get instructions for converting values. Call this when unsure which categories, units or tools to use.")]
    fn conversion_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::CONVERSION_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(CONVERSION_INSTRUCTIONS)]))
    }

    // --- Taxonomy ---

    #[tool(description = "List the conversion categories with their units in display order")]
    fn list_categories(&self) -> Result<CallToolResult, McpError> {
        to_json(&conversion::list_categories())
    }

    #[tool(description = "List the units of a category in display order. Unknown categories have no units.")]
    fn list_units(&self, Parameters(p): Parameters<ListUnitsParams>) -> Result<CallToolResult, McpError> {
        to_json(&conversion::list_units(&p.category))
    }

    // --- Conversion ---

    #[tool(description = "Convert a value between two units of a category. Only Temperature is supported; other categories return an empty result.")]
    async fn convert(&self, Parameters(p): Parameters<ConvertParams>) -> Result<CallToolResult, McpError> {
        let result = conversion::convert_value(&p.category, &p.from_unit, &p.to_unit, &p.value);
        self.status_tracker.lock().await.record_conversion();
        to_json(&result)
    }

    // --- Form ---

    #[tool(description = "Get the session form: selected category, units, value and converted result")]
    async fn get_form(&self) -> Result<CallToolResult, McpError> {
        let form = self.form.lock().await;
        to_json(&form.snapshot())
    }

    #[tool(description = "Update the session form. Category is applied first and clears units when it changes; units must belong to the category.")]
    async fn update_form(&self, Parameters(p): Parameters<UpdateFormParams>) -> Result<CallToolResult, McpError> {
        let update = FormUpdate {
            category: p.category,
            from_unit: p.from_unit,
            to_unit: p.to_unit,
            value: p.value,
        };
        let mut form = self.form.lock().await;
        let snapshot = conversion::update_form(&mut form, update)
            .map_err(|e| McpError::invalid_params(e, None))?;
        self.status_tracker.lock().await.record_conversion();
        to_json(&snapshot)
    }

    #[tool(description = "Reset the session form to the default category with no units and an empty value")]
    async fn reset_form(&self) -> Result<CallToolResult, McpError> {
        let mut form = self.form.lock().await;
        to_json(&conversion::reset_form(&mut form, self.default_category))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for ConversionService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "conversion".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Conversion".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Conversion - unit conversion for Temperature, Length, Time and Volume. \
                 Call conversion_instructions first if unsure. \
                 Taxonomy: list_categories, list_units. \
                 One-shot: convert (category, from_unit, to_unit, value). \
                 Form: get_form, update_form, reset_form. \
                 Only Temperature produces values; other categories return an empty result. \
                 Status: conversion_status."
                    .into(),
            ),
        }
    }
}

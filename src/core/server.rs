//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating tool listing and tool calls to the
//! [`RequestDispatcher`].
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! The catalog in `domains/tools/catalog.rs` fixes which tools exist and in
//! which order; the dispatcher routes calls to them. The same dispatcher
//! serves every transport.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use crate::domains::tools::RequestDispatcher;

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp. Cloning is
/// cheap; all clones share the same configuration and dispatcher.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Dispatcher answering tool calls.
    dispatcher: Arc<RequestDispatcher>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Self {
        let dispatcher = RequestDispatcher::with_static_provider(config.tools.argument_policy);
        Self::with_dispatcher(config, dispatcher)
    }

    /// Create a server around an already-built dispatcher.
    pub fn with_dispatcher(config: Config, dispatcher: RequestDispatcher) -> Self {
        Self {
            config: Arc::new(config),
            dispatcher: Arc::new(dispatcher),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the dispatcher shared by all transports.
    pub fn dispatcher(&self) -> &Arc<RequestDispatcher> {
        &self.dispatcher
    }

    /// Instructions advertised to clients on initialization.
    pub fn instructions() -> &'static str {
        "Weather MCP server. Use get_current_weather for current conditions and \
         get_forecast for a 3-day outlook. Both accept a city name and optional \
         units ('metric' or 'imperial')."
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.dispatcher
            .list_tools()
            .iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    ///
    /// Returns an MCP `CallToolResult`-shaped JSON object on success.
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> crate::Result<serde_json::Value> {
        let arguments = match arguments {
            serde_json::Value::Object(map) => map,
            _ => serde_json::Map::new(),
        };

        let text = self.dispatcher.call_tool(name, &arguments)?;

        Ok(serde_json::json!({
            "content": [{ "type": "text", "text": text }],
            "isError": false
        }))
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(Self::instructions().to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.dispatcher.list_tools().to_vec(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        info!("Calling tool: {}", request.name);
        let arguments = request.arguments.unwrap_or_default();
        let text = self.dispatcher.call_tool(&request.name, &arguments)?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

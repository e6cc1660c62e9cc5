//! Tool Catalog - the fixed set of tools this server exposes.
//!
//! The catalog is built once and never mutated. Its order is the declaration
//! order below, which clients may rely on for display.

use rmcp::model::Tool;

use super::definitions::{CurrentWeatherTool, ForecastTool};

// ============================================================================
// Tool Catalog
// ============================================================================

/// Immutable catalog of tool definitions.
#[derive(Debug, Clone)]
pub struct ToolCatalog {
    tools: Vec<Tool>,
}

impl ToolCatalog {
    /// Build the catalog of all available tools.
    pub fn new() -> Self {
        Self {
            tools: vec![CurrentWeatherTool::to_tool(), ForecastTool::to_tool()],
        }
    }

    /// All tool definitions, in declaration order.
    pub fn list(&self) -> &[Tool] {
        &self.tools
    }

    /// Get all tool names, in declaration order.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name.as_ref()).collect()
    }

    /// Find a tool definition by name.
    pub fn get(&self, name: &str) -> Option<&Tool> {
        self.tools.iter().find(|t| t.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

impl Default for ToolCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_tool_names_in_order() {
        let catalog = ToolCatalog::new();
        assert_eq!(catalog.tool_names(), vec!["get_current_weather", "get_forecast"]);
    }

    #[test]
    fn test_catalog_names_are_unique() {
        let catalog = ToolCatalog::new();
        let names: HashSet<_> = catalog.tool_names().into_iter().collect();
        assert_eq!(names.len(), catalog.list().len());
    }

    #[test]
    fn test_catalog_schemas() {
        let catalog = ToolCatalog::new();
        for tool in catalog.list() {
            let schema = &tool.input_schema;
            assert_eq!(schema["required"], serde_json::json!(["location"]), "{}", tool.name);
            assert_eq!(schema["properties"]["location"]["type"], "string");
            assert_eq!(schema["properties"]["units"]["default"], "metric");
            assert_eq!(
                schema["properties"]["units"]["enum"],
                serde_json::json!(["metric", "imperial"])
            );
        }
    }

    #[test]
    fn test_catalog_get() {
        let catalog = ToolCatalog::new();
        assert!(catalog.contains("get_forecast"));
        assert!(catalog.get("get_sunrise").is_none());
    }

    #[test]
    fn test_catalog_is_stable() {
        let first = ToolCatalog::new();
        let second = ToolCatalog::new();
        assert_eq!(
            serde_json::to_value(first.list()).unwrap(),
            serde_json::to_value(second.list()).unwrap()
        );
    }
}

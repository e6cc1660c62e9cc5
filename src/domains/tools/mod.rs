//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are executable functions that can be called by MCP clients.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `catalog.rs` - The fixed, ordered catalog of tool definitions
//! - `arguments.rs` - Argument defaults and enforcement policy
//! - `dispatcher.rs` - Routes calls to tools and formats results
//! - `error.rs` - Tool-specific error types

mod arguments;
mod catalog;
pub mod definitions;
mod dispatcher;
mod error;

pub use arguments::{ArgumentPolicy, DEFAULT_LOCATION, WeatherParams};
pub use catalog::ToolCatalog;
pub use dispatcher::RequestDispatcher;
pub use error::ToolError;

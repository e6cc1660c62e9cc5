//! Weather MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server exposing two
//! weather tools, `get_current_weather` and `get_forecast`, backed by a
//! static table of simulated weather facts.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **weather**: weather samples and the provider that synthesizes them
//!   - **tools**: the tool catalog and the dispatcher answering tool calls
//!
//! # Example
//!
//! ```rust
//! use weather_mcp_server::domains::tools::{ArgumentPolicy, RequestDispatcher};
//!
//! let dispatcher = RequestDispatcher::with_static_provider(ArgumentPolicy::LenientDefaults);
//! let args = serde_json::json!({ "location": "Tokyo", "units": "imperial" });
//! let text = dispatcher
//!     .call_tool("get_current_weather", args.as_object().unwrap())
//!     .unwrap();
//! assert!(text.contains("64°F"));
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};

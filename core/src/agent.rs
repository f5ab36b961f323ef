//! Agent-facing types: tool definitions, executors and agent configuration
//!
//! A tool is exposed to an agent runtime as a `(Tool, ToolExecutorFn)` pair.
//! The [`Tool`] describes the call for the model; the executor runs it.
//!
//! ## Example
//!
//! ```ignore
//! use smart_lookup_core::agent::{Tool, ToolExecutorFn, ToolResult};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let tool = Tool::single_string_param("echo", "Echo the input", "text", "Text to echo");
//! let executor: ToolExecutorFn = Arc::new(|input: String| {
//!     Box::pin(async move { Ok(input) })
//!         as std::pin::Pin<Box<dyn std::future::Future<Output = ToolResult> + Send>>
//! });
//! ```

use serde::{Deserialize, Serialize};
use serde_json::json;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use thiserror::Error;

/// Tool definition handed to the model
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Tool {
    /// Tool name (used to identify which tool to call)
    pub name: String,
    /// Human-readable description of what the tool does
    pub description: String,
    /// JSON schema for the tool's input parameters
    pub input_schema: serde_json::Value,
}

impl Tool {
    /// Build a tool that takes exactly one required string parameter
    #[must_use]
    pub fn single_string_param(
        name: &str,
        description: &str,
        param: &str,
        param_description: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    param: {
                        "type": "string",
                        "description": param_description
                    }
                },
                "required": [param]
            }),
        }
    }
}

/// Result from tool execution
pub type ToolResult = Result<String, ToolError>;

/// Boxed async tool executor
///
/// Takes the JSON input string produced by the model and resolves to the
/// JSON-encoded tool output.
pub type ToolExecutorFn =
    Arc<dyn Fn(String) -> Pin<Box<dyn Future<Output = ToolResult> + Send>> + Send + Sync>;

/// Tool execution errors
///
/// Only raised for runtime-contract violations. Lookup failures are reported
/// inside the returned record instead.
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
#[error("{message}")]
pub struct ToolError {
    /// Error message
    pub message: String,
}

impl ToolError {
    /// Create a tool error from any message
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Agent configuration
///
/// Describes the agent the lookup tools are registered with. The runtime
/// decides how to use it; this crate only carries the values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgentConfig {
    /// Agent name
    pub name: String,
    /// Model identifier
    pub model: String,
    /// Short description of what the agent does
    pub description: String,
    /// System instruction given to the model
    pub instruction: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: "smart_lookup_agent".to_string(),
            model: "gemini-2.0-flash-lite".to_string(),
            description: "Agent that searches the web and Wikipedia to explain any topic."
                .to_string(),
            instruction: "You are a smart assistant who answers questions using both web search \
                          and Wikipedia lookups."
                .to_string(),
        }
    }
}

impl AgentConfig {
    /// Builder: Set agent name
    #[must_use]
    pub fn with_name(mut self, name: String) -> Self {
        self.name = name;
        self
    }

    /// Builder: Set model
    #[must_use]
    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    /// Builder: Set description
    #[must_use]
    pub fn with_description(mut self, description: String) -> Self {
        self.description = description;
        self
    }

    /// Builder: Set instruction
    #[must_use]
    pub fn with_instruction(mut self, instruction: String) -> Self {
        self.instruction = instruction;
        self
    }
}

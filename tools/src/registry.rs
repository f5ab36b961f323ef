//! Tool registry for dispatching calls by name
//!
//! The registry provides:
//! - Tool registration
//! - Thread-safe tool storage
//! - Tool execution by name
//! - Tool listing for the agent runtime

use crate::toolset::LookupToolset;
use smart_lookup_core::agent::{Tool, ToolError, ToolExecutorFn, ToolResult};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// Thread-safe tool registry
///
/// ## Example
///
/// ```ignore
/// use smart_lookup_tools::{LookupToolset, ToolRegistry};
///
/// let toolset = LookupToolset::with_defaults()?.shared();
/// let registry = ToolRegistry::with_lookup_tools(&toolset);
///
/// let result = registry.execute("get_weather", r#"{"city": "New York"}"#.to_string()).await;
/// ```
#[derive(Clone)]
pub struct ToolRegistry {
    tools: Arc<RwLock<HashMap<String, (Tool, ToolExecutorFn)>>>,
}

impl ToolRegistry {
    /// Create a new empty tool registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            tools: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a registry holding every lookup tool
    #[must_use]
    pub fn with_lookup_tools(toolset: &Arc<LookupToolset>) -> Self {
        let registry = Self::new();
        for (tool, executor) in crate::lookup_agent_tools(toolset) {
            registry.register(tool, executor);
        }
        registry
    }

    /// Register a tool with its executor
    ///
    /// Returns `true` if a tool with the same name was replaced.
    pub fn register(&self, tool: Tool, executor: ToolExecutorFn) -> bool {
        let mut tools = self.tools.write().unwrap_or_else(PoisonError::into_inner);
        tools.insert(tool.name.clone(), (tool, executor)).is_some()
    }

    /// Execute a tool by name
    ///
    /// # Errors
    ///
    /// Returns `ToolError` if the tool is not registered or rejects its input
    pub async fn execute(&self, name: &str, input: String) -> ToolResult {
        // Release the lock before awaiting
        let executor = {
            let tools = self.tools.read().unwrap_or_else(PoisonError::into_inner);
            tools.get(name).map(|(_, executor)| Arc::clone(executor))
        };

        match executor {
            Some(executor) => {
                debug!(tool = name, "Executing tool");
                executor(input).await
            }
            None => Err(ToolError::new(format!("Tool not found: {name}"))),
        }
    }

    /// Registered tool names, sorted alphabetically
    #[must_use]
    pub fn list_tools(&self) -> Vec<String> {
        let tools = self.tools.read().unwrap_or_else(PoisonError::into_inner);
        let mut names: Vec<String> = tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// Registered tool definitions sorted by name (for the agent runtime)
    #[must_use]
    pub fn get_tools(&self) -> Vec<Tool> {
        let tools = self.tools.read().unwrap_or_else(PoisonError::into_inner);
        let mut tool_list: Vec<Tool> = tools.values().map(|(tool, _)| tool.clone()).collect();
        tool_list.sort_by(|a, b| a.name.cmp(&b.name));
        tool_list
    }

    /// Get a specific tool definition by name
    #[must_use]
    pub fn get_tool(&self, name: &str) -> Option<Tool> {
        let tools = self.tools.read().unwrap_or_else(PoisonError::into_inner);
        tools.get(name).map(|(tool, _)| tool.clone())
    }

    /// Number of registered tools
    #[must_use]
    pub fn count(&self) -> usize {
        self.tools.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

//! Lookup tools for AI agents
//!
//! This crate provides the Smart Lookup toolset: weather and time for known
//! cities, a mock profile search, Wikipedia summary and title search, a
//! DuckDuckGo-backed web search, and a composite lookup chaining the last two.
//!
//! ## Design Principles
//!
//! **Failures are data**: every lookup returns a status-tagged record
//! (`success`, `warning`, `partial`, `error`). Transport errors, timeouts and
//! unexpected HTTP statuses are caught at the lookup boundary and reported in
//! `error_message`. Nothing is retried.
//!
//! **One record type per tool**: each tool's record is an enum with one
//! variant per status it can produce, carrying only that status' fields.
//!
//! **Injectable configuration**: endpoints, the per-request timeout and the
//! canned tables all come from [`LookupConfig`].
//!
//! ## Modules
//!
//! - `mock`: Table-backed tools (`get_weather`, `search_linkedin_profile`)
//! - `time`: Time tool (`get_current_time`)
//! - `wikipedia`: Wikipedia tools (`get_wiki_summary`, `search_wikipedia`)
//! - `web_search`: DuckDuckGo tool (`search_google_like`)
//! - `smart`: Composite tool (`smart_topic_lookup`)
//! - `registry`: Tool registry for dispatch by name
//! - `config`: Endpoints, timeout and canned tables
//! - `error`: Internal request errors

pub mod config;
pub mod error;
mod executor;
mod http;
pub mod mock;
pub mod registry;
pub mod smart;
pub mod time;
pub mod toolset;
pub mod web_search;
pub mod wikipedia;

pub use smart_lookup_core::agent::{Tool, ToolError, ToolExecutorFn, ToolResult};
pub use smart_lookup_core::status::{Status, StatusRecord};

// Re-export commonly used types
pub use config::{LookupConfig, LookupTables, Profile};
pub use error::LookupError;
pub use mock::{ProfileRecord, ReportRecord};
pub use registry::ToolRegistry;
pub use smart::SmartLookupRecord;
pub use toolset::LookupToolset;
pub use web_search::WebSearchRecord;
pub use wikipedia::{WikiSearchHit, WikiSearchRecord, WikiSummaryRecord};

use std::sync::Arc;

/// Every lookup tool, in the order the agent is configured with them
#[must_use]
pub fn lookup_agent_tools(toolset: &Arc<LookupToolset>) -> Vec<(Tool, ToolExecutorFn)> {
    vec![
        mock::weather_tool(Arc::clone(toolset)),
        time::current_time_tool(Arc::clone(toolset)),
        mock::linkedin_profile_tool(Arc::clone(toolset)),
        wikipedia::wiki_summary_tool(Arc::clone(toolset)),
        wikipedia::wiki_search_tool(Arc::clone(toolset)),
        web_search::web_search_tool(Arc::clone(toolset)),
        smart::smart_lookup_tool(Arc::clone(toolset)),
    ]
}

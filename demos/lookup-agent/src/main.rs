//! Lookup Agent Example
//!
//! Registers every Smart Lookup tool the way an agent runtime would and
//! executes one of them by name.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p lookup-agent -- get_weather "New York"
//! cargo run -p lookup-agent -- search_wikipedia "rust"
//! RUST_LOG=debug cargo run -p lookup-agent -- smart_topic_lookup "Alan Turing"
//! ```
//!
//! With no arguments, runs `smart_topic_lookup` for "Rust programming language".

use serde_json::json;
use smart_lookup_core::agent::AgentConfig;
use smart_lookup_tools::{LookupToolset, ToolRegistry};
use tracing_subscriber::EnvFilter;

const DEFAULT_TOOL: &str = "smart_topic_lookup";
const DEFAULT_ARGUMENT: &str = "Rust programming language";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let tool_name = args.next().unwrap_or_else(|| DEFAULT_TOOL.to_string());
    let argument = args.next().unwrap_or_else(|| DEFAULT_ARGUMENT.to_string());

    let config = AgentConfig::default();
    println!("=== {} ({}) ===", config.name, config.model);
    println!("{}\n", config.description);

    let toolset = LookupToolset::with_defaults()?.shared();
    let lookup_config = toolset.config();
    println!(
        "Wikipedia: {}  DuckDuckGo: {}  timeout: {:?}",
        lookup_config.wikipedia_base_url,
        lookup_config.duckduckgo_base_url,
        lookup_config.timeout
    );
    let registry = ToolRegistry::with_lookup_tools(&toolset);
    println!("Registered tools: {}\n", registry.list_tools().join(", "));

    let Some(tool) = registry.get_tool(&tool_name) else {
        return Err(format!("Unknown tool: {tool_name}").into());
    };
    let param = tool.input_schema["required"][0]
        .as_str()
        .ok_or("tool declares no required parameter")?;

    let input = json!({ param: argument }).to_string();
    tracing::info!(tool = %tool_name, %input, "Invoking tool");

    let output = registry.execute(&tool_name, input).await?;
    let record: serde_json::Value = serde_json::from_str(&output)?;
    println!("{}", serde_json::to_string_pretty(&record)?);

    Ok(())
}

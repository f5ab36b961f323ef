//! # Smart Lookup Core
//!
//! Core types shared by the Smart Lookup toolset and the agent runtimes that
//! host it.
//!
//! ## Core Concepts
//!
//! - **Tool**: Name, description and JSON input schema handed to the model
//! - **Tool executor**: Async function from a JSON input string to a [`agent::ToolResult`]
//! - **Status**: The four-way outcome taxonomy every result record carries
//! - **Agent configuration**: Model, name and instruction of the lookup agent
//!
//! ## Error Model
//!
//! Tool failures are data, not errors. A lookup that cannot produce a usable
//! payload still returns `Ok` with a record whose status is
//! [`status::Status::Error`]. `Err(ToolError)` is reserved for calls the
//! runtime itself got wrong (malformed input JSON, missing parameters,
//! unknown tool names).
//!
//! ## Example
//!
//! ```ignore
//! use smart_lookup_core::status::{Status, StatusRecord};
//!
//! let record = toolset.get_weather("New York");
//! assert_eq!(record.status(), Status::Success);
//! ```

pub mod agent;
pub mod status;

pub use agent::{AgentConfig, Tool, ToolError, ToolExecutorFn, ToolResult};
pub use status::{Status, StatusRecord};

//! Adapter from a single-argument lookup to a boxed tool executor

use serde::Serialize;
use smart_lookup_core::agent::{Tool, ToolError, ToolExecutorFn, ToolResult};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Build a `(Tool, ToolExecutorFn)` pair around a lookup taking one string
///
/// The executor parses the JSON input, pulls out `param`, runs the lookup and
/// returns the record encoded as JSON. Input that is not a JSON object with a
/// string `param` is rejected with `ToolError`; lookup failures are returned
/// inside the record.
pub(crate) fn string_param_tool<F, Fut, R>(
    tool: Tool,
    param: &'static str,
    lookup: F,
) -> (Tool, ToolExecutorFn)
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: Serialize,
{
    let executor = Arc::new(move |input: String| {
        let pending = parse_string_param(&input, param).map(&lookup);

        Box::pin(async move {
            let record = pending?.await;
            serde_json::to_string(&record)
                .map_err(|e| ToolError::new(format!("Failed to encode result: {e}")))
        }) as Pin<Box<dyn Future<Output = ToolResult> + Send>>
    }) as ToolExecutorFn;

    (tool, executor)
}

fn parse_string_param(input: &str, param: &str) -> Result<String, ToolError> {
    let parsed: serde_json::Value = serde_json::from_str(input)
        .map_err(|e| ToolError::new(format!("Invalid input JSON: {e}")))?;

    parsed[param]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ToolError::new(format!("Missing '{param}' field")))
}

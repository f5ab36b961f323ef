//! General web search backed by the DuckDuckGo Instant Answer API

use crate::error::LookupError;
use crate::executor::string_param_tool;
use crate::toolset::LookupToolset;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use smart_lookup_core::agent::{Tool, ToolExecutorFn};
use smart_lookup_core::status::{Status, StatusRecord};
use std::sync::Arc;

/// Maximum number of related topics inspected for a partial result
pub const RELATED_TOPICS_LIMIT: usize = 5;

/// Result of a web search
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WebSearchRecord {
    /// A direct abstract was available
    Success {
        /// Always `"DuckDuckGo"`
        source: String,
        /// The abstract text
        summary: String,
        /// Source URL of the abstract, possibly empty
        url: String,
    },
    /// No abstract, only related-topic snippets
    Partial {
        /// Explains the degraded result
        message: String,
        /// Up to [`RELATED_TOPICS_LIMIT`] snippets
        related_topics: Vec<String>,
    },
    /// Nothing found, or the request failed
    Error {
        /// Cause of the failure
        error_message: String,
    },
}

impl StatusRecord for WebSearchRecord {
    fn status(&self) -> Status {
        match self {
            Self::Success { .. } => Status::Success,
            Self::Partial { .. } => Status::Partial,
            Self::Error { .. } => Status::Error,
        }
    }
}

/// Instant Answer body; DuckDuckGo sends `null` as freely as it omits keys
#[derive(Debug, Deserialize)]
struct InstantAnswer {
    #[serde(rename = "Abstract", default)]
    abstract_text: Option<String>,
    #[serde(rename = "AbstractURL", default)]
    abstract_url: Option<String>,
    #[serde(rename = "RelatedTopics", default)]
    related_topics: Option<Vec<Value>>,
}

/// Snippet of a related-topic entry
///
/// Entries are either plain topics (with `Text`) or named groups of topics
/// (without). Anything that is not an object carrying a string `Text` is
/// skipped.
fn related_topic_text(topic: &Value) -> Option<String> {
    topic.get("Text")?.as_str().map(str::to_string)
}

impl LookupToolset {
    /// Web search through the DuckDuckGo Instant Answer API
    ///
    /// Prefers the direct abstract; falls back to related-topic snippets.
    pub async fn search_google_like(&self, query: &str) -> WebSearchRecord {
        let url = format!("{}/", self.config.duckduckgo_base_url);
        let params = [("q", query), ("format", "json"), ("no_redirect", "1")];

        let answer = match self.get_json::<InstantAnswer>(&url, &params).await {
            Ok(answer) => answer,
            Err(LookupError::Status(code)) => {
                return WebSearchRecord::Error {
                    error_message: format!("DuckDuckGo request failed (HTTP {code})."),
                };
            }
            Err(e) => {
                return WebSearchRecord::Error {
                    error_message: format!("Search failed: {e}"),
                };
            }
        };

        let related_topics = answer.related_topics.unwrap_or_default();
        match answer.abstract_text.filter(|text| !text.is_empty()) {
            Some(summary) => WebSearchRecord::Success {
                source: "DuckDuckGo".to_string(),
                summary,
                url: answer.abstract_url.unwrap_or_default(),
            },
            None if !related_topics.is_empty() => WebSearchRecord::Partial {
                message: "No summary available, but related topics found.".to_string(),
                related_topics: related_topics
                    .iter()
                    .take(RELATED_TOPICS_LIMIT)
                    .filter_map(related_topic_text)
                    .collect(),
            },
            None => WebSearchRecord::Error {
                error_message: "No results found.".to_string(),
            },
        }
    }
}

/// Create the `search_google_like` tool
///
/// Returns JSON:
/// ```json
/// {
///   "status": "success",
///   "source": "DuckDuckGo",
///   "summary": "Rust is a general-purpose programming language ...",
///   "url": "https://en.wikipedia.org/wiki/Rust_(programming_language)"
/// }
/// ```
///
/// Without an abstract, `"status": "partial"` carries `related_topics`.
#[must_use]
pub fn web_search_tool(toolset: Arc<LookupToolset>) -> (Tool, ToolExecutorFn) {
    let tool = Tool::single_string_param(
        "search_google_like",
        "Performs a general web search using the DuckDuckGo Instant Answer API",
        "query",
        "The search term",
    );

    string_param_tool(tool, "query", move |query| {
        let toolset = Arc::clone(&toolset);
        async move { toolset.search_google_like(&query).await }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_related_topic_text_skips_non_topics() {
        assert_eq!(
            related_topic_text(&json!({ "Text": "Topic 1" })).as_deref(),
            Some("Topic 1")
        );
        assert_eq!(related_topic_text(&json!({ "Name": "Group", "Topics": [] })), None);
        assert_eq!(related_topic_text(&json!({ "Text": null })), None);
        assert_eq!(related_topic_text(&json!("bare string")), None);
        assert_eq!(related_topic_text(&json!(42)), None);
    }
}

//! Composite lookup: web search followed by a Wikipedia search and summary
//!
//! The steps run strictly in sequence and are independent of each other:
//!
//! 1. Web search with the raw query. Only a `success` contributes (its
//!    summary); anything else is logged and ignored.
//! 2. Wikipedia title search with the same raw query.
//! 3. On a hit, the first-ranked title is summarized.
//!
//! The first title is taken in the search endpoint's own rank order. There is
//! no re-ranking or tie-breaking here.

use crate::executor::string_param_tool;
use crate::toolset::LookupToolset;
use crate::web_search::WebSearchRecord;
use crate::wikipedia::{WikiSearchRecord, WikiSummaryRecord};
use serde::{Deserialize, Serialize};
use smart_lookup_core::agent::{Tool, ToolExecutorFn};
use smart_lookup_core::status::{Status, StatusRecord};
use std::sync::Arc;
use tracing::{info, warn};

/// Result of the composite lookup
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SmartLookupRecord {
    /// Wikipedia search found a topic
    Success {
        /// Web abstract, when the web search succeeded
        source_summary: Option<String>,
        /// First-ranked Wikipedia title
        wikipedia_topic: String,
        /// Article summary, when the summary lookup succeeded
        wikipedia_summary: Option<String>,
        /// Article (or disambiguation page) URL, when the summary lookup returned one
        wiki_url: Option<String>,
    },
    /// Wikipedia search found nothing
    Error {
        /// Why nothing was found
        error_message: String,
        /// Web abstract, when the web search succeeded
        source_summary: Option<String>,
        /// The query as given
        search_query_used: String,
    },
}

impl StatusRecord for SmartLookupRecord {
    fn status(&self) -> Status {
        match self {
            Self::Success { .. } => Status::Success,
            Self::Error { .. } => Status::Error,
        }
    }
}

impl LookupToolset {
    /// Combined web and Wikipedia lookup for people, companies and concepts
    pub async fn smart_topic_lookup(&self, query: &str) -> SmartLookupRecord {
        info!(query, "Performing web search");
        let source_summary = match self.search_google_like(query).await {
            WebSearchRecord::Success { summary, .. } => Some(summary),
            WebSearchRecord::Partial { .. } => {
                warn!(query, "Web summary not found, using query directly for Wikipedia");
                None
            }
            WebSearchRecord::Error { error_message } => {
                warn!(query, error = %error_message, "Web search failed, continuing to Wikipedia");
                None
            }
        };

        let top_topic = match self.search_wikipedia(query).await {
            WikiSearchRecord::Success { results, .. } => {
                results.into_iter().next().map(|hit| hit.title)
            }
            WikiSearchRecord::Error { .. } => None,
        };

        let Some(wikipedia_topic) = top_topic else {
            return SmartLookupRecord::Error {
                error_message: "Couldn't find relevant information on Wikipedia or web."
                    .to_string(),
                source_summary,
                search_query_used: query.to_string(),
            };
        };

        info!(topic = %wikipedia_topic, "Found Wikipedia topic");
        let (wikipedia_summary, wiki_url) = match self.get_wiki_summary(&wikipedia_topic).await {
            WikiSummaryRecord::Success { summary, url, .. } => (Some(summary), Some(url)),
            WikiSummaryRecord::Warning { url, .. } => (None, Some(url)),
            WikiSummaryRecord::Error { .. } => (None, None),
        };

        SmartLookupRecord::Success {
            source_summary,
            wikipedia_topic,
            wikipedia_summary,
            wiki_url,
        }
    }
}

/// Create the `smart_topic_lookup` tool
///
/// Returns JSON:
/// ```json
/// {
///   "status": "success",
///   "source_summary": "Rust is a general-purpose programming language ...",
///   "wikipedia_topic": "Rust (programming language)",
///   "wikipedia_summary": "Rust is a ...",
///   "wiki_url": "https://en.wikipedia.org/wiki/Rust_(programming_language)"
/// }
/// ```
#[must_use]
pub fn smart_lookup_tool(toolset: Arc<LookupToolset>) -> (Tool, ToolExecutorFn) {
    let tool = Tool::single_string_param(
        "smart_topic_lookup",
        "Smart topic lookup that combines web search and Wikipedia lookup. \
         Works for people, companies, and concepts.",
        "query",
        "The person, company, or concept to look up",
    );

    string_param_tool(tool, "query", move |query| {
        let toolset = Arc::clone(&toolset);
        async move { toolset.smart_topic_lookup(&query).await }
    })
}

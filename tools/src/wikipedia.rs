//! Wikipedia lookups: page summary and title search
//!
//! Provides two tools:
//! - `get_wiki_summary`: REST summary of one article, with disambiguation detection
//! - `search_wikipedia`: title search returning up to five candidate articles

use crate::error::LookupError;
use crate::executor::string_param_tool;
use crate::toolset::LookupToolset;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use smart_lookup_core::agent::{Tool, ToolExecutorFn};
use smart_lookup_core::status::{Status, StatusRecord};
use std::sync::Arc;

/// Maximum number of title-search hits requested and returned
pub const SEARCH_LIMIT: usize = 5;

/// Result of a page summary lookup
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WikiSummaryRecord {
    /// Regular article
    Success {
        /// Article title
        topic: String,
        /// Plain-text extract
        summary: String,
        /// Desktop URL of the article
        url: String,
    },
    /// The topic resolved to a disambiguation page
    Warning {
        /// Advice to be more specific
        message: String,
        /// Desktop URL of the disambiguation page
        url: String,
    },
    /// No article, or the request failed
    Error {
        /// Cause of the failure
        error_message: String,
    },
}

impl StatusRecord for WikiSummaryRecord {
    fn status(&self) -> Status {
        match self {
            Self::Success { .. } => Status::Success,
            Self::Warning { .. } => Status::Warning,
            Self::Error { .. } => Status::Error,
        }
    }
}

/// One title-search hit
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WikiSearchHit {
    /// Article title
    pub title: String,
    /// Short description, empty when Wikipedia has none
    pub description: String,
    /// Article URL
    pub url: String,
}

/// Result of a title search
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WikiSearchRecord {
    /// At least one hit, in the endpoint's rank order
    Success {
        /// The query as given
        query: String,
        /// Up to [`SEARCH_LIMIT`] hits
        results: Vec<WikiSearchHit>,
    },
    /// No hits, or the request failed
    Error {
        /// Cause of the failure
        error_message: String,
    },
}

impl StatusRecord for WikiSearchRecord {
    fn status(&self) -> Status {
        match self {
            Self::Success { .. } => Status::Success,
            Self::Error { .. } => Status::Error,
        }
    }
}

#[derive(Debug, Deserialize)]
struct PageSummary {
    #[serde(rename = "type")]
    kind: Option<String>,
    title: Option<String>,
    extract: Option<String>,
    content_urls: Option<ContentUrls>,
}

#[derive(Debug, Deserialize)]
struct ContentUrls {
    desktop: Option<PlatformUrls>,
}

#[derive(Debug, Deserialize)]
struct PlatformUrls {
    page: Option<String>,
}

impl PageSummary {
    fn desktop_url(&self) -> String {
        self.content_urls
            .as_ref()
            .and_then(|urls| urls.desktop.as_ref())
            .and_then(|desktop| desktop.page.clone())
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
struct TitleSearch {
    #[serde(default)]
    pages: Vec<SearchPage>,
}

#[derive(Debug, Deserialize)]
struct SearchPage {
    #[serde(default)]
    key: String,
    #[serde(default)]
    title: String,
    description: Option<String>,
}

/// Summary endpoint slug: trimmed, spaces replaced by underscores
fn summary_slug(topic: &str) -> String {
    topic.trim().replace(' ', "_")
}

/// Summary endpoint URL with the slug percent-encoded as a single path segment
fn summary_url(base: &str, topic: &str) -> Result<Url, LookupError> {
    let mut url = Url::parse(base).map_err(|e| LookupError::InvalidUrl(format!("{base}: {e}")))?;
    url.path_segments_mut()
        .map_err(|()| LookupError::InvalidUrl(base.to_string()))?
        .pop_if_empty()
        .extend(["api", "rest_v1", "page", "summary"])
        .push(&summary_slug(topic));
    Ok(url)
}

impl LookupToolset {
    /// Fetch the summary of a Wikipedia article
    pub async fn get_wiki_summary(&self, topic: &str) -> WikiSummaryRecord {
        let page = match summary_url(&self.config.wikipedia_base_url, topic) {
            Ok(url) => self.get_json::<PageSummary>(url.as_str(), &[]).await,
            Err(e) => Err(e),
        };

        match page {
            Ok(page) if page.kind.as_deref() == Some("disambiguation") => {
                WikiSummaryRecord::Warning {
                    message: format!(
                        "'{topic}' is a disambiguation page. Try being more specific."
                    ),
                    url: page.desktop_url(),
                }
            }
            Ok(page) => {
                let url = page.desktop_url();
                WikiSummaryRecord::Success {
                    topic: page.title.unwrap_or_else(|| topic.to_string()),
                    summary: page
                        .extract
                        .unwrap_or_else(|| "No summary available.".to_string()),
                    url,
                }
            }
            Err(LookupError::Status(404)) => WikiSummaryRecord::Error {
                error_message: format!("Wikipedia article not found for '{topic}'."),
            },
            Err(LookupError::Status(code)) => WikiSummaryRecord::Error {
                error_message: format!("Wikipedia request failed (HTTP {code})."),
            },
            Err(e) => WikiSummaryRecord::Error {
                error_message: format!("Request failed: {e}"),
            },
        }
    }

    /// Search Wikipedia article titles
    pub async fn search_wikipedia(&self, query: &str) -> WikiSearchRecord {
        let url = format!(
            "{}/w/rest.php/v1/search/title",
            self.config.wikipedia_base_url
        );
        let limit = SEARCH_LIMIT.to_string();

        match self
            .get_json::<TitleSearch>(&url, &[("q", query), ("limit", limit.as_str())])
            .await
        {
            Ok(search) if search.pages.is_empty() => WikiSearchRecord::Error {
                error_message: format!("No Wikipedia results found for '{query}'."),
            },
            Ok(search) => WikiSearchRecord::Success {
                query: query.to_string(),
                results: search
                    .pages
                    .into_iter()
                    .take(SEARCH_LIMIT)
                    .map(|page| WikiSearchHit {
                        url: format!("{}/wiki/{}", self.config.wikipedia_base_url, page.key),
                        title: page.title,
                        description: page.description.unwrap_or_default(),
                    })
                    .collect(),
            },
            Err(LookupError::Status(code)) => WikiSearchRecord::Error {
                error_message: format!("Search failed (HTTP {code})."),
            },
            Err(e) => WikiSearchRecord::Error {
                error_message: format!("Search request failed: {e}"),
            },
        }
    }
}

/// Create the `get_wiki_summary` tool
///
/// Returns JSON:
/// ```json
/// {
///   "status": "success",
///   "topic": "Machine learning",
///   "summary": "Machine learning (ML) is a field of study ...",
///   "url": "https://en.wikipedia.org/wiki/Machine_learning"
/// }
/// ```
///
/// Disambiguation pages yield `"status": "warning"` with a `message` and `url`.
#[must_use]
pub fn wiki_summary_tool(toolset: Arc<LookupToolset>) -> (Tool, ToolExecutorFn) {
    let tool = Tool::single_string_param(
        "get_wiki_summary",
        "Fetches a clean summary for the given topic from Wikipedia",
        "topic",
        "The topic to look up (e.g. 'machine learning')",
    );

    string_param_tool(tool, "topic", move |topic| {
        let toolset = Arc::clone(&toolset);
        async move { toolset.get_wiki_summary(&topic).await }
    })
}

/// Create the `search_wikipedia` tool
///
/// Returns JSON:
/// ```json
/// {
///   "status": "success",
///   "query": "rust",
///   "results": [
///     {"title": "Rust", "description": "Iron oxide", "url": "https://en.wikipedia.org/wiki/Rust"}
///   ]
/// }
/// ```
#[must_use]
pub fn wiki_search_tool(toolset: Arc<LookupToolset>) -> (Tool, ToolExecutorFn) {
    let tool = Tool::single_string_param(
        "search_wikipedia",
        "Searches Wikipedia for topics, people, or anything matching the query",
        "query",
        "The search term or partial keyword",
    );

    string_param_tool(tool, "query", move |query| {
        let toolset = Arc::clone(&toolset);
        async move { toolset.search_wikipedia(&query).await }
    })
}

//! Table-backed lookups: weather reports and profile search
//!
//! These tools answer from the canned [`LookupTables`](crate::config::LookupTables)
//! and never touch the network. Useful for:
//! - Exercising agent tool selection without external dependencies
//! - Demonstrating the record shapes the networked tools share

use crate::config::Profile;
use crate::executor::string_param_tool;
use crate::toolset::LookupToolset;
use serde::{Deserialize, Serialize};
use smart_lookup_core::agent::{Tool, ToolExecutorFn};
use smart_lookup_core::status::{Status, StatusRecord};
use std::sync::Arc;

/// Result of a report-style lookup (weather, current time)
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReportRecord {
    /// A report is available
    Success {
        /// Human-readable report
        report: String,
    },
    /// Nothing known about the city
    Error {
        /// Why no report is available
        error_message: String,
    },
}

impl StatusRecord for ReportRecord {
    fn status(&self) -> Status {
        match self {
            Self::Success { .. } => Status::Success,
            Self::Error { .. } => Status::Error,
        }
    }
}

/// Result of a profile search
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProfileRecord {
    /// Matching profile
    Success {
        /// The profile summary
        profile: Profile,
    },
    /// No profile under that name
    Error {
        /// Why no profile was returned
        error_message: String,
    },
}

impl StatusRecord for ProfileRecord {
    fn status(&self) -> Status {
        match self {
            Self::Success { .. } => Status::Success,
            Self::Error { .. } => Status::Error,
        }
    }
}

impl LookupToolset {
    /// Weather report for a city (case-insensitive)
    #[must_use]
    pub fn get_weather(&self, city: &str) -> ReportRecord {
        match self.config.tables.weather_for(city) {
            Some(report) => ReportRecord::Success {
                report: report.to_string(),
            },
            None => ReportRecord::Error {
                error_message: format!("Weather information for '{city}' is not available."),
            },
        }
    }

    /// Profile summary for a person's full name (case-insensitive)
    #[must_use]
    pub fn search_linkedin_profile(&self, name: &str) -> ProfileRecord {
        match self.config.tables.profile_for(name) {
            Some(profile) => ProfileRecord::Success {
                profile: profile.clone(),
            },
            None => ProfileRecord::Error {
                error_message: format!("No LinkedIn profile found for '{name}'."),
            },
        }
    }
}

/// Create the `get_weather` tool
///
/// Returns JSON:
/// ```json
/// {
///   "status": "success",
///   "report": "The weather in New York is sunny ..."
/// }
/// ```
#[must_use]
pub fn weather_tool(toolset: Arc<LookupToolset>) -> (Tool, ToolExecutorFn) {
    let tool = Tool::single_string_param(
        "get_weather",
        "Retrieves the current weather report for a specified city",
        "city",
        "The name of the city for which to retrieve the weather report",
    );

    string_param_tool(tool, "city", move |city| {
        let toolset = Arc::clone(&toolset);
        async move { toolset.get_weather(&city) }
    })
}

/// Create the `search_linkedin_profile` tool
///
/// Returns JSON:
/// ```json
/// {
///   "status": "success",
///   "profile": {
///     "name": "John Doe",
///     "title": "Software Engineer at Google",
///     "location": "San Francisco Bay Area",
///     "linkedin_url": "https://www.linkedin.com/in/johndoe"
///   }
/// }
/// ```
#[must_use]
pub fn linkedin_profile_tool(toolset: Arc<LookupToolset>) -> (Tool, ToolExecutorFn) {
    let tool = Tool::single_string_param(
        "search_linkedin_profile",
        "Searches for a person on LinkedIn and returns their profile summary (mock data)",
        "name",
        "The full name of the person to search for",
    );

    string_param_tool(tool, "name", move |name| {
        let toolset = Arc::clone(&toolset);
        async move { toolset.search_linkedin_profile(&name) }
    })
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::config::{LookupConfig, LookupTables};
    use serde_json::json;

    fn toolset() -> LookupToolset {
        LookupToolset::with_defaults().expect("client builds")
    }

    #[test]
    fn test_weather_new_york_any_case() {
        let toolset = toolset();

        for city in ["new york", "New York", "NEW YORK", "nEw YoRk"] {
            let record = toolset.get_weather(city);
            assert_eq!(
                record,
                ReportRecord::Success {
                    report: "The weather in New York is sunny with a temperature of 25 degrees \
                             Celsius (77 degrees Fahrenheit)."
                        .to_string()
                }
            );
        }
    }

    #[test]
    fn test_weather_unknown_city() {
        let record = toolset().get_weather("London");

        assert_eq!(record.status(), Status::Error);
        assert_eq!(
            record,
            ReportRecord::Error {
                error_message: "Weather information for 'London' is not available.".to_string()
            }
        );
    }

    #[test]
    fn test_profile_lookup_hits() {
        let toolset = toolset();

        let ProfileRecord::Success { profile } = toolset.search_linkedin_profile("JOHN DOE") else {
            panic!("expected a profile for John Doe");
        };
        assert_eq!(profile.title, "Software Engineer at Google");
        assert_eq!(profile.linkedin_url, "https://www.linkedin.com/in/johndoe");

        let ProfileRecord::Success { profile } = toolset.search_linkedin_profile("jane smith")
        else {
            panic!("expected a profile for Jane Smith");
        };
        assert_eq!(profile.name, "Jane Smith");
        assert_eq!(profile.location, "Seattle, WA");
    }

    #[test]
    fn test_profile_lookup_miss() {
        let record = toolset().search_linkedin_profile("Ada Lovelace");

        assert_eq!(
            record,
            ProfileRecord::Error {
                error_message: "No LinkedIn profile found for 'Ada Lovelace'.".to_string()
            }
        );
    }

    #[test]
    fn test_injected_weather_table() {
        let tables = LookupTables::empty().with_weather("Oslo", "Snowing in Oslo.");
        let toolset =
            LookupToolset::new(LookupConfig::default().with_tables(tables)).expect("client builds");

        assert!(toolset.get_weather("oslo").is_success());
        assert!(!toolset.get_weather("new york").is_success());
    }

    #[test]
    fn test_record_wire_shape() {
        let record = toolset().search_linkedin_profile("Jane Smith");

        let encoded = serde_json::to_value(&record).expect("serializes");
        assert_eq!(encoded["status"], "success");
        assert_eq!(encoded["profile"]["title"], "Product Manager at Amazon");

        let miss = serde_json::to_value(toolset().get_weather("Rome")).expect("serializes");
        assert_eq!(
            miss,
            json!({
                "status": "error",
                "error_message": "Weather information for 'Rome' is not available."
            })
        );
    }

    #[test]
    fn test_weather_tool_schema() {
        let (tool, _executor) = weather_tool(toolset().shared());
        assert_eq!(tool.name, "get_weather");
        assert_eq!(tool.input_schema["required"], json!(["city"]));
    }

    #[test]
    fn test_weather_tool_executes() {
        let (_tool, executor) = weather_tool(toolset().shared());

        let output = tokio_test::block_on(executor(json!({ "city": "New York" }).to_string()))
            .expect("should succeed");

        let output: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
        assert_eq!(output["status"], "success");
        assert!(output["report"].as_str().expect("is string").contains("sunny"));
    }

    #[tokio::test]
    async fn test_linkedin_profile_tool_executes() {
        let (tool, executor) = linkedin_profile_tool(toolset().shared());
        assert_eq!(tool.name, "search_linkedin_profile");

        let output = executor(json!({ "name": "Nobody" }).to_string())
            .await
            .expect("should succeed");

        let output: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
        assert_eq!(output["status"], "error");
        assert!(output["error_message"].is_string());
    }
}

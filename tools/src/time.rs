//! Current time in a known city

use crate::executor::string_param_tool;
use crate::mock::ReportRecord;
use crate::toolset::LookupToolset;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use smart_lookup_core::agent::{Tool, ToolExecutorFn};
use std::sync::Arc;

/// `strftime` layout of the time report, e.g. `2025-01-15 10:30:00 EST-0500`
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z%z";

impl LookupToolset {
    /// Current time in a city whose timezone is in the table
    #[must_use]
    pub fn get_current_time(&self, city: &str) -> ReportRecord {
        self.time_report_at(city, Utc::now())
    }

    /// Time report for `city` at a given instant
    #[must_use]
    pub fn time_report_at(&self, city: &str, now: DateTime<Utc>) -> ReportRecord {
        let Some(tz_identifier) = self.config.tables.timezone_for(city) else {
            return ReportRecord::Error {
                error_message: format!("Sorry, I don't have timezone information for {city}."),
            };
        };

        let Ok(tz) = tz_identifier.parse::<Tz>() else {
            return ReportRecord::Error {
                error_message: format!("Invalid timezone '{tz_identifier}' configured for {city}."),
            };
        };

        let local = now.with_timezone(&tz);
        ReportRecord::Success {
            report: format!("The current time in {city} is {}", local.format(TIME_FORMAT)),
        }
    }
}

/// Create the `get_current_time` tool
///
/// Returns JSON:
/// ```json
/// {
///   "status": "success",
///   "report": "The current time in New York is 2025-01-15 10:30:00 EST-0500"
/// }
/// ```
#[must_use]
pub fn current_time_tool(toolset: Arc<LookupToolset>) -> (Tool, ToolExecutorFn) {
    let tool = Tool::single_string_param(
        "get_current_time",
        "Returns the current time in a specified city",
        "city",
        "The name of the city for which to retrieve the current time",
    );

    string_param_tool(tool, "city", move |city| {
        let toolset = Arc::clone(&toolset);
        async move { toolset.get_current_time(&city) }
    })
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::config::{LookupConfig, LookupTables};
    use chrono::TimeZone;
    use serde_json::json;
    use smart_lookup_core::status::{Status, StatusRecord};

    fn toolset() -> LookupToolset {
        LookupToolset::with_defaults().expect("client builds")
    }

    #[test]
    fn test_time_report_winter() {
        let now = Utc.with_ymd_and_hms(2025, 1, 15, 15, 30, 0).single().expect("valid instant");

        let record = toolset().time_report_at("New York", now);

        assert_eq!(
            record,
            ReportRecord::Success {
                report: "The current time in New York is 2025-01-15 10:30:00 EST-0500".to_string()
            }
        );
    }

    #[test]
    fn test_time_report_daylight_saving() {
        let now = Utc.with_ymd_and_hms(2025, 7, 4, 16, 0, 0).single().expect("valid instant");

        let record = toolset().time_report_at("new york", now);

        assert_eq!(
            record,
            ReportRecord::Success {
                report: "The current time in new york is 2025-07-04 12:00:00 EDT-0400".to_string()
            }
        );
    }

    #[test]
    fn test_current_time_unknown_city() {
        let record = toolset().get_current_time("Atlantis");

        assert_eq!(
            record,
            ReportRecord::Error {
                error_message: "Sorry, I don't have timezone information for Atlantis.".to_string()
            }
        );
    }

    #[test]
    fn test_current_time_invalid_configured_timezone() {
        let tables = LookupTables::empty().with_timezone("Nowhere", "Invalid/Timezone");
        let toolset =
            LookupToolset::new(LookupConfig::default().with_tables(tables)).expect("client builds");

        let record = toolset.get_current_time("Nowhere");

        assert_eq!(record.status(), Status::Error);
    }

    #[test]
    fn test_injected_timezone() {
        let tables = LookupTables::empty().with_timezone("Tokyo", "Asia/Tokyo");
        let toolset =
            LookupToolset::new(LookupConfig::default().with_tables(tables)).expect("client builds");
        let now = Utc.with_ymd_and_hms(2025, 1, 15, 15, 30, 0).single().expect("valid instant");

        let record = toolset.time_report_at("TOKYO", now);

        assert_eq!(
            record,
            ReportRecord::Success {
                report: "The current time in TOKYO is 2025-01-16 00:30:00 JST+0900".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_current_time_tool() {
        let (tool, executor) = current_time_tool(toolset().shared());
        assert_eq!(tool.name, "get_current_time");

        let output = executor(json!({ "city": "NEW YORK" }).to_string())
            .await
            .expect("should succeed");

        let output: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
        assert_eq!(output["status"], "success");
        assert!(
            output["report"]
                .as_str()
                .expect("is string")
                .starts_with("The current time in NEW YORK is ")
        );
    }
}

//! Lookup configuration: endpoints, request deadline and the canned tables
//!
//! Everything the toolset reads at call time lives here, so tests can point
//! the HTTP lookups at a mock server and swap the fixed tables.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Default Wikipedia origin
pub const DEFAULT_WIKIPEDIA_BASE_URL: &str = "https://en.wikipedia.org";

/// Default DuckDuckGo Instant Answer origin
pub const DEFAULT_DUCKDUCKGO_BASE_URL: &str = "https://api.duckduckgo.com";

/// Per-request deadline for every networked lookup
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// A person's profile summary
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    /// Full name
    pub name: String,
    /// Current job title
    pub title: String,
    /// Location
    pub location: String,
    /// Profile URL
    pub linkedin_url: String,
}

/// Fixed tables backing the weather, time and profile lookups
///
/// Keys are stored lower-cased; lookups lower-case their input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupTables {
    /// City → weather report
    pub weather: HashMap<String, String>,
    /// City → IANA timezone identifier
    pub timezones: HashMap<String, String>,
    /// Person name → profile
    pub profiles: HashMap<String, Profile>,
}

impl LookupTables {
    /// Tables with no entries at all
    #[must_use]
    pub fn empty() -> Self {
        Self {
            weather: HashMap::new(),
            timezones: HashMap::new(),
            profiles: HashMap::new(),
        }
    }

    /// Builder: Add or replace a weather report
    #[must_use]
    pub fn with_weather(mut self, city: &str, report: impl Into<String>) -> Self {
        self.weather.insert(city.to_lowercase(), report.into());
        self
    }

    /// Builder: Add or replace a city's timezone
    #[must_use]
    pub fn with_timezone(mut self, city: &str, tz_identifier: impl Into<String>) -> Self {
        self.timezones.insert(city.to_lowercase(), tz_identifier.into());
        self
    }

    /// Builder: Add or replace a profile, keyed by its name
    #[must_use]
    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profiles.insert(profile.name.to_lowercase(), profile);
        self
    }

    pub(crate) fn weather_for(&self, city: &str) -> Option<&str> {
        self.weather.get(&city.to_lowercase()).map(String::as_str)
    }

    pub(crate) fn timezone_for(&self, city: &str) -> Option<&str> {
        self.timezones.get(&city.to_lowercase()).map(String::as_str)
    }

    pub(crate) fn profile_for(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(&name.to_lowercase())
    }
}

impl Default for LookupTables {
    fn default() -> Self {
        Self::empty()
            .with_weather(
                "new york",
                "The weather in New York is sunny with a temperature of 25 degrees \
                 Celsius (77 degrees Fahrenheit).",
            )
            .with_timezone("new york", "America/New_York")
            .with_profile(Profile {
                name: "John Doe".to_string(),
                title: "Software Engineer at Google".to_string(),
                location: "San Francisco Bay Area".to_string(),
                linkedin_url: "https://www.linkedin.com/in/johndoe".to_string(),
            })
            .with_profile(Profile {
                name: "Jane Smith".to_string(),
                title: "Product Manager at Amazon".to_string(),
                location: "Seattle, WA".to_string(),
                linkedin_url: "https://www.linkedin.com/in/janesmith".to_string(),
            })
    }
}

/// Toolset configuration
#[derive(Clone, Debug)]
pub struct LookupConfig {
    /// Wikipedia origin, without trailing slash
    pub wikipedia_base_url: String,
    /// DuckDuckGo origin, without trailing slash
    pub duckduckgo_base_url: String,
    /// Deadline applied to each outbound request
    pub timeout: Duration,
    /// Canned tables
    pub tables: LookupTables,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            wikipedia_base_url: DEFAULT_WIKIPEDIA_BASE_URL.to_string(),
            duckduckgo_base_url: DEFAULT_DUCKDUCKGO_BASE_URL.to_string(),
            timeout: DEFAULT_REQUEST_TIMEOUT,
            tables: LookupTables::default(),
        }
    }
}

impl LookupConfig {
    /// Builder: Set the Wikipedia origin
    #[must_use]
    pub fn with_wikipedia_base_url(mut self, url: impl Into<String>) -> Self {
        self.wikipedia_base_url = trim_origin(url.into());
        self
    }

    /// Builder: Set the DuckDuckGo origin
    #[must_use]
    pub fn with_duckduckgo_base_url(mut self, url: impl Into<String>) -> Self {
        self.duckduckgo_base_url = trim_origin(url.into());
        self
    }

    /// Builder: Set the per-request timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builder: Replace the canned tables
    #[must_use]
    pub fn with_tables(mut self, tables: LookupTables) -> Self {
        self.tables = tables;
        self
    }
}

fn trim_origin(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

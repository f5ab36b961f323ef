//! The lookup toolset: configuration plus a shared HTTP client
//!
//! Each lookup is an inherent method on [`LookupToolset`], implemented in the
//! module of its concern (`mock`, `time`, `wikipedia`, `web_search`, `smart`).
//! Methods never fail: every outcome is a status-tagged record.

use crate::config::LookupConfig;
use crate::error::LookupError;
use std::sync::Arc;

/// Sent with every request; Wikimedia rejects anonymous clients
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Stateless collection of lookup functions
///
/// Holds no per-call state. The inner `reqwest::Client` is built once with
/// the configured timeout and reused by every networked lookup.
///
/// ## Example
///
/// ```ignore
/// use smart_lookup_tools::{LookupConfig, LookupToolset};
///
/// let toolset = LookupToolset::new(LookupConfig::default())?;
/// let record = toolset.search_wikipedia("rust").await;
/// ```
#[derive(Clone, Debug)]
pub struct LookupToolset {
    pub(crate) client: reqwest::Client,
    pub(crate) config: LookupConfig,
}

impl LookupToolset {
    /// Create a toolset from a configuration
    ///
    /// # Errors
    ///
    /// Returns `LookupError::Client` if the HTTP client cannot be built
    /// (e.g. the TLS backend fails to initialize).
    pub fn new(config: LookupConfig) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(LookupError::Client)?;

        Ok(Self { client, config })
    }

    /// Create a toolset with the default endpoints and tables
    ///
    /// # Errors
    ///
    /// Returns `LookupError::Client` if the HTTP client cannot be built.
    pub fn with_defaults() -> Result<Self, LookupError> {
        Self::new(LookupConfig::default())
    }

    /// Wrap the toolset for sharing between tool executors
    #[must_use]
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &LookupConfig {
        &self.config
    }
}

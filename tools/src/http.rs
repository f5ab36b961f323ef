//! Outbound JSON GET shared by the networked lookups

use crate::error::LookupError;
use crate::toolset::LookupToolset;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

impl LookupToolset {
    /// Issue one GET and decode a 200 response body as JSON
    ///
    /// Any status other than 200 is reported as `LookupError::Status` without
    /// reading the body. No retry.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, LookupError> {
        debug!(url, ?query, "Sending lookup request");

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                warn!(url, error = %e, "Lookup request failed");
                LookupError::Transport(e)
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(url, status = status.as_u16(), "Lookup endpoint returned non-200 status");
            return Err(LookupError::Status(status.as_u16()));
        }

        response.json::<T>().await.map_err(|e| {
            warn!(url, error = %e, "Failed to decode lookup response");
            LookupError::Transport(e)
        })
    }
}

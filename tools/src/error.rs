//! Errors raised inside the lookups before they are folded into records

use std::error::Error as StdError;
use thiserror::Error;

/// Failure of an outbound lookup request
///
/// Never crosses the tool boundary: each lookup converts it into the `Error`
/// variant of its own record, embedding the rendered message.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The HTTP client could not be built
    #[error("Failed to build HTTP client: {}", render_chain(.0))]
    Client(#[source] reqwest::Error),

    /// Transport, timeout or body decoding failure
    #[error("{}", render_chain(.0))]
    Transport(#[source] reqwest::Error),

    /// A configured base URL cannot carry the request path
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    /// The endpoint answered with a status other than 200
    #[error("HTTP {0}")]
    Status(u16),
}

/// Render an error followed by its sources, separated by `": "`
///
/// reqwest keeps the interesting part (e.g. "operation timed out") in the
/// source chain rather than in its own `Display`.
fn render_chain(error: &(dyn StdError + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}

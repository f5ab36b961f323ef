//! Outcome taxonomy shared by every result record

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status carried by every result record
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Payload is valid
    Success,
    /// No usable payload; the record explains why
    Error,
    /// Payload is valid but needs attention (e.g. disambiguation)
    Warning,
    /// Degraded payload
    Partial,
}

impl Status {
    /// Wire name of the status
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Partial => "partial",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Implemented by every status-tagged result record
pub trait StatusRecord {
    /// The record's status
    fn status(&self) -> Status;

    /// Shorthand for `status() == Status::Success`
    fn is_success(&self) -> bool {
        self.status() == Status::Success
    }
}

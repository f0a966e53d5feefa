use platform::{Error, NO_RESPONSE};
use thiserror::Error;

use crate::model::TripRecord;

/// Result of a single active trip request.
pub type Outcome = Result<TripRecord, Failure>;

/// Caller-facing failure: the HTTP status of the response, or `0` when no
/// response was received.
///
/// Transport, status, content type and decoding errors all collapse into
/// this value.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("active trip request failed with status {0}")]
pub struct Failure(u16);

impl Failure {
    /// No response was received from the backend.
    pub const NO_RESPONSE: Self = Self(NO_RESPONSE);

    /// Wrap a raw status value.
    #[must_use]
    pub const fn new(status: u16) -> Self {
        Self(status)
    }

    /// Returns the raw status value.
    #[must_use]
    pub const fn status(self) -> u16 {
        self.0
    }

    #[must_use]
    pub const fn is_no_response(self) -> bool {
        self.0 == NO_RESPONSE
    }
}

impl From<&Error> for Failure {
    fn from(err: &Error) -> Self {
        Self(err.status())
    }
}

impl From<Error> for Failure {
    fn from(err: Error) -> Self {
        Self::from(&err)
    }
}

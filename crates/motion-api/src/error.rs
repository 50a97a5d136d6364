//! Error types for API calls and submissions.

use motion_model::{CriteriaField, GroupRole};
use thiserror::Error;

use crate::client::Endpoint;

/// Errors from a single API call.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// The HTTP client could not be constructed.
    #[error("failed to create HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    /// The API key cannot be sent as a header value.
    #[error("API key contains characters not allowed in an HTTP header")]
    InvalidApiKey,

    /// Network or connection failure.
    #[error("request to {endpoint} failed")]
    Transport {
        endpoint: Endpoint,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("{endpoint} returned HTTP {status}: {body}")]
    Api {
        endpoint: Endpoint,
        status: u16,
        /// Response body, verbatim.
        body: String,
    },

    /// A successful response did not have the expected shape.
    #[error("unexpected response from {endpoint}: {reason}")]
    ResponseShape {
        endpoint: Endpoint,
        reason: String,
        /// Response body, verbatim.
        body: String,
    },
}

impl ClientError {
    /// HTTP status of the failed call, when the server answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Response body of the failed call, when one was received.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Api { body, .. } | Self::ResponseShape { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Errors from the segment-and-analysis submission flow.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Primary and comparison criteria cannot be compared.
    #[error("segments are not comparable: {field} differs (primary {primary}, comparison {comparison})")]
    IncomparableSegments {
        field: CriteriaField,
        primary: String,
        comparison: String,
    },

    /// Creating one of the two segments failed.
    #[error("failed to create {role} segment")]
    SegmentCreation {
        role: GroupRole,
        #[source]
        source: ClientError,
    },

    /// Creating the requested analysis failed.
    #[error("failed to create requested analysis")]
    AnalysisCreation {
        #[source]
        source: ClientError,
    },
}

impl SubmitError {
    /// The underlying API error, if the failure came from a call.
    #[must_use]
    pub fn client_error(&self) -> Option<&ClientError> {
        match self {
            Self::SegmentCreation { source, .. } | Self::AnalysisCreation { source } => {
                Some(source)
            }
            Self::IncomparableSegments { .. } => None,
        }
    }
}

/// Result type alias for API calls.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_keeps_status_and_body() {
        let err = ClientError::Api {
            endpoint: Endpoint::Segments,
            status: 422,
            body: r#"{"detail":"bad ids"}"#.to_string(),
        };
        assert_eq!(err.status(), Some(422));
        assert_eq!(err.body(), Some(r#"{"detail":"bad ids"}"#));
        assert_eq!(
            err.to_string(),
            r#"/player_group_segments returned HTTP 422: {"detail":"bad ids"}"#
        );
    }

    #[test]
    fn test_submit_error_display() {
        let err = SubmitError::SegmentCreation {
            role: GroupRole::Comparison,
            source: ClientError::InvalidApiKey,
        };
        assert!(err.to_string().starts_with("failed to create comparison segment"));
        assert!(err.client_error().is_some());
        assert_eq!(err.client_error().and_then(ClientError::status), None);
    }
}

//! Error type for UI requests.

use thiserror::Error;

/// Failure of a single API request issued by the UI.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, CORS).
    #[error("request to {url} failed: {message}")]
    Network {
        /// Requested URL.
        url: String,
        /// Transport error detail.
        message: String,
    },
    /// The server answered with a non-success status.
    #[error("request to {url} returned status {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },
    /// The body could not be decoded into the expected shape.
    #[error("failed to decode response from {url}: {message}")]
    Decode {
        /// Requested URL.
        url: String,
        /// Decoder error detail.
        message: String,
    },
}

impl ApiError {
    /// HTTP status when the server responded.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network { .. } | Self::Decode { .. } => None,
        }
    }

    /// Short message suitable for inline display.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network { .. } => "Could not reach the server.".to_string(),
            Self::Status { status: 404, .. } => "Not found.".to_string(),
            Self::Status { status, .. } => format!("Server responded with status {status}."),
            Self::Decode { .. } => "Received an unexpected response.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_exposed_only_for_http_failures() {
        let status = ApiError::Status {
            url: "u".into(),
            status: 503,
        };
        let network = ApiError::Network {
            url: "u".into(),
            message: "offline".into(),
        };
        assert_eq!(status.status(), Some(503));
        assert_eq!(network.status(), None);
    }

    #[test]
    fn user_messages_hide_transport_detail() {
        let not_found = ApiError::Status {
            url: "https://api/users/9".into(),
            status: 404,
        };
        let decode = ApiError::Decode {
            url: "https://api/posts".into(),
            message: "expected a sequence".into(),
        };
        assert_eq!(not_found.user_message(), "Not found.");
        assert!(!decode.user_message().contains("sequence"));
        assert!(decode.to_string().contains("expected a sequence"));
    }
}

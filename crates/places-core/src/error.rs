use thiserror::Error;

/// Main error type for the Places bindings
#[derive(Error, Debug)]
pub enum PlacesError {
    /// Local argument validation failed before any request was sent
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Network-related errors
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The API key was rejected (HTTP 401/403 or `REQUEST_DENIED`)
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// Quota or rate limit exhausted (HTTP 429 or `OVER_QUERY_LIMIT`)
    #[error("Rate limit exceeded: {message}")]
    RateLimit { message: String },

    /// Non-success HTTP status or API-level error status in the envelope
    #[error("API error ({status}): {message}")]
    Api { status: String, message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Request timed out
    #[error("Request timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PlacesError {
    /// Create an invalid-argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
            source: None,
        }
    }

    /// Create a network error with source
    pub fn network_with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Network {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create an authentication error
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Create a rate limit error
    pub fn rate_limit(message: impl Into<String>) -> Self {
        Self::RateLimit {
            message: message.into(),
        }
    }

    /// Create an API error
    pub fn api(status: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Api {
            status: status.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a timeout error
    pub fn timeout(duration: std::time::Duration) -> Self {
        Self::Timeout { duration }
    }

    /// Create a serialization error without an underlying source
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
            source: None,
        }
    }

    /// Create a serialization error with source
    pub fn serialization_with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Serialization {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// True for errors raised locally, before the transport was involved
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            PlacesError::InvalidArgument { .. } | PlacesError::Configuration { .. }
        )
    }
}

/// Convert from reqwest errors.
///
/// The request URL carries the API key as a query parameter, so it is
/// stripped before the error is kept as a source. Timeouts land in
/// `Network` here because the configured duration is unknown; the client
/// maps them to [`PlacesError::Timeout`] itself.
impl From<reqwest::Error> for PlacesError {
    fn from(err: reqwest::Error) -> Self {
        let err = err.without_url();
        if err.is_timeout() {
            PlacesError::network_with_source("Request timed out", err)
        } else if err.is_connect() {
            PlacesError::network_with_source("Connection failed", err)
        } else if err.is_decode() {
            PlacesError::serialization_with_source("Failed to decode response body", err)
        } else {
            PlacesError::network_with_source("HTTP request failed", err)
        }
    }
}

/// Convert from serde_json errors
impl From<serde_json::Error> for PlacesError {
    fn from(err: serde_json::Error) -> Self {
        PlacesError::serialization_with_source("JSON serialization failed", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = PlacesError::invalid_argument("a max_width or max_height arg is required");
        assert_eq!(
            err.to_string(),
            "Invalid argument: a max_width or max_height arg is required"
        );

        let err = PlacesError::api("INVALID_REQUEST", "missing query");
        assert_eq!(err.to_string(), "API error (INVALID_REQUEST): missing query");
    }

    #[test]
    fn test_is_local() {
        assert!(PlacesError::invalid_argument("x").is_local());
        assert!(PlacesError::configuration("x").is_local());
        assert!(!PlacesError::network("x").is_local());
        assert!(!PlacesError::rate_limit("x").is_local());
    }

    #[test]
    fn test_from_serde_json() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: PlacesError = err.into();
        assert!(matches!(err, PlacesError::Serialization { source: Some(_), .. }));
    }
}

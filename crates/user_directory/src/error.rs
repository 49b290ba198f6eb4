use thiserror::Error;

/// Reasons a user fetch can fail. The `Display` output is what the error view
/// shows, so every message must be safe to render.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },
    /// Transport failure, carrying the transport's own description.
    #[error("{0}")]
    Network(String),
    #[error("Failed to parse response: {0}")]
    Parse(String),
    #[error("Request timed out after {ms} ms")]
    Timeout { ms: u32 },
    #[error("Failed to build request: {0}")]
    Request(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid users url {value:?}: {reason}")]
    InvalidUrl { value: String, reason: String },
    #[error("unsupported users url scheme {0:?}, expected http or https")]
    UnsupportedScheme(String),
    #[error("invalid request timeout {0:?}, expected a positive number of milliseconds")]
    InvalidTimeout(String),
    #[error("invalid log level {0:?}")]
    InvalidLogLevel(String),
}

#[cfg(test)]
mod tests {
    use super::FetchError;

    #[test]
    fn http_error_message_includes_status() {
        let err = FetchError::Http { status: 500 };
        assert_eq!(err.to_string(), "HTTP error! status: 500");
    }

    #[test]
    fn network_error_uses_transport_description() {
        let err = FetchError::Network("TypeError: Failed to fetch".to_string());
        assert_eq!(err.to_string(), "TypeError: Failed to fetch");
    }

    #[test]
    fn timeout_error_reports_duration() {
        let err = FetchError::Timeout { ms: 2_500 };
        assert_eq!(err.to_string(), "Request timed out after 2500 ms");
    }
}

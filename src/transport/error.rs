use thiserror::Error;

/// Failure to obtain a response body. URLs are stored with the API key redacted.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Invalid request URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read response body from {0}")]
    ResponseBody(String, #[source] reqwest::Error),

    // For transports that don't go through reqwest.
    #[error("Request to {url} failed: {reason}")]
    Unavailable { url: String, reason: String },
}

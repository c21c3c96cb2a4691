use thiserror::Error;

/// Errors that can occur while fetching the country dataset.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Source endpoint could not be built from configuration
    #[error("Invalid source URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Connection or transport failure
    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured timeout
    #[error("Request to '{url}' timed out after {duration}s")]
    Timeout { url: String, duration: u64 },

    /// Source answered with a non-success status
    #[error("Source returned {status} for '{url}'")]
    Status { url: String, status: u16 },

    /// Body was not a list of country records
    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

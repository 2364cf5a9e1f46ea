use thiserror::Error;

/// Errors that can occur while fetching the user list.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Connection or transport failure.
    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status.
    #[error("Upstream returned status {status} for '{url}'")]
    Status { url: String, status: u16 },

    /// The body could not be read.
    #[error("Failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    /// The body was not a JSON array of users.
    #[error("Failed to decode users: {0}")]
    Decode(#[from] serde_json::Error),
}

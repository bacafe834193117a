#[derive(Debug, thiserror::Error)]
pub enum BatchClientError {
    #[error("Failed to parse batch API url: {0}")]
    ParseUrlError(String),
    #[error("{operation} timed out after {timeout_ms}ms")]
    Timeout {
        operation: String,
        timeout_ms: u64,
    },
    #[error("{operation} was cancelled by the caller")]
    Cancelled { operation: String },
    #[error("Batch API error on {operation}: {status} {reason}")]
    Api {
        operation: String,
        status: u16,
        reason: String,
    },
    #[error("Network error on {operation}: {source}")]
    Network {
        operation: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Malformed batch API response on {operation}: {source}")]
    MalformedResponse {
        operation: String,
        #[source]
        source: reqwest::Error,
    },
}

impl BatchClientError {
    /// Splits a transport-or-decode error from reqwest into the taxonomy:
    /// body-decode failures are malformed responses, everything else is a
    /// network failure.
    pub(crate) fn from_reqwest(operation: &str, source: reqwest::Error) -> Self {
        if source.is_decode() {
            BatchClientError::MalformedResponse {
                operation: operation.to_string(),
                source,
            }
        } else {
            BatchClientError::Network {
                operation: operation.to_string(),
                source,
            }
        }
    }
}

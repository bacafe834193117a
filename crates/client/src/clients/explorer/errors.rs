#[derive(Debug, thiserror::Error)]
pub enum ExplorerClientError {
    #[error("Failed to parse explorer API url: {0}")]
    ParseUrlError(String),
    #[error("Transaction lookup for {hash} timed out after {timeout_ms}ms")]
    Timeout { hash: String, timeout_ms: u64 },
    #[error("Explorer API error for transaction {hash}: {status} {reason}")]
    Api {
        hash: String,
        status: u16,
        reason: String,
    },
    #[error("Network error fetching transaction {hash}: {source}")]
    Network {
        hash: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Malformed explorer response for transaction {hash}: {source}")]
    MalformedResponse {
        hash: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ExplorerClientError {
    pub(crate) fn from_reqwest(hash: &str, source: reqwest::Error) -> Self {
        if source.is_decode() {
            ExplorerClientError::MalformedResponse {
                hash: hash.to_string(),
                source,
            }
        } else {
            ExplorerClientError::Network {
                hash: hash.to_string(),
                source,
            }
        }
    }
}

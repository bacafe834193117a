use nowa_client::{BatchClientError, ExplorerClientError};

#[derive(Debug, thiserror::Error)]
pub enum ExplorerError {
    #[error("Explorer failed because of a batch API error: {0}")]
    BatchClientError(#[from] BatchClientError),
    #[error("Explorer failed because of a transaction API error: {0}")]
    ExplorerClientError(#[from] ExplorerClientError),
}

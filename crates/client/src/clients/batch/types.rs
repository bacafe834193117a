use nowa_common::{Batch, BatchPage, RawStatus};
use serde::Deserialize;

/// A batch as served by the prover API.
///
/// `txHashes` is occasionally absent on old batches; it defaults to an
/// empty list rather than failing deserialization. Missing required fields
/// surface as a malformed-response error at the client layer.
#[derive(Debug, Deserialize)]
pub struct BatchPayload {
    #[serde(rename = "batchNumber")]
    pub batch_number: u64,
    #[serde(rename = "batchHash")]
    pub batch_hash: String,
    #[serde(rename = "newStateRoot")]
    pub new_state_root: String,
    #[serde(default)]
    pub submitter: Option<String>,
    pub timestamp: u64,
    pub status: RawStatus,
    #[serde(rename = "txHash")]
    pub tx_hash: String,
    #[serde(rename = "txHashes", default)]
    pub tx_hashes: Vec<String>,
}

impl From<BatchPayload> for Batch {
    fn from(payload: BatchPayload) -> Self {
        Batch {
            number: payload.batch_number,
            batch_hash: payload.batch_hash,
            tx_hash: payload.tx_hash,
            timestamp: payload.timestamp,
            new_state_root: payload.new_state_root,
            submitter: payload.submitter,
            status: payload.status.normalize(),
            tx_hashes: payload.tx_hashes,
        }
    }
}

/// Wrapper returned by `GET /batches?page={p}&limit={l}`.
#[derive(Debug, Deserialize)]
pub struct PaginatedBatchesPayload {
    pub batches: Vec<BatchPayload>,
    pub count: u64,
    pub total_pages: u64,
}

impl PaginatedBatchesPayload {
    pub fn into_page(self, requested_page: u64) -> BatchPage {
        let has_more = requested_page < self.total_pages;
        BatchPage {
            batches: self.batches.into_iter().map(Batch::from).collect(),
            total: self.count,
            total_pages: self.total_pages,
            has_more,
        }
    }
}

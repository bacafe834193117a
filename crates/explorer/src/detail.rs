use nowa_client::{BatchClient, EnrichOptions, ExplorerClient, RequestOptions};
use nowa_common::{Batch, Transaction};
use tracing::info;

use crate::errors::ExplorerError;

/// A single batch together with its enriched transaction list.
#[derive(Debug)]
pub struct BatchDetail {
    pub batch: Batch,
    pub transactions: Vec<Transaction>,
    /// Hashes whose explorer lookup failed and were dropped from the list.
    pub failed_lookups: usize,
}

/// Loads the detail view for one batch: the batch record itself, then the
/// concurrent enrichment of its transaction hashes.
///
/// Only the batch fetch can fail the call; enrichment failures shrink the
/// transaction list and are surfaced through `failed_lookups`.
pub async fn load_batch_detail(
    batch_client: &BatchClient,
    explorer_client: &ExplorerClient,
    number: u64,
    enrich_options: &EnrichOptions,
) -> Result<BatchDetail, ExplorerError> {
    let batch = batch_client
        .get_batch_by_number(number, &RequestOptions::default())
        .await?;

    let enrichment = explorer_client.enrich(&batch.tx_hashes, enrich_options).await;
    if !enrichment.failures.is_empty() {
        info!(
            "Batch {number}: {} of {} transaction lookups failed",
            enrichment.failures.len(),
            batch.tx_hashes.len()
        );
    }

    Ok(BatchDetail {
        batch,
        transactions: enrichment.transactions,
        failed_lookups: enrichment.failures.len(),
    })
}

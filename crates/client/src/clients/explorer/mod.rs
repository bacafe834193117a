use std::time::Duration;

use futures_util::{future::join_all, stream, StreamExt};
use nowa_common::Transaction;
use reqwest::{header::ACCEPT, Client, Url};
use tokio::time::timeout;
use tracing::{debug, warn};

use errors::ExplorerClientError;
use types::TransactionPayload;

pub mod errors;
pub mod types;

/// Client for the block-explorer transaction API, used to resolve a batch's
/// transaction hash list into full transaction records.
#[derive(Debug, Clone)]
pub struct ExplorerClient {
    client: Client,
    url: Url,
}

/// Knobs for [`ExplorerClient::enrich`].
///
/// By default the fan-out is unbounded and each lookup runs without a
/// deadline, matching the behavior the batch-detail view always had. Large
/// batches should set both to avoid flooding the explorer service.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnrichOptions {
    /// Deadline applied to every individual lookup.
    pub deadline: Option<Duration>,
    /// Maximum number of lookups in flight at once. With a cap the result
    /// order follows settle order instead of input order.
    pub max_concurrency: Option<usize>,
}

/// Outcome of an enrichment fan-out. Failures never abort the call; they
/// are collected here so callers and tests can observe partial failure.
#[derive(Debug, Default)]
pub struct Enrichment {
    pub transactions: Vec<Transaction>,
    pub failures: Vec<EnrichmentFailure>,
}

#[derive(Debug)]
pub struct EnrichmentFailure {
    pub hash: String,
    pub error: ExplorerClientError,
}

impl ExplorerClient {
    pub fn new(url: &str) -> Result<Self, ExplorerClientError> {
        let url = Url::parse(url).map_err(|_| {
            ExplorerClientError::ParseUrlError(format!("Failed to parse url: {url}"))
        })?;
        Ok(Self {
            client: Client::new(),
            url,
        })
    }

    /// `GET /v2/transactions/{hash}`
    pub async fn get_transaction(&self, hash: &str) -> Result<Transaction, ExplorerClientError> {
        let url = self
            .url
            .join(&format!("/v2/transactions/{hash}"))
            .map_err(|_| {
                ExplorerClientError::ParseUrlError(format!("Failed to join url path for {hash}"))
            })?;
        debug!("Fetching transaction {hash}");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| ExplorerClientError::from_reqwest(hash, err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExplorerClientError::Api {
                hash: hash.to_string(),
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        let payload = response
            .json::<TransactionPayload>()
            .await
            .map_err(|err| ExplorerClientError::from_reqwest(hash, err))?;
        Ok(payload.into())
    }

    /// Resolves every hash concurrently and waits for all lookups to settle.
    ///
    /// A failed lookup is logged and dropped from the transaction list; it
    /// can never fail the call as a whole. All hashes failing yields an
    /// empty transaction list, not an error.
    pub async fn enrich(&self, tx_hashes: &[String], options: &EnrichOptions) -> Enrichment {
        let fetches = tx_hashes.iter().map(|hash| {
            let deadline = options.deadline;
            async move { (hash.clone(), self.lookup(hash, deadline).await) }
        });

        let settled = match options.max_concurrency {
            Some(cap) if cap > 0 => {
                stream::iter(fetches)
                    .buffer_unordered(cap)
                    .collect::<Vec<_>>()
                    .await
            }
            _ => join_all(fetches).await,
        };

        let mut enrichment = Enrichment::default();
        for (hash, result) in settled {
            match result {
                Ok(transaction) => enrichment.transactions.push(transaction),
                Err(error) => {
                    warn!("Failed to fetch transaction {hash}: {error}");
                    enrichment.failures.push(EnrichmentFailure { hash, error });
                }
            }
        }
        enrichment
    }

    async fn lookup(
        &self,
        hash: &str,
        deadline: Option<Duration>,
    ) -> Result<Transaction, ExplorerClientError> {
        match deadline {
            Some(deadline) => timeout(deadline, self.get_transaction(hash))
                .await
                .unwrap_or_else(|_| {
                    Err(ExplorerClientError::Timeout {
                        hash: hash.to_string(),
                        timeout_ms: deadline.as_millis() as u64,
                    })
                }),
            None => self.get_transaction(hash).await,
        }
    }
}

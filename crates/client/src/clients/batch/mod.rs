use std::time::Duration;

use nowa_common::{Batch, BatchPage};
use reqwest::{
    header::{ACCEPT, CONTENT_TYPE},
    Client, Url,
};
use serde::de::DeserializeOwned;
use tokio::time::timeout;
use tracing::debug;

use crate::clients::RequestOptions;
use errors::BatchClientError;
use types::{BatchPayload, PaginatedBatchesPayload};

pub mod errors;
pub mod types;

/// Deadline applied to every call that does not carry a caller-supplied
/// cancellation token.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Client for the prover batch API.
///
/// Each operation issues a single GET against the configured base endpoint
/// and normalizes the raw payload into a [`Batch`]. No state is kept between
/// calls and nothing is cached.
#[derive(Debug, Clone)]
pub struct BatchClient {
    client: Client,
    url: Url,
    request_timeout: Duration,
}

impl BatchClient {
    pub fn new(url: &str) -> Result<Self, BatchClientError> {
        Self::new_with_timeout(url, Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS))
    }

    pub fn new_with_timeout(
        url: &str,
        request_timeout: Duration,
    ) -> Result<Self, BatchClientError> {
        let url = Url::parse(url)
            .map_err(|_| BatchClientError::ParseUrlError(format!("Failed to parse url: {url}")))?;
        Ok(Self {
            client: Client::new(),
            url,
            request_timeout,
        })
    }

    /// `GET /batches/latest`
    pub async fn get_latest_batch(
        &self,
        options: &RequestOptions,
    ) -> Result<Batch, BatchClientError> {
        let payload: BatchPayload = self
            .get_json("get_latest_batch", "/batches/latest", options)
            .await?;
        Ok(payload.into())
    }

    /// `GET /batches/{number}`
    ///
    /// Existence is defined by the remote service; an unknown number
    /// surfaces as an `Api` error with the service's status code.
    pub async fn get_batch_by_number(
        &self,
        number: u64,
        options: &RequestOptions,
    ) -> Result<Batch, BatchClientError> {
        let payload: BatchPayload = self
            .get_json(
                &format!("get_batch_by_number({number})"),
                &format!("/batches/{number}"),
                options,
            )
            .await?;
        Ok(payload.into())
    }

    /// `GET /batches?page={page}&limit={limit}` with `page >= 1`.
    pub async fn get_batches_paginated(
        &self,
        page: u64,
        limit: u64,
        options: &RequestOptions,
    ) -> Result<BatchPage, BatchClientError> {
        let payload: PaginatedBatchesPayload = self
            .get_json(
                &format!("get_batches_paginated(page={page}, limit={limit})"),
                &format!("/batches?page={page}&limit={limit}"),
                options,
            )
            .await?;
        Ok(payload.into_page(page))
    }

    async fn get_json<T>(
        &self,
        operation: &str,
        path_and_query: &str,
        options: &RequestOptions,
    ) -> Result<T, BatchClientError>
    where
        T: DeserializeOwned,
    {
        let url = self.url.join(path_and_query).map_err(|_| {
            BatchClientError::ParseUrlError(format!("Failed to join url path: {path_and_query}"))
        })?;
        debug!("Sending request: {operation} -> {url}");

        let request = async {
            let response = self
                .client
                .get(url)
                .header(CONTENT_TYPE, "application/json")
                .header(ACCEPT, "application/json")
                .headers(options.headers.clone())
                .send()
                .await
                .map_err(|err| BatchClientError::from_reqwest(operation, err))?;

            let status = response.status();
            if !status.is_success() {
                return Err(BatchClientError::Api {
                    operation: operation.to_string(),
                    status: status.as_u16(),
                    reason: status.canonical_reason().unwrap_or("unknown").to_string(),
                });
            }

            response
                .json::<T>()
                .await
                .map_err(|err| BatchClientError::from_reqwest(operation, err))
        };

        // A caller-supplied token replaces the internal deadline entirely.
        match &options.cancel {
            Some(token) => {
                tokio::select! {
                    _ = token.cancelled() => Err(BatchClientError::Cancelled {
                        operation: operation.to_string(),
                    }),
                    result = request => result,
                }
            }
            None => timeout(self.request_timeout, request)
                .await
                .unwrap_or_else(|_| {
                    Err(BatchClientError::Timeout {
                        operation: operation.to_string(),
                        timeout_ms: self.request_timeout.as_millis() as u64,
                    })
                }),
        }
    }
}

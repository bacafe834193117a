use std::time::Duration;

/// Configuration for the explorer core. Base URLs are explicit inputs with
/// the lifetime of the session; nothing here lives in module globals.
#[derive(Clone, Debug)]
pub struct ExplorerConfig {
    pub batch_api: BatchApiConfig,
    pub tx_api: TxApiConfig,
    pub poll: PollConfig,
}

#[derive(Clone, Debug)]
pub struct BatchApiConfig {
    pub url: String,
    pub request_timeout_ms: u64,
}

#[derive(Clone, Debug)]
pub struct TxApiConfig {
    pub url: String,
}

#[derive(Clone, Debug)]
pub struct PollConfig {
    pub interval_ms: u64,
}

pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 30_000;

impl ExplorerConfig {
    pub fn new(batch_api_url: &str, tx_api_url: &str) -> Self {
        Self {
            batch_api: BatchApiConfig {
                url: batch_api_url.to_string(),
                request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            },
            tx_api: TxApiConfig {
                url: tx_api_url.to_string(),
            },
            poll: PollConfig {
                interval_ms: DEFAULT_POLL_INTERVAL_MS,
            },
        }
    }
}

impl BatchApiConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl PollConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

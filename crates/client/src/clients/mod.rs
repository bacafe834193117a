pub mod batch;
pub mod explorer;

use reqwest::header::HeaderMap;
use tokio_util::sync::CancellationToken;

pub use batch::BatchClient;
pub use explorer::ExplorerClient;

/// Per-request options accepted by every client operation.
///
/// When `cancel` is set the caller owns the request's lifetime and the
/// client's internal deadline is not armed; dropping or cancelling the
/// token aborts the outstanding call.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Extra headers attached on top of the JSON defaults.
    pub headers: HeaderMap,
    pub cancel: Option<CancellationToken>,
}

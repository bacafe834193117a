pub mod config;
pub mod controller;
pub mod detail;
pub mod errors;
pub mod pagination;
pub mod poller;

pub use config::ExplorerConfig;
pub use controller::{PageController, PageTicket, PageView};
pub use detail::{load_batch_detail, BatchDetail};
pub use errors::ExplorerError;
pub use pagination::{page_window, PageEntry, PageSize, PaginationState};
pub use poller::Poller;

pub mod types;
pub mod units;

pub use types::batch::{Batch, BatchPage, BatchStatus, RawStatus};
pub use types::transaction::{Transaction, MISSING_ADDRESS};

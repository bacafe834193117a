pub mod batch;
pub mod transaction;

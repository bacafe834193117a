pub mod clients;

pub use clients::{
    batch::{errors::BatchClientError, BatchClient},
    explorer::{errors::ExplorerClientError, EnrichOptions, Enrichment, ExplorerClient},
    RequestOptions,
};

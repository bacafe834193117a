use clap::{Parser as ClapParser, Subcommand as ClapSubcommand};

pub const VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

#[derive(ClapParser)]
#[command(
    name = "nowa-explorer",
    author = "NOWA Chain Contributors",
    version = VERSION_STRING,
    about = "NOWA chain batch explorer"
)]
pub struct CLI {
    #[clap(flatten)]
    pub opts: Options,
    #[command(subcommand)]
    pub command: Subcommand,
}

#[derive(ClapParser)]
pub struct Options {
    #[arg(
        long = "batch-api-url",
        value_name = "URL",
        default_value = "http://localhost:8081",
        help = "Base URL of the prover batch API.",
        help_heading = "API options"
    )]
    pub batch_api_url: String,
    #[arg(
        long = "tx-api-url",
        value_name = "URL",
        default_value = "http://localhost:4000",
        help = "Base URL of the block-explorer transaction API.",
        help_heading = "API options"
    )]
    pub tx_api_url: String,
    #[arg(
        long = "request-timeout-ms",
        value_name = "MILLIS",
        default_value_t = nowa_explorer::config::DEFAULT_REQUEST_TIMEOUT_MS,
        help = "Deadline for each batch API request.",
        help_heading = "API options"
    )]
    pub request_timeout_ms: u64,
    #[arg(
        long = "log.level",
        default_value = "info",
        value_name = "LOG_LEVEL",
        help = "Possible values: info, debug, trace, warn, error",
        help_heading = "Logging options"
    )]
    pub log_level: String,
}

#[derive(ClapSubcommand)]
pub enum Subcommand {
    #[command(about = "Print the latest batch.")]
    Latest,
    #[command(about = "Print one batch and its enriched transactions.")]
    Batch {
        #[arg(value_name = "BATCH_NUMBER")]
        number: u64,
        #[arg(
            long = "max-concurrency",
            value_name = "N",
            help = "Cap on concurrent transaction lookups (uncapped by default)."
        )]
        max_concurrency: Option<usize>,
        #[arg(
            long = "lookup-timeout-ms",
            value_name = "MILLIS",
            help = "Deadline per transaction lookup (unbounded by default)."
        )]
        lookup_timeout_ms: Option<u64>,
    },
    #[command(about = "Print one page of the batch listing.")]
    Batches {
        #[arg(long, default_value_t = 1)]
        page: u64,
        #[arg(long, default_value_t = 10, help = "Batches per page: 10, 25, 50 or 100.")]
        limit: u64,
    },
    #[command(about = "Poll the batch listing periodically and print each refresh.")]
    Watch {
        #[arg(long, default_value_t = 1)]
        page: u64,
        #[arg(long, default_value_t = 10, help = "Batches per page: 10, 25, 50 or 100.")]
        limit: u64,
        #[arg(
            long = "interval-ms",
            value_name = "MILLIS",
            default_value_t = nowa_explorer::config::DEFAULT_POLL_INTERVAL_MS,
            help = "Polling period."
        )]
        interval_ms: u64,
    },
}

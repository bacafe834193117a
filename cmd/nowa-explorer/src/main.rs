mod cli;
mod initializers;

use std::{sync::Arc, time::Duration};

use anyhow::anyhow;
use clap::Parser;
use nowa_client::{BatchClient, EnrichOptions, ExplorerClient, RequestOptions};
use nowa_common::{Batch, Transaction};
use nowa_explorer::{
    config::ExplorerConfig,
    controller::{PageController, PageView},
    load_batch_detail,
    pagination::PageSize,
    Poller,
};
use tracing::{error, info, warn};

use crate::cli::{Subcommand, CLI};
use crate::initializers::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CLI::parse();
    init_tracing(&cli.opts);

    let mut config = ExplorerConfig::new(&cli.opts.batch_api_url, &cli.opts.tx_api_url);
    config.batch_api.request_timeout_ms = cli.opts.request_timeout_ms;

    let batch_client =
        BatchClient::new_with_timeout(&config.batch_api.url, config.batch_api.request_timeout())?;

    match cli.command {
        Subcommand::Latest => {
            let batch = batch_client
                .get_latest_batch(&RequestOptions::default())
                .await?;
            print_batch(&batch);
        }
        Subcommand::Batch {
            number,
            max_concurrency,
            lookup_timeout_ms,
        } => {
            let explorer_client = ExplorerClient::new(&config.tx_api.url)?;
            let enrich_options = EnrichOptions {
                deadline: lookup_timeout_ms.map(Duration::from_millis),
                max_concurrency,
            };
            let detail =
                load_batch_detail(&batch_client, &explorer_client, number, &enrich_options)
                    .await?;
            print_batch(&detail.batch);
            if detail.failed_lookups > 0 {
                warn!(
                    "{} transaction lookups failed and were omitted",
                    detail.failed_lookups
                );
            }
            print_transactions(&detail.transactions);
        }
        Subcommand::Batches { page, limit } => {
            let result = batch_client
                .get_batches_paginated(page, limit, &RequestOptions::default())
                .await?;
            for batch in &result.batches {
                print_batch_row(batch);
            }
            println!(
                "Page {page} of {} | Total batches: {} | Has more: {}",
                result.total_pages, result.total, result.has_more
            );
        }
        Subcommand::Watch {
            page,
            limit,
            interval_ms,
        } => {
            config.poll.interval_ms = interval_ms;
            let size = PageSize::try_from(limit)
                .map_err(|other| anyhow!("Unsupported page size {other}: pick 10, 25, 50 or 100"))?;
            watch(batch_client, page, size, config.poll.interval()).await?;
        }
    }

    Ok(())
}

async fn watch(
    batch_client: BatchClient,
    page: u64,
    size: PageSize,
    period: Duration,
) -> anyhow::Result<()> {
    let controller = Arc::new(PageController::new(batch_client));

    let ticket = controller.change_items_per_page(size);
    controller.refresh(ticket).await?;
    if page > 1 {
        match controller.go_to_page(page) {
            Some(ticket) => {
                controller.refresh(ticket).await?;
            }
            None => warn!("Page {page} is out of range, staying on page 1"),
        }
    }
    print_listing(&controller.snapshot());

    let poll_controller = controller.clone();
    let poller = Poller::spawn(period, move || {
        let controller = poll_controller.clone();
        async move {
            let ticket = controller.current_ticket();
            match controller.refresh(ticket).await {
                Ok(true) => print_listing(&controller.snapshot()),
                // Superseded by a navigation; nothing to show.
                Ok(false) => {}
                Err(err) => error!("Periodic refresh failed: {err}"),
            }
        }
    });

    info!("Watching batches, press Ctrl+C to stop");
    tokio::signal::ctrl_c().await?;
    poller.shutdown().await;
    Ok(())
}

fn print_batch(batch: &Batch) {
    println!("Batch #{}", batch.number);
    println!("  Status:         {}", batch.status);
    println!("  Batch hash:     {}", batch.batch_hash);
    println!("  Commit tx hash: {}", batch.tx_hash);
    println!("  New state root: {}", batch.new_state_root);
    println!("  Timestamp:      {}", batch.timestamp);
    println!(
        "  Submitter:      {}",
        batch.submitter.as_deref().unwrap_or("-")
    );
    println!("  Transactions:   {}", batch.tx_hashes.len());
}

fn print_batch_row(batch: &Batch) {
    println!(
        "{:<10} {:<10} {:<12} {}",
        batch.number, batch.status, batch.timestamp, batch.batch_hash
    );
}

fn print_transactions(transactions: &[Transaction]) {
    for tx in transactions {
        println!(
            "{} from={} to={} value={} timestamp={}",
            tx.hash, tx.from, tx.to, tx.value, tx.timestamp
        );
    }
}

fn print_listing(view: &PageView) {
    for batch in &view.batches {
        print_batch_row(batch);
    }
    let pages: Vec<String> = view
        .pagination
        .page_numbers()
        .iter()
        .map(ToString::to_string)
        .collect();
    println!(
        "Page {} of {} | Total batches: {} | [{}]",
        view.pagination.current_page,
        view.pagination.total_pages,
        view.pagination.total_records,
        pages.join(" ")
    );
}

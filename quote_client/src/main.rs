//! Quote Client — a command-line quote collection. Quotes are kept in a local data
//! directory, shown at random or per category, and periodically reconciled with a
//! mock remote endpoint: unknown remote texts are appended, and when the server
//! disagrees on a category the local one is kept and a conflict notice is shown.
//!
//! Usage example (CLI):
//! ```bash
//! quote_client add "Act now" Motivation
//! quote_client random --category Motivation
//! quote_client --endpoint http://localhost:3000/posts watch --interval 30
//! ```
//!
//! Logging goes through `env_logger`; set `RUST_LOG=debug` for request details.
#![warn(missing_docs)]
mod args;
mod error;
mod view;

use crate::args::{Args, Command, normalize_path};
use crate::error::ClientError;
use crate::view::{ConsoleView, EMPTY_SELECTION, pick_random};
use clap::Parser;
use crossbeam_channel::bounded;
use log::{error, info};
use quote_common::net::SyncConfig;
use quote_common::remote::HttpQuoteSource;
use quote_common::scheduler::SyncScheduler;
use quote_common::storage::FileStore;
use quote_common::sync::Synchronizer;
use quote_common::view::QuoteView;
use quote_common::{CategoryFilter, QuoteStore, Result};
use std::fs;
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn main() {
    init_logger();
    let args = Args::parse();
    if let Err(e) = run(args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), ClientError> {
    let storage = FileStore::open(normalize_path(&args.data_dir))?;
    let mut store = QuoteStore::load(Box::new(storage))?;
    let config = sync_config(&args);
    let view = ConsoleView;

    match args.command {
        Command::List { category } => {
            let filter = parse_filter(category.as_deref())?;
            let quotes = store.list(&filter);
            if quotes.is_empty() {
                println!("{}", EMPTY_SELECTION);
            }
            for quote in quotes {
                view.show_quote(Some(quote));
            }
        }
        Command::Random { category } => {
            let filter = match category {
                Some(raw) => {
                    let filter: CategoryFilter = raw.parse()?;
                    store.set_selected_category(&filter)?;
                    filter
                }
                None => store.selected_category()?,
            };
            let quotes = store.list(&filter);
            view.show_quote(pick_random(&quotes, &mut rand::rng()));
        }
        Command::Add {
            text,
            category,
            no_post,
        } => {
            if no_post {
                let quote = store.add(&text, &category)?;
                view.show_categories(&store.categories());
                view.show_quote(Some(&quote));
            } else {
                let sync = synchronizer(store, &config)?;
                sync.add_and_post(&text, &category)?;
            }
        }
        Command::Categories => {
            for category in store.categories() {
                println!("{}", category);
            }
        }
        Command::Sync => {
            let sync = synchronizer(store, &config)?;
            let report = sync.sync_once()?;
            println!(
                "Fetched {}, added {}, conflicts {}",
                report.fetched,
                report.merge.added.len(),
                report.merge.conflicts.len()
            );
        }
        Command::Watch { .. } => {
            let sync = synchronizer(store, &config)?;
            watch(sync, &config)?;
        }
        Command::Import { path } => {
            let raw = fs::read_to_string(normalize_path(&path))?;
            let count = store.import_json(&raw)?;
            view.show_categories(&store.categories());
            println!("Imported {} quotes", count);
        }
        Command::Export { path } => {
            let path = normalize_path(&path);
            fs::write(&path, store.export_json()?)?;
            println!("Exported {} quotes to {}", store.len(), path.display());
        }
    }
    Ok(())
}

/// Runs sync cycles every `config.interval` until Ctrl+C.
fn watch(sync: Synchronizer, config: &SyncConfig) -> Result<(), ClientError> {
    let (shutdown_tx, shutdown_rx) = bounded::<()>(1);
    ctrlc::set_handler(move || {
        info!("Ctrl+C received. Stopping sync...");
        let _ = shutdown_tx.try_send(());
    })?;

    let handle = SyncScheduler::start("quote-sync", config.interval, move || sync.sync_once());
    info!("Watching for server updates. Press Ctrl+C to exit.");
    let _ = shutdown_rx.recv();
    handle.stop();
    Ok(())
}

/// Endpoint settings from the command line; `watch` also sets the interval.
fn sync_config(args: &Args) -> SyncConfig {
    let mut config = SyncConfig {
        endpoint: args.endpoint.trim().to_string(),
        fetch_limit: args.fetch_limit,
        ..SyncConfig::default()
    };
    if let Command::Watch { interval } = args.command {
        config.interval = Duration::from_secs(interval.max(1));
    }
    config
}

fn synchronizer(store: QuoteStore, config: &SyncConfig) -> Result<Synchronizer> {
    let source = HttpQuoteSource::new(config)?;
    info!("Using endpoint {}", source.endpoint());
    Ok(Synchronizer::new(
        Arc::new(Mutex::new(store)),
        Arc::new(source),
        Arc::new(ConsoleView),
    ))
}

fn parse_filter(raw: Option<&str>) -> Result<CategoryFilter> {
    match raw {
        Some(raw) => raw.parse(),
        None => Ok(CategoryFilter::All),
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote_common::net::{DEFAULT_ENDPOINT, DEFAULT_SYNC_INTERVAL_SECS};

    #[test]
    fn test_watch_interval_reaches_config() {
        let args = Args::parse_from([
            "quote_client",
            "--endpoint",
            " http://localhost:3000/posts ",
            "watch",
            "--interval",
            "30",
        ]);
        let config = sync_config(&args);
        assert_eq!(config.interval, Duration::from_secs(30));
        assert_eq!(config.endpoint, "http://localhost:3000/posts");
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let args = Args::parse_from(["quote_client", "watch", "--interval", "0"]);
        assert_eq!(sync_config(&args).interval, Duration::from_secs(1));
    }

    #[test]
    fn test_other_commands_keep_default_interval() {
        let args = Args::parse_from(["quote_client", "--endpoint", DEFAULT_ENDPOINT, "sync"]);
        assert_eq!(
            sync_config(&args).interval,
            Duration::from_secs(DEFAULT_SYNC_INTERVAL_SECS)
        );
    }
}

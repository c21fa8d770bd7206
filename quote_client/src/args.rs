//! Command-line arguments for the Quote Client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use quote_common::net::{DEFAULT_ENDPOINT, DEFAULT_FETCH_LIMIT, DEFAULT_SYNC_INTERVAL_SECS};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Directory holding the persisted quotes and the selected category.
    #[clap(long, env = "QUOTES_DATA_DIR", default_value = "./quote_data")]
    pub data_dir: String,

    /// Collection endpoint used to pull and post quotes.
    #[clap(long, env = "QUOTES_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// How many remote items are turned into quotes per sync.
    #[clap(long, default_value_t = DEFAULT_FETCH_LIMIT)]
    pub fetch_limit: usize,

    #[command(subcommand)]
    pub command: Command,
}

/// Actions offered by the client.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the stored quotes, optionally for one category ("all" for every quote).
    List {
        #[clap(long)]
        category: Option<String>,
    },
    /// Print one random quote. The chosen category is remembered for next time.
    Random {
        #[clap(long)]
        category: Option<String>,
    },
    /// Add a quote and post it to the endpoint.
    Add {
        text: String,
        category: String,
        /// Keep the quote local.
        #[clap(long)]
        no_post: bool,
    },
    /// Print the category selector entries.
    Categories,
    /// Run one sync with the endpoint.
    Sync,
    /// Sync periodically until Ctrl+C.
    Watch {
        /// Seconds between two syncs.
        #[clap(long, default_value_t = DEFAULT_SYNC_INTERVAL_SECS)]
        interval: u64,
    },
    /// Append quotes from a JSON file.
    Import { path: String },
    /// Write every quote to a JSON file.
    Export { path: String },
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
pub fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add() {
        let args = Args::parse_from(["quote_client", "add", "Act now", "Motivation"]);
        match args.command {
            Command::Add {
                text,
                category,
                no_post,
            } => {
                assert_eq!(text, "Act now");
                assert_eq!(category, "Motivation");
                assert!(!no_post);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_watch_default_interval() {
        let args = Args::parse_from(["quote_client", "--fetch-limit", "3", "watch"]);
        assert_eq!(args.fetch_limit, 3);
        assert!(matches!(
            args.command,
            Command::Watch { interval } if interval == DEFAULT_SYNC_INTERVAL_SECS
        ));
    }

    #[test]
    fn test_normalize_path_strips_quotes() {
        assert_eq!(normalize_path(" \"a b/quotes.json\" "), PathBuf::from("a b/quotes.json"));
        assert_eq!(normalize_path("plain.json"), PathBuf::from("plain.json"));
    }
}

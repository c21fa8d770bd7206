//! Remote quote endpoint.
//!
//! The endpoint is an unrelated placeholder API: a GET returns a list of items that
//! carry a `title` field, which is reinterpreted as quote text under the constant
//! `"Server"` category. A POST of a quote is echoed back and only logged.
use log::{debug, info};
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::Result;
use crate::error::QuoteError;
use crate::net::{SERVER_CATEGORY, SyncConfig};
use crate::quote::Quote;

/// Source of remote quotes and sink for newly added ones.
pub trait QuoteSource: Send + Sync {
    /// Fetches the current remote snapshot.
    fn fetch(&self) -> Result<Vec<Quote>>;

    /// Publishes a locally added quote.
    fn post(&self, quote: &Quote) -> Result<()>;
}

/// Item shape returned by the endpoint; every other field is ignored.
#[derive(Debug, Deserialize)]
struct RemoteItem {
    #[serde(default)]
    title: String,
}

/// `QuoteSource` backed by a blocking HTTP client.
pub struct HttpQuoteSource {
    client: Client,
    endpoint: String,
    fetch_limit: usize,
}

impl HttpQuoteSource {
    /// Builds the HTTP client from `config`.
    pub fn new(config: &SyncConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            fetch_limit: config.fetch_limit,
        })
    }

    /// Endpoint URL used for GET and POST.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Maps endpoint items to quotes, keeping the first `limit` items with a usable title.
fn items_to_quotes(items: Vec<RemoteItem>, limit: usize) -> Vec<Quote> {
    items
        .into_iter()
        .take(limit)
        .filter_map(|item| Quote::new(&item.title, SERVER_CATEGORY).ok())
        .collect()
}

impl QuoteSource for HttpQuoteSource {
    fn fetch(&self) -> Result<Vec<Quote>> {
        debug!("GET {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send()?.error_for_status()?;
        let items: Vec<RemoteItem> = response
            .json()
            .map_err(|e| QuoteError::Network(format!("unexpected response body: {}", e)))?;
        let quotes = items_to_quotes(items, self.fetch_limit);
        info!("Fetched {} quotes from {}", quotes.len(), self.endpoint);
        Ok(quotes)
    }

    fn post(&self, quote: &Quote) -> Result<()> {
        debug!("POST {} {}", self.endpoint, quote);
        let response = self
            .client
            .post(&self.endpoint)
            .json(quote)
            .send()?
            .error_for_status()?;
        let status = response.status();
        let body = response.text().unwrap_or_default();
        info!("Quote posted to {} ({}): {}", self.endpoint, status, body.trim());
        Ok(())
    }
}

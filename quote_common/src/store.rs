//! Owned, persisted quote collection.
//!
//! `QuoteStore` keeps an insertion-ordered `Vec<Quote>` and writes the whole collection
//! to a `KeyValueStore` as one JSON array every time it changes. It never deletes
//! quotes. Identity is by exact text, but only the remote merge suppresses duplicates;
//! local adds and imports append unconditionally.
use log::{debug, info, warn};

use crate::Result;
use crate::quote::{ALL_CATEGORIES, CategoryFilter, Quote};
use crate::storage::KeyValueStore;

/// Storage key holding the JSON array of quotes.
pub const QUOTES_KEY: &str = "quotes";
/// Storage key holding the last selected category.
pub const SELECTED_CATEGORY_KEY: &str = "selected_category";

/// Quotes used when nothing has been persisted yet.
pub fn default_quotes() -> Vec<Quote> {
    [
        (
            "The best way to get started is to quit talking and begin doing.",
            "Motivation",
        ),
        ("Don’t let yesterday take up too much of today.", "Motivation"),
        (
            "Life is what happens when you’re busy making other plans.",
            "Life",
        ),
    ]
    .into_iter()
    .map(|(text, category)| Quote {
        text: text.to_string(),
        category: category.to_string(),
    })
    .collect()
}

/// Outcome of merging a remote snapshot into the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Remote quotes appended because no local quote had their text.
    pub added: Vec<Quote>,
    /// Remote quotes whose text exists locally under another category.
    /// The local category was kept.
    pub conflicts: Vec<Conflict>,
}

impl MergeReport {
    /// True when the merge changed nothing and found no conflict.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.conflicts.is_empty()
    }
}

/// Same text, different category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    /// Shared quote text.
    pub text: String,
    /// Category kept in the store.
    pub local_category: String,
    /// Category offered by the remote side and discarded.
    pub remote_category: String,
}

/// Persisted quote collection.
pub struct QuoteStore {
    quotes: Vec<Quote>,
    storage: Box<dyn KeyValueStore>,
}

impl QuoteStore {
    /// Loads the collection from `storage`, falling back to `default_quotes` when the
    /// key is absent. A present but malformed value is an error, so it is never
    /// silently overwritten.
    pub fn load(storage: Box<dyn KeyValueStore>) -> Result<Self> {
        let quotes = match storage.get(QUOTES_KEY)? {
            Some(raw) => {
                let quotes: Vec<Quote> = serde_json::from_str(&raw)?;
                info!("Loaded {} quotes from storage", quotes.len());
                quotes
            }
            None => {
                info!("No stored quotes, starting with the default list");
                default_quotes()
            }
        };
        Ok(Self { quotes, storage })
    }

    /// All quotes in insertion order.
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Number of stored quotes.
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// True when the collection holds no quote.
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Quotes passing `filter`, in insertion order.
    pub fn list(&self, filter: &CategoryFilter) -> Vec<&Quote> {
        self.quotes.iter().filter(|q| filter.matches(q)).collect()
    }

    /// The `"all"` sentinel followed by each distinct category in order of first
    /// occurrence.
    pub fn categories(&self) -> Vec<String> {
        let mut categories = vec![ALL_CATEGORIES.to_string()];
        for quote in &self.quotes {
            if !categories.iter().any(|c| c == &quote.category) {
                categories.push(quote.category.clone());
            }
        }
        categories
    }

    /// Validates, appends and persists a new quote. The store is left unchanged on
    /// any error.
    pub fn add(&mut self, text: &str, category: &str) -> Result<Quote> {
        let quote = Quote::new(text, category)?;
        self.quotes.push(quote.clone());
        if let Err(e) = self.persist() {
            self.quotes.pop();
            return Err(e);
        }
        info!("Added quote {}", quote);
        Ok(quote)
    }

    /// Union-by-text merge of a remote snapshot; the local category always wins.
    ///
    /// Remote quotes appended earlier in the same pass count as local, so duplicates
    /// inside `remote` are collapsed too. Storage is only written when something was
    /// appended.
    pub fn merge(&mut self, remote: Vec<Quote>) -> Result<MergeReport> {
        let before = self.quotes.len();
        let mut report = MergeReport::default();

        for remote_quote in remote {
            match self.quotes.iter().find(|q| q.text == remote_quote.text) {
                None => {
                    self.quotes.push(remote_quote.clone());
                    report.added.push(remote_quote);
                }
                Some(local) if local.category != remote_quote.category => {
                    warn!(
                        "Conflict for {:?}: keeping local category {:?} over {:?}",
                        local.text, local.category, remote_quote.category
                    );
                    report.conflicts.push(Conflict {
                        text: remote_quote.text,
                        local_category: local.category.clone(),
                        remote_category: remote_quote.category,
                    });
                }
                Some(_) => {}
            }
        }

        if !report.added.is_empty() {
            if let Err(e) = self.persist() {
                self.quotes.truncate(before);
                return Err(e);
            }
        }
        debug!(
            "Merge finished: {} added, {} conflicts",
            report.added.len(),
            report.conflicts.len()
        );
        Ok(report)
    }

    /// Pretty-printed JSON array of the whole collection.
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.quotes)?)
    }

    /// Appends every quote of a JSON array and persists. Returns how many were
    /// imported. Entries are trimmed like local adds. Nothing is appended if the text
    /// is malformed or any entry is invalid.
    pub fn import_json(&mut self, raw: &str) -> Result<usize> {
        let parsed: Vec<Quote> = serde_json::from_str(raw)?;
        let imported = parsed
            .iter()
            .map(|q| Quote::new(&q.text, &q.category))
            .collect::<Result<Vec<_>>>()?;

        let before = self.quotes.len();
        let count = imported.len();
        self.quotes.extend(imported);
        if let Err(e) = self.persist() {
            self.quotes.truncate(before);
            return Err(e);
        }
        info!("Imported {} quotes", count);
        Ok(count)
    }

    /// Last selected filter, `All` if none was stored.
    pub fn selected_category(&self) -> Result<CategoryFilter> {
        match self.storage.get(SELECTED_CATEGORY_KEY)? {
            Some(raw) if !raw.trim().is_empty() => raw.parse(),
            _ => Ok(CategoryFilter::All),
        }
    }

    /// Persists `filter` as the last selected category.
    pub fn set_selected_category(&mut self, filter: &CategoryFilter) -> Result<()> {
        self.storage.set(SELECTED_CATEGORY_KEY, &filter.to_string())
    }

    fn persist(&mut self) -> Result<()> {
        let raw = serde_json::to_string(&self.quotes)?;
        self.storage.set(QUOTES_KEY, &raw)
    }
}

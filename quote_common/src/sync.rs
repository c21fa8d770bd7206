//! Reconciliation between the local store and the remote endpoint.
//!
//! One sync cycle fetches the remote snapshot without holding the store lock, then
//! merges it under the lock (union by text, local category wins) and tells the view
//! what happened. A failed fetch skips the cycle and leaves the store untouched.
//!
//! The same type also performs local adds, since a new quote is posted to the
//! endpoint right after it is stored.
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use log::{error, info};

use crate::Result;
use crate::quote::Quote;
use crate::remote::QuoteSource;
use crate::store::{MergeReport, QuoteStore};
use crate::view::{Notice, NoticeKind, QuoteView};

/// Summary of one completed sync cycle.
#[derive(Debug, Clone)]
pub struct SyncReport {
    /// When the merge finished.
    pub finished_at: DateTime<Utc>,
    /// Number of quotes received from the endpoint.
    pub fetched: usize,
    /// What the merge changed.
    pub merge: MergeReport,
}

/// Builds the notice for a merge, if it deserves one. Conflicts take precedence.
pub fn notice_for(merge: &MergeReport) -> Option<Notice> {
    if !merge.conflicts.is_empty() {
        Some(Notice::new(
            NoticeKind::Conflict,
            format!(
                "Conflict detected while syncing with server! Kept local category for {} quote(s).",
                merge.conflicts.len()
            ),
        ))
    } else if !merge.added.is_empty() {
        Some(Notice::new(
            NoticeKind::Updated,
            format!("Quotes updated from server! {} new.", merge.added.len()),
        ))
    } else {
        None
    }
}

/// Ties the shared store to a remote source and a view.
#[derive(Clone)]
pub struct Synchronizer {
    store: Arc<Mutex<QuoteStore>>,
    source: Arc<dyn QuoteSource>,
    view: Arc<dyn QuoteView>,
}

impl Synchronizer {
    /// Creates a synchronizer over an already shared store.
    pub fn new(
        store: Arc<Mutex<QuoteStore>>,
        source: Arc<dyn QuoteSource>,
        view: Arc<dyn QuoteView>,
    ) -> Self {
        Self {
            store,
            source,
            view,
        }
    }

    /// Shared store handle.
    pub fn store(&self) -> &Arc<Mutex<QuoteStore>> {
        &self.store
    }

    /// Runs one fetch + merge cycle.
    pub fn sync_once(&self) -> Result<SyncReport> {
        let remote = self.source.fetch()?;
        let fetched = remote.len();

        let (merge, categories) = {
            let mut store = self.store.lock()?;
            let merge = store.merge(remote)?;
            (merge, store.categories())
        };

        if !merge.added.is_empty() {
            self.view.show_categories(&categories);
        }
        if let Some(notice) = notice_for(&merge) {
            self.view.notify(&notice);
        }

        let report = SyncReport {
            finished_at: Utc::now(),
            fetched,
            merge,
        };
        info!(
            "Sync finished at {}: fetched={} added={} conflicts={}",
            report.finished_at.to_rfc3339(),
            report.fetched,
            report.merge.added.len(),
            report.merge.conflicts.len()
        );
        Ok(report)
    }

    /// Adds a quote locally and then posts it to the endpoint.
    ///
    /// Only the local add can fail the call; a failed post is logged.
    pub fn add_and_post(&self, text: &str, category: &str) -> Result<Quote> {
        let (quote, categories) = {
            let mut store = self.store.lock()?;
            let quote = store.add(text, category)?;
            (quote, store.categories())
        };
        self.view.show_categories(&categories);
        self.view.show_quote(Some(&quote));

        match self.source.post(&quote) {
            Ok(()) => self
                .view
                .notify(&Notice::new(NoticeKind::Posted, "Quote posted to server!")),
            Err(e) => error!("Post failed: {}", e),
        }
        Ok(quote)
    }
}

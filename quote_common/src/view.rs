//! Presentation interface injected into the sync loop and the client.
//!
//! Nothing in the library prints; it hands quotes, categories and notices to a
//! `QuoteView` supplied by the caller.
use strum_macros::{Display, EnumString};

use crate::quote::Quote;

/// Kind of user-visible notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum NoticeKind {
    /// New quotes arrived from the server.
    Updated,
    /// The server disagreed on a category; the local value was kept.
    Conflict,
    /// A local quote was posted to the server.
    Posted,
}

/// Banner-style message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// What happened.
    pub kind: NoticeKind,
    /// Human-readable text.
    pub message: String,
}

impl Notice {
    /// Creates a notice of `kind`.
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Whether the notice signals a problem.
    pub fn is_warning(&self) -> bool {
        self.kind == NoticeKind::Conflict
    }
}

/// Rendering callbacks.
pub trait QuoteView: Send + Sync {
    /// Shows one quote, or a placeholder if the selection is empty.
    fn show_quote(&self, quote: Option<&Quote>);

    /// Shows the category selector entries.
    fn show_categories(&self, categories: &[String]);

    /// Shows a notice banner.
    fn notify(&self, notice: &Notice);
}

//! Console rendering for the quote client.
use log::{info, warn};
use quote_common::Quote;
use quote_common::view::{Notice, QuoteView};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Placeholder shown when the selection has no quote.
pub const EMPTY_SELECTION: &str = "No quotes available.";

/// `QuoteView` writing to stdout; notices also go to the log.
pub struct ConsoleView;

impl QuoteView for ConsoleView {
    fn show_quote(&self, quote: Option<&Quote>) {
        match quote {
            Some(quote) => println!("{}", quote),
            None => println!("{}", EMPTY_SELECTION),
        }
    }

    fn show_categories(&self, categories: &[String]) {
        info!("Categories: {}", categories.join(", "));
    }

    fn notify(&self, notice: &Notice) {
        if notice.is_warning() {
            warn!("[{}] {}", notice.kind, notice.message);
        } else {
            info!("[{}] {}", notice.kind, notice.message);
        }
    }
}

/// Picks one quote uniformly at random.
pub fn pick_random<'a, R: Rng + ?Sized>(quotes: &[&'a Quote], rng: &mut R) -> Option<&'a Quote> {
    quotes.choose(rng).copied()
}

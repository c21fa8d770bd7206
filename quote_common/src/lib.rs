//!
//! Quote store, storage and sync logic shared by the quote client.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `quote` — the `Quote` record and the `CategoryFilter` selection.
//! - `storage` — durable key-value storage (`FileStore`, `MemoryStore`).
//! - `store` — the persisted, insertion-ordered `QuoteStore`.
//! - `remote` — the HTTP endpoint quotes are pulled from and posted to.
//! - `sync` — one reconciliation cycle and local add + post.
//! - `scheduler` — cancellable periodic runner for sync cycles.
//! - `view` — rendering callbacks injected by the front end.
//! - `net` — endpoint defaults and `SyncConfig`.
#![warn(missing_docs)]
pub mod error;
pub mod net;
pub mod quote;
pub mod remote;
pub mod result;
pub mod scheduler;
pub mod storage;
pub mod store;
pub mod sync;
pub mod view;

pub use error::QuoteError;
pub use quote::{CategoryFilter, Quote};
pub use result::Result;
pub use store::QuoteStore;

//! End-to-end sync against a mocked HTTP endpoint and a file-backed store.
use std::sync::{Arc, Mutex};
use std::time::Duration;

use mockito::Matcher;
use quote_common::net::{SERVER_CATEGORY, SyncConfig};
use quote_common::remote::{HttpQuoteSource, QuoteSource};
use quote_common::storage::FileStore;
use quote_common::sync::Synchronizer;
use quote_common::view::{Notice, NoticeKind, QuoteView};
use quote_common::{Quote, QuoteError, QuoteStore};
use serde_json::json;
use tempfile::TempDir;

#[derive(Default)]
struct RecordingView {
    notices: Mutex<Vec<Notice>>,
}

impl QuoteView for RecordingView {
    fn show_quote(&self, _quote: Option<&Quote>) {}

    fn show_categories(&self, _categories: &[String]) {}

    fn notify(&self, notice: &Notice) {
        self.notices.lock().unwrap().push(notice.clone());
    }
}

fn config_for(server: &mockito::ServerGuard, fetch_limit: usize) -> SyncConfig {
    SyncConfig {
        endpoint: format!("{}/posts", server.url()),
        fetch_limit,
        interval: Duration::from_millis(50),
        timeout: Duration::from_secs(5),
    }
}

fn posts_body(titles: &[&str]) -> String {
    let items: Vec<_> = titles
        .iter()
        .enumerate()
        .map(|(i, t)| json!({"userId": 1, "id": i + 1, "title": t, "body": "lorem"}))
        .collect();
    serde_json::to_string(&items).unwrap()
}

#[test]
fn test_fetch_truncates_and_labels() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/posts")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(posts_body(&["one", "two", "three", "four"]))
        .create();

    let source = HttpQuoteSource::new(&config_for(&server, 2)).unwrap();
    let quotes = source.fetch().unwrap();

    mock.assert();
    assert_eq!(
        quotes,
        vec![
            Quote::new("one", SERVER_CATEGORY).unwrap(),
            Quote::new("two", SERVER_CATEGORY).unwrap(),
        ]
    );
}

#[test]
fn test_requests_carry_library_user_agent() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/posts")
        .match_header(
            "user-agent",
            format!("quote_common/{}", env!("CARGO_PKG_VERSION")).as_str(),
        )
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create();

    let source = HttpQuoteSource::new(&config_for(&server, 5)).unwrap();
    assert!(source.fetch().unwrap().is_empty());
    mock.assert();
}

#[test]
fn test_fetch_server_error_is_network_error() {
    let mut server = mockito::Server::new();
    server.mock("GET", "/posts").with_status(500).create();

    let source = HttpQuoteSource::new(&config_for(&server, 5)).unwrap();
    assert!(matches!(source.fetch(), Err(QuoteError::Network(_))));
}

#[test]
fn test_post_sends_quote_json() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/posts")
        .match_body(Matcher::Json(json!({"text": "Act now", "category": "Motivation"})))
        .with_status(201)
        .with_body(r#"{"id": 101}"#)
        .create();

    let source = HttpQuoteSource::new(&config_for(&server, 5)).unwrap();
    source
        .post(&Quote::new("Act now", "Motivation").unwrap())
        .unwrap();
    mock.assert();
}

#[test]
fn test_sync_persists_merged_quotes() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/posts")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(posts_body(&["Stay calm", "Stay calm"]))
        .create();

    let data_dir = TempDir::new().unwrap();
    let store = QuoteStore::load(Box::new(FileStore::open(data_dir.path()).unwrap())).unwrap();
    let initial = store.len();
    let source = Arc::new(HttpQuoteSource::new(&config_for(&server, 5)).unwrap());
    let view = Arc::new(RecordingView::default());
    let sync = Synchronizer::new(Arc::new(Mutex::new(store)), source, view.clone());

    let report = sync.sync_once().unwrap();
    assert_eq!(report.fetched, 2);
    assert_eq!(report.merge.added.len(), 1);

    let second = sync.sync_once().unwrap();
    assert!(second.merge.is_empty());

    let reloaded = QuoteStore::load(Box::new(FileStore::open(data_dir.path()).unwrap())).unwrap();
    assert_eq!(reloaded.len(), initial + 1);
    assert_eq!(reloaded.quotes().last().unwrap().category, SERVER_CATEGORY);

    let notices = view.notices.lock().unwrap();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::Updated);
}

#[test]
fn test_unreachable_endpoint_skips_cycle() {
    let config = SyncConfig {
        endpoint: "http://127.0.0.1:1/posts".to_string(),
        timeout: Duration::from_secs(2),
        ..SyncConfig::default()
    };
    let data_dir = TempDir::new().unwrap();
    let store = QuoteStore::load(Box::new(FileStore::open(data_dir.path()).unwrap())).unwrap();
    let initial = store.len();
    let sync = Synchronizer::new(
        Arc::new(Mutex::new(store)),
        Arc::new(HttpQuoteSource::new(&config).unwrap()),
        Arc::new(RecordingView::default()),
    );

    assert!(matches!(sync.sync_once(), Err(QuoteError::Network(_))));
    assert_eq!(sync.store().lock().unwrap().len(), initial);
}

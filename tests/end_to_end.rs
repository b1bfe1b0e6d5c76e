//! End-to-end tests: load a corpus from disk, serve it over HTTP and query it.

use folio_search::corpus::{CorpusError, CorpusIndex, TitleRegistry};
use folio_search::search::handlers::build_router;
use folio_search::search::{HighlightMode, SearchResponse};
use std::io::Write;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tempfile::{NamedTempFile, TempDir};

const CORPUS: &str = "The Project Gutenberg eBook\r\n\
                      \r\n\
                      THE SONNETS\r\n\
                      Shall I compare thee to a summer’s day?\r\n\
                      Love is not love which alters when it alteration finds\r\n\
                      THE TEMPEST\r\n\
                      We are such stuff as dreams are made on\r\n\
                      A LOVER’S COMPLAINT\r\n\
                      From off a hill whose concave womb reworded\r\n  FINIS\r\n\
                      End of the Project Gutenberg EBook; love is not indexed here\r\n";

fn write_corpus(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

async fn spawn_server(index: CorpusIndex, mode: HighlightMode, static_dir: &Path) -> SocketAddr {
    let app = build_router(Arc::new(index), mode, static_dir);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

#[test]
fn test_load_complete_works_layout() {
    let file = write_corpus(CORPUS);
    let index = CorpusIndex::load(file.path()).unwrap();

    assert_eq!(
        index.titles().collect::<Vec<_>>(),
        vec!["THE SONNETS", "THE TEMPEST", "A LOVER’S COMPLAINT"]
    );
}

#[test]
fn test_load_truncated_corpus_fails() {
    let truncated = CORPUS.split("  FINIS").next().unwrap();
    let file = write_corpus(truncated);

    let result = CorpusIndex::load(file.path());
    assert!(matches!(result, Err(CorpusError::Truncated { .. })));
}

#[tokio::test]
async fn test_search_over_http() {
    let file = write_corpus(CORPUS);
    let index = CorpusIndex::load(file.path()).unwrap();
    let static_dir = TempDir::new().unwrap();
    let addr = spawn_server(index, HighlightMode::Literal, static_dir.path()).await;

    let response = reqwest::get(format!("http://{}/search?q=love", addr))
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body: SearchResponse = response.json().await.unwrap();
    // The trailer after the end marker is never searched
    assert_eq!(body.results.len(), 1);
    assert_eq!(body.results[0].work, "THE SONNETS");
    assert!(body.results[0].snippet.contains("<mark>Love</mark> is not <mark>love</mark>"));
}

#[tokio::test]
async fn test_repeated_query_parameter_over_http() {
    let registry = TitleRegistry::with_titles(["T"]);
    let file = write_corpus("T\r\nlove\r\n  FINIS\r\n");
    let index = CorpusIndex::load_with(file.path(), &registry).unwrap();
    let static_dir = TempDir::new().unwrap();
    let addr = spawn_server(index, HighlightMode::Literal, static_dir.path()).await;

    let response = reqwest::get(format!("http://{}/search?q=love&q=hate", addr))
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body: SearchResponse = response.json().await.unwrap();
    assert_eq!(body.results.len(), 1);
    assert_eq!(body.results[0].snippet, "<mark>love</mark>\r\n");
}

#[tokio::test]
async fn test_missing_query_over_http() {
    let file = write_corpus(CORPUS);
    let index = CorpusIndex::load(file.path()).unwrap();
    let static_dir = TempDir::new().unwrap();
    let addr = spawn_server(index, HighlightMode::Literal, static_dir.path()).await;

    let response = reqwest::get(format!("http://{}/search", addr)).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    assert_eq!(
        response.text().await.unwrap(),
        "missing search query in URL params"
    );
}

#[tokio::test]
async fn test_static_assets_served_for_other_paths() {
    let registry = TitleRegistry::with_titles(["ONLY"]);
    let file = write_corpus("ONLY\r\ntext\r\n  FINIS\r\n");
    let index = CorpusIndex::load_with(file.path(), &registry).unwrap();

    let static_dir = TempDir::new().unwrap();
    std::fs::write(static_dir.path().join("index.html"), "<h1>search</h1>").unwrap();
    let addr = spawn_server(index, HighlightMode::Literal, static_dir.path()).await;

    let response = reqwest::get(format!("http://{}/", addr)).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "<h1>search</h1>");

    let response = reqwest::get(format!("http://{}/missing.js", addr))
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_concurrent_searches_share_index() {
    let file = write_corpus(CORPUS);
    let index = CorpusIndex::load(file.path()).unwrap();
    let static_dir = TempDir::new().unwrap();
    let addr = spawn_server(index, HighlightMode::Pattern, static_dir.path()).await;

    let mut handles = Vec::new();
    for query in ["love", "(broken", "dreams", "love"] {
        let url = format!("http://{}/search?q={}", addr, query);
        handles.push(tokio::spawn(async move {
            reqwest::get(url).await.unwrap().status()
        }));
    }

    let mut statuses = Vec::new();
    for handle in handles {
        statuses.push(handle.await.unwrap());
    }

    assert_eq!(
        statuses,
        vec![
            reqwest::StatusCode::OK,
            reqwest::StatusCode::BAD_REQUEST,
            reqwest::StatusCode::OK,
            reqwest::StatusCode::OK,
        ]
    );
}

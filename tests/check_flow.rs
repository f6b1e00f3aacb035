//! End-to-end flow: identifier mapping → cached fetch → evaluation

use mockito::Server;
use tempfile::TempDir;

use eol_check::eol::cache::Cache;
use eol_check::eol::evaluator::{Status, evaluate_version};
use eol_check::eol::product::map_to_product;
use eol_check::eol::source::{EndOfLifeApi, EolDataSource};

const NODEJS_CYCLES: &str = r#"[
    {"cycle": "22", "releaseDate": "2024-04-24", "eol": "2027-04-30", "lts": "2024-10-29"},
    {"cycle": "20", "releaseDate": "2023-04-18", "eol": "2026-04-30", "lts": "2023-10-24"},
    {"cycle": "18", "releaseDate": "2022-04-19", "eol": "2025-04-30", "lts": "2022-10-25"},
    {"cycle": "16", "releaseDate": "2021-04-20", "eol": "2023-09-11", "lts": "2021-10-26"},
    {"cycle": "0.10", "releaseDate": "2013-03-11", "eol": true, "lts": false}
]"#;

fn temp_source(server: &Server, temp_dir: &TempDir) -> EolDataSource<EndOfLifeApi> {
    let cache = Cache::new(temp_dir.path().join("cache"), 24 * 60 * 60 * 1000).unwrap();
    EolDataSource::new(EndOfLifeApi::new(&server.url()), cache)
}

#[tokio::test]
async fn detected_package_is_mapped_fetched_and_evaluated() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/node.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(NODEJS_CYCLES)
        .create_async()
        .await;

    let temp_dir = TempDir::new().unwrap();
    let source = temp_source(&server, &temp_dir);

    // "node" the package name maps to the "node" product key
    let product = map_to_product("node").unwrap();
    let cycles = source.fetch(product, false).await.unwrap();
    let eval = evaluate_version("node", "v16.20.0", &cycles);

    mock.assert_async().await;
    assert_eq!(eval.status, Status::Err);
    assert!(eval.message.contains("2023-09-11"));
}

#[tokio::test]
async fn second_lookup_is_served_from_cache() {
    let mut server = Server::new_async().await;
    // Exactly one remote hit allowed
    let mock = server
        .mock("GET", "/node.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(NODEJS_CYCLES)
        .expect(1)
        .create_async()
        .await;

    let temp_dir = TempDir::new().unwrap();
    let source = temp_source(&server, &temp_dir);

    let first = source.fetch("node", false).await.unwrap();
    let second = source.fetch("node", false).await.unwrap();

    mock.assert_async().await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn force_refresh_always_hits_the_remote() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/node.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(NODEJS_CYCLES)
        .expect(2)
        .create_async()
        .await;

    let temp_dir = TempDir::new().unwrap();
    let source = temp_source(&server, &temp_dir);

    source.fetch("node", false).await.unwrap();
    source.fetch("node", true).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn remote_failure_surfaces_the_product_key() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/haskell.json")
        .with_status(500)
        .create_async()
        .await;

    let temp_dir = TempDir::new().unwrap();
    let source = temp_source(&server, &temp_dir);

    let error = source.fetch("haskell", false).await.unwrap_err();

    mock.assert_async().await;
    assert_eq!(error.product(), "haskell");
}

#[tokio::test]
async fn boolean_eol_sentinel_reports_err() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/node.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(NODEJS_CYCLES)
        .create_async()
        .await;

    let temp_dir = TempDir::new().unwrap();
    let source = temp_source(&server, &temp_dir);

    let cycles = source.fetch("node", false).await.unwrap();
    let eval = evaluate_version("node", "0.10.48", &cycles);

    assert_eq!(eval.status, Status::Err);
}

#[tokio::test]
async fn unknown_version_reports_warn_not_err() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/node.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(NODEJS_CYCLES)
        .create_async()
        .await;

    let temp_dir = TempDir::new().unwrap();
    let source = temp_source(&server, &temp_dir);

    let cycles = source.fetch("node", false).await.unwrap();
    let eval = evaluate_version("node", "99.0.0", &cycles);

    assert_eq!(eval.status, Status::Warn);
    assert!(eval.message.contains("Could not find"));
}

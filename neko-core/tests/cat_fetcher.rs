//! Integration tests for the TheCatAPI fetcher against a local mock server.

use axum::Router;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use neko_core::{CatImageFetcher, Config};
use serde_json::json;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

/// One recorded request to the mock image API
#[derive(Debug, Clone, PartialEq)]
struct Recorded {
    params: Vec<(String, String)>,
    api_key: Option<String>,
}

type Requests = Arc<Mutex<Vec<Recorded>>>;

#[derive(Clone)]
struct MockCatApi {
    requests: Requests,
    status: StatusCode,
    body: String,
}

async fn search(
    State(mock): State<MockCatApi>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let mut params: Vec<(String, String)> = params.into_iter().collect();
    params.sort();
    mock.requests.lock().unwrap().push(Recorded {
        params,
        api_key: headers
            .get("x-api-key")
            .map(|v| v.to_str().unwrap().to_string()),
    });
    (
        mock.status,
        [("content-type", "application/json")],
        mock.body.clone(),
    )
}

/// Start a mock image API on an ephemeral port, returning its address and
/// the requests it has seen.
async fn spawn_cat_api(status: StatusCode, body: String) -> (SocketAddr, Requests) {
    let requests: Requests = Arc::new(Mutex::new(Vec::new()));
    let mock = MockCatApi {
        requests: requests.clone(),
        status,
        body,
    };
    let app = Router::new()
        .route("/images/search", get(search))
        .with_state(mock);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, requests)
}

fn config_for(addr: SocketAddr, cat_api_key: Option<&str>) -> Config {
    Config {
        openai_api_key: "test-key".to_string(),
        openai_base_url: "http://unused.invalid".to_string(),
        model: "gpt-4o-mini".to_string(),
        cat_api_key: cat_api_key.map(|k| k.to_string()),
        cat_api_base_url: format!("http://{addr}"),
        host: "127.0.0.1".to_string(),
        port: 0,
    }
}

#[tokio::test]
async fn success_preserves_upstream_order() {
    let body = json!([
        {"id": "a1", "url": "https://cdn.example/1.jpg"},
        {"id": "a2", "url": "https://cdn.example/2.jpg"},
        {"id": "a3", "url": "https://cdn.example/3.jpg"}
    ]);
    let (addr, _) = spawn_cat_api(StatusCode::OK, body.to_string()).await;

    let fetcher = CatImageFetcher::new(&config_for(addr, None));
    let images = fetcher.fetch(None, 3).await;

    assert_eq!(
        images,
        vec![
            "https://cdn.example/1.jpg",
            "https://cdn.example/2.jpg",
            "https://cdn.example/3.jpg"
        ]
    );
}

#[tokio::test]
async fn non_2xx_status_yields_empty_list() {
    let (addr, _) = spawn_cat_api(
        StatusCode::INTERNAL_SERVER_ERROR,
        r#"{"message": "boom"}"#.to_string(),
    )
    .await;

    let fetcher = CatImageFetcher::new(&config_for(addr, None));
    assert!(fetcher.fetch(Some("beng"), 3).await.is_empty());
}

#[tokio::test]
async fn malformed_body_yields_empty_list() {
    let (addr, _) = spawn_cat_api(StatusCode::OK, "definitely not json".to_string()).await;

    let fetcher = CatImageFetcher::new(&config_for(addr, None));
    assert!(fetcher.fetch(None, 1).await.is_empty());
}

#[tokio::test]
async fn unreachable_host_yields_empty_list() {
    // Nothing is listening on this address
    let addr: SocketAddr = "127.0.0.1:1".parse().unwrap();
    let fetcher = CatImageFetcher::new(&config_for(addr, None));
    assert!(fetcher.fetch(None, 1).await.is_empty());
}

#[tokio::test]
async fn identical_inputs_send_identical_query_params() {
    let (addr, requests) = spawn_cat_api(StatusCode::OK, "[]".to_string()).await;

    let fetcher = CatImageFetcher::new(&config_for(addr, None));
    fetcher.fetch(Some("beng"), 3).await;
    fetcher.fetch(Some("beng"), 3).await;

    let seen = requests.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0], seen[1]);
    assert_eq!(
        seen[0].params,
        vec![
            ("breed_ids".to_string(), "beng".to_string()),
            ("limit".to_string(), "3".to_string())
        ]
    );
}

#[tokio::test]
async fn breed_param_omitted_when_absent() {
    let (addr, requests) = spawn_cat_api(StatusCode::OK, "[]".to_string()).await;

    let fetcher = CatImageFetcher::new(&config_for(addr, None));
    fetcher.fetch(None, 5).await;

    let seen = requests.lock().unwrap();
    assert_eq!(seen[0].params, vec![("limit".to_string(), "5".to_string())]);
}

#[tokio::test]
async fn api_key_header_sent_when_configured() {
    let (addr, requests) = spawn_cat_api(StatusCode::OK, "[]".to_string()).await;

    let fetcher = CatImageFetcher::new(&config_for(addr, Some("live-cat-key")));
    fetcher.fetch(None, 1).await;

    let fetcher = CatImageFetcher::new(&config_for(addr, None));
    fetcher.fetch(None, 1).await;

    let seen = requests.lock().unwrap();
    assert_eq!(seen[0].api_key.as_deref(), Some("live-cat-key"));
    assert_eq!(seen[1].api_key, None);
}

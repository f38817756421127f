//! End-to-end tests for the HTTP API.
//!
//! The app runs on an ephemeral listener with a tempdir-backed draft store;
//! wiremock stands in for the GitHub API.

use std::sync::Arc;

use pressroom_core::draft::Draft;
use pressroom_core::store::JsonDraftStore;
use pressroom_github::{GithubClient, GithubConfig};
use pressroom_server::{router, AppState};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Spawn the app against a GitHub base URL; returns its address and the
/// tempdir keeping the draft store alive.
async fn spawn_app(github_url: &str) -> (String, tempfile::TempDir) {
    let config = GithubConfig::new("octo", "blog", "test-token").with_api_url(github_url);
    spawn_app_with(GithubClient::new(config)).await
}

async fn spawn_app_with(
    github: Result<GithubClient, pressroom_github::GithubError>,
) -> (String, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("tempdir");
    let state = AppState::new(Arc::new(JsonDraftStore::new(dir.path())), github);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router(state)).await.expect("serve");
    });

    (format!("http://{addr}"), dir)
}

/// Happy-path Git data API mocks: head `c0`, tree `t0`, new commit `c1`.
async fn mount_publish_sequence(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/repos/octo/blog/git/ref/heads/main"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ref": "refs/heads/main",
            "object": { "sha": "c0", "type": "commit" }
        })))
        .mount(mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/octo/blog/git/commits/c0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sha": "c0",
            "tree": { "sha": "t0" }
        })))
        .mount(mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/repos/octo/blog/git/blobs"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "sha": "b1" })))
        .mount(mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/repos/octo/blog/git/trees"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "sha": "t1" })))
        .mount(mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/repos/octo/blog/git/commits"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "sha": "c1" })))
        .mount(mock_server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/repos/octo/blog/git/refs/heads/main"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ref": "refs/heads/main",
            "object": { "sha": "c1", "type": "commit" }
        })))
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn publish_one_draft_end_to_end() {
    let mock_server = MockServer::start().await;
    mount_publish_sequence(&mock_server).await;
    let (app, _dir) = spawn_app(&mock_server.uri()).await;

    let draft = Draft::new("Hello World", "Hi");
    let response = reqwest::Client::new()
        .post(format!("{app}/api/content/publish"))
        .json(&json!({ "drafts": [draft] }))
        .send()
        .await
        .expect("request failed");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("json body");
    assert_eq!(body["success"], true);
    assert_eq!(body["files"], json!(["content/hello-world.md"]));
}

#[tokio::test]
async fn empty_draft_list_is_rejected_before_any_remote_call() {
    let mock_server = MockServer::start().await;
    // any request to the remote is a failure
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&mock_server)
        .await;
    let (app, _dir) = spawn_app(&mock_server.uri()).await;

    let response = reqwest::Client::new()
        .post(format!("{app}/api/content/publish"))
        .json(&json!({ "drafts": [] }))
        .send()
        .await
        .expect("request failed");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("json body");
    assert!(body["error"].as_str().unwrap().contains("no drafts"));
}

#[tokio::test]
async fn colliding_destination_paths_are_rejected() {
    let mock_server = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&mock_server)
        .await;
    let (app, _dir) = spawn_app(&mock_server.uri()).await;

    let a = Draft::new("Hello World", "a");
    let b = Draft::new("hello, world?", "b");
    let response = reqwest::Client::new()
        .post(format!("{app}/api/content/publish"))
        .json(&json!({ "drafts": [a, b] }))
        .send()
        .await
        .expect("request failed");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("json body");
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("content/hello-world.md"));
}

#[tokio::test]
async fn missing_github_token_is_named_in_the_error() {
    let github = GithubConfig::resolve(Some("octo".into()), Some("blog".into()), None)
        .and_then(GithubClient::new);
    let (app, _dir) = spawn_app_with(github).await;

    let draft = Draft::new("Hello", "Hi");
    let response = reqwest::Client::new()
        .post(format!("{app}/api/content/publish"))
        .json(&json!({ "drafts": [draft] }))
        .send()
        .await
        .expect("request failed");

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.expect("json body");
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("GITHUB_TOKEN"));
    assert!(!error.contains("GITHUB_OWNER"));
    assert!(!error.contains("GITHUB_REPO"));
}

#[tokio::test]
async fn content_requires_a_path_parameter() {
    let mock_server = MockServer::start().await;
    let (app, _dir) = spawn_app(&mock_server.uri()).await;

    let response = reqwest::get(format!("{app}/api/content"))
        .await
        .expect("request failed");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("json body");
    assert!(body["error"].as_str().unwrap().contains("path"));
}

#[tokio::test]
async fn content_fetch_returns_decoded_file() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/octo/blog/contents/content/hello-world.md"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "hello-world.md",
            "path": "content/hello-world.md",
            "sha": "b1",
            "content": "SGk="
        })))
        .mount(&mock_server)
        .await;
    let (app, _dir) = spawn_app(&mock_server.uri()).await;

    let response = reqwest::get(format!("{app}/api/content?path=content/hello-world.md"))
        .await
        .expect("request failed");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("json body");
    assert_eq!(body["name"], "hello-world.md");
    assert_eq!(body["content"], "Hi");
}

#[tokio::test]
async fn draft_crud_round_trip() {
    let mock_server = MockServer::start().await;
    let (app, _dir) = spawn_app(&mock_server.uri()).await;
    let client = reqwest::Client::new();

    // create
    let created: Value = client
        .post(format!("{app}/api/drafts"))
        .json(&json!({ "title": "Hello", "body": "World" }))
        .send()
        .await
        .expect("request failed")
        .json()
        .await
        .expect("json body");
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["title"], "Hello");
    assert!(created["createdAt"].is_string());

    // update keeps the id
    let updated: Value = client
        .post(format!("{app}/api/drafts"))
        .json(&json!({ "id": id, "title": "Hello 2", "body": "World" }))
        .send()
        .await
        .expect("request failed")
        .json()
        .await
        .expect("json body");
    assert_eq!(updated["id"].as_str().unwrap(), id);
    assert_eq!(updated["title"], "Hello 2");

    // list
    let listed: Value = client
        .get(format!("{app}/api/drafts"))
        .send()
        .await
        .expect("request failed")
        .json()
        .await
        .expect("json body");
    assert_eq!(listed.as_array().unwrap().len(), 1);

    // delete one, then clear
    let deleted = client
        .delete(format!("{app}/api/drafts/{id}"))
        .send()
        .await
        .expect("request failed");
    assert_eq!(deleted.status(), 204);

    let cleared = client
        .delete(format!("{app}/api/drafts"))
        .send()
        .await
        .expect("request failed");
    assert_eq!(cleared.status(), 204);

    let listed: Value = client
        .get(format!("{app}/api/drafts"))
        .send()
        .await
        .expect("request failed")
        .json()
        .await
        .expect("json body");
    assert!(listed.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn blank_draft_is_rejected() {
    let mock_server = MockServer::start().await;
    let (app, _dir) = spawn_app(&mock_server.uri()).await;

    let response = reqwest::Client::new()
        .post(format!("{app}/api/drafts"))
        .json(&json!({ "title": "  ", "body": "" }))
        .send()
        .await
        .expect("request failed");

    assert_eq!(response.status(), 400);
}

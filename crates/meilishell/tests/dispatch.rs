//! Shell dispatch against a mock Meilisearch server.

use std::time::Duration;

use meilishell::{Console, ConnectError, ConnectOptions, Flow, Session, dispatch};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn task_info(uid: u64, index: Option<&str>, kind: &str) -> serde_json::Value {
    json!({
        "taskUid": uid,
        "indexUid": index,
        "status": "enqueued",
        "type": kind,
        "enqueuedAt": "2024-05-01T10:00:00Z"
    })
}

async fn mock_instance(server: &MockServer, version: &str) {
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "available"})))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/version"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "commitSha": "b46889b5f0f2f8b91438a08a358ba8f05fc09fc1",
            "commitDate": "2024-05-01T00:00:00Z",
            "pkgVersion": version
        })))
        .mount(server)
        .await;
}

fn options(host: &str) -> ConnectOptions {
    ConnectOptions {
        host: host.to_string(),
        api_key: Some("masterKey".to_string()),
        timeout: Duration::from_secs(2),
    }
}

async fn connected(server: &MockServer) -> Session {
    mock_instance(server, "1.8.0").await;
    Session::connect(&options(&server.uri())).await.unwrap()
}

async fn request_count(server: &MockServer) -> usize {
    server.received_requests().await.unwrap_or_default().len()
}

async fn run(line: &str, session: &mut Session) -> String {
    let mut console = Console::buffer();
    let flow = dispatch(line, session, &mut console).await.unwrap();
    assert_eq!(flow, Flow::Continue);
    console.output()
}

// ─────────────────────────────────────────────────────────────────────────────
// Connect
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_connect_builds_prefix_and_version() {
    let server = MockServer::start().await;
    let session = connected(&server).await;

    let port = server.address().port();
    assert_eq!(session.prefix(), format!("Meilishell@127.0.0.1:{} > ", port));
    assert_eq!(session.server_version().pkg_version, "1.8.0");
    assert!(session.banner().contains("- Server: Meilisearch v1.8.0"));
}

#[tokio::test]
async fn test_connect_rejected_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "available"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/version"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "message": "The provided API key is invalid.",
            "code": "invalid_api_key",
            "type": "auth",
            "link": null
        })))
        .mount(&server)
        .await;

    let err = Session::connect(&options(&server.uri())).await.unwrap_err();
    assert!(matches!(err, ConnectError::InvalidCredentials { .. }));
    assert_eq!(
        err.to_string(),
        "master key is invalid, 'meilishell --api-key foobar'"
    );
}

#[tokio::test]
async fn test_connect_unhealthy() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&server)
        .await;

    let err = Session::connect(&options(&server.uri())).await.unwrap_err();
    assert!(matches!(err, ConnectError::Unreachable { .. }));
    assert!(err.to_string().starts_with("❌ Failed connect to Meilisearch at"));
}

#[tokio::test]
async fn test_failed_connect_keeps_session() {
    let server = MockServer::start().await;
    let mut session = connected(&server).await;
    let prefix = session.prefix().to_string();

    let output = run("connect http://127.0.0.1:1", &mut session).await;

    assert!(output.contains("Failed connect to Meilisearch"));
    assert_eq!(session.prefix(), prefix);
    assert_eq!(session.host().as_str(), format!("{}/", server.uri()));
}

#[tokio::test]
async fn test_connect_switches_session() {
    let first = MockServer::start().await;
    let second = MockServer::start().await;
    mock_instance(&second, "1.9.0").await;
    let mut session = connected(&first).await;

    let output = run(&format!("connect {} --api-key other", second.uri()), &mut session).await;

    assert!(output.contains("- Server: Meilisearch v1.9.0"));
    assert_eq!(
        session.prefix(),
        format!("Meilishell@127.0.0.1:{} > ", second.address().port())
    );
    assert_eq!(session.timeout(), Duration::from_secs(2));
}

// ─────────────────────────────────────────────────────────────────────────────
// Parsing
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_unknown_command_makes_no_request() {
    let server = MockServer::start().await;
    let mut session = connected(&server).await;
    let before = request_count(&server).await;

    let output = run("frobnicate now", &mut session).await;

    assert!(output.contains("unknown command"));
    assert!(output.contains("frobnicate"));
    assert_eq!(request_count(&server).await, before);
}

#[tokio::test]
async fn test_help_lists_commands() {
    let server = MockServer::start().await;
    let mut session = connected(&server).await;

    let output = run("help", &mut session).await;
    for name in ["health", "index", "key", "task", "connect", "exit"] {
        assert!(output.contains(name), "help is missing {name}");
    }

    let output = run("index create --help", &mut session).await;
    assert!(output.contains("--primary-key"));
}

#[tokio::test]
async fn test_unbalanced_quote_runs_nothing() {
    let server = MockServer::start().await;
    let mut session = connected(&server).await;
    let before = request_count(&server).await;

    let output = run("index get 'movies", &mut session).await;

    assert!(output.contains("unterminated"));
    assert_eq!(request_count(&server).await, before);
}

#[tokio::test]
async fn test_exit_and_blank_lines() {
    let server = MockServer::start().await;
    let mut session = connected(&server).await;
    let mut console = Console::buffer();

    assert_eq!(
        dispatch("   ", &mut session, &mut console).await.unwrap(),
        Flow::Continue
    );
    assert_eq!(
        dispatch("exit", &mut session, &mut console).await.unwrap(),
        Flow::Exit
    );
    assert_eq!(
        dispatch("quit", &mut session, &mut console).await.unwrap(),
        Flow::Exit
    );
    assert!(console.output().is_empty());
}

// ─────────────────────────────────────────────────────────────────────────────
// Indexes
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_index_create_flag_order() {
    let server = MockServer::start().await;
    let mut session = connected(&server).await;
    Mock::given(method("POST"))
        .and(path("/indexes"))
        .and(body_json(json!({"uid": "movies", "primaryKey": "id"})))
        .respond_with(
            ResponseTemplate::new(202).set_body_json(task_info(1, Some("movies"), "indexCreation")),
        )
        .expect(2)
        .mount(&server)
        .await;

    let a = run("index create movies --primary-key id", &mut session).await;
    let b = run("index create --primary-key id movies", &mut session).await;

    assert_eq!(a, b);
    assert!(a.contains("Task UID: 1\n"));
    assert!(a.contains("Type: indexCreation\n"));
}

#[tokio::test]
async fn test_index_create_then_get_reports_primary_key() {
    let server = MockServer::start().await;
    let mut session = connected(&server).await;
    Mock::given(method("POST"))
        .and(path("/indexes"))
        .respond_with(
            ResponseTemplate::new(202).set_body_json(task_info(7, Some("movies"), "indexCreation")),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/indexes/movies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "uid": "movies",
            "primaryKey": "id",
            "createdAt": "2024-05-01T10:00:00Z",
            "updatedAt": "2024-05-01T10:00:01Z"
        })))
        .mount(&server)
        .await;

    run("index create movies --primary-key id", &mut session).await;
    let output = run("index get movies", &mut session).await;

    assert!(output.contains("Index UID: movies\n"));
    assert!(output.contains("Primary Key: id\n"));
}

#[tokio::test]
async fn test_index_get_requires_uid() {
    let server = MockServer::start().await;
    let mut session = connected(&server).await;
    let before = request_count(&server).await;

    let output = run("index get", &mut session).await;

    assert_eq!(output, "index uid is required 'index get {uid}'\n");
    assert_eq!(request_count(&server).await, before);
}

#[tokio::test]
async fn test_index_list_numbers_entries() {
    let server = MockServer::start().await;
    let mut session = connected(&server).await;
    Mock::given(method("GET"))
        .and(path("/indexes"))
        .and(query_param("offset", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {"uid": "books", "primaryKey": null, "createdAt": "a", "updatedAt": "b"},
                {"uid": "movies", "primaryKey": "id", "createdAt": "c", "updatedAt": "d"}
            ],
            "offset": 10,
            "limit": 20,
            "total": 12
        })))
        .mount(&server)
        .await;

    let output = run("index list --offset 10", &mut session).await;

    assert!(output.starts_with("No: 11\nIndex UID: books\n"));
    assert!(output.contains("No: 12\nIndex UID: movies\n"));
    assert_eq!(output.matches("---------------------------------").count(), 2);
}

#[tokio::test]
async fn test_index_swap_malformed_pair_makes_no_request() {
    let server = MockServer::start().await;
    let mut session = connected(&server).await;
    Mock::given(method("POST"))
        .and(path("/swap-indexes"))
        .respond_with(ResponseTemplate::new(202).set_body_json(task_info(3, None, "indexSwap")))
        .expect(0)
        .mount(&server)
        .await;

    let output = run("index swap a,b c", &mut session).await;

    assert!(output.contains("invalid index pair 'c'"));
}

#[tokio::test]
async fn test_index_delete_uid_stays_in_its_segment() {
    let server = MockServer::start().await;
    let mut session = connected(&server).await;
    Mock::given(method("DELETE"))
        .and(path("/keys/abc"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/indexes/..%2Fkeys%2Fabc"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Index `../keys/abc` not found.",
            "code": "index_not_found",
            "type": "invalid_request",
            "link": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = run("index delete ../keys/abc", &mut session).await;

    assert!(output.contains("index_not_found"));
}

#[tokio::test]
async fn test_relative_uid_makes_no_request() {
    let server = MockServer::start().await;
    let mut session = connected(&server).await;
    let before = request_count(&server).await;

    let output = run("index delete ..", &mut session).await;
    assert_eq!(output, "invalid identifier '..'\n");

    let output = run("key get .", &mut session).await;
    assert_eq!(output, "invalid identifier '.'\n");

    assert_eq!(request_count(&server).await, before);
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_settings_get_one_resource() {
    let server = MockServer::start().await;
    let mut session = connected(&server).await;
    Mock::given(method("GET"))
        .and(path("/indexes/movies/settings/stop-words"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["the", "a"])))
        .mount(&server)
        .await;

    let output = run("index settings get stop-words movies", &mut session).await;

    assert_eq!(output, "Stop Words: the,a\n");
}

#[tokio::test]
async fn test_settings_update_resource_with_json() {
    let server = MockServer::start().await;
    let mut session = connected(&server).await;
    Mock::given(method("PATCH"))
        .and(path("/indexes/movies/settings/pagination"))
        .and(body_json(json!({"maxTotalHits": 5000})))
        .respond_with(
            ResponseTemplate::new(202)
                .set_body_json(task_info(9, Some("movies"), "settingsUpdate")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let output = run(
        r#"index settings update pagination movies '{"maxTotalHits": 5000}'"#,
        &mut session,
    )
    .await;

    assert!(output.contains("Task UID: 9\n"));
}

#[tokio::test]
async fn test_settings_unknown_resource() {
    let server = MockServer::start().await;
    let mut session = connected(&server).await;
    let before = request_count(&server).await;

    let output = run("index settings reset typos movies", &mut session).await;

    assert!(output.contains("unknown settings resource 'typos'"));
    assert_eq!(request_count(&server).await, before);
}

// ─────────────────────────────────────────────────────────────────────────────
// Keys and tasks
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_key_create_requires_expiry() {
    let server = MockServer::start().await;
    let mut session = connected(&server).await;
    let before = request_count(&server).await;

    let output = run("key create --actions search --indexes movies", &mut session).await;

    assert!(output.starts_with("expire-at is required"));
    assert_eq!(request_count(&server).await, before);
}

#[tokio::test]
async fn test_key_delete_confirms() {
    let server = MockServer::start().await;
    let mut session = connected(&server).await;
    Mock::given(method("DELETE"))
        .and(path("/keys/6062abda"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let output = run("key delete 6062abda", &mut session).await;

    assert_eq!(output, "key 6062abda deleted\n");
}

#[tokio::test]
async fn test_task_cancel_bad_uid_makes_no_request() {
    let server = MockServer::start().await;
    let mut session = connected(&server).await;
    Mock::given(method("POST"))
        .and(path("/tasks/cancel"))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_info(5, None, "taskCancelation")))
        .expect(0)
        .mount(&server)
        .await;

    let output = run("task cancel 1 2 x", &mut session).await;

    assert!(output.contains("invalid task uid 'x'"));
}

#[tokio::test]
async fn test_task_cancel_sends_uids() {
    let server = MockServer::start().await;
    let mut session = connected(&server).await;
    Mock::given(method("POST"))
        .and(path("/tasks/cancel"))
        .and(query_param("uids", "1,2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_info(5, None, "taskCancelation")))
        .expect(1)
        .mount(&server)
        .await;

    let output = run("task cancel 1 2", &mut session).await;

    assert!(output.contains("Type: taskCancelation\n"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Errors from the server
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_auth_error_inside_shell() {
    let server = MockServer::start().await;
    let mut session = connected(&server).await;
    Mock::given(method("GET"))
        .and(path("/stats"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "message": "The provided API key is invalid.",
            "code": "invalid_api_key",
            "type": "auth",
            "link": null
        })))
        .mount(&server)
        .await;

    let output = run("stats", &mut session).await;

    assert!(output.starts_with("not authorized, check the API key"));
}

#[tokio::test]
async fn test_not_found_is_reported() {
    let server = MockServer::start().await;
    let mut session = connected(&server).await;
    Mock::given(method("GET"))
        .and(path("/indexes/nope"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Index `nope` not found.",
            "code": "index_not_found",
            "type": "invalid_request",
            "link": "https://docs.meilisearch.com/errors#index_not_found"
        })))
        .mount(&server)
        .await;

    let output = run("index get nope", &mut session).await;

    assert!(output.contains("index_not_found"));
    assert!(output.contains("Index `nope` not found."));
}

#[tokio::test]
async fn test_health_command() {
    let server = MockServer::start().await;
    let mut session = connected(&server).await;

    let output = run("health", &mut session).await;

    assert_eq!(output, "✅ Meilisearch is healthy\n");
}

//! CLI integration tests for the meilishell binary.
//!
//! These tests verify:
//! - Help and version output
//! - Startup fails with exit status 1 and a cause-specific message when the
//!   server cannot be used

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Command for the meilishell binary, isolated from user config and history.
fn meilishell(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("meilishell").unwrap();
    cmd.env_remove("MEILISHELL_HOST")
        .env_remove("MEILISHELL_API_KEY")
        .env("MEILISHELL_CONFIG_DIR", config_dir.path())
        .current_dir(config_dir.path());
    cmd
}

// ─────────────────────────────────────────────────────────────────────────────
// Help and Version Tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_help_displays() {
    let dir = TempDir::new().unwrap();
    meilishell(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Meilisearch"))
        .stdout(predicate::str::contains("--host"))
        .stdout(predicate::str::contains("--api-key"))
        .stdout(predicate::str::contains("--no-history"));
}

#[test]
fn test_version_displays() {
    let dir = TempDir::new().unwrap();
    meilishell(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("meilishell"));
}

#[test]
fn test_invalid_timeout_rejected() {
    let dir = TempDir::new().unwrap();
    meilishell(&dir)
        .args(["--timeout", "soon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_zero_timeout_rejected() {
    let dir = TempDir::new().unwrap();
    meilishell(&dir)
        .args(["--timeout", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value '0'"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Startup Failure Tests
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_rejected_key_exits_with_status_one() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "available"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/version"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "message": "The Authorization header is missing.",
            "code": "missing_authorization_header",
            "type": "auth",
            "link": "https://docs.meilisearch.com/errors#missing_authorization_header"
        })))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    meilishell(&dir)
        .args(["--host", &server.uri(), "--api-key", "wrong"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "master key is invalid, 'meilishell --api-key foobar'",
        ));
}

#[test]
fn test_unreachable_host_exits_with_status_one() {
    let dir = TempDir::new().unwrap();
    meilishell(&dir)
        .args(["--host", "http://127.0.0.1:1", "--timeout", "2"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed connect to Meilisearch"));
}

#[test]
fn test_invalid_host_exits_with_status_one() {
    let dir = TempDir::new().unwrap();
    meilishell(&dir)
        .args(["--host", "ftp://meili.lan"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid host 'ftp://meili.lan'"));
}

#[test]
fn test_unusable_log_directory_still_reports_startup_error() {
    let dir = TempDir::new().unwrap();
    let not_a_dir = dir.path().join("config-file");
    std::fs::write(&not_a_dir, "").unwrap();

    meilishell(&dir)
        .arg("--config-dir")
        .arg(&not_a_dir)
        .args(["--host", "ftp://x"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("file logging disabled"))
        .stderr(predicate::str::contains("invalid host 'ftp://x'"));
}

#[test]
fn test_host_from_config_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[connection]\nhost = \"ftp://from-config\"\n",
    )
    .unwrap();
    meilishell(&dir)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid host 'ftp://from-config'"));
}

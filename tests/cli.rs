//! End-to-end tests for the precedent binary.
//!
//! Stdout is piped under the test harness, so every command emits JSON.

use assert_cmd::Command;
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

fn precedent(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("precedent").unwrap();
    cmd.env("HOME", home)
        .env_remove("PRECEDENT_INDEX")
        .env_remove("PRECEDENT_TOP_K")
        .env_remove("PRECEDENT_MIN_SIMILARITY")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

fn add(home: &Path, index: &Path, number: &str, title: &str, solution: &str, agent: &str) {
    precedent(home)
        .arg("--index")
        .arg(index)
        .args(["add", "--number", number, "--title", title])
        .args(["--solution", solution, "--agent", agent])
        .args(["--resolved-at", "2025-01-20T10:00:00Z"])
        .assert()
        .success();
}

fn seeded() -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let index = temp_dir.path().join("index.json");
    let home = temp_dir.path();

    precedent(home).arg("--index").arg(&index).arg("init").assert().success();
    add(home, &index, "1", "Login page crashes on submit", "Fixed null session token", "frontend-agent");
    add(home, &index, "2", "Database connection pool exhausted", "Raised pool size", "backend-agent");
    add(home, &index, "3", "Slow report export", "Streamed rows instead of buffering", "backend-agent");
    (temp_dir, index)
}

#[test]
fn search_ranks_the_related_issue_first() {
    let (temp_dir, index) = seeded();

    let value = stdout_json(
        precedent(temp_dir.path())
            .arg("--index")
            .arg(&index)
            .args(["search", "Login crashes after submit"]),
    );

    let matches = value["matches"].as_array().unwrap();
    assert!(!matches.is_empty());
    assert_eq!(matches[0]["issue_number"], 1);
    assert_eq!(matches[0]["handler_id"], "frontend-agent");
    let score = matches[0]["similarity_score"].as_f64().unwrap();
    assert!(score > 0.1 && score <= 1.0);
    assert_eq!(value["indexed_issues"], 3);
}

#[test]
fn search_respects_top_and_min_score() {
    let (temp_dir, index) = seeded();

    let value = stdout_json(
        precedent(temp_dir.path())
            .arg("--index")
            .arg(&index)
            .args(["search", "Login crashes", "--top", "0"]),
    );
    assert_eq!(value["count"], 0);

    let value = stdout_json(
        precedent(temp_dir.path())
            .arg("--index")
            .arg(&index)
            .args(["search", "Login crashes", "--top", "-1"]),
    );
    assert_eq!(value["count"], 0);

    let value = stdout_json(
        precedent(temp_dir.path())
            .arg("--index")
            .arg(&index)
            .args(["search", "Login crashes", "--min-score", "1.0"]),
    );
    assert_eq!(value["count"], 0);
}

#[test]
fn search_rejects_out_of_range_threshold() {
    let (temp_dir, index) = seeded();

    precedent(temp_dir.path())
        .arg("--index")
        .arg(&index)
        .args(["search", "anything", "--min-score", "1.5"])
        .assert()
        .code(4);
}

#[test]
fn search_on_missing_index_returns_no_matches() {
    let temp_dir = TempDir::new().unwrap();
    let index = temp_dir.path().join("absent.json");

    let value = stdout_json(
        precedent(temp_dir.path())
            .arg("--index")
            .arg(&index)
            .args(["search", "login page crash"]),
    );
    assert_eq!(value["matches"], Value::Array(vec![]));
    assert_eq!(value["indexed_issues"], 0);
}

#[test]
fn duplicate_add_exits_with_conflict_code() {
    let (temp_dir, index) = seeded();

    let output = precedent(temp_dir.path())
        .arg("--index")
        .arg(&index)
        .args(["add", "--number", "2", "--title", "Again", "--solution", "n/a"])
        .assert()
        .code(5)
        .get_output()
        .stderr
        .clone();

    let error: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(error["error"]["code"], "DUPLICATE_ISSUE");
}

#[test]
fn dry_run_add_leaves_index_untouched() {
    let (temp_dir, index) = seeded();

    let value = stdout_json(
        precedent(temp_dir.path())
            .arg("--index")
            .arg(&index)
            .args(["--dry-run", "add", "--number", "9", "--title", "Preview", "--solution", "none"]),
    );
    assert_eq!(value["dry_run"], true);

    let stats = stdout_json(precedent(temp_dir.path()).arg("--index").arg(&index).arg("stats"));
    assert_eq!(stats["total_issues"], 3);
}

#[test]
fn stats_counts_issues_per_handler() {
    let (temp_dir, index) = seeded();

    let stats = stdout_json(precedent(temp_dir.path()).arg("--index").arg(&index).arg("stats"));

    assert_eq!(stats["loaded"], true);
    assert_eq!(stats["total_issues"], 3);
    assert_eq!(stats["handler_counts"]["backend-agent"], 2);
    assert_eq!(stats["handler_counts"]["frontend-agent"], 1);
    assert!(stats["total_unique_terms"].as_u64().unwrap() > 0);
}

#[test]
fn init_twice_requires_force() {
    let temp_dir = TempDir::new().unwrap();
    let index = temp_dir.path().join("index.json");

    precedent(temp_dir.path()).arg("--index").arg(&index).arg("init").assert().success();
    precedent(temp_dir.path()).arg("--index").arg(&index).arg("init").assert().code(2);
    precedent(temp_dir.path())
        .arg("--index")
        .arg(&index)
        .args(["init", "--force"])
        .assert()
        .success();
}

#[test]
fn config_saves_search_defaults() {
    let temp_dir = TempDir::new().unwrap();

    let value = stdout_json(precedent(temp_dir.path()).args(["config", "--top-k", "3"]));
    assert_eq!(value["saved"]["top_k"], 3);
    assert_eq!(value["effective_top_k"], 3);

    let value = stdout_json(precedent(temp_dir.path()).args(["config", "--reset"]));
    assert_eq!(value["saved"], Value::Null);
    assert_eq!(value["effective_top_k"], 5);
}

#[test]
fn config_reset_recovers_from_malformed_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join(".precedent");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.json"), "{ not json").unwrap();

    precedent(temp_dir.path()).arg("config").assert().code(7);

    let value = stdout_json(precedent(temp_dir.path()).args(["config", "--reset"]));
    assert_eq!(value["saved"], Value::Null);
    assert_eq!(value["effective_top_k"], 5);

    precedent(temp_dir.path()).arg("config").assert().success();
}

#[test]
fn version_reports_index_schema() {
    let temp_dir = TempDir::new().unwrap();
    let value = stdout_json(precedent(temp_dir.path()).arg("version"));
    assert_eq!(value["index_schema"], "1.0");
}

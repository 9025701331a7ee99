//! Tests for CLI argument parsing.
//!
//! Usage errors (missing database id or token, invalid sort direction) must
//! be rejected at parse time, before any network call can happen.

use assert_cmd::Command;
use clap::error::ErrorKind;
use clap::Parser;
use notion_export::{Config, SortDirection};
use predicates::str::contains;

#[test]
fn test_parses_full_argument_set() {
    let config = Config::try_parse_from([
        "notion_export",
        "db-123",
        "--token",
        "secret_abc",
        "--sort-property",
        "Score",
        "--direction",
        "ascending",
        "--page-size",
        "50",
        "--output",
        "out.csv",
    ])
    .expect("valid arguments");

    assert_eq!(config.database_id, "db-123");
    assert_eq!(config.token, "secret_abc");
    assert_eq!(config.sort_property.as_deref(), Some("Score"));
    assert_eq!(config.direction, SortDirection::Ascending);
    assert_eq!(config.page_size, Some(50));
    assert_eq!(config.output.as_deref().unwrap().to_str(), Some("out.csv"));
}

#[test]
fn test_direction_defaults_to_descending() {
    let config =
        Config::try_parse_from(["notion_export", "db-123", "--token", "secret_abc"])
            .expect("valid arguments");
    assert_eq!(config.direction, SortDirection::Descending);
    assert!(config.sort_property.is_none());
}

#[test]
fn test_missing_database_id_is_usage_error() {
    let err = Config::try_parse_from(["notion_export", "--token", "secret_abc"])
        .expect_err("database id is required");
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn test_token_env_fallback_and_missing_token_error() {
    // set/remove in one test: parallel tests must not race on the variable
    std::env::set_var("NOTION_TOKEN", "from-env");
    let config = Config::try_parse_from(["notion_export", "db-123"])
        .expect("token comes from the environment");
    assert_eq!(config.token, "from-env");

    std::env::remove_var("NOTION_TOKEN");
    let err = Config::try_parse_from(["notion_export", "db-123"])
        .expect_err("token is required");
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn test_invalid_direction_is_rejected() {
    let err = Config::try_parse_from([
        "notion_export",
        "db-123",
        "--token",
        "secret_abc",
        "--direction",
        "sideways",
    ])
    .expect_err("sideways is not a direction");
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
}

#[test]
fn test_page_size_bounds() {
    for bad in ["0", "101"] {
        let err = Config::try_parse_from([
            "notion_export",
            "db-123",
            "--token",
            "secret_abc",
            "--page-size",
            bad,
        ])
        .expect_err("page size outside 1-100");
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    let config = Config::try_parse_from([
        "notion_export",
        "db-123",
        "--token",
        "secret_abc",
        "--page-size",
        "100",
    ])
    .expect("100 is the maximum");
    assert_eq!(config.page_size, Some(100));
}

#[test]
fn test_binary_without_arguments_exits_nonzero_with_usage() {
    Command::cargo_bin("notion_export")
        .expect("binary built")
        .env_remove("NOTION_TOKEN")
        .assert()
        .failure()
        .stderr(contains("Usage"));
}

#[test]
fn test_binary_rejects_invalid_direction_before_any_network() {
    // api-url points nowhere reachable: if parsing let this through, the
    // command would fail differently (connection error, not a usage error)
    Command::cargo_bin("notion_export")
        .expect("binary built")
        .env_remove("NOTION_TOKEN")
        .args([
            "db-123",
            "--token",
            "secret_abc",
            "--api-url",
            "http://127.0.0.1:1",
            "--direction",
            "sideways",
        ])
        .assert()
        .failure()
        .stderr(contains("sideways"));
}

#[test]
fn test_binary_exits_nonzero_on_upstream_failure() {
    Command::cargo_bin("notion_export")
        .expect("binary built")
        .env_remove("NOTION_TOKEN")
        .args([
            "db-123",
            "--token",
            "secret_abc",
            "--api-url",
            "http://127.0.0.1:1",
            "--timeout-seconds",
            "2",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("notion_export error"));
}

//! # CLI Exit Code Tests
//!
//! Runs the built `strongly` binary and checks the exit code contract:
//! 0 on success, 1 when the type rejects the input, 2 on operational
//! errors such as an unknown type name.

use std::process::{Command, Output};

fn strongly(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_strongly"))
        .args(args)
        .output()
        .expect("failed to run strongly binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

#[test]
fn parse_accepts_valid_email() {
    let out = strongly(&["parse", "EmailAddress", " ops@example.com "]);
    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).starts_with("EmailAddress: ops@example.com"));
}

#[test]
fn parse_rejection_exits_one_without_error_trace() {
    let out = strongly(&["parse", "EmailAddress", "not-an-email"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout(&out), "EmailAddress rejects \"not-an-email\"");
    assert!(String::from_utf8_lossy(&out.stderr).trim().is_empty());
}

#[test]
fn unknown_type_exits_two() {
    let out = strongly(&["parse", "Unicorn", "x"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("unknown strong type"));
}

#[test]
fn negative_values_are_not_flags() {
    let out = strongly(&["compare", "Quantity", "-5", "3"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), "Quantity: -5 < 3 (equal: false)");
}

#[test]
fn json_format_is_global() {
    let out = strongly(&["compare", "CurrencyCode", "eur", "EUR", "--format", "json"]);
    assert_eq!(out.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(value["equal"], true);
    assert_eq!(value["relation"], "equal");
}

#[test]
fn schema_prints_json() {
    let out = strongly(&["schema", "userid"]);
    assert_eq!(out.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(value["format"], "uuid");
}

#[test]
fn factory_reports_every_type() {
    let out = strongly(&["--format", "json", "factory", "--fresh"]);
    assert_eq!(out.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(value["warmed"], value["builds"]);
    assert_eq!(
        value["entries"].as_array().unwrap().len() as u64,
        value["warmed"].as_u64().unwrap()
    );
}

#[test]
fn types_lists_catalog() {
    let out = strongly(&["types", "--kind", "guid"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out).lines().count(), 2);
}

// crates/rollups-cli/src/main_tests.rs
// ============================================================================
// Module: CLI Main Helpers Tests
// Description: Unit tests for bounded reads and output rendering in the CLI.
// Purpose: Ensure bounded reads fail closed and listings keep registry order.
// Dependencies: rollups-cli main helpers
// ============================================================================

//! ## Overview
//! Validates `read_bytes_with_limit` enforces size limits for CLI inputs and
//! that parameter listings render in registry order in both formats.
//!
//! Security posture: CLI inputs are untrusted; size limits must fail closed.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;

use rollups_core::ExecutionParameters;
use rollups_core::PARAMETER_REGISTRY;
use rollups_core::list_parameters;
use tempfile::TempDir;

use super::OutputFormat;
use super::ReadLimitError;
use super::parameter_help;
use super::read_bytes_with_limit;
use super::render_application_list_text;
use super::render_parameter_list;

// ============================================================================
// SECTION: Bounded Reads
// ============================================================================

#[test]
fn read_bytes_with_limit_allows_small_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("small.json");
    fs::write(&path, b"ok").expect("write small file");

    let bytes = read_bytes_with_limit(&path, 16).expect("read small file");
    assert_eq!(bytes, b"ok");
}

#[test]
fn read_bytes_with_limit_allows_file_at_limit() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("exact.json");
    fs::write(&path, vec![b' '; 8]).expect("write file");

    assert_eq!(read_bytes_with_limit(&path, 8).expect("read file").len(), 8);
}

#[test]
fn read_bytes_with_limit_rejects_large_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("large.json");
    let limit = 8_usize;
    fs::write(&path, vec![0_u8; limit + 1]).expect("write large file");

    let err = read_bytes_with_limit(&path, limit).expect_err("expected size limit failure");
    match err {
        ReadLimitError::TooLarge { size, limit: reported } => {
            let limit_u64 = u64::try_from(limit).expect("limit fits");
            assert!(size > limit_u64);
            assert_eq!(reported, limit);
        }
        ReadLimitError::Io(err) => panic!("unexpected IO error: {err}"),
    }
}

#[test]
fn read_bytes_with_limit_reports_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = read_bytes_with_limit(&dir.path().join("absent.json"), 8).unwrap_err();
    assert!(matches!(err, ReadLimitError::Io(_)));
}

// ============================================================================
// SECTION: Rendering
// ============================================================================

#[test]
fn parameter_text_listing_uses_name_equals_value_lines() {
    let entries = list_parameters(&ExecutionParameters::default());
    let text = render_parameter_list(&entries, OutputFormat::Text).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 13);
    assert_eq!(lines[0], "snapshot_policy = NONE");
    assert_eq!(lines[5], "advance_inc_deadline = 10s");
    assert_eq!(lines[12], "max_concurrent_inspects = 10");
}

#[test]
fn parameter_json_listing_preserves_registry_order() {
    let entries = list_parameters(&ExecutionParameters::default());
    let json = render_parameter_list(&entries, OutputFormat::Json).unwrap();
    let first = json.find("\"snapshot_policy\"").unwrap();
    let middle = json.find("\"advance_inc_deadline\"").unwrap();
    let last = json.find("\"max_concurrent_inspects\"").unwrap();
    assert!(first < middle && middle < last);

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["advance_max_deadline"], "3m0s");
    assert_eq!(value["advance_max_cycles"], "4611686018427387903");
}

#[test]
fn empty_application_list_has_placeholder_text() {
    assert_eq!(render_application_list_text(&[]), "No applications registered.");
}

#[test]
fn parameter_help_lists_registry_entries_in_order() {
    let help = parameter_help();
    let mut lines = help.lines();
    assert_eq!(lines.next(), Some("Parameters:"));
    let names: Vec<&str> = lines
        .filter(|line| line.starts_with("  ") && !line.starts_with("   "))
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    let expected: Vec<&str> = PARAMETER_REGISTRY.iter().map(|entry| entry.name).collect();
    assert_eq!(names, expected);
    assert!(help.contains("  max_concurrent_inspects <unsigned integer>"));
}

// crates/rollups-core/tests/document.rs
// ============================================================================
// Module: Parameter Document Tests
// Description: Tests for strict JSON dump and load of parameter records.
// Purpose: Ensure size caps, unknown-key rejection, and validation compose.
// ============================================================================

//! ## Overview
//! Covers the document shape produced by dump, the 1 MiB boundary on load,
//! strict rejection of extraneous keys, and validation of decoded records.
//!
//! Security posture: documents are untrusted; every guard must fail closed.

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

use std::io::Cursor;
use std::io::Read;

use rollups_core::ApplicationId;
use rollups_core::ExecutionParameters;
use rollups_core::MAX_DOCUMENT_BYTES;
use rollups_core::ParamDuration;
use rollups_core::ParameterError;
use rollups_core::SnapshotPolicy;
use rollups_core::dump_document;
use rollups_core::load_document;
use rollups_core::load_document_from_reader;
use serde_json::Value;
use time::OffsetDateTime;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn sample() -> ExecutionParameters {
    let mut params = ExecutionParameters::defaults_for(
        ApplicationId::new(7),
        OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap(),
    );
    params.snapshot_policy = SnapshotPolicy::EveryEpoch;
    params.inspect_max_deadline = ParamDuration::from_nanos(1_500_000_000);
    params.max_concurrent_inspects = 32;
    params
}

fn dumped_object() -> serde_json::Map<String, Value> {
    let text = dump_document(&sample()).unwrap();
    match serde_json::from_str::<Value>(&text).unwrap() {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

fn padded_to(len: usize) -> Vec<u8> {
    let mut bytes = dump_document(&sample()).unwrap().into_bytes();
    assert!(bytes.len() <= len);
    bytes.resize(len, b' ');
    bytes
}

/// Reader that fails the test if more than `allowed` bytes are pulled.
struct CountingReader {
    inner: Cursor<Vec<u8>>,
    consumed: usize,
    allowed: usize,
}

impl Read for CountingReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let read = self.inner.read(buf)?;
        self.consumed += read;
        assert!(self.consumed <= self.allowed, "reader consumed {} bytes", self.consumed);
        Ok(read)
    }
}

// ============================================================================
// SECTION: Dump
// ============================================================================

#[test]
fn dump_uses_field_names_in_declaration_order() {
    let text = dump_document(&sample()).unwrap();
    let keys = [
        "SnapshotPolicy",
        "AdvanceIncCycles",
        "AdvanceMaxCycles",
        "InspectIncCycles",
        "InspectMaxCycles",
        "AdvanceIncDeadline",
        "AdvanceMaxDeadline",
        "InspectIncDeadline",
        "InspectMaxDeadline",
        "LoadDeadline",
        "StoreDeadline",
        "FastDeadline",
        "MaxConcurrentInspects",
        "UpdatedAt",
    ];
    let positions: Vec<usize> =
        keys.iter().map(|key| text.find(&format!("\"{key}\"")).expect(key)).collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(text.contains('\n'), "dump is pretty-printed");
}

#[test]
fn dump_encodes_durations_as_nanoseconds_and_omits_identity() {
    let object = dumped_object();
    assert_eq!(object.len(), 14);
    assert!(!object.contains_key("ApplicationID"));
    assert_eq!(object["SnapshotPolicy"], Value::from("EVERY_EPOCH"));
    assert_eq!(object["InspectMaxDeadline"], Value::from(1_500_000_000_u64));
    assert_eq!(object["AdvanceIncDeadline"], Value::from(10_000_000_000_u64));
    assert_eq!(object["MaxConcurrentInspects"], Value::from(32));
    assert_eq!(object["UpdatedAt"], Value::from("2023-11-14T22:13:20Z"));
}

#[test]
fn load_restores_every_field_except_identity() {
    let original = sample();
    let loaded = load_document(dump_document(&original).unwrap().as_bytes()).unwrap();
    assert_eq!(loaded.application_id, ApplicationId::default());
    assert_eq!(
        loaded,
        ExecutionParameters {
            application_id: ApplicationId::default(),
            ..original
        }
    );
}

// ============================================================================
// SECTION: Size Cap
// ============================================================================

#[test]
fn document_of_exactly_the_limit_loads() {
    let bytes = padded_to(MAX_DOCUMENT_BYTES);
    assert_eq!(bytes.len(), 1_048_576);
    load_document(&bytes).unwrap();
    load_document_from_reader(Cursor::new(bytes)).unwrap();
}

#[test]
fn document_one_byte_over_the_limit_is_rejected() {
    let bytes = padded_to(MAX_DOCUMENT_BYTES + 1);
    let expected = ParameterError::InputTooLarge {
        limit: MAX_DOCUMENT_BYTES,
    };
    assert_eq!(load_document(&bytes).unwrap_err(), expected);
    assert_eq!(load_document_from_reader(Cursor::new(bytes)).unwrap_err(), expected);
}

#[test]
fn reader_is_capped_before_buffering_everything() {
    let reader = CountingReader {
        inner: Cursor::new(vec![b' '; MAX_DOCUMENT_BYTES * 4]),
        consumed: 0,
        allowed: MAX_DOCUMENT_BYTES + 1,
    };
    let err = load_document_from_reader(reader).unwrap_err();
    assert!(matches!(err, ParameterError::InputTooLarge { .. }));
}

// ============================================================================
// SECTION: Strict Decode
// ============================================================================

#[test]
fn extra_key_is_rejected_and_removing_it_succeeds() {
    let mut object = dumped_object();
    object.insert("Extra".to_string(), Value::from(1));
    let with_extra = serde_json::to_vec(&Value::Object(object.clone())).unwrap();
    assert_eq!(
        load_document(&with_extra).unwrap_err(),
        ParameterError::UnknownField {
            field: "Extra".to_string(),
        }
    );

    object.remove("Extra");
    let without_extra = serde_json::to_vec(&Value::Object(object)).unwrap();
    load_document(&without_extra).unwrap();
}

#[test]
fn identity_key_is_not_accepted() {
    let mut object = dumped_object();
    object.insert("ApplicationID".to_string(), Value::from(99));
    let bytes = serde_json::to_vec(&Value::Object(object)).unwrap();
    assert!(matches!(load_document(&bytes), Err(ParameterError::UnknownField { .. })));
}

#[test]
fn codec_names_are_not_document_keys() {
    let mut object = dumped_object();
    let value = object.remove("FastDeadline").unwrap();
    object.insert("fast_deadline".to_string(), value);
    let bytes = serde_json::to_vec(&Value::Object(object)).unwrap();
    assert!(matches!(load_document(&bytes), Err(ParameterError::UnknownField { .. })));
}

#[test]
fn missing_parameter_is_a_decode_error() {
    let mut object = dumped_object();
    object.remove("LoadDeadline");
    let bytes = serde_json::to_vec(&Value::Object(object)).unwrap();
    assert!(matches!(load_document(&bytes), Err(ParameterError::Decode(_))));
}

#[test]
fn missing_timestamp_defaults_to_epoch() {
    let mut object = dumped_object();
    object.remove("UpdatedAt");
    let bytes = serde_json::to_vec(&Value::Object(object)).unwrap();
    let loaded = load_document(&bytes).unwrap();
    assert_eq!(loaded.updated_at, OffsetDateTime::UNIX_EPOCH);
}

#[test]
fn malformed_documents_are_decode_errors() {
    let inputs: [&[u8]; 4] = [b"[]", b"not json", b"{\"SnapshotPolicy\": \"SOMETIMES\"}", b""];
    for input in inputs {
        let err = load_document(input).unwrap_err();
        assert!(matches!(err, ParameterError::Decode(_)), "{err:?}");
    }
}

#[test]
fn string_durations_are_not_accepted() {
    let mut object = dumped_object();
    object.insert("StoreDeadline".to_string(), Value::from("3m0s"));
    let bytes = serde_json::to_vec(&Value::Object(object)).unwrap();
    assert!(matches!(load_document(&bytes), Err(ParameterError::Decode(_))));
}

// ============================================================================
// SECTION: Validation On Load
// ============================================================================

#[test]
fn well_formed_but_out_of_range_document_is_rejected() {
    let mut object = dumped_object();
    object.insert("MaxConcurrentInspects".to_string(), Value::from(1001));
    let bytes = serde_json::to_vec(&Value::Object(object)).unwrap();
    assert!(matches!(
        load_document(&bytes),
        Err(ParameterError::RangeViolation { parameter, .. }) if parameter == "max_concurrent_inspects"
    ));
}

#[test]
fn negative_deadline_in_document_is_rejected() {
    let mut object = dumped_object();
    object.insert("AdvanceMaxDeadline".to_string(), Value::from(-1));
    let bytes = serde_json::to_vec(&Value::Object(object)).unwrap();
    assert!(matches!(load_document(&bytes), Err(ParameterError::RangeViolation { .. })));
}

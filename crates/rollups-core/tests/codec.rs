// crates/rollups-core/tests/codec.rs
// ============================================================================
// Module: Parameter Codec Tests
// Description: Tests for name lookup, value parsing, and rendering.
// Purpose: Ensure get/set/list agree with the registry and never half-apply.
// ============================================================================

//! ## Overview
//! Exercises the string codec over every registered parameter, including
//! case-insensitive names, the length guard, and type-specific parse errors.

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

use proptest::prelude::*;
use rollups_core::ExecutionParameters;
use rollups_core::MAX_VALUE_LENGTH;
use rollups_core::PARAMETER_REGISTRY;
use rollups_core::ParamDuration;
use rollups_core::Parameter;
use rollups_core::ParameterError;
use rollups_core::SnapshotPolicy;
use rollups_core::get_parameter;
use rollups_core::list_parameters;
use rollups_core::set_parameter;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn sample_value(name: &str) -> &'static str {
    match Parameter::lookup(name).expect("registered").kind {
        rollups_core::ParameterKind::Policy => "EVERY_EPOCH",
        rollups_core::ParameterKind::Cycles => "18446744073709551615",
        rollups_core::ParameterKind::Deadline => "2h45m0.25s",
        rollups_core::ParameterKind::Concurrency => "4294967295",
    }
}

// ============================================================================
// SECTION: Get / Set
// ============================================================================

#[test]
fn get_after_set_reparses_to_same_value_for_every_name() {
    for spec in &PARAMETER_REGISTRY {
        let mut params = ExecutionParameters::default();
        set_parameter(&mut params, spec.name, sample_value(spec.name)).unwrap();
        let rendered = get_parameter(&params, spec.name).unwrap();

        let mut reparsed = ExecutionParameters::default();
        set_parameter(&mut reparsed, spec.name, &rendered).unwrap();
        assert_eq!(params, reparsed, "{}", spec.name);
        assert_eq!(get_parameter(&reparsed, spec.name).unwrap(), rendered);
    }
}

#[test]
fn names_match_case_insensitively() {
    let mut params = ExecutionParameters::default();
    set_parameter(&mut params, "Snapshot_Policy", "every_epoch").unwrap();
    assert_eq!(params.snapshot_policy, SnapshotPolicy::EveryEpoch);
    assert_eq!(get_parameter(&params, "SNAPSHOT_POLICY").unwrap(), "EVERY_EPOCH");
}

#[test]
fn unknown_names_are_rejected() {
    let mut params = ExecutionParameters::default();
    for name in ["", "snapshot-policy", "application_id", "updated_at", "max_concurrent_inspect"] {
        assert!(matches!(
            get_parameter(&params, name),
            Err(ParameterError::UnknownParameter { .. })
        ));
        assert!(matches!(
            set_parameter(&mut params, name, "1"),
            Err(ParameterError::UnknownParameter { .. })
        ));
    }
    assert_eq!(params, ExecutionParameters::default());
}

#[test]
fn snapshot_policy_is_upper_cased_before_matching() {
    let mut params = ExecutionParameters::default();
    set_parameter(&mut params, "snapshot_policy", "every_input").unwrap();
    assert_eq!(params.snapshot_policy, SnapshotPolicy::EveryInput);
    assert_eq!(get_parameter(&params, "snapshot_policy").unwrap(), "EVERY_INPUT");
}

#[test]
fn compound_duration_round_trips() {
    let mut params = ExecutionParameters::default();
    set_parameter(&mut params, "advance_inc_deadline", "1h20m0.5s").unwrap();
    let expected = ParamDuration::from_nanos(3_600_000_000_000 + 1_200_000_000_000 + 500_000_000);
    assert_eq!(params.advance_inc_deadline, expected);

    let rendered = get_parameter(&params, "advance_inc_deadline").unwrap();
    assert_eq!(rendered, "1h20m0.5s");
    assert_eq!(ParamDuration::parse(&rendered).unwrap(), expected);
}

#[test]
fn oversized_value_is_rejected_before_name_lookup() {
    let mut params = ExecutionParameters::default();
    let value = "1".repeat(MAX_VALUE_LENGTH + 1);
    let err = set_parameter(&mut params, "no_such_parameter", &value).unwrap_err();
    assert_eq!(
        err,
        ParameterError::ValueTooLong {
            length: MAX_VALUE_LENGTH + 1,
            max: MAX_VALUE_LENGTH,
        }
    );
}

#[test]
fn value_at_length_limit_reaches_the_parser() {
    let mut params = ExecutionParameters::default();
    let value = "9".repeat(MAX_VALUE_LENGTH);
    let err = set_parameter(&mut params, "advance_max_cycles", &value).unwrap_err();
    assert!(matches!(err, ParameterError::InvalidIntegerValue { .. }));
}

#[test]
fn type_specific_parse_errors_leave_record_untouched() {
    let cases = [
        ("snapshot_policy", "ALWAYS"),
        ("advance_inc_cycles", "-1"),
        ("inspect_max_cycles", "18446744073709551616"),
        ("max_concurrent_inspects", "4294967296"),
        ("max_concurrent_inspects", "ten"),
        ("max_concurrent_inspects", "+5"),
        ("advance_max_cycles", "+1"),
        ("inspect_inc_cycles", ""),
        ("load_deadline", "5"),
        ("store_deadline", "5 minutes"),
        ("fast_deadline", "1d"),
    ];
    for (name, value) in cases {
        let mut params = ExecutionParameters::default();
        let err = set_parameter(&mut params, name, value).unwrap_err();
        match err.kind() {
            "invalid_enum_value" | "invalid_integer_value" | "invalid_duration_value" => {}
            other => panic!("unexpected error kind {other} for {name}={value}"),
        }
        assert_eq!(params, ExecutionParameters::default(), "{name}={value}");
    }
}

#[test]
fn set_returns_the_resolved_parameter() {
    let mut params = ExecutionParameters::default();
    let parameter = set_parameter(&mut params, "Fast_Deadline", "250ms").unwrap();
    assert_eq!(parameter, Parameter::FastDeadline);
    assert_eq!(params.fast_deadline, ParamDuration::from_nanos(250_000_000));
}

// ============================================================================
// SECTION: List
// ============================================================================

#[test]
fn list_follows_registry_order_and_get_rendering() {
    let params = ExecutionParameters::default();
    let listed = list_parameters(&params);
    let names: Vec<&str> = listed.iter().map(|(name, _)| *name).collect();
    assert_eq!(
        names,
        [
            "snapshot_policy",
            "advance_inc_cycles",
            "advance_max_cycles",
            "inspect_inc_cycles",
            "inspect_max_cycles",
            "advance_inc_deadline",
            "advance_max_deadline",
            "inspect_inc_deadline",
            "inspect_max_deadline",
            "load_deadline",
            "store_deadline",
            "fast_deadline",
            "max_concurrent_inspects",
        ]
    );
    for (name, value) in &listed {
        assert_eq!(&get_parameter(&params, name).unwrap(), value);
    }
}

#[test]
fn defaults_render_as_expected() {
    let listed = list_parameters(&ExecutionParameters::default());
    let lookup = |name: &str| listed.iter().find(|(key, _)| *key == name).unwrap().1.clone();
    assert_eq!(lookup("snapshot_policy"), "NONE");
    assert_eq!(lookup("advance_inc_cycles"), "4194304");
    assert_eq!(lookup("advance_max_cycles"), "4611686018427387903");
    assert_eq!(lookup("advance_inc_deadline"), "10s");
    assert_eq!(lookup("advance_max_deadline"), "3m0s");
    assert_eq!(lookup("load_deadline"), "5m0s");
    assert_eq!(lookup("fast_deadline"), "5s");
    assert_eq!(lookup("max_concurrent_inspects"), "10");
}

// ============================================================================
// SECTION: Properties
// ============================================================================

proptest! {
    #[test]
    fn cycles_round_trip(value in any::<u64>()) {
        let mut params = ExecutionParameters::default();
        set_parameter(&mut params, "inspect_inc_cycles", &value.to_string()).unwrap();
        prop_assert_eq!(params.inspect_inc_cycles, value);
        prop_assert_eq!(get_parameter(&params, "inspect_inc_cycles").unwrap(), value.to_string());
    }

    #[test]
    fn deadlines_round_trip(nanos in any::<i64>()) {
        let mut params = ExecutionParameters::default();
        params.inspect_max_deadline = ParamDuration::from_nanos(nanos);
        let rendered = get_parameter(&params, "inspect_max_deadline").unwrap();
        let mut reparsed = ExecutionParameters::default();
        set_parameter(&mut reparsed, "inspect_max_deadline", &rendered).unwrap();
        prop_assert_eq!(reparsed.inspect_max_deadline.as_nanos(), nanos);
    }

    #[test]
    fn unregistered_names_never_resolve(name in "[a-zA-Z_]{0,30}") {
        prop_assume!(Parameter::lookup(&name).is_none());
        let params = ExecutionParameters::default();
        let is_unknown = matches!(
            get_parameter(&params, &name),
            Err(ParameterError::UnknownParameter { .. })
        );
        prop_assert!(is_unknown);
    }
}

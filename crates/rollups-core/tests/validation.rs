// crates/rollups-core/tests/validation.rs
// ============================================================================
// Module: Parameter Validation Tests
// Description: Boundary and property tests for the record validator.
// Purpose: Ensure the validator accepts exactly the in-range records.
// ============================================================================

//! ## Overview
//! Checks deadline and concurrency bounds at their edges, confirms cycle
//! budgets stay unbounded, and property-tests validator totality.

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
use rollups_core::MAX_DEADLINE;
use rollups_core::ParamDuration;
use rollups_core::ParameterError;
use rollups_core::SnapshotPolicy;
use rollups_core::set_parameter;
use rollups_core::validate;

// ============================================================================
// SECTION: Helpers
// ============================================================================

const DAY_NANOS: i64 = 86_400_000_000_000;

fn range_violation_parameter(err: ParameterError) -> String {
    match err {
        ParameterError::RangeViolation { parameter, .. } => parameter,
        other => panic!("expected range violation, got {other:?}"),
    }
}

// ============================================================================
// SECTION: Bounds
// ============================================================================

#[test]
fn defaults_are_valid() {
    validate(&ExecutionParameters::default()).unwrap();
}

#[test]
fn concurrency_above_limit_fails_after_successful_set() {
    let mut params = ExecutionParameters::default();
    set_parameter(&mut params, "max_concurrent_inspects", "1500").unwrap();
    assert_eq!(params.max_concurrent_inspects, 1500);

    let err = validate(&params).unwrap_err();
    assert_eq!(
        err,
        ParameterError::RangeViolation {
            parameter: "max_concurrent_inspects".to_string(),
            value: "1500".to_string(),
            min: "0".to_string(),
            max: "1000".to_string(),
        }
    );
}

#[test]
fn concurrency_edges_are_inclusive() {
    let mut params = ExecutionParameters::default();
    params.max_concurrent_inspects = 0;
    validate(&params).unwrap();
    params.max_concurrent_inspects = 1000;
    validate(&params).unwrap();
    params.max_concurrent_inspects = 1001;
    assert!(validate(&params).is_err());
}

#[test]
fn deadline_edges_are_inclusive() {
    let mut params = ExecutionParameters::default();
    params.load_deadline = ParamDuration::ZERO;
    validate(&params).unwrap();
    params.load_deadline = MAX_DEADLINE;
    validate(&params).unwrap();

    params.load_deadline = ParamDuration::from_nanos(DAY_NANOS + 1);
    assert_eq!(range_violation_parameter(validate(&params).unwrap_err()), "load_deadline");
}

#[test]
fn negative_deadline_is_rejected() {
    let mut params = ExecutionParameters::default();
    set_parameter(&mut params, "inspect_inc_deadline", "-1ns").unwrap();
    let err = validate(&params).unwrap_err();
    assert_eq!(
        err,
        ParameterError::RangeViolation {
            parameter: "inspect_inc_deadline".to_string(),
            value: "-1ns".to_string(),
            min: "0s".to_string(),
            max: "24h0m0s".to_string(),
        }
    );
}

#[test]
fn first_violation_in_registry_order_is_reported() {
    let mut params = ExecutionParameters::default();
    params.max_concurrent_inspects = 5000;
    params.fast_deadline = ParamDuration::from_nanos(-1);
    params.advance_inc_deadline = ParamDuration::from_hours(48);
    assert_eq!(range_violation_parameter(validate(&params).unwrap_err()), "advance_inc_deadline");
}

#[test]
fn cycle_budgets_are_unbounded() {
    let mut params = ExecutionParameters::default();
    params.advance_inc_cycles = u64::MAX;
    params.advance_max_cycles = 0;
    params.inspect_inc_cycles = u64::MAX;
    params.inspect_max_cycles = 0;
    validate(&params).unwrap();
}

// ============================================================================
// SECTION: Properties
// ============================================================================

fn deadline_strategy() -> impl Strategy<Value = i64> {
    prop_oneof![
        any::<i64>(),
        -2_i64 ..= 2,
        (DAY_NANOS - 2) ..= (DAY_NANOS + 2),
        0 ..= DAY_NANOS,
    ]
}

fn policy_strategy() -> impl Strategy<Value = SnapshotPolicy> {
    prop_oneof![
        Just(SnapshotPolicy::None),
        Just(SnapshotPolicy::EveryInput),
        Just(SnapshotPolicy::EveryEpoch),
    ]
}

prop_compose! {
    fn record_strategy()(
        snapshot_policy in policy_strategy(),
        cycles in prop::array::uniform4(any::<u64>()),
        deadlines in prop::array::uniform7(deadline_strategy()),
        max_concurrent_inspects in prop_oneof![any::<u32>(), 995_u32 ..= 1005],
    ) -> ExecutionParameters {
        ExecutionParameters {
            snapshot_policy,
            advance_inc_cycles: cycles[0],
            advance_max_cycles: cycles[1],
            inspect_inc_cycles: cycles[2],
            inspect_max_cycles: cycles[3],
            advance_inc_deadline: ParamDuration::from_nanos(deadlines[0]),
            advance_max_deadline: ParamDuration::from_nanos(deadlines[1]),
            inspect_inc_deadline: ParamDuration::from_nanos(deadlines[2]),
            inspect_max_deadline: ParamDuration::from_nanos(deadlines[3]),
            load_deadline: ParamDuration::from_nanos(deadlines[4]),
            store_deadline: ParamDuration::from_nanos(deadlines[5]),
            fast_deadline: ParamDuration::from_nanos(deadlines[6]),
            max_concurrent_inspects,
            ..ExecutionParameters::default()
        }
    }
}

proptest! {
    #[test]
    fn validator_accepts_exactly_in_range_records(params in record_strategy()) {
        let deadlines = [
            params.advance_inc_deadline,
            params.advance_max_deadline,
            params.inspect_inc_deadline,
            params.inspect_max_deadline,
            params.load_deadline,
            params.store_deadline,
            params.fast_deadline,
        ];
        let in_range = deadlines
            .iter()
            .all(|deadline| (0 ..= DAY_NANOS).contains(&deadline.as_nanos()))
            && params.max_concurrent_inspects <= 1000;
        prop_assert_eq!(validate(&params).is_ok(), in_range);
    }
}

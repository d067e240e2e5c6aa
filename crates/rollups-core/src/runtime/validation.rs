// crates/rollups-core/src/runtime/validation.rs
// ============================================================================
// Module: Execution Parameter Validation
// Description: Range checks gating persistence of execution parameters.
// Purpose: Guarantee every persisted record satisfies the runtime bounds.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! [`validate`] re-checks the whole record regardless of which field changed,
//! so one out-of-range field blocks persistence of any edit. Checks run in
//! registry order and stop at the first violation.
//!
//! Bounds:
//! - every deadline lies in `[0s, 24h]`;
//! - `max_concurrent_inspects` lies in `[0, 1000]`;
//! - the snapshot policy is one of its enumerated literals, which the type
//!   already guarantees;
//! - cycle budgets are unbounded.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::ExecutionParameters;
use crate::core::ParamDuration;
use crate::core::ParameterError;
use crate::core::PARAMETER_REGISTRY;
use crate::core::registry::ParameterValue;

// ============================================================================
// SECTION: Bounds
// ============================================================================

/// Inclusive upper bound for every deadline.
pub const MAX_DEADLINE: ParamDuration = ParamDuration::from_hours(24);
/// Inclusive upper bound for `max_concurrent_inspects`.
pub const MAX_CONCURRENT_INSPECTS_LIMIT: u32 = 1000;

// ============================================================================
// SECTION: Validation
// ============================================================================

/// Validates a fully populated record.
///
/// # Errors
///
/// Returns [`ParameterError::RangeViolation`] naming the first field outside
/// its bounds together with the accepted range.
pub fn validate(params: &ExecutionParameters) -> Result<(), ParameterError> {
    for spec in &PARAMETER_REGISTRY {
        match spec.parameter.value(params) {
            ParameterValue::Deadline(deadline) => {
                if deadline.is_negative() || deadline > MAX_DEADLINE {
                    return Err(ParameterError::RangeViolation {
                        parameter: spec.name.to_string(),
                        value: deadline.to_string(),
                        min: ParamDuration::ZERO.to_string(),
                        max: MAX_DEADLINE.to_string(),
                    });
                }
            }
            ParameterValue::Concurrency(limit) => {
                if limit > MAX_CONCURRENT_INSPECTS_LIMIT {
                    return Err(ParameterError::RangeViolation {
                        parameter: spec.name.to_string(),
                        value: limit.to_string(),
                        min: "0".to_string(),
                        max: MAX_CONCURRENT_INSPECTS_LIMIT.to_string(),
                    });
                }
            }
            ParameterValue::Policy(_) | ParameterValue::Cycles(_) => {}
        }
    }
    Ok(())
}

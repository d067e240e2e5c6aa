// crates/rollups-core/src/runtime/codec.rs
// ============================================================================
// Module: Execution Parameter Codec
// Description: Name/value string access to execution parameter fields.
// Purpose: Back the `get`, `set`, and `list` operator commands.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! The codec translates between the typed record and flat strings keyed by
//! the lower-case registry names. Integers render in decimal, deadlines in the
//! compound duration form (`1h2m3s`), and the snapshot policy as its literal.
//!
//! [`set_parameter`] only parses and assigns. It neither enforces the range
//! invariants nor touches `updated_at`; callers run
//! [`crate::runtime::validate`] and stamp the record before persisting.
//!
//! Security posture: values are operator input; length is bounded before any
//! parsing and a failed parse leaves the record untouched.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::ExecutionParameters;
use crate::core::ParamDuration;
use crate::core::Parameter;
use crate::core::ParameterError;
use crate::core::ParameterSpec;
use crate::core::PARAMETER_REGISTRY;
use crate::core::SnapshotPolicy;
use crate::core::registry::ParameterSlot;
use crate::core::registry::ParameterValue;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum accepted length, in bytes, of a raw `set` value.
pub const MAX_VALUE_LENGTH: usize = 100;

// ============================================================================
// SECTION: Codec Operations
// ============================================================================

/// Renders one parameter by case-insensitive name.
///
/// # Errors
///
/// Returns [`ParameterError::UnknownParameter`] when `name` is not registered.
pub fn get_parameter(params: &ExecutionParameters, name: &str) -> Result<String, ParameterError> {
    let spec = resolve(name)?;
    Ok(render_value(spec.parameter.value(params)))
}

/// Parses `value` and assigns it to the named field.
///
/// Returns the resolved parameter so callers can report which field changed.
///
/// # Errors
///
/// Returns [`ParameterError::ValueTooLong`] before any parsing when `value`
/// exceeds [`MAX_VALUE_LENGTH`], [`ParameterError::UnknownParameter`] for an
/// unregistered name, or the type-specific parse error for a malformed value.
pub fn set_parameter(
    params: &mut ExecutionParameters,
    name: &str,
    value: &str,
) -> Result<Parameter, ParameterError> {
    if value.len() > MAX_VALUE_LENGTH {
        return Err(ParameterError::ValueTooLong {
            length: value.len(),
            max: MAX_VALUE_LENGTH,
        });
    }
    let spec = resolve(name)?;
    match spec.parameter.slot(params) {
        ParameterSlot::Policy(field) => *field = parse_policy(spec, value)?,
        ParameterSlot::Cycles(field) => *field = parse_integer::<u64>(spec, value)?,
        ParameterSlot::Deadline(field) => *field = parse_deadline(spec, value)?,
        ParameterSlot::Concurrency(field) => *field = parse_integer::<u32>(spec, value)?,
    }
    Ok(spec.parameter)
}

/// Renders every parameter in registry order.
#[must_use]
pub fn list_parameters(params: &ExecutionParameters) -> Vec<(&'static str, String)> {
    PARAMETER_REGISTRY
        .iter()
        .map(|spec| (spec.name, render_value(spec.parameter.value(params))))
        .collect()
}

/// Renders a parameter value the way `get` prints it.
#[must_use]
pub fn render_value(value: ParameterValue) -> String {
    match value {
        ParameterValue::Policy(policy) => policy.as_str().to_string(),
        ParameterValue::Cycles(cycles) => cycles.to_string(),
        ParameterValue::Deadline(deadline) => deadline.to_string(),
        ParameterValue::Concurrency(limit) => limit.to_string(),
    }
}

// ============================================================================
// SECTION: Parsing Helpers
// ============================================================================

/// Resolves a name against the registry.
fn resolve(name: &str) -> Result<&'static ParameterSpec, ParameterError> {
    Parameter::lookup(name).ok_or_else(|| ParameterError::UnknownParameter {
        name: name.to_string(),
    })
}

/// Parses a snapshot policy literal, ignoring ASCII case.
fn parse_policy(spec: &ParameterSpec, value: &str) -> Result<SnapshotPolicy, ParameterError> {
    SnapshotPolicy::from_literal(&value.to_ascii_uppercase()).ok_or_else(|| {
        ParameterError::InvalidEnumValue {
            parameter: spec.name.to_string(),
            value: value.to_string(),
            expected: SnapshotPolicy::ALL
                .iter()
                .map(|policy| policy.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }
    })
}

/// Parses an unsigned decimal of the field's width.
fn parse_integer<T>(spec: &ParameterSpec, value: &str) -> Result<T, ParameterError>
where
    T: std::str::FromStr<Err = std::num::ParseIntError>,
{
    if !value.bytes().next().is_some_and(|byte| byte.is_ascii_digit()) {
        return Err(ParameterError::InvalidIntegerValue {
            parameter: spec.name.to_string(),
            value: value.to_string(),
            reason: "expected unsigned decimal digits".to_string(),
        });
    }
    value.parse::<T>().map_err(|err| ParameterError::InvalidIntegerValue {
        parameter: spec.name.to_string(),
        value: value.to_string(),
        reason: err.to_string(),
    })
}

/// Parses a compound duration literal.
fn parse_deadline(spec: &ParameterSpec, value: &str) -> Result<ParamDuration, ParameterError> {
    ParamDuration::parse(value).map_err(|err| ParameterError::InvalidDurationValue {
        parameter: spec.name.to_string(),
        value: value.to_string(),
        reason: err.to_string(),
    })
}

// crates/rollups-core/src/core/error.rs
// ============================================================================
// Module: Execution Parameter Errors
// Description: Failures raised by the parameter codec, validator, and loader.
// Purpose: Give callers a typed taxonomy to present and map to exit codes.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Every variant is a local parse, validation, or read failure. None are
//! retried internally and none leave a record partially applied: the codec
//! mutates a single field only after its value parsed, and persistence is
//! gated on [`crate::runtime::validate`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Execution parameter codec, validation, and document errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParameterError {
    /// Name is not in the parameter registry.
    #[error("unknown parameter: \"{name}\"")]
    UnknownParameter {
        /// Name as supplied by the caller.
        name: String,
    },
    /// Raw value exceeds the accepted length.
    #[error("value too long: {length} bytes (max {max})")]
    ValueTooLong {
        /// Supplied length in bytes.
        length: usize,
        /// Maximum accepted length.
        max: usize,
    },
    /// Snapshot policy literal is not recognized.
    #[error("invalid value \"{value}\" for {parameter}: expected one of {expected}")]
    InvalidEnumValue {
        /// Parameter codec name.
        parameter: String,
        /// Rejected value.
        value: String,
        /// Accepted literals, comma separated.
        expected: String,
    },
    /// Integer literal failed to parse for the field's width.
    #[error("invalid integer \"{value}\" for {parameter}: {reason}")]
    InvalidIntegerValue {
        /// Parameter codec name.
        parameter: String,
        /// Rejected value.
        value: String,
        /// Parser diagnostic.
        reason: String,
    },
    /// Duration literal failed to parse.
    #[error("invalid duration \"{value}\" for {parameter}: {reason}")]
    InvalidDurationValue {
        /// Parameter codec name.
        parameter: String,
        /// Rejected value.
        value: String,
        /// Parser diagnostic.
        reason: String,
    },
    /// Field value is outside its accepted range.
    #[error("{parameter} must be between {min} and {max}, got {value}")]
    RangeViolation {
        /// Parameter codec name.
        parameter: String,
        /// Offending value, rendered as the codec renders it.
        value: String,
        /// Inclusive lower bound.
        min: String,
        /// Inclusive upper bound.
        max: String,
    },
    /// Structured input exceeds the document size ceiling.
    #[error("input exceeds size limit of {limit} bytes")]
    InputTooLarge {
        /// Maximum accepted bytes.
        limit: usize,
    },
    /// Structured input carries a key outside the schema.
    #[error("unknown field \"{field}\" in execution parameters document")]
    UnknownField {
        /// Offending key.
        field: String,
    },
    /// Structured input is malformed.
    #[error("invalid execution parameters document: {0}")]
    Decode(String),
    /// Rendering the structured document failed.
    #[error("failed to encode execution parameters document: {0}")]
    Encode(String),
    /// Reading structured input failed.
    #[error("failed to read execution parameters document: {0}")]
    Io(String),
}

impl ParameterError {
    /// Returns a stable machine-readable kind label.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UnknownParameter {
                ..
            } => "unknown_parameter",
            Self::ValueTooLong {
                ..
            } => "value_too_long",
            Self::InvalidEnumValue {
                ..
            } => "invalid_enum_value",
            Self::InvalidIntegerValue {
                ..
            } => "invalid_integer_value",
            Self::InvalidDurationValue {
                ..
            } => "invalid_duration_value",
            Self::RangeViolation {
                ..
            } => "range_violation",
            Self::InputTooLarge {
                ..
            } => "input_too_large",
            Self::UnknownField {
                ..
            } => "unknown_field",
            Self::Decode(_) => "decode",
            Self::Encode(_) => "encode",
            Self::Io(_) => "io",
        }
    }
}

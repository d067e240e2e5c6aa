// crates/rollups-core/src/runtime/document.rs
// ============================================================================
// Module: Execution Parameter Documents
// Description: Strict JSON dump and load of a whole parameter record.
// Purpose: Back the `dump` and `load` operator commands.
// Dependencies: serde_json, crate::core, crate::runtime::validation
// ============================================================================

//! ## Overview
//! The document is a flat JSON object keyed by field names (`SnapshotPolicy`,
//! `AdvanceIncCycles`, ..., `UpdatedAt`) in declaration order. Deadlines are
//! integer nanoseconds, unlike the codec's human-readable rendering.
//!
//! Loading applies three independent guards in order:
//! 1. the read is capped at [`MAX_DOCUMENT_BYTES`] before anything is buffered
//!    beyond it;
//! 2. every key must be a schema field, so extraneous data is rejected rather
//!    than ignored;
//! 3. the decoded record passes [`validate`] before it is returned.
//!
//! The owning application is not part of the document. Loaded records carry a
//! default identifier that callers replace with the target application's.
//!
//! Security posture: documents are untrusted input and every guard fails
//! closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Read;

use serde_json::Value;

use crate::core::ExecutionParameters;
use crate::core::Parameter;
use crate::core::ParameterError;
use crate::runtime::validation::validate;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum accepted document size in bytes.
pub const MAX_DOCUMENT_BYTES: usize = 1_048_576;

/// Document key carrying the last modification time.
const UPDATED_AT_FIELD: &str = "UpdatedAt";

// ============================================================================
// SECTION: Dump
// ============================================================================

/// Renders the record as a pretty-printed JSON document.
///
/// # Errors
///
/// Returns [`ParameterError::Encode`] when serialization fails.
pub fn dump_document(params: &ExecutionParameters) -> Result<String, ParameterError> {
    serde_json::to_string_pretty(params).map_err(|err| ParameterError::Encode(err.to_string()))
}

// ============================================================================
// SECTION: Load
// ============================================================================

/// Reads at most [`MAX_DOCUMENT_BYTES`] from `reader` and loads the document.
///
/// # Errors
///
/// Returns [`ParameterError::InputTooLarge`] when the reader yields more than
/// the limit, [`ParameterError::Io`] when reading fails, or any error from
/// [`load_document`].
pub fn load_document_from_reader<R: Read>(
    reader: R,
) -> Result<ExecutionParameters, ParameterError> {
    let bytes = read_bytes_with_limit(reader, MAX_DOCUMENT_BYTES)?;
    load_document(&bytes)
}

/// Decodes and validates a document.
///
/// # Errors
///
/// Returns [`ParameterError::InputTooLarge`] for oversized input,
/// [`ParameterError::UnknownField`] for a key outside the schema,
/// [`ParameterError::Decode`] for malformed JSON or missing fields, or
/// [`ParameterError::RangeViolation`] when the record fails validation.
pub fn load_document(bytes: &[u8]) -> Result<ExecutionParameters, ParameterError> {
    if bytes.len() > MAX_DOCUMENT_BYTES {
        return Err(ParameterError::InputTooLarge {
            limit: MAX_DOCUMENT_BYTES,
        });
    }
    let value: Value =
        serde_json::from_slice(bytes).map_err(|err| ParameterError::Decode(err.to_string()))?;
    let Value::Object(fields) = value else {
        return Err(ParameterError::Decode("document must be a JSON object".to_string()));
    };
    if let Some(field) = fields.keys().find(|key| !is_schema_field(key)) {
        return Err(ParameterError::UnknownField {
            field: field.clone(),
        });
    }
    let params: ExecutionParameters = serde_json::from_value(Value::Object(fields))
        .map_err(|err| ParameterError::Decode(err.to_string()))?;
    validate(&params)?;
    Ok(params)
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Returns true when `key` names a serialized record field.
fn is_schema_field(key: &str) -> bool {
    key == UPDATED_AT_FIELD || Parameter::lookup_field(key).is_some()
}

/// Reads `reader` to the end while never buffering more than `max_bytes + 1`.
fn read_bytes_with_limit<R: Read>(reader: R, max_bytes: usize) -> Result<Vec<u8>, ParameterError> {
    let read_limit = u64::try_from(max_bytes).unwrap_or(u64::MAX).saturating_add(1);
    let mut limited = reader.take(read_limit);
    let mut bytes = Vec::new();
    limited.read_to_end(&mut bytes).map_err(|err| ParameterError::Io(err.to_string()))?;
    if bytes.len() > max_bytes {
        return Err(ParameterError::InputTooLarge {
            limit: max_bytes,
        });
    }
    Ok(bytes)
}

// crates/rollups-core/src/lib.rs
// ============================================================================
// Module: Rollups Core Library
// Description: Public API surface for the rollups administration core.
// Purpose: Expose execution-parameter types, codec, validation, and interfaces.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Rollups core owns the execution-parameter policy of a rollups application:
//! the typed record, the name registry, the string codec used by `get`/`set`/
//! `list`, the validator, and the strict JSON document used by `dump`/`load`.
//! Persistence is reached only through the [`ApplicationRepository`] trait so
//! hosts inject their own storage backend.
//!
//! Security posture: every parameter value and document is untrusted input;
//! parsing is bounded and validation fails closed before persistence.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::Application;
pub use crate::core::ApplicationError;
pub use crate::core::ApplicationId;
pub use crate::core::ApplicationKey;
pub use crate::core::ApplicationState;
pub use crate::core::DEFAULT_HASH_ALGORITHM;
pub use crate::core::DurationParseError;
pub use crate::core::ExecutionParameters;
pub use crate::core::HashAlgorithm;
pub use crate::core::HashDigest;
pub use crate::core::HashError;
pub use crate::core::NewApplication;
pub use crate::core::PARAMETER_REGISTRY;
pub use crate::core::ParamDuration;
pub use crate::core::Parameter;
pub use crate::core::ParameterError;
pub use crate::core::ParameterKind;
pub use crate::core::ParameterSpec;
pub use crate::core::ParameterValue;
pub use crate::core::SnapshotPolicy;
pub use crate::core::canonical_json_bytes;
pub use crate::core::hash_bytes;
pub use interfaces::ApplicationRepository;
pub use interfaces::StoreError;
pub use runtime::ExecutionParametersError;
pub use runtime::InMemoryApplicationRepository;
pub use runtime::MAX_CONCURRENT_INSPECTS_LIMIT;
pub use runtime::MAX_DEADLINE;
pub use runtime::MAX_DOCUMENT_BYTES;
pub use runtime::MAX_VALUE_LENGTH;
pub use runtime::apply_parameter_update;
pub use runtime::dump_document;
pub use runtime::fetch_execution_parameters;
pub use runtime::get_parameter;
pub use runtime::list_parameters;
pub use runtime::load_document;
pub use runtime::load_document_from_reader;
pub use runtime::render_value;
pub use runtime::replace_execution_parameters;
pub use runtime::resolve_application;
pub use runtime::set_parameter;
pub use runtime::validate;

// crates/rollups-core/src/core/mod.rs
// ============================================================================
// Module: Rollups Core Types
// Description: Canonical application and execution-parameter structures.
// Purpose: Provide stable, serializable types shared by the store and CLI.
// Dependencies: serde, time
// ============================================================================

//! ## Overview
//! Core types define applications, their execution parameters, the parameter
//! name registry, and the error taxonomy raised while translating parameters
//! to and from external representations.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod application;
pub mod duration;
pub mod error;
pub mod hashing;
pub mod identifiers;
pub mod parameters;
pub mod registry;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use application::Application;
pub use application::ApplicationError;
pub use application::ApplicationKey;
pub use application::ApplicationState;
pub use application::MAX_APPLICATION_NAME_LENGTH;
pub use application::MAX_TEMPLATE_URI_LENGTH;
pub use application::NewApplication;
pub use duration::DurationParseError;
pub use duration::ParamDuration;
pub use error::ParameterError;
pub use hashing::DEFAULT_HASH_ALGORITHM;
pub use hashing::HashAlgorithm;
pub use hashing::HashDigest;
pub use hashing::HashError;
pub use hashing::canonical_json_bytes;
pub use hashing::hash_bytes;
pub use identifiers::ApplicationId;
pub use parameters::DEFAULT_FAST_DEADLINE;
pub use parameters::DEFAULT_INC_CYCLES;
pub use parameters::DEFAULT_INC_DEADLINE;
pub use parameters::DEFAULT_LOAD_DEADLINE;
pub use parameters::DEFAULT_MAX_CONCURRENT_INSPECTS;
pub use parameters::DEFAULT_MAX_CYCLES;
pub use parameters::DEFAULT_MAX_DEADLINE;
pub use parameters::DEFAULT_STORE_DEADLINE;
pub use parameters::ExecutionParameters;
pub use parameters::SnapshotPolicy;
pub use registry::PARAMETER_REGISTRY;
pub use registry::Parameter;
pub use registry::ParameterKind;
pub use registry::ParameterSlot;
pub use registry::ParameterSpec;
pub use registry::ParameterValue;

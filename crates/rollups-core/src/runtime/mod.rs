// crates/rollups-core/src/runtime/mod.rs
// ============================================================================
// Module: Rollups Runtime
// Description: Codec, validation, documents, and mutation flows.
// Purpose: Operate on execution parameter records owned by applications.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! Runtime functions are synchronous and pure except for the repository calls
//! in [`service`]. Each one works on a single in-memory record supplied by the
//! caller.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod codec;
pub mod document;
pub mod service;
pub mod store;
pub mod validation;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use codec::MAX_VALUE_LENGTH;
pub use codec::get_parameter;
pub use codec::list_parameters;
pub use codec::render_value;
pub use codec::set_parameter;
pub use document::MAX_DOCUMENT_BYTES;
pub use document::dump_document;
pub use document::load_document;
pub use document::load_document_from_reader;
pub use service::ExecutionParametersError;
pub use service::apply_parameter_update;
pub use service::fetch_execution_parameters;
pub use service::replace_execution_parameters;
pub use service::resolve_application;
pub use store::InMemoryApplicationRepository;
pub use validation::MAX_CONCURRENT_INSPECTS_LIMIT;
pub use validation::MAX_DEADLINE;
pub use validation::validate;

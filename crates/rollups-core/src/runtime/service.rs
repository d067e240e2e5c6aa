// crates/rollups-core/src/runtime/service.rs
// ============================================================================
// Module: Execution Parameter Service
// Description: Read-modify-validate-write flows over an injected repository.
// Purpose: Keep the persistence ordering in one place for every host.
// Dependencies: thiserror, time, crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Mutations follow one sequence: fetch the current record, apply the change,
//! validate the full record, stamp `updated_at`, then persist. A failure at any
//! step returns before the repository is written, so an invalid record never
//! reaches storage.
//!
//! The repository and the modification time are explicit arguments. The core
//! never reads the clock and never holds ambient state. Concurrent writers race
//! with last-writer-wins semantics.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;
use time::OffsetDateTime;

use crate::core::Application;
use crate::core::ApplicationId;
use crate::core::ApplicationKey;
use crate::core::ExecutionParameters;
use crate::core::Parameter;
use crate::core::ParameterError;
use crate::interfaces::ApplicationRepository;
use crate::interfaces::StoreError;
use crate::runtime::codec::set_parameter;
use crate::runtime::validation::validate;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Failures of the execution parameter mutation flows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionParametersError {
    /// Codec, document, or validation failure.
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    /// Repository failure, including missing applications.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ExecutionParametersError {
    /// Returns a stable machine-readable kind label.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Parameter(err) => err.kind(),
            Self::Store(err) => err.kind(),
        }
    }
}

// ============================================================================
// SECTION: Lookups
// ============================================================================

/// Resolves an application reference.
///
/// # Errors
///
/// Returns [`StoreError::NotFound`] when no application matches `key`.
pub fn resolve_application<R>(repo: &R, key: &ApplicationKey) -> Result<Application, StoreError>
where
    R: ApplicationRepository + ?Sized,
{
    repo.get_application(key)?
        .ok_or_else(|| StoreError::NotFound(format!("application {key}")))
}

/// Loads the execution parameters owned by `id`.
///
/// # Errors
///
/// Returns [`StoreError::NotFound`] when the record does not exist.
pub fn fetch_execution_parameters<R>(
    repo: &R,
    id: ApplicationId,
) -> Result<ExecutionParameters, StoreError>
where
    R: ApplicationRepository + ?Sized,
{
    repo.get_execution_parameters(id)?
        .ok_or_else(|| StoreError::NotFound(format!("execution parameters for application {id}")))
}

// ============================================================================
// SECTION: Mutations
// ============================================================================

/// Sets one named parameter and persists the validated record.
///
/// Returns the persisted record and the parameter that changed.
///
/// # Errors
///
/// Returns [`ExecutionParametersError`] when the record is missing, the value
/// does not parse, the resulting record fails validation, or persistence
/// fails. Nothing is written on error.
pub fn apply_parameter_update<R>(
    repo: &R,
    id: ApplicationId,
    name: &str,
    value: &str,
    updated_at: OffsetDateTime,
) -> Result<(ExecutionParameters, Parameter), ExecutionParametersError>
where
    R: ApplicationRepository + ?Sized,
{
    let mut params = fetch_execution_parameters(repo, id)?;
    let parameter = set_parameter(&mut params, name, value)?;
    validate(&params)?;
    params.updated_at = updated_at;
    repo.update_execution_parameters(&params)?;
    Ok((params, parameter))
}

/// Replaces every parameter of `id` with a loaded record.
///
/// The loaded record's identity is discarded and replaced with `id`.
///
/// # Errors
///
/// Returns [`ExecutionParametersError`] when the target record is missing,
/// the loaded record fails validation, or persistence fails. Nothing is
/// written on error.
pub fn replace_execution_parameters<R>(
    repo: &R,
    id: ApplicationId,
    loaded: ExecutionParameters,
    updated_at: OffsetDateTime,
) -> Result<ExecutionParameters, ExecutionParametersError>
where
    R: ApplicationRepository + ?Sized,
{
    fetch_execution_parameters(repo, id)?;
    let params = ExecutionParameters {
        application_id: id,
        updated_at,
        ..loaded
    };
    validate(&params)?;
    repo.update_execution_parameters(&params)?;
    Ok(params)
}

// crates/rollups-core/src/interfaces/mod.rs
// ============================================================================
// Module: Rollups Interfaces
// Description: Backend-agnostic persistence contract for applications.
// Purpose: Let hosts inject the store that owns application records.
// Dependencies: crate::core, thiserror, time
// ============================================================================

//! ## Overview
//! The core never opens a database. Every read and write of applications and
//! their execution parameters goes through [`ApplicationRepository`], passed
//! explicitly by the caller. Implementations persist what they are given:
//! they do not validate execution parameters, which is the caller's contract
//! to uphold before calling [`ApplicationRepository::update_execution_parameters`].
//!
//! Security posture: stored data is untrusted on read; implementations must
//! fail closed on corrupted or version-mismatched records.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;
use time::OffsetDateTime;

use crate::core::Application;
use crate::core::ApplicationId;
use crate::core::ApplicationKey;
use crate::core::ApplicationState;
use crate::core::ExecutionParameters;
use crate::core::NewApplication;

// ============================================================================
// SECTION: Store Errors
// ============================================================================

/// Application repository errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Store I/O error.
    #[error("application store io error: {0}")]
    Io(String),
    /// Store data is corrupted or fails integrity checks.
    #[error("application store corruption: {0}")]
    Corrupt(String),
    /// Store data version is incompatible.
    #[error("application store version mismatch: {0}")]
    VersionMismatch(String),
    /// Store data is invalid.
    #[error("application store invalid data: {0}")]
    Invalid(String),
    /// Store reported an error.
    #[error("application store error: {0}")]
    Store(String),
    /// Requested application or record does not exist.
    #[error("not found: {0}")]
    NotFound(String),
    /// Write collides with an existing application.
    #[error("conflict: {0}")]
    Conflict(String),
}

impl StoreError {
    /// Returns a stable machine-readable kind label.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Io(_) => "store_io",
            Self::Corrupt(_) => "store_corrupt",
            Self::VersionMismatch(_) => "store_version_mismatch",
            Self::Invalid(_) => "store_invalid",
            Self::Store(_) => "store",
            Self::NotFound(_) => "not_found",
            Self::Conflict(_) => "conflict",
        }
    }
}

// ============================================================================
// SECTION: Application Repository
// ============================================================================

/// Persistence contract for applications and their execution parameters.
pub trait ApplicationRepository {
    /// Registers an application together with its default execution
    /// parameters, stamped with `created_at`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Conflict`] when the name or address is taken, or
    /// another [`StoreError`] when persistence fails.
    fn create_application(
        &self,
        application: &NewApplication,
        created_at: OffsetDateTime,
    ) -> Result<Application, StoreError>;

    /// Looks up an application by address or name.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when loading fails.
    fn get_application(&self, key: &ApplicationKey) -> Result<Option<Application>, StoreError>;

    /// Lists applications ordered by identifier, optionally filtered by state.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when loading fails.
    fn list_applications(
        &self,
        state: Option<ApplicationState>,
    ) -> Result<Vec<Application>, StoreError>;

    /// Changes the lifecycle state of an application.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the application does not exist.
    fn update_application_state(
        &self,
        id: ApplicationId,
        state: ApplicationState,
        reason: Option<&str>,
        updated_at: OffsetDateTime,
    ) -> Result<(), StoreError>;

    /// Deletes an application and its execution parameters.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the application does not exist.
    fn delete_application(&self, id: ApplicationId) -> Result<(), StoreError>;

    /// Loads the execution parameters owned by an application.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when loading fails.
    fn get_execution_parameters(
        &self,
        id: ApplicationId,
    ) -> Result<Option<ExecutionParameters>, StoreError>;

    /// Replaces the execution parameters of `params.application_id`.
    ///
    /// The record is persisted as given; callers validate it first.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the owning application does not
    /// exist, or another [`StoreError`] when persistence fails.
    fn update_execution_parameters(&self, params: &ExecutionParameters) -> Result<(), StoreError>;

    /// Reports store readiness.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store is unavailable.
    fn readiness(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

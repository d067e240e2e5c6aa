// crates/rollups-core/src/runtime/store.rs
// ============================================================================
// Module: In-Memory Application Repository
// Description: Process-local repository for tests and embedding hosts.
// Purpose: Provide a deterministic ApplicationRepository without a database.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! [`InMemoryApplicationRepository`] mirrors the durable store's semantics:
//! identifiers are assigned sequentially from 1, registration creates the
//! default parameter record, names and addresses are unique, and deletion
//! cascades to the parameter record. Nothing survives the process.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::MutexGuard;

use time::OffsetDateTime;

use crate::core::Application;
use crate::core::ApplicationId;
use crate::core::ApplicationKey;
use crate::core::ApplicationState;
use crate::core::ExecutionParameters;
use crate::core::NewApplication;
use crate::interfaces::ApplicationRepository;
use crate::interfaces::StoreError;

// ============================================================================
// SECTION: Repository
// ============================================================================

/// Mutable repository contents.
#[derive(Debug, Default)]
struct Tables {
    /// Last assigned identifier.
    last_id: i64,
    /// Applications keyed by identifier.
    applications: BTreeMap<ApplicationId, Application>,
    /// Parameter records keyed by owning application.
    parameters: BTreeMap<ApplicationId, ExecutionParameters>,
}

/// In-memory application repository.
#[derive(Debug, Default)]
pub struct InMemoryApplicationRepository {
    /// Guarded tables.
    tables: Mutex<Tables>,
}

impl InMemoryApplicationRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Locks the tables.
    fn lock(&self) -> Result<MutexGuard<'_, Tables>, StoreError> {
        self.tables.lock().map_err(|_| StoreError::Store("in-memory store mutex poisoned".to_string()))
    }
}

impl ApplicationRepository for InMemoryApplicationRepository {
    fn create_application(
        &self,
        application: &NewApplication,
        created_at: OffsetDateTime,
    ) -> Result<Application, StoreError> {
        let mut tables = self.lock()?;
        let taken = tables.applications.values().any(|existing| {
            existing.name == application.name
                || existing.application_address == application.application_address
        });
        if taken {
            return Err(StoreError::Conflict(format!(
                "application {} or address {} already registered",
                application.name, application.application_address
            )));
        }
        tables.last_id += 1;
        let id = ApplicationId::new(tables.last_id);
        let record = Application {
            id,
            name: application.name.clone(),
            application_address: application.application_address.clone(),
            consensus_address: application.consensus_address.clone(),
            template_hash: application.template_hash.clone(),
            template_uri: application.template_uri.clone(),
            epoch_length: application.epoch_length,
            state: application.state,
            reason: None,
            created_at,
            updated_at: created_at,
        };
        tables.applications.insert(id, record.clone());
        tables.parameters.insert(id, ExecutionParameters::defaults_for(id, created_at));
        Ok(record)
    }

    fn get_application(&self, key: &ApplicationKey) -> Result<Option<Application>, StoreError> {
        let tables = self.lock()?;
        Ok(tables.applications.values().find(|app| key.matches(app)).cloned())
    }

    fn list_applications(
        &self,
        state: Option<ApplicationState>,
    ) -> Result<Vec<Application>, StoreError> {
        let tables = self.lock()?;
        Ok(tables
            .applications
            .values()
            .filter(|app| state.is_none_or(|wanted| app.state == wanted))
            .cloned()
            .collect())
    }

    fn update_application_state(
        &self,
        id: ApplicationId,
        state: ApplicationState,
        reason: Option<&str>,
        updated_at: OffsetDateTime,
    ) -> Result<(), StoreError> {
        let mut tables = self.lock()?;
        let app = tables
            .applications
            .get_mut(&id)
            .ok_or_else(|| StoreError::NotFound(format!("application {id}")))?;
        app.state = state;
        app.reason = reason.map(str::to_string);
        app.updated_at = updated_at;
        Ok(())
    }

    fn delete_application(&self, id: ApplicationId) -> Result<(), StoreError> {
        let mut tables = self.lock()?;
        if tables.applications.remove(&id).is_none() {
            return Err(StoreError::NotFound(format!("application {id}")));
        }
        tables.parameters.remove(&id);
        Ok(())
    }

    fn get_execution_parameters(
        &self,
        id: ApplicationId,
    ) -> Result<Option<ExecutionParameters>, StoreError> {
        let tables = self.lock()?;
        Ok(tables.parameters.get(&id).cloned())
    }

    fn update_execution_parameters(&self, params: &ExecutionParameters) -> Result<(), StoreError> {
        let mut tables = self.lock()?;
        let id = params.application_id;
        if !tables.applications.contains_key(&id) {
            return Err(StoreError::NotFound(format!("application {id}")));
        }
        tables.parameters.insert(id, params.clone());
        Ok(())
    }
}

// crates/rollups-store-sqlite/src/store.rs
// ============================================================================
// Module: SQLite Application Repository
// Description: Durable ApplicationRepository backed by SQLite.
// Purpose: Persist applications and hashed execution parameter snapshots.
// Dependencies: rollups-core, rusqlite, serde, serde_json, thiserror, time
// ============================================================================

//! ## Overview
//! This module implements a durable [`ApplicationRepository`] using `SQLite`.
//! Applications live in one table; each owns exactly one execution parameter
//! row holding a canonical JSON snapshot and its hash. Loads verify the stored
//! hash before decoding and fail closed on corruption. Deleting an application
//! cascades to its parameters through a foreign key.
//!
//! Security posture: database contents are untrusted. The store persists
//! parameter records as given; range validation happens before the call.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;

use rollups_core::Application;
use rollups_core::ApplicationId;
use rollups_core::ApplicationKey;
use rollups_core::ApplicationRepository;
use rollups_core::ApplicationState;
use rollups_core::ExecutionParameters;
use rollups_core::MAX_DOCUMENT_BYTES;
use rollups_core::NewApplication;
use rollups_core::StoreError;
use rollups_core::DEFAULT_HASH_ALGORITHM;
use rollups_core::HashAlgorithm;
use rollups_core::canonical_json_bytes;
use rollups_core::hash_bytes;
use rusqlite::Connection;
use rusqlite::ErrorCode;
use rusqlite::OpenFlags;
use rusqlite::OptionalExtension;
use rusqlite::params;
use serde::Deserialize;
use thiserror::Error;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// `SQLite` schema version for the store.
const SCHEMA_VERSION: i64 = 1;
/// Default busy timeout (ms).
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;
/// Maximum length of a single path component.
const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum parameter snapshot size accepted by the store.
pub const MAX_PARAMS_BYTES: usize = MAX_DOCUMENT_BYTES;
/// Column list shared by application queries.
const APPLICATION_COLUMNS: &str = "id, name, application_address, consensus_address, \
                                   template_hash, template_uri, epoch_length, state, reason, \
                                   created_at, updated_at";

// ============================================================================
// SECTION: Config
// ============================================================================

/// `SQLite` journal mode configuration.
///
/// # Invariants
/// - Values map 1:1 to `SQLite` `journal_mode` pragma settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SqliteStoreMode {
    /// WAL journal mode (recommended).
    #[default]
    Wal,
    /// Delete journal mode (legacy).
    Delete,
}

impl SqliteStoreMode {
    /// Returns the `SQLite` pragma value.
    #[must_use]
    pub const fn pragma_value(self) -> &'static str {
        match self {
            Self::Wal => "wal",
            Self::Delete => "delete",
        }
    }
}

/// `SQLite` sync mode configuration.
///
/// # Invariants
/// - Values map 1:1 to `SQLite` `synchronous` pragma settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SqliteSyncMode {
    /// Full synchronous mode (safest).
    #[default]
    Full,
    /// Normal synchronous mode (balanced).
    Normal,
}

impl SqliteSyncMode {
    /// Returns the `SQLite` pragma value.
    #[must_use]
    pub const fn pragma_value(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Normal => "normal",
        }
    }
}

/// Configuration for the `SQLite` application repository.
///
/// # Invariants
/// - `path` must resolve to a file path (not a directory).
/// - `busy_timeout_ms` is interpreted as milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SqliteStoreConfig {
    /// Path to the `SQLite` database file.
    pub path: PathBuf,
    /// Busy timeout in milliseconds.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
    /// `SQLite` journal mode.
    #[serde(default)]
    pub journal_mode: SqliteStoreMode,
    /// `SQLite` sync mode.
    #[serde(default)]
    pub sync_mode: SqliteSyncMode,
}

impl SqliteStoreConfig {
    /// Returns a configuration with default pragmas for `path`.
    #[must_use]
    pub fn for_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
            journal_mode: SqliteStoreMode::default(),
            sync_mode: SqliteSyncMode::default(),
        }
    }
}

/// Returns the default busy timeout for `SQLite` connections.
const fn default_busy_timeout_ms() -> u64 {
    DEFAULT_BUSY_TIMEOUT_MS
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// `SQLite` store errors.
///
/// # Invariants
/// - Error messages avoid embedding raw parameter payloads.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SqliteStoreError {
    /// Store I/O error.
    #[error("sqlite store io error: {0}")]
    Io(String),
    /// `SQLite` engine error.
    #[error("sqlite store db error: {0}")]
    Db(String),
    /// Store corruption or hash mismatch.
    #[error("sqlite store corruption: {0}")]
    Corrupt(String),
    /// Store schema version mismatch.
    #[error("sqlite store version mismatch: {0}")]
    VersionMismatch(String),
    /// Invalid store data.
    #[error("sqlite store invalid data: {0}")]
    Invalid(String),
    /// Stored payload exceeded size limits.
    #[error("sqlite store payload too large: {actual_bytes} bytes (max {max_bytes})")]
    TooLarge {
        /// Maximum allowed bytes.
        max_bytes: usize,
        /// Actual payload size in bytes.
        actual_bytes: usize,
    },
    /// Requested row does not exist.
    #[error("sqlite store not found: {0}")]
    NotFound(String),
    /// Write violated a uniqueness constraint.
    #[error("sqlite store conflict: {0}")]
    Conflict(String),
}

impl From<SqliteStoreError> for StoreError {
    fn from(error: SqliteStoreError) -> Self {
        match error {
            SqliteStoreError::Io(message) => Self::Io(message),
            SqliteStoreError::Db(message) => Self::Store(message),
            SqliteStoreError::Corrupt(message) => Self::Corrupt(message),
            SqliteStoreError::VersionMismatch(message) => Self::VersionMismatch(message),
            SqliteStoreError::Invalid(message) => Self::Invalid(message),
            SqliteStoreError::TooLarge {
                max_bytes,
                actual_bytes,
            } => Self::Invalid(format!(
                "params_json exceeds size limit: {actual_bytes} bytes (max {max_bytes})"
            )),
            SqliteStoreError::NotFound(message) => Self::NotFound(message),
            SqliteStoreError::Conflict(message) => Self::Conflict(message),
        }
    }
}

// ============================================================================
// SECTION: Store
// ============================================================================

/// `SQLite`-backed application repository.
///
/// # Invariants
/// - Parameter loads verify stored hashes before deserialization.
/// - `SQLite` connection access is serialized through a mutex.
#[derive(Clone)]
pub struct SqliteApplicationRepository {
    /// Store configuration.
    config: SqliteStoreConfig,
    /// Shared connection guarded by a mutex.
    connection: Arc<Mutex<Connection>>,
}

impl SqliteApplicationRepository {
    /// Opens an `SQLite`-backed application repository.
    ///
    /// # Errors
    ///
    /// Returns [`SqliteStoreError`] when the database cannot be opened or
    /// initialized.
    pub fn new(config: SqliteStoreConfig) -> Result<Self, SqliteStoreError> {
        validate_store_path(&config.path)?;
        ensure_parent_dir(&config.path)?;
        let mut connection = open_connection(&config)?;
        initialize_schema(&mut connection)?;
        Ok(Self {
            config,
            connection: Arc::new(Mutex::new(connection)),
        })
    }

    /// Returns the store configuration.
    #[must_use]
    pub const fn config(&self) -> &SqliteStoreConfig {
        &self.config
    }

    /// Locks the shared connection.
    fn lock(&self) -> Result<MutexGuard<'_, Connection>, SqliteStoreError> {
        self.connection.lock().map_err(|_| SqliteStoreError::Db("sqlite mutex poisoned".to_string()))
    }

    /// Inserts an application and its default parameters in one transaction.
    fn insert_application(
        &self,
        application: &NewApplication,
        created_at: OffsetDateTime,
    ) -> Result<Application, SqliteStoreError> {
        let epoch_length = i64::try_from(application.epoch_length)
            .map_err(|_| SqliteStoreError::Invalid("epoch_length too large".to_string()))?;
        let created_text = format_timestamp(created_at)?;
        let mut guard = self.lock()?;
        let tx = guard.transaction().map_err(|err| SqliteStoreError::Db(err.to_string()))?;
        tx.execute(
            "INSERT INTO applications (name, application_address, consensus_address, \
             template_hash, template_uri, epoch_length, state, reason, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, NULL, ?8, ?8)",
            params![
                application.name,
                application.application_address,
                application.consensus_address,
                application.template_hash,
                application.template_uri,
                epoch_length,
                application.state.as_str(),
                created_text,
            ],
        )
        .map_err(|err| map_write_error(&err, &application.name))?;
        let id = ApplicationId::new(tx.last_insert_rowid());
        let params = ExecutionParameters::defaults_for(id, created_at);
        let snapshot = ParamsSnapshot::prepare(&params)?;
        tx.execute(
            "INSERT INTO execution_parameters (application_id, params_json, params_hash, \
             hash_algorithm, updated_at) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                id.get(),
                snapshot.bytes,
                snapshot.hash_value,
                snapshot.hash_algorithm,
                created_text
            ],
        )
        .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
        tx.commit().map_err(|err| SqliteStoreError::Db(err.to_string()))?;
        drop(guard);
        Ok(Application {
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
        })
    }

    /// Loads one application by address or name.
    fn select_application(
        &self,
        key: &ApplicationKey,
    ) -> Result<Option<Application>, SqliteStoreError> {
        let (column, value) = match key {
            ApplicationKey::Address(address) => ("application_address", address.as_str()),
            ApplicationKey::Name(name) => ("name", name.as_str()),
        };
        let guard = self.lock()?;
        let row = guard
            .query_row(
                &format!("SELECT {APPLICATION_COLUMNS} FROM applications WHERE {column} = ?1"),
                params![value],
                map_application_row,
            )
            .optional()
            .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
        drop(guard);
        row.map(ApplicationRow::into_application).transpose()
    }

    /// Lists applications ordered by identifier.
    fn select_applications(
        &self,
        state: Option<ApplicationState>,
    ) -> Result<Vec<Application>, SqliteStoreError> {
        let guard = self.lock()?;
        let mut stmt = guard
            .prepare(&format!(
                "SELECT {APPLICATION_COLUMNS} FROM applications WHERE (?1 IS NULL OR state = ?1) \
                 ORDER BY id"
            ))
            .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
        let rows = stmt
            .query_map(params![state.map(ApplicationState::as_str)], map_application_row)
            .map_err(|err| SqliteStoreError::Db(err.to_string()))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
        drop(stmt);
        drop(guard);
        rows.into_iter().map(ApplicationRow::into_application).collect()
    }

    /// Updates the lifecycle state of one application.
    fn write_state(
        &self,
        id: ApplicationId,
        state: ApplicationState,
        reason: Option<&str>,
        updated_at: OffsetDateTime,
    ) -> Result<(), SqliteStoreError> {
        let updated_text = format_timestamp(updated_at)?;
        let guard = self.lock()?;
        let changed = guard
            .execute(
                "UPDATE applications SET state = ?1, reason = ?2, updated_at = ?3 WHERE id = ?4",
                params![state.as_str(), reason, updated_text, id.get()],
            )
            .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
        drop(guard);
        if changed == 0 {
            return Err(SqliteStoreError::NotFound(format!("application {id}")));
        }
        Ok(())
    }

    /// Deletes one application; parameters cascade.
    fn remove_application(&self, id: ApplicationId) -> Result<(), SqliteStoreError> {
        let guard = self.lock()?;
        let changed = guard
            .execute("DELETE FROM applications WHERE id = ?1", params![id.get()])
            .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
        drop(guard);
        if changed == 0 {
            return Err(SqliteStoreError::NotFound(format!("application {id}")));
        }
        Ok(())
    }

    /// Loads and verifies the parameter snapshot of one application.
    fn load_params(
        &self,
        id: ApplicationId,
    ) -> Result<Option<ExecutionParameters>, SqliteStoreError> {
        let Some(snapshot) = fetch_params_snapshot(&self.connection, id)? else {
            return Ok(None);
        };
        let algorithm = parse_hash_algorithm(&snapshot.hash_algorithm)?;
        let expected = hash_bytes(algorithm, &snapshot.bytes);
        if expected.value != snapshot.hash_value {
            return Err(SqliteStoreError::Corrupt(format!(
                "hash mismatch for execution parameters of application {id}"
            )));
        }
        let mut params: ExecutionParameters = serde_json::from_slice(&snapshot.bytes)
            .map_err(|err| SqliteStoreError::Invalid(err.to_string()))?;
        params.application_id = id;
        Ok(Some(params))
    }

    /// Replaces the parameter snapshot of one application.
    fn save_params(&self, params: &ExecutionParameters) -> Result<(), SqliteStoreError> {
        let id = params.application_id;
        let snapshot = ParamsSnapshot::prepare(params)?;
        let updated_text = format_timestamp(params.updated_at)?;
        let guard = self.lock()?;
        let changed = guard
            .execute(
                "UPDATE execution_parameters SET params_json = ?1, params_hash = ?2, \
                 hash_algorithm = ?3, updated_at = ?4 WHERE application_id = ?5",
                params![
                    snapshot.bytes,
                    snapshot.hash_value,
                    snapshot.hash_algorithm,
                    updated_text,
                    id.get()
                ],
            )
            .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
        drop(guard);
        if changed == 0 {
            return Err(SqliteStoreError::NotFound(format!(
                "execution parameters for application {id}"
            )));
        }
        Ok(())
    }

    /// Verifies the store can execute a simple SQL statement.
    fn check_connection(&self) -> Result<(), SqliteStoreError> {
        let guard = self.lock()?;
        guard.execute_batch("SELECT 1").map_err(|err| SqliteStoreError::Db(err.to_string()))
    }
}

impl ApplicationRepository for SqliteApplicationRepository {
    fn create_application(
        &self,
        application: &NewApplication,
        created_at: OffsetDateTime,
    ) -> Result<Application, StoreError> {
        self.insert_application(application, created_at).map_err(StoreError::from)
    }

    fn get_application(&self, key: &ApplicationKey) -> Result<Option<Application>, StoreError> {
        self.select_application(key).map_err(StoreError::from)
    }

    fn list_applications(
        &self,
        state: Option<ApplicationState>,
    ) -> Result<Vec<Application>, StoreError> {
        self.select_applications(state).map_err(StoreError::from)
    }

    fn update_application_state(
        &self,
        id: ApplicationId,
        state: ApplicationState,
        reason: Option<&str>,
        updated_at: OffsetDateTime,
    ) -> Result<(), StoreError> {
        self.write_state(id, state, reason, updated_at).map_err(StoreError::from)
    }

    fn delete_application(&self, id: ApplicationId) -> Result<(), StoreError> {
        self.remove_application(id).map_err(StoreError::from)
    }

    fn get_execution_parameters(
        &self,
        id: ApplicationId,
    ) -> Result<Option<ExecutionParameters>, StoreError> {
        self.load_params(id).map_err(StoreError::from)
    }

    fn update_execution_parameters(&self, params: &ExecutionParameters) -> Result<(), StoreError> {
        self.save_params(params).map_err(StoreError::from)
    }

    fn readiness(&self) -> Result<(), StoreError> {
        self.check_connection().map_err(StoreError::from)
    }
}

// ============================================================================
// SECTION: Rows + Snapshots
// ============================================================================

/// Raw application row as stored.
#[derive(Debug)]
struct ApplicationRow {
    /// Row identifier.
    id: i64,
    /// Short name.
    name: String,
    /// Application contract address.
    application_address: String,
    /// Consensus contract address.
    consensus_address: String,
    /// Template hash.
    template_hash: String,
    /// Template location.
    template_uri: String,
    /// Blocks per epoch.
    epoch_length: i64,
    /// State literal.
    state: String,
    /// Optional state reason.
    reason: Option<String>,
    /// RFC 3339 registration time.
    created_at: String,
    /// RFC 3339 modification time.
    updated_at: String,
}

impl ApplicationRow {
    /// Converts the stored row into a typed application.
    fn into_application(self) -> Result<Application, SqliteStoreError> {
        let state = self.state.parse::<ApplicationState>().map_err(|_| {
            SqliteStoreError::Corrupt(format!("invalid state for application {}", self.id))
        })?;
        let epoch_length = u64::try_from(self.epoch_length).map_err(|_| {
            SqliteStoreError::Corrupt(format!("negative epoch_length for application {}", self.id))
        })?;
        Ok(Application {
            id: ApplicationId::new(self.id),
            name: self.name,
            application_address: self.application_address,
            consensus_address: self.consensus_address,
            template_hash: self.template_hash,
            template_uri: self.template_uri,
            epoch_length,
            state,
            reason: self.reason,
            created_at: parse_timestamp(&self.created_at)?,
            updated_at: parse_timestamp(&self.updated_at)?,
        })
    }
}

/// Maps an application query row.
fn map_application_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ApplicationRow> {
    Ok(ApplicationRow {
        id: row.get(0)?,
        name: row.get(1)?,
        application_address: row.get(2)?,
        consensus_address: row.get(3)?,
        template_hash: row.get(4)?,
        template_uri: row.get(5)?,
        epoch_length: row.get(6)?,
        state: row.get(7)?,
        reason: row.get(8)?,
        created_at: row.get(9)?,
        updated_at: row.get(10)?,
    })
}

/// Canonical parameter snapshot with its integrity hash.
#[derive(Debug)]
struct ParamsSnapshot {
    /// Canonical JSON bytes.
    bytes: Vec<u8>,
    /// Hex-encoded digest of `bytes`.
    hash_value: String,
    /// Digest algorithm label.
    hash_algorithm: String,
}

impl ParamsSnapshot {
    /// Serializes and hashes a parameter record.
    fn prepare(params: &ExecutionParameters) -> Result<Self, SqliteStoreError> {
        let bytes = canonical_json_bytes(params)
            .map_err(|err| SqliteStoreError::Invalid(err.to_string()))?;
        if bytes.len() > MAX_PARAMS_BYTES {
            return Err(SqliteStoreError::TooLarge {
                max_bytes: MAX_PARAMS_BYTES,
                actual_bytes: bytes.len(),
            });
        }
        let digest = hash_bytes(DEFAULT_HASH_ALGORITHM, &bytes);
        Ok(Self {
            bytes,
            hash_value: digest.value,
            hash_algorithm: DEFAULT_HASH_ALGORITHM.label().to_string(),
        })
    }
}

/// Fetches the raw parameter snapshot, enforcing the size limit before reading it.
fn fetch_params_snapshot(
    connection: &Mutex<Connection>,
    id: ApplicationId,
) -> Result<Option<ParamsSnapshot>, SqliteStoreError> {
    let mut guard =
        connection.lock().map_err(|_| SqliteStoreError::Db("mutex poisoned".to_string()))?;
    let snapshot = {
        let tx = guard.transaction().map_err(|err| SqliteStoreError::Db(err.to_string()))?;
        let metadata = tx
            .query_row(
                "SELECT length(params_json), params_hash, hash_algorithm FROM \
                 execution_parameters WHERE application_id = ?1",
                params![id.get()],
                |row| {
                    let length: i64 = row.get(0)?;
                    let hash: String = row.get(1)?;
                    let algorithm: String = row.get(2)?;
                    Ok((length, hash, algorithm))
                },
            )
            .optional()
            .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
        let snapshot = if let Some((length, hash_value, hash_algorithm)) = metadata {
            let length = usize::try_from(length).map_err(|_| {
                SqliteStoreError::Invalid(format!(
                    "negative params_json length for application {id}"
                ))
            })?;
            if length > MAX_PARAMS_BYTES {
                return Err(SqliteStoreError::TooLarge {
                    max_bytes: MAX_PARAMS_BYTES,
                    actual_bytes: length,
                });
            }
            let bytes: Vec<u8> = tx
                .query_row(
                    "SELECT params_json FROM execution_parameters WHERE application_id = ?1",
                    params![id.get()],
                    |row| row.get(0),
                )
                .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
            Some(ParamsSnapshot {
                bytes,
                hash_value,
                hash_algorithm,
            })
        } else {
            None
        };
        tx.commit().map_err(|err| SqliteStoreError::Db(err.to_string()))?;
        snapshot
    };
    drop(guard);
    Ok(snapshot)
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Ensures the parent directory exists for the store path.
fn ensure_parent_dir(path: &Path) -> Result<(), SqliteStoreError> {
    let Some(parent) = path.parent() else {
        return Err(SqliteStoreError::Io("store path missing parent directory".to_string()));
    };
    std::fs::create_dir_all(parent).map_err(|err| SqliteStoreError::Io(err.to_string()))
}

/// Validates store paths for safety limits.
fn validate_store_path(path: &Path) -> Result<(), SqliteStoreError> {
    if path.as_os_str().is_empty() {
        return Err(SqliteStoreError::Invalid("store path must not be empty".to_string()));
    }
    let path_string = path.display().to_string();
    if path_string.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(SqliteStoreError::Invalid("store path exceeds length limit".to_string()));
    }
    for component in path.components() {
        let name = component.as_os_str().to_string_lossy();
        if name.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(SqliteStoreError::Invalid(
                "store path contains an overlong component".to_string(),
            ));
        }
    }
    if path.is_dir() {
        return Err(SqliteStoreError::Invalid(
            "store path must be a file, not a directory".to_string(),
        ));
    }
    Ok(())
}

/// Opens an `SQLite` connection with secure defaults.
fn open_connection(config: &SqliteStoreConfig) -> Result<Connection, SqliteStoreError> {
    let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
        | OpenFlags::SQLITE_OPEN_CREATE
        | OpenFlags::SQLITE_OPEN_FULL_MUTEX;
    let connection = Connection::open_with_flags(&config.path, flags)
        .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
    apply_pragmas(&connection, config)?;
    Ok(connection)
}

/// Applies `SQLite` pragmas required for durability and cascades.
fn apply_pragmas(
    connection: &Connection,
    config: &SqliteStoreConfig,
) -> Result<(), SqliteStoreError> {
    connection
        .execute_batch("PRAGMA foreign_keys = ON;")
        .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
    connection
        .execute_batch(&format!("PRAGMA journal_mode = {};", config.journal_mode.pragma_value()))
        .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
    connection
        .execute_batch(&format!("PRAGMA synchronous = {};", config.sync_mode.pragma_value()))
        .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
    connection
        .busy_timeout(std::time::Duration::from_millis(config.busy_timeout_ms))
        .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
    Ok(())
}

/// Initializes the `SQLite` schema or validates existing version.
fn initialize_schema(connection: &mut Connection) -> Result<(), SqliteStoreError> {
    let tx = connection.transaction().map_err(|err| SqliteStoreError::Db(err.to_string()))?;
    tx.execute_batch("CREATE TABLE IF NOT EXISTS store_meta (version INTEGER NOT NULL);")
        .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
    let version: Option<i64> = tx
        .query_row("SELECT version FROM store_meta LIMIT 1", params![], |row| row.get(0))
        .optional()
        .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
    match version {
        None => {
            tx.execute("INSERT INTO store_meta (version) VALUES (?1)", params![SCHEMA_VERSION])
                .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
            tx.execute_batch(
                "CREATE TABLE IF NOT EXISTS applications (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    name TEXT NOT NULL UNIQUE,
                    application_address TEXT NOT NULL UNIQUE,
                    consensus_address TEXT NOT NULL,
                    template_hash TEXT NOT NULL,
                    template_uri TEXT NOT NULL,
                    epoch_length INTEGER NOT NULL,
                    state TEXT NOT NULL,
                    reason TEXT,
                    created_at TEXT NOT NULL,
                    updated_at TEXT NOT NULL
                );
                CREATE INDEX IF NOT EXISTS idx_applications_state ON applications (state);
                CREATE TABLE IF NOT EXISTS execution_parameters (
                    application_id INTEGER PRIMARY KEY,
                    params_json BLOB NOT NULL,
                    params_hash TEXT NOT NULL,
                    hash_algorithm TEXT NOT NULL,
                    updated_at TEXT NOT NULL,
                    FOREIGN KEY (application_id)
                        REFERENCES applications(id) ON DELETE CASCADE
                );",
            )
            .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
        }
        Some(value) if value == SCHEMA_VERSION => {}
        Some(value) => {
            return Err(SqliteStoreError::VersionMismatch(format!(
                "unsupported schema version: {value}"
            )));
        }
    }
    tx.commit().map_err(|err| SqliteStoreError::Db(err.to_string()))?;
    Ok(())
}

/// Classifies insert failures, surfacing uniqueness violations as conflicts.
fn map_write_error(err: &rusqlite::Error, name: &str) -> SqliteStoreError {
    if err.sqlite_error_code() == Some(ErrorCode::ConstraintViolation) {
        return SqliteStoreError::Conflict(format!(
            "application {name} or its address is already registered"
        ));
    }
    SqliteStoreError::Db(err.to_string())
}

/// Parses a hash algorithm label.
fn parse_hash_algorithm(label: &str) -> Result<HashAlgorithm, SqliteStoreError> {
    HashAlgorithm::from_label(label)
        .ok_or_else(|| SqliteStoreError::Invalid(format!("unsupported hash algorithm: {label}")))
}

/// Formats a timestamp for storage.
fn format_timestamp(value: OffsetDateTime) -> Result<String, SqliteStoreError> {
    value.format(&Rfc3339).map_err(|err| SqliteStoreError::Invalid(err.to_string()))
}

/// Parses a stored timestamp.
fn parse_timestamp(value: &str) -> Result<OffsetDateTime, SqliteStoreError> {
    OffsetDateTime::parse(value, &Rfc3339)
        .map_err(|err| SqliteStoreError::Corrupt(format!("invalid stored timestamp: {err}")))
}

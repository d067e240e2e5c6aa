// crates/rollups-cli/src/audit.rs
// ============================================================================
// Module: CLI Audit Logging
// Description: Structured audit events for mutating CLI commands.
// Purpose: Record who changed which application state as JSON lines.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Mutating commands emit one [`AuditEvent`] per attempt. Events carry the
//! application, the touched parameter when a single field changed, the
//! outcome, and a stable error kind on rejection. Values themselves are not
//! recorded. Sinks write newline-delimited JSON and never fail the command.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Audited CLI actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditEventKind {
    /// A new application was registered.
    ApplicationRegistered,
    /// An application was enabled or disabled.
    ApplicationStateChanged,
    /// An application was deleted.
    ApplicationRemoved,
    /// A single execution parameter was set.
    ExecutionParametersUpdated,
    /// A full parameter document replaced the record.
    ExecutionParametersLoaded,
    /// A parameter mutation was refused before persistence.
    ExecutionParametersRejected,
}

/// Outcome of an audited action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditOutcome {
    /// The change was persisted.
    Success,
    /// The change was refused.
    Rejected,
}

/// Audit event payload.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    /// Event identifier.
    pub event: AuditEventKind,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Registered name of the resolved application.
    pub application: String,
    /// Resolved application identifier when known.
    pub application_id: Option<i64>,
    /// Registered parameter name for single-field changes.
    pub parameter: Option<&'static str>,
    /// Outcome of the action.
    pub outcome: AuditOutcome,
    /// Stable error kind when rejected.
    pub error_kind: Option<&'static str>,
}

/// Inputs used to build an [`AuditEvent`].
#[derive(Debug, Clone)]
pub struct AuditEventParams {
    /// Registered name of the resolved application.
    pub application: String,
    /// Resolved application identifier when known.
    pub application_id: Option<i64>,
    /// Registered parameter name for single-field changes.
    pub parameter: Option<&'static str>,
    /// Stable error kind when rejected.
    pub error_kind: Option<&'static str>,
}

impl AuditEvent {
    /// Creates a new audit event with a consistent timestamp.
    ///
    /// The outcome is [`AuditOutcome::Rejected`] exactly when an error kind
    /// is present.
    #[must_use]
    pub fn new(event: AuditEventKind, params: AuditEventParams) -> Self {
        let timestamp_ms =
            SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis();
        let outcome =
            if params.error_kind.is_some() { AuditOutcome::Rejected } else { AuditOutcome::Success };
        Self {
            event,
            timestamp_ms,
            application: params.application,
            application_id: params.application_id,
            parameter: params.parameter,
            outcome,
            error_kind: params.error_kind,
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while constructing audit sinks.
#[derive(Debug, Error)]
pub enum AuditError {
    /// The audit log file could not be opened.
    #[error("failed to open audit log {path}: {error}")]
    Open {
        /// Requested log path.
        path: PathBuf,
        /// Underlying I/O error text.
        error: String,
    },
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Audit sink for CLI events.
pub trait AuditSink: Send + Sync {
    /// Record an audit event.
    fn record(&self, event: &AuditEvent);
}

/// Audit sink that logs JSON lines to stderr.
pub struct StderrAuditSink;

impl AuditSink for StderrAuditSink {
    fn record(&self, event: &AuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// Audit sink that appends JSON lines to a file.
pub struct FileAuditSink {
    /// File handle used for append-only logging.
    file: Mutex<std::fs::File>,
}

impl FileAuditSink {
    /// Opens the audit log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::Open`] if the file cannot be opened.
    pub fn new(path: &Path) -> Result<Self, AuditError> {
        let file = OpenOptions::new().create(true).append(true).open(path).map_err(|err| {
            AuditError::Open {
                path: path.to_path_buf(),
                error: err.to_string(),
            }
        })?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl AuditSink for FileAuditSink {
    fn record(&self, event: &AuditEvent) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut file) = self.file.lock()
        {
            let _ = writeln!(file, "{payload}");
            let _ = file.flush();
        }
    }
}

/// No-op audit sink.
pub struct NoopAuditSink;

impl AuditSink for NoopAuditSink {
    fn record(&self, _event: &AuditEvent) {}
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test-only assertions are permitted."
    )]

    use serde_json::Value;

    use super::*;

    fn params(error_kind: Option<&'static str>) -> AuditEventParams {
        AuditEventParams {
            application: "echo".to_string(),
            application_id: Some(3),
            parameter: Some("fast_deadline"),
            error_kind,
        }
    }

    #[test]
    fn outcome_follows_error_kind() {
        let ok = AuditEvent::new(AuditEventKind::ExecutionParametersUpdated, params(None));
        assert_eq!(ok.outcome, AuditOutcome::Success);
        let rejected = AuditEvent::new(
            AuditEventKind::ExecutionParametersRejected,
            params(Some("range_violation")),
        );
        assert_eq!(rejected.outcome, AuditOutcome::Rejected);
    }

    #[test]
    fn file_sink_appends_json_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.jsonl");
        let sink = FileAuditSink::new(&path).unwrap();
        sink.record(&AuditEvent::new(AuditEventKind::ExecutionParametersUpdated, params(None)));
        sink.record(&AuditEvent::new(
            AuditEventKind::ExecutionParametersRejected,
            params(Some("invalid_duration_value")),
        ));

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<Value> =
            contents.lines().map(|line| serde_json::from_str(line).expect("json line")).collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["event"], "execution_parameters_updated");
        assert_eq!(lines[0]["outcome"], "success");
        assert_eq!(lines[1]["error_kind"], "invalid_duration_value");
        assert_eq!(lines[1]["parameter"], "fast_deadline");
    }

    #[test]
    fn file_sink_reports_unopenable_path() {
        let dir = tempfile::tempdir().unwrap();
        let result = FileAuditSink::new(dir.path());
        assert!(matches!(result, Err(AuditError::Open { .. })));
    }
}

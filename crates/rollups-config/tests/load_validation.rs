//! Config load validation tests for rollups-config.
// crates/rollups-config/tests/load_validation.rs
// =============================================================================
// Module: Config Load Validation Tests
// Description: Validate config loading guards (path, size, encoding, fields).
// Purpose: Ensure config input handling is strict and fail-closed.
// =============================================================================

#![allow(clippy::use_debug, reason = "Test-only diagnostics are permitted.")]

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use rollups_config::ConfigError;
use rollups_config::DEFAULT_DATABASE_PATH;
use rollups_config::MAX_BUSY_TIMEOUT_MS;
use rollups_config::RollupsCliConfig;
use rollups_store_sqlite::SqliteStoreMode;
use rollups_store_sqlite::SqliteSyncMode;
use tempfile::NamedTempFile;

type TestResult = Result<(), String>;

fn assert_invalid(result: Result<RollupsCliConfig, ConfigError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(_) => Err("expected invalid config load".to_string()),
    }
}

fn write_config(contents: &str) -> Result<NamedTempFile, String> {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    file.write_all(contents.as_bytes()).map_err(|err| err.to_string())?;
    Ok(file)
}

// ============================================================================
// SECTION: Load Guards
// ============================================================================

#[test]
fn load_rejects_path_too_long() -> TestResult {
    let long_path = "a".repeat(5_000);
    let path = Path::new(&long_path);
    assert_invalid(RollupsCliConfig::load(Some(path)), "config path exceeds max length")?;
    Ok(())
}

#[test]
fn load_rejects_path_component_too_long() -> TestResult {
    let long_component = "a".repeat(300);
    let path = Path::new(&long_component);
    assert_invalid(RollupsCliConfig::load(Some(path)), "config path component too long")?;
    Ok(())
}

#[test]
fn load_rejects_oversized_file() -> TestResult {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    let payload = vec![b'#'; 1_048_577];
    file.write_all(&payload).map_err(|err| err.to_string())?;
    assert_invalid(RollupsCliConfig::load(Some(file.path())), "config file exceeds size limit")?;
    Ok(())
}

#[test]
fn load_rejects_non_utf8_file() -> TestResult {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    file.write_all(&[0xFF, 0xFE, 0xFF]).map_err(|err| err.to_string())?;
    assert_invalid(RollupsCliConfig::load(Some(file.path())), "config file must be utf-8")?;
    Ok(())
}

#[test]
fn load_rejects_missing_explicit_file() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("absent.toml");
    assert_invalid(RollupsCliConfig::load(Some(&path)), "config io error")?;
    Ok(())
}

// ============================================================================
// SECTION: Contents
// ============================================================================

#[test]
fn empty_file_yields_defaults() -> TestResult {
    let file = write_config("")?;
    let config = RollupsCliConfig::load(Some(file.path())).map_err(|err| err.to_string())?;
    if config != RollupsCliConfig::default() {
        return Err(format!("unexpected config {config:?}"));
    }
    if config.database.path != PathBuf::from(DEFAULT_DATABASE_PATH) {
        return Err("default database path not applied".to_string());
    }
    Ok(())
}

#[test]
fn full_file_is_parsed() -> TestResult {
    let file = write_config(
        r#"
[database]
path = "/var/lib/rollups/node.db"
busy_timeout_ms = 250
journal_mode = "delete"
sync_mode = "normal"

[audit]
enabled = true
path = "/var/log/rollups/audit.jsonl"
"#,
    )?;
    let config = RollupsCliConfig::load(Some(file.path())).map_err(|err| err.to_string())?;
    let store = config.to_store_config();
    if store.path != PathBuf::from("/var/lib/rollups/node.db")
        || store.busy_timeout_ms != 250
        || store.journal_mode != SqliteStoreMode::Delete
        || store.sync_mode != SqliteSyncMode::Normal
    {
        return Err(format!("unexpected store config {store:?}"));
    }
    if !config.audit.enabled || config.audit.path.is_none() {
        return Err("audit section not applied".to_string());
    }
    Ok(())
}

#[test]
fn unknown_keys_are_rejected() -> TestResult {
    let file = write_config("[database]\npath = \"a.db\"\nmax_connections = 4\n")?;
    assert_invalid(RollupsCliConfig::load(Some(file.path())), "config parse error")?;
    let file = write_config("[metrics]\nenabled = true\n")?;
    assert_invalid(RollupsCliConfig::load(Some(file.path())), "config parse error")?;
    Ok(())
}

#[test]
fn unknown_journal_mode_is_rejected() -> TestResult {
    let file = write_config("[database]\njournal_mode = \"memory\"\n")?;
    assert_invalid(RollupsCliConfig::load(Some(file.path())), "config parse error")?;
    Ok(())
}

#[test]
fn busy_timeout_above_limit_is_rejected() -> TestResult {
    let file = write_config(&format!("[database]\nbusy_timeout_ms = {}\n", MAX_BUSY_TIMEOUT_MS + 1))?;
    assert_invalid(RollupsCliConfig::load(Some(file.path())), "busy_timeout_ms")?;
    let file = write_config(&format!("[database]\nbusy_timeout_ms = {MAX_BUSY_TIMEOUT_MS}\n"))?;
    RollupsCliConfig::load(Some(file.path())).map_err(|err| err.to_string())?;
    Ok(())
}

#[test]
fn empty_database_path_is_rejected() -> TestResult {
    let file = write_config("[database]\npath = \"  \"\n")?;
    assert_invalid(RollupsCliConfig::load(Some(file.path())), "database.path must be non-empty")?;
    Ok(())
}

#[test]
fn audit_path_requires_enabled_audit() -> TestResult {
    let file = write_config("[audit]\npath = \"audit.jsonl\"\n")?;
    assert_invalid(RollupsCliConfig::load(Some(file.path())), "audit.path requires audit.enabled")?;
    Ok(())
}

#[test]
fn database_override_replaces_path() -> TestResult {
    let config = RollupsCliConfig::default()
        .with_database_path(PathBuf::from("override.db"))
        .map_err(|err| err.to_string())?;
    if config.to_store_config().path != PathBuf::from("override.db") {
        return Err("override not applied".to_string());
    }
    assert_invalid(
        RollupsCliConfig::default().with_database_path(PathBuf::new()),
        "database.path must be non-empty",
    )?;
    Ok(())
}

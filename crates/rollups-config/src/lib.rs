// crates/rollups-config/src/lib.rs
// ============================================================================
// Module: Rollups Config Library
// Description: Configuration model and validation for the rollups CLI.
// Purpose: Single source of truth for rollups-cli.toml semantics.
// Dependencies: rollups-store-sqlite, serde, toml
// ============================================================================

//! ## Overview
//! `rollups-config` defines the configuration model for the rollups
//! administration CLI: where the database lives, how `SQLite` is tuned, and
//! where audit events go. Loading is strict and fails closed.
//!
//! Security posture: config inputs are untrusted.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::AuditConfig;
pub use config::CONFIG_ENV_VAR;
pub use config::ConfigError;
pub use config::DEFAULT_CONFIG_NAME;
pub use config::DEFAULT_DATABASE_PATH;
pub use config::DatabaseConfig;
pub use config::MAX_BUSY_TIMEOUT_MS;
pub use config::MAX_CONFIG_FILE_SIZE;
pub use config::RollupsCliConfig;

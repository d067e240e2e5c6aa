// crates/rollups-store-sqlite/src/lib.rs
// ============================================================================
// Module: Rollups SQLite Store
// Description: Durable ApplicationRepository backed by SQLite.
// Purpose: Provide the production persistence backend for the rollups CLI.
// Dependencies: rollups-core, rusqlite
// ============================================================================

//! ## Overview
//! This crate provides [`SqliteApplicationRepository`], an
//! [`rollups_core::ApplicationRepository`] implementation that stores
//! applications and hash-verified execution parameter snapshots in `SQLite`.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod store;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use store::DEFAULT_BUSY_TIMEOUT_MS;
pub use store::MAX_PARAMS_BYTES;
pub use store::SqliteApplicationRepository;
pub use store::SqliteStoreConfig;
pub use store::SqliteStoreError;
pub use store::SqliteStoreMode;
pub use store::SqliteSyncMode;

// crates/rollups-cli/src/lib.rs
// ============================================================================
// Module: Rollups CLI Library
// Description: Shared helpers for the rollups command-line interface.
// Purpose: Provide reusable components (i18n, audit) for the CLI binary and tests.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! This library houses shared CLI utilities: the message catalog that all
//! user-facing output is routed through, and the audit sinks that record
//! mutating commands as JSON lines. The binary entry point (`src/main.rs`)
//! imports these helpers to keep output consistent.
//!
//! Security posture: CLI inputs are untrusted and must be validated.

// ============================================================================
// SECTION: Modules
// ============================================================================

/// Audit event payloads and sinks.
pub mod audit;
/// Message catalog and translation helpers.
pub mod i18n;

// crates/rollups-core/src/core/identifiers.rs
// ============================================================================
// Module: Rollups Identifiers
// Description: Opaque identifiers for registered applications.
// Purpose: Provide strongly typed, serializable IDs with stable string forms.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Application identifiers are assigned by the repository when an application
//! is registered. They are opaque to callers: the core never derives meaning
//! from the numeric value and never lets users edit it directly.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Identifier Types
// ============================================================================

/// Repository-assigned application identifier.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ApplicationId(i64);

impl ApplicationId {
    /// Wraps a raw repository identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<i64> for ApplicationId {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

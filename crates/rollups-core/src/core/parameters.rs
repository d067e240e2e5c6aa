// crates/rollups-core/src/core/parameters.rs
// ============================================================================
// Module: Execution Parameters
// Description: Typed execution policy record owned by each application.
// Purpose: Define the canonical record persisted per application.
// Dependencies: serde, time
// ============================================================================

//! ## Overview
//! [`ExecutionParameters`] carries the runtime budgets the node applies when
//! it advances or inspects an application's machine: cycle budgets, wall
//! clock deadlines, the inspect concurrency cap, and the snapshot policy.
//!
//! The serialized form uses the declared field names (`SnapshotPolicy`,
//! `AdvanceIncCycles`, ...) in declaration order, encodes deadlines as integer
//! nanoseconds, and rejects unknown keys. The owning application identifier is
//! never part of the serialized form; callers re-attach it after decoding.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use time::OffsetDateTime;

use crate::core::duration::ParamDuration;
use crate::core::identifiers::ApplicationId;

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default incremental cycle budget for advance and inspect requests.
pub const DEFAULT_INC_CYCLES: u64 = 1 << 22;
/// Default maximum cycle budget for advance and inspect requests.
pub const DEFAULT_MAX_CYCLES: u64 = (1 << 62) - 1;
/// Default incremental deadline for advance and inspect requests.
pub const DEFAULT_INC_DEADLINE: ParamDuration = ParamDuration::from_secs(10);
/// Default maximum deadline for advance and inspect requests.
pub const DEFAULT_MAX_DEADLINE: ParamDuration = ParamDuration::from_secs(180);
/// Default deadline for loading a machine snapshot.
pub const DEFAULT_LOAD_DEADLINE: ParamDuration = ParamDuration::from_secs(300);
/// Default deadline for storing a machine snapshot.
pub const DEFAULT_STORE_DEADLINE: ParamDuration = ParamDuration::from_secs(180);
/// Default deadline for fast machine operations.
pub const DEFAULT_FAST_DEADLINE: ParamDuration = ParamDuration::from_secs(5);
/// Default maximum number of concurrent inspect requests.
pub const DEFAULT_MAX_CONCURRENT_INSPECTS: u32 = 10;

// ============================================================================
// SECTION: Snapshot Policy
// ============================================================================

/// When the execution engine snapshots machine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SnapshotPolicy {
    /// Never snapshot.
    #[default]
    None,
    /// Snapshot after every processed input.
    EveryInput,
    /// Snapshot at every epoch boundary.
    EveryEpoch,
}

impl SnapshotPolicy {
    /// Every accepted policy, in declaration order.
    pub const ALL: [Self; 3] = [Self::None, Self::EveryInput, Self::EveryEpoch];

    /// Returns the literal name of the policy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::EveryInput => "EVERY_INPUT",
            Self::EveryEpoch => "EVERY_EPOCH",
        }
    }

    /// Matches an exact literal; callers normalize case beforehand.
    #[must_use]
    pub fn from_literal(literal: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|policy| policy.as_str() == literal)
    }
}

impl fmt::Display for SnapshotPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Execution Parameters
// ============================================================================

/// Runtime execution policy for one application.
///
/// # Invariants
/// - `application_id` is set by the system and excluded from serialization.
/// - Range invariants are enforced by [`crate::runtime::validate`], not by
///   construction; decoded or edited records must be validated before
///   persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ExecutionParameters {
    /// Owning application.
    #[serde(skip)]
    pub application_id: ApplicationId,
    /// When the engine snapshots machine state.
    pub snapshot_policy: SnapshotPolicy,
    /// Incremental cycle budget for advance processing.
    pub advance_inc_cycles: u64,
    /// Maximum cycle budget for advance processing.
    pub advance_max_cycles: u64,
    /// Incremental cycle budget for inspect processing.
    pub inspect_inc_cycles: u64,
    /// Maximum cycle budget for inspect processing.
    pub inspect_max_cycles: u64,
    /// Incremental wall-clock budget for advance processing.
    pub advance_inc_deadline: ParamDuration,
    /// Maximum wall-clock budget for advance processing.
    pub advance_max_deadline: ParamDuration,
    /// Incremental wall-clock budget for inspect processing.
    pub inspect_inc_deadline: ParamDuration,
    /// Maximum wall-clock budget for inspect processing.
    pub inspect_max_deadline: ParamDuration,
    /// Budget for loading a machine.
    pub load_deadline: ParamDuration,
    /// Budget for storing machine state.
    pub store_deadline: ParamDuration,
    /// Budget for fast-path machine operations.
    pub fast_deadline: ParamDuration,
    /// Cap on simultaneous inspect calls.
    pub max_concurrent_inspects: u32,
    /// Last modification time.
    #[serde(with = "time::serde::rfc3339", default = "unix_epoch")]
    pub updated_at: OffsetDateTime,
}

impl ExecutionParameters {
    /// Returns the registration defaults for an application.
    #[must_use]
    pub const fn defaults_for(application_id: ApplicationId, updated_at: OffsetDateTime) -> Self {
        Self {
            application_id,
            snapshot_policy: SnapshotPolicy::None,
            advance_inc_cycles: DEFAULT_INC_CYCLES,
            advance_max_cycles: DEFAULT_MAX_CYCLES,
            inspect_inc_cycles: DEFAULT_INC_CYCLES,
            inspect_max_cycles: DEFAULT_MAX_CYCLES,
            advance_inc_deadline: DEFAULT_INC_DEADLINE,
            advance_max_deadline: DEFAULT_MAX_DEADLINE,
            inspect_inc_deadline: DEFAULT_INC_DEADLINE,
            inspect_max_deadline: DEFAULT_MAX_DEADLINE,
            load_deadline: DEFAULT_LOAD_DEADLINE,
            store_deadline: DEFAULT_STORE_DEADLINE,
            fast_deadline: DEFAULT_FAST_DEADLINE,
            max_concurrent_inspects: DEFAULT_MAX_CONCURRENT_INSPECTS,
            updated_at,
        }
    }
}

impl Default for ExecutionParameters {
    fn default() -> Self {
        Self::defaults_for(ApplicationId::default(), OffsetDateTime::UNIX_EPOCH)
    }
}

/// Serde default for documents that omit `UpdatedAt`.
const fn unix_epoch() -> OffsetDateTime {
    OffsetDateTime::UNIX_EPOCH
}

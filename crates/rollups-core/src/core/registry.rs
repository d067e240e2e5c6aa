// crates/rollups-core/src/core/registry.rs
// ============================================================================
// Module: Parameter Name Registry
// Description: Ordered table of user-facing execution parameter names.
// Purpose: Single source of truth for names, field keys, and value types.
// Dependencies: crate::core::{duration, parameters}
// ============================================================================

//! ## Overview
//! [`PARAMETER_REGISTRY`] lists every editable execution parameter in its
//! canonical order. Each entry binds the lower-case codec name (used by
//! `get`/`set`/`list`) to the serialized field name (used by `dump`/`load`)
//! and the value type. Typed access to the record goes through
//! [`Parameter::value`] and [`Parameter::slot`], whose exhaustive matches keep
//! the table and the record in lockstep.
//!
//! ## Invariants
//! - Names are ASCII lower-case and unique.
//! - Registry order is the listing order; it is not alphabetical.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::duration::ParamDuration;
use crate::core::parameters::ExecutionParameters;
use crate::core::parameters::SnapshotPolicy;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Editable execution parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    /// `snapshot_policy`
    SnapshotPolicy,
    /// `advance_inc_cycles`
    AdvanceIncCycles,
    /// `advance_max_cycles`
    AdvanceMaxCycles,
    /// `inspect_inc_cycles`
    InspectIncCycles,
    /// `inspect_max_cycles`
    InspectMaxCycles,
    /// `advance_inc_deadline`
    AdvanceIncDeadline,
    /// `advance_max_deadline`
    AdvanceMaxDeadline,
    /// `inspect_inc_deadline`
    InspectIncDeadline,
    /// `inspect_max_deadline`
    InspectMaxDeadline,
    /// `load_deadline`
    LoadDeadline,
    /// `store_deadline`
    StoreDeadline,
    /// `fast_deadline`
    FastDeadline,
    /// `max_concurrent_inspects`
    MaxConcurrentInspects,
}

/// Value type of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterKind {
    /// Snapshot policy literal.
    Policy,
    /// Unsigned 64-bit cycle count.
    Cycles,
    /// Signed nanosecond duration.
    Deadline,
    /// Unsigned 32-bit concurrency cap.
    Concurrency,
}

impl ParameterKind {
    /// Returns the accepted value format shown in help output.
    #[must_use]
    pub const fn value_hint(self) -> &'static str {
        match self {
            Self::Policy => "NONE | EVERY_INPUT | EVERY_EPOCH",
            Self::Cycles => "unsigned 64-bit integer",
            Self::Deadline => "duration such as 1h20m0.5s",
            Self::Concurrency => "unsigned integer",
        }
    }
}

/// Registry entry describing one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterSpec {
    /// Typed parameter handle.
    pub parameter: Parameter,
    /// Lower-case codec name.
    pub name: &'static str,
    /// Serialized document field name.
    pub field: &'static str,
    /// Value type.
    pub kind: ParameterKind,
    /// One-line description for help output.
    pub description: &'static str,
}

/// Read-only view of a parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterValue {
    /// Snapshot policy.
    Policy(SnapshotPolicy),
    /// Cycle count.
    Cycles(u64),
    /// Deadline.
    Deadline(ParamDuration),
    /// Concurrency cap.
    Concurrency(u32),
}

/// Mutable view of a parameter field.
#[derive(Debug)]
pub enum ParameterSlot<'a> {
    /// Snapshot policy field.
    Policy(&'a mut SnapshotPolicy),
    /// Cycle count field.
    Cycles(&'a mut u64),
    /// Deadline field.
    Deadline(&'a mut ParamDuration),
    /// Concurrency cap field.
    Concurrency(&'a mut u32),
}

// ============================================================================
// SECTION: Registry
// ============================================================================

/// Every editable parameter, in listing order.
pub static PARAMETER_REGISTRY: [ParameterSpec; 13] = [
    spec(
        Parameter::SnapshotPolicy,
        "snapshot_policy",
        "SnapshotPolicy",
        ParameterKind::Policy,
        "when machine state is snapshotted (NONE, EVERY_INPUT, EVERY_EPOCH)",
    ),
    spec(
        Parameter::AdvanceIncCycles,
        "advance_inc_cycles",
        "AdvanceIncCycles",
        ParameterKind::Cycles,
        "incremental cycle budget for advance requests",
    ),
    spec(
        Parameter::AdvanceMaxCycles,
        "advance_max_cycles",
        "AdvanceMaxCycles",
        ParameterKind::Cycles,
        "maximum cycle budget for advance requests",
    ),
    spec(
        Parameter::InspectIncCycles,
        "inspect_inc_cycles",
        "InspectIncCycles",
        ParameterKind::Cycles,
        "incremental cycle budget for inspect requests",
    ),
    spec(
        Parameter::InspectMaxCycles,
        "inspect_max_cycles",
        "InspectMaxCycles",
        ParameterKind::Cycles,
        "maximum cycle budget for inspect requests",
    ),
    spec(
        Parameter::AdvanceIncDeadline,
        "advance_inc_deadline",
        "AdvanceIncDeadline",
        ParameterKind::Deadline,
        "incremental wall-clock budget for advance requests",
    ),
    spec(
        Parameter::AdvanceMaxDeadline,
        "advance_max_deadline",
        "AdvanceMaxDeadline",
        ParameterKind::Deadline,
        "maximum wall-clock budget for advance requests",
    ),
    spec(
        Parameter::InspectIncDeadline,
        "inspect_inc_deadline",
        "InspectIncDeadline",
        ParameterKind::Deadline,
        "incremental wall-clock budget for inspect requests",
    ),
    spec(
        Parameter::InspectMaxDeadline,
        "inspect_max_deadline",
        "InspectMaxDeadline",
        ParameterKind::Deadline,
        "maximum wall-clock budget for inspect requests",
    ),
    spec(
        Parameter::LoadDeadline,
        "load_deadline",
        "LoadDeadline",
        ParameterKind::Deadline,
        "budget for loading a machine",
    ),
    spec(
        Parameter::StoreDeadline,
        "store_deadline",
        "StoreDeadline",
        ParameterKind::Deadline,
        "budget for storing machine state",
    ),
    spec(
        Parameter::FastDeadline,
        "fast_deadline",
        "FastDeadline",
        ParameterKind::Deadline,
        "budget for fast-path machine operations",
    ),
    spec(
        Parameter::MaxConcurrentInspects,
        "max_concurrent_inspects",
        "MaxConcurrentInspects",
        ParameterKind::Concurrency,
        "cap on simultaneous inspect requests",
    ),
];

/// Builds a registry entry.
const fn spec(
    parameter: Parameter,
    name: &'static str,
    field: &'static str,
    kind: ParameterKind,
    description: &'static str,
) -> ParameterSpec {
    ParameterSpec {
        parameter,
        name,
        field,
        kind,
        description,
    }
}

// ============================================================================
// SECTION: Lookup + Access
// ============================================================================

impl Parameter {
    /// Resolves a case-insensitive ASCII name to its registry entry.
    #[must_use]
    pub fn lookup(name: &str) -> Option<&'static ParameterSpec> {
        let normalized = name.to_ascii_lowercase();
        PARAMETER_REGISTRY.iter().find(|entry| entry.name == normalized)
    }

    /// Resolves a serialized field name to its registry entry.
    #[must_use]
    pub fn lookup_field(field: &str) -> Option<&'static ParameterSpec> {
        PARAMETER_REGISTRY.iter().find(|entry| entry.field == field)
    }

    /// Returns the registry entry for this parameter.
    #[must_use]
    pub fn spec(self) -> &'static ParameterSpec {
        // Variants are declared in registry order.
        &PARAMETER_REGISTRY[self as usize]
    }

    /// Returns the lower-case codec name.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.spec().name
    }

    /// Reads the parameter from a record.
    #[must_use]
    pub const fn value(self, params: &ExecutionParameters) -> ParameterValue {
        match self {
            Self::SnapshotPolicy => ParameterValue::Policy(params.snapshot_policy),
            Self::AdvanceIncCycles => ParameterValue::Cycles(params.advance_inc_cycles),
            Self::AdvanceMaxCycles => ParameterValue::Cycles(params.advance_max_cycles),
            Self::InspectIncCycles => ParameterValue::Cycles(params.inspect_inc_cycles),
            Self::InspectMaxCycles => ParameterValue::Cycles(params.inspect_max_cycles),
            Self::AdvanceIncDeadline => ParameterValue::Deadline(params.advance_inc_deadline),
            Self::AdvanceMaxDeadline => ParameterValue::Deadline(params.advance_max_deadline),
            Self::InspectIncDeadline => ParameterValue::Deadline(params.inspect_inc_deadline),
            Self::InspectMaxDeadline => ParameterValue::Deadline(params.inspect_max_deadline),
            Self::LoadDeadline => ParameterValue::Deadline(params.load_deadline),
            Self::StoreDeadline => ParameterValue::Deadline(params.store_deadline),
            Self::FastDeadline => ParameterValue::Deadline(params.fast_deadline),
            Self::MaxConcurrentInspects => {
                ParameterValue::Concurrency(params.max_concurrent_inspects)
            }
        }
    }

    /// Borrows the parameter field mutably.
    pub const fn slot(self, params: &mut ExecutionParameters) -> ParameterSlot<'_> {
        match self {
            Self::SnapshotPolicy => ParameterSlot::Policy(&mut params.snapshot_policy),
            Self::AdvanceIncCycles => ParameterSlot::Cycles(&mut params.advance_inc_cycles),
            Self::AdvanceMaxCycles => ParameterSlot::Cycles(&mut params.advance_max_cycles),
            Self::InspectIncCycles => ParameterSlot::Cycles(&mut params.inspect_inc_cycles),
            Self::InspectMaxCycles => ParameterSlot::Cycles(&mut params.inspect_max_cycles),
            Self::AdvanceIncDeadline => ParameterSlot::Deadline(&mut params.advance_inc_deadline),
            Self::AdvanceMaxDeadline => ParameterSlot::Deadline(&mut params.advance_max_deadline),
            Self::InspectIncDeadline => ParameterSlot::Deadline(&mut params.inspect_inc_deadline),
            Self::InspectMaxDeadline => ParameterSlot::Deadline(&mut params.inspect_max_deadline),
            Self::LoadDeadline => ParameterSlot::Deadline(&mut params.load_deadline),
            Self::StoreDeadline => ParameterSlot::Deadline(&mut params.store_deadline),
            Self::FastDeadline => ParameterSlot::Deadline(&mut params.fast_deadline),
            Self::MaxConcurrentInspects => {
                ParameterSlot::Concurrency(&mut params.max_concurrent_inspects)
            }
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

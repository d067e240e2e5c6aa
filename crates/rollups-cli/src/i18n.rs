// crates/rollups-cli/src/i18n.rs
// ============================================================================
// Module: CLI Message Catalog
// Description: Provides the message catalog and translation utilities for the CLI.
// Purpose: Centralize user-facing strings so output stays consistent.
// Dependencies: Standard library collections.
// ============================================================================

//! ## Overview
//! The rollups CLI stores user-facing strings in a small catalog so every
//! command reports success and failure with the same vocabulary. All runtime
//! output should be routed through the [`t!`](crate::t) macro.
//!
//! ## Invariants
//! - The catalog is initialized once and read-only thereafter.
//! - Missing keys fall back to the key itself.
//! - Placeholder substitutions preserve deterministic order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// SECTION: Types
// ============================================================================

/// A formatted message argument captured by the [`macro@crate::t`] macro.
///
/// # Invariants
/// - `key` matches a placeholder name without braces (for example, `path`).
/// - `value` is preformatted and should be safe for display.
#[derive(Clone)]
pub struct MessageArg {
    /// The placeholder name used in message templates (e.g., `"path"`).
    pub key: &'static str,
    /// The formatted string value to substitute for this placeholder.
    pub value: String,
}

impl MessageArg {
    /// Constructs a new [`MessageArg`] from a key and displayable value.
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// Static English catalog entries.
const CATALOG_EN: &[(&str, &str)] = &[
    ("main.version", "rollups-cli {version}"),
    ("output.stream.stdout", "stdout"),
    ("output.stream.stderr", "stderr"),
    ("output.stream.unknown", "output"),
    ("output.write_failed", "Failed to write to {stream}: {error}"),
    ("input.read_failed", "Failed to read {kind} at {path}: {error}"),
    (
        "input.read_too_large",
        "Refusing to read {kind} at {path} because it is {size} bytes (limit {limit}).",
    ),
    ("input.stdin_failed", "Failed to read {kind} from stdin: {error}"),
    ("input.kind.parameters_document", "execution parameters document"),
    ("config.load_failed", "Failed to load config: {error}"),
    ("config.validate.ok", "Config validated successfully."),
    ("store.open_failed", "Failed to open database {path}: {error}"),
    ("audit.open_failed", "Failed to open audit log {path}: {error}"),
    ("app.lookup_failed", "Failed to look up application {application}: {error}"),
    ("app.register.invalid", "Invalid application: {error}"),
    ("app.register.failed", "Failed to register application {name}: {error}"),
    ("app.register.ok", "Registered application {name} (id {id}, address {address})."),
    ("app.list.failed", "Failed to list applications: {error}"),
    ("app.list.empty", "No applications registered."),
    ("app.list.entry", "{id}\t{name}\t{address}\t{state}"),
    ("app.list.serialize_failed", "Failed to serialize application list: {error}"),
    ("app.status.show", "{name}: {state}"),
    ("app.status.reason", "reason: {reason}"),
    ("app.status.updated", "Application {name} is now {state}."),
    ("app.status.failed", "Failed to update application {name}: {error}"),
    ("app.remove.force_required", "Refusing to remove application {name} without --force."),
    ("app.remove.failed", "Failed to remove application {name}: {error}"),
    ("app.remove.ok", "Removed application {name}."),
    ("params.fetch_failed", "Failed to read execution parameters of {application}: {error}"),
    ("params.get.failed", "Failed to get {parameter}: {error}"),
    ("params.set.failed", "Failed to set {parameter} for {application}: {error}"),
    ("params.set.ok", "Set {parameter} = {value} for {application}."),
    ("params.list.entry", "{name} = {value}"),
    ("params.help.heading", "Parameters:"),
    ("params.help.entry", "  {name} <{hint}>\n      {description}"),
    ("params.list.serialize_failed", "Failed to serialize execution parameters: {error}"),
    ("params.dump.failed", "Failed to dump execution parameters of {application}: {error}"),
    ("params.load.failed", "Failed to load execution parameters into {application}: {error}"),
    ("params.load.ok", "Loaded execution parameters into {application}."),
];

/// Returns the message catalog.
fn catalog() -> &'static HashMap<&'static str, &'static str> {
    static CATALOG_EN_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    CATALOG_EN_MAP.get_or_init(|| CATALOG_EN.iter().copied().collect())
}

// ============================================================================
// SECTION: Translation
// ============================================================================

/// Translates `key` while substituting `args`.
#[must_use]
pub fn translate(key: &str, args: Vec<MessageArg>) -> String {
    let template = catalog().get(key).copied().unwrap_or(key);
    if args.is_empty() {
        return template.to_string();
    }

    let mut result = template.to_string();
    for arg in args {
        let placeholder = format!("{{{}}}", arg.key);
        result = result.replace(&placeholder, &arg.value);
    }
    result
}

// ============================================================================
// SECTION: Macro
// ============================================================================

/// Formats a catalog message from a key and named arguments.
///
/// # Arguments
///
/// - `$key` must match a catalog entry.
/// - Named arguments are substituted into `{placeholder}` positions.
///
/// # Returns
///
/// A [`String`] with placeholders substituted.
#[macro_export]
macro_rules! t {
    ($key:literal $(, $name:ident = $value:expr )* $(,)?) => {{
        let args = ::std::vec![
            $(
                $crate::i18n::MessageArg::new(stringify!($name), $value.to_string()),
            )*
        ];
        $crate::i18n::translate($key, args)
    }};
}

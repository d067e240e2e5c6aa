// crates/rollups-core/src/core/application.rs
// ============================================================================
// Module: Rollups Applications
// Description: Registered application records and registration input checks.
// Purpose: Model the owners of execution parameter records.
// Dependencies: serde, thiserror, time
// ============================================================================

//! ## Overview
//! An [`Application`] is a rollups deployment tracked by the node. Operators
//! address it either by its contract address or by its short name; the
//! [`ApplicationKey`] type captures that choice once so stores need not guess.
//!
//! Registration input is untrusted. [`NewApplication::validate`] normalizes hex
//! fields to lower case and rejects malformed names, addresses, and hashes
//! before anything reaches a repository.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use time::OffsetDateTime;

use crate::core::identifiers::ApplicationId;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum application name length in bytes.
pub const MAX_APPLICATION_NAME_LENGTH: usize = 64;
/// Maximum template URI length in bytes.
pub const MAX_TEMPLATE_URI_LENGTH: usize = 4096;
/// Number of hex digits in a contract address.
const ADDRESS_HEX_DIGITS: usize = 40;
/// Number of hex digits in a template hash.
const HASH_HEX_DIGITS: usize = 64;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Application input and state errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    /// Application name is malformed.
    #[error("invalid application name \"{name}\": {reason}")]
    InvalidName {
        /// Rejected name.
        name: String,
        /// Rule that failed.
        reason: String,
    },
    /// Contract address is malformed.
    #[error("invalid {field} \"{value}\": expected 0x followed by 40 hex digits")]
    InvalidAddress {
        /// Field label.
        field: String,
        /// Rejected value.
        value: String,
    },
    /// Template hash is malformed.
    #[error("invalid template hash \"{0}\": expected 0x followed by 64 hex digits")]
    InvalidTemplateHash(String),
    /// Template URI is empty or oversized.
    #[error("invalid template uri: {0}")]
    InvalidTemplateUri(String),
    /// Epoch length is zero.
    #[error("epoch length must be greater than zero")]
    InvalidEpochLength,
    /// State literal is not recognized.
    #[error("invalid application state \"{0}\": expected ENABLED, DISABLED, or INOPERABLE")]
    InvalidState(String),
}

// ============================================================================
// SECTION: State
// ============================================================================

/// Lifecycle state of a registered application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationState {
    /// The node processes inputs for the application.
    Enabled,
    /// The operator paused processing.
    Disabled,
    /// The node stopped processing after an unrecoverable failure.
    Inoperable,
}

impl ApplicationState {
    /// Returns the stored literal.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Enabled => "ENABLED",
            Self::Disabled => "DISABLED",
            Self::Inoperable => "INOPERABLE",
        }
    }
}

impl fmt::Display for ApplicationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationState {
    type Err = ApplicationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_uppercase().as_str() {
            "ENABLED" => Ok(Self::Enabled),
            "DISABLED" => Ok(Self::Disabled),
            "INOPERABLE" => Ok(Self::Inoperable),
            _ => Err(ApplicationError::InvalidState(value.to_string())),
        }
    }
}

// ============================================================================
// SECTION: Application Records
// ============================================================================

/// Registered application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    /// Repository-assigned identifier.
    pub id: ApplicationId,
    /// Unique short name.
    pub name: String,
    /// Application contract address (lower-case hex).
    pub application_address: String,
    /// Consensus contract address (lower-case hex).
    pub consensus_address: String,
    /// Machine template hash (lower-case hex).
    pub template_hash: String,
    /// Location of the machine template.
    pub template_uri: String,
    /// Blocks per epoch.
    pub epoch_length: u64,
    /// Lifecycle state.
    pub state: ApplicationState,
    /// Operator or node supplied reason for the current state.
    pub reason: Option<String>,
    /// Registration time.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Last modification time.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Registration request for a new application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApplication {
    /// Unique short name.
    pub name: String,
    /// Application contract address.
    pub application_address: String,
    /// Consensus contract address.
    pub consensus_address: String,
    /// Machine template hash.
    pub template_hash: String,
    /// Location of the machine template.
    pub template_uri: String,
    /// Blocks per epoch.
    pub epoch_length: u64,
    /// Initial lifecycle state.
    pub state: ApplicationState,
}

impl NewApplication {
    /// Validates the request and returns it with hex fields lower-cased.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError`] for the first malformed field.
    pub fn validate(self) -> Result<Self, ApplicationError> {
        validate_name(&self.name)?;
        let application_address = normalize_address("application address", &self.application_address)?;
        let consensus_address = normalize_address("consensus address", &self.consensus_address)?;
        let template_hash = normalize_hex(&self.template_hash, HASH_HEX_DIGITS)
            .ok_or_else(|| ApplicationError::InvalidTemplateHash(self.template_hash.clone()))?;
        if self.template_uri.trim().is_empty() {
            return Err(ApplicationError::InvalidTemplateUri("must not be empty".to_string()));
        }
        if self.template_uri.len() > MAX_TEMPLATE_URI_LENGTH {
            return Err(ApplicationError::InvalidTemplateUri(format!(
                "exceeds {MAX_TEMPLATE_URI_LENGTH} bytes"
            )));
        }
        if self.epoch_length == 0 {
            return Err(ApplicationError::InvalidEpochLength);
        }
        Ok(Self {
            application_address,
            consensus_address,
            template_hash,
            ..self
        })
    }
}

// ============================================================================
// SECTION: Application Key
// ============================================================================

/// Operator-supplied application reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ApplicationKey {
    /// Contract address, lower-case hex.
    Address(String),
    /// Short name.
    Name(String),
}

impl ApplicationKey {
    /// Classifies a raw reference: `0x` plus 40 hex digits is an address.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        normalize_hex(raw, ADDRESS_HEX_DIGITS)
            .map_or_else(|| Self::Name(raw.to_string()), Self::Address)
    }

    /// Returns true when `app` matches this key.
    #[must_use]
    pub fn matches(&self, app: &Application) -> bool {
        match self {
            Self::Address(address) => app.application_address == *address,
            Self::Name(name) => app.name == *name,
        }
    }
}

impl fmt::Display for ApplicationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Address(address) => f.write_str(address),
            Self::Name(name) => f.write_str(name),
        }
    }
}

// ============================================================================
// SECTION: Input Helpers
// ============================================================================

/// Checks the short-name grammar.
fn validate_name(name: &str) -> Result<(), ApplicationError> {
    let invalid = |reason: &str| ApplicationError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    };
    if name.is_empty() {
        return Err(invalid("must not be empty"));
    }
    if name.len() > MAX_APPLICATION_NAME_LENGTH {
        return Err(invalid("exceeds 64 characters"));
    }
    if !name.bytes().all(|byte| byte.is_ascii_lowercase() || byte.is_ascii_digit() || byte == b'-') {
        return Err(invalid("only lowercase letters, digits, and '-' are allowed"));
    }
    if name.starts_with('-') {
        return Err(invalid("must start with a letter or digit"));
    }
    Ok(())
}

/// Normalizes a contract address or reports which field was malformed.
fn normalize_address(field: &str, value: &str) -> Result<String, ApplicationError> {
    normalize_hex(value, ADDRESS_HEX_DIGITS).ok_or_else(|| ApplicationError::InvalidAddress {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Returns `value` lower-cased when it is `0x` plus exactly `digits` hex digits.
fn normalize_hex(value: &str, digits: usize) -> Option<String> {
    let body = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X"))?;
    if body.len() != digits || !body.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return None;
    }
    Some(format!("0x{}", body.to_ascii_lowercase()))
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, reason = "Test-only assertions are permitted.")]

    use super::ApplicationError;
    use super::ApplicationKey;
    use super::ApplicationState;
    use super::NewApplication;

    fn request() -> NewApplication {
        NewApplication {
            name: "echo-dapp".to_string(),
            application_address: format!("0x{}", "AB".repeat(20)),
            consensus_address: format!("0x{}", "cd".repeat(20)),
            template_hash: format!("0x{}", "Ef".repeat(32)),
            template_uri: "/var/lib/templates/echo".to_string(),
            epoch_length: 10,
            state: ApplicationState::Enabled,
        }
    }

    #[test]
    fn validate_lowercases_hex_fields() {
        let validated = request().validate().expect("valid request");
        assert_eq!(validated.application_address, format!("0x{}", "ab".repeat(20)));
        assert_eq!(validated.template_hash, format!("0x{}", "ef".repeat(32)));
    }

    #[test]
    fn validate_rejects_bad_names() {
        for name in ["", "-lead", "Upper", "has space", &"a".repeat(65)] {
            let mut req = request();
            req.name = name.to_string();
            assert!(matches!(req.validate(), Err(ApplicationError::InvalidName { .. })), "{name}");
        }
    }

    #[test]
    fn validate_rejects_zero_epoch_length() {
        let mut req = request();
        req.epoch_length = 0;
        assert_eq!(req.validate(), Err(ApplicationError::InvalidEpochLength));
    }

    #[test]
    fn key_classifies_addresses_and_names() {
        let address = format!("0x{}", "AA".repeat(20));
        assert_eq!(ApplicationKey::parse(&address), ApplicationKey::Address(address.to_lowercase()));
        assert_eq!(ApplicationKey::parse("0x1234"), ApplicationKey::Name("0x1234".to_string()));
        assert_eq!(ApplicationKey::parse("echo"), ApplicationKey::Name("echo".to_string()));
    }

    #[test]
    fn state_parses_case_insensitively() {
        assert_eq!("disabled".parse::<ApplicationState>(), Ok(ApplicationState::Disabled));
        assert!("paused".parse::<ApplicationState>().is_err());
    }
}

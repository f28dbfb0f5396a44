//! Common error infrastructure for tcg-core.
//!
//! Domain-specific errors (`OracleError`, `CostSpecError`) live next to the
//! modules that produce them. This module provides the classification they
//! share so callers can decide between falling back, rejecting input, or
//! surfacing a defect.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the caller may try an alternative (cheaper) action
/// - **Validation**: malformed input or data, reject without retry
/// - **Internal**: a policy or data defect that needs investigation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with an alternative action.
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown character card, duplicated cost key
    Validation,

    /// Internal error - unexpected inconsistency.
    ///
    /// Examples: missing card oracle, handler produced no action
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

impl core::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common trait for all tcg errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Keep `error_code` stable; log pipelines key on it
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Format: `MODULE_ERROR_NAME` (e.g., `"ORACLE_CHARACTER_NOT_FOUND"`).
    fn error_code(&self) -> &'static str;
}

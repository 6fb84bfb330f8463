//! Core error types.

use thiserror::Error;

use crate::value::ValueKind;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by the strict accessors and by construction.
///
/// Lookup misses in enum tables and unset parameters read through the
/// non-strict accessors are reported as `None`, not as errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A strict accessor read a parameter that was never set.
    #[error("parameter `{key}` is not set")]
    UnsetParameter { key: String },

    /// A strict accessor found a value of another kind than declared.
    #[error("parameter `{key}` holds {found}, expected {expected}")]
    KindMismatch {
        key: String,
        expected: ValueKind,
        found: ValueKind,
    },

    /// An envelope was built from something that is not a mapping.
    #[error("malformed construction: {0}")]
    MalformedConstruction(String),

    /// Two entries of an enum table share a key.
    #[error("enum table `{table}` declares key `{key}` twice")]
    DuplicateEnumKey { table: &'static str, key: &'static str },

    /// Two keys of an enum table share a value, so the inverse is ambiguous.
    #[error("enum table `{table}` maps both `{first}` and `{second}` to the same value")]
    DuplicateEnumValue {
        table: &'static str,
        first: &'static str,
        second: &'static str,
    },
}

impl CoreError {
    /// Creates an unset parameter error.
    pub fn unset(key: impl Into<String>) -> Self {
        Self::UnsetParameter { key: key.into() }
    }

    /// Creates a malformed construction error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedConstruction(message.into())
    }

    /// Returns true for the error the non-strict accessors map to `None`.
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::UnsetParameter { .. })
    }
}

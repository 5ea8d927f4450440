//! Schema validation errors.

use thiserror::Error;

use crate::types::CallPattern;

/// Errors raised while constructing a [`Schema`](crate::Schema).
///
/// These are fatal: generation does not proceed past a schema that fails
/// validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Two definitions share a name within the same scope.
    #[error("duplicate {scope} name '{name}'")]
    DuplicateName {
        /// Where the collision happened (e.g. "type", "method in service MyService").
        scope: String,
        /// The colliding name.
        name: String,
    },

    /// A type reference does not resolve, or resolves to a kind of type
    /// that is not allowed in that position.
    #[error("'{referrer}' references invalid type '{name}'")]
    InvalidReference {
        /// The definition holding the reference (e.g. "MyService.unary request").
        referrer: String,
        /// The referenced type name.
        name: String,
    },

    /// A method declares request/response types its call pattern cannot carry.
    #[error("method '{method}' declared as {pattern}: {reason}")]
    PatternMismatch {
        /// The offending method.
        method: String,
        /// Its declared call pattern.
        pattern: CallPattern,
        /// What the pattern requires.
        reason: String,
    },
}

impl SchemaError {
    pub(crate) fn duplicate(scope: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateName {
            scope: scope.into(),
            name: name.into(),
        }
    }

    pub(crate) fn invalid_reference(referrer: impl Into<String>, name: impl Into<String>) -> Self {
        Self::InvalidReference {
            referrer: referrer.into(),
            name: name.into(),
        }
    }
}

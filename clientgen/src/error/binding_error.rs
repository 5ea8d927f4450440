//! Errors surfaced by generated bindings and builders.

use clientgen_define::CallPattern;
use thiserror::Error;

use super::TransportError;

/// Errors from generated client code.
///
/// Construction-time failures ([`MissingRequiredField`], [`InvalidBaseUrl`])
/// are returned synchronously by builders. Everything else completes a
/// [`Pending`](crate::Pending) handle in its failure branch. Nothing here is
/// retried.
///
/// [`MissingRequiredField`]: BindingError::MissingRequiredField
/// [`InvalidBaseUrl`]: BindingError::InvalidBaseUrl
#[derive(Debug, Error)]
pub enum BindingError {
    /// A wire string matched none of an enum's constants.
    #[error("unknown enum value '{0}'")]
    UnknownEnumValue(String),

    /// The method's call pattern is outside the profile's capability set.
    #[error("{method} is a {pattern} method, which transport profile '{profile}' does not support")]
    UnsupportedOperation {
        method: String,
        pattern: CallPattern,
        profile: String,
    },

    /// The profile is a placeholder backend.
    #[error("{0}")]
    TransportUnavailable(String),

    /// The exchange completed but its status was not a success.
    #[error("bad response: {0}")]
    BadResponse(String),

    /// A successful payload did not match the declared response type.
    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// A request payload could not be serialized.
    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    /// A builder was finished without a required field.
    #[error("{0}: is a required field")]
    MissingRequiredField(&'static str),

    /// The base URL cannot have path segments appended to it.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// The transport failed to complete the exchange.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The completion handler was dropped without completing the call.
    #[error("call to {method} was abandoned before completing")]
    Abandoned { method: &'static str },
}

impl BindingError {
    /// Returns `true` if the call was rejected without any I/O.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedOperation { .. }
                | Self::TransportUnavailable(_)
                | Self::Encode(_)
                | Self::InvalidBaseUrl(_)
        )
    }
}

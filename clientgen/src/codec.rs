//! Payload and enum codecs used by generated code.

use bytes::Bytes;
use serde::de::DeserializeOwned;

use crate::error::BindingError;

/// Bidirectional mapping between an enum's constants and their wire strings.
///
/// Generated enums implement [`VALUES`](EnumCodec::VALUES) and
/// [`encode`](EnumCodec::encode); [`decode`](EnumCodec::decode) is provided.
///
/// ## Examples
///
/// ```
/// use clientgen::{BindingError, EnumCodec};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Entry2 { A, B, C }
///
/// impl EnumCodec for Entry2 {
///     const VALUES: &'static [Self] = &[Entry2::A, Entry2::B, Entry2::C];
///
///     fn encode(self) -> &'static str {
///         match self {
///             Entry2::A => "A",
///             Entry2::B => "B",
///             Entry2::C => "C",
///         }
///     }
/// }
///
/// assert_eq!(Entry2::decode("B").unwrap(), Entry2::B);
/// assert_eq!(Entry2::C.encode(), "C");
/// assert!(matches!(Entry2::decode("Z"), Err(BindingError::UnknownEnumValue(v)) if v == "Z"));
/// ```
pub trait EnumCodec: Copy + Sized + 'static {
    /// Every constant, in declaration order.
    const VALUES: &'static [Self];

    /// The constant's wire value. Total.
    fn encode(self) -> &'static str;

    /// The constant whose wire value equals `value`.
    ///
    /// Linear in the number of constants. Wire values are unique, so the
    /// scan order never changes the result for a valid input.
    ///
    /// ## Errors
    ///
    /// Returns [`BindingError::UnknownEnumValue`] naming `value` when no
    /// constant matches. There is no default constant.
    fn decode(value: &str) -> Result<Self, BindingError> {
        Self::VALUES
            .iter()
            .copied()
            .find(|constant| constant.encode() == value)
            .ok_or_else(|| BindingError::UnknownEnumValue(value.to_string()))
    }
}

/// Decodes a JSON response body.
///
/// ## Errors
///
/// Returns [`BindingError::Decode`] if the body does not match `T`.
pub fn decode_json<T: DeserializeOwned>(body: Bytes) -> Result<T, BindingError> {
    serde_json::from_slice(&body).map_err(BindingError::Decode)
}

/// Ignores the response body of a fire-and-forget call.
pub fn discard(_body: Bytes) -> Result<(), BindingError> {
    Ok(())
}

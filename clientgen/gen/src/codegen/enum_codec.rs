//! Enum codec generation.
//!
//! Every schema enum becomes a fieldless Rust enum plus a
//! `clientgen::EnumCodec` implementation mapping each variant to its wire
//! string. The wire string is the only representation
//! that crosses the transport: `Display`, `FromStr`, path segments and serde
//! all go through the codec.

use clientgen_define::EnumDef;
use proc_macro2::TokenStream;
use quote::quote;

use crate::errors::GeneratorError;
use crate::naming::pascal_ident;

/// Generates the enum and its codec for `def`.
///
/// ## Generated Code
///
/// For an enum `RootEnum` with constant `FOO` on the wire as `"Foo"`:
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// pub enum RootEnum {
///     Foo,
/// }
///
/// impl clientgen::EnumCodec for RootEnum {
///     const VALUES: &'static [Self] = &[Self::Foo];
///
///     fn encode(self) -> &'static str {
///         match self {
///             Self::Foo => "Foo",
///         }
///     }
/// }
/// ```
///
/// followed by inherent `encode`/`decode`, `Display`, `FromStr`,
/// `PathValue` and string-based serde impls.
pub fn generate_enum(def: &EnumDef) -> Result<TokenStream, GeneratorError> {
    let name = pascal_ident(&def.name)?;
    let doc = format!(
        " {}",
        def.description
            .clone()
            .unwrap_or_else(|| format!("`{}` enumeration.", def.name))
    );

    let mut variants = Vec::with_capacity(def.variants.len());
    let mut arms = Vec::with_capacity(def.variants.len());
    for variant in &def.variants {
        let ident = pascal_ident(&variant.name)?;
        let value = &variant.value;
        let variant_doc = format!(" Wire value `{}`.", value);
        variants.push(quote! {
            #[doc = #variant_doc]
            #ident
        });
        arms.push(quote! { Self::#ident => #value });
    }
    let idents = def
        .variants
        .iter()
        .map(|v| pascal_ident(&v.name))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(quote! {
        #[doc = #doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum #name {
            #(#variants,)*
        }

        impl clientgen::EnumCodec for #name {
            const VALUES: &'static [Self] = &[#(Self::#idents),*];

            fn encode(self) -> &'static str {
                match self {
                    #(#arms,)*
                }
            }
        }

        impl #name {
            /// Every constant, in declaration order.
            pub const VALUES: &'static [Self] = <Self as clientgen::EnumCodec>::VALUES;

            /// The wire string for this constant.
            pub fn encode(self) -> &'static str {
                <Self as clientgen::EnumCodec>::encode(self)
            }

            /// The constant whose wire string is `value`.
            ///
            /// ## Errors
            ///
            /// Returns `BindingError::UnknownEnumValue` if no constant matches.
            pub fn decode(value: &str) -> ::std::result::Result<Self, clientgen::BindingError> {
                <Self as clientgen::EnumCodec>::decode(value)
            }
        }

        impl ::std::fmt::Display for #name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str((*self).encode())
            }
        }

        impl ::std::str::FromStr for #name {
            type Err = clientgen::BindingError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                Self::decode(s)
            }
        }

        impl clientgen::PathValue for #name {
            fn to_segment(&self) -> ::std::string::String {
                ::std::string::ToString::to_string((*self).encode())
            }
        }

        impl serde::Serialize for #name {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str((*self).encode())
            }
        }

        impl<'de> serde::Deserialize<'de> for #name {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> ::std::result::Result<Self, D::Error> {
                let value = <::std::string::String as serde::Deserialize>::deserialize(deserializer)?;
                Self::decode(&value).map_err(serde::de::Error::custom)
            }
        }
    })
}

//! Code generation modules for clientgen.
//!
//! Each submodule turns one part of a validated [`Schema`] into a
//! `proc_macro2::TokenStream`. None of them depend on each other's output;
//! they share only the schema and, for the transport-specific parts, a
//! [`TransportProfile`].
//!
//! ## Submodules
//!
//! - [`enum_codec`] - Enums with wire-string `encode`/`decode`
//! - [`message`] - Serde structs for request and response payloads
//! - [`service`] - One profile-independent trait per service
//! - [`binding`] - Per-profile method bodies: capability check, stub or bridged dispatch
//! - [`builder`] - Per-profile client structs and their builders
//! - [`type_map`] - Schema types as Rust types
//!
//! ## Output Format
//!
//! All generators return `proc_macro2::TokenStream`, which is then:
//! - Validated with `syn::parse2` to ensure correctness
//! - Formatted with `prettyplease` for consistent style
//!
//! See [`crate::output`] for the assembly and file writing logic.
//!
//! [`Schema`]: clientgen_define::Schema
//! [`TransportProfile`]: clientgen_define::TransportProfile

pub mod binding;
pub mod builder;
pub mod enum_codec;
pub mod message;
pub mod service;
pub mod type_map;

pub use binding::{BindingKind, generate_binding_impl, plan};
pub use builder::{builder_ident, client_ident, generate_client};
pub use enum_codec::generate_enum;
pub use message::generate_message;
pub use service::{Signature, generate_service_trait};

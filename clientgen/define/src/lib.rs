//! Clientgen Schema Model
//!
//! This crate provides the in-memory representation of an interface schema:
//! services with typed methods, string-backed enumerations and message types.
//! A validated [`Schema`] is the single input consumed by the `clientgen-gen`
//! code generator, which emits transport-bound client bindings from it.
//!
//! ## Core Types
//!
//! - [`Schema`] - A validated collection of services, enums and messages
//! - [`ServiceDef`] - A named, ordered set of methods
//! - [`MethodDef`] - A single method with its [`CallPattern`], types and path parameters
//! - [`EnumDef`] - Symbolic constants paired with their wire-string values
//! - [`MessageDef`] - A structured payload type with named fields
//! - [`TransportProfile`] - A backend variant: path naming, HTTP verbs, dispatch strategy
//!   and the set of call patterns it can express
//! - [`ClientBuilderSpec`] - Required configuration of generated client builders
//! - [`SchemaError`] - Construction-time validation failures
//!
//! ## Examples
//!
//! ```
//! use clientgen_define::{CallPattern, EnumDef, MethodDef, Schema, ServiceDef, TypeRef};
//!
//! let entry = EnumDef::new("Entry2")
//!     .with_variant("A", "A")
//!     .with_variant("B", "B");
//!
//! let service = ServiceDef::new("MyService").with_method(
//!     MethodDef::new("unknownReturn", CallPattern::Unary)
//!         .with_response(TypeRef::named("Entry2"))
//!         .with_path_param("id", TypeRef::U32),
//! );
//!
//! let schema = Schema::new("test", vec![service], vec![entry], vec![]).unwrap();
//! assert_eq!(schema.services().len(), 1);
//! ```

pub mod builder;
pub mod enums;
pub mod error;
pub mod message;
pub mod naming;
pub mod prelude;
pub mod profile;
pub mod schema;
pub mod types;

// Re-export main types at crate root
pub use builder::{BuilderField, ClientBuilderSpec};
pub use enums::{EnumDef, EnumVariant};
pub use error::SchemaError;
pub use message::{FieldDef, MessageDef};
pub use profile::{DispatchStrategy, HttpVerb, SegmentCase, TransportProfile, UnsupportedPolicy};
pub use schema::Schema;
pub use types::{CallPattern, MethodDef, PathParam, ServiceDef, TypeRef};

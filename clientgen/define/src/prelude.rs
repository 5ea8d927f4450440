//! Convenient re-exports for writing schema definitions.
//!
//! ```
//! use clientgen_define::prelude::*;
//!
//! let service = ServiceDef::new("Ping")
//!     .with_method(MethodDef::new("ping", CallPattern::FireAndForget));
//! let schema = Schema::new("ping", vec![service], vec![], vec![]).unwrap();
//!
//! assert!(TransportProfile::http_async().supports(CallPattern::FireAndForget));
//! assert_eq!(schema.services()[0].methods.len(), 1);
//! ```

pub use crate::builder::{BuilderField, ClientBuilderSpec};
pub use crate::enums::{EnumDef, EnumVariant};
pub use crate::error::SchemaError;
pub use crate::message::{FieldDef, MessageDef};
pub use crate::profile::{
    DispatchStrategy, HttpVerb, SegmentCase, TransportProfile, UnsupportedPolicy,
};
pub use crate::schema::Schema;
pub use crate::types::{CallPattern, MethodDef, PathParam, ServiceDef, TypeRef};

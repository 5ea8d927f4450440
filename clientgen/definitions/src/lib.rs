//! Clientgen Schema Definitions
//!
//! This crate contains concrete service schemas built from the primitives in
//! `clientgen-define`. Each schema lives in its own module and is exposed
//! through a `define_*_schema` function.
//!
//! ## Available Schemas
//!
//! - [`test_fixture`] - `MyService`, covering every call pattern
//! - [`catalog`] - A small product catalog service
//!
//! ## Examples
//!
//! ```
//! use clientgen_definitions::builtin;
//!
//! let define = builtin("test").unwrap();
//! let schema = define().unwrap();
//! assert_eq!(schema.services()[0].name, "MyService");
//! ```

pub mod catalog;
pub mod test_fixture;

use clientgen_define::{Schema, SchemaError};

pub use catalog::define_catalog_schema;
pub use test_fixture::define_test_schema;

/// Constructor of a built-in schema.
pub type SchemaFn = fn() -> Result<Schema, SchemaError>;

/// Built-in schemas by name.
pub const BUILTIN: &[(&str, SchemaFn)] = &[
    ("test", define_test_schema),
    ("catalog", define_catalog_schema),
];

/// Looks up a built-in schema constructor by name.
pub fn builtin(name: &str) -> Option<SchemaFn> {
    BUILTIN
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, define)| *define)
}

/// Names of every built-in schema.
pub fn builtin_names() -> Vec<&'static str> {
    BUILTIN.iter().map(|(name, _)| *name).collect()
}

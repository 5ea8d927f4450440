//! Clientgen code generator library.
//!
//! This crate generates transport-bound Rust client bindings from schemas
//! built with `clientgen-define`. For every selected [`TransportProfile`]
//! the generated crate contains:
//!
//! - Enums with wire-string `encode`/`decode` (and serde, `Display`, `FromStr`)
//! - Serde structs for every message
//! - One trait per service, with one method per schema method returning
//!   `clientgen::Pending<T>`
//! - A client struct per (service, profile) implementing that trait, and a
//!   builder that refuses to build without a base URL
//!
//! Methods whose call pattern the profile cannot express are still emitted;
//! calling them fails with `UnsupportedOperation` and never reaches the
//! transport. A profile may instead reject such methods at generation time.
//!
//! ## Modules
//!
//! - [`codegen`] - Code generation for individual components
//! - [`output`] - Final assembly, validation, and file writing
//! - [`cargo_gen`] - Cargo.toml generation for the output package
//! - [`config`] - Built-in schema, schema file and profile resolution
//! - [`naming`] - Rust identifiers for schema names
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::path::Path;
//! use clientgen_definitions::define_test_schema;
//! use clientgen_gen::output::{GenerateOptions, generate_and_write};
//!
//! let schema = define_test_schema().unwrap();
//! let options = GenerateOptions {
//!     dry_run: true,
//!     ..Default::default()
//! };
//! let files = generate_and_write(&schema, Path::new("generated"), &options).unwrap();
//! println!("{} files", files.len());
//! ```
//!
//! ## Generated Code Structure
//!
//! For service `MyService` and profile `http-async`:
//!
//! ```text
//! pub trait MyService: ::std::marker::Send + ::std::marker::Sync {
//!     fn unary(&self, request: &Entry, id: u32) -> clientgen::Pending<Entry>;
//! }
//!
//! pub struct MyServiceHttpAsync { config: clientgen::ClientConfig }
//! pub struct MyServiceHttpAsyncBuilder { .. }
//!
//! impl MyService for MyServiceHttpAsync {
//!     fn unary(&self, request: &Entry, id: u32) -> clientgen::Pending<Entry> {
//!         self.config
//!             .call("unary", clientgen::HttpVerb::Post)
//!             .segment("foo")
//!             .param(&id)
//!             .json_body(request)
//!             .dispatch(clientgen::decode_json::<Entry>)
//!     }
//! }
//! ```
//!
//! [`TransportProfile`]: clientgen_define::TransportProfile

pub mod cargo_gen;
pub mod codegen;
pub mod config;
pub mod errors;
pub mod naming;
pub mod output;

#[cfg(test)]
pub(crate) mod test_utils;

pub use errors::GeneratorError;
pub use output::{GenerateOptions, GeneratedFile, generate, generate_and_write};

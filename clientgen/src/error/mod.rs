//! Error types for generated bindings.
//!
//! - [`BindingError`] - Everything a generated call or builder can fail with
//! - [`TransportError`] - Failures reported by the transport itself, carried
//!   through [`BindingError::Transport`] unmodified

mod binding_error;
mod transport_error;

pub use binding_error::BindingError;
pub use transport_error::TransportError;

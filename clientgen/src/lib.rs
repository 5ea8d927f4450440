//! Runtime support for generated client bindings.
//!
//! Code emitted by `clientgen-gen` links against this crate. It supplies the
//! pieces every binding shares so the generated code stays small:
//!
//! - **Pending results**: [`Pending`] is returned by every generated method
//!   immediately; a [`Completer`] settles it exactly once
//! - **Transport seam**: [`Transport`] takes a request and a completion
//!   callback; [`ReqwestTransport`] is the `reqwest` implementation
//! - **Request construction**: [`ClientConfig::call`] builds the URL from the
//!   base address and path segments, attaches a JSON body and dispatches
//! - **Enum codecs**: [`EnumCodec`] maps enum constants to wire strings
//! - **Errors**: [`BindingError`] covers every failure a call or builder reports
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use clientgen::{ReqwestTransport, Url};
//! use my_bindings::my_service::{MyService, MyServiceHttpAsync};
//! use my_bindings::types::Entry;
//!
//! let transport = Arc::new(ReqwestTransport::new(reqwest::Client::new())?);
//! let client = MyServiceHttpAsync::builder(transport)
//!     .base_url(Url::parse("http://localhost:8080")?)
//!     .build()?;
//!
//! let entry = client.unary(&Entry::default(), 42).await?;
//! ```

pub mod call;
pub mod codec;
pub mod config;
pub mod error;
pub mod path;
pub mod pending;
pub mod transport;

pub use call::{Call, UNAVAILABLE_MESSAGE, dispatch, unavailable, unsupported};
pub use codec::{EnumCodec, decode_json, discard};
pub use config::{BASE_URL_FIELD, ClientConfig, ClientConfigBuilder};
pub use error::{BindingError, TransportError};
pub use path::{PathValue, UrlBuilder};
pub use pending::{Completer, Pending};
pub use transport::{Callback, HttpRequest, ReqwestTransport, Transport, TransportResponse};

// Types generated code and callers name directly.
pub use bytes::Bytes;
pub use clientgen_define::{CallPattern, HttpVerb};
pub use reqwest::StatusCode;
pub use url::Url;

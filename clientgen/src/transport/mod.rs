//! The transport seam.
//!
//! Generated bindings never talk to an HTTP library directly. They hand a
//! fully built [`HttpRequest`] to a [`Transport`] together with a completion
//! callback; the transport performs the exchange on a thread of its choosing
//! and invokes the callback exactly once with the outcome.
//!
//! [`ReqwestTransport`] is the production implementation. Tests substitute
//! their own implementations to count or script exchanges.

mod http;

use bytes::Bytes;
use clientgen_define::HttpVerb;
use reqwest::StatusCode;
use url::Url;

use crate::error::TransportError;

pub use http::ReqwestTransport;

/// Completion callback registered with a transport for one exchange.
pub type Callback = Box<dyn FnOnce(Result<TransportResponse, TransportError>) + Send + 'static>;

/// An outbound HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub verb: HttpVerb,
    pub url: Url,
    /// JSON payload; always `None` for GET.
    pub body: Option<Bytes>,
}

/// A completed HTTP exchange, whatever its status.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub url: Url,
    pub body: Bytes,
}

impl TransportResponse {
    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// One-line description used in `BadResponse` errors.
    ///
    /// ```
    /// use clientgen::{StatusCode, TransportResponse, Url};
    ///
    /// let response = TransportResponse {
    ///     status: StatusCode::NOT_FOUND,
    ///     url: Url::parse("http://localhost/foo/42").unwrap(),
    ///     body: Default::default(),
    /// };
    /// assert_eq!(response.summary(), "404 Not Found from http://localhost/foo/42");
    /// ```
    pub fn summary(&self) -> String {
        match self.status.canonical_reason() {
            Some(reason) => format!("{} {} from {}", self.status.as_u16(), reason, self.url),
            None => format!("{} from {}", self.status.as_u16(), self.url),
        }
    }
}

/// Performs HTTP exchanges on behalf of generated bindings.
///
/// Implementations must not block the caller: `enqueue` registers the work
/// and returns. `on_complete` must be invoked exactly once, and may be
/// invoked on any thread.
pub trait Transport: Send + Sync {
    fn enqueue(&self, request: HttpRequest, on_complete: Callback);
}

//! Invocation building and callback-to-future bridging.
//!
//! Every bridged binding ends up in [`dispatch`]: one request is enqueued on
//! the transport with a completion handler that settles the call's
//! [`Pending`] handle through exactly one of three branches:
//!
//! | Transport outcome               | Handle settles with                   |
//! |---------------------------------|---------------------------------------|
//! | error                           | [`BindingError::Transport`], unmodified |
//! | response with non-2xx status    | [`BindingError::BadResponse`]         |
//! | response with 2xx status        | the decoder's result                  |

use bytes::Bytes;
use clientgen_define::{CallPattern, HttpVerb};
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::BindingError;
use crate::path::{PathValue, UrlBuilder};
use crate::pending::{self, Pending};
use crate::transport::{HttpRequest, Transport};

/// Message carried by [`BindingError::TransportUnavailable`] for stub profiles.
pub const UNAVAILABLE_MESSAGE: &str = "endpoint does not support this transport";

/// One invocation under construction.
///
/// Errors raised while building (a body that fails to serialize, a base URL
/// that cannot carry segments) are held until [`Call::dispatch`], which then
/// settles the handle in its failure branch without touching the transport.
#[derive(Debug)]
pub struct Call<'a> {
    config: &'a ClientConfig,
    method: &'static str,
    verb: HttpVerb,
    url: UrlBuilder,
    body: Option<Bytes>,
    error: Option<BindingError>,
}

impl<'a> Call<'a> {
    pub(crate) fn new(config: &'a ClientConfig, method: &'static str, verb: HttpVerb) -> Self {
        Self {
            config,
            method,
            verb,
            url: UrlBuilder::new(config.base_url()),
            body: None,
            error: None,
        }
    }

    /// Appends a literal path segment.
    pub fn segment(mut self, segment: &str) -> Self {
        self.url = self.url.segment(segment);
        self
    }

    /// Appends a path parameter in its canonical segment form.
    pub fn param<P: PathValue + ?Sized>(mut self, value: &P) -> Self {
        self.url = self.url.segment(value);
        self
    }

    /// Serializes `body` as the JSON request payload.
    pub fn json_body<B: Serialize + ?Sized>(mut self, body: &B) -> Self {
        if self.error.is_none() {
            match serde_json::to_vec(body) {
                Ok(bytes) => self.body = Some(Bytes::from(bytes)),
                Err(e) => self.error = Some(BindingError::Encode(e)),
            }
        }
        self
    }

    /// Sends the request and bridges its completion into a [`Pending`].
    pub fn dispatch<T, F>(self, decode: F) -> Pending<T>
    where
        T: Send + 'static,
        F: FnOnce(Bytes) -> Result<T, BindingError> + Send + 'static,
    {
        if let Some(err) = self.error {
            return Pending::failed(self.method, err);
        }

        let url = match self.url.build() {
            Ok(url) => url,
            Err(err) => return Pending::failed(self.method, err),
        };

        let request = HttpRequest {
            verb: self.verb,
            url,
            body: self.body,
        };
        dispatch(self.config.transport().as_ref(), self.method, request, decode)
    }
}

/// Enqueues `request` and settles the returned handle from the transport's
/// completion callback.
///
/// Returns immediately. The callback may run on any thread.
pub fn dispatch<T, F>(
    transport: &dyn Transport,
    method: &'static str,
    request: HttpRequest,
    decode: F,
) -> Pending<T>
where
    T: Send + 'static,
    F: FnOnce(Bytes) -> Result<T, BindingError> + Send + 'static,
{
    let (completer, pending) = pending::channel(method);

    debug!(method, verb = %request.verb, url = %request.url, "dispatching call");

    transport.enqueue(
        request,
        Box::new(move |outcome| {
            let result = match outcome {
                Err(err) => {
                    warn!(method, error = %err, "transport failed");
                    Err(BindingError::Transport(err))
                }
                Ok(response) if !response.is_success() => {
                    Err(BindingError::BadResponse(response.summary()))
                }
                Ok(response) => decode(response.body),
            };
            completer.complete(result);
        }),
    );

    pending
}

/// A handle that fails because `profile` cannot express `pattern`.
///
/// No I/O is attempted.
pub fn unsupported<T>(method: &'static str, pattern: CallPattern, profile: &str) -> Pending<T> {
    debug!(method, %pattern, profile, "unsupported call pattern");
    Pending::failed(
        method,
        BindingError::UnsupportedOperation {
            method: method.to_string(),
            pattern,
            profile: profile.to_string(),
        },
    )
}

/// A handle that fails because the profile is a placeholder backend.
///
/// No I/O is attempted.
pub fn unavailable<T>(method: &'static str) -> Pending<T> {
    Pending::failed(
        method,
        BindingError::TransportUnavailable(UNAVAILABLE_MESSAGE.to_string()),
    )
}

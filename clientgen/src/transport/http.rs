//! [`Transport`] over `reqwest`.

use std::time::Duration;

use clientgen_define::HttpVerb;
use reqwest::header::CONTENT_TYPE;
use tokio::runtime::Handle;
use tracing::{debug, warn};

use super::{Callback, HttpRequest, Transport, TransportResponse};
use crate::error::TransportError;

/// Drives exchanges with a shared `reqwest::Client` on a tokio runtime.
///
/// Each `enqueue` spawns one task on the runtime; the completion callback
/// runs on that task, never on the caller's stack. The client handle is
/// borrowed from the application and its lifecycle is not managed here.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    runtime: Handle,
    timeout: Option<Duration>,
}

impl ReqwestTransport {
    /// Uses the tokio runtime the caller is running on.
    ///
    /// ## Errors
    ///
    /// Returns [`TransportError::Runtime`] when called outside a tokio runtime.
    pub fn new(client: reqwest::Client) -> Result<Self, TransportError> {
        let runtime = Handle::try_current().map_err(|e| TransportError::Runtime(e.to_string()))?;
        Ok(Self::with_handle(client, runtime))
    }

    /// Uses an explicit runtime handle, for callers outside async code.
    pub fn with_handle(client: reqwest::Client, runtime: Handle) -> Self {
        Self {
            client,
            runtime,
            timeout: None,
        }
    }

    /// Fails exchanges that take longer than `timeout` with
    /// [`TransportError::Timeout`].
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Transport for ReqwestTransport {
    fn enqueue(&self, request: HttpRequest, on_complete: Callback) {
        let client = self.client.clone();
        let timeout = self.timeout;

        self.runtime.spawn(async move {
            let outcome = match timeout {
                Some(limit) => match tokio::time::timeout(limit, execute(&client, request)).await {
                    Ok(outcome) => outcome,
                    Err(_) => Err(TransportError::Timeout {
                        duration_ms: u64::try_from(limit.as_millis()).unwrap_or(u64::MAX),
                    }),
                },
                None => execute(&client, request).await,
            };

            if let Err(err) = &outcome {
                warn!(error = %err, "transport exchange failed");
            }
            on_complete(outcome);
        });
    }
}

async fn execute(
    client: &reqwest::Client,
    request: HttpRequest,
) -> Result<TransportResponse, TransportError> {
    debug!(verb = %request.verb, url = %request.url, "sending request");

    let mut builder = client.request(to_reqwest(request.verb), request.url);
    if let Some(body) = request.body {
        builder = builder.header(CONTENT_TYPE, "application/json").body(body);
    }

    let response = builder.send().await.map_err(classify)?;
    let status = response.status();
    let url = response.url().clone();
    let body = response.bytes().await?;

    debug!(status = status.as_u16(), %url, "received response");
    Ok(TransportResponse { status, url, body })
}

/// Connect failures become [`TransportError::Connection`]; everything else
/// stays a request error.
fn classify(err: reqwest::Error) -> TransportError {
    if err.is_connect() {
        TransportError::Connection(err.to_string())
    } else {
        TransportError::Request(err)
    }
}

fn to_reqwest(verb: HttpVerb) -> reqwest::Method {
    match verb {
        HttpVerb::Get => reqwest::Method::GET,
        HttpVerb::Post => reqwest::Method::POST,
    }
}

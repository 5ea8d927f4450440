//! Immutable client configuration shared by every generated client.

use std::fmt;
use std::sync::Arc;

use clientgen_define::HttpVerb;
use url::Url;

use crate::call::Call;
use crate::error::BindingError;
use crate::transport::Transport;

/// Name of the base address field, as reported when it is missing.
pub const BASE_URL_FIELD: &str = "baseUrl";

/// Transport handle and base address of a built client.
///
/// Immutable once built. Cloning shares the transport handle; the handle's
/// lifecycle belongs to whoever created it.
#[derive(Clone)]
pub struct ClientConfig {
    transport: Arc<dyn Transport>,
    base_url: Url,
}

impl ClientConfig {
    /// Starts a builder bound to `transport`.
    pub fn builder(transport: Arc<dyn Transport>) -> ClientConfigBuilder {
        ClientConfigBuilder {
            transport,
            base_url: None,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Starts building one invocation of `method`.
    pub fn call(&self, method: &'static str, verb: HttpVerb) -> Call<'_> {
        Call::new(self, method, verb)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

/// Collects configuration until every required field is present.
pub struct ClientConfigBuilder {
    transport: Arc<dyn Transport>,
    base_url: Option<Url>,
}

impl ClientConfigBuilder {
    /// Sets the base address all request paths are appended to.
    pub fn base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// ## Errors
    ///
    /// - [`BindingError::MissingRequiredField`] (`"baseUrl"`) if no base
    ///   address was set
    /// - [`BindingError::InvalidBaseUrl`] if the base address cannot carry
    ///   path segments
    pub fn build(self) -> Result<ClientConfig, BindingError> {
        let base_url = self
            .base_url
            .ok_or(BindingError::MissingRequiredField(BASE_URL_FIELD))?;

        if base_url.cannot_be_a_base() {
            return Err(BindingError::InvalidBaseUrl(base_url.to_string()));
        }

        Ok(ClientConfig {
            transport: self.transport,
            base_url,
        })
    }
}

impl fmt::Debug for ClientConfigBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfigBuilder")
            .field("base_url", &self.base_url.as_ref().map(Url::as_str))
            .finish_non_exhaustive()
    }
}

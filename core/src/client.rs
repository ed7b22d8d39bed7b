//! Issue resource requests through a session manager and decode the result.
//!
//! # Design
//! `HttpClient` only asks implementors for a base URL and a session manager;
//! `request` and `fetch` are provided. Each call builds a `Target`, resolves
//! it into an `HttpRequest`, hands that to the manager, and decodes the
//! bytes. Nothing is retried and nothing is cached here; `use_cache` travels
//! to the manager untouched.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use tracing::{debug, debug_span, warn, Instrument};
use url::Url;

use crate::config::ClientConfig;
use crate::decode::JsonDecoder;
use crate::error::Error;
use crate::resource::HttpResource;
use crate::target::Target;
use crate::transport::SessionManager;

#[async_trait]
pub trait HttpClient: Send + Sync {
    fn base_url(&self) -> Option<&Url>;

    fn manager(&self) -> &dyn SessionManager;

    fn decoder(&self) -> JsonDecoder {
        JsonDecoder::default()
    }

    /// Send `resource` and return the raw response body.
    ///
    /// Fails with `Error::Configuration` before reaching the session manager
    /// when the base URL is missing or cannot carry a path.
    async fn fetch<R>(&self, resource: R) -> Result<Bytes, Error>
    where
        R: HttpResource + Send,
    {
        let span = debug_span!("fetch", path = %resource.path(), method = %resource.method());
        async move {
            let Some(request) = Target::new(self.base_url().cloned(), resource).to_request() else {
                warn!(base_url = ?self.base_url(), "cannot resolve request URL");
                return Err(Error::Configuration(match self.base_url() {
                    None => "base URL is not set".to_string(),
                    Some(base) => format!("base URL {base} cannot carry a path"),
                }));
            };

            debug!(url = %request.url, use_cache = request.use_cache, "dispatching request");
            let bytes = self.manager().request(&request).await.map_err(|e| {
                debug!(url = %request.url, error = %e, "transport failed");
                Error::from(e)
            })?;
            debug!(url = %request.url, len = bytes.len(), "received response");
            Ok(bytes)
        }
        .instrument(span)
        .await
    }

    /// Send `resource` and decode the response body into `T`.
    async fn request<R, T>(&self, resource: R) -> Result<T, Error>
    where
        R: HttpResource + Send,
        T: DeserializeOwned,
    {
        let span = debug_span!("request", path = %resource.path(), method = %resource.method());
        async move {
            let bytes = self.fetch(resource).await?;
            self.decoder().decode(&bytes).map_err(|e| {
                warn!(error = %e, "failed to decode response");
                Error::from(e)
            })
        }
        .instrument(span)
        .await
    }
}

/// An `HttpClient` over a shared session manager.
#[derive(Clone)]
pub struct ResourceClient {
    base_url: Option<Url>,
    manager: Arc<dyn SessionManager>,
    decoder: JsonDecoder,
}

impl ResourceClient {
    pub fn new(base_url: Option<Url>, manager: Arc<dyn SessionManager>) -> Self {
        Self {
            base_url,
            manager,
            decoder: JsonDecoder::default(),
        }
    }

    /// Build a client from textual configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::Configuration` if the configured base URL is invalid.
    pub fn from_config(config: &ClientConfig, manager: Arc<dyn SessionManager>) -> Result<Self, Error> {
        let base_url = config.parse_base_url()?;
        Ok(Self::new(base_url, manager).with_decoder(JsonDecoder::new(config.key_decoding)))
    }

    #[must_use]
    pub fn with_decoder(mut self, decoder: JsonDecoder) -> Self {
        self.decoder = decoder;
        self
    }
}

impl fmt::Debug for ResourceClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceClient")
            .field("base_url", &self.base_url)
            .field("decoder", &self.decoder)
            .finish_non_exhaustive()
    }
}

impl HttpClient for ResourceClient {
    fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    fn manager(&self) -> &dyn SessionManager {
        self.manager.as_ref()
    }

    fn decoder(&self) -> JsonDecoder {
        self.decoder
    }
}

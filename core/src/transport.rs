//! The session manager seam.
//!
//! # Design
//! The library never touches the network itself. A `SessionManager` receives
//! a resolved `HttpRequest` and returns the raw body; connection pooling,
//! caching, timeouts and authentication are its business. Implementations
//! are shared across many concurrent requests, so they take `&self` and do
//! their own synchronization.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::TransportError;
use crate::http::HttpRequest;

#[async_trait]
pub trait SessionManager: Send + Sync {
    /// Execute `request` and return the response body.
    ///
    /// Implementations must support at least GET, POST, PUT and DELETE,
    /// treat `use_cache` as a hint, and report network or non-success HTTP
    /// outcomes as `TransportError`.
    async fn request(&self, request: &HttpRequest) -> Result<Bytes, TransportError>;
}

#[async_trait]
impl<M: SessionManager + ?Sized> SessionManager for Arc<M> {
    async fn request(&self, request: &HttpRequest) -> Result<Bytes, TransportError> {
        (**self).request(request).await
    }
}

//! A resource bound to a base URL.

use url::Url;

use crate::http::HttpRequest;
use crate::resource::HttpResource;

/// Pairs an optional base URL with a resource. Built per request and
/// discarded afterwards.
#[derive(Debug, Clone)]
pub struct Target<R> {
    base_url: Option<Url>,
    resource: R,
}

impl<R: HttpResource> Target<R> {
    pub fn new(base_url: Option<Url>, resource: R) -> Self {
        Self { base_url, resource }
    }

    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    pub fn resource(&self) -> &R {
        &self.resource
    }

    /// The base URL with the resource path appended as path components.
    ///
    /// Returns `None` when there is no base URL or the base URL cannot carry
    /// path segments (e.g. `mailto:`).
    pub fn url(&self) -> Option<Url> {
        let base = self.base_url.as_ref()?;
        append_path(base, &self.resource.path())
    }

    /// Resolve the target into the request handed to the session manager.
    pub fn to_request(&self) -> Option<HttpRequest> {
        Some(HttpRequest {
            method: self.resource.method(),
            url: self.url()?,
            parameters: self.resource.parameters(),
            use_cache: self.resource.use_cache(),
        })
    }
}

/// Append `path` to `base` segment by segment. Empty segments are dropped so
/// slashes never double up; a trailing slash on `path` is kept. A path with
/// no segments leaves `base` untouched, trailing slash included.
fn append_path(base: &Url, path: &str) -> Option<Url> {
    let mut url = base.clone();
    let mut parts = path.split('/').filter(|s| !s.is_empty()).peekable();
    let mut segments = url.path_segments_mut().ok()?;
    if parts.peek().is_some() {
        segments.pop_if_empty();
        segments.extend(parts);
        if path.ends_with('/') {
            segments.push("");
        }
    }
    drop(segments);
    Some(url)
}

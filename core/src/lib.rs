//! Generic HTTP resource client.
//!
//! # Overview
//! Describe endpoints as `HttpResource` values, bind them to a base URL, send
//! them through a caller-supplied `SessionManager`, and decode the JSON reply
//! into a typed value. The session manager owns all network I/O, caching and
//! connection policy; this crate only composes the URL, forwards the request
//! and decodes the body.
//!
//! # Design
//! - `HttpResource` defaults to GET, no parameters, and cache allowed.
//! - `Target` joins base URL and path by path component, never doubling
//!   slashes. No base URL means no target URL.
//! - `HttpClient::request` fails with `Error::Configuration` before any I/O
//!   when the URL cannot be resolved, passes transport errors through
//!   unchanged, and never returns a partially decoded value.
//! - `JsonDecoder` translates snake_case wire keys to camelCase by default.

pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod http;
pub mod resource;
pub mod target;
pub mod transport;

pub use client::{HttpClient, ResourceClient};
pub use config::ClientConfig;
pub use decode::{convert_from_snake_case, JsonDecoder, KeyDecodingStrategy};
pub use error::{DecodeError, Error, TransportError};
pub use http::{HttpMethod, HttpRequest, ParameterDestination, Parameters, UnknownMethod};
pub use resource::{HttpResource, Resource};
pub use target::Target;
pub use transport::SessionManager;

//! HTTP request types handed to the session manager.
//!
//! # Design
//! These types describe an outgoing request as plain data. The library builds
//! an `HttpRequest` from a resource and a base URL, and the `SessionManager`
//! is responsible for the actual I/O. Parameter encoding helpers live here so
//! every transport encodes parameters the same way, but a transport is free
//! to ignore them and apply its own policy.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;
use url::Url;

/// Request parameters as a JSON object. `None` at the use site means
/// "no parameters sent", which is distinct from an empty map.
pub type Parameters = serde_json::Map<String, Value>;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown method token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown HTTP method: {0}")]
pub struct UnknownMethod(pub String);

impl FromStr for HttpMethod {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "DELETE" => Ok(HttpMethod::Delete),
            "PATCH" => Ok(HttpMethod::Patch),
            "HEAD" => Ok(HttpMethod::Head),
            "OPTIONS" => Ok(HttpMethod::Options),
            _ => Err(UnknownMethod(s.to_string())),
        }
    }
}

/// Where a request's parameters travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterDestination {
    QueryString,
    HttpBody,
}

/// A fully resolved request described as plain data.
///
/// Built by `Target::to_request`. The session manager executes it and returns
/// the raw response body.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub parameters: Option<Parameters>,
    pub use_cache: bool,
}

impl HttpRequest {
    /// GET, HEAD and DELETE carry parameters in the query string; every
    /// other method carries them in the body.
    pub fn destination(&self) -> ParameterDestination {
        match self.method {
            HttpMethod::Get | HttpMethod::Head | HttpMethod::Delete => {
                ParameterDestination::QueryString
            }
            _ => ParameterDestination::HttpBody,
        }
    }

    /// The URL to send, with parameters appended to the query when they
    /// belong there. Existing query pairs on `url` are kept.
    pub fn encoded_url(&self) -> Url {
        let mut url = self.url.clone();
        let params = match (&self.parameters, self.destination()) {
            (Some(params), ParameterDestination::QueryString) if !params.is_empty() => params,
            _ => return url,
        };

        let mut pairs = Vec::new();
        for (key, value) in params {
            query_components(key, value, &mut pairs);
        }
        url.query_pairs_mut()
            .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        url
    }

    /// The JSON body to send, if the parameters belong in the body.
    pub fn json_body(&self) -> Option<String> {
        match (&self.parameters, self.destination()) {
            (Some(params), ParameterDestination::HttpBody) => {
                Some(Value::Object(params.clone()).to_string())
            }
            _ => None,
        }
    }
}

/// Flatten one parameter into `key=value` pairs using bracket notation for
/// arrays (`key[]`) and nested objects (`key[sub]`).
fn query_components(key: &str, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (sub, nested) in map {
                query_components(&format!("{key}[{sub}]"), nested, out);
            }
        }
        Value::Array(items) => {
            for item in items {
                query_components(&format!("{key}[]"), item, out);
            }
        }
        Value::String(s) => out.push((key.to_string(), s.clone())),
        Value::Null => out.push((key.to_string(), String::new())),
        other => out.push((key.to_string(), other.to_string())),
    }
}

//! Endpoint descriptors.
//!
//! # Design
//! `HttpResource` is the capability any endpoint type implements: only `path`
//! is required, the rest default to GET, no parameters, and cache allowed.
//! Callers usually model their API as an enum implementing the trait; the
//! `Resource` value type covers ad-hoc endpoints.

use crate::http::{HttpMethod, Parameters};

/// Describes one HTTP endpoint relative to a client's base URL.
pub trait HttpResource {
    /// Path appended to the base URL, e.g. `users/1`.
    fn path(&self) -> String;

    fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn parameters(&self) -> Option<Parameters> {
        None
    }

    /// Hint forwarded to the session manager; it owns the cache policy.
    fn use_cache(&self) -> bool {
        true
    }
}

impl<R: HttpResource + ?Sized> HttpResource for &R {
    fn path(&self) -> String {
        (**self).path()
    }

    fn method(&self) -> HttpMethod {
        (**self).method()
    }

    fn parameters(&self) -> Option<Parameters> {
        (**self).parameters()
    }

    fn use_cache(&self) -> bool {
        (**self).use_cache()
    }
}

/// An immutable endpoint descriptor built from a path plus optional
/// overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    path: String,
    method: HttpMethod,
    parameters: Option<Parameters>,
    use_cache: bool,
}

impl Resource {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: HttpMethod::Get,
            parameters: None,
            use_cache: true,
        }
    }

    #[must_use]
    pub fn with_method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    #[must_use]
    pub fn with_parameters(mut self, parameters: Parameters) -> Self {
        self.parameters = Some(parameters);
        self
    }

    #[must_use]
    pub fn with_use_cache(mut self, use_cache: bool) -> Self {
        self.use_cache = use_cache;
        self
    }
}

impl HttpResource for Resource {
    fn path(&self) -> String {
        self.path.clone()
    }

    fn method(&self) -> HttpMethod {
        self.method
    }

    fn parameters(&self) -> Option<Parameters> {
        self.parameters.clone()
    }

    fn use_cache(&self) -> bool {
        self.use_cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// An endpoint that only provides a path.
    struct Profile;

    impl HttpResource for Profile {
        fn path(&self) -> String {
            "me".to_string()
        }
    }

    enum UserApi {
        Get(u64),
        Rename { id: u64, name: String },
    }

    impl HttpResource for UserApi {
        fn path(&self) -> String {
            match self {
                UserApi::Get(id) | UserApi::Rename { id, .. } => format!("users/{id}"),
            }
        }

        fn method(&self) -> HttpMethod {
            match self {
                UserApi::Get(_) => HttpMethod::Get,
                UserApi::Rename { .. } => HttpMethod::Put,
            }
        }

        fn parameters(&self) -> Option<Parameters> {
            match self {
                UserApi::Get(_) => None,
                UserApi::Rename { name, .. } => json!({ "display_name": name }).as_object().cloned(),
            }
        }
    }

    #[test]
    fn trait_defaults_apply_when_only_path_is_given() {
        assert_eq!(Profile.method(), HttpMethod::Get);
        assert!(Profile.parameters().is_none());
        assert!(Profile.use_cache());
    }

    #[test]
    fn resource_value_defaults() {
        let resource = Resource::new("users/1");
        assert_eq!(resource.path(), "users/1");
        assert_eq!(resource.method(), HttpMethod::Get);
        assert!(resource.parameters().is_none());
        assert!(resource.use_cache());
    }

    #[test]
    fn resource_overrides() {
        let params = json!({"display_name": "Ada"}).as_object().cloned().unwrap();
        let resource = Resource::new("users")
            .with_method(HttpMethod::Post)
            .with_parameters(params.clone())
            .with_use_cache(false);
        assert_eq!(resource.method(), HttpMethod::Post);
        assert_eq!(resource.parameters(), Some(params));
        assert!(!resource.use_cache());
    }

    #[test]
    fn empty_parameters_stay_distinct_from_none() {
        let resource = Resource::new("users").with_parameters(Parameters::new());
        assert_eq!(resource.parameters(), Some(Parameters::new()));
    }

    #[test]
    fn enum_resources_override_per_variant() {
        assert_eq!(UserApi::Get(3).path(), "users/3");
        assert_eq!(UserApi::Get(3).method(), HttpMethod::Get);
        assert!(UserApi::Get(3).use_cache());

        let rename = UserApi::Rename { id: 3, name: "Grace".to_string() };
        assert_eq!(rename.method(), HttpMethod::Put);
        assert_eq!(rename.parameters().unwrap()["display_name"], "Grace");
    }

    #[test]
    fn references_forward_to_the_resource() {
        let resource = Resource::new("users").with_use_cache(false);
        let by_ref = &resource;
        assert_eq!(by_ref.path(), "users");
        assert!(!HttpResource::use_cache(&by_ref));
    }
}

//! Client configuration.

use url::Url;

use crate::decode::KeyDecodingStrategy;
use crate::error::Error;

/// Textual configuration for a `ResourceClient`.
///
/// The base URL is optional: a client without one can be constructed, but
/// every request it issues fails with `Error::Configuration`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: Option<String>,
    pub key_decoding: KeyDecodingStrategy,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_key_decoding(mut self, key_decoding: KeyDecodingStrategy) -> Self {
        self.key_decoding = key_decoding;
        self
    }

    /// Parse the base URL, if any.
    ///
    /// # Errors
    ///
    /// Returns `Error::Configuration` if the URL does not parse or cannot
    /// carry a path.
    pub fn parse_base_url(&self) -> Result<Option<Url>, Error> {
        let Some(raw) = self.base_url.as_deref() else {
            return Ok(None);
        };
        let url = Url::parse(raw)
            .map_err(|e| Error::Configuration(format!("invalid base URL {raw:?}: {e}")))?;
        if url.cannot_be_a_base() {
            return Err(Error::Configuration(format!(
                "base URL {raw:?} cannot carry a path"
            )));
        }
        Ok(Some(url))
    }

    pub fn validate(&self) -> Result<(), Error> {
        self.parse_base_url().map(|_| ())
    }
}

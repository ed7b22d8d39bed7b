//! JSON response decoding with key-case translation.
//!
//! # Design
//! The wire format uses snake_case keys. With `ConvertFromSnakeCase` the
//! decoder rewrites every object key to camelCase before handing the value to
//! serde, so result types declare `#[serde(rename_all = "camelCase")]` and
//! keep ordinary snake_case field names in Rust.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::DecodeError;

/// How object keys are rewritten before deserialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyDecodingStrategy {
    /// Keys are passed through unchanged.
    UseDefaultKeys,
    /// `user_id` becomes `userId`.
    #[default]
    ConvertFromSnakeCase,
}

/// Decodes raw response bytes into a typed value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonDecoder {
    pub key_decoding: KeyDecodingStrategy,
}

impl JsonDecoder {
    pub fn new(key_decoding: KeyDecodingStrategy) -> Self {
        Self { key_decoding }
    }

    /// Decode `bytes` into `T`. On failure the error carries the raw payload.
    pub fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, DecodeError> {
        let fail = |source| DecodeError::new(source, Bytes::copy_from_slice(bytes));

        let value: Value = serde_json::from_slice(bytes).map_err(fail)?;
        let value = match self.key_decoding {
            KeyDecodingStrategy::UseDefaultKeys => value,
            KeyDecodingStrategy::ConvertFromSnakeCase => convert_keys(value),
        };
        serde_json::from_value(value).map_err(fail)
    }
}

fn convert_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, nested)| (convert_from_snake_case(&key), convert_keys(nested)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(convert_keys).collect()),
        other => other,
    }
}

/// Convert one snake_case key to camelCase.
///
/// Leading and trailing underscores are preserved, runs of interior
/// underscores collapse, and words after the first are capitalized with the
/// rest of each word lower-cased. Keys without an interior underscore are
/// returned unchanged.
pub fn convert_from_snake_case(key: &str) -> String {
    let Some(first) = key.find(|c: char| c != '_') else {
        return key.to_string();
    };
    // `first` found a non-underscore, so `rfind` does too. `end` is a char
    // boundary even when the last letter is multi-byte.
    let last = key.rfind(|c: char| c != '_').unwrap_or(first);
    let end = last + key[last..].chars().next().map_or(0, char::len_utf8);
    let core = &key[first..end];
    if !core.contains('_') {
        return key.to_string();
    }

    let mut out = String::with_capacity(key.len());
    out.push_str(&key[..first]);
    let mut words = core.split('_').filter(|w| !w.is_empty());
    if let Some(head) = words.next() {
        out.push_str(head);
    }
    for word in words {
        let mut chars = word.chars();
        if let Some(c) = chars.next() {
            out.extend(c.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
        }
    }
    out.push_str(&key[end..]);
    out
}

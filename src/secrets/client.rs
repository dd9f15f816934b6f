//! Core secret fetcher trait and the raw payload it returns.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::errors::{Error, Result};

/// Default logical path of the AWS credentials secret.
pub const DEFAULT_SECRET_PATH: &str = "secret/data/aws";

/// The `data` object of a Vault logical read.
///
/// For a KV v2 mount this is `{"data": {...}, "metadata": {...}}`. Nothing about
/// its inner shape is guaranteed; see [`CredentialExtractor`](super::CredentialExtractor).
#[derive(Debug, Clone, PartialEq)]
pub struct SecretPayload(Map<String, Value>);

impl SecretPayload {
    pub fn new(data: Map<String, Value>) -> Self {
        Self(data)
    }

    /// Build a payload from the `data` field of a read response.
    ///
    /// An absent or null value means there is nothing stored at `path`.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if `data` is absent or null
    /// - [`Error::MalformedPayload`] if `data` is not an object
    pub fn from_response(path: &str, data: Option<Value>) -> Result<Self> {
        match data {
            None | Some(Value::Null) => Err(Error::not_found(path)),
            Some(Value::Object(map)) => Ok(Self(map)),
            Some(other) => Err(Error::malformed_payload(format!(
                "expected an object at '{}', found {}",
                path,
                json_type_name(&other)
            ))),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl TryFrom<Value> for SecretPayload {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(Error::malformed_payload(format!(
                "expected an object, found {}",
                json_type_name(&other)
            ))),
        }
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A single read against a secret store.
///
/// Implementations perform exactly one read per call; nothing is cached between
/// calls.
///
/// # Errors
///
/// - [`Error::Read`] if the read operation fails
/// - [`Error::NotFound`] if nothing is stored at the path
#[async_trait]
pub trait SecretFetcher: Send + Sync {
    /// Read the raw payload stored at `path`.
    async fn fetch(&self, path: &str) -> Result<SecretPayload>;
}

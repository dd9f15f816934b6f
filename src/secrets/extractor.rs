//! Decoding of AWS credential material out of a Vault secret payload.
//!
//! The stored secret is expected to look like:
//!
//! ```json
//! {
//!   "data": {
//!     "creds": "{\"AWS_ACCESS_KEY_ID\":\"AKIA...\",\"AWS_SECRET_ACCESS_KEY\":\"...\"}"
//!   }
//! }
//! ```
//!
//! `creds` is a JSON document encoded as a string, so decoding happens in two
//! passes: walk the payload to the string, then parse the string.

use serde_json::Value;
use std::collections::HashMap;

use super::client::{json_type_name, SecretPayload};
use super::types::SecretString;
use crate::errors::{Error, Result};

/// Name of the payload field holding the KV data.
pub const DATA_FIELD: &str = "data";
/// Name of the field holding the JSON-encoded credentials.
pub const CREDS_FIELD: &str = "creds";
pub const ACCESS_KEY_ID_KEY: &str = "AWS_ACCESS_KEY_ID";
pub const SECRET_ACCESS_KEY_KEY: &str = "AWS_SECRET_ACCESS_KEY";

/// How strictly the extracted keys are checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CredentialPolicy {
    /// Absent or empty keys pass through as empty strings; AWS rejects them later.
    #[default]
    Permissive,
    /// Absent or empty keys fail extraction with [`Error::MissingField`].
    RequireNonEmpty,
}

/// Access key pair decoded from the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialMaterial {
    pub access_key_id: String,
    pub secret_access_key: SecretString,
}

impl CredentialMaterial {
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<SecretString>,
    ) -> Self {
        Self { access_key_id: access_key_id.into(), secret_access_key: secret_access_key.into() }
    }

    /// True when both keys hold a value.
    pub fn is_complete(&self) -> bool {
        !self.access_key_id.is_empty() && !self.secret_access_key.is_empty()
    }
}

impl std::fmt::Debug for CredentialMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialMaterial")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &self.secret_access_key)
            .finish()
    }
}

/// Turns a [`SecretPayload`] into [`CredentialMaterial`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CredentialExtractor {
    policy: CredentialPolicy,
}

impl CredentialExtractor {
    pub fn new(policy: CredentialPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> CredentialPolicy {
        self.policy
    }

    /// Decode the credential material stored in `payload`.
    ///
    /// # Errors
    ///
    /// - [`Error::MalformedPayload`] if `data` is absent or not an object
    /// - [`Error::MissingField`] if `creds` is absent, not a string or empty,
    ///   or (with [`CredentialPolicy::RequireNonEmpty`]) if a key is empty
    /// - [`Error::Parse`] if `creds` is not a JSON object of strings
    pub fn extract(&self, payload: &SecretPayload) -> Result<CredentialMaterial> {
        let data = match payload.get(DATA_FIELD) {
            Some(Value::Object(data)) => data,
            Some(other) => {
                return Err(Error::malformed_payload(format!(
                    "'{}' is {}, expected an object",
                    DATA_FIELD,
                    json_type_name(other)
                )))
            }
            None => {
                return Err(Error::malformed_payload(format!("'{}' field is absent", DATA_FIELD)))
            }
        };

        let creds = match data.get(CREDS_FIELD) {
            Some(Value::String(creds)) if !creds.is_empty() => creds,
            _ => return Err(Error::missing_field(CREDS_FIELD)),
        };

        let mut values: HashMap<String, String> =
            serde_json::from_str(creds).map_err(|e| Error::parse(CREDS_FIELD, e))?;

        let access_key_id = values.remove(ACCESS_KEY_ID_KEY).unwrap_or_default();
        let secret_access_key = values.remove(SECRET_ACCESS_KEY_KEY).unwrap_or_default();

        if self.policy == CredentialPolicy::RequireNonEmpty {
            if access_key_id.is_empty() {
                return Err(Error::missing_field(ACCESS_KEY_ID_KEY));
            }
            if secret_access_key.is_empty() {
                return Err(Error::missing_field(SECRET_ACCESS_KEY_KEY));
            }
        }

        tracing::debug!(
            access_key_id = %access_key_id,
            extra_keys = values.len(),
            "Extracted AWS credential material from secret payload"
        );

        Ok(CredentialMaterial::new(access_key_id, secret_access_key))
    }
}

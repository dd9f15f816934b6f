//! HashiCorp Vault secret fetcher.
//!
//! Performs a logical read (`GET /v1/{path}`) and returns the response `data`
//! untouched. For a KV v2 mount the path includes the `data/` segment, e.g.
//! `secret/data/aws`, and the returned payload carries both `data` and
//! `metadata`.
//!
//! # Example
//!
//! ```rust,ignore
//! use vaultscope::secrets::{SecretFetcher, VaultConfig, VaultSecretFetcher};
//!
//! let config = VaultConfig {
//!     address: "https://vault.example.com:8200".to_string(),
//!     token: Some("hvs.token".into()),
//!     namespace: None,
//! };
//! let fetcher = VaultSecretFetcher::new(&config)?;
//! let payload = fetcher.fetch("secret/data/aws").await?;
//! ```

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, error, info};
use vaultrs::client::{VaultClient, VaultClientSettingsBuilder};
use vaultrs::error::ClientError;
use vaultrs::kv1;

use super::client::{SecretFetcher, SecretPayload};
use super::types::SecretString;
use crate::errors::{Error, Result};

/// Default Vault address, matching the Vault CLI default.
pub const DEFAULT_VAULT_ADDR: &str = "http://127.0.0.1:8200";

/// Connection settings for Vault.
#[derive(Debug, Clone, PartialEq)]
pub struct VaultConfig {
    /// Vault server address (e.g., "https://vault.example.com:8200")
    pub address: String,

    /// Vault token sent as `X-Vault-Token`
    pub token: Option<SecretString>,

    /// Vault Enterprise namespace
    pub namespace: Option<String>,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self { address: DEFAULT_VAULT_ADDR.to_string(), token: None, namespace: None }
    }
}

/// [`SecretFetcher`] backed by a Vault server.
pub struct VaultSecretFetcher {
    client: VaultClient,
    address: String,
}

impl std::fmt::Debug for VaultSecretFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultSecretFetcher")
            .field("address", &self.address)
            .field("client", &"[VaultClient]")
            .finish()
    }
}

impl VaultSecretFetcher {
    /// Build a fetcher for the given Vault configuration.
    ///
    /// No request is made here; an unreachable server shows up on the first
    /// [`fetch`](SecretFetcher::fetch).
    ///
    /// # Errors
    ///
    /// - [`Error::Connection`] if the address is invalid or the client cannot be built
    pub fn new(config: &VaultConfig) -> Result<Self> {
        let address = url::Url::parse(&config.address).map_err(|e| {
            Error::connection(format!("invalid Vault address '{}': {}", config.address, e))
        })?;
        if !matches!(address.scheme(), "http" | "https") {
            return Err(Error::connection(format!(
                "invalid Vault address '{}': scheme must be http or https",
                config.address
            )));
        }

        let mut settings_builder = VaultClientSettingsBuilder::default();
        settings_builder.address(&config.address);

        if let Some(ref token) = config.token {
            settings_builder.token(token.expose_secret());
        }

        if let Some(ref namespace) = config.namespace {
            settings_builder.namespace(Some(namespace.clone()));
        }

        let settings = settings_builder
            .build()
            .map_err(|e| Error::connection(format!("invalid Vault client settings: {}", e)))?;

        let client = VaultClient::new(settings).map_err(|e| Error::connection(e.to_string()))?;

        info!(address = %config.address, namespace = ?config.namespace, "Initialized Vault client");

        Ok(Self { client, address: config.address.clone() })
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}

#[async_trait]
impl SecretFetcher for VaultSecretFetcher {
    async fn fetch(&self, path: &str) -> Result<SecretPayload> {
        let (mount, rest) = split_logical_path(path)?;

        debug!(path = %path, "Reading secret from Vault");

        let response: std::result::Result<Value, ClientError> =
            kv1::get(&self.client, mount, rest).await;
        let data = match response {
            Ok(data) => Some(data),
            Err(e) => return Err(classify_read_error(path, e)),
        };

        SecretPayload::from_response(path, data)
    }
}

/// Split `secret/data/aws` into the mount (`secret`) and the path below it.
fn split_logical_path(path: &str) -> Result<(&str, &str)> {
    match path.trim_matches('/').split_once('/') {
        Some((mount, rest)) if !mount.is_empty() && !rest.is_empty() => Ok((mount, rest)),
        _ => Err(Error::read(path, "secret path must have the form <mount>/<path>")),
    }
}

fn classify_read_error(path: &str, err: ClientError) -> Error {
    match err {
        ClientError::APIError { code: 404, .. } | ClientError::ResponseDataEmptyError => {
            debug!(path = %path, "No secret stored at path");
            Error::not_found(path)
        }
        other => {
            error!(error = %other, path = %path, "Failed to read secret from Vault");
            Error::read(path, other.to_string())
        }
    }
}

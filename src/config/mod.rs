//! # Configuration Management
//!
//! Resolves the explicit configuration handed to the secret fetcher and the
//! client factory. Each value is taken from the first source that sets it:
//!
//! 1. command line flag
//! 2. config file (`~/.vaultscope/config.toml`)
//! 3. environment variable
//! 4. built-in default

use serde::Deserialize;

use crate::cloud::AwsConfig;
use crate::secrets::{CredentialPolicy, SecretString, VaultConfig, DEFAULT_SECRET_PATH};

/// Environment variable holding the secret path.
pub const SECRET_PATH_ENV: &str = "VAULTSCOPE_SECRET_PATH";
/// Environment variable holding the AWS endpoint override.
pub const ENDPOINT_URL_ENV: &str = "VAULTSCOPE_AWS_ENDPOINT_URL";
/// Environment variable enabling the strict credential policy.
pub const REQUIRE_NON_EMPTY_KEYS_ENV: &str = "VAULTSCOPE_REQUIRE_NON_EMPTY_KEYS";

/// Contents of the TOML config file. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub vault: VaultSection,
    #[serde(default)]
    pub aws: AwsSection,
    #[serde(default)]
    pub credentials: CredentialsSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VaultSection {
    pub address: Option<String>,
    pub token: Option<SecretString>,
    pub namespace: Option<String>,
    pub secret_path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AwsSection {
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
    pub force_path_style: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CredentialsSection {
    pub require_non_empty_keys: Option<bool>,
}

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub vault_addr: Option<String>,
    pub secret_path: Option<String>,
    pub region: Option<String>,
}

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub vault: VaultConfig,
    pub secret_path: String,
    pub aws: AwsConfig,
    pub credential_policy: CredentialPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            vault: VaultConfig::default(),
            secret_path: DEFAULT_SECRET_PATH.to_string(),
            aws: AwsConfig::default(),
            credential_policy: CredentialPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Resolve against the process environment.
    pub fn from_env(overrides: &ConfigOverrides, file: &ConfigFile) -> Self {
        Self::resolve(overrides, file, |key| std::env::var(key).ok())
    }

    /// Resolve using `env` to look up environment variables.
    pub fn resolve<E>(overrides: &ConfigOverrides, file: &ConfigFile, env: E) -> Self
    where
        E: Fn(&str) -> Option<String>,
    {
        let env = |key: &str| env(key).filter(|value| !value.is_empty());
        let defaults = Self::default();

        let address = overrides
            .vault_addr
            .clone()
            .or_else(|| file.vault.address.clone())
            .or_else(|| env("VAULT_ADDR"))
            .unwrap_or(defaults.vault.address);

        let token = file.vault.token.clone().or_else(|| env("VAULT_TOKEN").map(SecretString::from));

        let namespace = file.vault.namespace.clone().or_else(|| env("VAULT_NAMESPACE"));

        let secret_path = overrides
            .secret_path
            .clone()
            .or_else(|| file.vault.secret_path.clone())
            .or_else(|| env(SECRET_PATH_ENV))
            .unwrap_or(defaults.secret_path);

        let region = overrides
            .region
            .clone()
            .or_else(|| file.aws.region.clone())
            .or_else(|| env("AWS_REGION"));

        let endpoint_url = file.aws.endpoint_url.clone().or_else(|| env(ENDPOINT_URL_ENV));

        let require_non_empty = file
            .credentials
            .require_non_empty_keys
            .or_else(|| env(REQUIRE_NON_EMPTY_KEYS_ENV).map(|v| parse_bool(&v)))
            .unwrap_or(false);

        Self {
            vault: VaultConfig { address, token, namespace },
            secret_path,
            aws: AwsConfig {
                region,
                endpoint_url,
                force_path_style: file.aws.force_path_style.unwrap_or(false),
            },
            credential_policy: if require_non_empty {
                CredentialPolicy::RequireNonEmpty
            } else {
                CredentialPolicy::Permissive
            },
        }
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

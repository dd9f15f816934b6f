//! Credential acquisition from a secret store.
//!
//! AWS access keys are never read from local files or the environment. They
//! are fetched from Vault on every action and handed to the AWS SDK through a
//! credentials provider:
//!
//! ```text
//! SecretFetcher ──▶ CredentialExtractor ──▶ VaultCredentialsProvider ──▶ ClientFactory
//!  (raw payload)     (CredentialMaterial)     (ProvideCredentials)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use vaultscope::secrets::{CredentialPipeline, VaultConfig, VaultSecretFetcher};
//!
//! let fetcher = VaultSecretFetcher::new(&VaultConfig::default())?;
//! let pipeline = CredentialPipeline::new(fetcher, "secret/data/aws");
//! let provider = pipeline.acquire().await?;
//! ```
//!
//! # Security Considerations
//!
//! - Secret access keys are held in [`SecretString`] and zeroed on drop
//! - Secret values are never logged; only access key ids appear in logs
//! - Nothing is cached between actions

pub mod client;
pub mod extractor;
pub mod pipeline;
pub mod provider;
pub mod types;
pub mod vault;

pub use client::{SecretFetcher, SecretPayload, DEFAULT_SECRET_PATH};
pub use extractor::{CredentialExtractor, CredentialMaterial, CredentialPolicy};
pub use pipeline::CredentialPipeline;
pub use provider::VaultCredentialsProvider;
pub use types::SecretString;
pub use vault::{VaultConfig, VaultSecretFetcher};

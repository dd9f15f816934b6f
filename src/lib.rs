//! # vaultscope
//!
//! Interactive inspection of EC2 instances and S3 buckets. AWS access keys are
//! never read from local files or the environment: on every action they are
//! fetched from HashiCorp Vault and injected into the AWS SDK through a
//! credentials provider.
//!
//! ## Architecture
//!
//! ```text
//! SecretFetcher → CredentialExtractor → VaultCredentialsProvider → ClientFactory → ResourceLister
//!   (Vault read)     (decode creds)         (ProvideCredentials)      (EC2 / S3)      (list + render)
//! ```
//!
//! Each step either succeeds or aborts the current action with an [`Error`];
//! the interactive menu reports the error and carries on.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use vaultscope::cloud::{ClientFactory, ResourceLister, ServiceKind};
//! use vaultscope::config::AppConfig;
//! use vaultscope::secrets::{CredentialPipeline, VaultSecretFetcher};
//!
//! # async fn run() -> vaultscope::Result<()> {
//! let config = AppConfig::default();
//! let fetcher = VaultSecretFetcher::new(&config.vault)?;
//! let provider = CredentialPipeline::new(fetcher, config.secret_path.clone()).acquire().await?;
//!
//! let client = ClientFactory::new(config.aws.clone()).build(provider, ServiceKind::S3).await?;
//! let inventory = ResourceLister.list(&client).await?;
//! println!("{} buckets", inventory.len());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod cloud;
pub mod config;
pub mod errors;
pub mod observability;
pub mod secrets;

// Re-export commonly used types and traits
pub use config::AppConfig;
pub use errors::{Error, ErrorKind, Result};

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name from Cargo.toml
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

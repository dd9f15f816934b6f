//! Fetch → extract → provider, as one call.

use tracing::{info, instrument};

use super::client::SecretFetcher;
use super::extractor::{CredentialExtractor, CredentialPolicy};
use super::provider::VaultCredentialsProvider;
use crate::errors::Result;

/// Acquires a fresh AWS credentials provider from a secret store.
///
/// Every [`acquire`](Self::acquire) performs a new read; nothing is cached
/// between calls.
pub struct CredentialPipeline<F> {
    fetcher: F,
    secret_path: String,
    extractor: CredentialExtractor,
}

impl<F: SecretFetcher> CredentialPipeline<F> {
    pub fn new(fetcher: F, secret_path: impl Into<String>) -> Self {
        Self { fetcher, secret_path: secret_path.into(), extractor: CredentialExtractor::default() }
    }

    pub fn with_policy(mut self, policy: CredentialPolicy) -> Self {
        self.extractor = CredentialExtractor::new(policy);
        self
    }

    pub fn secret_path(&self) -> &str {
        &self.secret_path
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Read the secret and adapt it into a credentials provider.
    ///
    /// The first failing step aborts with its error; there are no partial results.
    #[instrument(skip(self), fields(path = %self.secret_path))]
    pub async fn acquire(&self) -> Result<VaultCredentialsProvider> {
        let payload = self.fetcher.fetch(&self.secret_path).await?;
        let material = self.extractor.extract(&payload)?;

        info!(
            access_key_id = %material.access_key_id,
            complete = material.is_complete(),
            "Acquired AWS credentials from secret store"
        );

        Ok(VaultCredentialsProvider::from(material))
    }
}

//! AWS credentials provider backed by material fetched from Vault.

use aws_credential_types::provider::{future, ProvideCredentials};
use aws_credential_types::Credentials;

use super::extractor::CredentialMaterial;
use super::types::SecretString;

/// Provider name reported to the AWS SDK.
pub const PROVIDER_NAME: &str = "Vault";

/// Static credentials provider holding an access key pair read from Vault.
///
/// [`retrieve`](Self::retrieve) never fails and never does I/O: it hands back
/// whatever it was built with, empty strings included. Bad keys surface as
/// authorization failures from AWS on the first authenticated call.
#[derive(Clone)]
pub struct VaultCredentialsProvider {
    access_key_id: String,
    secret_access_key: SecretString,
}

impl VaultCredentialsProvider {
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<SecretString>,
    ) -> Self {
        Self { access_key_id: access_key_id.into(), secret_access_key: secret_access_key.into() }
    }

    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    /// The credentials this provider was constructed with.
    pub fn retrieve(&self) -> Credentials {
        Credentials::new(
            self.access_key_id.clone(),
            self.secret_access_key.expose_secret().to_string(),
            None,
            None,
            PROVIDER_NAME,
        )
    }
}

impl From<CredentialMaterial> for VaultCredentialsProvider {
    fn from(material: CredentialMaterial) -> Self {
        Self::new(material.access_key_id, material.secret_access_key)
    }
}

impl std::fmt::Debug for VaultCredentialsProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultCredentialsProvider")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &self.secret_access_key)
            .finish()
    }
}

impl ProvideCredentials for VaultCredentialsProvider {
    fn provide_credentials<'a>(&'a self) -> future::ProvideCredentials<'a>
    where
        Self: 'a,
    {
        future::ProvideCredentials::ready(Ok(self.retrieve()))
    }
}

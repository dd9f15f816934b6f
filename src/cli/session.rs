//! One listing action: credentials from Vault, a fresh client, one list call.

use async_trait::async_trait;
use tracing::info;

use crate::cloud::{ClientFactory, Inventory, ResourceLister, ServiceKind};
use crate::config::AppConfig;
use crate::errors::Result;
use crate::secrets::{CredentialPipeline, VaultSecretFetcher};

/// Something the menu can run for a selected service.
#[async_trait]
pub trait InventoryAction: Send + Sync {
    async fn inventory(&self, kind: ServiceKind) -> Result<Inventory>;
}

/// Runs actions against Vault and AWS using the resolved configuration.
///
/// Nothing is kept between actions: every call builds its own Vault client,
/// reads the secret again and builds a new AWS client.
#[derive(Debug, Clone)]
pub struct Session {
    config: AppConfig,
    factory: ClientFactory,
    lister: ResourceLister,
}

impl Session {
    pub fn new(config: AppConfig) -> Self {
        let factory = ClientFactory::new(config.aws.clone());
        Self { config, factory, lister: ResourceLister }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

#[async_trait]
impl InventoryAction for Session {
    async fn inventory(&self, kind: ServiceKind) -> Result<Inventory> {
        info!(service = %kind, secret_path = %self.config.secret_path, "Starting inventory action");

        let fetcher = VaultSecretFetcher::new(&self.config.vault)?;
        let pipeline = CredentialPipeline::new(fetcher, self.config.secret_path.clone())
            .with_policy(self.config.credential_policy);

        let provider = pipeline.acquire().await?;
        let client = self.factory.build(provider, kind).await?;

        self.lister.list(&client).await
    }
}

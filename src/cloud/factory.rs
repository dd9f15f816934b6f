//! Construction of AWS service clients with an injected credentials provider.

use aws_config::meta::region::{future, ProvideRegion};
use aws_config::{BehaviorVersion, Region, SdkConfig};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

use super::{CloudClient, ServiceKind};
use crate::errors::{Error, Result};
use crate::secrets::VaultCredentialsProvider;

/// Regional and network settings for AWS clients.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AwsConfig {
    /// AWS region; falls back to the SDK default chain when unset
    pub region: Option<String>,

    /// Endpoint override (e.g. a LocalStack URL)
    pub endpoint_url: Option<String>,

    /// Use path-style S3 addressing, needed by most S3-compatible endpoints
    pub force_path_style: bool,
}

/// Region source consulted when [`AwsConfig::region`] is unset.
#[derive(Clone)]
struct RegionFallback(Arc<dyn ProvideRegion + Send + Sync>);

impl fmt::Debug for RegionFallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RegionFallback")
    }
}

impl ProvideRegion for RegionFallback {
    fn region(&self) -> future::ProvideRegion<'_> {
        self.0.region()
    }
}

/// Builds EC2 and S3 clients that authenticate with a [`VaultCredentialsProvider`].
#[derive(Debug, Clone, Default)]
pub struct ClientFactory {
    config: AwsConfig,
    region_fallback: Option<RegionFallback>,
}

impl ClientFactory {
    pub fn new(config: AwsConfig) -> Self {
        Self { config, region_fallback: None }
    }

    /// Replace the SDK default region chain (env, profile, IMDS) with `provider`.
    ///
    /// An explicit [`AwsConfig::region`] still takes precedence.
    pub fn with_region_fallback(mut self, provider: impl ProvideRegion + 'static) -> Self {
        self.region_fallback = Some(RegionFallback(Arc::new(provider)));
        self
    }

    pub fn config(&self) -> &AwsConfig {
        &self.config
    }

    /// Load shared AWS configuration with `provider` as the credentials source.
    ///
    /// # Errors
    ///
    /// - [`Error::ConfigLoad`] if the endpoint override is not a valid URL or
    ///   no region can be resolved
    pub async fn load_sdk_config(&self, provider: VaultCredentialsProvider) -> Result<SdkConfig> {
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).credentials_provider(provider);

        if let Some(ref region) = self.config.region {
            loader = loader.region(Region::new(region.clone()));
        } else if let Some(ref fallback) = self.region_fallback {
            loader = loader.region(fallback.clone());
        }

        if let Some(ref endpoint) = self.config.endpoint_url {
            url::Url::parse(endpoint).map_err(|e| {
                Error::config_load(format!("invalid endpoint URL '{}': {}", endpoint, e))
            })?;
            loader = loader.endpoint_url(endpoint.clone());
        }

        let sdk_config = loader.load().await;

        let Some(region) = sdk_config.region() else {
            return Err(Error::config_load(
                "no AWS region configured (use --region, [aws] region or AWS_REGION)",
            ));
        };
        debug!(region = %region, endpoint = ?self.config.endpoint_url, "Loaded AWS configuration");

        Ok(sdk_config)
    }

    /// Build a client for `kind` authenticated by `provider`.
    pub async fn build(
        &self,
        provider: VaultCredentialsProvider,
        kind: ServiceKind,
    ) -> Result<CloudClient> {
        let sdk_config = self.load_sdk_config(provider).await?;

        let client = match kind {
            ServiceKind::Ec2 => CloudClient::Ec2(aws_sdk_ec2::Client::new(&sdk_config)),
            ServiceKind::S3 => {
                let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
                    .force_path_style(self.config.force_path_style)
                    .build();
                CloudClient::S3(aws_sdk_s3::Client::from_conf(s3_config))
            }
        };

        info!(service = %kind, "Built AWS client");
        Ok(client)
    }
}

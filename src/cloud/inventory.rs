//! Read-only listing of EC2 instances and S3 buckets.

use aws_sdk_ec2::types::Reservation;
use aws_sdk_s3::types::Bucket;
use serde::Serialize;
use tracing::{error, info};

use super::{CloudClient, ServiceKind};
use crate::errors::{Error, Result};

/// One EC2 instance as shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstanceSummary {
    pub instance_id: String,
    pub state: String,
    pub instance_type: String,
}

/// One S3 bucket as shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BucketSummary {
    pub name: String,
}

/// Result of a listing call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Inventory {
    Instances(Vec<InstanceSummary>),
    Buckets(Vec<BucketSummary>),
}

impl Inventory {
    pub fn kind(&self) -> ServiceKind {
        match self {
            Inventory::Instances(_) => ServiceKind::Ec2,
            Inventory::Buckets(_) => ServiceKind::S3,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Inventory::Instances(items) => items.len(),
            Inventory::Buckets(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Runs the listing call that matches a [`CloudClient`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ResourceLister;

impl ResourceLister {
    pub async fn list(&self, client: &CloudClient) -> Result<Inventory> {
        let inventory = match client {
            CloudClient::Ec2(ec2) => Inventory::Instances(self.describe_instances(ec2).await?),
            CloudClient::S3(s3) => Inventory::Buckets(self.list_buckets(s3).await?),
        };

        info!(service = %inventory.kind(), count = inventory.len(), "Listed AWS resources");
        Ok(inventory)
    }

    /// All instances across every reservation returned by `DescribeInstances`.
    pub async fn describe_instances(
        &self,
        client: &aws_sdk_ec2::Client,
    ) -> Result<Vec<InstanceSummary>> {
        let output = client.describe_instances().send().await.map_err(|e| {
            let message = aws_sdk_ec2::error::DisplayErrorContext(&e).to_string();
            error!(error = %message, "DescribeInstances failed");
            Error::cloud("DescribeInstances", message)
        })?;

        Ok(summarize_reservations(output.reservations()))
    }

    pub async fn list_buckets(&self, client: &aws_sdk_s3::Client) -> Result<Vec<BucketSummary>> {
        let output = client.list_buckets().send().await.map_err(|e| {
            let message = aws_sdk_s3::error::DisplayErrorContext(&e).to_string();
            error!(error = %message, "ListBuckets failed");
            Error::cloud("ListBuckets", message)
        })?;

        Ok(summarize_buckets(output.buckets()))
    }
}

pub fn summarize_reservations(reservations: &[Reservation]) -> Vec<InstanceSummary> {
    reservations
        .iter()
        .flat_map(|reservation| reservation.instances())
        .map(|instance| InstanceSummary {
            instance_id: instance.instance_id().unwrap_or_default().to_string(),
            state: instance
                .state()
                .and_then(|state| state.name())
                .map(|name| name.as_str())
                .unwrap_or("unknown")
                .to_string(),
            instance_type: instance
                .instance_type()
                .map(|t| t.as_str())
                .unwrap_or("unknown")
                .to_string(),
        })
        .collect()
}

pub fn summarize_buckets(buckets: &[Bucket]) -> Vec<BucketSummary> {
    buckets
        .iter()
        .map(|bucket| BucketSummary { name: bucket.name().unwrap_or_default().to_string() })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_ec2::types::{Instance, InstanceState, InstanceStateName, InstanceType};

    fn instance(id: &str, state: InstanceStateName, instance_type: InstanceType) -> Instance {
        Instance::builder()
            .instance_id(id)
            .state(InstanceState::builder().name(state).build())
            .instance_type(instance_type)
            .build()
    }

    #[test]
    fn test_summarize_reservations_flattens_instances() {
        let reservations = vec![
            Reservation::builder()
                .instances(instance("i-0001", InstanceStateName::Running, InstanceType::T3Micro))
                .instances(instance("i-0002", InstanceStateName::Stopped, InstanceType::M5Large))
                .build(),
            Reservation::builder()
                .instances(instance("i-0003", InstanceStateName::Pending, InstanceType::T3Micro))
                .build(),
        ];

        let summaries = summarize_reservations(&reservations);

        assert_eq!(summaries.len(), 3);
        assert_eq!(
            summaries[0],
            InstanceSummary {
                instance_id: "i-0001".to_string(),
                state: "running".to_string(),
                instance_type: "t3.micro".to_string(),
            }
        );
        assert_eq!(summaries[1].state, "stopped");
        assert_eq!(summaries[2].instance_id, "i-0003");
    }

    #[test]
    fn test_summarize_reservations_missing_fields() {
        let reservations =
            vec![Reservation::builder().instances(Instance::builder().build()).build()];

        let summaries = summarize_reservations(&reservations);
        assert_eq!(summaries[0].instance_id, "");
        assert_eq!(summaries[0].state, "unknown");
        assert_eq!(summaries[0].instance_type, "unknown");
    }

    #[test]
    fn test_summarize_buckets() {
        let buckets =
            vec![Bucket::builder().name("logs").build(), Bucket::builder().name("assets").build()];

        let names: Vec<String> = summarize_buckets(&buckets).into_iter().map(|b| b.name).collect();
        assert_eq!(names, vec!["logs", "assets"]);
    }

    #[test]
    fn test_inventory_len_and_kind() {
        let inventory = Inventory::Buckets(vec![BucketSummary { name: "logs".to_string() }]);
        assert_eq!(inventory.kind(), ServiceKind::S3);
        assert_eq!(inventory.len(), 1);
        assert!(Inventory::Instances(vec![]).is_empty());
    }
}

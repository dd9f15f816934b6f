//! AWS clients built on credentials acquired from Vault.
//!
//! [`ClientFactory`] turns a [`VaultCredentialsProvider`](crate::secrets::VaultCredentialsProvider)
//! into an EC2 or S3 client; [`ResourceLister`] runs the read-only listing calls
//! on that client.

pub mod factory;
pub mod inventory;

use std::fmt;

pub use factory::{AwsConfig, ClientFactory};
pub use inventory::{BucketSummary, InstanceSummary, Inventory, ResourceLister};

/// Which AWS service a client is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    Ec2,
    S3,
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceKind::Ec2 => f.write_str("EC2"),
            ServiceKind::S3 => f.write_str("S3"),
        }
    }
}

/// A service client ready for listing calls.
#[derive(Debug, Clone)]
pub enum CloudClient {
    Ec2(aws_sdk_ec2::Client),
    S3(aws_sdk_s3::Client),
}

impl CloudClient {
    pub fn kind(&self) -> ServiceKind {
        match self {
            CloudClient::Ec2(_) => ServiceKind::Ec2,
            CloudClient::S3(_) => ServiceKind::S3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_kind_display() {
        assert_eq!(ServiceKind::Ec2.to_string(), "EC2");
        assert_eq!(ServiceKind::S3.to_string(), "S3");
    }
}

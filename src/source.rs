//! Running-instance sources.
//!
//! A source yields the running instances visible under one region and
//! credential scope. The `running` filter is applied here, server-side;
//! the classifier never sees stopped or pending instances.

use async_trait::async_trait;
use aws_sdk_ec2 as ec2;
use aws_sdk_ec2::types::Filter;
use thiserror::Error;
use tracing::debug;

use crate::config::DetectorConfig;
use crate::tags::{Tag, TagSet};
use crate::types::InstanceRecord;

/// Errors from the instance source. All of them are fatal for the run:
/// authentication, authorization, network, and malformed-response failures
/// surface here and are never retried.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("describe-instances failed in {region}")]
    Describe {
        region: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

#[async_trait]
pub trait InstanceSource: Send + Sync {
    fn name(&self) -> &'static str;

    /// Fetch every running instance, in the order the backend reports them.
    async fn list_running(&self) -> Result<Vec<InstanceRecord>, SourceError>;
}

/// The real source, backed by the EC2 `DescribeInstances` API.
pub struct Ec2InstanceSource {
    config: DetectorConfig,
}

impl Ec2InstanceSource {
    pub fn new(config: DetectorConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl InstanceSource for Ec2InstanceSource {
    fn name(&self) -> &'static str {
        "ec2"
    }

    async fn list_running(&self) -> Result<Vec<InstanceRecord>, SourceError> {
        let conf = self.config.sdk_config().await;
        let client = ec2::Client::new(&conf);

        let mut records = Vec::new();
        let mut token: Option<String> = None;
        loop {
            let mut req = client.describe_instances().filters(
                Filter::builder()
                    .name("instance-state-name")
                    .values("running")
                    .build(),
            );
            if let Some(t) = token.as_deref() {
                req = req.next_token(t);
            }
            let resp = req.send().await.map_err(|e| SourceError::Describe {
                region: self.config.region.clone(),
                source: Box::new(e),
            })?;

            for reservation in resp.reservations() {
                for inst in reservation.instances() {
                    records.push(record_from_instance(inst));
                }
            }
            debug!(region = %self.config.region, total = records.len(), "describe-instances page");

            token = resp.next_token().map(|s| s.to_string());
            if token.is_none() {
                break;
            }
        }

        Ok(records)
    }
}

fn record_from_instance(inst: &ec2::types::Instance) -> InstanceRecord {
    let tags = TagSet::new(
        inst.tags()
            .iter()
            .map(|t| Tag {
                key: t.key().map(str::to_string),
                value: t.value().map(str::to_string),
            })
            .collect(),
    );

    InstanceRecord {
        id: inst.instance_id().unwrap_or_default().to_string(),
        instance_type: inst
            .instance_type()
            .map(|t| t.as_str().to_string())
            .unwrap_or_default(),
        availability_zone: inst
            .placement()
            .and_then(|p| p.availability_zone())
            .map(str::to_string),
        state: inst
            .state()
            .and_then(|s| s.name())
            .map(|n| n.as_str().to_string())
            .unwrap_or_default(),
        tags,
    }
}

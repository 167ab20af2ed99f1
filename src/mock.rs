//! Fixed sample records for fast local runs without AWS credentials.

use async_trait::async_trait;

use crate::source::{InstanceSource, SourceError};
use crate::tags::TagSet;
use crate::types::InstanceRecord;

pub struct MockInstanceSource;

#[async_trait]
impl InstanceSource for MockInstanceSource {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn list_running(&self) -> Result<Vec<InstanceRecord>, SourceError> {
        Ok(sample_records())
    }
}

/// One instance per policy branch: a prod exclusion, a do_not_stop
/// exclusion, an Environment-tag exclusion, and two candidates.
pub fn sample_records() -> Vec<InstanceRecord> {
    vec![
        InstanceRecord {
            id: "i-0aa11bb22cc33dd44".into(),
            instance_type: "m5.large".into(),
            availability_zone: Some("us-west-2a".into()),
            state: "running".into(),
            tags: TagSet::from_pairs([("env", "prod"), ("Name", "api-server")]),
        },
        InstanceRecord {
            id: "i-0ee55ff66aa77bb88".into(),
            instance_type: "c5.xlarge".into(),
            availability_zone: Some("us-west-2b".into()),
            state: "running".into(),
            tags: TagSet::from_pairs([("do_not_stop", "true"), ("Name", "batch-worker")]),
        },
        InstanceRecord {
            id: "i-0cc99dd00ee11ff22".into(),
            instance_type: "r5.large".into(),
            availability_zone: Some("us-west-2c".into()),
            state: "running".into(),
            tags: TagSet::from_pairs([("Environment", "Production"), ("Name", "db-replica")]),
        },
        InstanceRecord {
            id: "i-0123456789abcdef0".into(),
            instance_type: "t3.micro".into(),
            availability_zone: Some("us-west-2a".into()),
            state: "running".into(),
            tags: TagSet::from_pairs([("env", "dev"), ("Name", "scratch-box")]),
        },
        InstanceRecord {
            id: "i-0fedcba9876543210".into(),
            instance_type: "t3.small".into(),
            availability_zone: None,
            state: "running".into(),
            tags: TagSet::default(),
        },
    ]
}

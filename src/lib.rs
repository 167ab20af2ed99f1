//! Tag-driven detector for EC2 instances that may be safe to stop outside
//! business hours.
//!
//! The decision logic lives in [`classifier`]; everything else is plumbing
//! around the EC2 `DescribeInstances` API. The tool is read-only: it never
//! stops, starts, or otherwise mutates an instance.

pub mod classifier;
pub mod config;
pub mod mock;
pub mod report;
pub mod source;
pub mod tags;
pub mod types;

pub use classifier::{classify, Verdict};
pub use config::DetectorConfig;
pub use source::{Ec2InstanceSource, InstanceSource, SourceError};
pub use types::{CandidateSummary, InstanceRecord};

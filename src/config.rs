use aws_config::{BehaviorVersion, SdkConfig};
use aws_types::region::Region;

/// Explicit per-run configuration for the instance source. Replaces any
/// ambient session state: region and profile travel with this struct, not
/// through process-wide globals.
#[derive(Debug, Clone)]
pub struct DetectorConfig {
    pub region: String,
    /// Named credential profile; default credential resolution (env vars,
    /// shared config, instance role) applies when absent.
    pub profile: Option<String>,
}

impl DetectorConfig {
    pub fn new(region: impl Into<String>, profile: Option<String>) -> Self {
        Self {
            region: region.into(),
            profile,
        }
    }

    pub async fn sdk_config(&self) -> SdkConfig {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(self.region.clone()));
        if let Some(profile) = &self.profile {
            loader = loader.profile_name(profile.as_str());
        }
        loader.load().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_is_optional() {
        let cfg = DetectorConfig::new("us-west-2", None);
        assert_eq!(cfg.region, "us-west-2");
        assert!(cfg.profile.is_none());

        let cfg = DetectorConfig::new("eu-central-1", Some("staging".into()));
        assert_eq!(cfg.profile.as_deref(), Some("staging"));
    }
}

//! Shutdown-candidate classification.
//!
//! The policy is a short ordered rule list; the first matching rule wins
//! and nothing can reverse an exclusion afterwards:
//!
//! 1. tag `env=prod` (exact, case-sensitive) excludes the instance
//! 2. tag `do_not_stop=true` (literal string compare) excludes the instance
//! 3. effective environment = value of `env`, falling back to `Environment`
//!    when `env` is missing or empty
//! 4. effective environment lowercasing to `prod` or `production` excludes
//!    the instance
//! 5. anything else is a candidate
//!
//! Two asymmetries are carried over from the policy as deployed and are
//! pending product-owner review, not fixes:
//! `do_not_stop=True` does NOT match rule 2 (the compare is case-sensitive),
//! and rule 1 tests only the exact string `prod` while rule 4 also catches
//! casing variants and `production`. Rules 1 and 4 must stay separate
//! checks even though they overlap.

use crate::types::{CandidateSummary, InstanceRecord};

/// Outcome of classifying one instance: protected by policy, or a
/// candidate for human review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Excluded,
    Candidate(CandidateSummary),
}

impl Verdict {
    pub fn is_excluded(&self) -> bool {
        matches!(self, Verdict::Excluded)
    }
}

/// Classify one record. Pure function of the record; never fails, always
/// returns exactly one verdict.
pub fn classify(record: &InstanceRecord) -> Verdict {
    let tags = &record.tags;

    if tags.has_exact("env", "prod") {
        return Verdict::Excluded;
    }
    if tags.has_exact("do_not_stop", "true") {
        return Verdict::Excluded;
    }

    let env = match tags.value_of("env") {
        "" => tags.value_of("Environment"),
        v => v,
    };
    if matches!(env.to_lowercase().as_str(), "prod" | "production") {
        return Verdict::Excluded;
    }

    Verdict::Candidate(CandidateSummary {
        id: record.id.clone(),
        instance_type: record.instance_type.clone(),
        availability_zone: record.availability_zone.clone().unwrap_or_default(),
        name: tags.value_of("Name").to_string(),
        // original casing, not the lowercased form used by rule 4
        env: env.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::TagSet;

    fn record(tags: TagSet) -> InstanceRecord {
        InstanceRecord {
            id: "i-0123456789abcdef0".into(),
            instance_type: "t3.micro".into(),
            availability_zone: Some("us-west-2a".into()),
            state: "running".into(),
            tags,
        }
    }

    #[test]
    fn env_prod_is_always_excluded() {
        let r = record(TagSet::from_pairs([("env", "prod"), ("Name", "web1")]));
        assert!(classify(&r).is_excluded());
    }

    #[test]
    fn do_not_stop_true_is_excluded_regardless_of_env() {
        let r = record(TagSet::from_pairs([("do_not_stop", "true")]));
        assert!(classify(&r).is_excluded());

        let r = record(TagSet::from_pairs([("env", "dev"), ("do_not_stop", "true")]));
        assert!(classify(&r).is_excluded());
    }

    #[test]
    fn capitalized_do_not_stop_does_not_match() {
        // Documents the case-sensitivity gap: only the literal "true"
        // engages the do_not_stop rule.
        let r = record(TagSet::from_pairs([("do_not_stop", "True")]));
        match classify(&r) {
            Verdict::Candidate(s) => assert_eq!(s.env, ""),
            Verdict::Excluded => panic!("do_not_stop=True must not exclude"),
        }
    }

    #[test]
    fn env_casing_variants_are_excluded() {
        let r = record(TagSet::from_pairs([("env", "PROD")]));
        assert!(classify(&r).is_excluded());

        let r = record(TagSet::from_pairs([("Environment", "Production")]));
        assert!(classify(&r).is_excluded());
    }

    #[test]
    fn staging_instance_yields_full_summary() {
        let r = record(TagSet::from_pairs([("env", "staging"), ("Name", "worker-1")]));
        assert_eq!(
            classify(&r),
            Verdict::Candidate(CandidateSummary {
                id: "i-0123456789abcdef0".into(),
                instance_type: "t3.micro".into(),
                availability_zone: "us-west-2a".into(),
                name: "worker-1".into(),
                env: "staging".into(),
            })
        );
    }

    #[test]
    fn untagged_instance_is_a_candidate_with_empty_fields() {
        let r = record(TagSet::default());
        match classify(&r) {
            Verdict::Candidate(s) => {
                assert_eq!(s.name, "");
                assert_eq!(s.env, "");
            }
            Verdict::Excluded => panic!("untagged instance must be a candidate"),
        }
    }

    #[test]
    fn summary_env_keeps_original_casing() {
        let r = record(TagSet::from_pairs([("env", "Staging")]));
        match classify(&r) {
            Verdict::Candidate(s) => assert_eq!(s.env, "Staging"),
            Verdict::Excluded => panic!("Staging is not a production environment"),
        }
    }

    #[test]
    fn empty_env_tag_falls_back_to_environment() {
        let r = record(TagSet::from_pairs([("env", ""), ("Environment", "dev")]));
        match classify(&r) {
            Verdict::Candidate(s) => assert_eq!(s.env, "dev"),
            Verdict::Excluded => panic!("dev instance must be a candidate"),
        }

        let r = record(TagSet::from_pairs([("env", ""), ("Environment", "production")]));
        assert!(classify(&r).is_excluded());
    }

    #[test]
    fn record_without_id_is_still_classified() {
        let mut r = record(TagSet::from_pairs([("env", "dev")]));
        r.id = String::new();
        match classify(&r) {
            Verdict::Candidate(s) => assert_eq!(s.id, ""),
            Verdict::Excluded => panic!("dev instance must be a candidate"),
        }
    }

    #[test]
    fn missing_availability_zone_becomes_empty_string() {
        let mut r = record(TagSet::default());
        r.availability_zone = None;
        match classify(&r) {
            Verdict::Candidate(s) => assert_eq!(s.availability_zone, ""),
            Verdict::Excluded => panic!("expected candidate"),
        }
    }

    #[test]
    fn classify_is_idempotent() {
        let r = record(TagSet::from_pairs([("env", "dev"), ("Name", "api")]));
        assert_eq!(classify(&r), classify(&r));
    }
}

//! Candidate collection and report rendering.

use crate::classifier::{classify, Verdict};
use crate::types::{CandidateSummary, InstanceRecord};

/// Run every record through the classifier and keep the candidates, in
/// source emission order.
pub fn candidates(records: &[InstanceRecord]) -> Vec<CandidateSummary> {
    records
        .iter()
        .filter_map(|r| match classify(r) {
            Verdict::Candidate(summary) => Some(summary),
            Verdict::Excluded => None,
        })
        .collect()
}

/// Render the human-readable report. Missing fields print as empty
/// strings.
pub fn render(candidates: &[CandidateSummary]) -> String {
    if candidates.is_empty() {
        return "No candidates found.\n".to_string();
    }

    let mut out = String::from("Candidates (review before stopping):\n");
    for c in candidates {
        out.push_str(&format!(
            "- {}  type={}  az={}  env={}  name={}\n",
            c.id, c.instance_type, c.availability_zone, c.env, c.name
        ));
    }
    out
}

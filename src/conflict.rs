//! Double-booking auditor.
//!
//! An independent check over any list of placed cases: typically an
//! engine output, but also hand-edited or imported schedules. Walks the
//! list once per resource namespace and reports every pair of cases
//! whose core intervals overlap on the same surgeon or equipment set.
//! Turnover is a lane concern and is not audited here; neither is lane
//! double-booking, which the engine rules out by construction.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::warn;

use crate::ledger::ResourceKind;
use crate::models::ScheduledCase;

/// One double-booked resource pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResourceConflict {
    /// Which namespace the resource lives in.
    pub kind: ResourceKind,
    /// The double-booked resource name.
    pub resource: String,
    /// The case encountered first.
    pub first_case: String,
    /// The overlapping case encountered later.
    pub second_case: String,
}

impl fmt::Display for ResourceConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} double-booked: {} overlaps {}",
            self.kind.label(),
            self.resource,
            self.first_case,
            self.second_case
        )
    }
}

/// Finds every double-booked surgeon and equipment pair.
///
/// Cases are compared on core intervals (no turnover), half-open, so
/// touching cases do not conflict. Each offending pair is reported
/// once, in input order. An engine-produced schedule yields no
/// conflicts; a non-empty result means the input was edited or built
/// outside the engine.
pub fn find_conflicts(cases: &[ScheduledCase]) -> Vec<ResourceConflict> {
    let mut issues = Vec::new();
    let mut seen: HashMap<(ResourceKind, &str), Vec<&ScheduledCase>> = HashMap::new();

    for case in cases {
        let identities = [
            (ResourceKind::Surgeon, case.surgeon.as_str()),
            (ResourceKind::Equipment, case.equipment.as_str()),
        ];
        for (kind, name) in identities {
            let earlier = seen.entry((kind, name)).or_default();
            for prev in earlier.iter() {
                if prev.slot().overlaps(&case.slot()) {
                    issues.push(ResourceConflict {
                        kind,
                        resource: name.to_string(),
                        first_case: prev.id.clone(),
                        second_case: case.id.clone(),
                    });
                }
            }
            earlier.push(case);
        }
    }

    if !issues.is_empty() {
        warn!("{} resource double-bookings detected", issues.len());
    }
    issues
}

/// Conflicts rendered as display strings, for logs and dashboards.
pub fn conflict_messages(cases: &[ScheduledCase]) -> Vec<String> {
    find_conflicts(cases).iter().map(|c| c.to_string()).collect()
}

use super::summary::Summary;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationView {
    pub id: String,
    pub assigned_discount: i64,
    pub justification: String,
}

/// Output document: one view per agent in input order, plus the summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationReport {
    pub allocations: Vec<AllocationView>,
    pub summary: Summary,
}

impl AllocationReport {
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

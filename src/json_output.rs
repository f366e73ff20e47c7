//! JSON output format for attendance results

use crate::aggregate::AttendanceSummary;
use crate::pipeline::Analysis;
use serde::{Deserialize, Serialize};

/// Complete JSON document for one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonReport {
    /// Output format version
    pub version: String,
    /// Threshold used for classification
    pub threshold: f64,
    /// Number of days per student
    pub time_units: usize,
    /// One entry per student, input order
    pub students: Vec<AttendanceSummary>,
    /// Names of students strictly below the threshold
    pub below: Vec<String>,
}

impl JsonReport {
    pub fn from_analysis(analysis: &Analysis) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            threshold: analysis.threshold,
            time_units: analysis.time_units,
            students: analysis.summaries.clone(),
            below: analysis
                .partition
                .below
                .iter()
                .map(|s| s.entity_name.clone())
                .collect(),
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

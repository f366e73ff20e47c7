//! CSV output format for attendance summaries
//!
//! One row per student, for spreadsheet analysis.

use crate::aggregate::{format_percentage, AttendanceSummary};
use anyhow::{Context, Result};

const HEADER: [&str; 4] = ["student_name", "total_present", "percentage", "meets_threshold"];

/// Render summaries as CSV text, header first
pub fn to_csv(summaries: &[AttendanceSummary]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADER)?;

    for summary in summaries {
        let total = summary.total_present.to_string();
        let percentage = format_percentage(summary.percentage);
        let passed = summary.meets_threshold.to_string();
        writer.write_record([
            summary.entity_name.as_str(),
            total.as_str(),
            percentage.as_str(),
            passed.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e))?;
    String::from_utf8(bytes).context("CSV output is not valid UTF-8")
}

//! Attendance aggregation and threshold classification
//!
//! Turns a presence matrix into per-entity totals and percentages, then
//! splits the result around a pass threshold. Nothing here does I/O.

use crate::error::{AttendanceError, Result};
use crate::record::PresenceRecord;
use serde::{Deserialize, Serialize};

/// Default minimum attendance percentage
pub const DEFAULT_THRESHOLD: f64 = 75.0;

/// Derived attendance figures for one entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    pub entity_name: String,
    /// Count of time-units marked present (`0..=T`)
    pub total_present: usize,
    /// `100 * total_present / T`, always within `0.0..=100.0`
    pub percentage: f64,
    /// `percentage >= threshold` (inclusive)
    pub meets_threshold: bool,
}

/// Summaries split around the threshold, each side in input order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    /// Strictly below the threshold
    pub below: Vec<AttendanceSummary>,
    /// At or above the threshold
    pub clear: Vec<AttendanceSummary>,
}

impl Partition {
    pub fn all_clear(&self) -> bool {
        self.below.is_empty()
    }
}

/// Check that every record has the same, non-zero number of time-units
///
/// Returns that shared length `T`.
fn check_shape(records: &[PresenceRecord]) -> Result<usize> {
    let first = records
        .first()
        .ok_or_else(|| AttendanceError::EmptyInput("no entities to summarize".to_string()))?;

    let expected = first.time_units();
    if expected == 0 {
        return Err(AttendanceError::EmptyInput(format!(
            "'{}' has zero time-units",
            first.entity_name
        )));
    }

    if let Some(odd) = records.iter().find(|r| r.time_units() != expected) {
        return Err(AttendanceError::ShapeMismatch {
            entity: odd.entity_name.clone(),
            expected,
            actual: odd.time_units(),
        });
    }

    Ok(expected)
}

/// Compute totals, percentages and pass flags for every record
///
/// Output order matches input order. The whole input is shape-checked before
/// any summary is built, so a failure never yields partial results.
///
/// # Errors
///
/// * [`AttendanceError::EmptyInput`] if `records` is empty or `T = 0`
/// * [`AttendanceError::ShapeMismatch`] if presence lengths differ
pub fn summarize(records: &[PresenceRecord], threshold: f64) -> Result<Vec<AttendanceSummary>> {
    let time_units = check_shape(records)?;

    let summaries = records
        .iter()
        .map(|record| {
            let total_present = record.present_count();
            let percentage = 100.0 * total_present as f64 / time_units as f64;
            AttendanceSummary {
                entity_name: record.entity_name.clone(),
                total_present,
                percentage,
                meets_threshold: percentage >= threshold,
            }
        })
        .collect();

    Ok(summaries)
}

/// Split summaries into below-threshold and clear groups
///
/// A percentage equal to the threshold is clear. Relative order is kept
/// within each group and every summary lands in exactly one of them.
pub fn partition_by_threshold(summaries: &[AttendanceSummary], threshold: f64) -> Partition {
    let (below, clear) = summaries
        .iter()
        .cloned()
        .partition(|s| s.percentage < threshold);

    Partition { below, clear }
}

/// Format a percentage the way the console report prints it
///
/// Whole numbers keep one decimal (`60.0`); anything else uses the shortest
/// representation that round-trips (`33.333333333333336`).
pub fn format_percentage(percentage: f64) -> String {
    if percentage.fract() == 0.0 {
        format!("{:.1}", percentage)
    } else {
        format!("{}", percentage)
    }
}

/// Alert text for a below-threshold entity
pub fn warning_message(summary: &AttendanceSummary) -> String {
    format!(
        "{} has only {}% attendance.",
        summary.entity_name,
        format_percentage(summary.percentage)
    )
}

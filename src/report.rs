//! Console report: records table and short-attendance alerts

use crate::aggregate::{format_percentage, warning_message};
use crate::pipeline::Analysis;

const RULE: &str = "------------------------------------------------";

const NAME_HEADER: &str = "Student_Name";
const TOTAL_HEADER: &str = "Total_Present";
const PERCENT_HEADER: &str = "Percentage";

/// Human-readable text report for one analysis
#[derive(Debug)]
pub struct TextReport<'a> {
    analysis: &'a Analysis,
    show_days: bool,
}

impl<'a> TextReport<'a> {
    pub fn new(analysis: &'a Analysis, show_days: bool) -> Self {
        Self {
            analysis,
            show_days,
        }
    }

    /// Banner printed at the top of every text report
    pub fn banner() -> String {
        format!("{RULE}\n   ATTENDANCE ANALYSIS SYSTEM\n{RULE}\n")
    }

    fn day_headers(&self) -> Vec<String> {
        if !self.show_days {
            return Vec::new();
        }
        (1..=self.analysis.time_units)
            .map(|day| format!("Day_{}", day))
            .collect()
    }

    /// One row per student in input order
    pub fn render_table(&self) -> String {
        let name_width = self
            .analysis
            .summaries
            .iter()
            .map(|s| s.entity_name.chars().count())
            .chain(std::iter::once(NAME_HEADER.len()))
            .max()
            .unwrap_or(NAME_HEADER.len());
        let day_headers = self.day_headers();

        let mut out = String::new();

        let mut header = format!("{:<name_width$}", NAME_HEADER);
        for day in &day_headers {
            header.push_str(&format!("  {}", day));
        }
        header.push_str(&format!("  {}  {}", TOTAL_HEADER, PERCENT_HEADER));
        out.push_str(header.trim_end());
        out.push('\n');

        for (record, summary) in self.analysis.records.iter().zip(&self.analysis.summaries) {
            let mut row = format!("{:<name_width$}", summary.entity_name);
            for (day, present) in day_headers.iter().zip(&record.presence) {
                row.push_str(&format!("  {:>width$}", u8::from(*present), width = day.len()));
            }
            row.push_str(&format!(
                "  {:>total$}  {:>pct$}",
                summary.total_present,
                format_percentage(summary.percentage),
                total = TOTAL_HEADER.len(),
                pct = PERCENT_HEADER.len(),
            ));
            out.push_str(&row);
            out.push('\n');
        }

        out
    }

    /// Alert block: one warning per below-threshold student, or an all-clear line
    pub fn render_alerts(&self) -> String {
        let partition = &self.analysis.partition;
        let mut out = String::new();

        out.push_str(RULE);
        out.push('\n');
        out.push_str(&format!(
            "SHORT ATTENDANCE ALERT (<{}%):\n",
            self.analysis.threshold
        ));

        if partition.all_clear() {
            out.push_str("All students have good attendance.\n");
        } else {
            for summary in &partition.below {
                out.push_str(&format!("WARNING: {}\n", warning_message(summary)));
            }
        }

        out.push_str(RULE);
        out.push('\n');
        out
    }

    /// Full report: banner, records table, alerts
    pub fn render(&self) -> String {
        let mut out = Self::banner();
        out.push_str("\nAttendance Records:\n");
        out.push_str(&self.render_table());
        out.push('\n');
        out.push_str(&self.render_alerts());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::PresenceRecord;

    fn analysis(threshold: f64) -> Analysis {
        Analysis::from_records(
            vec![
                PresenceRecord::from_flags("Aarav", &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1]),
                PresenceRecord::from_flags("Saanvi", &[1, 0, 1, 0, 1, 1, 0, 1, 1, 0]),
            ],
            threshold,
        )
        .unwrap()
    }

    #[test]
    fn test_table_rows_in_input_order() {
        let analysis = analysis(75.0);
        let table = TextReport::new(&analysis, false).render_table();
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Student_Name  Total_Present  Percentage");
        assert!(lines[1].starts_with("Aarav"));
        assert!(lines[1].ends_with("100.0"));
        assert!(lines[2].starts_with("Saanvi"));
        assert!(lines[2].contains("  6  "));
        assert!(lines[2].ends_with("60.0"));
    }

    #[test]
    fn test_table_columns_align() {
        let analysis = analysis(75.0);
        let table = TextReport::new(&analysis, false).render_table();
        let widths: Vec<usize> = table.lines().map(|l| l.len()).collect();
        assert!(widths.iter().all(|&w| w == widths[0]));
    }

    #[test]
    fn test_table_with_days() {
        let analysis = analysis(75.0);
        let table = TextReport::new(&analysis, true).render_table();
        let lines: Vec<&str> = table.lines().collect();

        assert!(lines[0].contains("Day_1"));
        assert!(lines[0].contains("Day_10"));
        assert!(lines[0].find("Day_10").unwrap() < lines[0].find(TOTAL_HEADER).unwrap());
        assert!(lines[2].starts_with("Saanvi"));
    }

    #[test]
    fn test_alerts_list_below_threshold() {
        let analysis = analysis(75.0);
        let alerts = TextReport::new(&analysis, false).render_alerts();

        assert!(alerts.contains("SHORT ATTENDANCE ALERT (<75%):"));
        assert!(alerts.contains("WARNING: Saanvi has only 60.0% attendance."));
        assert!(!alerts.contains("Aarav"));
        assert!(!alerts.contains("All students have good attendance."));
    }

    #[test]
    fn test_alerts_all_clear() {
        let analysis = analysis(60.0);
        let alerts = TextReport::new(&analysis, false).render_alerts();

        assert!(alerts.contains("SHORT ATTENDANCE ALERT (<60%):"));
        assert!(alerts.contains("All students have good attendance."));
        assert!(!alerts.contains("WARNING"));
    }

    #[test]
    fn test_full_report_sections_in_order() {
        let analysis = analysis(75.0);
        let report = TextReport::new(&analysis, false).render();

        let banner = report.find("ATTENDANCE ANALYSIS SYSTEM").unwrap();
        let records = report.find("Attendance Records:").unwrap();
        let alert = report.find("SHORT ATTENDANCE ALERT").unwrap();
        assert!(banner < records && records < alert);
    }
}

//! SVG bar chart of attendance percentages
//!
//! One bar per student, green at or above the threshold and red below it,
//! with a dashed reference line at the threshold. The y axis is fixed to
//! 0-100 so charts from different runs are comparable.

use crate::aggregate::AttendanceSummary;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

/// Default file name for the rendered chart
pub const DEFAULT_CHART_PATH: &str = "attendance_chart.svg";

pub const PASS_COLOR: &str = "#2e7d32";
pub const FAIL_COLOR: &str = "#c62828";
pub const THRESHOLD_COLOR: &str = "#1565c0";

const WIDTH: f64 = 1000.0;
const HEIGHT: f64 = 600.0;
const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 40.0;
const MARGIN_TOP: f64 = 70.0;
const MARGIN_BOTTOM: f64 = 80.0;
const BAR_FILL: f64 = 0.8;

/// Escape text for inclusion in SVG/HTML markup
pub(crate) fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn push_line(svg: &mut String, line: &str) {
    svg.push_str(line);
    svg.push('\n');
}

/// Bar chart over a set of summaries
#[derive(Debug)]
pub struct BarChart<'a> {
    summaries: &'a [AttendanceSummary],
    threshold: f64,
}

impl<'a> BarChart<'a> {
    pub fn new(summaries: &'a [AttendanceSummary], threshold: f64) -> Self {
        Self {
            summaries,
            threshold,
        }
    }

    fn plot_width() -> f64 {
        WIDTH - MARGIN_LEFT - MARGIN_RIGHT
    }

    fn plot_height() -> f64 {
        HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
    }

    /// Map a percentage onto the y pixel coordinate
    fn y_for(percentage: f64) -> f64 {
        let clamped = percentage.clamp(0.0, 100.0);
        MARGIN_TOP + Self::plot_height() * (1.0 - clamped / 100.0)
    }

    /// Legend text for the threshold line
    pub fn legend_label(&self) -> String {
        format!("Min Requirement ({}%)", self.threshold)
    }

    fn render_axes(&self, svg: &mut String) {
        let left = MARGIN_LEFT;
        let right = MARGIN_LEFT + Self::plot_width();
        let bottom = Self::y_for(0.0);

        // Horizontal grid and y tick labels every 10%
        for tick in (0..=100).step_by(10) {
            let y = Self::y_for(tick as f64);
            push_line(svg, &format!(
                r##"  <line class="grid" x1="{left:.1}" y1="{y:.1}" x2="{right:.1}" y2="{y:.1}" stroke="#b0b0b0" stroke-opacity="0.5"/>"##
            ));
            push_line(svg, &format!(
                r#"  <text class="tick" x="{:.1}" y="{:.1}" text-anchor="end" font-size="12">{}</text>"#,
                left - 8.0,
                y + 4.0,
                tick
            ));
        }

        push_line(svg, &format!(
            r##"  <line class="axis" x1="{left:.1}" y1="{top:.1}" x2="{left:.1}" y2="{bottom:.1}" stroke="#333"/>"##,
            top = MARGIN_TOP
        ));
        push_line(svg, &format!(
            r##"  <line class="axis" x1="{left:.1}" y1="{bottom:.1}" x2="{right:.1}" y2="{bottom:.1}" stroke="#333"/>"##
        ));

        push_line(svg, &format!(
            r#"  <text class="xlabel" x="{:.1}" y="{:.1}" text-anchor="middle" font-size="14">Student Name</text>"#,
            MARGIN_LEFT + Self::plot_width() / 2.0,
            HEIGHT - 20.0
        ));
        let ylabel_y = MARGIN_TOP + Self::plot_height() / 2.0;
        push_line(svg, &format!(
            r#"  <text class="ylabel" x="20" y="{ylabel_y:.1}" text-anchor="middle" font-size="14" transform="rotate(-90 20 {ylabel_y:.1})">Attendance Percentage (%)</text>"#
        ));
    }

    fn render_bars(&self, svg: &mut String) {
        let count = self.summaries.len().max(1) as f64;
        let slot = Self::plot_width() / count;
        let bar_width = slot * BAR_FILL;
        let bottom = Self::y_for(0.0);

        for (i, summary) in self.summaries.iter().enumerate() {
            let x = MARGIN_LEFT + slot * i as f64 + (slot - bar_width) / 2.0;
            let top = Self::y_for(summary.percentage);
            let color = if summary.meets_threshold {
                PASS_COLOR
            } else {
                FAIL_COLOR
            };
            let name = escape_xml(&summary.entity_name);

            push_line(svg, &format!(
                r#"  <rect class="bar" x="{x:.1}" y="{top:.1}" width="{bar_width:.1}" height="{:.1}" fill="{color}"><title>{name}: {}%</title></rect>"#,
                bottom - top,
                summary.percentage
            ));
            push_line(svg, &format!(
                r#"  <text class="name" x="{:.1}" y="{:.1}" text-anchor="middle" font-size="12">{name}</text>"#,
                x + bar_width / 2.0,
                bottom + 18.0
            ));
        }
    }

    fn render_threshold(&self, svg: &mut String) {
        let y = Self::y_for(self.threshold);
        push_line(svg, &format!(
            r#"  <line class="threshold" x1="{:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="{THRESHOLD_COLOR}" stroke-width="2" stroke-dasharray="8,6"/>"#,
            MARGIN_LEFT,
            MARGIN_LEFT + Self::plot_width()
        ));

        // Legend, top-right corner of the plot area
        let lx = WIDTH - MARGIN_RIGHT - 210.0;
        let ly = MARGIN_TOP + 12.0;
        push_line(svg, &format!(
            r##"  <g class="legend"><rect x="{:.1}" y="{:.1}" width="200" height="28" fill="#fff" stroke="#ccc"/><line x1="{:.1}" y1="{ly:.1}" x2="{:.1}" y2="{ly:.1}" stroke="{THRESHOLD_COLOR}" stroke-width="2" stroke-dasharray="8,6"/><text x="{:.1}" y="{:.1}" font-size="12">{}</text></g>"##,
            lx,
            ly - 14.0,
            lx + 8.0,
            lx + 38.0,
            lx + 46.0,
            ly + 4.0,
            escape_xml(&self.legend_label())
        ));
    }

    /// Render the chart as a standalone SVG document
    pub fn to_svg(&self) -> String {
        let mut svg = String::new();

        push_line(&mut svg, &format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}" font-family="sans-serif">"#
        ));
        push_line(&mut svg, r##"  <rect width="100%" height="100%" fill="#fff"/>"##);
        push_line(&mut svg, &format!(
            r#"  <text class="title" x="{:.1}" y="36" text-anchor="middle" font-size="20" font-weight="bold">Student Attendance Analysis</text>"#,
            WIDTH / 2.0
        ));

        self.render_axes(&mut svg);
        self.render_bars(&mut svg);
        self.render_threshold(&mut svg);

        svg.push_str("</svg>\n");
        svg
    }

    /// Write the SVG document to `path`
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_svg())
            .with_context(|| format!("Failed to write chart: {}", path.display()))?;
        info!("Wrote chart for {} students to {}", self.summaries.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(name: &str, pct: f64, threshold: f64) -> AttendanceSummary {
        AttendanceSummary {
            entity_name: name.to_string(),
            total_present: (pct / 10.0) as usize,
            percentage: pct,
            meets_threshold: pct >= threshold,
        }
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("<b>"), "&lt;b&gt;");
        assert_eq!(escape_xml("a&b"), "a&amp;b");
        assert_eq!(escape_xml("'x'"), "&#39;x&#39;");
    }

    #[test]
    fn test_y_axis_fixed_range() {
        assert_eq!(BarChart::y_for(100.0), MARGIN_TOP);
        assert_eq!(BarChart::y_for(0.0), HEIGHT - MARGIN_BOTTOM);
        assert_eq!(BarChart::y_for(150.0), BarChart::y_for(100.0));
    }

    #[test]
    fn test_one_bar_per_student_colored_by_threshold() {
        let summaries = vec![
            summary("Aarav", 100.0, 75.0),
            summary("Saanvi", 60.0, 75.0),
            summary("Vihaan", 75.0, 75.0),
        ];
        let svg = BarChart::new(&summaries, 75.0).to_svg();

        assert_eq!(svg.matches(r#"class="bar""#).count(), 3);
        assert_eq!(svg.matches(&format!(r#"fill="{PASS_COLOR}""#)).count(), 2);
        assert_eq!(svg.matches(&format!(r#"fill="{FAIL_COLOR}""#)).count(), 1);
        assert!(svg.contains(">Saanvi</text>"));
    }

    #[test]
    fn test_threshold_line_and_legend() {
        let summaries = vec![summary("Aarav", 90.0, 75.0)];
        let chart = BarChart::new(&summaries, 75.0);
        let svg = chart.to_svg();

        assert_eq!(chart.legend_label(), "Min Requirement (75%)");
        assert!(svg.contains(r#"class="threshold""#));
        assert!(svg.contains("stroke-dasharray"));
        assert!(svg.contains("Min Requirement (75%)"));
        let y = format!(r#"y1="{:.1}""#, BarChart::y_for(75.0));
        assert!(svg.contains(&y));
    }

    #[test]
    fn test_names_escaped() {
        let summaries = vec![summary("<script>", 50.0, 75.0)];
        let svg = BarChart::new(&summaries, 75.0).to_svg();
        assert!(!svg.contains("<script>"));
        assert!(svg.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_one_element_per_line() {
        let summaries = vec![summary("Aarav", 80.0, 75.0), summary("Saanvi", 40.0, 75.0)];
        let svg = BarChart::new(&summaries, 75.0).to_svg();
        assert!(svg.ends_with("</svg>\n"));
        assert!(svg.lines().all(|line| line.trim_start().starts_with('<')));
        assert_eq!(svg.lines().filter(|l| l.contains(r#"class="bar""#)).count(), 2);
    }

    #[test]
    fn test_empty_chart_renders() {
        let svg = BarChart::new(&[], 75.0).to_svg();
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches(r#"class="bar""#).count(), 0);
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.svg");
        let summaries = vec![summary("Aarav", 80.0, 75.0)];

        BarChart::new(&summaries, 75.0).write_to(&path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Student Attendance Analysis"));
    }

    #[test]
    fn test_write_to_missing_dir_fails() {
        let summaries = vec![summary("Aarav", 80.0, 75.0)];
        let err = BarChart::new(&summaries, 75.0)
            .write_to("/nonexistent/dir/chart.svg")
            .unwrap_err();
        assert!(err.to_string().contains("Failed to write chart"));
    }
}

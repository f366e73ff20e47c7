//! HTML output format for attendance reports
//!
//! Self-contained document: embedded CSS, the records table, the alert list
//! and the bar chart inlined as SVG.

use crate::aggregate::{format_percentage, warning_message};
use crate::chart::{escape_xml, BarChart};
use crate::pipeline::Analysis;

/// HTML report formatter
#[derive(Debug)]
pub struct HtmlOutput<'a> {
    analysis: &'a Analysis,
}

impl<'a> HtmlOutput<'a> {
    pub fn new(analysis: &'a Analysis) -> Self {
        Self { analysis }
    }

    /// Generate embedded CSS styles
    fn generate_styles() -> &'static str {
        r#"
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            margin: 20px;
            background-color: #f5f5f5;
        }
        h1, h2 {
            color: #333;
        }
        table {
            border-collapse: collapse;
            width: 100%;
            background-color: white;
            box-shadow: 0 1px 3px rgba(0,0,0,0.1);
            margin-bottom: 20px;
        }
        th, td {
            border: 1px solid #ddd;
            padding: 8px;
            text-align: left;
        }
        th {
            background-color: #4a90d9;
            color: white;
            font-weight: bold;
        }
        tr:nth-child(even) {
            background-color: #f9f9f9;
        }
        .number {
            font-family: monospace;
            text-align: right;
        }
        tr.below td {
            color: #c62828;
            font-weight: bold;
        }
        .alerts li {
            color: #c62828;
        }
        .all-clear {
            color: #2e7d32;
        }
        .chart {
            background-color: white;
            box-shadow: 0 1px 3px rgba(0,0,0,0.1);
            padding: 10px;
        }
        .footer {
            margin-top: 20px;
            font-size: 0.8em;
            color: #888;
            text-align: center;
        }
        "#
    }

    fn render_table(&self) -> String {
        let mut html = String::new();

        html.push_str("    <table class=\"records\">\n");
        html.push_str(
            "        <tr><th>Student Name</th><th>Total Present</th><th>Percentage</th></tr>\n",
        );

        for summary in &self.analysis.summaries {
            let class = if summary.meets_threshold {
                "clear"
            } else {
                "below"
            };
            html.push_str(&format!(
                "        <tr class=\"{}\"><td>{}</td><td class=\"number\">{}</td><td class=\"number\">{}%</td></tr>\n",
                class,
                escape_xml(&summary.entity_name),
                summary.total_present,
                format_percentage(summary.percentage)
            ));
        }

        html.push_str("    </table>\n");
        html
    }

    fn render_alerts(&self) -> String {
        let partition = &self.analysis.partition;
        let mut html = format!(
            "    <h2>Short Attendance Alert (&lt;{}%)</h2>\n",
            self.analysis.threshold
        );

        if partition.all_clear() {
            html.push_str("    <p class=\"all-clear\">All students have good attendance.</p>\n");
        } else {
            html.push_str("    <ul class=\"alerts\">\n");
            for summary in &partition.below {
                html.push_str(&format!(
                    "        <li>{}</li>\n",
                    escape_xml(&warning_message(summary))
                ));
            }
            html.push_str("    </ul>\n");
        }

        html
    }

    /// Generate complete HTML document
    pub fn to_html(&self) -> String {
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n");
        html.push_str("<html lang=\"en\">\n");

        html.push_str("<head>\n");
        html.push_str("    <meta charset=\"UTF-8\">\n");
        html.push_str(
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        html.push_str("    <title>Attendance Report</title>\n");
        html.push_str("    <style>");
        html.push_str(Self::generate_styles());
        html.push_str("</style>\n");
        html.push_str("</head>\n");

        html.push_str("<body>\n");
        html.push_str("    <h1>Attendance Analysis</h1>\n");
        html.push_str("    <h2>Attendance Records</h2>\n");
        html.push_str(&self.render_table());
        html.push_str(&self.render_alerts());

        html.push_str("    <h2>Performance Graph</h2>\n");
        html.push_str("    <div class=\"chart\">\n");
        html.push_str(
            &BarChart::new(&self.analysis.summaries, self.analysis.threshold).to_svg(),
        );
        html.push_str("    </div>\n");

        html.push_str("    <div class=\"footer\">\n");
        html.push_str("        Generated by rollcall\n");
        html.push_str("    </div>\n");

        html.push_str("</body>\n");
        html.push_str("</html>\n");

        html
    }
}

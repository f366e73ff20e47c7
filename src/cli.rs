//! CLI argument parsing for rollcall

use crate::chart::DEFAULT_CHART_PATH;
use crate::config::AnalyzerConfig;
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the attendance report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
    /// HTML report with the chart embedded
    Html,
}

#[derive(Parser, Debug)]
#[command(name = "rollcall")]
#[command(version)]
#[command(about = "Attendance analyzer with short-attendance alerts and bar charts", long_about = None)]
pub struct Cli {
    /// Load attendance from a CSV file (name column followed by 0/1 day columns)
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Minimum attendance percentage (default: 75.0)
    #[arg(short, long, value_name = "PCT")]
    pub threshold: Option<f64>,

    /// Number of days to generate for synthetic data (default: 10)
    #[arg(short, long, value_name = "N")]
    pub days: Option<usize>,

    /// Random seed for synthetic data (default: 42)
    #[arg(short, long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Read settings from a TOML file; flags still take precedence
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Include per-day presence columns in the text table
    #[arg(long = "show-days")]
    pub show_days: bool,

    /// Where to write the SVG bar chart
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CHART_PATH)]
    pub chart: PathBuf,

    /// Skip rendering the bar chart
    #[arg(long = "no-chart")]
    pub no_chart: bool,

    /// Enable debug tracing on stderr
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Build the effective configuration: defaults, then config file, then flags
    pub fn resolve_config(&self) -> Result<AnalyzerConfig> {
        let mut config = match &self.config {
            Some(path) => AnalyzerConfig::from_toml(path)?,
            None => AnalyzerConfig::default(),
        };

        if let Some(input) = &self.input {
            config.input = Some(input.clone());
        }
        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }
        if let Some(days) = self.days {
            config.time_unit_count = days;
        }
        if let Some(seed) = self.seed {
            config.random_seed = seed;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_cli_no_arguments() {
        let cli = Cli::parse_from(["rollcall"]);
        assert!(cli.input.is_none());
        assert!(cli.threshold.is_none());
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.chart, PathBuf::from("attendance_chart.svg"));
        assert!(!cli.no_chart);
        assert!(!cli.show_days);
        assert!(!cli.debug);
    }

    #[test]
    fn test_cli_defaults_resolve_to_default_config() {
        let cli = Cli::parse_from(["rollcall"]);
        assert_eq!(cli.resolve_config().unwrap(), AnalyzerConfig::default());
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "rollcall", "-t", "80", "-d", "20", "-s", "7", "-i", "data.csv",
        ]);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.threshold, 80.0);
        assert_eq!(config.time_unit_count, 20);
        assert_eq!(config.random_seed, 7);
        assert_eq!(config.input, Some(PathBuf::from("data.csv")));
    }

    #[test]
    fn test_cli_format_values() {
        let cli = Cli::parse_from(["rollcall", "--format", "json"]);
        assert_eq!(cli.format, OutputFormat::Json);
        let cli = Cli::parse_from(["rollcall", "--format", "csv"]);
        assert_eq!(cli.format, OutputFormat::Csv);
        let cli = Cli::parse_from(["rollcall", "--format", "html"]);
        assert_eq!(cli.format, OutputFormat::Html);
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["rollcall", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_cli_flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "threshold = 60.0").unwrap();
        writeln!(file, "random_seed = 9").unwrap();
        file.flush().unwrap();

        let path = file.path().to_str().unwrap();
        let cli = Cli::parse_from(["rollcall", "--config", path, "--threshold", "90"]);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.threshold, 90.0);
        assert_eq!(config.random_seed, 9);
    }

    #[test]
    fn test_cli_chart_options() {
        let cli = Cli::parse_from(["rollcall", "--chart", "out/graph.svg", "--no-chart"]);
        assert_eq!(cli.chart, PathBuf::from("out/graph.svg"));
        assert!(cli.no_chart);
    }
}

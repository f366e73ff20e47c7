use anyhow::Result;
use clap::Parser;
use rollcall::chart::BarChart;
use rollcall::cli::{Cli, OutputFormat};
use rollcall::html_output::HtmlOutput;
use rollcall::json_output::JsonReport;
use rollcall::pipeline::{self, Analysis};
use rollcall::report::TextReport;
use rollcall::{csv_output, source};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Render the report in the requested format
fn render_report(analysis: &Analysis, args: &Cli) -> Result<String> {
    let rendered = match args.format {
        OutputFormat::Text => TextReport::new(analysis, args.show_days).render(),
        OutputFormat::Json => JsonReport::from_analysis(analysis).to_json()?,
        OutputFormat::Csv => csv_output::to_csv(&analysis.summaries)?,
        OutputFormat::Html => HtmlOutput::new(analysis).to_html(),
    };
    Ok(rendered)
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    let config = args.resolve_config()?;
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))?;

    // Load and aggregate everything before printing anything
    let data_source = source::from_config(&config);
    let analysis = pipeline::analyze(data_source.as_ref(), config.threshold)?;

    let report = render_report(&analysis, &args)?;

    // A failed chart write must leave stdout empty
    if !args.no_chart {
        BarChart::new(&analysis.summaries, analysis.threshold).write_to(&args.chart)?;
    }

    print!("{}", report);

    if !args.no_chart && args.format == OutputFormat::Text {
        println!("\nGenerating Performance Graph...");
        println!("Chart saved to {}", args.chart.display());
    }

    Ok(())
}

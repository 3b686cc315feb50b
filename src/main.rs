use anyhow::{Context, Result};
use clap::Parser;
use errstat::cli::{Cli, Inputs, OutputFormat};
use errstat::json_output::JsonOutput;
use errstat::parser::extract_samples;
use errstat::population::build_population;
use errstat::report::{LogPopulation, Report, ReportConfig};
use std::io::Write;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Read one log and summarize its samples
fn load_log(path: &Path) -> Result<LogPopulation> {
    let samples = extract_samples(path)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    let population = build_population(samples)
        .with_context(|| format!("No final error samples in {}", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        count = population.count,
        mean = population.mean,
        standard_deviation = population.standard_deviation,
        "population summary"
    );

    Ok(LogPopulation {
        path: path.to_path_buf(),
        population,
    })
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    // Argument count is checked before any file is opened
    let inputs = args.inputs()?;

    let config = ReportConfig::default();
    config.validate().map_err(anyhow::Error::msg)?;

    let report = match inputs {
        Inputs::Single(path) => Report::single(load_log(&path)?),
        Inputs::Pair(left, right) => Report::compare(load_log(&left)?, load_log(&right)?),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match args.format {
        OutputFormat::Text => report
            .write_text(&mut out, &config)
            .context("Failed to write report")?,
        OutputFormat::Json => {
            let json = JsonOutput::from_report(&report, &config).to_json()?;
            writeln!(out, "{}", json).context("Failed to write report")?;
        }
    }

    Ok(())
}

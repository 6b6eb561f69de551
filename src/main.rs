//! hedge-compare CLI
//!
//! Compare no hedge, forward and option costs for a future FX payable.
//!
//! # Usage
//!
//! ```bash
//! # Reference scenario: table, metrics and chart under ./results
//! hedge-compare run
//!
//! # Custom scenario, JSON to stdout, no chart
//! hedge-compare run --scenario scenario.json --format json --no-chart
//!
//! # Decision metrics only
//! hedge-compare metrics --scenario scenario.json
//!
//! # Write a scenario template
//! hedge-compare scenario --output scenario.json
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use hedge_compare::analysis::HedgeAnalysis;
use hedge_compare::core::config::{ConfigError, ScenarioConfig};
use hedge_compare::core::error::DomainError;
use hedge_compare::report::json::AnalysisOutput;
use hedge_compare::report::terminal::render_table;
use hedge_compare::report::{ReportError, ReportWriter};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use thiserror::Error;

/// Compare FX hedging strategies for a future foreign-currency payable
#[derive(Parser)]
#[command(name = "hedge-compare")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log pipeline stages and written files
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the cost table and metrics, print them and write the result files
    Run {
        /// Scenario JSON file (reference scenario when omitted)
        #[arg(short, long)]
        scenario: Option<PathBuf>,

        /// Directory for payoff_table.csv, decision_metrics.txt and the chart
        #[arg(short, long, default_value = "results")]
        output_dir: PathBuf,

        /// Output format on stdout
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Do not render the chart
        #[arg(long)]
        no_chart: bool,
    },

    /// Print the decision metrics only; writes no files
    Metrics {
        /// Scenario JSON file (reference scenario when omitted)
        #[arg(short, long)]
        scenario: Option<PathBuf>,

        /// Output format on stdout
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Emit the reference scenario as a JSON template
    Scenario {
        /// Write to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("cannot write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn load_analysis(scenario: Option<&Path>) -> Result<HedgeAnalysis, CliError> {
    let config = match scenario {
        Some(path) => ScenarioConfig::load(path)?,
        None => ScenarioConfig::default(),
    };
    let (params, grid) = config.build()?;
    Ok(HedgeAnalysis::run(params, grid)?)
}

fn cmd_run(
    scenario: Option<&Path>,
    output_dir: &Path,
    format: OutputFormat,
    no_chart: bool,
) -> Result<(), CliError> {
    let analysis = load_analysis(scenario)?;

    match format {
        OutputFormat::Json => println!("{}", AnalysisOutput::new(&analysis).to_json_pretty()?),
        OutputFormat::Text => {
            println!("\n{}\n", render_table(analysis.table(), analysis.params()));
            println!("{}", analysis.metrics());
        }
    }

    let mut writer = ReportWriter::new(output_dir);
    if no_chart {
        writer = writer.without_chart();
    }
    let written = writer.write(&analysis)?;
    log::info!(
        "results in {} (chart: {})",
        writer.output_dir().display(),
        written
            .chart
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "skipped".to_string())
    );
    Ok(())
}

fn cmd_metrics(scenario: Option<&Path>, format: OutputFormat) -> Result<(), CliError> {
    let analysis = load_analysis(scenario)?;
    match format {
        OutputFormat::Json => println!(
            "{}",
            AnalysisOutput::metrics_only(&analysis).to_json_pretty()?
        ),
        OutputFormat::Text => println!("{}", analysis.metrics()),
    }
    Ok(())
}

fn cmd_scenario(output: Option<&Path>) -> Result<(), CliError> {
    let json = ScenarioConfig::default().to_json_pretty()?;
    match output {
        Some(path) => {
            fs::write(path, &json).map_err(|source| CliError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            eprintln!("Reference scenario → {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = match cli.command {
        Commands::Run {
            scenario,
            output_dir,
            format,
            no_chart,
        } => cmd_run(scenario.as_deref(), &output_dir, format, no_chart),
        Commands::Metrics { scenario, format } => cmd_metrics(scenario.as_deref(), format),
        Commands::Scenario { output } => cmd_scenario(output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

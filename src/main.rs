use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};

use choice_compare::adapters::{
    init_tracing, FileScenarioReader, JsonReportRenderer, RandomIdGenerator,
    SequentialIdGenerator, TextReportRenderer,
};
use choice_compare::application::{
    EditDecisionHandler, LoadScenarioCommand, LoadScenarioHandler,
};
use choice_compare::config::{AppConfig, IdStrategy};
use choice_compare::domain::analysis::DeltaFilter;
use choice_compare::domain::dashboard::ComparisonOverview;
use choice_compare::domain::decision::Dimension;
use choice_compare::ports::{IdGenerator, ReportRenderer};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare the first two options of a scenario file
    Compare {
        /// Scenario file (.json for JSON, anything else is read as YAML)
        file: PathBuf,
        /// Delta filter: all, positive, negative or significant
        #[arg(short, long)]
        filter: Option<DeltaFilter>,
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },
    /// List the impact dimensions
    Dimensions,
}

#[derive(Clone, Copy, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;
    init_tracing(&config.logging);

    match cli.command {
        Commands::Compare {
            file,
            filter,
            format,
        } => {
            let ids: Arc<dyn IdGenerator> = match config.comparison.id_strategy {
                IdStrategy::Random => Arc::new(RandomIdGenerator::new()),
                IdStrategy::Sequential => Arc::new(SequentialIdGenerator::new()),
            };
            let editor = EditDecisionHandler::new(ids)
                .with_default_soft_penalty(config.comparison.default_soft_penalty);
            let handler = LoadScenarioHandler::new(Arc::new(FileScenarioReader::new()), editor);

            let loaded = handler
                .handle(LoadScenarioCommand { path: file.clone() })
                .with_context(|| format!("failed to load scenario {}", file.display()))?;

            let overview = match filter {
                Some(mode) => {
                    let mut session = loaded.session;
                    session.set_filter_mode(mode);
                    ComparisonOverview::from_session(&session)
                }
                None => loaded.overview,
            };

            let renderer: Box<dyn ReportRenderer> = match format {
                ReportFormat::Text => Box::new(TextReportRenderer::new()),
                ReportFormat::Json => Box::new(JsonReportRenderer::new()),
            };
            let report = renderer
                .render(&overview)
                .context("failed to render report")?;
            print!("{}", report);
        }
        Commands::Dimensions => {
            for dimension in Dimension::all() {
                println!("{:<12} {}", dimension.key(), dimension.label());
            }
        }
    }

    Ok(())
}

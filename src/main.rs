use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use dictation_grader::cli::{Cli, OutputFormat};
use dictation_grader::render::render_report;
use dictation_grader::Grader;

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = cli
        .grader_config()
        .context("Failed to build grader configuration")?;
    let input = cli.source.resolve().context("Failed to load grading input")?;
    info!(strategy = %config.strategy, lookahead = config.lookahead, "grading submission");

    let grader = Grader::new(&config).context("Failed to initialize grader")?;
    let report = grader
        .grade(&input.reference, &input.submission)
        .context("Failed to grade submission")?;

    match cli.format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
            println!("{json}");
        }
        OutputFormat::Text | OutputFormat::Color => {
            if let Some(label) = &input.label {
                println!("Exercise: {label}");
            }
            print!("{}", render_report(&report, cli.format == OutputFormat::Color));
        }
    }
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dictation_grader=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

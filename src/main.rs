//! Command-line front end for pdfmetadataanalyzer.
//!
//! `analyze` prints the metadata report for one PDF; `serve` starts the
//! single-page upload form.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use pdfmetadataanalyzer::server::{self, ServerConfig};
use pdfmetadataanalyzer::{process_upload, render_text, AnalyzerConfig, PageState};
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// PDF metadata completeness checker
#[derive(Parser, Debug)]
#[command(name = "pdfmetadataanalyzer", version)]
#[command(about = "Check a PDF's document-information dictionary for completeness")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze one PDF and print the report
    Analyze {
        /// Path to the PDF file to analyze
        file: PathBuf,

        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,

        /// JSON file with a custom field table
        #[arg(long)]
        rules: Option<PathBuf>,
    },

    /// Serve the upload page over HTTP
    Serve {
        /// Host address to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value = "8501")]
        port: u16,

        /// Reject request bodies larger than this many bytes
        #[arg(long)]
        max_upload_bytes: Option<usize>,

        /// JSON file with a custom field table
        #[arg(long)]
        rules: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Command::Analyze { file, json, rules } => {
            let config = load_rules(rules.as_deref())?;
            run_analysis(&file, json, &config)
        }
        Command::Serve {
            host,
            port,
            max_upload_bytes,
            rules,
        } => {
            let analyzer = load_rules(rules.as_deref())?;
            let config = ServerConfig {
                host,
                port,
                max_upload_bytes,
            };
            info!("Starting {} on {}:{}", env!("CARGO_PKG_NAME"), config.host, config.port);
            server::serve(config, analyzer)
                .await
                .context("server stopped")?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_rules(path: Option<&Path>) -> anyhow::Result<AnalyzerConfig> {
    match path {
        Some(path) => AnalyzerConfig::from_path(path)
            .with_context(|| format!("cannot load rule file {}", path.display())),
        None => Ok(AnalyzerConfig::default()),
    }
}

fn run_analysis(path: &Path, json: bool, config: &AnalyzerConfig) -> anyhow::Result<ExitCode> {
    let data = std::fs::read(path).with_context(|| format!("cannot read {}", path.display()))?;
    info!("Analyzing PDF: {}", path.display());

    let state = process_upload(Some(data.as_slice()), config);
    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        print!("{}", render_text(&state));
    }

    Ok(match state {
        PageState::Failed { .. } => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    })
}

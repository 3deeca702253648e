//! CLI commands

pub mod edit;
pub mod export;
pub mod history;
pub mod preview;

use anyhow::{Context, Result};
use assessment_model::AssessmentRecord;
use clap::{Parser, Subcommand};
use doc_export::{ExportSettings, SettingsManager};
use std::path::{Path, PathBuf};

/// quizdoc - export, preview and manage generated assessments
#[derive(Debug, Parser)]
#[command(name = "quizdoc")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Export settings file (JSON)
    #[arg(long, global = true, env = "QUIZDOC_SETTINGS")]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Export an assessment record to DOCX or PDF
    Export(export::ExportArgs),

    /// Print an assessment as plain text
    Preview(preview::PreviewArgs),

    /// List, search and delete saved assessments
    History(history::HistoryArgs),

    /// Edit an assessment and produce the save request body
    Edit(edit::EditArgs),
}

/// Run the CLI application
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match cli.command {
        Commands::Export(args) => export::execute(args, cli.settings.as_deref()).await,
        Commands::Preview(args) => preview::execute(args),
        Commands::History(args) => history::execute(args),
        Commands::Edit(args) => edit::execute(args),
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let default = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Read a single assessment record from a JSON file
pub(crate) fn load_record(path: &Path) -> Result<AssessmentRecord> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    AssessmentRecord::from_json(&json)
        .with_context(|| format!("{} is not a valid assessment record", path.display()))
}

/// Load export settings, falling back to defaults when no file is given
pub(crate) async fn load_settings(path: Option<&Path>) -> Result<ExportSettings> {
    let Some(path) = path else {
        return Ok(ExportSettings::default());
    };
    let mut manager = SettingsManager::new(path);
    let settings = manager
        .load()
        .await
        .with_context(|| format!("Failed to load settings from {}", path.display()))?;
    Ok(settings.clone())
}

//! Preview command
//!
//! Prints the same lines the exporters write, as plain text.

use anyhow::Result;
use clap::Args;
use doc_export::AssessmentContent;
use std::io::Write;
use std::path::PathBuf;

/// Arguments for the preview command
#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Assessment record (JSON)
    pub record: PathBuf,
}

/// Execute the preview command
pub fn execute(args: PreviewArgs) -> Result<()> {
    let record = super::load_record(&args.record)?;
    let content = AssessmentContent::build(&record.assessment)?;

    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{}", content)?;
    Ok(())
}

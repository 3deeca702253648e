//! Edit command
//!
//! Applies edits to one question of a record and prints the body of the
//! resulting save request. Nothing is sent anywhere.

use anyhow::{bail, Context, Result};
use assessment_model::{parse_option_label, EditSession, SaveMode};
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// How the edited record should be saved
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SaveTarget {
    /// Save as a new record (no id)
    Copy,
    /// Replace the loaded record
    Overwrite,
}

impl From<SaveTarget> for SaveMode {
    fn from(target: SaveTarget) -> Self {
        match target {
            SaveTarget::Copy => SaveMode::Copy,
            SaveTarget::Overwrite => SaveMode::Overwrite,
        }
    }
}

/// Arguments for the edit command
#[derive(Debug, Args)]
pub struct EditArgs {
    /// Assessment record (JSON)
    pub record: PathBuf,

    /// Question to edit (1-based)
    #[arg(long, short)]
    pub question: Option<usize>,

    /// New question text
    #[arg(long)]
    pub text: Option<String>,

    /// New sample answer (short and long answer questions)
    #[arg(long)]
    pub sample_answer: Option<String>,

    /// Replace an option, e.g. `b=Rome` (repeatable)
    #[arg(long = "option", value_parser = parse_option_edit)]
    pub options: Vec<(usize, String)>,

    /// Letter of the correct option, e.g. `c`
    #[arg(long)]
    pub answer_key: Option<String>,

    /// Save mode
    #[arg(long, value_enum)]
    pub save: SaveTarget,

    /// Write the request body here instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl EditArgs {
    fn has_edits(&self) -> bool {
        self.text.is_some() || self.sample_answer.is_some() || !self.options.is_empty() || self.answer_key.is_some()
    }
}

/// Execute the edit command
pub fn execute(args: EditArgs) -> Result<()> {
    let record = super::load_record(&args.record)?;
    let mut session = EditSession::new(record);

    if args.has_edits() {
        let Some(number) = args.question else {
            bail!("--question is required when editing");
        };
        apply_edits(&mut session, &args, number)?;
    }

    let request = session
        .prepare_save(args.save.into())
        .context("Cannot prepare save")?;
    let json = request.to_json_pretty()?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &json).with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Wrote save request to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn apply_edits(session: &mut EditSession, args: &EditArgs, number: usize) -> Result<()> {
    if number == 0 {
        bail!("Questions are numbered from 1");
    }
    let index = number - 1;
    let mut changed = 0;

    if let Some(text) = &args.text {
        changed += usize::from(session.set_question_text(index, text.as_str())?);
    }
    if let Some(answer) = &args.sample_answer {
        changed += usize::from(session.set_sample_answer(index, answer.as_str())?);
    }
    for (option, text) in &args.options {
        changed += usize::from(session.set_option(index, *option, text.as_str())?);
    }
    if let Some(label) = &args.answer_key {
        let option = parse_option_label(label)?;
        changed += usize::from(session.set_correct_answer(index, option)?);
    }

    tracing::info!(question = number, changed, dirty = session.is_dirty(), "applied edits");
    Ok(())
}

/// Parse `LABEL=TEXT`
fn parse_option_edit(s: &str) -> std::result::Result<(usize, String), String> {
    let (label, text) = s
        .split_once('=')
        .ok_or_else(|| format!("expected LABEL=TEXT, got '{s}'"))?;
    let index = parse_option_label(label).map_err(|e| e.to_string())?;
    Ok((index, text.to_string()))
}

//! History command
//!
//! Lists saved assessments from a JSON array of records.

use anyhow::{bail, Context, Result};
use assessment_model::{parse_history, remove_record, AssessmentRecord, HistoryPage, HistoryQuery, RecordId, SortOrder};
use clap::{Args, ValueEnum};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Listing order
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum Sort {
    /// Most recently modified first
    #[default]
    Recent,
    /// Oldest first
    Oldest,
}

impl From<Sort> for SortOrder {
    fn from(sort: Sort) -> Self {
        match sort {
            Sort::Recent => SortOrder::RecentFirst,
            Sort::Oldest => SortOrder::OldestFirst,
        }
    }
}

/// Arguments for the history command
#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// File holding a JSON array of records
    pub records: PathBuf,

    /// Sort order
    #[arg(long, value_enum, default_value_t = Sort::Recent)]
    pub sort: Sort,

    /// Only show topics containing this text
    #[arg(long, short)]
    pub search: Option<String>,

    /// Page to show (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Records per page
    #[arg(long, default_value_t = 10)]
    pub page_size: usize,

    /// Delete the record with this id and save the file
    #[arg(long)]
    pub delete: Option<String>,
}

/// Execute the history command
pub fn execute(args: HistoryArgs) -> Result<()> {
    let mut records = load_records(&args.records)?;

    if let Some(id) = &args.delete {
        if !remove_record(&mut records, &RecordId::new(id.as_str())) {
            bail!("No record with id {id} in {}", args.records.display());
        }
        let json = serde_json::to_string_pretty(&records)?;
        std::fs::write(&args.records, json)
            .with_context(|| format!("Failed to write {}", args.records.display()))?;
        tracing::info!(id = id.as_str(), "deleted record");
        eprintln!("Deleted {id}");
    }

    let query = HistoryQuery {
        order: args.sort.into(),
        search: args.search.clone().unwrap_or_default(),
        page: args.page,
        page_size: args.page_size,
    };
    print!("{}", render_page(&query.apply(&records)));
    Ok(())
}

fn load_records(path: &Path) -> Result<Vec<AssessmentRecord>> {
    let json = std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    parse_history(&json).with_context(|| format!("{} is not a list of assessment records", path.display()))
}

fn render_page(page: &HistoryPage<'_>) -> String {
    let mut out = String::new();
    if page.entries.is_empty() {
        out.push_str("No assessments found.\n");
    }

    for record in &page.entries {
        let modified = record
            .last_modified
            .map(|t| t.format(assessment_model::TIMESTAMP_FORMAT).to_string())
            .unwrap_or_else(|| "-".to_string());
        let id = record.id.as_ref().map(RecordId::as_str).unwrap_or("-");
        let input = &record.assessment.user_input;
        let _ = writeln!(
            out,
            "{modified}  {id}  {} ({} x {})",
            input.topic, input.num_questions, input.question_type
        );
    }

    let _ = writeln!(
        out,
        "Page {} of {} ({} matching)",
        page.page,
        page.page_count.max(1),
        page.total_matches
    );
    out
}

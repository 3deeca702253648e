//! Export command

use anyhow::{Context, Result};
use clap::Args;
use doc_export::{save_export, DocumentExporter, ExportFormat};
use std::path::{Path, PathBuf};

/// Arguments for the export command
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Assessment record (JSON)
    pub record: PathBuf,

    /// Output format: pdf or docx (defaults to the --output extension, else pdf)
    #[arg(long, short)]
    pub format: Option<ExportFormat>,

    /// File name without extension (defaults to the record's file name)
    #[arg(long, short)]
    pub output: Option<String>,

    /// Directory to write into
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,
}

/// Execute the export command
pub async fn execute(args: ExportArgs, settings_path: Option<&Path>) -> Result<()> {
    let record = super::load_record(&args.record)?;
    let settings = super::load_settings(settings_path).await?;

    let desired_name = args.output.clone().unwrap_or_else(|| default_name(&args.record));
    let format = resolve_format(args.format, &desired_name);
    tracing::info!(topic = record.topic(), format = %format, "exporting assessment");

    let file = DocumentExporter::with_settings(settings)
        .export_file(&record.assessment, &desired_name, format)
        .with_context(|| format!("Failed to export {} as {}", args.record.display(), format.display_name()))?;

    let path = save_export(&file, &args.dir)
        .await
        .with_context(|| format!("Failed to write {} into {}", file.file_name, args.dir.display()))?;

    eprintln!("Exported {} ({}, {} bytes)", path.display(), file.mime_type, file.bytes.len());
    Ok(())
}

fn resolve_format(explicit: Option<ExportFormat>, desired_name: &str) -> ExportFormat {
    explicit
        .or_else(|| ExportFormat::from_path(Path::new(desired_name)))
        .unwrap_or(ExportFormat::Pdf)
}

fn default_name(record: &Path) -> String {
    record
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .unwrap_or("assessment")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const RECORD: &str = r#"{
        "user_input": {
            "topic": "Capitals",
            "question_type": "MCQ",
            "num_questions": 1,
            "context_keywords": "",
            "pdfs": []
        },
        "questions": [{
            "question_type": "MCQ",
            "question": "Capital of Italy?",
            "options": ["Paris", "Rome", "Berlin"],
            "correct_answer": 1
        }]
    }"#;

    #[test]
    fn test_default_name() {
        assert_eq!(default_name(Path::new("saved/quiz.json")), "quiz");
        assert_eq!(default_name(Path::new("")), "assessment");
    }

    #[test]
    fn test_resolve_format() {
        assert_eq!(resolve_format(None, "quiz.docx"), ExportFormat::Docx);
        assert_eq!(resolve_format(None, "quiz"), ExportFormat::Pdf);
        assert_eq!(resolve_format(Some(ExportFormat::Pdf), "quiz.docx"), ExportFormat::Pdf);
    }

    #[tokio::test]
    async fn test_export_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let record_path = temp_dir.path().join("capitals.json");
        std::fs::write(&record_path, RECORD).unwrap();

        let args = ExportArgs {
            record: record_path,
            format: Some(ExportFormat::Docx),
            output: None,
            dir: temp_dir.path().join("out"),
        };
        execute(args, None).await.unwrap();

        let bytes = std::fs::read(temp_dir.path().join("out").join("capitals.docx")).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[tokio::test]
    async fn test_export_uses_settings_file() {
        let temp_dir = TempDir::new().unwrap();
        let record_path = temp_dir.path().join("capitals.json");
        std::fs::write(&record_path, RECORD).unwrap();
        let settings_path = temp_dir.path().join("settings.json");
        std::fs::write(&settings_path, r#"{"pdf": {"compress": false}}"#).unwrap();

        let args = ExportArgs {
            record: record_path,
            format: None,
            output: Some("quiz.pdf".to_string()),
            dir: temp_dir.path().to_path_buf(),
        };
        execute(args, Some(&settings_path)).await.unwrap();

        let bytes = std::fs::read(temp_dir.path().join("quiz.pdf")).unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("(Answer: b) Tj"));
    }

    #[tokio::test]
    async fn test_output_outside_dir_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let record_path = temp_dir.path().join("capitals.json");
        std::fs::write(&record_path, RECORD).unwrap();

        let args = ExportArgs {
            record: record_path,
            format: None,
            output: Some("../escaped".to_string()),
            dir: temp_dir.path().join("out"),
        };
        let err = execute(args, None).await.unwrap_err();
        assert!(format!("{err:#}").contains("Invalid file name"));
        assert!(!temp_dir.path().join("escaped.pdf").exists());
    }

    #[tokio::test]
    async fn test_missing_record_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let args = ExportArgs {
            record: temp_dir.path().join("missing.json"),
            format: None,
            output: None,
            dir: temp_dir.path().to_path_buf(),
        };
        let err = execute(args, None).await.unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read"));
    }
}

//! Error types for export operations

use crate::docx::DocxError;
use crate::pdf::PdfError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Assessment error: {0}")]
    Model(#[from] assessment_model::ModelError),

    #[error("Layout error: {0}")]
    Layout(#[from] layout_engine::LayoutError),

    #[error("DOCX error: {0}")]
    Docx(#[from] DocxError),

    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings error: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid file name: {0:?}")]
    InvalidFileName(String),
}

pub type Result<T> = std::result::Result<T, ExportError>;

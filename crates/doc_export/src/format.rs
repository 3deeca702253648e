//! Export formats

use crate::ExportError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Microsoft Word DOCX (Office Open XML)
    Docx,
    /// PDF
    Pdf,
}

impl ExportFormat {
    /// File extension, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Docx => "docx",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Docx => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            ExportFormat::Pdf => "application/pdf",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ExportFormat::Docx => "Word Document",
            ExportFormat::Pdf => "PDF Document",
        }
    }

    /// Detect format from a file extension
    pub fn from_extension(ext: &str) -> Option<ExportFormat> {
        ExportFormat::all()
            .into_iter()
            .find(|format| format.extension().eq_ignore_ascii_case(ext))
    }

    /// Detect format from a file path
    pub fn from_path(path: &Path) -> Option<ExportFormat> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(ExportFormat::from_extension)
    }

    pub fn all() -> [ExportFormat; 2] {
        [ExportFormat::Docx, ExportFormat::Pdf]
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExportFormat::from_extension(s.trim().trim_start_matches('.'))
            .ok_or_else(|| ExportError::UnsupportedFormat(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extensions_and_mime_types() {
        assert_eq!(ExportFormat::Docx.extension(), "docx");
        assert_eq!(ExportFormat::Pdf.mime_type(), "application/pdf");
        assert_eq!(
            ExportFormat::Docx.mime_type(),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
    }

    #[test]
    fn test_detection() {
        assert_eq!(ExportFormat::from_extension("PDF"), Some(ExportFormat::Pdf));
        assert_eq!(ExportFormat::from_extension("odt"), None);
        assert_eq!(
            ExportFormat::from_path(Path::new("out/quiz.docx")),
            Some(ExportFormat::Docx)
        );
        assert_eq!(".pdf".parse::<ExportFormat>().unwrap(), ExportFormat::Pdf);
        assert!("rtf".parse::<ExportFormat>().is_err());
    }
}

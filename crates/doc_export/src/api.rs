//! Public export API

use crate::docx::write_docx;
use crate::pdf::{write_pdf, DocumentInfo};
use crate::{AssessmentContent, ExportFormat, ExportSettings, ExportedFile, Result};
use assessment_model::Assessment;

/// Turns assessments into DOCX or PDF bytes
#[derive(Debug, Clone, Default)]
pub struct DocumentExporter {
    settings: ExportSettings,
}

impl DocumentExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: ExportSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ExportSettings {
        &self.settings
    }

    /// Export `assessment` in `format`.
    ///
    /// # Errors
    ///
    /// Fails when a question needs an option letter past `z`, when the PDF
    /// page setup is unusable, or when packing the output fails.
    pub fn export(&self, assessment: &Assessment, format: ExportFormat) -> Result<Vec<u8>> {
        let content = AssessmentContent::build(assessment)?;

        let bytes = match format {
            ExportFormat::Docx => write_docx(&content, &self.settings.docx)?,
            ExportFormat::Pdf => write_pdf(&content, &self.settings.pdf, &document_info(assessment))?,
        };

        tracing::debug!(
            format = %format,
            questions = content.questions.len(),
            bytes = bytes.len(),
            "exported assessment"
        );
        Ok(bytes)
    }

    /// Export and name the result `{desired_name}.{ext}`
    pub fn export_file(
        &self,
        assessment: &Assessment,
        desired_name: &str,
        format: ExportFormat,
    ) -> Result<ExportedFile> {
        let bytes = self.export(assessment, format)?;
        Ok(ExportedFile::new(desired_name, format, bytes))
    }
}

/// Export with default settings
pub fn export(assessment: &Assessment, format: ExportFormat) -> Result<Vec<u8>> {
    DocumentExporter::new().export(assessment, format)
}

fn document_info(assessment: &Assessment) -> DocumentInfo {
    let input = &assessment.user_input;
    let mut info = DocumentInfo::new();
    info.title = Some(format!("Assessment: {}", input.topic));
    info.subject = Some(format!("{} questions", input.question_type));
    info.keywords = input.keywords().map(str::to_string);
    info
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ExportError;
    use assessment_model::{AssessmentInput, ModelError, Question, QuestionType};

    fn sample() -> Assessment {
        let input = AssessmentInput::new("Geography", QuestionType::Mcq, 1);
        let question = Question::multiple_choice("Capital of France?", ["Paris", "Rome"], 0).unwrap();
        Assessment::new(input, vec![question])
    }

    #[test]
    fn test_export_docx_is_zip() {
        let bytes = export(&sample(), ExportFormat::Docx).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_export_pdf_header() {
        let bytes = export(&sample(), ExportFormat::Pdf).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.4"));
    }

    #[test]
    fn test_export_file_name() {
        let file = DocumentExporter::new()
            .export_file(&sample(), "geo-quiz", ExportFormat::Pdf)
            .unwrap();
        assert_eq!(file.file_name, "geo-quiz.pdf");
        assert_eq!(file.mime_type, "application/pdf");
    }

    #[test]
    fn test_letter_overflow_fails() {
        let options: Vec<String> = (0..27).map(|i| i.to_string()).collect();
        let input = AssessmentInput::new("Too many", QuestionType::Mcq, 1);
        let assessment = Assessment::new(input, vec![Question::multiple_choice("Q", options, 0).unwrap()]);

        for format in ExportFormat::all() {
            let err = export(&assessment, format).unwrap_err();
            assert!(matches!(err, ExportError::Model(ModelError::OptionIndexOutOfRange(26))));
        }
    }

    #[test]
    fn test_invalid_page_setup() {
        let mut settings = ExportSettings::default();
        settings.pdf.margins_mm.top = 200.0;
        settings.pdf.margins_mm.bottom = 200.0;

        let err = DocumentExporter::with_settings(settings)
            .export(&sample(), ExportFormat::Pdf)
            .unwrap_err();
        assert!(matches!(err, ExportError::Layout(_)));
    }
}

//! Document.xml writer
//!
//! Every content line becomes one paragraph with a single run. The blank
//! spacer that closes a question block is expressed as `space-after` on the
//! block's last paragraph; the separator between blocks is an empty
//! paragraph of its own.

use crate::docx::{escape_xml, namespaces};
use crate::{AssessmentContent, ContentItem, DocxSettings, LineStyle};

/// A4 page in twips
const PAGE_WIDTH: u32 = 11906;
const PAGE_HEIGHT: u32 = 16838;
const PAGE_MARGIN: u32 = 1440;

/// Run and paragraph formatting of one paragraph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ParagraphFormat {
    bold: bool,
    /// Half-points
    size: Option<u32>,
    /// Twips
    spacing_before: Option<u32>,
    spacing_after: Option<u32>,
}

/// Writer for document.xml
pub struct DocumentWriter<'a> {
    settings: &'a DocxSettings,
}

impl<'a> DocumentWriter<'a> {
    pub fn new(settings: &'a DocxSettings) -> Self {
        Self { settings }
    }

    /// Generate document.xml content
    pub fn write(&self, content: &AssessmentContent) -> String {
        let mut xml = String::new();

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(
            r#"<w:document xmlns:w="{}" xmlns:r="{}">"#,
            namespaces::W,
            namespaces::R,
        ));
        xml.push_str("<w:body>");

        let items = content.items();
        for (i, item) in items.iter().enumerate() {
            match item {
                ContentItem::Line(line) => {
                    let mut format = self.line_format(line.style);
                    if matches!(items.get(i + 1), Some(ContentItem::Spacer)) {
                        format.spacing_after = Some(self.settings.spacer_after);
                    }
                    write_paragraph(&mut xml, &line.text, &format);
                }
                ContentItem::Spacer => {}
                ContentItem::Separator => {
                    let format = ParagraphFormat {
                        size: Some(self.settings.separator_size),
                        spacing_after: Some(self.settings.separator_after),
                        ..Default::default()
                    };
                    write_paragraph(&mut xml, "", &format);
                }
            }
        }

        write_section_properties(&mut xml);
        xml.push_str("</w:body>");
        xml.push_str("</w:document>");
        xml
    }

    fn line_format(&self, style: LineStyle) -> ParagraphFormat {
        let s = self.settings;
        let size = match style {
            LineStyle::Title => Some(s.title_size),
            LineStyle::Keywords => Some(s.keywords_size),
            LineStyle::Documents => s.documents_size,
            LineStyle::QuestionPrompt => Some(s.question_size),
            LineStyle::Option | LineStyle::SampleAnswer | LineStyle::AnswerKey => Some(s.body_size),
        };

        let (spacing_before, spacing_after) = match style {
            LineStyle::QuestionPrompt => (
                Some(s.question_spacing_before),
                Some(s.question_spacing_after),
            ),
            _ => (None, None),
        };

        ParagraphFormat {
            bold: style.is_bold(),
            size,
            spacing_before,
            spacing_after,
        }
    }
}

fn write_paragraph(xml: &mut String, text: &str, format: &ParagraphFormat) {
    xml.push_str("<w:p>");

    if format.spacing_before.is_some() || format.spacing_after.is_some() {
        xml.push_str("<w:pPr><w:spacing");
        if let Some(before) = format.spacing_before {
            xml.push_str(&format!(r#" w:before="{}""#, before));
        }
        if let Some(after) = format.spacing_after {
            xml.push_str(&format!(r#" w:after="{}""#, after));
        }
        xml.push_str("/></w:pPr>");
    }

    xml.push_str("<w:r>");
    write_run_properties(xml, format);
    write_text(xml, text);
    xml.push_str("</w:r>");

    xml.push_str("</w:p>");
}

fn write_run_properties(xml: &mut String, format: &ParagraphFormat) {
    if !format.bold && format.size.is_none() {
        return;
    }

    xml.push_str("<w:rPr>");
    if format.bold {
        xml.push_str("<w:b/><w:bCs/>");
    }
    if let Some(size) = format.size {
        xml.push_str(&format!(r#"<w:sz w:val="{}"/><w:szCs w:val="{}"/>"#, size, size));
    }
    xml.push_str("</w:rPr>");
}

/// Text with tabs and line breaks mapped to `w:tab` and `w:br`.
/// Characters XML 1.0 cannot carry are dropped.
fn write_text(xml: &mut String, text: &str) {
    let text: String = text.chars().filter(|&c| is_xml_char(c)).collect();
    let lines: Vec<&str> = text.split('\n').collect();

    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            xml.push_str("<w:br/>");
        }
        let line = line.strip_suffix('\r').unwrap_or(line);

        for (j, segment) in line.split('\t').enumerate() {
            if j > 0 {
                xml.push_str("<w:tab/>");
            }
            if segment.is_empty() {
                continue;
            }
            if segment.starts_with(' ') || segment.ends_with(' ') {
                xml.push_str(r#"<w:t xml:space="preserve">"#);
            } else {
                xml.push_str("<w:t>");
            }
            xml.push_str(&escape_xml(segment));
            xml.push_str("</w:t>");
        }
    }
}

fn is_xml_char(c: char) -> bool {
    match c {
        '\t' | '\n' | '\r' => true,
        '\u{FFFE}' | '\u{FFFF}' => false,
        c => !c.is_ascii_control() || c == '\u{7F}',
    }
}

fn write_section_properties(xml: &mut String) {
    xml.push_str("<w:sectPr>");
    xml.push_str(&format!(r#"<w:pgSz w:w="{}" w:h="{}"/>"#, PAGE_WIDTH, PAGE_HEIGHT));
    xml.push_str(&format!(
        r#"<w:pgMar w:top="{m}" w:right="{m}" w:bottom="{m}" w:left="{m}" w:header="708" w:footer="708" w:gutter="0"/>"#,
        m = PAGE_MARGIN
    ));
    xml.push_str("</w:sectPr>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use assessment_model::{Assessment, AssessmentInput, Question, QuestionType};

    fn write(assessment: &Assessment) -> String {
        let content = AssessmentContent::build(assessment).unwrap();
        DocumentWriter::new(&DocxSettings::default()).write(&content)
    }

    #[test]
    fn test_title_paragraph() {
        let input = AssessmentInput::new("Fish & Chips", QuestionType::ShortAnswer, 0);
        let xml = write(&Assessment::new(input, Vec::new()));

        assert!(xml.contains(
            r#"<w:p><w:r><w:rPr><w:sz w:val="48"/><w:szCs w:val="48"/></w:rPr><w:t>The below assessment has 0 Short Answer question(s) on the topic &apos;Fish &amp; Chips&apos;.</w:t></w:r></w:p>"#
        ));
        assert!(xml.ends_with("</w:sectPr></w:body></w:document>"));
    }

    #[test]
    fn test_question_formatting() {
        let input = AssessmentInput::new("Geography", QuestionType::Mcq, 2);
        let questions = vec![
            Question::multiple_choice("Capital?", ["Paris", "Rome"], 1).unwrap(),
            Question::multiple_choice("River?", ["Seine"], 0).unwrap(),
        ];
        let xml = write(&Assessment::new(input, questions));

        assert!(xml.contains(
            r#"<w:p><w:pPr><w:spacing w:before="200" w:after="100"/></w:pPr><w:r><w:rPr><w:b/><w:bCs/><w:sz w:val="24"/><w:szCs w:val="24"/></w:rPr><w:t>Question 1: Capital?</w:t></w:r></w:p>"#
        ));
        assert!(xml.contains(
            r#"<w:p><w:r><w:rPr><w:sz w:val="22"/><w:szCs w:val="22"/></w:rPr><w:t>a) Paris</w:t></w:r></w:p>"#
        ));
        assert!(xml.contains(
            r#"<w:p><w:pPr><w:spacing w:after="200"/></w:pPr><w:r><w:rPr><w:b/><w:bCs/><w:sz w:val="22"/><w:szCs w:val="22"/></w:rPr><w:t>Answer: b</w:t></w:r></w:p>"#
        ));

        let separator = r#"<w:p><w:pPr><w:spacing w:after="200"/></w:pPr><w:r><w:rPr><w:sz w:val="11"/><w:szCs w:val="11"/></w:rPr></w:r></w:p>"#;
        assert_eq!(xml.matches(separator).count(), 1);
    }

    #[test]
    fn test_documents_line_uses_default_size() {
        let input = AssessmentInput::new("T", QuestionType::Mcq, 0).with_documents(["a.pdf"]);
        let xml = write(&Assessment::new(input, Vec::new()));
        assert!(xml.contains("<w:p><w:r><w:t>The uploaded pdfs are: a.pdf</w:t></w:r></w:p>"));
    }

    #[test]
    fn test_write_text_special_cases() {
        let mut xml = String::new();
        write_text(&mut xml, " lead\tx\ny ");
        assert_eq!(
            xml,
            r#"<w:t xml:space="preserve"> lead</w:t><w:tab/><w:t>x</w:t><w:br/><w:t xml:space="preserve">y </w:t>"#
        );
    }

    #[test]
    fn test_control_characters_dropped() {
        let mut xml = String::new();
        write_text(&mut xml, "Form\u{0c}feed\u{01}\u{1b}!");
        assert_eq!(xml, "<w:t>Formfeed!</w:t>");

        let input = AssessmentInput::new("Form\u{0c}feed", QuestionType::ShortAnswer, 1);
        let question = Question::short_answer("Bell\u{07}?", "Null\u{00}byte");
        let xml = write(&Assessment::new(input, vec![question]));
        assert!(xml.contains("on the topic &apos;Formfeed&apos;."));
        assert!(xml.contains("<w:t>Question 1: Bell?</w:t>"));
        assert!(xml.contains("<w:t>Sample Answer: Nullbyte</w:t>"));
        assert!(!xml.contains(['\u{0c}', '\u{07}', '\u{00}']));
    }
}

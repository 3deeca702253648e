//! Format-neutral assessment content
//!
//! Both writers render the same sequence of lines. The header comes first:
//! the topic sentence, then the keywords line and the documents line when
//! present. Each question becomes a block of lines followed by a blank
//! spacer, and consecutive blocks are divided by an extra separator.

use assessment_model::{option_letter, Assessment, AssessmentInput, Question, QuestionKind, Result};
use layout_engine::FontFace;
use std::fmt;

/// Role of a line within the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineStyle {
    /// Topic sentence opening the header
    Title,
    Keywords,
    Documents,
    /// `Question {n}: ...`
    QuestionPrompt,
    /// `{letter}) ...`
    Option,
    SampleAnswer,
    /// `Answer: {letter}`
    AnswerKey,
}

impl LineStyle {
    pub fn is_bold(&self) -> bool {
        matches!(self, LineStyle::QuestionPrompt | LineStyle::AnswerKey)
    }

    pub fn face(&self) -> FontFace {
        if self.is_bold() {
            FontFace::Bold
        } else {
            FontFace::Regular
        }
    }
}

/// One line of text with its role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    pub text: String,
    pub style: LineStyle,
}

impl TextLine {
    pub fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Lines making up one question, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBlock {
    /// 1-based question number
    pub number: usize,
    pub lines: Vec<TextLine>,
}

/// An element of the flattened document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentItem<'a> {
    Line(&'a TextLine),
    /// Blank line closing a question block
    Spacer,
    /// Extra blank line between two question blocks
    Separator,
}

/// Header plus question blocks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentContent {
    pub header: Vec<TextLine>,
    pub questions: Vec<QuestionBlock>,
}

impl AssessmentContent {
    /// Build the content of `assessment`.
    ///
    /// Fails when a multiple choice question needs an option letter past `z`.
    pub fn build(assessment: &Assessment) -> Result<Self> {
        let questions = assessment
            .questions
            .iter()
            .enumerate()
            .map(|(index, question)| question_block(index, question))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            header: header_lines(&assessment.user_input),
            questions,
        })
    }

    /// Everything in document order
    pub fn items(&self) -> Vec<ContentItem<'_>> {
        let mut items: Vec<ContentItem<'_>> = self.header.iter().map(ContentItem::Line).collect();
        let count = self.questions.len();

        for (i, block) in self.questions.iter().enumerate() {
            items.extend(block.lines.iter().map(ContentItem::Line));
            items.push(ContentItem::Spacer);
            if i + 1 < count {
                items.push(ContentItem::Separator);
            }
        }
        items
    }

    /// Whether the block at `index` is followed by a separator
    pub fn has_separator_after(&self, index: usize) -> bool {
        index + 1 < self.questions.len()
    }
}

/// One line per item; spacers and separators print as blank lines
impl fmt::Display for AssessmentContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in self.items() {
            match item {
                ContentItem::Line(line) => writeln!(f, "{}", line.text)?,
                ContentItem::Spacer | ContentItem::Separator => writeln!(f)?,
            }
        }
        Ok(())
    }
}

/// Header lines for `input`
pub fn header_lines(input: &AssessmentInput) -> Vec<TextLine> {
    let mut lines = vec![TextLine::new(
        format!(
            "The below assessment has {} {} question(s) on the topic '{}'.",
            input.num_questions, input.question_type, input.topic
        ),
        LineStyle::Title,
    )];

    if let Some(keywords) = input.keywords() {
        lines.push(TextLine::new(
            format!("In reference to these contextual keywords: {keywords}"),
            LineStyle::Keywords,
        ));
    }

    if !input.source_documents.is_empty() {
        lines.push(TextLine::new(
            format!("The uploaded pdfs are: {}", input.source_documents.join(", ")),
            LineStyle::Documents,
        ));
    }

    lines
}

/// Lines for the question at 0-based `index`
pub fn question_block(index: usize, question: &Question) -> Result<QuestionBlock> {
    let number = index + 1;
    let mut lines = vec![TextLine::new(
        format!("Question {}: {}", number, question.text()),
        LineStyle::QuestionPrompt,
    )];

    match question.kind() {
        QuestionKind::FreeResponse { sample_answer, .. } => {
            lines.push(TextLine::new(
                format!("Sample Answer: {sample_answer}"),
                LineStyle::SampleAnswer,
            ));
        }
        QuestionKind::MultipleChoice { options, correct_index } => {
            for (j, option) in options.iter().enumerate() {
                lines.push(TextLine::new(
                    format!("{}) {}", option_letter(j)?, option),
                    LineStyle::Option,
                ));
            }
            lines.push(TextLine::new(
                format!("Answer: {}", option_letter(*correct_index)?),
                LineStyle::AnswerKey,
            ));
        }
    }

    Ok(QuestionBlock { number, lines })
}

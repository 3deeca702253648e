//! Question types
//!
//! A question is either multiple choice (options plus the index of the
//! correct one) or free response (a sample answer). The two shapes are
//! separate variants, so a multiple choice question without options, or
//! with a correct answer outside its options, cannot be built.

use crate::letter::{option_letter, parse_option_label};
use crate::{ModelError, QuestionType, Result};
use serde::{Deserialize, Serialize};

/// Expected length of a free-response answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnswerLength {
    Short,
    Long,
}

/// The answer part of a question
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionKind {
    MultipleChoice {
        options: Vec<String>,
        correct_index: usize,
    },
    FreeResponse {
        length: AnswerLength,
        sample_answer: String,
    },
}

/// A single generated question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WireQuestion", into = "WireQuestion")]
pub struct Question {
    text: String,
    kind: QuestionKind,
}

impl Question {
    /// Create a multiple choice question
    pub fn multiple_choice<I, S>(text: impl Into<String>, options: I, correct_index: usize) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        if options.is_empty() {
            return Err(ModelError::NoOptions);
        }
        if correct_index >= options.len() {
            return Err(ModelError::CorrectAnswerOutOfRange {
                index: correct_index,
                count: options.len(),
            });
        }

        Ok(Self {
            text: text.into(),
            kind: QuestionKind::MultipleChoice { options, correct_index },
        })
    }

    /// Create a short answer question
    pub fn short_answer(text: impl Into<String>, sample_answer: impl Into<String>) -> Self {
        Self::free_response(text, AnswerLength::Short, sample_answer)
    }

    /// Create a long answer question
    pub fn long_answer(text: impl Into<String>, sample_answer: impl Into<String>) -> Self {
        Self::free_response(text, AnswerLength::Long, sample_answer)
    }

    fn free_response(text: impl Into<String>, length: AnswerLength, sample_answer: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: QuestionKind::FreeResponse {
                length,
                sample_answer: sample_answer.into(),
            },
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    pub fn is_multiple_choice(&self) -> bool {
        matches!(self.kind, QuestionKind::MultipleChoice { .. })
    }

    /// The question type this question belongs to
    pub fn question_type(&self) -> QuestionType {
        match self.kind {
            QuestionKind::MultipleChoice { .. } => QuestionType::Mcq,
            QuestionKind::FreeResponse { length: AnswerLength::Short, .. } => QuestionType::ShortAnswer,
            QuestionKind::FreeResponse { length: AnswerLength::Long, .. } => QuestionType::LongAnswer,
        }
    }

    /// Letter of the correct option, for multiple choice questions
    pub fn answer_letter(&self) -> Option<Result<char>> {
        match &self.kind {
            QuestionKind::MultipleChoice { correct_index, .. } => Some(option_letter(*correct_index)),
            QuestionKind::FreeResponse { .. } => None,
        }
    }

    /// Replace the question text. Returns whether anything changed.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        replace_if_changed(&mut self.text, text.into())
    }

    /// Replace the sample answer of a free-response question
    pub fn set_sample_answer(&mut self, answer: impl Into<String>) -> Result<bool> {
        match &mut self.kind {
            QuestionKind::FreeResponse { sample_answer, .. } => Ok(replace_if_changed(sample_answer, answer.into())),
            QuestionKind::MultipleChoice { .. } => Err(ModelError::InvalidOperation(
                "multiple choice questions have no sample answer".to_string(),
            )),
        }
    }

    /// Replace the text of an existing option
    pub fn set_option(&mut self, question_number: usize, index: usize, text: impl Into<String>) -> Result<bool> {
        let QuestionKind::MultipleChoice { options, .. } = &mut self.kind else {
            return Err(ModelError::InvalidOperation(
                "free-response questions have no options".to_string(),
            ));
        };
        let option = options.get_mut(index).ok_or(ModelError::OptionNotFound {
            question: question_number,
            option: index,
        })?;
        Ok(replace_if_changed(option, text.into()))
    }

    /// Change which option is correct
    pub fn set_correct_index(&mut self, index: usize) -> Result<bool> {
        let QuestionKind::MultipleChoice { options, correct_index } = &mut self.kind else {
            return Err(ModelError::InvalidOperation(
                "free-response questions have no correct option".to_string(),
            ));
        };
        if index >= options.len() {
            return Err(ModelError::CorrectAnswerOutOfRange {
                index,
                count: options.len(),
            });
        }
        Ok(replace_if_changed(correct_index, index))
    }
}

fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

/// Option id as the backend sends it: an index or a label such as `"b)"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionId {
    Index(i64),
    Label(String),
}

impl OptionId {
    pub fn to_index(&self) -> Result<usize> {
        match self {
            OptionId::Index(n) => usize::try_from(*n).map_err(|_| ModelError::InvalidOptionId(n.to_string())),
            OptionId::Label(label) => parse_option_label(label),
        }
    }
}

/// Question as it appears in backend JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WireQuestion {
    question_type: String,
    question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    correct_answer: Option<OptionId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sample_answer: Option<String>,
}

impl TryFrom<WireQuestion> for Question {
    type Error = ModelError;

    fn try_from(wire: WireQuestion) -> Result<Self> {
        let tag = wire.question_type.to_lowercase();

        if tag.contains("mcq") {
            let options = wire.options.ok_or(ModelError::MissingField("options"))?;
            let correct = wire
                .correct_answer
                .ok_or(ModelError::MissingField("correct_answer"))?
                .to_index()?;
            return Question::multiple_choice(wire.question, options, correct);
        }

        let length = if tag.contains("short") {
            AnswerLength::Short
        } else if tag.contains("long") {
            AnswerLength::Long
        } else {
            return Err(ModelError::InvalidQuestionType(wire.question_type));
        };
        let sample_answer = wire.sample_answer.ok_or(ModelError::MissingField("sample_answer"))?;

        Ok(Question::free_response(wire.question, length, sample_answer))
    }
}

impl From<Question> for WireQuestion {
    fn from(question: Question) -> Self {
        let question_type = question.question_type().as_str().to_string();
        match question.kind {
            QuestionKind::MultipleChoice { options, correct_index } => WireQuestion {
                question_type,
                question: question.text,
                options: Some(options),
                correct_answer: Some(OptionId::Index(correct_index as i64)),
                sample_answer: None,
            },
            QuestionKind::FreeResponse { sample_answer, .. } => WireQuestion {
                question_type,
                question: question.text,
                options: None,
                correct_answer: None,
                sample_answer: Some(sample_answer),
            },
        }
    }
}

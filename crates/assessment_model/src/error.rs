//! Error types for assessment model operations

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("Option index {0} has no letter (only a-z are available)")]
    OptionIndexOutOfRange(usize),

    #[error("Invalid option id: {0}")]
    InvalidOptionId(String),

    #[error("Multiple choice question needs at least one option")]
    NoOptions,

    #[error("Correct answer {index} is not one of the {count} options")]
    CorrectAnswerOutOfRange { index: usize, count: usize },

    #[error("Invalid question type: {0}")]
    InvalidQuestionType(String),

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Question {0} does not exist")]
    QuestionNotFound(usize),

    #[error("Option {option} does not exist on question {question}")]
    OptionNotFound { question: usize, option: usize },

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Assessment has no record id")]
    MissingRecordId,

    #[error("No changes to save")]
    NothingToSave,
}

pub type Result<T> = std::result::Result<T, ModelError>;

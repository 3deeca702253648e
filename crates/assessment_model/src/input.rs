//! User input that an assessment was generated from

use crate::{ModelError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Kind of questions requested for an assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum QuestionType {
    /// Multiple choice
    Mcq,
    /// Short answer (free response)
    ShortAnswer,
    /// Long answer (free response)
    LongAnswer,
}

impl QuestionType {
    /// Name used in headers and on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Mcq => "MCQ",
            QuestionType::ShortAnswer => "Short Answer",
            QuestionType::LongAnswer => "Long Answer",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "mcq" => Ok(QuestionType::Mcq),
            "sa" | "short answer" => Ok(QuestionType::ShortAnswer),
            "la" | "long answer" => Ok(QuestionType::LongAnswer),
            _ => Err(ModelError::InvalidQuestionType(s.to_string())),
        }
    }
}

impl TryFrom<String> for QuestionType {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<QuestionType> for String {
    fn from(value: QuestionType) -> Self {
        value.as_str().to_string()
    }
}

/// Topic and configuration submitted by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentInput {
    pub topic: String,
    pub question_type: QuestionType,
    pub num_questions: u32,
    /// Extra keywords steering generation; an empty string on the wire means none
    #[serde(
        default,
        serialize_with = "serialize_keywords",
        deserialize_with = "deserialize_keywords"
    )]
    pub context_keywords: Option<String>,
    /// Names of the uploaded source documents
    #[serde(rename = "pdfs", default)]
    pub source_documents: Vec<String>,
}

impl AssessmentInput {
    pub fn new(topic: impl Into<String>, question_type: QuestionType, num_questions: u32) -> Self {
        Self {
            topic: topic.into(),
            question_type,
            num_questions,
            context_keywords: None,
            source_documents: Vec::new(),
        }
    }

    /// Set the context keywords. An empty string is treated as absent.
    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        let keywords = keywords.into();
        self.context_keywords = (!keywords.is_empty()).then_some(keywords);
        self
    }

    pub fn with_documents<I, S>(mut self, documents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source_documents = documents.into_iter().map(Into::into).collect();
        self
    }

    /// Keywords, if any were supplied
    pub fn keywords(&self) -> Option<&str> {
        self.context_keywords
            .as_deref()
            .filter(|k| !k.is_empty())
    }
}

fn serialize_keywords<S: Serializer>(value: &Option<String>, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(value.as_deref().unwrap_or(""))
}

fn deserialize_keywords<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Option<String>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|k| !k.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_type_aliases() {
        assert_eq!("MCQ".parse::<QuestionType>(), Ok(QuestionType::Mcq));
        assert_eq!("sa".parse::<QuestionType>(), Ok(QuestionType::ShortAnswer));
        assert_eq!("LA".parse::<QuestionType>(), Ok(QuestionType::LongAnswer));
        assert_eq!("Long Answer".parse::<QuestionType>(), Ok(QuestionType::LongAnswer));
        assert!("essay".parse::<QuestionType>().is_err());
    }

    #[test]
    fn test_input_from_wire() {
        let json = r#"{
            "topic": "Photosynthesis",
            "question_type": "sa",
            "num_questions": 3,
            "context_keywords": "",
            "pdfs": ["notes.pdf"]
        }"#;
        let input: AssessmentInput = serde_json::from_str(json).unwrap();

        assert_eq!(input.topic, "Photosynthesis");
        assert_eq!(input.question_type, QuestionType::ShortAnswer);
        assert_eq!(input.num_questions, 3);
        assert_eq!(input.keywords(), None);
        assert_eq!(input.source_documents, vec!["notes.pdf".to_string()]);
    }

    #[test]
    fn test_input_missing_optional_fields() {
        let json = r#"{"topic": "Rust", "question_type": "MCQ", "num_questions": 1}"#;
        let input: AssessmentInput = serde_json::from_str(json).unwrap();
        assert!(input.context_keywords.is_none());
        assert!(input.source_documents.is_empty());
    }

    #[test]
    fn test_input_to_wire() {
        let input = AssessmentInput::new("Rust", QuestionType::LongAnswer, 2);
        let value = serde_json::to_value(&input).unwrap();

        assert_eq!(value["question_type"], "Long Answer");
        assert_eq!(value["context_keywords"], "");
        assert_eq!(value["pdfs"], serde_json::json!([]));
    }

    #[test]
    fn test_empty_keywords_are_absent() {
        let input = AssessmentInput::new("Rust", QuestionType::Mcq, 1).with_keywords("");
        assert_eq!(input.keywords(), None);

        let input = input.with_keywords("ownership");
        assert_eq!(input.keywords(), Some("ownership"));
    }

    #[test]
    fn test_whitespace_keywords_match_wire() {
        let built = AssessmentInput::new("Rust", QuestionType::Mcq, 1).with_keywords("  ");
        let decoded: AssessmentInput = serde_json::from_str(
            r#"{"topic": "Rust", "question_type": "MCQ", "num_questions": 1, "context_keywords": "  "}"#,
        )
        .unwrap();

        assert_eq!(built.keywords(), Some("  "));
        assert_eq!(built.keywords(), decoded.keywords());
    }
}

//! Assessment records as stored and exchanged by the backend

use crate::{AssessmentInput, Question};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp format used for `last_modified`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Backend record identifier, written as `{"$oid": "..."}` on the wire
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "WireId", into = "WireId")]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum WireId {
    Extended {
        #[serde(rename = "$oid")]
        oid: String,
    },
    Plain(String),
}

impl From<WireId> for RecordId {
    fn from(wire: WireId) -> Self {
        match wire {
            WireId::Extended { oid } => RecordId(oid),
            WireId::Plain(id) => RecordId(id),
        }
    }
}

impl From<RecordId> for WireId {
    fn from(id: RecordId) -> Self {
        WireId::Extended { oid: id.0 }
    }
}

/// User input plus the ordered questions generated for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub user_input: AssessmentInput,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Assessment {
    pub fn new(user_input: AssessmentInput, questions: Vec<Question>) -> Self {
        Self { user_input, questions }
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

/// An assessment together with its storage metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "timestamp")]
    pub last_modified: Option<NaiveDateTime>,
    #[serde(flatten)]
    pub assessment: Assessment,
}

impl AssessmentRecord {
    /// A record that has never been saved
    pub fn unsaved(assessment: Assessment) -> Self {
        Self {
            id: None,
            last_modified: None,
            assessment,
        }
    }

    pub fn topic(&self) -> &str {
        &self.assessment.user_input.topic
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Parse a history listing (a JSON array of records)
pub fn parse_history(json: &str) -> serde_json::Result<Vec<AssessmentRecord>> {
    serde_json::from_str(json)
}

/// What the backend answers to a save request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveResponse {
    #[serde(rename = "_id")]
    pub id: RecordId,
    #[serde(with = "timestamp::required")]
    pub last_modified: NaiveDateTime,
}

mod timestamp {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(ts) => serializer.serialize_str(&ts.format(TIMESTAMP_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom))
            .transpose()
    }

    pub mod required {
        use super::TIMESTAMP_FORMAT;
        use chrono::NaiveDateTime;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&value.format(TIMESTAMP_FORMAT).to_string())
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
            let raw = String::deserialize(deserializer)?;
            NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
        }
    }
}

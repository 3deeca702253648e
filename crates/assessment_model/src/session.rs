//! Edit sessions
//!
//! An [`EditSession`] keeps the record as it was loaded next to a working
//! copy. Every edit that actually changes a value sets the dirty bit. Saving
//! is prepared explicitly, either as a new copy or as an overwrite of the
//! loaded record.

use crate::{AssessmentRecord, ModelError, Question, Result, SaveResponse};

/// How a save should treat the existing record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    /// Store the edits as a new record, leaving the loaded one untouched
    Copy,
    /// Replace the loaded record
    Overwrite,
}

/// Body of a save request
#[derive(Debug, Clone, PartialEq)]
pub struct SaveRequest {
    pub mode: SaveMode,
    pub record: AssessmentRecord,
}

impl SaveRequest {
    /// JSON body for the backend. Copies carry no `_id`.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        self.record.to_json_pretty()
    }
}

/// A loaded assessment being edited
#[derive(Debug, Clone)]
pub struct EditSession {
    snapshot: AssessmentRecord,
    current: AssessmentRecord,
    dirty: bool,
}

impl EditSession {
    pub fn new(record: AssessmentRecord) -> Self {
        Self {
            current: record.clone(),
            snapshot: record,
            dirty: false,
        }
    }

    /// The record as it was loaded (or last committed)
    pub fn snapshot(&self) -> &AssessmentRecord {
        &self.snapshot
    }

    /// The record including all edits
    pub fn current(&self) -> &AssessmentRecord {
        &self.current
    }

    /// True once any edit changed a value
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// True when the working copy differs from the snapshot
    pub fn has_changes(&self) -> bool {
        self.current != self.snapshot
    }

    pub fn set_question_text(&mut self, index: usize, text: impl Into<String>) -> Result<bool> {
        let changed = self.question_mut(index)?.set_text(text);
        Ok(self.track(changed))
    }

    pub fn set_sample_answer(&mut self, index: usize, answer: impl Into<String>) -> Result<bool> {
        let changed = self.question_mut(index)?.set_sample_answer(answer)?;
        Ok(self.track(changed))
    }

    pub fn set_option(&mut self, index: usize, option: usize, text: impl Into<String>) -> Result<bool> {
        let changed = self.question_mut(index)?.set_option(index, option, text)?;
        Ok(self.track(changed))
    }

    pub fn set_correct_answer(&mut self, index: usize, option: usize) -> Result<bool> {
        let changed = self.question_mut(index)?.set_correct_index(option)?;
        Ok(self.track(changed))
    }

    /// Build the save request for `mode`.
    ///
    /// Overwriting needs a record id and a working copy that differs from
    /// the snapshot.
    pub fn prepare_save(&self, mode: SaveMode) -> Result<SaveRequest> {
        let mut record = self.current.clone();
        match mode {
            SaveMode::Copy => {
                record.id = None;
            }
            SaveMode::Overwrite => {
                if record.id.is_none() {
                    return Err(ModelError::MissingRecordId);
                }
                if !self.has_changes() {
                    return Err(ModelError::NothingToSave);
                }
            }
        }
        Ok(SaveRequest { mode, record })
    }

    /// Adopt the backend's answer to a save; the working copy becomes the snapshot
    pub fn commit(&mut self, response: SaveResponse) {
        self.current.id = Some(response.id);
        self.current.last_modified = Some(response.last_modified);
        self.snapshot = self.current.clone();
        self.dirty = false;
    }

    /// Drop all edits
    pub fn revert(&mut self) {
        self.current = self.snapshot.clone();
        self.dirty = false;
    }

    fn question_mut(&mut self, index: usize) -> Result<&mut Question> {
        self.current
            .assessment
            .questions
            .get_mut(index)
            .ok_or(ModelError::QuestionNotFound(index))
    }

    fn track(&mut self, changed: bool) -> bool {
        self.dirty |= changed;
        changed
    }
}

//! Assessment Model - Records, questions, edits and history
//!
//! This crate models generated assessments the way the assessment backend
//! exchanges them (JSON records), with typed questions, an edit session that
//! tracks unsaved changes, and history queries over saved records.

mod error;
mod input;
mod letter;
mod question;
mod record;
pub mod history;
pub mod session;

pub use error::*;
pub use input::*;
pub use letter::*;
pub use question::*;
pub use record::*;
pub use history::{remove_record, HistoryPage, HistoryQuery, SortOrder};
pub use session::{EditSession, SaveMode, SaveRequest};

//! Doc Export - Assessment export to DOCX and PDF
//!
//! An assessment is first turned into format-neutral [`AssessmentContent`]
//! (header lines plus one block per question). The DOCX writer maps that
//! content onto paragraphs with declarative spacing; the PDF writer wraps
//! and paginates it with `layout_engine`.
//!
//! Both writers are deterministic: the same assessment and settings always
//! produce byte-identical output.

mod api;
mod content;
mod error;
mod file_io;
mod format;
mod settings;

pub mod docx;
pub mod pdf;

pub use api::*;
pub use content::*;
pub use error::*;
pub use file_io::*;
pub use format::*;
pub use settings::*;

//! DOCX Export Module
//!
//! A DOCX file is a ZIP archive of XML parts:
//! - `[Content_Types].xml` - Content type definitions
//! - `_rels/.rels` - Root relationships
//! - `word/document.xml` - Main document content
//! - `word/styles.xml` - Style definitions
//! - `word/settings.xml` - Document settings
//! - `word/_rels/document.xml.rels` - Document relationships
//!
//! Assessments map onto a flat list of paragraphs, so no page measurement
//! happens here.

mod content_types;
mod document_writer;
mod error;
mod relationships;
mod styles_writer;
mod writer;

pub use content_types::{create_default_content_types, ContentTypes};
pub use document_writer::DocumentWriter;
pub use error::{DocxError, DocxResult};
pub use relationships::{create_document_rels, create_root_rels, Relationship, Relationships};
pub use styles_writer::StylesWriter;
pub use writer::{generate_settings_xml, write_docx, DocxWriter};

/// XML namespaces used in DOCX files
pub mod namespaces {
    /// Main WordprocessingML namespace
    pub const W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
    /// Relationships namespace
    pub const R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
    /// Package relationships namespace
    pub const PKG_REL: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
    /// Content types namespace
    pub const CT: &str = "http://schemas.openxmlformats.org/package/2006/content-types";
}

/// Relationship types used in DOCX
pub mod relationship_types {
    pub const DOCUMENT: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
    pub const STYLES: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
    pub const SETTINGS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/settings";
}

/// Content types for DOCX parts
pub mod content_type_values {
    pub const DOCUMENT: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
    pub const STYLES: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml";
    pub const SETTINGS: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.settings+xml";
    pub const RELATIONSHIPS: &str = "application/vnd.openxmlformats-package.relationships+xml";
    pub const XML: &str = "application/xml";
}

/// Escape text for use in XML content and attribute values
pub(crate) fn escape_xml(s: &str) -> String {
    quick_xml::escape::escape(s).into_owned()
}

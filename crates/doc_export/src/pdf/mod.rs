//! PDF Export Module
//!
//! - `objects`: PDF object model (Dictionary, Array, Stream, Reference)
//! - `document`: Document structure (Catalog, Pages, Info)
//! - `content`: Content stream generation
//! - `fonts`: Standard fonts and WinAnsi encoding
//! - `renderer`: Wraps and paginates assessment content
//! - `writer`: File structure, xref table and compression

mod content;
mod document;
mod fonts;
mod objects;
mod renderer;
mod writer;

pub use content::ContentStream;
pub use document::{create_catalog, create_page, create_pages, DocumentInfo, PDF_VERSION};
pub use fonts::{create_standard_font_dict, encode_win_ansi, StandardFont};
pub use objects::{PdfDictionary, PdfObject, PdfSerializer, PdfStream};
pub use renderer::{PdfLayout, PdfRenderer, PlacedLine, RenderedPage};
pub use writer::{PdfDocumentWriter, PdfError, PdfResult, PdfWriter};

use crate::{AssessmentContent, PdfSettings, Result};

/// Lay out `content` and write it as PDF bytes
pub fn write_pdf(content: &AssessmentContent, settings: &PdfSettings, info: &DocumentInfo) -> Result<Vec<u8>> {
    let pages = PdfRenderer::new(settings).render(content)?;
    tracing::trace!(pages = pages.len(), "rendered pdf pages");

    let bytes = PdfDocumentWriter::new(settings.compress).write(pages, info, Vec::new())?;
    Ok(bytes)
}

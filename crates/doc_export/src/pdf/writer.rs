//! PDF Writer
//!
//! File structure (header, body, xref, trailer), object numbering and
//! stream compression.

use super::document::{create_catalog, create_page, create_pages, DocumentInfo, PDF_VERSION};
use super::fonts::{create_standard_font_dict, StandardFont};
use super::objects::{PdfDictionary, PdfObject, PdfSerializer, PdfStream};
use super::renderer::RenderedPage;
use std::collections::BTreeSet;
use std::io::{self, Write};
use thiserror::Error;

/// Error type for PDF operations
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("Compression error: {0}")]
    Compression(String),
}

pub type PdfResult<T> = std::result::Result<T, PdfError>;

#[derive(Debug)]
struct ObjectEntry {
    obj_num: u32,
    gen_num: u16,
    /// Byte offset in the file
    offset: u64,
}

/// Low-level PDF file writer
pub struct PdfWriter<W: Write> {
    writer: W,
    position: u64,
    objects: Vec<ObjectEntry>,
    next_obj_num: u32,
    compress: bool,
}

impl<W: Write> PdfWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            position: 0,
            objects: Vec::new(),
            next_obj_num: 1,
            compress: true,
        }
    }

    /// Set whether to compress streams
    pub fn set_compression(&mut self, compress: bool) {
        self.compress = compress;
    }

    fn write_bytes(&mut self, data: &[u8]) -> PdfResult<()> {
        self.writer.write_all(data)?;
        self.position += data.len() as u64;
        Ok(())
    }

    fn write_str(&mut self, s: &str) -> PdfResult<()> {
        self.write_bytes(s.as_bytes())
    }

    /// Allocate a new object number
    pub fn allocate_object(&mut self) -> u32 {
        let num = self.next_obj_num;
        self.next_obj_num += 1;
        num
    }

    /// Write the PDF header
    pub fn write_header(&mut self) -> PdfResult<()> {
        self.write_str(&format!("%PDF-{PDF_VERSION}\n"))?;
        // binary marker
        self.write_bytes(&[b'%', 0xE2, 0xE3, 0xCF, 0xD3, b'\n'])?;
        Ok(())
    }

    /// Write an indirect object
    pub fn write_object(&mut self, obj_num: u32, object: &PdfObject) -> PdfResult<()> {
        let offset = self.position;

        self.write_str(&format!("{} 0 obj\n", obj_num))?;
        let mut serializer = PdfSerializer::new(Vec::new());
        serializer.write_object(object)?;
        self.write_bytes(&serializer.into_inner())?;
        self.write_str("\nendobj\n")?;

        self.objects.push(ObjectEntry {
            obj_num,
            gen_num: 0,
            offset,
        });
        Ok(())
    }

    /// Write a stream object, compressing it if enabled
    pub fn write_stream_object(&mut self, obj_num: u32, mut stream: PdfStream) -> PdfResult<()> {
        if self.compress && !stream.compressed {
            stream = compress_stream(stream)?;
        }
        stream.dict.insert("Length", PdfObject::Integer(stream.data.len() as i64));

        self.write_object(obj_num, &PdfObject::Stream(stream))
    }

    /// Write the cross-reference table and trailer
    pub fn write_xref_and_trailer(&mut self, catalog_ref: u32, info_ref: Option<u32>) -> PdfResult<()> {
        let xref_offset = self.position;

        self.objects.sort_by_key(|e| e.obj_num);
        let entries: Vec<_> = self.objects.iter().map(|e| (e.obj_num, e.offset, e.gen_num)).collect();

        self.write_str("xref\n")?;
        self.write_str(&format!("0 {}\n", self.next_obj_num))?;
        self.write_str("0000000000 65535 f \n")?;

        let mut expected_num = 1u32;
        for (obj_num, offset, gen_num) in entries {
            while expected_num < obj_num {
                self.write_str("0000000000 65535 f \n")?;
                expected_num += 1;
            }
            self.write_str(&format!("{:010} {:05} n \n", offset, gen_num))?;
            expected_num = obj_num + 1;
        }

        self.write_str("trailer\n")?;

        let mut trailer = PdfDictionary::new();
        trailer.insert("Size", PdfObject::Integer(i64::from(self.next_obj_num)));
        trailer.insert("Root", PdfObject::reference(catalog_ref));
        if let Some(info) = info_ref {
            trailer.insert("Info", PdfObject::reference(info));
        }

        let mut serializer = PdfSerializer::new(Vec::new());
        serializer.write_object(&PdfObject::Dictionary(trailer))?;
        self.write_bytes(&serializer.into_inner())?;
        self.write_str("\n")?;

        self.write_str("startxref\n")?;
        self.write_str(&format!("{}\n", xref_offset))?;
        self.write_str("%%EOF\n")?;

        Ok(())
    }

    /// Flush and return the inner writer
    pub fn finish(mut self) -> PdfResult<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

fn compress_stream(mut stream: PdfStream) -> PdfResult<PdfStream> {
    use flate2::write::ZlibEncoder;
    use flate2::Compression;

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(&stream.data)
        .map_err(|e| PdfError::Compression(e.to_string()))?;
    stream.data = encoder.finish().map_err(|e| PdfError::Compression(e.to_string()))?;
    stream.compressed = true;
    stream.dict.insert("Filter", PdfObject::name("FlateDecode"));

    Ok(stream)
}

/// Writes rendered pages as a complete PDF file
pub struct PdfDocumentWriter {
    compress: bool,
}

impl PdfDocumentWriter {
    pub fn new(compress: bool) -> Self {
        Self { compress }
    }

    /// Write a complete PDF document and return the writer
    pub fn write<W: Write>(&self, pages: Vec<RenderedPage>, info: &DocumentInfo, writer: W) -> PdfResult<W> {
        if pages.is_empty() {
            return Err(PdfError::InvalidDocument("No pages to export".to_string()));
        }

        let mut pdf = PdfWriter::new(writer);
        pdf.set_compression(self.compress);
        pdf.write_header()?;

        let catalog_ref = pdf.allocate_object();
        let pages_ref = pdf.allocate_object();
        let info_ref = pdf.allocate_object();

        let used_fonts: BTreeSet<StandardFont> = pages.iter().flat_map(|p| p.fonts.iter().copied()).collect();
        let font_refs: Vec<(StandardFont, u32)> = used_fonts
            .into_iter()
            .map(|font| (font, pdf.allocate_object()))
            .collect();

        let page_refs: Vec<(u32, u32)> = pages
            .iter()
            .map(|_| (pdf.allocate_object(), pdf.allocate_object()))
            .collect();

        pdf.write_object(catalog_ref, &PdfObject::Dictionary(create_catalog(pages_ref)))?;

        let kids: Vec<u32> = page_refs.iter().map(|(page_ref, _)| *page_ref).collect();
        pdf.write_object(pages_ref, &PdfObject::Dictionary(create_pages(&kids)))?;

        pdf.write_object(info_ref, &PdfObject::Dictionary(info.to_dictionary()))?;

        for (font, font_ref) in &font_refs {
            pdf.write_object(*font_ref, &PdfObject::Dictionary(create_standard_font_dict(*font)))?;
        }

        for (page, (page_ref, content_ref)) in pages.into_iter().zip(page_refs) {
            let page_dict = create_page(
                pages_ref,
                content_ref,
                f64::from(page.width),
                f64::from(page.height),
                &font_refs,
            );
            pdf.write_object(page_ref, &PdfObject::Dictionary(page_dict))?;
            pdf.write_stream_object(content_ref, PdfStream::new(page.content.into_bytes()))?;
        }

        pdf.write_xref_and_trailer(catalog_ref, Some(info_ref))?;
        pdf.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::ContentStream;

    fn page(text: &str) -> RenderedPage {
        let mut content = ContentStream::new();
        content.begin_text().set_font("F1", 12.0).move_text(72.0, 720.0).show_text(text).end_text();
        RenderedPage {
            width: 595.0,
            height: 842.0,
            content,
            fonts: [StandardFont::Helvetica].into_iter().collect(),
        }
    }

    #[test]
    fn test_pdf_header() {
        let mut pdf = PdfWriter::new(Vec::new());
        pdf.write_header().unwrap();
        let output = pdf.finish().unwrap();
        assert!(output.starts_with(b"%PDF-1.4\n"));
    }

    #[test]
    fn test_document_structure() {
        let output = PdfDocumentWriter::new(false)
            .write(vec![page("Hello"), page("World")], &DocumentInfo::new(), Vec::new())
            .unwrap();
        let text = String::from_utf8_lossy(&output);

        assert!(text.starts_with("%PDF-1.4"));
        assert!(text.trim_end().ends_with("%%EOF"));
        assert!(text.contains("/Count 2"));
        assert!(text.contains("/BaseFont /Helvetica"));
        assert!(!text.contains("Helvetica-Bold"));
        assert!(text.contains("(Hello) Tj"));
        assert!(text.contains("(World) Tj"));
        assert!(!text.contains("FlateDecode"));
    }

    #[test]
    fn test_xref_offsets() {
        let output = PdfDocumentWriter::new(true)
            .write(vec![page("Hello")], &DocumentInfo::new(), Vec::new())
            .unwrap();
        let startxref = output.windows(10).rposition(|w| w == b"startxref\n").unwrap();
        let tail = std::str::from_utf8(&output[startxref + 10..]).unwrap();
        let offset: usize = tail.lines().next().unwrap().parse().unwrap();
        assert!(output[offset..].starts_with(b"xref\n"));

        // catalog is object 1
        let xref = std::str::from_utf8(&output[offset..]).unwrap();
        let entry = xref.lines().nth(3).unwrap();
        let catalog_offset: usize = entry[..10].parse().unwrap();
        assert!(output[catalog_offset..].starts_with(b"1 0 obj"));
        assert!(output.windows(20).any(|w| w == b"/Filter /FlateDecode"));
    }

    #[test]
    fn test_no_pages() {
        let result = PdfDocumentWriter::new(true).write(Vec::new(), &DocumentInfo::new(), Vec::new());
        assert!(matches!(result, Err(PdfError::InvalidDocument(_))));
    }
}

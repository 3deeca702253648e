//! PDF Content Stream Generation
//!
//! Builder for page content streams. Only the text operators are needed:
//!
//! - BT/ET: Begin/End text object
//! - Tf: Set font and size
//! - Td: Move text position
//! - Tm: Set text matrix
//! - Tj: Show text string

use std::io::Write;

/// Content stream builder
#[derive(Debug, Default)]
pub struct ContentStream {
    data: Vec<u8>,
}

impl ContentStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Begin a text object (BT)
    pub fn begin_text(&mut self) -> &mut Self {
        self.write_line("BT");
        self
    }

    /// End a text object (ET)
    pub fn end_text(&mut self) -> &mut Self {
        self.write_line("ET");
        self
    }

    /// Set the font and size (Tf)
    pub fn set_font(&mut self, font_name: &str, size: f64) -> &mut Self {
        self.write_fmt(format_args!("/{} {} Tf\n", font_name, fmt_num(size)));
        self
    }

    /// Move text position (Td)
    pub fn move_text(&mut self, tx: f64, ty: f64) -> &mut Self {
        self.write_fmt(format_args!("{} {} Td\n", fmt_num(tx), fmt_num(ty)));
        self
    }

    /// Set the text matrix (Tm)
    pub fn set_text_matrix(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> &mut Self {
        self.write_fmt(format_args!(
            "{} {} {} {} {} {} Tm\n",
            fmt_num(a),
            fmt_num(b),
            fmt_num(c),
            fmt_num(d),
            fmt_num(e),
            fmt_num(f)
        ));
        self
    }

    /// Show already-encoded text (Tj)
    pub fn show_bytes(&mut self, text: &[u8]) -> &mut Self {
        self.write_pdf_string(text);
        self.write_line(" Tj");
        self
    }

    /// Show an ASCII text string (Tj)
    pub fn show_text(&mut self, text: &str) -> &mut Self {
        self.show_bytes(text.as_bytes())
    }

    fn write_line(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
        self.data.push(b'\n');
    }

    fn write_fmt(&mut self, args: std::fmt::Arguments<'_>) {
        let _ = self.data.write_fmt(args);
    }

    /// Write a PDF literal string. Bytes outside printable ASCII are octal-escaped.
    fn write_pdf_string(&mut self, bytes: &[u8]) {
        self.data.push(b'(');
        for &byte in bytes {
            match byte {
                b'(' | b')' | b'\\' => {
                    self.data.push(b'\\');
                    self.data.push(byte);
                }
                0x0A => self.data.extend_from_slice(b"\\n"),
                0x0D => self.data.extend_from_slice(b"\\r"),
                0x09 => self.data.extend_from_slice(b"\\t"),
                0x20..=0x7E => self.data.push(byte),
                _ => {
                    let _ = write!(self.data, "\\{:03o}", byte);
                }
            }
        }
        self.data.push(b')');
    }
}

/// Format a number for PDF output
pub(crate) fn fmt_num(n: f64) -> String {
    super::objects::format_real(n)
}

//! PDF Document Structure
//!
//! Catalog, page tree, page and info dictionaries.

use super::fonts::{encode_win_ansi, StandardFont};
use super::objects::{PdfDictionary, PdfObject};

/// Version written in the file header
pub const PDF_VERSION: &str = "1.4";

/// PDF document information.
///
/// No dates are written, so the same assessment always produces the same bytes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub subject: Option<String>,
    pub keywords: Option<String>,
    pub creator: Option<String>,
    pub producer: Option<String>,
}

impl DocumentInfo {
    pub fn new() -> Self {
        Self {
            creator: Some("quizdoc".to_string()),
            producer: Some(format!("quizdoc doc_export {}", env!("CARGO_PKG_VERSION"))),
            ..Default::default()
        }
    }

    /// Convert to PDF dictionary
    pub fn to_dictionary(&self) -> PdfDictionary {
        let mut dict = PdfDictionary::new();

        let entries = [
            ("Title", &self.title),
            ("Subject", &self.subject),
            ("Keywords", &self.keywords),
            ("Creator", &self.creator),
            ("Producer", &self.producer),
        ];
        for (key, value) in entries {
            if let Some(value) = value {
                dict.insert(key, PdfObject::String(encode_win_ansi(value)));
            }
        }

        dict
    }
}

/// Create a document catalog
pub fn create_catalog(pages_ref: u32) -> PdfDictionary {
    let mut dict = PdfDictionary::new().with_type("Catalog");
    dict.insert("Pages", PdfObject::reference(pages_ref));
    dict
}

/// Create a pages dictionary (page tree root)
pub fn create_pages(page_refs: &[u32]) -> PdfDictionary {
    let mut dict = PdfDictionary::new().with_type("Pages");

    let kids: Vec<PdfObject> = page_refs.iter().map(|&r| PdfObject::reference(r)).collect();

    dict.insert("Kids", PdfObject::Array(kids));
    dict.insert("Count", PdfObject::Integer(page_refs.len() as i64));

    dict
}

/// Create a page dictionary. `fonts` pairs each font with its object number.
pub fn create_page(
    parent_ref: u32,
    content_ref: u32,
    width: f64,
    height: f64,
    fonts: &[(StandardFont, u32)],
) -> PdfDictionary {
    let mut page = PdfDictionary::new().with_type("Page");
    page.insert("Parent", PdfObject::reference(parent_ref));
    page.insert(
        "MediaBox",
        PdfObject::Array(vec![
            PdfObject::Integer(0),
            PdfObject::Integer(0),
            PdfObject::Real(width),
            PdfObject::Real(height),
        ]),
    );
    page.insert("Contents", PdfObject::reference(content_ref));

    let mut font_dict = PdfDictionary::new();
    for (font, obj_num) in fonts {
        font_dict.insert(font.resource_name(), PdfObject::reference(*obj_num));
    }
    let mut resources = PdfDictionary::new();
    resources.insert("Font", PdfObject::Dictionary(font_dict));
    page.insert("Resources", PdfObject::Dictionary(resources));

    page
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_dict() {
        let pages = create_pages(&[4, 6]);
        assert_eq!(pages.get("Count"), Some(&PdfObject::Integer(2)));
        assert_eq!(
            pages.get("Kids"),
            Some(&PdfObject::Array(vec![PdfObject::reference(4), PdfObject::reference(6)]))
        );
    }

    #[test]
    fn test_page_resources() {
        let page = create_page(2, 5, 595.276, 841.89, &[(StandardFont::Helvetica, 3)]);
        let Some(PdfObject::Dictionary(resources)) = page.get("Resources") else {
            panic!("missing resources");
        };
        let Some(PdfObject::Dictionary(fonts)) = resources.get("Font") else {
            panic!("missing fonts");
        };
        assert_eq!(fonts.get("F1"), Some(&PdfObject::reference(3)));
        assert!(!fonts.contains_key("F2"));
    }

    #[test]
    fn test_info_has_no_dates() {
        let mut info = DocumentInfo::new();
        info.title = Some("Assessment: Rivers".to_string());
        let dict = info.to_dictionary();
        assert!(dict.contains_key("Title"));
        assert!(!dict.contains_key("CreationDate"));
        assert!(!dict.contains_key("ModDate"));
    }
}

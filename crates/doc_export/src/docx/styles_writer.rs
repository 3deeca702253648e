//! Styles.xml writer
//!
//! Only document defaults and the Normal paragraph style are written;
//! all assessment formatting is direct formatting on the runs.

use crate::docx::namespaces;

/// Default run size in half-points when a paragraph sets none
const DEFAULT_SIZE: u32 = 24;
const DEFAULT_FONT: &str = "Calibri";

/// Writer for styles.xml
#[derive(Debug, Default)]
pub struct StylesWriter;

impl StylesWriter {
    pub fn new() -> Self {
        Self
    }

    /// Generate styles.xml content
    pub fn write(&self) -> String {
        let mut xml = String::new();

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<w:styles xmlns:w="{}">"#, namespaces::W));

        self.write_doc_defaults(&mut xml);
        self.write_normal_style(&mut xml);

        xml.push_str("</w:styles>");
        xml
    }

    fn write_doc_defaults(&self, xml: &mut String) {
        xml.push_str("<w:docDefaults>");

        xml.push_str("<w:rPrDefault><w:rPr>");
        xml.push_str(&format!(
            r#"<w:rFonts w:ascii="{f}" w:hAnsi="{f}" w:cs="{f}"/>"#,
            f = DEFAULT_FONT
        ));
        xml.push_str(&format!(
            r#"<w:sz w:val="{s}"/><w:szCs w:val="{s}"/>"#,
            s = DEFAULT_SIZE
        ));
        xml.push_str("</w:rPr></w:rPrDefault>");

        xml.push_str("<w:pPrDefault><w:pPr>");
        xml.push_str(r#"<w:spacing w:after="0" w:line="240" w:lineRule="auto"/>"#);
        xml.push_str("</w:pPr></w:pPrDefault>");

        xml.push_str("</w:docDefaults>");
    }

    fn write_normal_style(&self, xml: &mut String) {
        xml.push_str(r#"<w:style w:type="paragraph" w:default="1" w:styleId="Normal">"#);
        xml.push_str(r#"<w:name w:val="Normal"/><w:qFormat/>"#);
        xml.push_str("</w:style>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles_xml() {
        let xml = StylesWriter::new().write();
        assert!(xml.contains("<w:docDefaults>"));
        assert!(xml.contains(r#"w:styleId="Normal""#));
        assert!(xml.ends_with("</w:styles>"));
    }
}

//! [Content_Types].xml generation

use crate::docx::{content_type_values, escape_xml, namespaces};
use std::collections::BTreeMap;

/// Content types of the parts in a DOCX package
#[derive(Debug, Clone, Default)]
pub struct ContentTypes {
    /// Default content types by extension (e.g., "xml" -> "application/xml")
    pub defaults: BTreeMap<String, String>,
    /// Override content types by part name (e.g., "/word/document.xml" -> "...")
    pub overrides: BTreeMap<String, String>,
}

impl ContentTypes {
    /// Create content types with the standard `rels` and `xml` defaults
    pub fn new() -> Self {
        let mut ct = Self::default();
        ct.defaults
            .insert("rels".to_string(), content_type_values::RELATIONSHIPS.to_string());
        ct.defaults
            .insert("xml".to_string(), content_type_values::XML.to_string());
        ct
    }

    /// Add an override for a specific part
    pub fn add_override(&mut self, part_name: &str, content_type: &str) {
        let normalized = if part_name.starts_with('/') {
            part_name.to_string()
        } else {
            format!("/{}", part_name)
        };
        self.overrides.insert(normalized, content_type.to_string());
    }

    /// Content type for a part, checking overrides before extension defaults
    pub fn get_content_type(&self, path: &str) -> Option<&str> {
        let normalized = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };

        self.overrides
            .get(&normalized)
            .or_else(|| path.rsplit('.').next().and_then(|ext| self.defaults.get(ext)))
            .map(String::as_str)
    }

    /// Generate XML content for [Content_Types].xml
    pub fn to_xml(&self) -> String {
        let mut xml = String::new();
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<Types xmlns="{}">"#, namespaces::CT));

        for (ext, ct) in &self.defaults {
            xml.push_str(&format!(
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                escape_xml(ext),
                escape_xml(ct)
            ));
        }

        for (part, ct) in &self.overrides {
            xml.push_str(&format!(
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(part),
                escape_xml(ct)
            ));
        }

        xml.push_str("</Types>");
        xml
    }
}

/// Content types for the parts an assessment export writes
pub fn create_default_content_types() -> ContentTypes {
    let mut ct = ContentTypes::new();
    ct.add_override("/word/document.xml", content_type_values::DOCUMENT);
    ct.add_override("/word/styles.xml", content_type_values::STYLES);
    ct.add_override("/word/settings.xml", content_type_values::SETTINGS);
    ct
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let ct = create_default_content_types();

        assert_eq!(ct.get_content_type("word/document.xml"), Some(content_type_values::DOCUMENT));
        assert_eq!(ct.get_content_type("/word/styles.xml"), Some(content_type_values::STYLES));
        assert_eq!(ct.get_content_type("_rels/.rels"), Some(content_type_values::RELATIONSHIPS));
        assert_eq!(ct.get_content_type("other.xml"), Some("application/xml"));
        assert_eq!(ct.get_content_type("image.png"), None);
    }

    #[test]
    fn test_to_xml_is_sorted() {
        let xml = create_default_content_types().to_xml();

        assert!(xml.starts_with("<?xml"));
        let document = xml.find("/word/document.xml").unwrap();
        let settings = xml.find("/word/settings.xml").unwrap();
        let styles = xml.find("/word/styles.xml").unwrap();
        assert!(document < settings && settings < styles);
    }
}

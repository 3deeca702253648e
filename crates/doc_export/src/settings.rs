//! Export settings
//!
//! Settings live in a JSON file. Every field has a default, so a partial
//! file only overrides what it names. A missing file means defaults; a file
//! that does not parse is reported with a warning and also yields defaults.

use crate::Result;
use layout_engine::{mm_to_pt, PageGeometry, PageSize};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// All export settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExportSettings {
    pub pdf: PdfSettings,
    pub docx: DocxSettings,
}

/// Page margins in millimetres
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Margins {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 20.0,
            bottom: 20.0,
            left: 20.0,
            right: 20.0,
        }
    }
}

/// PDF layout settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PdfSettings {
    pub page_size: PageSize,
    pub margins_mm: Margins,
    /// Font size in points
    pub font_size: f32,
    /// Baseline distance as a multiple of the font size
    pub line_height_factor: f32,
    /// Space after each question block
    pub block_gap_mm: f32,
    /// Space between the header and the first question
    pub header_gap_mm: f32,
    /// Flate-compress page content streams
    pub compress: bool,
}

impl Default for PdfSettings {
    fn default() -> Self {
        Self {
            page_size: PageSize::A4,
            margins_mm: Margins::default(),
            font_size: 12.0,
            line_height_factor: 1.15,
            block_gap_mm: 10.0,
            header_gap_mm: 10.0,
            compress: true,
        }
    }
}

impl PdfSettings {
    /// Page geometry in points
    pub fn geometry(&self) -> PageGeometry {
        let (width, height) = self.page_size.dimensions();
        PageGeometry {
            width,
            height,
            margin_top: mm_to_pt(self.margins_mm.top),
            margin_bottom: mm_to_pt(self.margins_mm.bottom),
            margin_left: mm_to_pt(self.margins_mm.left),
            margin_right: mm_to_pt(self.margins_mm.right),
        }
    }

    pub fn line_height(&self) -> f32 {
        layout_engine::line_height(self.font_size, self.line_height_factor)
    }
}

/// DOCX paragraph settings. Sizes are in half-points, spacing in twips.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DocxSettings {
    pub title_size: u32,
    pub keywords_size: u32,
    /// `None` leaves the documents line at the document default size
    pub documents_size: Option<u32>,
    pub question_size: u32,
    /// Options, sample answers and the answer key
    pub body_size: u32,
    pub separator_size: u32,
    pub question_spacing_before: u32,
    pub question_spacing_after: u32,
    /// Space after the last line of a question block
    pub spacer_after: u32,
    pub separator_after: u32,
}

impl Default for DocxSettings {
    fn default() -> Self {
        Self {
            title_size: 48,
            keywords_size: 40,
            documents_size: None,
            question_size: 24,
            body_size: 22,
            separator_size: 11,
            question_spacing_before: 200,
            question_spacing_after: 100,
            spacer_after: 200,
            separator_after: 200,
        }
    }
}

/// Loads and saves [`ExportSettings`] at a fixed path
pub struct SettingsManager {
    settings_path: PathBuf,
    current: ExportSettings,
}

impl SettingsManager {
    pub fn new(settings_path: impl Into<PathBuf>) -> Self {
        Self {
            settings_path: settings_path.into(),
            current: ExportSettings::default(),
        }
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    /// Load settings from disk, or return defaults if the file doesn't exist
    pub async fn load(&mut self) -> Result<&ExportSettings> {
        self.current = if tokio::fs::try_exists(&self.settings_path).await? {
            let content = tokio::fs::read_to_string(&self.settings_path).await?;
            parse_or_default(&content, &self.settings_path)
        } else {
            ExportSettings::default()
        };
        Ok(&self.current)
    }

    /// Load settings synchronously
    pub fn load_sync(&mut self) -> Result<&ExportSettings> {
        self.current = if self.settings_path.exists() {
            let content = std::fs::read_to_string(&self.settings_path)?;
            parse_or_default(&content, &self.settings_path)
        } else {
            ExportSettings::default()
        };
        Ok(&self.current)
    }

    /// Save current settings to disk
    pub async fn save(&self) -> Result<()> {
        if let Some(parent) = self.settings_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(&self.current)?;
        tokio::fs::write(&self.settings_path, content).await?;
        Ok(())
    }

    /// Save settings synchronously
    pub fn save_sync(&self) -> Result<()> {
        if let Some(parent) = self.settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.current)?;
        std::fs::write(&self.settings_path, content)?;
        Ok(())
    }

    pub fn get(&self) -> &ExportSettings {
        &self.current
    }

    /// Replace the settings and save them
    pub fn update_sync(&mut self, settings: ExportSettings) -> Result<()> {
        self.current = settings;
        self.save_sync()
    }
}

fn parse_or_default(content: &str, path: &Path) -> ExportSettings {
    match serde_json::from_str::<ExportSettings>(content) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!(
                "Failed to parse settings file {}, using defaults: {}",
                path.display(),
                e
            );
            ExportSettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = ExportSettings::default();

        assert_eq!(settings.pdf.page_size, PageSize::A4);
        assert_eq!(settings.pdf.font_size, 12.0);
        assert_eq!(settings.pdf.margins_mm.top, 20.0);
        assert!((settings.pdf.line_height() - 13.8).abs() < 1e-4);
        assert!(settings.pdf.compress);

        assert_eq!(settings.docx.title_size, 48);
        assert_eq!(settings.docx.keywords_size, 40);
        assert_eq!(settings.docx.documents_size, None);
        assert_eq!(settings.docx.separator_size, 11);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let settings: ExportSettings =
            serde_json::from_str(r#"{"pdf": {"page_size": "letter", "compress": false}}"#).unwrap();

        assert_eq!(settings.pdf.page_size, PageSize::Letter);
        assert!(!settings.pdf.compress);
        assert_eq!(settings.pdf.font_size, 12.0);
        assert_eq!(settings.docx, DocxSettings::default());
    }

    #[test]
    fn test_geometry_from_margins() {
        let settings = PdfSettings::default();
        let geometry = settings.geometry();
        assert!((geometry.margin_left - mm_to_pt(20.0)).abs() < 1e-4);
        assert!((geometry.width - 595.276).abs() < 1e-3);
    }

    #[test]
    fn test_manager_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = SettingsManager::new(temp_dir.path().join("export.json"));
        assert_eq!(manager.load_sync().unwrap(), &ExportSettings::default());
    }

    #[test]
    fn test_manager_invalid_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("export.json");
        std::fs::write(&path, "{ not json").unwrap();

        let mut manager = SettingsManager::new(&path);
        assert_eq!(manager.load_sync().unwrap(), &ExportSettings::default());
    }

    #[test]
    fn test_manager_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("export.json");

        let mut manager = SettingsManager::new(&path);
        let mut settings = ExportSettings::default();
        settings.pdf.font_size = 11.0;
        settings.docx.documents_size = Some(28);
        manager.update_sync(settings.clone()).unwrap();

        let mut reloaded = SettingsManager::new(&path);
        assert_eq!(reloaded.load_sync().unwrap(), &settings);
    }

    #[tokio::test]
    async fn test_manager_async() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("export.json");

        let mut manager = SettingsManager::new(&path);
        manager.load().await.unwrap();
        manager.save().await.unwrap();

        let mut reloaded = SettingsManager::new(&path);
        assert_eq!(reloaded.load().await.unwrap(), &ExportSettings::default());
    }
}

//! Saving exported files

use crate::{ExportError, ExportFormat, Result};
use std::path::{Path, PathBuf};

/// An exported document ready to be saved or sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportedFile {
    pub fn new(desired_name: &str, format: ExportFormat, bytes: Vec<u8>) -> Self {
        Self {
            file_name: output_file_name(desired_name, format),
            mime_type: format.mime_type(),
            bytes,
        }
    }
}

/// `{desired_name}.{ext}`, unless the name already ends with the extension
pub fn output_file_name(desired_name: &str, format: ExportFormat) -> String {
    let has_extension = Path::new(desired_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(format.extension()));

    if has_extension {
        desired_name.to_string()
    } else {
        format!("{}.{}", desired_name, format.extension())
    }
}

/// Write `file` into `dir` and return the full path.
///
/// The file name must be a single path component, so nothing is written
/// outside `dir`.
pub async fn save_export(file: &ExportedFile, dir: impl AsRef<Path>) -> Result<PathBuf> {
    let dir = dir.as_ref();
    let path = target_path(dir, &file.file_name)?;
    tokio::fs::create_dir_all(dir).await?;

    tokio::fs::write(&path, &file.bytes).await?;
    tracing::debug!(path = %path.display(), bytes = file.bytes.len(), "saved export");
    Ok(path)
}

fn target_path(dir: &Path, file_name: &str) -> Result<PathBuf> {
    let is_plain = Path::new(file_name).file_name().and_then(|name| name.to_str()) == Some(file_name);
    if !is_plain || file_name.contains(['/', '\\']) {
        return Err(ExportError::InvalidFileName(file_name.to_string()));
    }
    Ok(dir.join(file_name))
}

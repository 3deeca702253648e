//! Error types for layout engine

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("Invalid page setup: {0}")]
    InvalidPageSetup(String),

    #[error("Invalid font size: {0}")]
    InvalidFontSize(f32),
}

pub type Result<T> = std::result::Result<T, LayoutError>;

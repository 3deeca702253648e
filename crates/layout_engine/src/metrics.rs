//! Font metrics for the standard Helvetica faces
//!
//! Widths are the Adobe AFM advance widths in 1/1000 em for the printable
//! ASCII range. Anything outside that range is measured with the width of
//! a digit.

use serde::{Deserialize, Serialize};

/// Font face used for a run of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFace {
    #[default]
    Regular,
    Bold,
}

/// Face and size of a run of text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub face: FontFace,
    /// Size in points
    pub size: f32,
}

impl TextStyle {
    pub fn new(face: FontFace, size: f32) -> Self {
        Self { face, size }
    }

    pub fn regular(size: f32) -> Self {
        Self::new(FontFace::Regular, size)
    }

    pub fn bold(size: f32) -> Self {
        Self::new(FontFace::Bold, size)
    }
}

/// Something that can measure the advance width of text
pub trait TextMeasure {
    /// Width of `text` in points
    fn text_width(&self, text: &str, style: TextStyle) -> f32;
}

const FIRST_CHAR: u32 = 32;
const DEFAULT_WIDTH: u16 = 556;

#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Metrics of the built-in Helvetica and Helvetica-Bold fonts
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardMetrics;

impl StandardMetrics {
    /// Advance width of `c` in 1/1000 em
    pub fn char_width(c: char, face: FontFace) -> u16 {
        let table = match face {
            FontFace::Regular => &HELVETICA_WIDTHS,
            FontFace::Bold => &HELVETICA_BOLD_WIDTHS,
        };
        (c as u32)
            .checked_sub(FIRST_CHAR)
            .and_then(|i| table.get(i as usize))
            .copied()
            .unwrap_or(DEFAULT_WIDTH)
    }
}

impl TextMeasure for StandardMetrics {
    fn text_width(&self, text: &str, style: TextStyle) -> f32 {
        let units: u32 = text
            .chars()
            .map(|c| u32::from(Self::char_width(c, style.face)))
            .sum();
        units as f32 * style.size / 1000.0
    }
}

/// Distance between baselines for `font_size` with the given spacing factor
pub fn line_height(font_size: f32, factor: f32) -> f32 {
    font_size * factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_widths() {
        assert_eq!(StandardMetrics::char_width(' ', FontFace::Regular), 278);
        assert_eq!(StandardMetrics::char_width('W', FontFace::Regular), 944);
        assert_eq!(StandardMetrics::char_width('i', FontFace::Regular), 222);
        assert_eq!(StandardMetrics::char_width('i', FontFace::Bold), 278);
        assert_eq!(StandardMetrics::char_width('~', FontFace::Bold), 584);
    }

    #[test]
    fn test_unknown_chars_use_default() {
        assert_eq!(StandardMetrics::char_width('\u{e9}', FontFace::Regular), DEFAULT_WIDTH);
        assert_eq!(StandardMetrics::char_width('\t', FontFace::Bold), DEFAULT_WIDTH);
    }

    #[test]
    fn test_text_width_scales_with_size() {
        let metrics = StandardMetrics;
        let at_10 = metrics.text_width("Paris", TextStyle::regular(10.0));
        let at_20 = metrics.text_width("Paris", TextStyle::regular(20.0));
        assert!((at_20 - 2.0 * at_10).abs() < 1e-4);
        // P a r i s = 667 + 556 + 333 + 222 + 500
        assert!((at_10 - 22.78).abs() < 1e-3);
    }

    #[test]
    fn test_bold_is_wider() {
        let metrics = StandardMetrics;
        let text = "Question 1: What is photosynthesis?";
        assert!(
            metrics.text_width(text, TextStyle::bold(12.0)) > metrics.text_width(text, TextStyle::regular(12.0))
        );
    }

    #[test]
    fn test_line_height() {
        assert!((line_height(12.0, 1.15) - 13.8).abs() < 1e-4);
    }
}

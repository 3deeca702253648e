//! Line wrapping
//!
//! Greedy wrapping over Unicode line break opportunities (UAX #14). A
//! segment that does not fit on an empty line is split between characters,
//! so every returned line fits the width unless a single character is wider
//! than the line itself.

use crate::{TextMeasure, TextStyle};
use unicode_linebreak::{linebreaks, BreakOpportunity};

const WIDTH_TOLERANCE: f32 = 1e-3;

/// Wraps text to a fixed width
#[derive(Debug)]
pub struct LineBreaker<'m, M: ?Sized> {
    measure: &'m M,
    max_width: f32,
}

impl<'m, M: TextMeasure + ?Sized> LineBreaker<'m, M> {
    pub fn new(measure: &'m M, max_width: f32) -> Self {
        Self { measure, max_width }
    }

    pub fn max_width(&self) -> f32 {
        self.max_width
    }

    /// Split `text` into lines that fit the width when set in `style`.
    ///
    /// Always returns at least one line; empty text yields one empty line.
    pub fn wrap(&self, text: &str, style: TextStyle) -> Vec<String> {
        let fits = |s: &str| self.measure.text_width(s, style) <= self.max_width + WIDTH_TOLERANCE;

        let mut lines = Vec::new();
        let mut current = String::new();
        let mut start = 0;

        for (offset, opportunity) in linebreaks(text) {
            let segment = text[start..offset].trim_end_matches(is_newline);
            start = offset;

            if current.is_empty() {
                current.push_str(segment);
            } else {
                let candidate = format!("{current}{segment}");
                if fits(candidate.trim_end()) {
                    current = candidate;
                } else {
                    lines.push(current.trim_end().to_string());
                    current = segment.to_string();
                }
            }

            if !fits(current.trim_end()) {
                split_overlong(&mut current, &mut lines, &fits);
            }

            if opportunity == BreakOpportunity::Mandatory {
                lines.push(current.trim_end().to_string());
                current.clear();
            }
        }

        if !current.is_empty() || lines.is_empty() {
            lines.push(current.trim_end().to_string());
        }
        lines
    }
}

fn is_newline(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Move full-width character runs from the front of `current` into `lines`
/// until the remainder fits.
fn split_overlong(current: &mut String, lines: &mut Vec<String>, fits: &dyn Fn(&str) -> bool) {
    while !fits(current.trim_end()) {
        let mut piece = String::new();
        let mut rest = current.len();

        for (i, c) in current.char_indices() {
            piece.push(c);
            if !fits(&piece) {
                if piece.chars().count() == 1 {
                    // a lone character wider than the line still takes a line
                    rest = i + c.len_utf8();
                    if current[rest..].trim_end().is_empty() {
                        return;
                    }
                } else {
                    piece.pop();
                    rest = i;
                }
                break;
            }
        }

        lines.push(piece.trim_end().to_string());
        *current = current[rest..].to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StandardMetrics;

    /// Every character is 1pt wide at size 1
    struct Monospace;

    impl TextMeasure for Monospace {
        fn text_width(&self, text: &str, style: TextStyle) -> f32 {
            text.chars().count() as f32 * style.size
        }
    }

    fn wrap(text: &str, width: f32) -> Vec<String> {
        LineBreaker::new(&Monospace, width).wrap(text, TextStyle::regular(1.0))
    }

    #[test]
    fn test_short_text_is_one_line() {
        assert_eq!(wrap("Paris", 20.0), vec!["Paris"]);
    }

    #[test]
    fn test_empty_text_is_one_empty_line() {
        assert_eq!(wrap("", 20.0), vec![""]);
    }

    #[test]
    fn test_wraps_at_spaces() {
        assert_eq!(
            wrap("the quick brown fox jumps", 10.0),
            vec!["the quick", "brown fox", "jumps"]
        );
    }

    #[test]
    fn test_trailing_space_does_not_force_break() {
        assert_eq!(wrap("abcd efgh", 4.0), vec!["abcd", "efgh"]);
    }

    #[test]
    fn test_newlines_are_mandatory_breaks() {
        assert_eq!(wrap("first\nsecond", 50.0), vec!["first", "second"]);
        assert_eq!(wrap("a\r\nb", 50.0), vec!["a", "b"]);
        assert_eq!(wrap("a\n\nb", 50.0), vec!["a", "", "b"]);
    }

    #[test]
    fn test_overlong_word_is_split_by_character() {
        assert_eq!(wrap("abcdefghij", 4.0), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap("xy abcdefghij", 4.0), vec!["xy", "abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_character_wider_than_line() {
        assert_eq!(wrap("ab", 0.5), vec!["a", "b"]);
    }

    #[test]
    fn test_standard_metrics_fit_width() {
        let metrics = StandardMetrics;
        let style = TextStyle::regular(12.0);
        let breaker = LineBreaker::new(&metrics, 150.0);
        let text = "Photosynthesis converts light energy into chemical energy stored in glucose molecules.";

        let lines = breaker.wrap(text, style);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(metrics.text_width(line, style) <= 150.0 + WIDTH_TOLERANCE);
        }
        assert_eq!(lines.join(" "), text);
    }
}

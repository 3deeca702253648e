//! Option labels
//!
//! Options are labelled `a)` through `z)`. Labels past `z` do not exist:
//! asking for one is an error rather than a wrap back to `a`.

use crate::{ModelError, Result};

/// Number of available option letters
pub const LETTER_COUNT: usize = 26;

/// Map a 0-based option index to its lowercase label letter
pub fn option_letter(index: usize) -> Result<char> {
    if index >= LETTER_COUNT {
        return Err(ModelError::OptionIndexOutOfRange(index));
    }
    Ok((b'a' + index as u8) as char)
}

/// Normalize an option id written as a label (`"b"`, `"B)"`, `"2."`) to an index.
///
/// The label is trimmed, trailing `.` and `)` are dropped and the rest is
/// lowercased. What remains must be a single digit or a single ASCII letter.
pub fn parse_option_label(label: &str) -> Result<usize> {
    let normalized = label
        .trim()
        .trim_end_matches('.')
        .trim_end_matches(')')
        .to_lowercase();

    let mut chars = normalized.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return Err(ModelError::InvalidOptionId(label.to_string()));
    };

    if let Some(digit) = c.to_digit(10) {
        return Ok(digit as usize);
    }
    if c.is_ascii_lowercase() {
        return Ok((c as u8 - b'a') as usize);
    }

    Err(ModelError::InvalidOptionId(label.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_first_and_last_letter() {
        assert_eq!(option_letter(0), Ok('a'));
        assert_eq!(option_letter(1), Ok('b'));
        assert_eq!(option_letter(25), Ok('z'));
    }

    #[test]
    fn test_no_wraparound() {
        assert_eq!(option_letter(26), Err(ModelError::OptionIndexOutOfRange(26)));
        assert!(option_letter(1000).is_err());
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!(parse_option_label("b"), Ok(1));
        assert_eq!(parse_option_label(" C) "), Ok(2));
        assert_eq!(parse_option_label("a."), Ok(0));
        assert_eq!(parse_option_label("3"), Ok(3));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_option_label("").is_err());
        assert!(parse_option_label("ab").is_err());
        assert!(parse_option_label("12").is_err());
        assert!(parse_option_label("?").is_err());
    }

    proptest! {
        #[test]
        fn letters_parse_back_to_their_index(index in 0usize..LETTER_COUNT) {
            let letter = option_letter(index).unwrap();
            prop_assert_eq!(parse_option_label(&letter.to_string()).unwrap(), index);
            prop_assert_eq!(parse_option_label(&format!("{})", letter.to_ascii_uppercase())).unwrap(), index);
        }
    }
}

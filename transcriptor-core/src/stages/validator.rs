//! Input charset validation

use regex::Regex;

use crate::alphabet::{ACCENT, APOSTROPHE, LOWERCASE, UPPERCASE};
use crate::error::{Result, TranscriptionError};

/// Rejects words containing anything outside the permitted alphabet
///
/// Permitted: Ukrainian letters in either case, `'`, `"` and the canonical
/// apostrophe marker, plus the combining acute accent when stress marks are
/// accepted. The whole word must match; empty input is rejected.
#[derive(Debug, Clone)]
pub struct InputValidator {
    charset: Regex,
    foreign: Regex,
}

impl InputValidator {
    pub fn new(accept_stress_marks: bool) -> Self {
        let mut class = format!("{UPPERCASE}{LOWERCASE}'\"{APOSTROPHE}");
        if accept_stress_marks {
            class.push(ACCENT);
        }

        // The class holds only letters and quote marks, none of which need
        // escaping inside brackets, so both patterns always compile.
        let charset = Regex::new(&format!("^[{class}]+$")).expect("valid charset pattern");
        let foreign = Regex::new(&format!("[^{class}]")).expect("valid charset pattern");

        Self { charset, foreign }
    }

    /// Check the raw word
    pub fn validate(&self, word: &str) -> Result<()> {
        if self.charset.is_match(word) {
            return Ok(());
        }

        let offending = self
            .foreign
            .find(word)
            .and_then(|m| m.as_str().chars().next());

        Err(TranscriptionError::InvalidCharset {
            word: word.to_string(),
            offending,
        })
    }
}

impl Default for InputValidator {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offending(validator: &InputValidator, word: &str) -> Option<char> {
        match validator.validate(word) {
            Err(TranscriptionError::InvalidCharset { offending, .. }) => offending,
            other => panic!("expected rejection of {word:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_accepts_ukrainian_words() {
        let validator = InputValidator::default();
        for word in ["мрія", "Україна", "ҐАНОК", "сім'я", "п\"ять", "мʼясо", "щ", "ь"] {
            assert!(validator.validate(word).is_ok(), "{word}");
        }
    }

    #[test]
    fn test_rejects_foreign_characters() {
        let validator = InputValidator::default();
        assert_eq!(offending(&validator, "cat"), Some('c'));
        // Latin 'a' after Cyrillic 'с'
        assert_eq!(offending(&validator, "сat"), Some('a'));
        assert_eq!(offending(&validator, "мама1"), Some('1'));
        assert_eq!(offending(&validator, "два слова"), Some(' '));
        assert_eq!(offending(&validator, "ёж"), Some('ё'));
        assert_eq!(offending(&validator, "мыло"), Some('ы'));
        assert_eq!(offending(&validator, "так!"), Some('!'));
    }

    #[test]
    fn test_rejects_empty_input() {
        let validator = InputValidator::default();
        assert_eq!(offending(&validator, ""), None);
    }

    #[test]
    fn test_stress_marks_are_opt_in() {
        let word = "мрі\u{0301}я";
        assert_eq!(
            offending(&InputValidator::new(false), word),
            Some('\u{0301}')
        );
        assert!(InputValidator::new(true).validate(word).is_ok());
    }
}

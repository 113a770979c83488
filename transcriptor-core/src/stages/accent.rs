//! Stress mark extraction

use super::Stage;
use crate::alphabet::{Letter, ACCENT};
use crate::word::Word;

/// Removes combining acute accents and records the stressed letter
///
/// Only the first accent counts. Its offset is the character index of the
/// letter it follows, kept only when that letter is a vowel; every accent
/// is removed regardless.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccentExtractor;

impl AccentExtractor {
    /// Stripped word and the stress offset, if any
    pub fn extract(&self, word: &str) -> (String, Option<usize>) {
        let chars: Vec<char> = word.chars().collect();
        let Some(accent_idx) = chars.iter().position(|&ch| ch == ACCENT) else {
            return (word.to_string(), None);
        };

        let stress = accent_idx.checked_sub(1).filter(|&idx| {
            Letter::classify(chars[idx]).is_some_and(|letter| letter.is_vowel())
        });
        if stress.is_none() {
            log::debug!("ignoring accent at {accent_idx} in {word:?}: not on a vowel");
        }

        let stripped = chars.into_iter().filter(|&ch| ch != ACCENT).collect();
        (stripped, stress)
    }
}

impl Stage for AccentExtractor {
    fn name(&self) -> &'static str {
        "extract_accent"
    }

    fn apply(&self, word: &mut Word) {
        let (stripped, stress) = self.extract(word.as_str());
        word.set_text(stripped);
        word.set_stress(stress);
    }
}

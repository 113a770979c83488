//! Case folding and apostrophe unification

use super::Stage;
use crate::alphabet::APOSTROPHE;
use crate::word::Word;

/// Lowercases the word and unifies apostrophes
///
/// `'` and `"` become the canonical marker before punctuation is stripped,
/// so the marker (a letter, not punctuation) survives the strip.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer;

impl Normalizer {
    pub fn normalize(&self, word: &str) -> String {
        word.trim()
            .to_lowercase()
            .chars()
            .map(|ch| match ch {
                '\'' | '"' => APOSTROPHE,
                other => other,
            })
            .filter(|ch| !ch.is_ascii_punctuation())
            .collect()
    }
}

impl Stage for Normalizer {
    fn name(&self) -> &'static str {
        "normalize"
    }

    fn apply(&self, word: &mut Word) {
        let normalized = self.normalize(word.as_str());
        word.set_text(normalized);
    }
}

//! Complex consonant expansion

use super::Stage;
use crate::alphabet::ComplexConsonant;
use crate::word::Word;

/// Rewrites every complex consonant into its digraph (`щ` → `шч`)
#[derive(Debug, Clone, Copy, Default)]
pub struct ComplexConsonantExpander;

impl ComplexConsonantExpander {
    pub fn expand(&self, word: &str) -> String {
        let mut out = String::with_capacity(word.len() + 4);
        for ch in word.chars() {
            match ComplexConsonant::from_char(ch) {
                Some(complex) => out.push_str(complex.digraph()),
                None => out.push(ch),
            }
        }
        out
    }
}

impl Stage for ComplexConsonantExpander {
    fn name(&self) -> &'static str {
        "expand_consonants"
    }

    fn apply(&self, word: &mut Word) {
        let expanded = self.expand(word.as_str());
        word.set_text(expanded);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expands_shcha() {
        assert_eq!(ComplexConsonantExpander.expand("щука"), "шчука");
        assert_eq!(ComplexConsonantExpander.expand("борщ"), "боршч");
        assert_eq!(ComplexConsonantExpander.expand("щщ"), "шчшч");
    }

    #[test]
    fn test_leaves_other_letters() {
        assert_eq!(ComplexConsonantExpander.expand("мрія"), "мрія");
        assert_eq!(ComplexConsonantExpander.expand(""), "");
    }
}

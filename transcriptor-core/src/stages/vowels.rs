//! Context-sensitive expansion of iotated vowels

use super::Stage;
use crate::alphabet::{ComplexVowel, Letter, APOSTROPHE};
use crate::word::Word;

/// Expands `я ю є ї` depending on the preceding character
///
/// After a consonant the vowel softens it (`ня` → `нья`); anywhere else it
/// carries a glide (`я` → `йа`). The apostrophe marker blocks softening and
/// is dropped once the pass is complete.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComplexVowelResolver;

impl ComplexVowelResolver {
    pub fn resolve(&self, word: &str) -> String {
        let mut out = String::with_capacity(word.len() + 8);
        let mut prev: Option<char> = None;

        for ch in word.chars() {
            match ComplexVowel::from_char(ch) {
                Some(vowel) => {
                    let after_consonant = prev
                        .and_then(Letter::classify)
                        .is_some_and(|letter| letter.is_consonant());
                    out.extend(vowel.expand(after_consonant));
                }
                None => out.push(ch),
            }
            prev = Some(ch);
        }

        out.retain(|ch| ch != APOSTROPHE);
        out
    }
}

impl Stage for ComplexVowelResolver {
    fn name(&self) -> &'static str {
        "resolve_vowels"
    }

    fn apply(&self, word: &mut Word) {
        let resolved = self.resolve(word.as_str());
        word.set_text(resolved);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_initial_glide() {
        assert_eq!(ComplexVowelResolver.resolve("я"), "йа");
        assert_eq!(ComplexVowelResolver.resolve("юля"), "йульа");
        assert_eq!(ComplexVowelResolver.resolve("єнот"), "йенот");
    }

    #[test]
    fn test_glide_after_vowel() {
        assert_eq!(ComplexVowelResolver.resolve("мрія"), "мрійа");
        assert_eq!(ComplexVowelResolver.resolve("моя"), "мойа");
    }

    #[test]
    fn test_soft_after_consonant() {
        assert_eq!(ComplexVowelResolver.resolve("зоря"), "зорьа");
        assert_eq!(ComplexVowelResolver.resolve("синє"), "синье");
        assert_eq!(ComplexVowelResolver.resolve("шчя"), "шчьа");
    }

    #[test]
    fn test_apostrophe_blocks_softening() {
        assert_eq!(ComplexVowelResolver.resolve("сімʼя"), "сімйа");
        assert_eq!(ComplexVowelResolver.resolve("пʼять"), "пйать");
    }

    #[test]
    fn test_yi_always_glides() {
        assert_eq!(ComplexVowelResolver.resolve("їжак"), "йіжак");
        assert_eq!(ComplexVowelResolver.resolve("країна"), "крайіна");
        assert_eq!(ComplexVowelResolver.resolve("зї"), "зйі");
    }

    #[test]
    fn test_glide_and_soft_sign_do_not_soften() {
        assert_eq!(ComplexVowelResolver.resolve("йя"), "ййа");
        assert_eq!(ComplexVowelResolver.resolve("ья"), "ьйа");
    }

    #[test]
    fn test_context_is_the_original_letter() {
        // The second 'я' follows the first 'я', a vowel, not the
        // expansion's trailing 'а'
        assert_eq!(ComplexVowelResolver.resolve("ляя"), "льайа");
    }
}

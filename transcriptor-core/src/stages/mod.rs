//! Pipeline stages preparing a word for encoding
//!
//! Validation runs first and is the only stage that can fail. The remaining
//! stages rewrite the [`Word`] in place, strictly in the order
//! normalize → extract accent → expand consonants → resolve vowels.

pub mod accent;
pub mod consonants;
pub mod normalizer;
pub mod validator;
pub mod vowels;

pub use accent::AccentExtractor;
pub use consonants::ComplexConsonantExpander;
pub use normalizer::Normalizer;
pub use validator::InputValidator;
pub use vowels::ComplexVowelResolver;

use crate::word::Word;

/// Infallible rewrite of a word
pub trait Stage: Send + Sync {
    /// Short name used in trace logs
    fn name(&self) -> &'static str;

    /// Rewrite the word in place
    fn apply(&self, word: &mut Word);
}

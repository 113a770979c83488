//! Phoneme rule table, encoder and decoder
//!
//! A table is a priority-ordered list of `{kind, pattern, ipa}` rules.
//! Encoding tokenizes a prepared word by longest match into single-symbol
//! codes; decoding maps the codes back to IPA symbols.

pub mod code;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod loader;
pub mod table;
pub mod trie;

pub use code::{PhonemeCode, CODE_ALPHABET};
pub use config::RuleTableConfig;
pub use decoder::PhonemeDecoder;
pub use encoder::{EncodedWord, PhonemeEncoder};
pub use loader::UKRAINIAN_RULES;
pub use table::{PhonemeRule, PhonemeTable, RuleKind};
pub use trie::PatternTrie;

/// Longest pattern a rule may declare
pub const MAX_PATTERN_LEN: usize = 3;

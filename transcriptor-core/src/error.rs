//! Layered error types
//!
//! Transcription failures and rule table construction failures are kept
//! apart: the former happen per word, the latter only while a table is built.

use crate::phoneme::PhonemeCode;
use thiserror::Error;

/// Errors raised while transcribing a single word
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranscriptionError {
    /// The word contains characters outside the permitted alphabet
    #[error("word {word:?} contains characters outside the Ukrainian alphabet")]
    InvalidCharset {
        /// The rejected input, as given
        word: String,
        /// First offending character, `None` for empty input
        offending: Option<char>,
    },

    /// A phoneme code has no rule in the table
    #[error("internal encoding error: phoneme code '{code}' is not mapped")]
    UnmappedCode {
        /// The code that could not be decoded
        code: PhonemeCode,
    },

    /// No rule matches a letter of the prepared word
    #[error("internal encoding error: no phoneme rule for {letter:?} at position {position}")]
    UnencodableLetter {
        /// The letter left without a rule
        letter: char,
        /// Character offset in the prepared word
        position: usize,
    },
}

impl TranscriptionError {
    /// Whether this error points at a defect in the rule table rather than
    /// at the user's input
    pub fn is_internal(&self) -> bool {
        !matches!(self, TranscriptionError::InvalidCharset { .. })
    }
}

/// Errors raised while building a phoneme rule table
#[derive(Error, Debug)]
pub enum RuleTableError {
    /// TOML could not be parsed into a rule table
    #[error("failed to parse rule table: {0}")]
    Parse(#[from] toml::de::Error),

    /// Rule table file could not be read
    #[error("failed to read rule table: {0}")]
    Io(#[from] std::io::Error),

    /// A rule has an empty pattern
    #[error("rule #{index} has an empty pattern")]
    EmptyPattern {
        /// Position of the rule in declaration order
        index: usize,
    },

    /// A pattern is longer than the tokenizer supports
    #[error("pattern {pattern:?} is {len} characters long (max {max})")]
    PatternTooLong {
        /// The offending pattern
        pattern: String,
        /// Its length in characters
        len: usize,
        /// Maximum supported length
        max: usize,
    },

    /// A rule maps to an empty IPA string
    #[error("pattern {pattern:?} has an empty IPA symbol")]
    EmptyIpa {
        /// The offending pattern
        pattern: String,
    },

    /// The same pattern is declared twice
    #[error("pattern {0:?} is declared more than once")]
    DuplicatePattern(String),

    /// A shorter pattern is declared before a longer one it prefixes
    #[error("pattern {shorter:?} is declared before the longer pattern {longer:?} it prefixes")]
    ShadowedPattern {
        /// The earlier, shorter pattern
        shorter: String,
        /// The later, longer pattern
        longer: String,
    },

    /// More rules than there are phoneme codes
    #[error("rule table has {count} rules but only {max} phoneme codes exist")]
    TooManyRules {
        /// Number of declared rules
        count: usize,
        /// Size of the code alphabet
        max: usize,
    },

    /// Table metadata is missing or malformed
    #[error("invalid rule table metadata: {0}")]
    Metadata(String),
}

/// Crate-level error for the convenience API
#[derive(Error, Debug)]
pub enum Error {
    /// Transcription of a word failed
    #[error(transparent)]
    Transcription(#[from] TranscriptionError),

    /// Rule table could not be built
    #[error("rule table error: {0}")]
    RuleTable(#[from] RuleTableError),
}

/// Result type for transcription of a single word
pub type Result<T> = std::result::Result<T, TranscriptionError>;

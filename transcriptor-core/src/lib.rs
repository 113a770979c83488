//! Phonetic transcription of Ukrainian words
//!
//! Turns a single Ukrainian word into an IPA transcription wrapped in square
//! brackets. The work happens in one linear pass:
//!
//! 1. **Validate** the raw input against the Ukrainian alphabet
//! 2. **Normalize** case and apostrophes
//! 3. **Extract** an optional stress mark
//! 4. **Expand** complex consonants (`щ` → `шч`)
//! 5. **Resolve** iotated vowels by their left context
//! 6. **Encode** by longest match against the phoneme rule table
//! 7. **Decode** codes into IPA symbols
//!
//! The rule table is data: a TOML file compiled into the crate, built once
//! and passed to the [`Transcriber`] explicitly.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use transcriptor_core::{PhonemeTable, Transcriber};
//!
//! let table = Arc::new(PhonemeTable::ukrainian().unwrap());
//! let transcriber = Transcriber::new(table);
//!
//! assert_eq!(transcriber.transcribe("життя").unwrap().to_string(), "[ʒɪcːɑ]");
//! assert!(transcriber.transcribe("cat").is_err());
//! ```

pub mod alphabet;
pub mod error;
pub mod phoneme;
pub mod stages;
pub mod transcriber;
pub mod transcription;
pub mod word;

pub use alphabet::{ComplexConsonant, ComplexVowel, Consonant, Letter, SimpleVowel, Vowel};
pub use error::{Error, RuleTableError, TranscriptionError};
pub use phoneme::{EncodedWord, PhonemeCode, PhonemeRule, PhonemeTable, RuleKind};
pub use transcriber::{Transcriber, TranscriberBuilder, TranscriberConfig};
pub use transcription::Transcription;
pub use word::Word;

/// Transcribe one word with the built-in Ukrainian table
///
/// Builds the table on every call. Keep a [`Transcriber`] around when
/// transcribing more than a handful of words.
pub fn transcribe(word: &str) -> Result<String, Error> {
    let transcriber = Transcriber::builder().build()?;
    Ok(transcriber.transcribe(word)?.to_string())
}

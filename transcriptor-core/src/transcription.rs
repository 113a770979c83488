//! Transcription result

use std::fmt;

/// Ordered IPA symbols of one word
///
/// Displays as the symbols concatenated without separators inside square
/// brackets, e.g. `[mrijɑ]`. The stress offset is carried along for callers
/// that want it; it never changes the symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcription {
    symbols: Vec<String>,
    stress: Option<usize>,
}

impl Transcription {
    pub fn new(symbols: Vec<String>, stress: Option<usize>) -> Self {
        Self { symbols, stress }
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Character offset of the stressed vowel in the normalized input word
    pub fn stress_offset(&self) -> Option<usize> {
        self.stress
    }

    /// Number of phonemes
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols joined without brackets
    pub fn ipa(&self) -> String {
        self.symbols.concat()
    }
}

impl fmt::Display for Transcription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for symbol in &self.symbols {
            f.write_str(symbol)?;
        }
        f.write_str("]")
    }
}

//! Phoneme decoder

use super::{EncodedWord, PhonemeTable};
use crate::error::{Result, TranscriptionError};

/// Maps phoneme codes back to IPA symbols
#[derive(Debug, Clone, Copy)]
pub struct PhonemeDecoder<'a> {
    table: &'a PhonemeTable,
}

impl<'a> PhonemeDecoder<'a> {
    pub fn new(table: &'a PhonemeTable) -> Self {
        Self { table }
    }

    /// IPA symbols for every code, in order
    pub fn decode(&self, encoded: &EncodedWord) -> Result<Vec<String>> {
        encoded
            .codes()
            .iter()
            .map(|&code| {
                self.table
                    .rule(code)
                    .map(|rule| rule.ipa().to_string())
                    .ok_or(TranscriptionError::UnmappedCode { code })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phoneme::PhonemeEncoder;

    #[test]
    fn test_decode_symbols_in_order() {
        let table = PhonemeTable::ukrainian().unwrap();
        let encoded = PhonemeEncoder::new(&table).encode("знаннье").unwrap();
        let symbols = PhonemeDecoder::new(&table).decode(&encoded).unwrap();
        assert_eq!(symbols, vec!["z", "n", "ɑ", "ɲː", "ɛ"]);
    }

    #[test]
    fn test_every_assigned_code_decodes() {
        let table = PhonemeTable::ukrainian().unwrap();
        let encoded = EncodedWord::from_codes(table.rules().iter().map(|r| r.code()));
        let symbols = PhonemeDecoder::new(&table).decode(&encoded).unwrap();

        assert_eq!(symbols.len(), table.len());
        for (symbol, rule) in symbols.iter().zip(table.rules()) {
            assert_eq!(symbol, rule.ipa());
        }
    }

    #[test]
    fn test_unmapped_code() {
        let table = PhonemeTable::ukrainian().unwrap();
        // 60 rules, so '9' (index 61) has no rule
        let encoded = EncodedWord::from_symbols("a9").unwrap();
        let err = PhonemeDecoder::new(&table).decode(&encoded).unwrap_err();
        assert!(matches!(err, TranscriptionError::UnmappedCode { code } if code.symbol() == '9'));
    }
}

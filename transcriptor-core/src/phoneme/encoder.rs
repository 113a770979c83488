//! Longest-match phoneme encoder

use std::fmt;

use smallvec::SmallVec;

use super::{PhonemeCode, PhonemeTable};
use crate::alphabet::SOFT_SIGN;
use crate::error::{Result, TranscriptionError};

/// A word as a sequence of phoneme codes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedWord {
    codes: SmallVec<[PhonemeCode; 16]>,
}

impl EncodedWord {
    /// Build from codes directly
    pub fn from_codes(codes: impl IntoIterator<Item = PhonemeCode>) -> Self {
        Self {
            codes: codes.into_iter().collect(),
        }
    }

    /// Parse a code mask such as `"Mbc"`, `None` on a foreign symbol
    pub fn from_symbols(symbols: &str) -> Option<Self> {
        symbols
            .chars()
            .map(PhonemeCode::from_symbol)
            .collect::<Option<SmallVec<_>>>()
            .map(|codes| Self { codes })
    }

    pub fn codes(&self) -> &[PhonemeCode] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl fmt::Display for EncodedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.codes.iter().try_for_each(|code| write!(f, "{code}"))
    }
}

/// Tokenizes a prepared word against a phoneme table
///
/// At every position the longest matching pattern is consumed, so a
/// three-letter cluster is never split into its shorter prefixes.
#[derive(Debug, Clone, Copy)]
pub struct PhonemeEncoder<'a> {
    table: &'a PhonemeTable,
}

impl<'a> PhonemeEncoder<'a> {
    pub fn new(table: &'a PhonemeTable) -> Self {
        Self { table }
    }

    /// Encode a word whose complex letters have already been expanded
    ///
    /// A soft sign that no rule absorbs has nothing to palatalize and is
    /// dropped. Any other unmatched letter means the table is incomplete.
    pub fn encode(&self, word: &str) -> Result<EncodedWord> {
        let chars: Vec<char> = word.chars().collect();
        let mut codes = SmallVec::new();
        let mut pos = 0;

        while pos < chars.len() {
            match self.select_match(&chars, pos) {
                Some((code, len)) => {
                    codes.push(code);
                    pos += len;
                }
                None if chars[pos] == SOFT_SIGN => {
                    log::trace!("dropping unattached soft sign at {pos} in {word:?}");
                    pos += 1;
                }
                None => {
                    return Err(TranscriptionError::UnencodableLetter {
                        letter: chars[pos],
                        position: pos,
                    });
                }
            }
        }

        Ok(EncodedWord { codes })
    }

    /// Longest match at `pos` that no higher-priority rule cuts into
    ///
    /// A candidate is skipped when a rule declared before it matches at a
    /// position inside its span, so `дззь` reads as `д` + `ззь` rather
    /// than `дз` + `зь`. The shortest candidate is always accepted.
    fn select_match(&self, chars: &[char], pos: usize) -> Option<(PhonemeCode, usize)> {
        let candidates = self.table.prefix_matches(&chars[pos..]);
        let (&shortest, longer) = candidates.split_first()?;

        longer
            .iter()
            .rev()
            .copied()
            .find(|&(code, len)| !self.is_cut(chars, pos, code, len))
            .or(Some(shortest))
    }

    fn is_cut(&self, chars: &[char], pos: usize, code: PhonemeCode, len: usize) -> bool {
        (pos + 1..pos + len).any(|inner| {
            self.table
                .prefix_matches(&chars[inner..])
                .iter()
                .any(|&(other, _)| other < code)
        })
    }
}

//! Single-symbol phoneme codes

use std::fmt;

/// Symbols available for phoneme codes, in assignment order
pub const CODE_ALPHABET: &[u8; 62] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// One phoneme of an encoded word
///
/// A code is the position of its rule in the table, rendered as one symbol
/// of [`CODE_ALPHABET`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhonemeCode(u8);

impl PhonemeCode {
    /// Number of distinct codes
    pub const MAX: usize = CODE_ALPHABET.len();

    /// Code for the rule at `index`, `None` past the end of the alphabet
    pub fn new(index: usize) -> Option<Self> {
        (index < Self::MAX).then(|| Self(index as u8))
    }

    /// Parse a code back from its symbol
    pub fn from_symbol(symbol: char) -> Option<Self> {
        if !symbol.is_ascii() {
            return None;
        }
        CODE_ALPHABET
            .iter()
            .position(|&b| b == symbol as u8)
            .map(|index| Self(index as u8))
    }

    /// Rule index this code stands for
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Printable symbol
    #[inline]
    pub fn symbol(self) -> char {
        CODE_ALPHABET[self.0 as usize] as char
    }
}

impl fmt::Display for PhonemeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_symbols() {
        assert_eq!(PhonemeCode::new(0).unwrap().symbol(), 'a');
        assert_eq!(PhonemeCode::new(26).unwrap().symbol(), 'A');
        assert_eq!(PhonemeCode::new(52).unwrap().symbol(), '0');
        assert_eq!(PhonemeCode::new(61).unwrap().symbol(), '9');
        assert!(PhonemeCode::new(62).is_none());
    }

    #[test]
    fn test_symbol_lookup() {
        for index in 0..PhonemeCode::MAX {
            let code = PhonemeCode::new(index).unwrap();
            assert_eq!(PhonemeCode::from_symbol(code.symbol()), Some(code));
        }
        assert!(PhonemeCode::from_symbol('-').is_none());
        assert!(PhonemeCode::from_symbol('я').is_none());
    }
}

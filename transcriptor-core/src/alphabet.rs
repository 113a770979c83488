//! Ukrainian letter classes
//!
//! Letters fall into closed classes: simple and complex (iotated) vowels,
//! simple and complex consonants, plus the glide `й`, the soft sign and the
//! canonical apostrophe marker. Complex letters expand into two simple ones
//! before encoding.

use crate::phoneme::{PhonemeDecoder, PhonemeEncoder, PhonemeTable};

/// Canonical apostrophe marker (U+02BC MODIFIER LETTER APOSTROPHE)
pub const APOSTROPHE: char = '\u{02BC}';

/// Combining acute accent marking stress (U+0301)
pub const ACCENT: char = '\u{0301}';

/// Soft sign
pub const SOFT_SIGN: char = 'ь';

/// Glide consonant
pub const GLIDE: char = 'й';

/// Lowercase Ukrainian alphabet
pub const LOWERCASE: &str = "абвгґдеєжзиіїйклмнопрстуфхцчшщьюя";

/// Uppercase Ukrainian alphabet
pub const UPPERCASE: &str = "АБВГҐДЕЄЖЗИІЇЙКЛМНОПРСТУФХЦЧШЩЬЮЯ";

/// Vowel with a single reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimpleVowel {
    A,
    E,
    Y,
    I,
    O,
    U,
}

impl SimpleVowel {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'а' => Some(SimpleVowel::A),
            'е' => Some(SimpleVowel::E),
            'и' => Some(SimpleVowel::Y),
            'і' => Some(SimpleVowel::I),
            'о' => Some(SimpleVowel::O),
            'у' => Some(SimpleVowel::U),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            SimpleVowel::A => 'а',
            SimpleVowel::E => 'е',
            SimpleVowel::Y => 'и',
            SimpleVowel::I => 'і',
            SimpleVowel::O => 'о',
            SimpleVowel::U => 'у',
        }
    }
}

/// Iotated vowel
///
/// Reads as `й` + vowel at word start, after a vowel or after an
/// apostrophe, and as soft sign + vowel after a consonant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComplexVowel {
    Ya,
    Yu,
    Ye,
    Yi,
}

impl ComplexVowel {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'я' => Some(ComplexVowel::Ya),
            'ю' => Some(ComplexVowel::Yu),
            'є' => Some(ComplexVowel::Ye),
            'ї' => Some(ComplexVowel::Yi),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            ComplexVowel::Ya => 'я',
            ComplexVowel::Yu => 'ю',
            ComplexVowel::Ye => 'є',
            ComplexVowel::Yi => 'ї',
        }
    }

    /// Plain vowel carried by this letter
    pub fn base(self) -> SimpleVowel {
        match self {
            ComplexVowel::Ya => SimpleVowel::A,
            ComplexVowel::Yu => SimpleVowel::U,
            ComplexVowel::Ye => SimpleVowel::E,
            ComplexVowel::Yi => SimpleVowel::I,
        }
    }

    /// `й` + plain vowel
    pub fn glide(self) -> [char; 2] {
        [GLIDE, self.base().letter()]
    }

    /// Soft sign + plain vowel; `ї` keeps its glide in every context
    pub fn soft(self) -> [char; 2] {
        match self {
            ComplexVowel::Yi => self.glide(),
            _ => [SOFT_SIGN, self.base().letter()],
        }
    }

    /// Expansion for the given left context
    pub fn expand(self, after_consonant: bool) -> [char; 2] {
        if after_consonant {
            self.soft()
        } else {
            self.glide()
        }
    }
}

/// Vowel letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vowel {
    Simple(SimpleVowel),
    Complex(ComplexVowel),
}

/// Letter standing for a consonant cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComplexConsonant {
    Shcha,
}

impl ComplexConsonant {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'щ' => Some(ComplexConsonant::Shcha),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            ComplexConsonant::Shcha => 'щ',
        }
    }

    /// Two-letter phonetic spelling
    pub fn digraph(self) -> &'static str {
        match self {
            ComplexConsonant::Shcha => "шч",
        }
    }
}

/// Consonant letters that are not expanded
pub const SIMPLE_CONSONANTS: [char; 20] = [
    'б', 'в', 'г', 'ґ', 'д', 'ж', 'з', 'к', 'л', 'м', 'н', 'п', 'р', 'с', 'т', 'ф', 'х', 'ц',
    'ч', 'ш',
];

/// Consonant letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Consonant {
    Simple(char),
    Complex(ComplexConsonant),
}

impl Consonant {
    pub fn from_char(ch: char) -> Option<Self> {
        if SIMPLE_CONSONANTS.contains(&ch) {
            Some(Consonant::Simple(ch))
        } else {
            ComplexConsonant::from_char(ch).map(Consonant::Complex)
        }
    }

    pub fn letter(self) -> char {
        match self {
            Consonant::Simple(ch) => ch,
            Consonant::Complex(complex) => complex.letter(),
        }
    }
}

/// Any character that may appear in a normalized word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Letter {
    Vowel(Vowel),
    Consonant(Consonant),
    /// `й`, a consonant that never softens a following vowel
    Glide,
    SoftSign,
    /// Canonical apostrophe marker
    Marker,
}

impl Letter {
    /// Classify a lowercase character, `None` outside the alphabet
    pub fn classify(ch: char) -> Option<Self> {
        if let Some(vowel) = SimpleVowel::from_char(ch) {
            return Some(Letter::Vowel(Vowel::Simple(vowel)));
        }
        if let Some(vowel) = ComplexVowel::from_char(ch) {
            return Some(Letter::Vowel(Vowel::Complex(vowel)));
        }
        if let Some(consonant) = Consonant::from_char(ch) {
            return Some(Letter::Consonant(consonant));
        }
        match ch {
            GLIDE => Some(Letter::Glide),
            SOFT_SIGN => Some(Letter::SoftSign),
            APOSTROPHE => Some(Letter::Marker),
            _ => None,
        }
    }

    pub fn is_vowel(&self) -> bool {
        matches!(self, Letter::Vowel(_))
    }

    /// Consonants that palatalize a following iotated vowel
    pub fn is_consonant(&self) -> bool {
        matches!(self, Letter::Consonant(_))
    }

    pub fn letter(&self) -> char {
        match self {
            Letter::Vowel(Vowel::Simple(v)) => v.letter(),
            Letter::Vowel(Vowel::Complex(v)) => v.letter(),
            Letter::Consonant(c) => c.letter(),
            Letter::Glide => GLIDE,
            Letter::SoftSign => SOFT_SIGN,
            Letter::Marker => APOSTROPHE,
        }
    }

    /// Spelling the encoder sees for this letter when read on its own
    fn spelling(&self) -> String {
        match self {
            Letter::Vowel(Vowel::Complex(v)) => v.glide().iter().collect(),
            Letter::Consonant(Consonant::Complex(c)) => c.digraph().to_string(),
            Letter::Marker => String::new(),
            other => other.letter().to_string(),
        }
    }

    /// IPA reading of the letter in isolation
    ///
    /// Iotated vowels read with their glide. Letters with no sound of their
    /// own (soft sign, apostrophe) give an empty string. `None` if the table
    /// lacks a rule for the letter.
    pub fn to_ipa(&self, table: &PhonemeTable) -> Option<String> {
        let encoded = PhonemeEncoder::new(table).encode(&self.spelling()).ok()?;
        let symbols = PhonemeDecoder::new(table).decode(&encoded).ok()?;
        Some(symbols.concat())
    }
}

/// Every lowercase letter of the alphabet, classified
pub fn letters() -> impl Iterator<Item = Letter> {
    LOWERCASE.chars().filter_map(Letter::classify)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_is_fully_classified() {
        assert_eq!(LOWERCASE.chars().count(), 33);
        assert_eq!(UPPERCASE.chars().count(), 33);
        assert_eq!(letters().count(), 33);
        for (upper, lower) in UPPERCASE.chars().zip(LOWERCASE.chars()) {
            assert_eq!(upper.to_lowercase().next(), Some(lower));
        }
    }

    #[test]
    fn test_classify() {
        assert_eq!(
            Letter::classify('я'),
            Some(Letter::Vowel(Vowel::Complex(ComplexVowel::Ya)))
        );
        assert_eq!(
            Letter::classify('щ'),
            Some(Letter::Consonant(Consonant::Complex(ComplexConsonant::Shcha)))
        );
        assert_eq!(
            Letter::classify('ґ'),
            Some(Letter::Consonant(Consonant::Simple('ґ')))
        );
        assert_eq!(Letter::classify('й'), Some(Letter::Glide));
        assert_eq!(Letter::classify(APOSTROPHE), Some(Letter::Marker));
        assert_eq!(Letter::classify('ы'), None);
        assert_eq!(Letter::classify('a'), None);
    }

    #[test]
    fn test_glide_and_soft_sign_do_not_palatalize() {
        assert!(!Letter::Glide.is_consonant());
        assert!(!Letter::SoftSign.is_consonant());
        assert!(!Letter::Marker.is_consonant());
        assert!(Letter::classify('щ').unwrap().is_consonant());
    }

    #[test]
    fn test_complex_vowel_expansions() {
        assert_eq!(ComplexVowel::Ya.expand(false), ['й', 'а']);
        assert_eq!(ComplexVowel::Ya.expand(true), ['ь', 'а']);
        assert_eq!(ComplexVowel::Yu.expand(true), ['ь', 'у']);
        assert_eq!(ComplexVowel::Ye.expand(false), ['й', 'е']);
        assert_eq!(ComplexVowel::Yi.expand(true), ['й', 'і']);
        assert_eq!(ComplexVowel::Yi.expand(false), ['й', 'і']);
    }

    #[test]
    fn test_to_ipa() {
        let table = PhonemeTable::ukrainian().unwrap();
        let ipa = |ch| Letter::classify(ch).unwrap().to_ipa(&table);

        assert_eq!(ipa('а').as_deref(), Some("ɑ"));
        assert_eq!(ipa('ч').as_deref(), Some("t͡ʃ"));
        assert_eq!(ipa('щ').as_deref(), Some("ʃt͡ʃ"));
        assert_eq!(ipa('я').as_deref(), Some("jɑ"));
        assert_eq!(ipa('ь').as_deref(), Some(""));
        assert_eq!(ipa(APOSTROPHE).as_deref(), Some(""));
    }
}

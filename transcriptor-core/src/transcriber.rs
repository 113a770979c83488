//! Transcription pipeline

use std::sync::Arc;

use crate::error::{Result, RuleTableError};
use crate::phoneme::{PhonemeDecoder, PhonemeEncoder, PhonemeTable};
use crate::stages::{
    AccentExtractor, ComplexConsonantExpander, ComplexVowelResolver, InputValidator, Normalizer,
    Stage,
};
use crate::transcription::Transcription;
use crate::word::Word;

/// Transcriber settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranscriberConfig {
    /// Permit U+0301 in input and record the stressed vowel
    pub accept_stress_marks: bool,
}

/// Turns Ukrainian words into bracketed IPA transcriptions
///
/// Holds the shared rule table and a compiled validator. `transcribe` takes
/// `&self` and touches no shared mutable state, so one transcriber can
/// serve any number of threads.
///
/// ```rust
/// use std::sync::Arc;
/// use transcriptor_core::{PhonemeTable, Transcriber};
///
/// let table = Arc::new(PhonemeTable::ukrainian().unwrap());
/// let transcriber = Transcriber::new(table);
///
/// let result = transcriber.transcribe("мрія").unwrap();
/// assert_eq!(result.to_string(), "[mrijɑ]");
/// ```
#[derive(Debug, Clone)]
pub struct Transcriber {
    table: Arc<PhonemeTable>,
    config: TranscriberConfig,
    validator: InputValidator,
}

impl Transcriber {
    /// Create with default settings
    pub fn new(table: Arc<PhonemeTable>) -> Self {
        Self::with_config(table, TranscriberConfig::default())
    }

    pub fn with_config(table: Arc<PhonemeTable>, config: TranscriberConfig) -> Self {
        Self {
            validator: InputValidator::new(config.accept_stress_marks),
            table,
            config,
        }
    }

    pub fn builder() -> TranscriberBuilder {
        TranscriberBuilder::default()
    }

    pub fn table(&self) -> &Arc<PhonemeTable> {
        &self.table
    }

    pub fn config(&self) -> &TranscriberConfig {
        &self.config
    }

    /// Transcribe one word
    ///
    /// Fails with `InvalidCharset` if the word holds anything outside the
    /// permitted alphabet; the other error variants only arise from an
    /// incomplete rule table.
    pub fn transcribe(&self, input: &str) -> Result<Transcription> {
        self.validator.validate(input)?;

        let mut word = Word::new(input);
        let stages: [&dyn Stage; 4] = [
            &Normalizer,
            &AccentExtractor,
            &ComplexConsonantExpander,
            &ComplexVowelResolver,
        ];
        for stage in stages {
            stage.apply(&mut word);
            log::trace!("{}: {}", stage.name(), word);
        }

        let encoded = PhonemeEncoder::new(&self.table).encode(word.as_str())?;
        log::trace!("encode: {encoded}");

        let symbols = PhonemeDecoder::new(&self.table).decode(&encoded)?;
        Ok(Transcription::new(symbols, word.stress()))
    }
}

/// Builder for [`Transcriber`]
#[derive(Debug, Default)]
pub struct TranscriberBuilder {
    table: Option<Arc<PhonemeTable>>,
    config: TranscriberConfig,
}

impl TranscriberBuilder {
    /// Use a specific rule table (default: built-in Ukrainian)
    pub fn table(mut self, table: Arc<PhonemeTable>) -> Self {
        self.table = Some(table);
        self
    }

    pub fn accept_stress_marks(mut self, accept: bool) -> Self {
        self.config.accept_stress_marks = accept;
        self
    }

    /// Build the transcriber
    pub fn build(self) -> std::result::Result<Transcriber, RuleTableError> {
        let table = match self.table {
            Some(table) => table,
            None => Arc::new(PhonemeTable::ukrainian()?),
        };
        Ok(Transcriber::with_config(table, self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TranscriptionError;

    fn transcriber() -> Transcriber {
        Transcriber::builder().build().unwrap()
    }

    #[test]
    fn test_transcribe_basic_words() {
        let t = transcriber();
        assert_eq!(t.transcribe("мрія").unwrap().to_string(), "[mrijɑ]");
        assert_eq!(t.transcribe("сім'я").unwrap().to_string(), "[simjɑ]");
        assert_eq!(t.transcribe("ЧАЙ").unwrap().to_string(), "[t͡ʃɑj]");
    }

    #[test]
    fn test_invalid_input_fails_before_any_stage() {
        let err = transcriber().transcribe("cat").unwrap_err();
        assert!(matches!(err, TranscriptionError::InvalidCharset { .. }));
    }

    #[test]
    fn test_stress_marks() {
        let strict = transcriber();
        assert!(strict.transcribe("мрі\u{0301}я").is_err());

        let lenient = Transcriber::builder()
            .accept_stress_marks(true)
            .build()
            .unwrap();
        let result = lenient.transcribe("мрі\u{0301}я").unwrap();
        assert_eq!(result.to_string(), "[mrijɑ]");
        assert_eq!(result.stress_offset(), Some(2));
        assert!(lenient.config().accept_stress_marks);
    }

    #[test]
    fn test_shared_table() {
        let table = Arc::new(PhonemeTable::ukrainian().unwrap());
        let a = Transcriber::new(table.clone());
        let b = Transcriber::builder().table(table.clone()).build().unwrap();
        assert!(Arc::ptr_eq(a.table(), b.table()));
        assert_eq!(Arc::strong_count(&table), 3);
    }

    #[test]
    fn test_transcriber_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Transcriber>();
    }
}

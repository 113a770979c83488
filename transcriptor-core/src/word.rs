//! Working word threaded through the pipeline stages

use std::fmt;

/// Mutable per-call state of a word being transcribed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    stress: Option<usize>,
}

impl Word {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            stress: None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Replace the text with a stage's output
    pub fn set_text(&mut self, text: String) {
        self.text = text;
    }

    /// Character offset of the stressed letter in the normalized word
    pub fn stress(&self) -> Option<usize> {
        self.stress
    }

    pub fn set_stress(&mut self, offset: Option<usize>) {
        self.stress = offset;
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

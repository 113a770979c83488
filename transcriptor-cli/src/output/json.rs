//! JSON output formatter

use super::{Outcome, OutputFormatter};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs words as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    entries: Vec<EntryData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntryData {
    /// The input word
    pub word: String,
    /// Bracketed transcription, absent when rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcription: Option<String>,
    /// Stressed vowel offset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stress: Option<usize>,
    /// Message shown instead of a transcription
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            entries: Vec::new(),
        }
    }

    /// Consume the formatter, returning the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_entry(&mut self, word: &str, outcome: Outcome<'_>) -> Result<()> {
        let entry = match outcome {
            Outcome::Transcribed {
                transcription,
                stress,
            } => EntryData {
                word: word.to_string(),
                transcription: Some(transcription.to_string()),
                stress,
                error: None,
            },
            Outcome::Rejected { message } => EntryData {
                word: word.to_string(),
                transcription: None,
                stress: None,
                error: Some(message.to_string()),
            },
        };
        self.entries.push(entry);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.entries)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.entries)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_entries() {
        let mut formatter = JsonFormatter::new(Vec::new(), false);
        formatter
            .format_entry(
                "мрія",
                Outcome::Transcribed {
                    transcription: "[mrijɑ]",
                    stress: Some(2),
                },
            )
            .unwrap();
        formatter
            .format_entry("cat", Outcome::Rejected { message: "помилка" })
            .unwrap();
        formatter.finish().unwrap();

        let output = String::from_utf8(formatter.into_inner()).unwrap();
        let parsed: Vec<EntryData> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].transcription.as_deref(), Some("[mrijɑ]"));
        assert_eq!(parsed[0].stress, Some(2));
        assert_eq!(parsed[1].error.as_deref(), Some("помилка"));
        assert!(!output.contains("\"error\":null"));
    }

    #[test]
    fn test_empty_array() {
        let mut formatter = JsonFormatter::new(Vec::new(), true);
        formatter.finish().unwrap();
        let output = String::from_utf8(formatter.into_inner()).unwrap();
        assert_eq!(output.trim(), "[]");
    }
}

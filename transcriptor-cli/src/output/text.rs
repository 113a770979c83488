//! Plain text output formatter

use super::{Outcome, OutputFormatter};
use anyhow::Result;
use std::io::{self, Write};

/// Plain text formatter - outputs one `word<TAB>result` line per word
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the formatter, returning the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_entry(&mut self, word: &str, outcome: Outcome<'_>) -> Result<()> {
        match outcome {
            Outcome::Transcribed { transcription, .. } => {
                writeln!(self.writer, "{word}\t{transcription}")?
            }
            Outcome::Rejected { message } => writeln!(self.writer, "{word}\t{message}")?,
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

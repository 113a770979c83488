//! Transcribe a few words and show the intermediate encoding
//!
//! Run with: cargo run --example basic_usage

use std::sync::Arc;
use transcriptor_core::phoneme::PhonemeEncoder;
use transcriptor_core::{PhonemeTable, Transcriber};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let table = Arc::new(PhonemeTable::ukrainian()?);
    let transcriber = Transcriber::new(Arc::clone(&table));

    for word in ["мрія", "сім'я", "життя", "щука", "cat"] {
        match transcriber.transcribe(word) {
            Ok(transcription) => println!("{word:>8} → {transcription}"),
            Err(e) => println!("{word:>8} → error: {e}"),
        }
    }

    // Codes for a word whose complex letters are already expanded
    let encoded = PhonemeEncoder::new(&table).encode("життьа")?;
    println!("codes for 'життьа': {encoded}");

    Ok(())
}

//! End-to-end transcription tests against the built-in table

use std::sync::Arc;
use transcriptor_core::{PhonemeTable, Transcriber, TranscriptionError};

fn transcriber() -> Transcriber {
    Transcriber::new(Arc::new(PhonemeTable::ukrainian().unwrap()))
}

fn ipa(word: &str) -> String {
    transcriber().transcribe(word).unwrap().to_string()
}

#[test]
fn test_reference_words() {
    let cases = [
        ("мрія", "[mrijɑ]"),
        ("сім'я", "[simjɑ]"),
        ("кінь", "[kinʲ]"),
        ("хліб", "[xlib]"),
        ("гарбуз", "[ɦɑrbuz]"),
        ("ґанок", "[ɡɑnɔk]"),
        ("цукор", "[t͡sukɔr]"),
        ("сонце", "[sɔnt͡sɛ]"),
        ("ніч", "[nit͡ʃ]"),
        ("сьогодні", "[sʲɔɦɔdni]"),
        ("ясний", "[jɑsnɪj]"),
        ("Україна", "[ukrɑjinɑ]"),
    ];

    for (word, expected) in cases {
        assert_eq!(ipa(word), expected, "transcription of {word}");
    }
}

#[test]
fn test_geminate_clusters_are_single_symbols() {
    assert_eq!(ipa("життя"), "[ʒɪcːɑ]");
    assert_eq!(ipa("знання"), "[znɑɲːɑ]");
    assert_eq!(ipa("волосся"), "[ʋɔlɔsʲːɑ]");
    assert_eq!(ipa("зілля"), "[ziʎːɑ]");
    assert_eq!(ipa("збіжжя"), "[zbiʒʲːɑ]");

    // Never the shorter-rule pieces
    let life = ipa("життя");
    assert!(!life.contains("tʲ"));
    assert!(!life.contains("tt"));
}

#[test]
fn test_geminate_cluster_wins_over_preceding_affricate() {
    assert_eq!(ipa("дззя"), "[dzʲːɑ]");
    assert_eq!(ipa("джжя"), "[dʒʲːɑ]");
    assert_eq!(ipa("піджжю"), "[pidʒʲːu]");

    // The affricate still forms when no cluster follows
    assert_eq!(ipa("дзз"), "[d͡zz]");
}

#[test]
fn test_affricates() {
    assert_eq!(ipa("дзвін"), "[d͡zʋin]");
    assert_eq!(ipa("джерело"), "[d͡ʒɛrɛlɔ]");
    assert_eq!(ipa("дзьоб"), "[d͡zʲɔb]");
}

#[test]
fn test_iotated_vowel_context() {
    // Word-initial: glide
    assert_eq!(ipa("я"), "[jɑ]");
    assert_eq!(ipa("єнот"), "[jɛnɔt]");
    assert_eq!(ipa("Юля"), "[julʲɑ]");

    // After a consonant: palatalization, no glide
    let dawn = ipa("зоря");
    assert_eq!(dawn, "[zɔrʲɑ]");
    assert!(!dawn.contains('j'));
    assert_eq!(ipa("пісня"), "[pisnʲɑ]");
    assert_eq!(ipa("синє"), "[sɪnʲɛ]");

    // After a vowel: glide
    assert_eq!(ipa("моя"), "[mɔjɑ]");

    // 'ї' glides everywhere
    assert_eq!(ipa("їжак"), "[jiʒɑk]");
    assert_eq!(ipa("країна"), "[krɑjinɑ]");
}

#[test]
fn test_apostrophe_forces_glide() {
    assert_eq!(ipa("сім'я"), "[simjɑ]");
    assert_eq!(ipa("п\"ять"), "[pjɑtʲ]");
    assert_eq!(ipa("мʼясо"), "[mjɑsɔ]");
    assert_eq!(ipa("подвір'я"), "[pɔdʋirjɑ]");

    for word in ["сім'я", "п\"ять", "мʼясо"] {
        let out = ipa(word);
        assert!(!out.contains('\'') && !out.contains('"') && !out.contains('ʼ'));
    }
}

#[test]
fn test_shcha_matches_its_digraph() {
    assert_eq!(ipa("щука"), ipa("шчука"));
    assert_eq!(ipa("щука"), "[ʃt͡ʃukɑ]");
    assert_eq!(ipa("борщ"), "[bɔrʃt͡ʃ]");
    assert_eq!(ipa("щастя"), "[ʃt͡ʃɑstʲɑ]");
}

#[test]
fn test_case_insensitive() {
    assert_eq!(ipa("ЧАЙ"), "[t͡ʃɑj]");
    assert_eq!(ipa("МРІЯ"), ipa("мрія"));
}

#[test]
fn test_soft_sign_without_consonant_is_silent() {
    assert_eq!(ipa("ь"), "[]");
    assert_eq!(ipa("день"), "[dɛnʲ]");
    assert_eq!(ipa("сіль"), "[silʲ]");
}

#[test]
fn test_rejected_inputs() {
    let transcriber = transcriber();
    for word in ["cat", "сat", "", "мама1", "два слова", "ёлка", "так!", "мрі\u{0301}я"] {
        let err = transcriber.transcribe(word).unwrap_err();
        assert!(
            matches!(err, TranscriptionError::InvalidCharset { .. }),
            "{word:?} gave {err:?}"
        );
        assert!(!err.is_internal());
    }
}

#[test]
fn test_transcription_symbols() {
    let result = transcriber().transcribe("джерело").unwrap();
    assert_eq!(result.symbols(), ["d͡ʒ", "ɛ", "r", "ɛ", "l", "ɔ"]);
    assert_eq!(result.len(), 6);
    assert_eq!(result.stress_offset(), None);
}

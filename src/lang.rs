// src/lang.rs
use std::io::{Chain, Cursor, Read};

use whatlang::Lang;

use crate::error::{Result, WcError};
use crate::scan::is_separator_byte;

/// Sampling cap. Detection accuracy does not improve measurably past this
/// many tokens, so larger inputs are not read any further for detection.
pub const SAMPLE_TOKEN_LIMIT: usize = 1000;

/// Detected (or substituted) language tag and display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageResult {
    /// BCP-47-like tag, `und` when undetermined.
    pub tag: String,
    pub name: String,
}

impl LanguageResult {
    pub fn unknown() -> Self {
        Self {
            tag: "und".to_string(),
            name: "Unknown".to_string(),
        }
    }
}

/// A bounded text sample plus a verbatim tee of every byte consumed while
/// building it, so counting passes can replay the same input.
pub struct Sample<R> {
    /// Up to [`SAMPLE_TOKEN_LIMIT`] raw tokens joined by single spaces.
    /// Casing and punctuation are preserved for detection accuracy.
    pub text: String,
    consumed: Vec<u8>,
    rest: R,
}

impl<R: Read> Sample<R> {
    /// Read tokens from `reader` until it is exhausted or the token cap is
    /// reached. Every byte read is retained even when the cap cuts the
    /// tokenizer short mid-chunk.
    pub fn build(mut reader: R) -> Result<Self> {
        let mut consumed = Vec::new();
        let mut tokens: Vec<Vec<u8>> = Vec::new();
        let mut current = Vec::new();
        let mut capped = false;
        let mut buf = [0u8; 8192];

        loop {
            let n = reader.read(&mut buf).map_err(|source| WcError::Scan {
                operation: "language sample",
                source,
            })?;
            if n == 0 {
                break;
            }
            consumed.extend_from_slice(&buf[..n]);

            for &b in &buf[..n] {
                if is_separator_byte(b) {
                    if !current.is_empty() {
                        tokens.push(std::mem::take(&mut current));
                        if tokens.len() == SAMPLE_TOKEN_LIMIT {
                            capped = true;
                            break;
                        }
                    }
                } else {
                    current.push(b);
                }
            }
            if capped {
                break;
            }
        }

        if !capped && !current.is_empty() {
            tokens.push(current);
        }

        let joined = tokens.join(&b' ');
        Ok(Self {
            text: String::from_utf8_lossy(&joined).into_owned(),
            consumed,
            rest: reader,
        })
    }

    /// Replay reader: the tee'd bytes followed by whatever the source still
    /// holds past the sampling cap.
    pub fn into_reader(self) -> Chain<Cursor<Vec<u8>>, R> {
        Cursor::new(self.consumed).chain(self.rest)
    }
}

/// Identify the language of `sample`. An empty sample short-circuits to
/// `und`/`Unknown` without running detection.
pub fn detect(sample: &str) -> LanguageResult {
    if sample.is_empty() {
        return LanguageResult::unknown();
    }
    match whatlang::detect(sample) {
        Some(info) => present(info.lang()),
        None => LanguageResult::unknown(),
    }
}

/// Presentation policy: four base languages are always rendered as one
/// canonical regional variant, whatever region the detector would infer.
fn present(lang: Lang) -> LanguageResult {
    let (tag, name) = match base_tag(lang) {
        "en" => ("en-US", "English (US)"),
        "es" => ("es-ES", "Spanish (Spain)"),
        "pt" => ("pt-BR", "Portuguese (Brazil)"),
        "zh" => ("zh-CN", "Chinese (Simplified)"),
        other => (other, lang.eng_name()),
    };
    LanguageResult {
        tag: tag.to_string(),
        name: name.to_string(),
    }
}

/// ISO 639-1 code where one exists; whatlang's ISO 639-3 code otherwise.
fn base_tag(lang: Lang) -> &'static str {
    match lang {
        Lang::Eng => "en",
        Lang::Spa => "es",
        Lang::Por => "pt",
        Lang::Cmn => "zh",
        Lang::Fra => "fr",
        Lang::Deu => "de",
        Lang::Ita => "it",
        Lang::Nld => "nl",
        Lang::Swe => "sv",
        Lang::Dan => "da",
        Lang::Nob => "nb",
        Lang::Fin => "fi",
        Lang::Rus => "ru",
        Lang::Ukr => "uk",
        Lang::Pol => "pl",
        Lang::Ces => "cs",
        Lang::Slk => "sk",
        Lang::Tur => "tr",
        Lang::Ara => "ar",
        Lang::Heb => "he",
        Lang::Hin => "hi",
        Lang::Ben => "bn",
        Lang::Jpn => "ja",
        Lang::Kor => "ko",
        Lang::Vie => "vi",
        Lang::Tha => "th",
        Lang::Ell => "el",
        Lang::Hun => "hu",
        Lang::Ron => "ro",
        Lang::Bul => "bg",
        Lang::Cat => "ca",
        Lang::Ind => "id",
        Lang::Pes => "fa",
        Lang::Urd => "ur",
        Lang::Lat => "la",
        Lang::Epo => "eo",
        other => other.code(),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn empty_input_is_unknown_without_detection() {
        let sample = Sample::build(Cursor::new("")).unwrap();
        assert!(sample.text.is_empty());
        assert_eq!(detect(&sample.text), LanguageResult::unknown());
    }

    #[test]
    fn whitespace_only_input_is_unknown() {
        let sample = Sample::build(Cursor::new("  \t \n  ")).unwrap();
        assert!(sample.text.is_empty());
        assert_eq!(detect(&sample.text).tag, "und");
    }

    #[test]
    fn sample_preserves_casing_and_punctuation() {
        let sample = Sample::build(Cursor::new("Hello, World!\nSecond line.")).unwrap();
        assert_eq!(sample.text, "Hello, World! Second line.");
    }

    #[test]
    fn tee_replays_every_consumed_byte() {
        let input = "alpha beta gamma";
        let sample = Sample::build(Cursor::new(input)).unwrap();
        let mut replayed = String::new();
        sample.into_reader().read_to_string(&mut replayed).unwrap();
        assert_eq!(replayed, input);
    }

    #[test]
    fn sample_stops_at_token_cap_but_replay_is_complete() {
        let input = (0..2500).map(|i| i.to_string()).collect::<Vec<_>>().join(" ");
        let sample = Sample::build(Cursor::new(input.clone())).unwrap();
        assert_eq!(sample.text.split(' ').count(), SAMPLE_TOKEN_LIMIT);

        let mut replayed = String::new();
        sample.into_reader().read_to_string(&mut replayed).unwrap();
        assert_eq!(replayed, input);
    }

    #[test]
    fn english_is_always_presented_as_en_us() {
        assert_eq!(
            present(Lang::Eng),
            LanguageResult {
                tag: "en-US".to_string(),
                name: "English (US)".to_string(),
            }
        );
    }

    #[test]
    fn regional_substitutions_cover_the_fixed_table() {
        assert_eq!(present(Lang::Spa).tag, "es-ES");
        assert_eq!(present(Lang::Spa).name, "Spanish (Spain)");
        assert_eq!(present(Lang::Por).tag, "pt-BR");
        assert_eq!(present(Lang::Por).name, "Portuguese (Brazil)");
        assert_eq!(present(Lang::Cmn).tag, "zh-CN");
        assert_eq!(present(Lang::Cmn).name, "Chinese (Simplified)");
    }

    #[test]
    fn other_languages_keep_their_own_tag_and_name() {
        assert_eq!(present(Lang::Fra).tag, "fr");
        assert_eq!(present(Lang::Fra).name, "French");
        assert_eq!(present(Lang::Deu).tag, "de");
        assert_eq!(present(Lang::Deu).name, "German");
    }

    #[test]
    fn detects_clearly_english_text() {
        let text = "This is English text for testing purposes. It contains multiple \
                    sentences with various words to ensure accurate detection.";
        let result = detect(text);
        assert_eq!(result.tag, "en-US");
        assert_eq!(result.name, "English (US)");
    }

    #[test]
    fn detects_clearly_spanish_text() {
        let text = "El zorro marrón rápido salta sobre el perro perezoso. Esta es una \
                    frase común utilizada para probar la detección de idiomas.";
        let result = detect(text);
        assert_eq!(result.tag, "es-ES");
        assert_eq!(result.name, "Spanish (Spain)");
    }

    #[test]
    fn sampling_read_error_propagates() {
        struct FailingReader;
        impl std::io::Read for FailingReader {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("simulated read error"))
            }
        }

        let err = Sample::build(FailingReader).err().unwrap();
        assert!(err.to_string().contains("language sample"));
    }
}

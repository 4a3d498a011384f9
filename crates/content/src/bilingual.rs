//! Detect-then-backfill translation of a single text.

use lindholm_core::lang::Lang;
use lindholm_translate::{Translate, TranslateError};

/// Both language variants of one text, plus which one the author wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BilingualText {
    pub da: String,
    pub en: String,
    pub source: Lang,
}

/// Produce both language variants of `text`.
///
/// First call targets English; the provider reports the detected source
/// language alongside. If the author already wrote English, a second call
/// backfills the Danish variant. Either way both fields end up populated
/// and the original text is stored verbatim in its own slot.
pub async fn translate_pair(
    translator: &dyn Translate,
    text: &str,
) -> Result<BilingualText, TranslateError> {
    let to_en = translator.translate(text, Lang::En).await?;

    match Lang::from_detected(&to_en.detected_source_language) {
        Lang::En => {
            let to_da = translator.translate(text, Lang::Da).await?;
            Ok(BilingualText {
                da: to_da.text,
                en: text.to_string(),
                source: Lang::En,
            })
        }
        Lang::Da => Ok(BilingualText {
            da: text.to_string(),
            en: to_en.text,
            source: Lang::Da,
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use lindholm_translate::Translation;

    use super::*;

    /// Stub provider that always detects the same source language and
    /// prefixes translations with the target code.
    struct StubTranslator {
        detected: &'static str,
        calls: AtomicUsize,
    }

    impl StubTranslator {
        fn new(detected: &'static str) -> Self {
            Self {
                detected,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl Translate for StubTranslator {
        async fn translate(
            &self,
            text: &str,
            target: Lang,
        ) -> Result<Translation, TranslateError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Translation {
                text: format!("[{}] {}", target.target_code(), text),
                detected_source_language: self.detected.to_string(),
            })
        }
    }

    #[tokio::test]
    async fn danish_input_translates_once() {
        let stub = StubTranslator::new("DA");
        let pair = translate_pair(&stub, "Ny kursusstart").await.expect("pair");

        assert_eq!(pair.source, Lang::Da);
        assert_eq!(pair.da, "Ny kursusstart");
        assert_eq!(pair.en, "[EN] Ny kursusstart");
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn english_input_backfills_danish() {
        let stub = StubTranslator::new("EN");
        let pair = translate_pair(&stub, "New course start").await.expect("pair");

        assert_eq!(pair.source, Lang::En);
        assert_eq!(pair.en, "New course start");
        assert_eq!(pair.da, "[DA] New course start");
        assert_eq!(stub.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn both_variants_always_populated() {
        for detected in ["DA", "EN", "DE"] {
            let stub = StubTranslator::new(detected);
            let pair = translate_pair(&stub, "Vi har ledige pladser")
                .await
                .expect("pair");
            assert!(!pair.da.is_empty());
            assert!(!pair.en.is_empty());
        }
    }

    #[tokio::test]
    async fn provider_failure_propagates() {
        struct FailingTranslator;

        #[async_trait]
        impl Translate for FailingTranslator {
            async fn translate(
                &self,
                _text: &str,
                _target: Lang,
            ) -> Result<Translation, TranslateError> {
                Err(TranslateError::Api {
                    status: 503,
                    body: "maintenance".into(),
                })
            }
        }

        let err = translate_pair(&FailingTranslator, "tekst").await.unwrap_err();
        assert!(matches!(err, TranslateError::Api { status: 503, .. }));
    }
}

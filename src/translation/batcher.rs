//! Chunked translation of key/text mappings.
//!
//! The provider accepts a bounded number of segments per request, so a
//! mapping is flattened into parallel key and value sequences, the values
//! are sent in consecutive chunks, and the concatenated results are zipped
//! back onto the keys. Any failing chunk aborts the whole conversion.

use std::collections::BTreeMap;

use tracing::debug;

use super::language::LanguageTag;
use super::provider::{TextFormat, TranslationProvider};
use crate::error::{Result, TranslateError};

/// Maximum number of segments sent in one provider request.
pub const MAX_SEGMENTS_PER_REQUEST: usize = 100;

/// Key to text mapping of a flat JSON or YAML document.
pub type Segments = BTreeMap<String, String>;

/// Translates every value of `original`, keeping each key bound to its own text.
///
/// Returns a mapping with exactly the keys of `original`, or the first error
/// encountered; nothing translated before the failure is returned.
pub async fn convert(
    provider: Option<&dyn TranslationProvider>,
    original: &Segments,
    source: &LanguageTag,
    target: &LanguageTag,
) -> Result<Segments> {
    let provider = provider.ok_or_else(|| {
        TranslateError::Configuration("translate client is not set".to_string())
    })?;

    // Both sequences come from the same traversal so index i lines up.
    let (keys, values): (Vec<&String>, Vec<String>) = original
        .iter()
        .map(|(key, value)| (key, value.clone()))
        .unzip();

    let mut translated = Vec::with_capacity(values.len());
    for (index, chunk) in values.chunks(MAX_SEGMENTS_PER_REQUEST).enumerate() {
        debug!(
            provider = provider.provider_name(),
            chunk = index,
            segments = chunk.len(),
            "sending translation batch"
        );

        let results = provider
            .translate_batch(chunk, source, target, TextFormat::Text)
            .await?;

        if results.len() != chunk.len() {
            return Err(TranslateError::Provider(format!(
                "provider returned {} translations for {} segments",
                results.len(),
                chunk.len()
            )));
        }
        translated.extend(results);
    }

    Ok(keys
        .into_iter()
        .cloned()
        .zip(translated.into_iter().map(|t| t.text))
        .collect())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::translation::mock::{MockMode, MockProvider};
    use std::collections::HashMap;

    fn tags() -> (LanguageTag, LanguageTag) {
        (
            LanguageTag::parse("en").unwrap(),
            LanguageTag::parse("fr").unwrap(),
        )
    }

    fn segments(count: usize) -> Segments {
        (0..count)
            .map(|i| (format!("key{i:04}"), format!("text {i}")))
            .collect()
    }

    #[tokio::test]
    async fn test_missing_provider_is_configuration_error() {
        let (source, target) = tags();
        let result = convert(None, &segments(3), &source, &target).await;
        assert!(matches!(result, Err(TranslateError::Configuration(_))));
    }

    #[tokio::test]
    async fn test_empty_mapping_makes_no_calls() {
        let provider = MockProvider::new(MockMode::Suffix);
        let (source, target) = tags();

        let result = convert(Some(&provider), &Segments::new(), &source, &target)
            .await
            .unwrap();

        assert!(result.is_empty());
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_small_mapping_uses_single_call() {
        let provider = MockProvider::new(MockMode::Suffix);
        let (source, target) = tags();
        let original = segments(7);

        let result = convert(Some(&provider), &original, &source, &target)
            .await
            .unwrap();

        assert_eq!(provider.call_sizes(), vec![7]);
        assert_eq!(
            result.keys().collect::<Vec<_>>(),
            original.keys().collect::<Vec<_>>()
        );
    }

    #[tokio::test]
    async fn test_exact_limit_is_one_chunk() {
        let provider = MockProvider::new(MockMode::Suffix);
        let (source, target) = tags();

        convert(
            Some(&provider),
            &segments(MAX_SEGMENTS_PER_REQUEST),
            &source,
            &target,
        )
        .await
        .unwrap();

        assert_eq!(provider.call_sizes(), vec![MAX_SEGMENTS_PER_REQUEST]);
    }

    #[tokio::test]
    async fn test_large_mapping_is_chunked_and_realigned() {
        let provider = MockProvider::new(MockMode::Suffix);
        let (source, target) = tags();
        let original = segments(250);

        let result = convert(Some(&provider), &original, &source, &target)
            .await
            .unwrap();

        assert_eq!(provider.call_sizes(), vec![100, 100, 50]);
        assert_eq!(result.len(), original.len());
        for (key, text) in &original {
            assert_eq!(result[key], format!("{text}_fr"));
        }
    }

    #[tokio::test]
    async fn test_multiple_of_limit_has_no_trailing_call() {
        let provider = MockProvider::new(MockMode::Suffix);
        let (source, target) = tags();

        convert(Some(&provider), &segments(200), &source, &target)
            .await
            .unwrap();

        assert_eq!(provider.call_sizes(), vec![100, 100]);
    }

    #[tokio::test]
    async fn test_keys_and_values_stay_paired() {
        let mappings = HashMap::from([
            ("Hello".to_string(), "Bonjour".to_string()),
            ("Goodbye".to_string(), "Au revoir".to_string()),
            ("Thanks".to_string(), "Merci".to_string()),
        ]);
        let provider = MockProvider::new(MockMode::Mappings(mappings));
        let (source, target) = tags();
        let original = Segments::from([
            ("z_greeting".to_string(), "Hello".to_string()),
            ("a_farewell".to_string(), "Goodbye".to_string()),
            ("m_thanks".to_string(), "Thanks".to_string()),
        ]);

        let result = convert(Some(&provider), &original, &source, &target)
            .await
            .unwrap();

        assert_eq!(result["z_greeting"], "Bonjour");
        assert_eq!(result["a_farewell"], "Au revoir");
        assert_eq!(result["m_thanks"], "Merci");
    }

    #[tokio::test]
    async fn test_failing_chunk_aborts_everything() {
        let provider = MockProvider::new(MockMode::Suffix).fail_on_call(1);
        let (source, target) = tags();

        let result = convert(Some(&provider), &segments(250), &source, &target).await;

        assert!(matches!(result, Err(TranslateError::Provider(_))));
        // The third chunk is never sent.
        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn test_short_provider_response_is_rejected() {
        let provider = MockProvider::new(MockMode::Truncate);
        let (source, target) = tags();

        let result = convert(Some(&provider), &segments(3), &source, &target).await;

        let Err(TranslateError::Provider(message)) = result else {
            panic!("expected a provider error");
        };
        assert!(message.contains("2 translations for 3 segments"));
    }
}

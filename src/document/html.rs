use std::path::Path;

use async_trait::async_trait;
use tracing::debug;

use super::{DocumentFormat, DocumentTranslator, OutputTarget, ProviderHandle, read_source};
use crate::error::{Result, TranslateError};
use crate::translation::{LanguageTag, TextFormat};

/// An HTML document translated as one segment.
///
/// Markup is preserved by the provider's HTML mode. Parsing accepts any
/// readable file.
pub struct HtmlDocument {
    provider: ProviderHandle,
    original: Option<String>,
    translation: Option<String>,
}

impl HtmlDocument {
    pub const fn new(provider: ProviderHandle) -> Self {
        Self {
            provider,
            original: None,
            translation: None,
        }
    }

    pub fn original(&self) -> Option<&str> {
        self.original.as_deref()
    }

    pub fn translation(&self) -> Option<&str> {
        self.translation.as_deref()
    }

    pub fn set_original(&mut self, original: impl Into<String>) {
        self.original = Some(original.into());
        self.translation = None;
    }

    pub fn set_translation(&mut self, translation: impl Into<String>) {
        self.translation = Some(translation.into());
    }
}

#[async_trait]
impl DocumentTranslator for HtmlDocument {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Html
    }

    fn parse_file(&mut self, path: &Path) -> Result<()> {
        let content = read_source(path)?;
        self.set_original(content);
        Ok(())
    }

    async fn translate(&mut self, source: &LanguageTag, target: &LanguageTag) -> Result<()> {
        self.translation = None;
        let provider = self.provider.as_deref().ok_or_else(|| {
            TranslateError::Configuration("translate client is not set".to_string())
        })?;
        let original = self.original.as_ref().ok_or(TranslateError::NotParsed)?;

        debug!(
            provider = provider.provider_name(),
            bytes = original.len(),
            "sending HTML document"
        );
        let results = provider
            .translate_batch(
                std::slice::from_ref(original),
                source,
                target,
                TextFormat::Html,
            )
            .await?;

        let translated = results.into_iter().next().ok_or_else(|| {
            TranslateError::Provider("provider returned no translation for the document".into())
        })?;
        self.translation = Some(translated.text);
        Ok(())
    }

    fn save_result(&self, target: &OutputTarget) -> Result<()> {
        let translation = self
            .translation
            .as_ref()
            .ok_or(TranslateError::NotTranslated)?;
        target.write(translation)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::translation::mock::{MockMode, MockProvider};
    use std::collections::HashMap;
    use std::fs;
    use std::sync::Arc;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_translate_sends_single_html_segment() {
        let provider = Arc::new(MockProvider::new(MockMode::Mappings(HashMap::from([(
            "<h1>Hello world!</h1>".to_string(),
            "<h1>Bonjour le monde!</h1>".to_string(),
        )]))));
        let mut document = HtmlDocument::new(Some(provider.clone()));
        document.set_original("<h1>Hello world!</h1>");

        document
            .translate(&LanguageTag::english(), &LanguageTag::parse("fr").unwrap())
            .await
            .unwrap();

        assert_eq!(document.translation(), Some("<h1>Bonjour le monde!</h1>"));
        let calls = provider.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].texts, vec!["<h1>Hello world!</h1>".to_string()]);
        assert_eq!(calls[0].format, TextFormat::Html);
    }

    #[tokio::test]
    async fn test_translate_without_provider_fails() {
        let mut document = HtmlDocument::new(None);
        document.set_original("<p>Hi</p>");

        let result = document
            .translate(&LanguageTag::english(), &LanguageTag::english())
            .await;

        assert!(matches!(result, Err(TranslateError::Configuration(_))));
        assert!(document.translation().is_none());
    }

    #[tokio::test]
    async fn test_provider_error_propagates() {
        let provider = Arc::new(MockProvider::new(MockMode::Error("quota exceeded".into())));
        let mut document = HtmlDocument::new(Some(provider));
        document.set_original("<p>Hi</p>");

        let result = document
            .translate(&LanguageTag::english(), &LanguageTag::english())
            .await;

        assert!(matches!(result, Err(TranslateError::Provider(ref m)) if m == "quota exceeded"));
    }

    #[test]
    fn test_parse_file_accepts_any_readable_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("demo.html");
        fs::write(&path, "not really <html").unwrap();

        let mut document = HtmlDocument::new(None);
        document.parse_file(&path).unwrap();
        assert_eq!(document.original(), Some("not really <html"));

        assert!(matches!(
            document.parse_file(Path::new("./not-exists.html")),
            Err(TranslateError::Read { .. })
        ));
    }

    #[test]
    fn test_save_result_writes_verbatim() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("translate-result.html");

        let mut document = HtmlDocument::new(None);
        document.set_translation("<h1> Bonjour le monde! </h1>");
        document.save_result(&OutputTarget::File(path.clone())).unwrap();

        assert_eq!(
            fs::read_to_string(path).unwrap(),
            "<h1> Bonjour le monde! </h1>"
        );
    }
}

//! The translation provider capability consumed by the batcher and the adapters.

use async_trait::async_trait;

use super::language::{LanguageTag, SupportedLanguage};
use crate::error::Result;

/// How the provider should treat each segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormat {
    Text,
    /// Markup is preserved and only text nodes are translated.
    Html,
}

impl TextFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Html => "html",
        }
    }
}

/// One translated segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub text: String,
    pub detected_source: Option<String>,
}

/// A remote translation service.
///
/// Retries, rate limiting and authentication are the implementation's concern.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Translates `texts` and returns one result per input, in input order.
    async fn translate_batch(
        &self,
        texts: &[String],
        source: &LanguageTag,
        target: &LanguageTag,
        format: TextFormat,
    ) -> Result<Vec<Translation>>;

    /// Lists supported languages with names rendered in `display`.
    async fn supported_languages(&self, display: &LanguageTag) -> Result<Vec<SupportedLanguage>>;

    fn provider_name(&self) -> &str;
}

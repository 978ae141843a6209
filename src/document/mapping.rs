//! Documents that are flat key to text mappings.
//!
//! JSON and YAML share everything except decoding and encoding, which a
//! [`MappingCodec`] supplies. Translation goes through the segment batcher.

use std::io;
use std::marker::PhantomData;
use std::path::Path;

use async_trait::async_trait;

use super::{DocumentFormat, DocumentTranslator, OutputTarget, ProviderHandle, read_source};
use crate::error::{Result, TranslateError};
use crate::translation::{LanguageTag, Segments, convert};

/// Serialization of one mapping format.
pub trait MappingCodec: Send + Sync + 'static {
    const FORMAT: DocumentFormat;

    /// Decodes `content`; the error explains why it is not this format.
    fn decode(content: &str) -> std::result::Result<Segments, String>;

    fn encode(segments: &Segments) -> io::Result<String>;
}

pub struct MappingDocument<C> {
    provider: ProviderHandle,
    original: Option<Segments>,
    translation: Option<Segments>,
    codec: PhantomData<fn() -> C>,
}

impl<C: MappingCodec> MappingDocument<C> {
    pub const fn new(provider: ProviderHandle) -> Self {
        Self {
            provider,
            original: None,
            translation: None,
            codec: PhantomData,
        }
    }

    pub const fn original(&self) -> Option<&Segments> {
        self.original.as_ref()
    }

    pub const fn translation(&self) -> Option<&Segments> {
        self.translation.as_ref()
    }

    /// Replaces the parsed source mapping and drops any translation of the old one.
    pub fn set_original(&mut self, original: Segments) {
        self.original = Some(original);
        self.translation = None;
    }

    pub fn set_translation(&mut self, translation: Segments) {
        self.translation = Some(translation);
    }
}

#[async_trait]
impl<C: MappingCodec> DocumentTranslator for MappingDocument<C> {
    fn format(&self) -> DocumentFormat {
        C::FORMAT
    }

    fn parse_file(&mut self, path: &Path) -> Result<()> {
        let content = read_source(path)?;
        let original = C::decode(&content).map_err(|message| TranslateError::Parse {
            path: path.to_path_buf(),
            format: C::FORMAT,
            message,
        })?;

        self.set_original(original);
        Ok(())
    }

    async fn translate(&mut self, source: &LanguageTag, target: &LanguageTag) -> Result<()> {
        self.translation = None;
        let original = self.original.as_ref().ok_or(TranslateError::NotParsed)?;
        let translation = convert(self.provider.as_deref(), original, source, target).await?;
        self.translation = Some(translation);
        Ok(())
    }

    fn save_result(&self, target: &OutputTarget) -> Result<()> {
        let translation = self
            .translation
            .as_ref()
            .ok_or(TranslateError::NotTranslated)?;
        let rendered = C::encode(translation).map_err(|source| TranslateError::Write {
            target: target.to_string(),
            source,
        })?;
        target.write(&rendered)
    }
}

//! Format adapters: parse a document, translate it, save the result.
//!
//! JSON and YAML documents are flat string-to-string mappings that share one
//! [`MappingDocument`] and are translated through the segment batcher. HTML
//! documents are sent whole as a single HTML-aware segment.

mod dispatch;
mod html;
mod json;
mod mapping;
mod output;
mod yaml;

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::translation::{LanguageTag, TranslationProvider};

pub use dispatch::open;
pub use html::HtmlDocument;
pub use json::{JsonCodec, JsonDocument};
pub use mapping::{MappingCodec, MappingDocument};
pub use output::OutputTarget;
pub use yaml::{YamlCodec, YamlDocument};

/// Shared handle to the provider; `None` models an unconfigured client.
pub type ProviderHandle = Option<Arc<dyn TranslationProvider>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
    Html,
}

impl DocumentFormat {
    /// Order in which formats are tried. HTML accepts any readable file and must stay last.
    pub const PRIORITY: [Self; 3] = [Self::Json, Self::Yaml, Self::Html];

    /// Creates an empty adapter for this format.
    pub fn translator(self, provider: ProviderHandle) -> Box<dyn DocumentTranslator> {
        match self {
            Self::Json => Box::new(JsonDocument::new(provider)),
            Self::Yaml => Box::new(YamlDocument::new(provider)),
            Self::Html => Box::new(HtmlDocument::new(provider)),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
            Self::Html => "HTML",
        })
    }
}

/// Parse, translate and save one document.
///
/// An adapter is used for a single document: `parse_file`, then `translate`,
/// then `save_result`.
#[async_trait]
pub trait DocumentTranslator: Send {
    fn format(&self) -> DocumentFormat;

    fn parse_file(&mut self, path: &Path) -> Result<()>;

    async fn translate(&mut self, source: &LanguageTag, target: &LanguageTag) -> Result<()>;

    fn save_result(&self, target: &OutputTarget) -> Result<()>;
}

pub(crate) fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| crate::error::TranslateError::Read {
        path: path.to_path_buf(),
        source,
    })
}

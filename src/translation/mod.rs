mod batcher;
mod client;
mod language;
pub mod mock;
mod provider;

pub use batcher::{MAX_SEGMENTS_PER_REQUEST, Segments, convert};
pub use client::{DEFAULT_ENDPOINT, GoogleTranslateClient};
pub use language::{LanguageTag, SupportedLanguage, print_languages};
pub use provider::{TextFormat, Translation, TranslationProvider};

//! Deterministic in-process provider for tests and dry runs.
//!
//! ```ignore
//! let mock = MockProvider::new(MockMode::Suffix);
//! let out = mock.translate_batch(&["hello".into()], &en, &fr, TextFormat::Text).await?;
//! assert_eq!(out[0].text, "hello_fr");
//! ```

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use super::language::{LanguageTag, SupportedLanguage};
use super::provider::{TextFormat, Translation, TranslationProvider};
use crate::error::{Result, TranslateError};

#[derive(Debug, Clone)]
pub enum MockMode {
    /// Append the target tag: "hello" -> "hello_fr".
    Suffix,
    /// Look the text up; unknown texts are returned unchanged.
    Mappings(HashMap<String, String>),
    /// Every call fails with this message.
    Error(String),
    /// Like `Suffix` but drops the last result of every batch.
    Truncate,
}

/// A recorded provider call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockCall {
    pub texts: Vec<String>,
    pub source: String,
    pub target: String,
    pub format: TextFormat,
}

#[derive(Debug)]
pub struct MockProvider {
    mode: MockMode,
    fail_on_call: Option<usize>,
    calls: Mutex<Vec<MockCall>>,
}

impl MockProvider {
    pub fn new(mode: MockMode) -> Self {
        Self {
            mode,
            fail_on_call: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Makes the call with this zero-based index fail with a provider error.
    #[must_use]
    pub const fn fail_on_call(mut self, index: usize) -> Self {
        self.fail_on_call = Some(index);
        self
    }

    /// Every `translate_batch` call so far, including failed ones.
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn call_sizes(&self) -> Vec<usize> {
        self.calls().iter().map(|call| call.texts.len()).collect()
    }

    fn translate_one(&self, text: &str, target: &LanguageTag) -> String {
        match &self.mode {
            MockMode::Mappings(map) => map.get(text).cloned().unwrap_or_else(|| text.to_string()),
            MockMode::Suffix | MockMode::Truncate | MockMode::Error(_) => {
                format!("{text}_{target}")
            }
        }
    }
}

#[async_trait]
impl TranslationProvider for MockProvider {
    async fn translate_batch(
        &self,
        texts: &[String],
        source: &LanguageTag,
        target: &LanguageTag,
        format: TextFormat,
    ) -> Result<Vec<Translation>> {
        let index = {
            let mut calls = self.calls.lock().unwrap_or_else(PoisonError::into_inner);
            calls.push(MockCall {
                texts: texts.to_vec(),
                source: source.to_string(),
                target: target.to_string(),
                format,
            });
            calls.len() - 1
        };

        if let MockMode::Error(message) = &self.mode {
            return Err(TranslateError::Provider(message.clone()));
        }
        if self.fail_on_call == Some(index) {
            return Err(TranslateError::Provider(format!("mock failure on call {index}")));
        }

        let mut results: Vec<Translation> = texts
            .iter()
            .map(|text| Translation {
                text: self.translate_one(text, target),
                detected_source: Some(source.to_string()),
            })
            .collect();

        if matches!(self.mode, MockMode::Truncate) {
            results.pop();
        }

        Ok(results)
    }

    async fn supported_languages(&self, _display: &LanguageTag) -> Result<Vec<SupportedLanguage>> {
        if let MockMode::Error(message) = &self.mode {
            return Err(TranslateError::Provider(message.clone()));
        }

        Ok([("de", "German"), ("en", "English"), ("fr", "French")]
            .into_iter()
            .map(|(tag, name)| SupportedLanguage {
                tag: tag.to_string(),
                name: name.to_string(),
            })
            .collect())
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}

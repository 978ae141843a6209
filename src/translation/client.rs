use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::language::{LanguageTag, SupportedLanguage};
use super::provider::{TextFormat, Translation, TranslationProvider};
use crate::error::{Result, TranslateError};

/// Google Cloud Translation v2 REST endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://translation.googleapis.com/language/translate/v2";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct TranslateRequestBody<'a> {
    q: &'a [String],
    source: &'a str,
    target: &'a str,
    format: &'static str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    data: TranslateData,
}

#[derive(Debug, Deserialize)]
struct TranslateData {
    translations: Vec<TranslatedText>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslatedText {
    translated_text: String,
    detected_source_language: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LanguagesResponse {
    data: LanguagesData,
}

#[derive(Debug, Deserialize)]
struct LanguagesData {
    languages: Vec<LanguageEntry>,
}

#[derive(Debug, Deserialize)]
struct LanguageEntry {
    language: String,
    name: Option<String>,
}

pub struct GoogleTranslateClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl GoogleTranslateClient {
    pub fn new(api_key: String, endpoint: Option<String>) -> Result<Self> {
        if api_key.trim().is_empty() {
            return Err(TranslateError::Configuration(
                "API key cannot be empty".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                TranslateError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            endpoint: endpoint
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
                .trim_end_matches('/')
                .to_string(),
            api_key,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(TranslateError::Provider(format!(
            "API request failed with status {status}: {body}"
        )))
    }
}

impl std::fmt::Debug for GoogleTranslateClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleTranslateClient")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"***")
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl TranslationProvider for GoogleTranslateClient {
    async fn translate_batch(
        &self,
        texts: &[String],
        source: &LanguageTag,
        target: &LanguageTag,
        format: TextFormat,
    ) -> Result<Vec<Translation>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}?key={}", self.endpoint, self.api_key);
        let body = TranslateRequestBody {
            q: texts,
            source: source.as_str(),
            target: target.as_str(),
            format: format.as_str(),
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                TranslateError::Provider(format!(
                    "Failed to connect to API endpoint {}: {}",
                    self.endpoint,
                    e.without_url()
                ))
            })?;
        let response = Self::check_status(response).await?;

        let text = response.text().await?;
        parse_translate_response(&text)
    }

    async fn supported_languages(&self, display: &LanguageTag) -> Result<Vec<SupportedLanguage>> {
        let url = format!(
            "{}/languages?key={}&target={}",
            self.endpoint, self.api_key, display
        );

        let response = self.client.get(&url).send().await.map_err(|e| {
            TranslateError::Provider(format!(
                "Failed to connect to API endpoint {}: {}",
                self.endpoint,
                e.without_url()
            ))
        })?;
        let response = Self::check_status(response).await?;

        let text = response.text().await?;
        parse_languages_response(&text)
    }

    fn provider_name(&self) -> &str {
        "Google Translate"
    }
}

fn parse_translate_response(body: &str) -> Result<Vec<Translation>> {
    let response: TranslateResponse = serde_json::from_str(body)
        .map_err(|e| TranslateError::Provider(format!("Invalid API response: {e}")))?;

    Ok(response
        .data
        .translations
        .into_iter()
        .map(|t| Translation {
            text: t.translated_text,
            detected_source: t.detected_source_language,
        })
        .collect())
}

fn parse_languages_response(body: &str) -> Result<Vec<SupportedLanguage>> {
    let response: LanguagesResponse = serde_json::from_str(body)
        .map_err(|e| TranslateError::Provider(format!("Invalid API response: {e}")))?;

    Ok(response
        .data
        .languages
        .into_iter()
        .map(|entry| SupportedLanguage {
            name: entry.name.unwrap_or_else(|| entry.language.clone()),
            tag: entry.language,
        })
        .collect())
}

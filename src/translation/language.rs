//! Language tag validation and supported-language listing.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TranslateError};
use crate::ui::Style;

/// A validated BCP-47 style language tag, e.g. `en`, `fr`, `zh-TW`, `sr-Latn`.
///
/// Tags are stored in canonical casing: the language subtag lowercase,
/// a four-letter script subtag titlecase and a two-letter region uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageTag(String);

impl LanguageTag {
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = || TranslateError::InvalidLanguage(input.to_string());
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(invalid());
        }

        let mut canonical = Vec::new();
        for (index, subtag) in trimmed.split(['-', '_']).enumerate() {
            if subtag.is_empty() || subtag.len() > 8 {
                return Err(invalid());
            }
            if !subtag.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(invalid());
            }
            if index == 0 {
                if subtag.len() < 2 || !subtag.chars().all(|c| c.is_ascii_alphabetic()) {
                    return Err(invalid());
                }
                canonical.push(subtag.to_ascii_lowercase());
            } else {
                canonical.push(canonical_subtag(subtag));
            }
        }

        Ok(Self(canonical.join("-")))
    }

    /// English, used for language display names.
    pub fn english() -> Self {
        Self("en".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn canonical_subtag(subtag: &str) -> String {
    match subtag.len() {
        2 if subtag.chars().all(|c| c.is_ascii_alphabetic()) => subtag.to_ascii_uppercase(),
        4 if subtag.chars().all(|c| c.is_ascii_alphabetic()) => {
            let lower = subtag.to_ascii_lowercase();
            let mut chars = lower.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_ascii_uppercase().to_string() + chars.as_str()
            })
        }
        _ => subtag.to_ascii_lowercase(),
    }
}

impl FromStr for LanguageTag {
    type Err = TranslateError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A language the provider can translate from or to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedLanguage {
    pub tag: String,
    pub name: String,
}

/// Prints the provider's languages to stdout, one `<tag>: <name>` per line.
pub fn print_languages(languages: &[SupportedLanguage]) {
    print!("{}", render_languages(languages, Style::stdout()));
}

fn render_languages(languages: &[SupportedLanguage], style: Style) -> String {
    languages
        .iter()
        .map(|language| {
            format!(
                "{}: {}\n",
                style.tag(&language.tag),
                style.language_name(&language.name)
            )
        })
        .collect()
}

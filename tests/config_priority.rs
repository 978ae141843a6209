#![allow(clippy::unwrap_used)]
//! Config priority contract tests.
//!
//! Priority order (highest to lowest):
//! 1. CLI arguments
//! 2. Config file defaults
//! 3. Built-in defaults (`en` for both languages)

use translate_cli::TranslateError;
use translate_cli::config::{
    ConfigFile, DefaultsConfig, ProviderConfig, ResolveOptions, resolve_config,
};
use translate_cli::translation::LanguageTag;

fn make_config_with_defaults() -> ConfigFile {
    ConfigFile {
        translate: DefaultsConfig {
            source: Some("ja".to_string()),
            target: Some("de".to_string()),
        },
        provider: ProviderConfig {
            endpoint: Some("http://test.local/v2".to_string()),
        },
    }
}

fn tag(value: &str) -> Option<LanguageTag> {
    Some(LanguageTag::parse(value).unwrap())
}

fn with_key() -> ResolveOptions {
    ResolveOptions {
        api_key: Some("test-key".to_string()),
        ..ResolveOptions::default()
    }
}

#[test]
fn test_cli_languages_override_config_file() {
    let options = ResolveOptions {
        source: tag("fr"),
        target: tag("zh-TW"),
        ..with_key()
    };

    let resolved = resolve_config(&options, &make_config_with_defaults()).unwrap();

    assert_eq!(resolved.source.as_str(), "fr");
    assert_eq!(resolved.target.as_str(), "zh-TW");
}

#[test]
fn test_config_file_used_when_cli_omitted() {
    let resolved = resolve_config(&with_key(), &make_config_with_defaults()).unwrap();

    assert_eq!(resolved.source.as_str(), "ja");
    assert_eq!(resolved.target.as_str(), "de");
    assert_eq!(resolved.endpoint.as_deref(), Some("http://test.local/v2"));
}

#[test]
fn test_partial_cli_override() {
    let options = ResolveOptions {
        target: tag("es"),
        ..with_key()
    };

    let resolved = resolve_config(&options, &make_config_with_defaults()).unwrap();

    assert_eq!(resolved.source.as_str(), "ja");
    assert_eq!(resolved.target.as_str(), "es");
}

#[test]
fn test_builtin_defaults_without_config() {
    let resolved = resolve_config(&with_key(), &ConfigFile::default()).unwrap();

    assert_eq!(resolved.source.as_str(), "en");
    assert_eq!(resolved.target.as_str(), "en");
    assert!(resolved.endpoint.is_none());
}

#[test]
fn test_missing_key_wins_over_invalid_languages() {
    let config = ConfigFile {
        translate: DefaultsConfig {
            source: Some("not a tag".to_string()),
            target: None,
        },
        ..ConfigFile::default()
    };

    let err = resolve_config(&ResolveOptions::default(), &config).unwrap_err();

    assert!(matches!(err, TranslateError::Configuration(_)));
    assert!(err.to_string().contains("GCLOUD_API_KEY"));
}

#[test]
fn test_invalid_config_file_tag_is_configuration_error() {
    let config = ConfigFile {
        translate: DefaultsConfig {
            source: None,
            target: Some("not a tag".to_string()),
        },
        ..ConfigFile::default()
    };

    let err = resolve_config(&with_key(), &config).unwrap_err();

    assert!(matches!(err, TranslateError::Configuration(_)));
    assert!(err.to_string().contains("'target'"));
}

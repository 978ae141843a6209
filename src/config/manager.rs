use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::error::TranslateError;
use crate::paths;
use crate::translation::LanguageTag;
use crate::ui::Style;

/// Environment variable holding the Google Cloud API key.
pub const API_KEY_ENV: &str = "GCLOUD_API_KEY";

const DEFAULT_LANGUAGE: &str = "en";

/// Default settings in the `[translate]` section of config.toml.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DefaultsConfig {
    /// Default source language tag.
    pub source: Option<String>,
    /// Default target language tag.
    pub target: Option<String>,
}

/// Settings in the `[provider]` section of config.toml.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderConfig {
    /// Override for the Translation API endpoint (proxies, emulators).
    pub endpoint: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/translate/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub translate: DefaultsConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
}

/// Resolved configuration after merging CLI arguments, config file and environment.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub api_key: String,
    pub endpoint: Option<String>,
    pub source: LanguageTag,
    pub target: LanguageTag,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Value of the credential environment variable, if any.
    pub api_key: Option<String>,
    pub source: Option<LanguageTag>,
    pub target: Option<LanguageTag>,
}

/// Returns the credential, treating an empty value as absent.
pub fn resolve_api_key(api_key: Option<&str>) -> crate::error::Result<String> {
    api_key
        .filter(|key| !key.trim().is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            TranslateError::Configuration(format!(
                "You need to set a Google Cloud API key in the {API_KEY_ENV} environment variable\n\n  \
                 export {API_KEY_ENV}=\"your-api-key\""
            ))
        })
}

/// Resolves configuration. CLI options take precedence over config file values.
///
/// The credential is checked before anything else.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> crate::error::Result<ResolvedConfig> {
    let api_key = resolve_api_key(options.api_key.as_deref())?;

    let source = resolve_language(
        options.source.as_ref(),
        config_file.translate.source.as_deref(),
        "source",
    )?;
    let target = resolve_language(
        options.target.as_ref(),
        config_file.translate.target.as_deref(),
        "target",
    )?;

    Ok(ResolvedConfig {
        api_key,
        endpoint: config_file.provider.endpoint.clone(),
        source,
        target,
    })
}

fn resolve_language(
    cli: Option<&LanguageTag>,
    file: Option<&str>,
    field: &str,
) -> crate::error::Result<LanguageTag> {
    if let Some(tag) = cli {
        return Ok(tag.clone());
    }

    LanguageTag::parse(file.unwrap_or(DEFAULT_LANGUAGE)).map_err(|_| {
        TranslateError::Configuration(format!(
            "Invalid '{field}' language tag in config file: '{}'",
            file.unwrap_or_default()
        ))
    })
}

/// Loads the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/translate/config.toml`
    /// or `~/.config/translate/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Self {
        Self {
            config_path: paths::config_file(),
        }
    }

    pub const fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!("Failed to parse config file: {}", self.config_path.display())
        })?;

        Ok(config_file)
    }

    /// Loads the config file, falling back to defaults.
    ///
    /// A missing file is silent; an unreadable or malformed one is reported.
    pub fn load_or_default(&self) -> ConfigFile {
        if !self.config_path.exists() {
            return ConfigFile::default();
        }

        self.load().unwrap_or_else(|err| {
            crate::warn!("{} {err:#}; using default settings", Style::stderr().warning("Warning:"));
            ConfigFile::default()
        })
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

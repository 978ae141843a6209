use anyhow::{Result, anyhow};
use std::sync::Arc;

use super::args::Args;
use super::commands::{languages, translate};
use super::terminate::Terminator;
use crate::config::{
    API_KEY_ENV, ConfigFile, ResolveOptions, ResolvedConfig, resolve_api_key, resolve_config,
};
use crate::document::OutputTarget;
use crate::translation::{GoogleTranslateClient, TranslationProvider};

/// Builds the Google Cloud Translation client from resolved settings.
pub fn connect_google(config: &ResolvedConfig) -> Result<Arc<dyn TranslationProvider>> {
    let client = GoogleTranslateClient::new(config.api_key.clone(), config.endpoint.clone())?;
    Ok(Arc::new(client))
}

/// Runs one invocation. Any fatal error is handed to `terminator`.
///
/// The credential is checked first. Only then is `load_config` called to read
/// the defaults file, and `connect` to create the provider; neither is called
/// when the credential is missing.
pub async fn run<L, C>(args: Args, load_config: L, connect: C, terminator: &mut dyn Terminator)
where
    L: FnOnce() -> ConfigFile,
    C: FnOnce(&ResolvedConfig) -> Result<Arc<dyn TranslationProvider>>,
{
    if let Err(err) = execute(args, load_config, connect).await {
        terminator.terminate(err);
    }
}

async fn execute<L, C>(args: Args, load_config: L, connect: C) -> Result<()>
where
    L: FnOnce() -> ConfigFile,
    C: FnOnce(&ResolvedConfig) -> Result<Arc<dyn TranslationProvider>>,
{
    let api_key = resolve_api_key(std::env::var(API_KEY_ENV).ok().as_deref())?;
    let config = load_config();

    let options = ResolveOptions {
        api_key: Some(api_key),
        source: args.source,
        target: args.target,
    };
    let resolved = resolve_config(&options, &config)?;
    let provider = connect(&resolved)?;

    if args.list_languages {
        return languages::run_languages(provider.as_ref()).await;
    }

    let input = args
        .input
        .ok_or_else(|| anyhow!("Missing required option: -i <path>"))?;

    let options = translate::TranslateOptions {
        input,
        output: OutputTarget::from_path(args.output),
        source: resolved.source,
        target: resolved.target,
    };
    translate::run_translate(options, provider).await
}

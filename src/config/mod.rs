//! Configuration file loading and option resolution.

mod manager;

pub use manager::{
    API_KEY_ENV, ConfigFile, ConfigManager, DefaultsConfig, ProviderConfig, ResolveOptions,
    ResolvedConfig, resolve_api_key, resolve_config,
};

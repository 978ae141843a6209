//! Location of the optional defaults file.
//!
//! XDG conventions are used on every platform, so `~/.config/translate`
//! rather than `~/Library/Application Support` on macOS.

use std::path::PathBuf;

const APP_DIR: &str = "translate";
const CONFIG_FILE: &str = "config.toml";

/// `$XDG_CONFIG_HOME/translate`, else `~/.config/translate`.
///
/// Falls back to `./.config/translate` when the home directory is unknown,
/// which only happens in stripped-down containers.
pub fn config_dir() -> PathBuf {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|xdg| !xdg.is_empty())
        .map_or_else(
            || dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"),
            PathBuf::from,
        );
    base.join(APP_DIR)
}

/// Path of the defaults file read at startup.
pub fn config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}

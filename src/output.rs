//! Where the CLI's own messages go.
//!
//! A translated document or a language listing may be written to stdout, so
//! everything else (status lines, warnings, the spinner) is written to stderr.
//! `-q` silences status lines and the spinner; warnings and errors are always
//! shown. Colors are used only on terminals and never when `NO_COLOR` is set.

use std::io::IsTerminal;
use std::sync::OnceLock;

static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

/// Which of the standard streams are attached to a terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Terminals {
    pub stdout: bool,
    pub stderr: bool,
}

impl Terminals {
    pub fn detect() -> Self {
        Self {
            stdout: std::io::stdout().is_terminal(),
            stderr: std::io::stderr().is_terminal(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct OutputConfig {
    /// Suppress status lines.
    pub quiet: bool,
    /// Draw the spinner.
    pub progress: bool,
    /// Colorize what goes to stdout (language listings).
    pub stdout_color: bool,
    /// Colorize status lines, warnings and errors.
    pub stderr_color: bool,
}

impl OutputConfig {
    /// Builds the configuration from the `-q` flag, `NO_COLOR` and the attached terminals.
    pub const fn from_flags(quiet: bool, no_color: bool, terminals: Terminals) -> Self {
        Self {
            quiet,
            progress: !quiet && terminals.stderr,
            stdout_color: !no_color && terminals.stdout,
            stderr_color: !no_color && terminals.stderr,
        }
    }

    /// Configuration for the current process.
    pub fn detect(quiet: bool) -> Self {
        // https://no-color.org/: any non-empty value disables color.
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty());
        Self::from_flags(quiet, no_color, Terminals::detect())
    }
}

/// Sets the process-wide configuration. Only the first call has an effect.
pub fn init(config: OutputConfig) {
    let _ = OUTPUT_CONFIG.set(config);
}

/// Before `init` this is the default: status lines on, no spinner, no color.
pub fn config() -> OutputConfig {
    OUTPUT_CONFIG.get().copied().unwrap_or_default()
}

pub fn is_quiet() -> bool {
    config().quiet
}

pub fn show_progress() -> bool {
    config().progress
}

/// Print a status line to stderr unless `-q` was given.
#[macro_export]
macro_rules! status {
    ($($arg:tt)*) => {
        if !$crate::output::is_quiet() {
            eprintln!($($arg)*);
        }
    };
}

/// Print a warning to stderr, even with `-q`.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        eprintln!($($arg)*);
    };
}

//! Colors for the few things the CLI prints about a run.
//!
//! A `Style` is bound to one output stream and renders plain text when that
//! stream should not be colored (see [`crate::output`]).

use owo_colors::OwoColorize;
use std::fmt::Display;

use crate::document::DocumentFormat;
use crate::translation::LanguageTag;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    color: bool,
}

impl Style {
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    /// Never colors.
    pub const fn plain() -> Self {
        Self::new(false)
    }

    /// For documents and listings written to stdout.
    pub fn stdout() -> Self {
        Self::new(crate::output::config().stdout_color)
    }

    /// For status lines, the spinner, warnings and errors.
    pub fn stderr() -> Self {
        Self::new(crate::output::config().stderr_color)
    }

    fn paint<T: Display>(self, text: T, colored: impl FnOnce(&T) -> String) -> String {
        if self.color {
            colored(&text)
        } else {
            text.to_string()
        }
    }

    /// Input and output paths.
    pub fn path<T: Display>(self, text: T) -> String {
        self.paint(text, |t| t.cyan().to_string())
    }

    pub fn tag<T: Display>(self, text: T) -> String {
        self.paint(text, |t| t.yellow().to_string())
    }

    /// Human-readable language names in `-l` listings.
    pub fn language_name<T: Display>(self, text: T) -> String {
        self.paint(text, |t| t.dimmed().to_string())
    }

    pub fn format(self, format: DocumentFormat) -> String {
        self.paint(format, |t| t.bold().to_string())
    }

    /// `en → fr`
    pub fn direction(self, source: &LanguageTag, target: &LanguageTag) -> String {
        format!("{} → {}", self.tag(source), self.tag(target))
    }

    pub fn success<T: Display>(self, text: T) -> String {
        self.paint(text, |t| t.green().to_string())
    }

    pub fn warning<T: Display>(self, text: T) -> String {
        self.paint(text, |t| t.yellow().bold().to_string())
    }

    pub fn error<T: Display>(self, text: T) -> String {
        self.paint(text, |t| t.red().bold().to_string())
    }
}

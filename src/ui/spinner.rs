use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::Style;
use crate::document::DocumentFormat;
use crate::translation::LanguageTag;

const TICKS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Progress indicator on stderr while the provider is working.
///
/// Hidden when progress output is disabled (quiet mode or a non-terminal
/// stderr). Clears itself when dropped, so an error path never leaves a
/// half-drawn line behind the error message.
pub struct Spinner {
    progress_bar: ProgressBar,
}

impl Spinner {
    /// Spinner for a document translation, e.g. `Translating JSON (en → fr)...`.
    pub fn translating(format: DocumentFormat, source: &LanguageTag, target: &LanguageTag) -> Self {
        Self::start(format!(
            "Translating {} ({})...",
            Style::stderr().format(format),
            Style::stderr().direction(source, target)
        ))
    }

    pub fn fetching_languages() -> Self {
        Self::start("Fetching supported languages...".to_string())
    }

    fn start(message: String) -> Self {
        if !crate::output::show_progress() {
            return Self {
                progress_bar: ProgressBar::hidden(),
            };
        }

        let style = ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(TICKS);

        let progress_bar = ProgressBar::new_spinner();
        progress_bar.set_style(style);
        progress_bar.set_message(message);
        progress_bar.enable_steady_tick(Duration::from_millis(80));

        Self { progress_bar }
    }

    pub fn stop(&self) {
        self.progress_bar.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.progress_bar.finish_and_clear();
    }
}

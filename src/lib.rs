//! # translate - structured document translation CLI
//!
//! `translate` translates the string values of a JSON or YAML document, or
//! the text of an HTML document, through Google Cloud Translation, keeping
//! keys and markup intact.
//!
//! ## Quick Start
//!
//! ```bash
//! export GCLOUD_API_KEY="your-api-key"
//!
//! # Translate a JSON locale file to French
//! translate -i locales/en.json -o locales/fr.json -s en -t fr
//!
//! # Print the translation of a page to stdout
//! translate -i index.html -t de
//!
//! # List supported languages
//! translate -l
//! ```
//!
//! The format is detected by trying JSON, then YAML, then HTML. HTML accepts
//! any readable file and is always tried last.
//!
//! ## Configuration
//!
//! Defaults are read from `~/.config/translate/config.toml`:
//!
//! ```toml
//! [translate]
//! source = "en"
//! target = "fr"
//!
//! [provider]
//! endpoint = "https://translation.googleapis.com/language/translate/v2"
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// Format adapters and format detection.
pub mod document;

/// Error types.
pub mod error;

/// File system utilities.
pub mod fs;

/// Global output configuration (quiet mode, stderr routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Provider abstraction, Google client and segment batching.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;

pub use error::{Result, TranslateError};

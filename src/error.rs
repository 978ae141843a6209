//! Error types shared by the document adapters, the batcher and the provider client.

use std::path::PathBuf;

use thiserror::Error;

use crate::document::DocumentFormat;

#[derive(Debug, Error)]
pub enum TranslateError {
    /// Missing credential, absent provider handle, unusable config values.
    #[error("{0}")]
    Configuration(String),

    #[error("Invalid language tag: '{0}'")]
    InvalidLanguage(String),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not a valid instance of `format`.
    #[error("Failed to parse {} as {format}: {message}", path.display())]
    Parse {
        path: PathBuf,
        format: DocumentFormat,
        message: String,
    },

    #[error("Translation provider error: {0}")]
    Provider(String),

    #[error("Failed to write {target}: {source}")]
    Write {
        target: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Document has not been parsed yet")]
    NotParsed,

    #[error("Document has not been translated yet")]
    NotTranslated,
}

impl TranslateError {
    /// Process exit code for this error kind (sysexits conventions).
    pub const fn exit_code(&self) -> exitcode::ExitCode {
        match self {
            Self::Configuration(_) | Self::InvalidLanguage(_) => exitcode::CONFIG,
            Self::Read { .. } => exitcode::NOINPUT,
            Self::Parse { .. } => exitcode::DATAERR,
            Self::Provider(_) => exitcode::UNAVAILABLE,
            Self::Write { .. } => exitcode::CANTCREAT,
            Self::NotParsed | Self::NotTranslated => exitcode::SOFTWARE,
        }
    }
}

impl From<reqwest::Error> for TranslateError {
    fn from(err: reqwest::Error) -> Self {
        Self::Provider(err.without_url().to_string())
    }
}

pub type Result<T> = std::result::Result<T, TranslateError>;

//! Command-line interface definitions and handlers.

/// CLI argument parsing with clap.
pub mod args;

/// Command implementations.
pub mod commands;

/// Top-level run loop.
pub mod run;

/// Fatal error reporting.
pub mod terminate;

pub use args::Args;
pub use run::{connect_google, run};
pub use terminate::{ProcessTerminator, Terminator, exit_code};

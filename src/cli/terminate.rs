//! Fatal error reporting.

use crate::error::TranslateError;
use crate::ui::Style;

/// Receives the error that ends a run.
///
/// The binary prints it and exits; tests record it.
pub trait Terminator {
    fn terminate(&mut self, err: anyhow::Error);
}

/// Prints `Error: <message>` to stderr and exits with the mapped code.
pub struct ProcessTerminator;

impl Terminator for ProcessTerminator {
    fn terminate(&mut self, err: anyhow::Error) {
        eprintln!("{} {err:#}", Style::stderr().error("Error:"));
        std::process::exit(exit_code(&err));
    }
}

/// Exit code for a fatal error; unknown errors map to `EX_SOFTWARE`.
pub fn exit_code(err: &anyhow::Error) -> exitcode::ExitCode {
    err.downcast_ref::<TranslateError>()
        .map_or(exitcode::SOFTWARE, TranslateError::exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_for_translate_error() {
        let err = anyhow::Error::new(TranslateError::Provider("down".into()));
        assert_eq!(exit_code(&err), exitcode::UNAVAILABLE);
    }

    #[test]
    fn test_exit_code_survives_context() {
        let err = anyhow::Error::new(TranslateError::Configuration("no key".into()))
            .context("while starting");
        assert_eq!(exit_code(&err), exitcode::CONFIG);
    }

    #[test]
    fn test_exit_code_for_other_errors() {
        assert_eq!(exit_code(&anyhow::anyhow!("boom")), exitcode::SOFTWARE);
    }
}

use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::document::{self, OutputTarget};
use crate::status;
use crate::translation::{LanguageTag, TranslationProvider};
use crate::ui::{Spinner, Style};

pub struct TranslateOptions {
    pub input: PathBuf,
    pub output: OutputTarget,
    pub source: LanguageTag,
    pub target: LanguageTag,
}

/// Parses, translates and saves one document. Nothing is written on failure.
pub async fn run_translate(
    options: TranslateOptions,
    provider: Arc<dyn TranslationProvider>,
) -> Result<()> {
    let mut document = document::open(&options.input, Some(provider))?;
    info!(
        input = %options.input.display(),
        format = %document.format(),
        source = %options.source,
        target = %options.target,
        "translating document"
    );

    let spinner = Spinner::translating(document.format(), &options.source, &options.target);
    let translated = document.translate(&options.source, &options.target).await;
    spinner.stop();
    translated?;

    document.save_result(&options.output)?;

    if let Some(path) = options.output.path() {
        let style = Style::stderr();
        status!(
            "{} {}",
            style.success("Translated successfully and saved into"),
            style.path(path.display())
        );
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::TranslateError;
    use crate::translation::mock::{MockMode, MockProvider};
    use std::fs;
    use tempfile::TempDir;

    fn options(input: PathBuf, output: PathBuf) -> TranslateOptions {
        TranslateOptions {
            input,
            output: OutputTarget::File(output),
            source: LanguageTag::english(),
            target: LanguageTag::parse("fr").unwrap(),
        }
    }

    #[tokio::test]
    async fn test_run_translate_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("demo.yml");
        let output = temp_dir.path().join("demo.fr.yml");
        fs::write(&input, "title: Welcome\n").unwrap();

        let provider = Arc::new(MockProvider::new(MockMode::Suffix));
        run_translate(options(input, output.clone()), provider)
            .await
            .unwrap();

        assert_eq!(fs::read_to_string(output).unwrap(), "title: Welcome_fr\n");
    }

    #[tokio::test]
    async fn test_provider_failure_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("demo.json");
        let output = temp_dir.path().join("out.json");
        fs::write(&input, r#"{"a":"b"}"#).unwrap();

        let provider = Arc::new(MockProvider::new(MockMode::Error("offline".into())));
        let err = run_translate(options(input, output.clone()), provider)
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<TranslateError>(),
            Some(TranslateError::Provider(_))
        ));
        assert!(!output.exists());
    }
}

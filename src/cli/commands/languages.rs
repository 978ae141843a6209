//! Supported-language listing command handler.

use anyhow::Result;

use crate::translation::{LanguageTag, TranslationProvider, print_languages};
use crate::ui::Spinner;

/// Prints every language the provider supports, with English names.
pub async fn run_languages(provider: &dyn TranslationProvider) -> Result<()> {
    let spinner = Spinner::fetching_languages();
    let languages = provider.supported_languages(&LanguageTag::english()).await;
    spinner.stop();

    print_languages(&languages?);
    Ok(())
}

use std::path::Path;

use tracing::debug;

use super::{DocumentFormat, DocumentTranslator, ProviderHandle};
use crate::error::Result;

/// Opens `path` with the first adapter whose parser accepts it.
///
/// Formats are tried in [`DocumentFormat::PRIORITY`] order. HTML accepts any
/// readable file, so its error (an unreadable or missing file) is the one
/// surfaced when nothing matches.
pub fn open(path: &Path, provider: ProviderHandle) -> Result<Box<dyn DocumentTranslator>> {
    let [selective @ .., catch_all] = DocumentFormat::PRIORITY;

    for format in selective {
        let mut document = format.translator(provider.clone());
        match document.parse_file(path) {
            Ok(()) => {
                debug!(path = %path.display(), %format, "detected document format");
                return Ok(document);
            }
            Err(err) => debug!(path = %path.display(), %format, error = %err, "format mismatch"),
        }
    }

    let mut document = catch_all.translator(provider);
    document.parse_file(path)?;
    debug!(path = %path.display(), format = %catch_all, "falling back to catch-all format");
    Ok(document)
}

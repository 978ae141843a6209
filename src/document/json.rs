use std::io;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::DocumentFormat;
use super::mapping::{MappingCodec, MappingDocument};
use crate::translation::Segments;

/// A flat JSON object of string values.
pub type JsonDocument = MappingDocument<JsonCodec>;

pub struct JsonCodec;

impl MappingCodec for JsonCodec {
    const FORMAT: DocumentFormat = DocumentFormat::Json;

    fn decode(content: &str) -> Result<Segments, String> {
        serde_json::from_str(content).map_err(|e| e.to_string())
    }

    /// Four-space indentation and a trailing newline.
    fn encode(segments: &Segments) -> io::Result<String> {
        let mut buffer = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
        segments.serialize(&mut serializer)?;

        let mut rendered = String::from_utf8_lossy(&buffer).into_owned();
        rendered.push('\n');
        Ok(rendered)
    }
}

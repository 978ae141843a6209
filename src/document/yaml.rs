use std::io;

use serde_yaml::Value;

use super::DocumentFormat;
use super::mapping::{MappingCodec, MappingDocument};
use crate::translation::Segments;

/// A flat YAML mapping of string values. An empty or null document is an empty mapping.
pub type YamlDocument = MappingDocument<YamlCodec>;

pub struct YamlCodec;

impl MappingCodec for YamlCodec {
    const FORMAT: DocumentFormat = DocumentFormat::Yaml;

    fn decode(content: &str) -> Result<Segments, String> {
        parse_segments(content)
    }

    fn encode(segments: &Segments) -> io::Result<String> {
        serde_yaml::to_string(segments).map_err(io::Error::other)
    }
}

/// Parses `content` and checks it is a mapping of strings to strings.
///
/// Arbitrary text such as HTML parses as a YAML scalar, and a single line of
/// markup containing `: ` parses as a one-entry mapping. The shape check and
/// the markup check are what keep such input from being selected as YAML.
/// Values may still contain markup (`title: <b>Welcome</b>`).
fn parse_segments(content: &str) -> Result<Segments, String> {
    if content.trim().is_empty() {
        return Ok(Segments::new());
    }
    if starts_with_markup(content) {
        return Err("document starts with markup".to_string());
    }

    let value: Value = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
    let mapping = match value {
        Value::Null => return Ok(Segments::new()),
        Value::Mapping(mapping) => mapping,
        other => return Err(format!("expected a mapping, found {}", kind(&other))),
    };

    mapping
        .into_iter()
        .map(|(key, value)| match (key, value) {
            (Value::String(key), _) if starts_with_markup(&key) => {
                Err(format!("key '{key}' looks like markup"))
            }
            (Value::String(key), Value::String(value)) => Ok((key, value)),
            (Value::String(key), other) => Err(format!(
                "value of '{key}' must be a string, found {}",
                kind(&other)
            )),
            (other, _) => Err(format!("keys must be strings, found {}", kind(&other))),
        })
        .collect()
}

fn starts_with_markup(text: &str) -> bool {
    text.trim_start().starts_with('<')
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

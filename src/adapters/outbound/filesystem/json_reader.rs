use super::file_reader::read_text;
use crate::ports::outbound::ContentReader;
use crate::shared::error::ReaderError;
use crate::shared::Result;
use anyhow::Context;
use serde_json::Value;
use std::path::Path;

/// JsonFileReader adapter for JSON documents
///
/// Parses the file into a `serde_json::Value` and pretty-prints it back,
/// which both validates the document and normalizes its whitespace and
/// key order. Malformed input fails the whole read.
pub struct JsonFileReader;

impl JsonFileReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentReader for JsonFileReader {
    fn read(&self, path: &Path) -> Result<String> {
        let content = read_text(path)?;

        let document: Value =
            serde_json::from_str(&content).map_err(|e| ReaderError::JsonParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        serde_json::to_string_pretty(&document)
            .with_context(|| format!("Failed to serialize JSON from {}", path.display()))
    }
}

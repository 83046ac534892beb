use super::file_reader::read_text;
use crate::ports::outbound::ContentReader;
use crate::shared::Result;
use std::path::Path;

/// Canonical line separator used to rejoin CSV lines (the platform newline)
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
/// Canonical line separator used to rejoin CSV lines (the platform newline)
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// CsvFileReader adapter for line-oriented CSV files
///
/// The content is split into lines and rejoined with [`LINE_SEPARATOR`],
/// normalizing mixed line endings. Fields are not parsed: commas, quotes
/// and escapes pass through untouched.
pub struct CsvFileReader;

impl CsvFileReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsvFileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentReader for CsvFileReader {
    fn read(&self, path: &Path) -> Result<String> {
        let content = read_text(path)?;
        Ok(split_lines(&content).join(LINE_SEPARATOR))
    }
}

/// Splits text on `\r\n`, `\n` or a lone `\r`, dropping the terminators.
///
/// A terminator at the very end does not open an extra empty line, so
/// `"a\n"` yields `["a"]` while `"a\n\n"` yields `["a", ""]`.
fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += 1;
                if bytes.get(i) == Some(&b'\n') {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }

    if start < bytes.len() {
        lines.push(&text[start..]);
    }

    lines
}

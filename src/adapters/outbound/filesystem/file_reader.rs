use crate::ports::outbound::ContentReader;
use crate::shared::error::ReaderError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Reads a whole file and decodes it as UTF-8 text.
///
/// The file handle is opened and released inside `fs::read`, on success and
/// on failure alike. A leading byte order mark is dropped; it belongs to the
/// encoding, not to the text.
pub(crate) fn read_text(path: &Path) -> Result<String> {
    let mut bytes = fs::read(path).map_err(|e| ReaderError::from_io(path.to_path_buf(), e))?;

    if bytes.starts_with(UTF8_BOM) {
        bytes.drain(..UTF8_BOM.len());
    }

    String::from_utf8(bytes).map_err(|e| {
        ReaderError::InvalidEncoding {
            path: path.to_path_buf(),
            source: e,
        }
        .into()
    })
}

/// TextFileReader adapter for plain-text files
///
/// Returns the file content verbatim.
pub struct TextFileReader;

impl TextFileReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextFileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentReader for TextFileReader {
    fn read(&self, path: &Path) -> Result<String> {
        read_text(path)
    }
}

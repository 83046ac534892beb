use crate::shared::Result;
use std::path::Path;

/// ContentReader port for reading a file as text
///
/// Each implementation applies its own transformation to the file content
/// (verbatim text, line-normalized CSV, re-serialized JSON). Implementations
/// hold no state, so one instance may serve any number of reads.
pub trait ContentReader {
    /// Reads the file at `path` and returns its textual content
    ///
    /// # Arguments
    /// * `path` - Path of the file to read, relative to the working directory or absolute
    ///
    /// # Returns
    /// The full content after the reader's transformation; never a partial read
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist
    /// - The file cannot be read due to permissions or I/O errors
    /// - The content is not valid UTF-8
    /// - The reader parses the content and it is malformed
    fn read(&self, path: &Path) -> Result<String>;
}

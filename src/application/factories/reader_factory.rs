use crate::adapters::outbound::filesystem::{
    CsvFileReader, FileReaderAdapter, JsonFileReader, TextFileReader,
};
use crate::application::dto::FileFormat;

/// Factory for creating content reader adapters
///
/// Call sites receive a `FileReaderAdapter` whatever the format, so the
/// concrete reader is chosen here and nowhere else.
pub struct ReaderFactory;

impl ReaderFactory {
    /// Creates the adapter wrapping the reader for `format`
    ///
    /// # Examples
    /// ```
    /// use file_adapters::application::dto::FileFormat;
    /// use file_adapters::application::factories::ReaderFactory;
    ///
    /// let adapter = ReaderFactory::create(FileFormat::Csv);
    /// ```
    pub fn create(format: FileFormat) -> FileReaderAdapter {
        match format {
            FileFormat::Text => FileReaderAdapter::from_reader(TextFileReader::new()),
            FileFormat::Csv => FileReaderAdapter::from_reader(CsvFileReader::new()),
            FileFormat::Json => FileReaderAdapter::from_reader(JsonFileReader::new()),
        }
    }

    /// Returns the progress message announced before reading a file
    ///
    /// # Examples
    /// ```
    /// use file_adapters::application::dto::FileFormat;
    /// use file_adapters::application::factories::ReaderFactory;
    /// use std::path::Path;
    ///
    /// let message = ReaderFactory::reading_message(FileFormat::Json, Path::new("example.json"));
    /// assert_eq!(message, "📖 Reading JSON file: example.json");
    /// ```
    pub fn reading_message(format: FileFormat, path: &std::path::Path) -> String {
        format!("📖 Reading {} file: {}", format.label(), path.display())
    }
}

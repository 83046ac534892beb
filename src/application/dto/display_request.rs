use super::FileFormat;
use std::path::{Path, PathBuf};

/// One file to read: which reader to use and where the file is
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayEntry {
    pub format: FileFormat,
    pub path: PathBuf,
}

impl DisplayEntry {
    pub fn new(format: FileFormat, path: impl Into<PathBuf>) -> Self {
        Self {
            format,
            path: path.into(),
        }
    }
}

/// DisplayRequest - Internal request DTO for the display use case
///
/// Entries are read and presented strictly in the order they appear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRequest {
    pub entries: Vec<DisplayEntry>,
}

impl DisplayRequest {
    pub fn new(entries: Vec<DisplayEntry>) -> Self {
        Self { entries }
    }

    /// `example.txt`, `example.csv` and `example.json` under `base_dir`
    pub fn with_defaults(base_dir: &Path) -> Self {
        Self::builder().base_dir(base_dir).build()
    }

    pub fn builder() -> DisplayRequestBuilder {
        DisplayRequestBuilder::default()
    }
}

/// Builder for DisplayRequest
///
/// Formats without an explicit path fall back to their default file name.
/// Relative paths are joined onto the base directory; absolute ones are kept.
#[derive(Debug, Default)]
pub struct DisplayRequestBuilder {
    base_dir: Option<PathBuf>,
    text_path: Option<PathBuf>,
    csv_path: Option<PathBuf>,
    json_path: Option<PathBuf>,
}

impl DisplayRequestBuilder {
    pub fn base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    pub fn text_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.text_path = Some(path.into());
        self
    }

    pub fn csv_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.csv_path = Some(path.into());
        self
    }

    pub fn json_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.json_path = Some(path.into());
        self
    }

    pub fn build(self) -> DisplayRequest {
        let base_dir = self.base_dir.unwrap_or_default();

        let entries = FileFormat::ALL
            .iter()
            .map(|&format| {
                let given = match format {
                    FileFormat::Text => self.text_path.as_ref(),
                    FileFormat::Csv => self.csv_path.as_ref(),
                    FileFormat::Json => self.json_path.as_ref(),
                };
                let path = match given {
                    Some(path) => base_dir.join(path),
                    None => base_dir.join(format.default_file_name()),
                };
                DisplayEntry::new(format, path)
            })
            .collect();

        DisplayRequest::new(entries)
    }
}
